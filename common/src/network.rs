pub mod interface;
pub mod reachability;
