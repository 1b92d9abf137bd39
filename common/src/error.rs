use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnumerationError {
    /// The OS refused to hand out its interface address list.
    #[error("getifaddrs() failed ({0})")]
    AddressList(#[source] std::io::Error),
}
