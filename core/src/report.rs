use std::io::{self, Write};

use colored::*;
use netprobe_common::network::interface::InterfaceRecord;
use netprobe_common::network::reachability::Reachability;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportStyle {
    /// Color the reachability verdict. Only meant for terminals.
    pub colorize: bool,
}

impl ReportStyle {
    pub fn plain() -> Self {
        Self { colorize: false }
    }

    pub fn for_terminal(is_terminal: bool) -> Self {
        Self { colorize: is_terminal }
    }
}

pub fn write_interfaces<W: Write>(out: &mut W, records: &[InterfaceRecord]) -> io::Result<()> {
    writeln!(out, "Network Interfaces:")?;
    for record in records {
        writeln!(out, "Interface: {}", record.name)?;
        writeln!(out, "  IPv4:    {}", record.ipv4)?;
        writeln!(out, "  MAC:     {}", record.mac)?;
        writeln!(out, "  --------")?;
    }
    Ok(())
}

pub fn write_reachability<W: Write>(
    out: &mut W,
    reachability: Reachability,
    style: ReportStyle,
) -> io::Result<()> {
    let verdict: String = if style.colorize {
        match reachability {
            Reachability::Available => reachability.to_string().green().bold().to_string(),
            Reachability::Unavailable => reachability.to_string().red().bold().to_string(),
        }
    } else {
        reachability.to_string()
    };
    writeln!(out)?;
    writeln!(out, "Internet Access: {verdict}")
}
