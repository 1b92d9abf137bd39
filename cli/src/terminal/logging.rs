use std::path::Path;

use chrono::Local;
use colored::*;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Diagnostics go to stderr so stdout carries nothing but the report.
pub fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy("");

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(NetprobeFormatter)
        .init();
}

/// `[2024-01-31 12:00:00] [INFO] file.rs:42 [crate::module] message`, colored
/// by level.
pub struct NetprobeFormatter;

impl<S, N> FormatEvent<S, N> for NetprobeFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (label, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("TRCE", |s| s.dimmed()),
            Level::DEBUG => ("DBUG", |s| s.blue()),
            Level::INFO => ("INFO", |s| s.green()),
            Level::WARN => ("WARN", |s| s.yellow()),
            Level::ERROR => ("ERRO", |s| s.red()),
        };

        let mut message = String::new();
        ctx.field_format().format_fields(Writer::new(&mut message), event)?;

        let location: String = match (meta.file(), meta.line()) {
            (Some(file), Some(line)) => format!("{}:{}", short_file(file), line),
            _ => meta.target().to_string(),
        };
        let module: &str = meta.module_path().unwrap_or_else(|| meta.target());
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = compose_line(&timestamp, label, &location, module, &message);

        writeln!(writer, "{}", color_func(line.into()))
    }
}

fn compose_line(timestamp: &str, label: &str, location: &str, module: &str, message: &str) -> String {
    format!("[{timestamp}] [{label}] {location} [{module}] {message}")
}

fn short_file(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
