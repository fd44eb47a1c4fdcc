//! Log output for the stylebuf binary
//!
//! Two sinks are installed. Warnings and errors go to stderr, so they never
//! interleave with the document printed on stdout; `RUST_LOG` raises or
//! narrows that (for example `RUST_LOG=stylebuf::model::editor=debug` to watch
//! every edit, undo and redo). Independently, everything at debug level and
//! above is appended to `logs/stylebuf.log` in the config directory, rotated
//! daily. Without a writable config directory only stderr is used.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE: &str = "stylebuf.log";

/// Install the global subscriber. Call once, before opening the editor.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("stylebuf: file logging disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
