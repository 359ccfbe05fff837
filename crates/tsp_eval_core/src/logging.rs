use std::{fs::File, io::Write};

use env_logger::{Builder, Target, fmt::Formatter};
use log::Level;

use crate::options::{LogFormat, RunOptions};
use crate::{Error, Result};

/// Installs the global logger described by the `--log-*` options.
pub fn init_logger(options: &RunOptions) -> Result<()> {
    build_logger(options)?
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

fn build_logger(options: &RunOptions) -> Result<Builder> {
    let log_format = options.log_format;
    let log_timestamp = options.log_timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(options.log_level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }

            match log_format {
                LogFormat::Compact => {
                    writeln!(buf, "{} {}", level_tag(record.level()), record.args())
                }
                LogFormat::Pretty => writeln!(
                    buf,
                    "{} [{}] {}",
                    level_tag(record.level()),
                    record.target(),
                    record.args()
                ),
            }
        });

    match options.log_output_path() {
        Some(log_path) => {
            let log_file = File::create(log_path).map_err(|e| {
                Error::other(format!(
                    "failed to create log output file {}: {e}",
                    log_path.display()
                ))
            })?;
            builder.target(Target::Pipe(Box::new(log_file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    Ok(builder)
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
