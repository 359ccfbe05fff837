use std::{
    env,
    path::{Path, PathBuf},
};

use log::LevelFilter;
use tsp_eval_derive::{CliOptions, CliValue, KvDisplay};

use crate::{Error, Result};

/// Parsed command line shared by the `convert-tsplib` and `tour-length` tools.
///
/// Built from an explicit argument iterator; commands turn it into their own
/// request type instead of reading process arguments themselves.
#[derive(Clone, Debug, CliOptions, KvDisplay)]
pub struct RunOptions {
    /// Positional arguments in order.
    #[kv(fmt = "debug")]
    pub positional: Vec<PathBuf>,
    /// Strict TSPLIB parsing for conversion, permutation checks for evaluation.
    #[cli(long = "strict", flag)]
    pub strict: bool,
    /// Structured logging level.
    #[cli(long = "log-level", parse_with = "LogLevel::parse")]
    pub log_level: LogLevel,
    /// Logging output format.
    #[cli(long = "log-format", parse_with = "LogFormat::parse")]
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    #[cli(long = "log-timestamp", flag)]
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    #[cli(long = "log-output")]
    pub log_output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-level")]
pub enum LogLevel {
    Error,
    #[cli(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-format")]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            positional: Vec::new(),
            strict: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: false,
            log_output: String::new(),
        }
    }
}

impl RunOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    pub fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                options.positional.push(PathBuf::from(arg));
                continue;
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = Self::split_arg(raw_name, &mut args);
            if !options.apply_cli_option(&name, value)? {
                return Err(Error::invalid_input(format!(
                    "Unknown option: --{name}\n\n{}",
                    Self::usage()
                )));
            }
        }

        Ok(options)
    }

    pub fn usage() -> String {
        format!(
            concat!(
                "Usage:\n",
                "  convert-tsplib [options] <input.tsp> <output.txt>\n",
                "  tour-length [options] <instance.txt> <tour.txt>\n\n",
                "Options:\n",
                "  --strict[=<bool>]\n",
                "  --no-strict\n",
                "  --log-level <{}>\n",
                "  --log-format <{}>\n",
                "  --log-timestamp[=<bool>]\n",
                "  --no-log-timestamp\n",
                "  --log-output <path>\n",
                "  --help\n",
                "\n",
                "Examples:\n",
                "  convert-tsplib berlin52.tsp data/berlin52.txt\n",
                "  convert-tsplib --strict --log-level=info berlin52.tsp data/berlin52.txt\n",
                "  tour-length --strict data/berlin52.txt best_tour.txt\n",
            ),
            LogLevel::expected(),
            LogFormat::expected(),
        )
    }

    /// Exactly two positional paths, or a usage error.
    pub fn two_paths(&self) -> Result<(&Path, &Path)> {
        match self.positional.as_slice() {
            [first, second] => Ok((first.as_path(), second.as_path())),
            [] | [_] => Err(Error::invalid_input(format!(
                "Expected 2 positional arguments, got {}\n\n{}",
                self.positional.len(),
                Self::usage()
            ))),
            [_, _, extra, ..] => Err(Error::invalid_input(format!(
                "Unexpected argument: {}\n\n{}",
                extra.display(),
                Self::usage()
            ))),
        }
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        let log_output = self.log_output.trim();
        if log_output.is_empty() || log_output == "-" {
            None
        } else {
            Some(Path::new(log_output))
        }
    }
}
