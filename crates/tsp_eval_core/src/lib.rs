//! Problem instances, tours, TSPLIB conversion and closed-tour length
//! evaluation for travelling-salesman experiments.
//!
//! Instances and tours are plain text files; see [`Instance::load`] and
//! [`Tour::load`] for the formats. [`TourEvaluator::length`] is the quality
//! metric, and [`convert_tsplib`] turns a TSPLIB `.tsp` file into a plain
//! instance.

mod error;
mod evaluator;
mod io;
pub mod logging;
mod point;
mod runner;

pub(crate) use io::options;

pub use error::{Error, Result};
pub use evaluator::{TourEvaluator, TourMetrics};
pub use io::instance::Instance;
pub use io::options::{LogFormat, LogLevel, RunOptions};
pub use io::tour::Tour;
pub use point::Point;
pub use runner::{
    ConversionSummary, ConvertRequest, EvaluateRequest, Evaluation, convert_tsplib, evaluate_tour,
};
pub use tsplib::ParseMode;
