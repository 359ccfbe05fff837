//! `tsplib` reads the node-coordinate subset of TSPLIB problem files.
//!
//! Only what is needed to pull 2-D points out of a `.tsp` file is supported:
//! - free-form header lines, captured when recognised and never validated,
//! - the `NODE_COORD_SECTION` records (`id x y`),
//! - termination at an `EOF` line or the first blank line after the section.
//!
//! # Quickstart
//!
//! ```no_run
//! use tsplib::{ParseMode, problem::TsplibProblem};
//!
//! fn main() -> tsplib::TsplibResult<()> {
//!     let problem = TsplibProblem::from_file("berlin52.tsp", ParseMode::Lenient)?;
//!     for (x, y) in problem.points() {
//!         println!("{x} {y}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod problem;

mod error;
mod mode;

pub use error::{TsplibError, TsplibResult};
pub use mode::ParseMode;
