use std::path::PathBuf;

use tsp_eval_derive::KvDisplay;
use tsplib::{ParseMode, problem::TsplibProblem};

use crate::{Instance, Point, Result, RunOptions, Tour, TourEvaluator, TourMetrics};

/// TSPLIB file to convert and where to write the plain instance.
#[derive(Clone, Debug, KvDisplay)]
pub struct ConvertRequest {
    #[kv(fmt = "path")]
    pub input: PathBuf,
    #[kv(fmt = "path")]
    pub output: PathBuf,
    pub mode: ParseMode,
}

impl ConvertRequest {
    pub fn from_options(options: &RunOptions) -> Result<Self> {
        let (input, output) = options.two_paths()?;
        Ok(Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            mode: ParseMode::from_strict(options.strict),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConversionSummary {
    pub points: usize,
    pub skipped_lines: usize,
}

/// Extracts the node coordinates of a TSPLIB file and writes them as a plain
/// instance.
pub fn convert_tsplib(request: &ConvertRequest) -> Result<ConversionSummary> {
    let problem = TsplibProblem::from_file(&request.input, request.mode)?;

    if !problem.has_node_coord_section {
        log::warn!(
            "convert: no NODE_COORD_SECTION in {}; writing an empty instance",
            request.input.display()
        );
    }
    if problem.skipped_lines > 0 {
        log::warn!(
            "convert: skipped {} short record(s) in {}",
            problem.skipped_lines,
            request.input.display()
        );
    }
    if let Some(dimension) = problem.dimension
        && dimension != problem.len()
    {
        log::warn!(
            "convert: DIMENSION is {dimension}, but {} coordinates were extracted",
            problem.len()
        );
    }

    let instance: Instance = problem.points().map(Point::from).collect();
    instance.save(&request.output)?;

    Ok(ConversionSummary {
        points: instance.n(),
        skipped_lines: problem.skipped_lines,
    })
}

/// Instance and tour files to evaluate together.
#[derive(Clone, Debug, KvDisplay)]
pub struct EvaluateRequest {
    #[kv(fmt = "path")]
    pub instance: PathBuf,
    #[kv(fmt = "path")]
    pub tour: PathBuf,
    pub strict: bool,
}

impl EvaluateRequest {
    pub fn from_options(options: &RunOptions) -> Result<Self> {
        let (instance, tour) = options.two_paths()?;
        Ok(Self {
            instance: instance.to_path_buf(),
            tour: tour.to_path_buf(),
            strict: options.strict,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub n: usize,
    pub length: f64,
    pub metrics: TourMetrics,
}

/// Loads both files and computes the closed-tour length.
pub fn evaluate_tour(request: &EvaluateRequest) -> Result<Evaluation> {
    let instance = Instance::load(&request.instance)?;
    let tour = Tour::load(&request.tour)?;

    let metrics = TourEvaluator::metrics(&instance, &tour, request.strict)?;
    let length = TourEvaluator::length(&instance, &tour, request.strict)?;

    Ok(Evaluation {
        n: instance.n(),
        length,
        metrics,
    })
}
