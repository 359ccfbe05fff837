use std::{process::ExitCode, time::Instant};

use log::info;

use tsp_eval_core::{EvaluateRequest, Result, RunOptions, evaluate_tour, logging};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let now = Instant::now();
    let options = RunOptions::from_args()?;
    logging::init_logger(&options)?;
    let request = EvaluateRequest::from_options(&options)?;

    info!("options: {options}");
    info!("request: {request}");

    let evaluation = evaluate_tour(&request)?;
    println!("length={:.6}", evaluation.length);

    info!(
        "output: n={} longest={:.3} time={:.3}s",
        evaluation.n,
        evaluation.metrics.longest,
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
