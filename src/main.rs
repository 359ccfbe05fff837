use std::process::ExitCode;

use log::info;

use tsp_eval_core::{ConvertRequest, Result, RunOptions, convert_tsplib, logging};

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
    let options = RunOptions::from_args()?;
    logging::init_logger(&options)?;
    let request = ConvertRequest::from_options(&options)?;

    info!("request: {request}");

    let summary = convert_tsplib(&request)?;
    println!(
        "Wrote {} points to {}",
        summary.points,
        request.output.display()
    );

    Ok(())
}
