mod calibration;
mod error;
mod input;

use std::process;

use log::info;

use calibration::Scan;
use input::INPUT_PATH;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(total) => println!("{}", total),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> error::Result<u64> {
    let lines = input::read_input_lines(INPUT_PATH)?;
    info!("Loaded {} lines", lines.len());

    let spelled = calibration::total(&lines, Scan::Spelled);
    info!("spelled-out total: {}", spelled);

    Ok(calibration::total(&lines, Scan::default()))
}
