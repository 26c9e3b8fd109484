//! Convert a wall-clock time from another zone into Frankfurt time (GMT+1).
//!
//! Usage: convert_time "19:00 GMT+7"

use std::process::ExitCode;

use tudor_dashboard::config::CLOCK;
use tudor_dashboard::utils::convert_time;

fn print_usage() {
    eprintln!("Usage: convert_time \"HH:MM [TIMEZONE]\"");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  convert_time \"19:00 GMT+7\"");
    eprintln!("  convert_time \"08:30 NYC\"");
    eprintln!("  convert_time \"14:00\"          (assumes {})", CLOCK.converter_default_zone);
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return ExitCode::FAILURE;
    }

    // Allow both `convert_time "19:00 GMT+7"` and `convert_time 19:00 GMT+7`
    let input = args.join(" ");
    match convert_time(&input) {
        Ok(converted) => {
            println!("Input: {}", input);
            println!("Frankfurt Time ({}): {}", CLOCK.converter_default_zone, converted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("Rejected input {:?}", input);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
