use std::process::ExitCode;

use clap::Parser;
use human_panic::setup_panic;

use mrna_infer::logging::{init_logging, log_critical_error, log_level, log_shutdown, log_system_info};
use mrna_infer::{run, Args};

fn main() -> ExitCode {
    setup_panic!();

    let args = Args::parse();

    if let Err(e) = init_logging(log_level(args.verbose), args.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
    }
    log_system_info();

    let code = match run(&args) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_critical_error(&e.to_string(), Some(e.context()));
            ExitCode::FAILURE
        }
    };

    log_shutdown();
    code
}
