use std::error::Error;
use std::path::Path;
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

/// Environment variable holding the log level
pub const LOG_LEVEL_VAR: &str = "MRNA_LOG_LEVEL";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialize logging to stderr, or to `log_file` when given
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let target = match log_file {
        Some(path) => Target::Pipe(Box::new(std::fs::File::create(path)?)),
        None => Target::Stderr,
    };

    Builder::new()
        .parse_filters(&format!("mrna_infer={level},mrna={level}"))
        .target(target)
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    if let Some(path) = log_file {
        debug!("Log file: {path:?}");
    }

    Ok(())
}

/// Normalize a requested log level, falling back to the default on bad input
pub fn parse_log_level(requested: Option<&str>) -> &'static str {
    let Some(level) = requested else {
        return DEFAULT_LOG_LEVEL;
    };

    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => {
            eprintln!("Invalid log level '{level}', defaulting to '{DEFAULT_LOG_LEVEL}'");
            DEFAULT_LOG_LEVEL
        }
    }
}

/// Log level from the environment, raised to debug when `verbose` is set
pub fn log_level(verbose: bool) -> &'static str {
    if verbose {
        return "debug";
    }
    let requested = std::env::var(LOG_LEVEL_VAR).ok();
    parse_log_level(requested.as_deref())
}

/// Log program information at startup
pub fn log_system_info() {
    info!("=== mrna starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    debug!("Build target: {}", std::env::consts::ARCH);
    debug!("Operating system: {}", std::env::consts::OS);
    debug!("Current working directory: {:?}", std::env::current_dir().unwrap_or_default());
}

pub fn log_shutdown() {
    info!("=== mrna finished at {} ===", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Report a fatal error to the log and to stderr
pub fn log_critical_error(error: &str, context: Option<&str>) {
    if let Some(ctx) = context {
        error!("CRITICAL ERROR [{ctx}]: {error}");
    } else {
        error!("CRITICAL ERROR: {error}");
    }

    // The logger may point at a file or be filtered, so stderr always gets it
    if let Some(ctx) = context {
        eprintln!("[{}] ERROR [{}]: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), ctx, error);
    } else {
        eprintln!("[{}] ERROR: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), error);
    }
}
