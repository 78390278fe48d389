use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_MODULO: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "mrna")]
#[command(version)]
#[command(about = "Infer the number of mRNA sequences that encode a protein", long_about = None)]
pub struct Args {
    /// Input protein or file
    #[arg(value_name = "protein")]
    pub protein: String,

    /// Modulo value
    #[arg(short, long, value_name = "int", default_value_t = DEFAULT_MODULO,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub modulo: u64,

    /// Check the codon table against the standard genetic code before counting
    #[arg(long)]
    pub strict: bool,

    /// Write log output to this file instead of stderr
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
