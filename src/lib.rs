//! mrna-infer - counting the mRNAs that could encode a protein
//!
//! This library looks up how many synonymous codons each amino acid has in
//! the standard genetic code and multiplies them, together with the stop
//! codon, modulo a caller-supplied integer.

pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod sequence;

// Re-export main types for convenience
pub use app::run;
pub use cli::Args;
pub use error::MrnaError;
pub use sequence::count_mrna_sequences;
