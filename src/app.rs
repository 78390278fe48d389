use log::{debug, info};

use crate::cli::Args;
use crate::error::MrnaError;
use crate::input::resolve_protein;
use crate::sequence::{count_mrna_sequences, verify_codon_table};

/// Run one invocation: resolve the protein, optionally verify the codon
/// table, and count candidate mRNAs.
pub fn run(args: &Args) -> Result<u64, MrnaError> {
    debug!("Arguments: {args:?}");

    if args.strict {
        info!("Verifying codon table against the standard genetic code");
        verify_codon_table()?;
    }

    let protein = resolve_protein(&args.protein)?;
    info!("Protein length: {}", protein.chars().count());

    let result = count_mrna_sequences(&protein, args.modulo)?;
    info!("Result: {result}");
    Ok(result)
}
