//! Counting the mRNA sequences that could encode a protein

use log::debug;

use crate::error::MrnaError;
use crate::sequence::codon::{codon_count, STOP};

/// Multiply `counts` together modulo `modulus`, starting from 1.
///
/// The running product is reduced after every step through a 128-bit
/// intermediate, so no `u64` modulus can overflow.
pub fn product_mod<I>(counts: I, modulus: u64) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let modulus = u128::from(modulus);
    let product = counts
        .into_iter()
        .fold(1 % modulus, |acc, count| acc * u128::from(count) % modulus);
    product as u64
}

/// Number of distinct mRNAs that translate to `protein` (including its stop
/// codon), modulo `modulus`.
pub fn count_mrna_sequences(protein: &str, modulus: u64) -> Result<u64, MrnaError> {
    if modulus == 0 {
        return Err(MrnaError::ZeroModulus);
    }

    let mut counts = Vec::with_capacity(protein.len() + 1);
    for (position, symbol) in protein.chars().chain(std::iter::once(STOP)).enumerate() {
        let count = codon_count(symbol)
            .ok_or(MrnaError::UnrecognizedAminoAcid { symbol, position })?;
        counts.push(count);
    }

    let result = product_mod(counts, modulus);
    debug!(
        "Protein of {} residues has {result} candidate mRNAs (mod {modulus})",
        protein.chars().count()
    );
    Ok(result)
}
