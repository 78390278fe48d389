//! Synonymous codons of the standard genetic code
//!
//! Each amino acid, plus the stop signal, maps to the RNA codons that encode it.
//! The number of synonymous codons is what drives mRNA inference.

use std::collections::HashSet;

use bio_seq::prelude::*;
use bio_seq::translation::{TranslationTable, STANDARD};
use log::{debug, trace};

use crate::error::MrnaError;
use crate::sequence::conversion::{is_rna_base, rna_codon_to_dna};

/// Symbol for the terminal stop codon
pub const STOP: char = '*';

/// Every RNA triplet, grouped by what it translates to
pub const CODON_TABLE: &[(char, &[&str])] = &[
    ('A', &["GCA", "GCC", "GCG", "GCU"]),
    ('C', &["UGC", "UGU"]),
    ('D', &["GAC", "GAU"]),
    ('E', &["GAA", "GAG"]),
    ('F', &["UUC", "UUU"]),
    ('G', &["GGA", "GGC", "GGG", "GGU"]),
    ('H', &["CAC", "CAU"]),
    ('I', &["AUA", "AUC", "AUU"]),
    ('K', &["AAA", "AAG"]),
    ('L', &["CUA", "CUC", "CUG", "CUU", "UUA", "UUG"]),
    ('M', &["AUG"]),
    ('N', &["AAC", "AAU"]),
    ('P', &["CCA", "CCC", "CCG", "CCU"]),
    ('Q', &["CAA", "CAG"]),
    ('R', &["AGA", "AGG", "CGA", "CGC", "CGG", "CGU"]),
    ('S', &["AGC", "AGU", "UCA", "UCC", "UCG", "UCU"]),
    ('T', &["ACA", "ACC", "ACG", "ACU"]),
    ('V', &["GUA", "GUC", "GUG", "GUU"]),
    ('W', &["UGG"]),
    ('Y', &["UAC", "UAU"]),
    (STOP, &["UAA", "UAG", "UGA"]),
];

/// Total number of RNA triplets
pub const TOTAL_CODONS: usize = 64;

/// Get the RNA codons encoding `symbol`, or `None` if it is not in the table
pub fn codons_for(symbol: char) -> Option<&'static [&'static str]> {
    CODON_TABLE
        .iter()
        .find(|(aa, _)| *aa == symbol)
        .map(|&(_, codons)| codons)
}

/// Get the number of synonymous codons for `symbol`
pub fn codon_count(symbol: char) -> Option<u64> {
    codons_for(symbol).map(|codons| codons.len() as u64)
}

/// Translate a single RNA codon with the standard genetic code
pub fn rna_codon_to_amino_acid(codon: &str) -> Option<String> {
    let dna = rna_codon_to_dna(codon);
    if let Ok(codon_seq) = dna.parse::<Seq<Dna>>() {
        if codon_seq.len() == 3 {
            return Some(STANDARD.to_amino(&codon_seq).to_string());
        }
    }
    None
}

/// Check that the table partitions all 64 codons and agrees with the
/// standard genetic code.
pub fn verify_codon_table() -> Result<(), MrnaError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for &(symbol, codons) in CODON_TABLE {
        if codons.is_empty() {
            return Err(MrnaError::InvalidCodonTable(format!(
                "'{symbol}' has no codons"
            )));
        }
        for &codon in codons {
            if codon.len() != 3 || !codon.chars().all(is_rna_base) {
                return Err(MrnaError::InvalidCodonTable(format!(
                    "'{codon}' listed for '{symbol}' is not an RNA triplet"
                )));
            }
            if !seen.insert(codon) {
                return Err(MrnaError::InvalidCodonTable(format!(
                    "'{codon}' is listed more than once"
                )));
            }
        }
    }

    // Distinct valid triplets, so reaching 64 means full coverage
    if seen.len() != TOTAL_CODONS {
        return Err(MrnaError::InvalidCodonTable(format!(
            "table covers {} of {TOTAL_CODONS} codons",
            seen.len()
        )));
    }

    verify_against_standard_code()?;
    debug!("Codon table verified: {} entries, {} codons", CODON_TABLE.len(), seen.len());
    Ok(())
}

fn verify_against_standard_code() -> Result<(), MrnaError> {
    // The translation library has its own spelling for stop; learn it from UAA
    let stop = rna_codon_to_amino_acid("UAA").ok_or_else(|| {
        MrnaError::InvalidCodonTable("cannot translate stop codon UAA".to_string())
    })?;

    for &(symbol, codons) in CODON_TABLE {
        let expected = if symbol == STOP {
            stop.clone()
        } else {
            symbol.to_string()
        };
        for &codon in codons {
            let translated = rna_codon_to_amino_acid(codon).ok_or_else(|| {
                MrnaError::InvalidCodonTable(format!("cannot translate '{codon}'"))
            })?;
            trace!("{codon} -> {translated}");
            if translated != expected {
                return Err(MrnaError::InvalidCodonTable(format!(
                    "'{codon}' is listed for '{symbol}' but translates to '{translated}'"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codon_counts() {
        assert_eq!(codon_count('M'), Some(1));
        assert_eq!(codon_count('W'), Some(1));
        assert_eq!(codon_count('A'), Some(4));
        assert_eq!(codon_count('I'), Some(3));
        assert_eq!(codon_count('L'), Some(6));
        assert_eq!(codon_count('R'), Some(6));
        assert_eq!(codon_count('S'), Some(6));
    }

    #[test]
    fn test_stop_has_three_codons() {
        assert_eq!(codon_count(STOP), Some(3));
        assert_eq!(codons_for(STOP), Some(&["UAA", "UAG", "UGA"][..]));
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(codon_count('X'), None);
        assert_eq!(codon_count('B'), None);
        assert_eq!(codon_count('a'), None);
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(CODON_TABLE.len(), 21);
        let total: usize = CODON_TABLE.iter().map(|(_, codons)| codons.len()).sum();
        assert_eq!(total, TOTAL_CODONS);
        assert!(CODON_TABLE.iter().all(|(_, codons)| !codons.is_empty()));
    }

    #[test]
    fn test_translation_of_known_codons() {
        assert_eq!(rna_codon_to_amino_acid("AUG").as_deref(), Some("M"));
        assert_eq!(rna_codon_to_amino_acid("UGG").as_deref(), Some("W"));
        assert_eq!(rna_codon_to_amino_acid("AU"), None);
    }

    #[test]
    fn test_verify_codon_table() {
        assert!(verify_codon_table().is_ok());
    }
}
