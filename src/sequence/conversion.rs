//! Base conversion between RNA and DNA spellings

/// Convert an RNA base to the DNA base with the same identity (U becomes T)
pub fn rna_to_dna_base(base: char) -> char {
    match base.to_uppercase().next().unwrap_or(' ') {
        'A' => 'A',
        'U' => 'T',
        'G' => 'G',
        'C' => 'C',
        _ => '?',
    }
}

/// Rewrite an RNA codon in DNA letters so it can be fed to DNA translation tables
pub fn rna_codon_to_dna(codon: &str) -> String {
    codon.chars().map(rna_to_dna_base).collect()
}

/// Whether `base` is one of the four RNA bases
pub fn is_rna_base(base: char) -> bool {
    matches!(base, 'A' | 'C' | 'G' | 'U')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rna_codon_to_dna() {
        assert_eq!(rna_codon_to_dna("AUG"), "ATG");
        assert_eq!(rna_codon_to_dna("uga"), "TGA");
        assert_eq!(rna_codon_to_dna("AXG"), "A?G");
    }

    #[test]
    fn test_is_rna_base() {
        assert!(is_rna_base('U'));
        assert!(!is_rna_base('T'));
        assert!(!is_rna_base('u'));
    }
}
