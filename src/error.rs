//! Error types for mRNA inference

use std::path::PathBuf;

/// Everything that can go wrong after the command line has been parsed.
#[derive(thiserror::Error, Debug)]
pub enum MrnaError {
    /// The protein contains a letter with no entry in the codon table.
    #[error("unrecognized amino acid '{symbol}' at position {position}")]
    UnrecognizedAminoAcid { symbol: char, position: usize },

    #[error("modulus must be a positive integer")]
    ZeroModulus,

    #[error("failed to read protein file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The built-in codon table disagrees with the standard genetic code.
    #[error("codon table is inconsistent: {0}")]
    InvalidCodonTable(String),
}

impl MrnaError {
    /// Short label used as log context.
    pub fn context(&self) -> &'static str {
        match self {
            MrnaError::UnrecognizedAminoAcid { .. } => "input",
            MrnaError::ZeroModulus => "arguments",
            MrnaError::Io { .. } => "io",
            MrnaError::InvalidCodonTable(_) => "codon table",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_message_names_symbol() {
        let err = MrnaError::UnrecognizedAminoAcid { symbol: 'X', position: 2 };
        assert_eq!(err.to_string(), "unrecognized amino acid 'X' at position 2");
        assert_eq!(err.context(), "input");
    }
}
