pub mod codon;
pub mod conversion;
pub mod inference;

pub use codon::*;
pub use conversion::*;
pub use inference::*;
