use thiserror::Error;

/// Errors raised while turning user input into typed genotypes and loci.
///
/// The probability engine itself never fails; everything here belongs to
/// the boundary that feeds it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticsError {
    /// One or both parent genotypes were absent or empty
    #[error("Both parent1Genotype and parent2Genotype are required")]
    MissingGenotype,
    /// Genotype string is not one of the four spellings for the locus
    #[error("Invalid genotype format. Must be {allowed}")]
    InvalidGenotype { allowed: String },
    /// Requested locus key is not registered
    #[error("Unknown locus: {0}")]
    UnknownLocus(String),
    /// Locus definition is unusable (bad symbol, empty label, duplicate)
    #[error("Invalid locus definition: {0}")]
    InvalidLocus(String),
    /// Two-locus genotype string could not be split into two loci
    #[error("Invalid dihybrid genotype: {0}")]
    InvalidDihybrid(String),
}
