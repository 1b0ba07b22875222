//! Mendelian inheritance engine
//!
//! 1. Validate raw parent genotypes against a configured locus
//! 2. Enumerate the Punnett square into a genotype distribution
//! 3. Fold genotypes into phenotypes under complete dominance
//! 4. Combine two independent loci into a dihybrid table

pub mod error;
pub mod genotype;
pub mod locus;
pub mod punnett;
pub mod phenotype;
pub mod cross;
pub mod dihybrid;
pub mod validate;

pub use error::*;
pub use genotype::*;
pub use locus::*;
pub use punnett::*;
pub use phenotype::*;
pub use cross::*;
pub use dihybrid::*;
pub use validate::*;
