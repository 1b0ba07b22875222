//! Phenotype distribution under complete dominance

use crate::genetics::genotype::Allele;
use crate::genetics::punnett::GenotypeDistribution;

/// Observable class of a single-gene trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phenotype {
    Dominant,
    Recessive,
}

impl Phenotype {
    pub const ALL: [Phenotype; 2] = [Phenotype::Dominant, Phenotype::Recessive];
}

/// Probability of each phenotype; always exactly two entries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhenotypeDistribution {
    pub dominant: f64,
    pub recessive: f64,
}

impl PhenotypeDistribution {
    pub fn probability(&self, phenotype: Phenotype) -> f64 {
        match phenotype {
            Phenotype::Dominant => self.dominant,
            Phenotype::Recessive => self.recessive,
        }
    }

    /// Dominant first
    pub fn entries(&self) -> [(Phenotype, f64); 2] {
        [
            (Phenotype::Dominant, self.dominant),
            (Phenotype::Recessive, self.recessive),
        ]
    }

    pub fn total_probability(&self) -> f64 {
        self.dominant + self.recessive
    }
}

/// Fold genotype probabilities into phenotypes: any genotype carrying the
/// dominant allele shows the dominant phenotype
pub fn compute_phenotype_distribution(
    genotypes: &GenotypeDistribution,
    dominant: Allele,
) -> PhenotypeDistribution {
    let mut dist = PhenotypeDistribution {
        dominant: 0.0,
        recessive: 0.0,
    };

    for (genotype, probability) in genotypes.iter() {
        if genotype.contains(dominant) {
            dist.dominant += probability;
        } else {
            dist.recessive += probability;
        }
    }

    dist
}
