//! Punnett square enumeration and offspring genotype distribution

use std::collections::BTreeMap;

use crate::genetics::genotype::Genotype;

/// Cells in a monohybrid Punnett square (2 gametes x 2 gametes)
pub const PUNNETT_CELLS: u32 = 4;

/// Offspring genotype probabilities for one cross
///
/// Held as integer counts over [`PUNNETT_CELLS`], so every probability is
/// an exact quarter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeDistribution {
    counts: BTreeMap<Genotype, u32>,
}

impl GenotypeDistribution {
    /// Probability of `genotype`; 0.0 if the cross cannot produce it
    pub fn probability(&self, genotype: &Genotype) -> f64 {
        self.counts
            .get(genotype)
            .map(|&count| count as f64 / PUNNETT_CELLS as f64)
            .unwrap_or(0.0)
    }

    /// Entries in canonical genotype order (homozygous dominant first)
    pub fn iter(&self) -> impl Iterator<Item = (Genotype, f64)> + '_ {
        self.counts
            .iter()
            .map(|(&genotype, &count)| (genotype, count as f64 / PUNNETT_CELLS as f64))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total_probability(&self) -> f64 {
        self.iter().map(|(_, p)| p).sum()
    }
}

/// The 2x2 grid: rows are gametes of `parent1`, columns gametes of `parent2`
pub fn punnett_square(parent1: &Genotype, parent2: &Genotype) -> [[Genotype; 2]; 2] {
    let [a0, a1] = parent1.alleles();
    let [b0, b1] = parent2.alleles();
    [
        [Genotype::new(a0, b0), Genotype::new(a0, b1)],
        [Genotype::new(a1, b0), Genotype::new(a1, b1)],
    ]
}

/// Tally offspring genotypes over every gamete pairing
pub fn compute_genotype_distribution(
    parent1: &Genotype,
    parent2: &Genotype,
) -> GenotypeDistribution {
    let mut counts = BTreeMap::new();

    for row in punnett_square(parent1, parent2) {
        for offspring in row {
            *counts.entry(offspring).or_insert(0) += 1;
        }
    }

    GenotypeDistribution { counts }
}
