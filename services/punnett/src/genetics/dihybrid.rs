//! Two independently assorting loci

use crate::genetics::cross::{cross, CrossOutcome};
use crate::genetics::genotype::Genotype;
use crate::genetics::locus::Locus;
use crate::genetics::phenotype::{Phenotype, PhenotypeDistribution};

/// A parent's genotypes at two loci, in locus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DihybridGenotype {
    pub first: Genotype,
    pub second: Genotype,
}

/// One combined phenotype class and its probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedPhenotype {
    pub first: Phenotype,
    pub second: Phenotype,
    pub probability: f64,
}

impl CombinedPhenotype {
    /// e.g. "Long, Black"
    pub fn label(&self, first: &Locus, second: &Locus) -> String {
        format!(
            "{}, {}",
            first.phenotype_label(self.first),
            second.phenotype_label(self.second)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DihybridOutcome {
    pub first: CrossOutcome,
    pub second: CrossOutcome,
    pub combined: [CombinedPhenotype; 4],
}

/// Product of the per-locus phenotype probabilities (no linkage)
///
/// Always four classes: (dom, dom), (dom, rec), (rec, dom), (rec, rec).
/// Classes the cross cannot produce keep probability 0.0.
pub fn combine_independent(
    first: &PhenotypeDistribution,
    second: &PhenotypeDistribution,
) -> [CombinedPhenotype; 4] {
    let class = |a: Phenotype, b: Phenotype| CombinedPhenotype {
        first: a,
        second: b,
        probability: first.probability(a) * second.probability(b),
    };

    [
        class(Phenotype::Dominant, Phenotype::Dominant),
        class(Phenotype::Dominant, Phenotype::Recessive),
        class(Phenotype::Recessive, Phenotype::Dominant),
        class(Phenotype::Recessive, Phenotype::Recessive),
    ]
}

pub fn cross_dihybrid(
    first_locus: &Locus,
    second_locus: &Locus,
    parent1: &DihybridGenotype,
    parent2: &DihybridGenotype,
) -> DihybridOutcome {
    let first = cross(first_locus, &parent1.first, &parent2.first);
    let second = cross(second_locus, &parent1.second, &parent2.second);
    let combined = combine_independent(&first.phenotypes, &second.phenotypes);

    DihybridOutcome {
        first,
        second,
        combined,
    }
}
