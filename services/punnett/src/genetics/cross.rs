//! Single-locus cross: genotype and phenotype tables together

use crate::genetics::genotype::Genotype;
use crate::genetics::locus::Locus;
use crate::genetics::phenotype::{compute_phenotype_distribution, PhenotypeDistribution};
use crate::genetics::punnett::{compute_genotype_distribution, GenotypeDistribution};

#[derive(Debug, Clone, PartialEq)]
pub struct CrossOutcome {
    pub genotypes: GenotypeDistribution,
    pub phenotypes: PhenotypeDistribution,
}

/// Cross two parents at `locus`
pub fn cross(locus: &Locus, parent1: &Genotype, parent2: &Genotype) -> CrossOutcome {
    let genotypes = compute_genotype_distribution(parent1, parent2);
    let phenotypes = compute_phenotype_distribution(&genotypes, locus.dominant_allele());

    CrossOutcome {
        genotypes,
        phenotypes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::locus::LocusRegistry;

    #[test]
    fn test_cross_uses_locus_dominance() {
        let registry = LocusRegistry::default();
        let tail = registry.get("tail_length").unwrap();
        let aa = tail.genotype("aa").unwrap();
        let het = tail.genotype("aA").unwrap();

        let outcome = cross(tail, &het, &aa);

        assert_eq!(outcome.genotypes.probability(&het), 0.5);
        assert_eq!(outcome.genotypes.probability(&aa), 0.5);
        assert_eq!(outcome.phenotypes.dominant, 0.5);
        assert_eq!(outcome.phenotypes.recessive, 0.5);
    }

    #[test]
    fn test_cross_heterozygous_parents() {
        let registry = LocusRegistry::default();
        let coat = registry.primary();
        let het = coat.genotype("Bb").unwrap();

        let outcome = cross(coat, &het, &het);

        assert_eq!(outcome.genotypes.len(), 3);
        assert_eq!(outcome.phenotypes.dominant, 0.75);
        assert_eq!(outcome.phenotypes.recessive, 0.25);
    }
}
