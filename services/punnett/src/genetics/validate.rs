//! Boundary validation: raw request strings into typed genotypes
//!
//! Matching is exact and case-sensitive. The reversed heterozygous spelling
//! ("bB") is accepted and normalized.

use crate::genetics::dihybrid::DihybridGenotype;
use crate::genetics::error::GeneticsError;
use crate::genetics::genotype::Genotype;
use crate::genetics::locus::{Locus, LocusRegistry};

/// Validated two-locus cross, ready for the engine
#[derive(Debug, Clone)]
pub struct DihybridCross<'a> {
    pub first_locus: &'a Locus,
    pub second_locus: &'a Locus,
    pub parent1: DihybridGenotype,
    pub parent2: DihybridGenotype,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn invalid_genotype(locus: &Locus) -> GeneticsError {
    GeneticsError::InvalidGenotype {
        allowed: locus.allowed_description(),
    }
}

/// Both parents present and spelled as one of the locus' four genotypes
pub fn validate_pair(
    locus: &Locus,
    parent1: Option<&str>,
    parent2: Option<&str>,
) -> Result<(Genotype, Genotype), GeneticsError> {
    let (raw1, raw2) = match (present(parent1), present(parent2)) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(GeneticsError::MissingGenotype),
    };

    let g1 = locus.genotype(raw1).ok_or_else(|| invalid_genotype(locus))?;
    let g2 = locus.genotype(raw2).ok_or_else(|| invalid_genotype(locus))?;

    Ok((g1, g2))
}

/// Split a four-allele string such as "AaBb" into two loci
pub fn parse_dihybrid<'a>(
    registry: &'a LocusRegistry,
    raw: &str,
) -> Result<(&'a Locus, &'a Locus, DihybridGenotype), GeneticsError> {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() != 4 {
        return Err(GeneticsError::InvalidDihybrid(format!(
            "{:?} must be four alleles, e.g. AaBb",
            raw
        )));
    }

    let locus_for = |symbol: char| {
        registry.by_symbol(symbol).ok_or_else(|| {
            GeneticsError::InvalidDihybrid(format!("{:?}: no locus uses allele {}", raw, symbol))
        })
    };
    let first_locus = locus_for(chars[0])?;
    let second_locus = locus_for(chars[2])?;

    if first_locus.key() == second_locus.key() {
        return Err(GeneticsError::InvalidDihybrid(format!(
            "{:?}: both halves describe locus {}",
            raw,
            first_locus.key()
        )));
    }

    let first_half: String = chars[..2].iter().collect();
    let second_half: String = chars[2..].iter().collect();

    let first = first_locus
        .genotype(&first_half)
        .ok_or_else(|| invalid_genotype(first_locus))?;
    let second = second_locus
        .genotype(&second_half)
        .ok_or_else(|| invalid_genotype(second_locus))?;

    Ok((first_locus, second_locus, DihybridGenotype { first, second }))
}

/// Both parents present, both parse, both list the same loci in the same order
pub fn validate_dihybrid_pair<'a>(
    registry: &'a LocusRegistry,
    parent1: Option<&str>,
    parent2: Option<&str>,
) -> Result<DihybridCross<'a>, GeneticsError> {
    let (raw1, raw2) = match (present(parent1), present(parent2)) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(GeneticsError::MissingGenotype),
    };

    let (first_locus, second_locus, g1) = parse_dihybrid(registry, raw1)?;
    let (other_first, other_second, g2) = parse_dihybrid(registry, raw2)?;

    if first_locus.key() != other_first.key() || second_locus.key() != other_second.key() {
        return Err(GeneticsError::InvalidDihybrid(format!(
            "parents must list the same loci in the same order ({} vs {})",
            raw1, raw2
        )));
    }

    Ok(DihybridCross {
        first_locus,
        second_locus,
        parent1: g1,
        parent2: g2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair() {
        let registry = LocusRegistry::default();
        let (g1, g2) = validate_pair(registry.primary(), Some("bB"), Some("BB")).unwrap();

        assert_eq!(g1.to_string(), "Bb");
        assert_eq!(g2.to_string(), "BB");
    }

    #[test]
    fn test_missing_genotype() {
        let registry = LocusRegistry::default();
        let locus = registry.primary();

        assert_eq!(
            validate_pair(locus, Some("Bb"), None).unwrap_err(),
            GeneticsError::MissingGenotype
        );
        assert_eq!(
            validate_pair(locus, Some(""), Some("Bb")).unwrap_err(),
            GeneticsError::MissingGenotype
        );

        let message = validate_pair(locus, None, None).unwrap_err().to_string();
        assert!(message.contains("required"));
    }

    #[test]
    fn test_invalid_genotype() {
        let registry = LocusRegistry::default();
        let locus = registry.primary();

        for bad in ["INVALID", "BBB", "B", "bbb", "XY", "bb ", "BЬ", "12"] {
            let err = validate_pair(locus, Some(bad), Some("Bb")).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid genotype format. Must be BB, Bb, bB, or bb",
                "input {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_case_sensitive() {
        let registry = LocusRegistry::default();
        let tail = registry.get("tail_length").unwrap();

        assert!(validate_pair(tail, Some("Aa"), Some("aa")).is_ok());
        assert!(validate_pair(tail, Some("Bb"), Some("aa")).is_err());
    }

    #[test]
    fn test_parse_dihybrid() {
        let registry = LocusRegistry::default();
        let (first, second, genotype) = parse_dihybrid(&registry, "aABb").unwrap();

        assert_eq!(first.key(), "tail_length");
        assert_eq!(second.key(), "coat_color");
        assert_eq!(genotype.first.to_string(), "Aa");
        assert_eq!(genotype.second.to_string(), "Bb");
    }

    #[test]
    fn test_parse_dihybrid_errors() {
        let registry = LocusRegistry::default();

        assert!(matches!(
            parse_dihybrid(&registry, "AaB"),
            Err(GeneticsError::InvalidDihybrid(_))
        ));
        assert!(matches!(
            parse_dihybrid(&registry, "AaAa"),
            Err(GeneticsError::InvalidDihybrid(_))
        ));
        assert!(matches!(
            parse_dihybrid(&registry, "AaCc"),
            Err(GeneticsError::InvalidDihybrid(_))
        ));
        assert!(matches!(
            parse_dihybrid(&registry, "AbBa"),
            Err(GeneticsError::InvalidGenotype { .. })
        ));
    }

    #[test]
    fn test_dihybrid_pair_order_must_match() {
        let registry = LocusRegistry::default();

        assert!(validate_dihybrid_pair(&registry, Some("AaBb"), Some("aabb")).is_ok());
        assert!(matches!(
            validate_dihybrid_pair(&registry, Some("AaBb"), Some("BbAa")),
            Err(GeneticsError::InvalidDihybrid(_))
        ));
        assert_eq!(
            validate_dihybrid_pair(&registry, None, Some("AaBb")).unwrap_err(),
            GeneticsError::MissingGenotype
        );
    }
}
