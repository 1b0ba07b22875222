//! Trait loci: allele symbols and phenotype labels

use std::collections::HashSet;

use crate::genetics::error::GeneticsError;
use crate::genetics::genotype::{Allele, Genotype};
use crate::genetics::phenotype::Phenotype;

/// A single-gene trait with complete dominance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locus {
    key: String,
    name: String,
    dominant: Allele,
    dominant_phenotype: String,
    recessive_phenotype: String,
}

impl Locus {
    /// Define a locus; `symbol` is the dominant allele letter (case is normalized)
    pub fn new(
        key: &str,
        name: &str,
        symbol: &str,
        dominant_phenotype: &str,
        recessive_phenotype: &str,
    ) -> Result<Self, GeneticsError> {
        if key.trim().is_empty() {
            return Err(GeneticsError::InvalidLocus("key must not be empty".to_string()));
        }

        let mut chars = symbol.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => {
                return Err(GeneticsError::InvalidLocus(format!(
                    "{}: allele symbol must be a single ASCII letter, got {:?}",
                    key, symbol
                )))
            }
        };

        if dominant_phenotype.trim().is_empty() || recessive_phenotype.trim().is_empty() {
            return Err(GeneticsError::InvalidLocus(format!(
                "{}: phenotype labels must not be empty",
                key
            )));
        }
        if dominant_phenotype == recessive_phenotype {
            return Err(GeneticsError::InvalidLocus(format!(
                "{}: dominant and recessive phenotypes share the label {:?}",
                key, dominant_phenotype
            )));
        }

        Ok(Self::from_parts(
            key,
            name,
            letter,
            dominant_phenotype,
            recessive_phenotype,
        ))
    }

    fn from_parts(
        key: &str,
        name: &str,
        letter: char,
        dominant_phenotype: &str,
        recessive_phenotype: &str,
    ) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            dominant: Allele::new(letter),
            dominant_phenotype: dominant_phenotype.to_string(),
            recessive_phenotype: recessive_phenotype.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dominant_allele(&self) -> Allele {
        self.dominant
    }

    pub fn recessive_allele(&self) -> Allele {
        self.dominant.counterpart()
    }

    pub fn phenotype_label(&self, phenotype: Phenotype) -> &str {
        match phenotype {
            Phenotype::Dominant => &self.dominant_phenotype,
            Phenotype::Recessive => &self.recessive_phenotype,
        }
    }

    /// Accepted spellings, including the non-canonical heterozygous form
    pub fn allowed_genotypes(&self) -> [String; 4] {
        let d = self.dominant_allele();
        let r = self.recessive_allele();
        [
            format!("{}{}", d, d),
            format!("{}{}", d, r),
            format!("{}{}", r, d),
            format!("{}{}", r, r),
        ]
    }

    /// Human readable list for error messages, e.g. "BB, Bb, bB, or bb"
    pub fn allowed_description(&self) -> String {
        let [a, b, c, d] = self.allowed_genotypes();
        format!("{}, {}, {}, or {}", a, b, c, d)
    }

    /// Exact, case-sensitive match against the four accepted spellings
    pub fn genotype(&self, raw: &str) -> Option<Genotype> {
        let mut chars = raw.chars();
        let (first, second) = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => (Allele::new(a), Allele::new(b)),
            _ => return None,
        };
        if self.owns(first) && self.owns(second) {
            Some(Genotype::new(first, second))
        } else {
            None
        }
    }

    fn owns(&self, allele: Allele) -> bool {
        allele == self.dominant_allele() || allele == self.recessive_allele()
    }
}

/// Set of loci the service knows about
#[derive(Debug, Clone)]
pub struct LocusRegistry {
    loci: Vec<Locus>,
}

impl LocusRegistry {
    /// Keys and allele letters must be unique; at least one locus is required
    pub fn new(loci: Vec<Locus>) -> Result<Self, GeneticsError> {
        if loci.is_empty() {
            return Err(GeneticsError::InvalidLocus(
                "at least one locus must be configured".to_string(),
            ));
        }

        let mut keys = HashSet::new();
        let mut symbols = HashSet::new();
        for locus in &loci {
            if !keys.insert(locus.key().to_string()) {
                return Err(GeneticsError::InvalidLocus(format!(
                    "duplicate key {}",
                    locus.key()
                )));
            }
            if !symbols.insert(locus.dominant_allele()) {
                return Err(GeneticsError::InvalidLocus(format!(
                    "allele {} is used by more than one locus",
                    locus.dominant_allele()
                )));
            }
        }

        Ok(Self { loci })
    }

    /// First configured locus; used when a request names none
    pub fn primary(&self) -> &Locus {
        &self.loci[0]
    }

    pub fn get(&self, key: &str) -> Result<&Locus, GeneticsError> {
        self.loci
            .iter()
            .find(|l| l.key() == key)
            .ok_or_else(|| GeneticsError::UnknownLocus(key.to_string()))
    }

    /// `None` selects the primary locus
    pub fn resolve(&self, key: Option<&str>) -> Result<&Locus, GeneticsError> {
        match key {
            Some(k) if !k.is_empty() => self.get(k),
            _ => Ok(self.primary()),
        }
    }

    /// Look up by allele letter in either case
    pub fn by_symbol(&self, symbol: char) -> Option<&Locus> {
        let upper = symbol.to_ascii_uppercase();
        self.loci
            .iter()
            .find(|l| l.dominant_allele().symbol() == upper)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locus> {
        self.loci.iter()
    }

    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }
}

impl Default for LocusRegistry {
    fn default() -> Self {
        Self {
            loci: vec![
                Locus::from_parts("coat_color", "Coat colour", 'B', "Black", "White"),
                Locus::from_parts("tail_length", "Tail length", 'A', "Long", "Short"),
            ],
        }
    }
}
