//! Alleles and canonical genotypes

use std::fmt;

/// One allele symbol of a locus
///
/// Dominant alleles are uppercase, recessive alleles the lowercase of the
/// same letter. Ordering is plain character ordering, which puts the
/// dominant symbol first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Allele(char);

impl Allele {
    pub fn new(symbol: char) -> Self {
        Self(symbol)
    }

    pub fn symbol(self) -> char {
        self.0
    }

    pub fn is_dominant(self) -> bool {
        self.0.is_ascii_uppercase()
    }

    /// The allele at the same locus with the opposite dominance
    pub fn counterpart(self) -> Self {
        if self.is_dominant() {
            Self(self.0.to_ascii_lowercase())
        } else {
            Self(self.0.to_ascii_uppercase())
        }
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.pad(self.0.encode_utf8(&mut buf))
    }
}

/// Unordered pair of alleles, always held in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Genotype {
    alleles: [Allele; 2],
}

impl Genotype {
    /// Build a genotype from two alleles in any order ("bB" becomes "Bb")
    pub fn new(first: Allele, second: Allele) -> Self {
        let alleles = if second < first {
            [second, first]
        } else {
            [first, second]
        };
        Self { alleles }
    }

    /// The two gametes this genotype can contribute
    pub fn alleles(&self) -> [Allele; 2] {
        self.alleles
    }

    pub fn contains(&self, allele: Allele) -> bool {
        self.alleles.contains(&allele)
    }

    pub fn is_homozygous(&self) -> bool {
        self.alleles[0] == self.alleles[1]
    }

    pub fn is_heterozygous(&self) -> bool {
        !self.is_homozygous()
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}{}", self.alleles[0].0, self.alleles[1].0))
    }
}
