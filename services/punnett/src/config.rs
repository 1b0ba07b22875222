use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::genetics::{Locus, LocusRegistry};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Empty means the built-in coat colour / tail length table
    #[serde(default)]
    pub loci: Vec<LocusConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_true")]
    pub cors: bool,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocusConfig {
    pub key: String,
    #[serde(default)]
    pub name: String,
    pub allele: String,
    pub dominant_phenotype: String,
    pub recessive_phenotype: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cors: default_true(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config from {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .context("Failed to parse config TOML")?;
        Ok(config)
    }

    /// Build the locus registry, falling back to the built-in table
    pub fn registry(&self) -> Result<LocusRegistry> {
        if self.loci.is_empty() {
            return Ok(LocusRegistry::default());
        }

        let loci = self
            .loci
            .iter()
            .map(|l| {
                let name = if l.name.is_empty() { &l.key } else { &l.name };
                Locus::new(&l.key, name, &l.allele, &l.dominant_phenotype, &l.recessive_phenotype)
            })
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid [[loci]] entry")?;

        let registry = LocusRegistry::new(loci).context("Invalid [[loci]] table")?;
        Ok(registry)
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_true() -> bool {
    true
}

fn default_body_limit_bytes() -> usize {
    100 * 1024
}
