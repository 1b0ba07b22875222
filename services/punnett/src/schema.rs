//! JSON / form wire types for the HTTP API and `--json` CLI output

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::genetics::{CrossOutcome, DihybridOutcome, Locus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub parent1_genotype: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub parent2_genotype: Option<String>,
    /// Locus key; the primary locus when omitted
    pub locus: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DihybridRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub parent1_genotype: Option<String>, // e.g. "AaBb"
    #[serde(default, deserialize_with = "lenient_string")]
    pub parent2_genotype: Option<String>,
}

/// Any JSON scalar or container is kept as its text so that a number or
/// object fails genotype validation instead of body extraction; `null` is absent
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Value::String(s) => s,
        other => other.to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenotypeResult {
    pub genotype: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhenotypeResult {
    pub phenotype: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub genotype_results: Vec<GenotypeResult>,
    pub phenotype_results: Vec<PhenotypeResult>,
}

impl CalculateResponse {
    pub fn from_outcome(locus: &Locus, outcome: &CrossOutcome) -> Self {
        let genotype_results = outcome
            .genotypes
            .iter()
            .map(|(genotype, probability)| GenotypeResult {
                genotype: genotype.to_string(),
                probability,
            })
            .collect();

        let phenotype_results = outcome
            .phenotypes
            .entries()
            .iter()
            .map(|&(phenotype, probability)| PhenotypeResult {
                phenotype: locus.phenotype_label(phenotype).to_string(),
                probability,
            })
            .collect();

        Self {
            genotype_results,
            phenotype_results,
        }
    }

    pub fn genotype(&self, genotype: &str) -> Option<f64> {
        self.genotype_results
            .iter()
            .find(|r| r.genotype == genotype)
            .map(|r| r.probability)
    }

    pub fn phenotype(&self, phenotype: &str) -> Option<f64> {
        self.phenotype_results
            .iter()
            .find(|r| r.phenotype == phenotype)
            .map(|r| r.probability)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocusResult {
    pub locus: String,
    #[serde(flatten)]
    pub results: CalculateResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DihybridResponse {
    pub loci: Vec<LocusResult>,
    pub combined_results: Vec<PhenotypeResult>,
}

impl DihybridResponse {
    pub fn from_outcome(first: &Locus, second: &Locus, outcome: &DihybridOutcome) -> Self {
        let loci = vec![
            LocusResult {
                locus: first.key().to_string(),
                results: CalculateResponse::from_outcome(first, &outcome.first),
            },
            LocusResult {
                locus: second.key().to_string(),
                results: CalculateResponse::from_outcome(second, &outcome.second),
            },
        ];

        let combined_results = outcome
            .combined
            .iter()
            .map(|c| PhenotypeResult {
                phenotype: c.label(first, second),
                probability: c.probability,
            })
            .collect();

        Self {
            loci,
            combined_results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocusInfo {
    pub key: String,
    pub name: String,
    pub dominant_allele: String,
    pub recessive_allele: String,
    pub dominant_phenotype: String,
    pub recessive_phenotype: String,
    pub genotypes: Vec<String>,
}

impl From<&Locus> for LocusInfo {
    fn from(locus: &Locus) -> Self {
        use crate::genetics::Phenotype;

        Self {
            key: locus.key().to_string(),
            name: locus.name().to_string(),
            dominant_allele: locus.dominant_allele().to_string(),
            recessive_allele: locus.recessive_allele().to_string(),
            dominant_phenotype: locus.phenotype_label(Phenotype::Dominant).to_string(),
            recessive_phenotype: locus.phenotype_label(Phenotype::Recessive).to_string(),
            genotypes: locus.allowed_genotypes().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::{cross, cross_dihybrid, validate_dihybrid_pair, LocusRegistry};

    #[test]
    fn test_request_field_names() {
        let request: CalculateRequest =
            serde_json::from_str(r#"{"parent1Genotype":"Bb","parent2Genotype":"bB"}"#).unwrap();

        assert_eq!(request.parent1_genotype.as_deref(), Some("Bb"));
        assert_eq!(request.parent2_genotype.as_deref(), Some("bB"));
        assert!(request.locus.is_none());
    }

    #[test]
    fn test_request_non_string_genotypes() {
        let request: CalculateRequest =
            serde_json::from_str(r#"{"parent1Genotype":123,"parent2Genotype":null}"#).unwrap();
        assert_eq!(request.parent1_genotype.as_deref(), Some("123"));
        assert!(request.parent2_genotype.is_none());

        let request: DihybridRequest =
            serde_json::from_str(r#"{"parent1Genotype":{},"parent2Genotype":[]}"#).unwrap();
        assert_eq!(request.parent1_genotype.as_deref(), Some("{}"));
        assert_eq!(request.parent2_genotype.as_deref(), Some("[]"));
    }

    #[test]
    fn test_response_shape() {
        let registry = LocusRegistry::default();
        let coat = registry.primary();
        let het = coat.genotype("Bb").unwrap();
        let response = CalculateResponse::from_outcome(coat, &cross(coat, &het, &het));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "genotypeResults": [
                    {"genotype": "BB", "probability": 0.25},
                    {"genotype": "Bb", "probability": 0.5},
                    {"genotype": "bb", "probability": 0.25},
                ],
                "phenotypeResults": [
                    {"phenotype": "Black", "probability": 0.75},
                    {"phenotype": "White", "probability": 0.25},
                ],
            })
        );
    }

    #[test]
    fn test_phenotype_results_always_two() {
        let registry = LocusRegistry::default();
        let coat = registry.primary();
        let dom = coat.genotype("BB").unwrap();
        let response = CalculateResponse::from_outcome(coat, &cross(coat, &dom, &dom));

        assert_eq!(response.phenotype_results.len(), 2);
        assert_eq!(response.phenotype("White"), Some(0.0));
        assert_eq!(response.genotype("BB"), Some(1.0));
        assert_eq!(response.genotype("bb"), None);
    }

    #[test]
    fn test_dihybrid_response_shape() {
        let registry = LocusRegistry::default();
        let validated = validate_dihybrid_pair(&registry, Some("AaBb"), Some("AaBb")).unwrap();
        let outcome = cross_dihybrid(
            validated.first_locus,
            validated.second_locus,
            &validated.parent1,
            &validated.parent2,
        );
        let response =
            DihybridResponse::from_outcome(validated.first_locus, validated.second_locus, &outcome);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["loci"][0]["locus"], "tail_length");
        assert_eq!(json["loci"][1]["phenotypeResults"][0]["phenotype"], "Black");
        assert_eq!(json["combinedResults"][0]["phenotype"], "Long, Black");
        assert_eq!(json["combinedResults"][0]["probability"], 0.5625);
        assert_eq!(json["combinedResults"][3]["probability"], 0.0625);
    }

    #[test]
    fn test_locus_info() {
        let registry = LocusRegistry::default();
        let info = LocusInfo::from(registry.get("tail_length").unwrap());

        assert_eq!(info.dominant_allele, "A");
        assert_eq!(info.recessive_allele, "a");
        assert_eq!(info.genotypes, vec!["AA", "Aa", "aA", "aa"]);
    }
}
