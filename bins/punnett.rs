//! Mendelian cross calculator CLI
//!
//! Usage:
//!   punnett cross Bb bb
//!   punnett cross Aa aA --locus tail_length
//!   punnett dihybrid AaBb AaBb
//!   punnett loci --config config/punnett.toml

use anyhow::Result;
use clap::{Parser, Subcommand};

use punnett::config::Config;
use punnett::genetics::{
    cross, cross_dihybrid, punnett_square, validate_dihybrid_pair, validate_pair, Genotype,
    LocusRegistry,
};
use punnett::schema::{CalculateResponse, DihybridResponse, LocusInfo};

#[derive(Parser)]
#[command(name = "punnett")]
#[command(about = "Offspring genotype and phenotype probabilities for Mendelian crosses")]
struct Cli {
    /// TOML config with a [[loci]] table (built-in loci when omitted)
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cross two parents at one locus
    Cross {
        parent1: String,
        parent2: String,
        /// Locus key (defaults to the first configured locus)
        #[arg(long)]
        locus: Option<String>,
        /// Print the HTTP response JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Cross two parents at two loci, e.g. AaBb x aabb
    Dihybrid {
        parent1: String,
        parent2: String,
        #[arg(long)]
        json: bool,
    },
    /// List configured loci
    Loci,
}

fn load_registry(config: Option<&str>) -> Result<LocusRegistry> {
    match config {
        Some(path) => Config::load(path)?.registry(),
        None => Ok(LocusRegistry::default()),
    }
}

fn percent(p: f64) -> String {
    format!("{:>7.2}%", p * 100.0)
}

fn print_square(parent1: &Genotype, parent2: &Genotype) {
    let square = punnett_square(parent1, parent2);
    let [b0, b1] = parent2.alleles();

    println!("\n=== Punnett square ({} x {}) ===", parent1, parent2);
    println!("      {:>4} {:>4}", b0, b1);
    for (allele, row) in parent1.alleles().iter().zip(square.iter()) {
        println!("  {:>2}  {:>4} {:>4}", allele, row[0], row[1]);
    }
}

fn print_results(title: &str, response: &CalculateResponse) {
    println!("\n=== {}: genotypes ===", title);
    for r in &response.genotype_results {
        println!("  {:<8} {}", r.genotype, percent(r.probability));
    }
    println!("=== {}: phenotypes ===", title);
    for r in &response.phenotype_results {
        println!("  {:<8} {}", r.phenotype, percent(r.probability));
    }
}

fn run_cross_command(
    registry: &LocusRegistry,
    parent1: &str,
    parent2: &str,
    locus: Option<&str>,
    json: bool,
) -> Result<()> {
    let locus = registry.resolve(locus)?;
    let (g1, g2) = validate_pair(locus, Some(parent1), Some(parent2))?;
    tracing::info!("Crossing {} x {} at locus={}", g1, g2, locus.key());

    let outcome = cross(locus, &g1, &g2);
    let response = CalculateResponse::from_outcome(locus, &outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print_square(&g1, &g2);
    print_results(locus.name(), &response);
    Ok(())
}

fn run_dihybrid_command(
    registry: &LocusRegistry,
    parent1: &str,
    parent2: &str,
    json: bool,
) -> Result<()> {
    let validated = validate_dihybrid_pair(registry, Some(parent1), Some(parent2))?;
    tracing::info!(
        "Dihybrid cross {} x {} over {} and {}",
        parent1,
        parent2,
        validated.first_locus.key(),
        validated.second_locus.key()
    );

    let outcome = cross_dihybrid(
        validated.first_locus,
        validated.second_locus,
        &validated.parent1,
        &validated.parent2,
    );
    let response =
        DihybridResponse::from_outcome(validated.first_locus, validated.second_locus, &outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let names = [validated.first_locus.name(), validated.second_locus.name()];
    for (name, locus) in names.iter().zip(response.loci.iter()) {
        print_results(name, &locus.results);
    }

    println!("\n=== Combined phenotypes ===");
    for r in &response.combined_results {
        println!("  {:<24} {}", r.phenotype, percent(r.probability));
    }
    Ok(())
}

fn run_loci_command(registry: &LocusRegistry) {
    for info in registry.iter().map(LocusInfo::from) {
        println!(
            "{:<14} {:<14} {}/{}  {} / {}",
            info.key,
            info.name,
            info.dominant_allele,
            info.recessive_allele,
            info.dominant_phenotype,
            info.recessive_phenotype
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = load_registry(cli.config.as_deref())?;

    match cli.command {
        Commands::Cross { parent1, parent2, locus, json } => {
            run_cross_command(&registry, &parent1, &parent2, locus.as_deref(), json)?;
        }
        Commands::Dihybrid { parent1, parent2, json } => {
            run_dihybrid_command(&registry, &parent1, &parent2, json)?;
        }
        Commands::Loci => run_loci_command(&registry),
    }

    Ok(())
}
