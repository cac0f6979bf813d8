use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use helm_similarity::{
    loader::parse_helm,
    monomers::MonomerStore,
    notation::Notation,
    search::{similarity_search, FingerprintMode},
};

/// Rank a database of HELM notations by similarity to a query notation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV database with `id,helm` records.
    database: PathBuf,

    /// Query HELM notation, e.g. `RNA1{R(A)P.R(G)P}$$$$`.
    query: String,

    /// Fingerprint variant to compare, original paths when omitted.
    #[arg(short, long, value_enum)]
    mode: Option<FingerprintMode>,

    /// Drop hits scoring below this threshold.
    #[arg(short = 't', long, default_value_t = 0.0)]
    min_score: f64,
}

/// Load `id,helm` records, skipping rows whose notation fails to parse.
fn load_database(path: &PathBuf) -> Result<Vec<(String, Notation)>> {
    let file = File::open(path).with_context(|| format!("could not open {path:?}"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut database = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("malformed record in {path:?}"))?;
        let (Some(id), Some(helm)) = (record.get(0), record.get(1)) else {
            warn!("skipping record without id and helm fields");
            continue;
        };
        match parse_helm(helm) {
            Ok(notation) => database.push((id.to_string(), notation)),
            Err(err) => warn!("skipping {id}: {err}"),
        }
    }
    Ok(database)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let query = parse_helm(&cli.query).context("could not parse the query notation")?;
    let database = load_database(&cli.database)?;
    let store = MonomerStore::with_defaults();

    let mode = cli.mode.unwrap_or(FingerprintMode::Original);
    let hits = similarity_search(&query, &database, mode, cli.min_score, &store)?;
    for hit in hits {
        println!("{}\t{:.4}", hit.id, hit.score);
    }
    Ok(())
}
