use crate::cli::EnergyArgs;
use crate::config::PartialEvaluationConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use abeval::core::io::angle_file::AngleFile;
use abeval::core::models::sequence::monomers_for;
use abeval::engine::progress::ProgressReporter;
use abeval::workflows::evaluate::{self, EvaluationRecord};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct EnergyRow {
    index: usize,
    bend: f64,
    torsion: f64,
    lennard_jones: f64,
    total: f64,
}

impl From<&EvaluationRecord> for EnergyRow {
    fn from(record: &EvaluationRecord) -> Self {
        Self {
            index: record.index,
            bend: record.terms.bend,
            torsion: record.terms.torsion,
            lennard_jones: record.terms.lennard_jones,
            total: record.total(),
        }
    }
}

pub fn run(args: EnergyArgs, show_progress: bool) -> Result<()> {
    let vectors = read_angle_vectors(&args.angles)?;
    let inferred_monomers = vectors.first().and_then(|v| monomers_for(v.len()));
    debug!(
        "Read {} angle vector(s); inferred chain length {:?}",
        vectors.len(),
        inferred_monomers
    );

    let partial = match &args.config {
        Some(path) => PartialEvaluationConfig::from_file(path)?,
        None => PartialEvaluationConfig::default(),
    };
    let config = partial.merge_with_cli(&args, inferred_monomers)?;
    debug!("Final evaluation configuration: {:?}", config);

    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let result = evaluate::run(&config, &vectors, &reporter)?;

    if let Some(best) = result.lowest() {
        info!(
            "Lowest energy {} at vector {} of {}",
            best.total(),
            best.index,
            result.records.len()
        );
    }

    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_energy_csv(&result.records, file)?;
            info!("Wrote {} energy row(s) to {:?}", result.records.len(), path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for line in format_energy_lines(&result.records, args.terms) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn read_angle_vectors(path: &Path) -> Result<Vec<Vec<f64>>> {
    let vectors = AngleFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: PathBuf::from(path),
        source: e.into(),
    })?;
    if vectors.is_empty() {
        return Err(CliError::Argument(format!(
            "Angle file {:?} contains no angle vectors",
            path
        )));
    }
    Ok(vectors)
}

fn write_energy_csv<W: Write>(records: &[EvaluationRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(EnergyRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

fn format_energy_lines(records: &[EvaluationRecord], with_terms: bool) -> Vec<String> {
    records
        .iter()
        .map(|r| {
            if with_terms {
                format!(
                    "{} {} {} {} {}",
                    r.index,
                    r.terms.bend,
                    r.terms.torsion,
                    r.terms.lennard_jones,
                    r.total()
                )
            } else {
                format!("{} {}", r.index, r.total())
            }
        })
        .collect()
}
