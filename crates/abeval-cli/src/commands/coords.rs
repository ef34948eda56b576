use crate::cli::CoordsArgs;
use crate::commands::energy::read_angle_vectors;
use crate::error::Result;
use abeval::core::forcefield::params::AbParameters;
use abeval::engine::error::EngineError;
use abeval::workflows::evaluate::positions;
use serde::Serialize;
use std::io::Write;
use tracing::info;

#[derive(Debug, Serialize)]
struct CoordRow {
    conformation: usize,
    monomer: usize,
    x: f64,
    y: f64,
    z: f64,
}

pub fn run(args: CoordsArgs) -> Result<()> {
    let vectors = read_angle_vectors(&args.angles)?;
    let parameters = match &args.parameters {
        Some(path) => AbParameters::load(path).map_err(EngineError::from)?,
        None => AbParameters::default(),
    };

    let file = std::fs::File::create(&args.output)?;
    let rows = write_coords_csv(&vectors, parameters.bond_length, file)?;
    info!(
        "Wrote {} monomer position(s) for {} conformation(s) to {:?}",
        rows,
        vectors.len(),
        args.output
    );
    Ok(())
}

/// Writes every monomer position, returning the number of rows written.
fn write_coords_csv<W: Write>(vectors: &[Vec<f64>], bond_length: f64, writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for (i, angles) in vectors.iter().enumerate() {
        let chain = positions(angles, bond_length)
            .map_err(|source| EngineError::Evaluation { index: i + 1, source })?;
        for (j, p) in chain.iter().enumerate() {
            wtr.serialize(CoordRow {
                conformation: i + 1,
                monomer: j + 1,
                x: p.x,
                y: p.y,
                z: p.z,
            })?;
            rows += 1;
        }
    }
    wtr.flush()?;
    Ok(rows)
}
