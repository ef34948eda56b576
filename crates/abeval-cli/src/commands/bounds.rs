use crate::cli::BoundsArgs;
use crate::error::{CliError, Result};
use abeval::core::forcefield::scoring::all_bounds;
use abeval::core::models::sequence::dimension_for;
use std::io::{BufWriter, Write};
use tracing::info;

pub fn run(args: BoundsArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let written = write_bounds(args.monomers, stdout.lock())?;
    info!(
        "Reported {} coordinate bound(s) for a {} monomer chain",
        written, args.monomers
    );
    Ok(())
}

/// Streams one `index lower upper` line per coordinate, 1-based, and returns
/// the number of lines written.
fn write_bounds<W: Write>(n_monomer: usize, writer: W) -> Result<usize> {
    let n_dimension = dimension_for(n_monomer).ok_or_else(|| {
        CliError::Argument(format!(
            "A chain needs between 3 and {} monomers, got {}",
            usize::MAX / 2,
            n_monomer
        ))
    })?;

    let mut out = BufWriter::new(writer);
    let mut written = 0;
    for (i, (lower, upper)) in all_bounds(n_dimension).enumerate() {
        writeln!(out, "{} {} {}", i + 1, lower, upper)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds_text(n_monomer: usize) -> Result<String> {
        let mut buffer = Vec::new();
        write_bounds(n_monomer, &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn every_coordinate_is_unbounded() {
        let text = bounds_text(5).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "1 -inf inf");
        assert_eq!(lines[4], "5 -inf inf");
    }

    #[test]
    fn three_monomers_have_a_single_coordinate() {
        assert_eq!(bounds_text(3).unwrap(), "1 -inf inf\n");
    }

    #[test]
    fn too_short_chain_is_an_argument_error() {
        assert!(matches!(bounds_text(2), Err(CliError::Argument(_))));
    }

    #[test]
    fn overflowing_chain_length_is_an_argument_error() {
        assert!(matches!(
            bounds_text(usize::MAX / 2 + 1),
            Err(CliError::Argument(_))
        ));
        assert!(matches!(bounds_text(usize::MAX), Err(CliError::Argument(_))));
    }

    #[test]
    fn output_stops_at_the_first_write_error() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        assert!(matches!(
            write_bounds(9, FailingWriter),
            Err(CliError::Io(_))
        ));
    }
}
