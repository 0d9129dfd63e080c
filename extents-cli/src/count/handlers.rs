use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use extents_core::utils::{read_extents, read_points};
use extents_overlap::OverlapIndex;

pub fn run_count(matches: &ArgMatches) -> Result<()> {
    let extents_file = matches
        .get_one::<String>("extents")
        .expect("A path to an extents file is required.");

    let numbers_file = matches
        .get_one::<String>("numbers")
        .expect("A path to a query points file is required.");

    let extents = read_extents(Path::new(extents_file))?;
    info!("Read {} extents from {}", extents.len(), extents_file);

    let index = OverlapIndex::build(extents);
    let points = read_points(Path::new(numbers_file))
        .with_context(|| format!("Reading query points from {}", numbers_file))?;

    match matches.get_one::<String>("expected") {
        Some(expected_file) => {
            let expected = read_points(Path::new(expected_file))
                .with_context(|| format!("Reading expected counts from {}", expected_file))?;
            self_check(&index, &points, &expected)
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_counts(&index, &points, &mut writer)
        }
    }
}

/// Write one count per query point to the sink, one per line.
fn write_counts<W: Write>(index: &OverlapIndex<u32>, points: &[u32], writer: &mut W) -> Result<()> {
    for point in points {
        writeln!(writer, "{}", index.containing_count(*point))?;
    }
    writer.flush()?;

    Ok(())
}

/// Compare each query's count against the externally supplied expected
/// value. Every mismatch is reported; any mismatch fails the run.
fn self_check(index: &OverlapIndex<u32>, points: &[u32], expected: &[u32]) -> Result<()> {
    if points.len() != expected.len() {
        return Err(anyhow::anyhow!(
            "Self-check has {} query points but {} expected counts",
            points.len(),
            expected.len()
        ));
    }

    let mut mismatches = 0usize;
    for (point, expected) in points.iter().zip(expected) {
        let got = index.containing_count(*point);
        if got != *expected as usize {
            println!("FAIL point={} got={} expected={}", point, got, expected);
            mismatches += 1;
        }
    }

    if mismatches > 0 {
        Err(anyhow::anyhow!(
            "Self-check failed: {} of {} queries mismatched",
            mismatches,
            points.len()
        ))
    } else {
        println!("PASS {} queries", points.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use extents_core::models::Extent;
    use rstest::{fixture, rstest};
    use tempfile::NamedTempFile;

    #[fixture]
    fn index() -> OverlapIndex<u32> {
        OverlapIndex::build(vec![
            Extent::new(0u32, 40),
            Extent::new(2, 12),
            Extent::new(4, 30),
        ])
    }

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[rstest]
    fn write_counts_is_one_line_per_query(index: OverlapIndex<u32>) {
        let mut sink = Vec::new();
        write_counts(&index, &[0, 3, 20, 99], &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "1\n2\n2\n0\n");
    }

    #[rstest]
    fn self_check_passes_on_matching_counts(index: OverlapIndex<u32>) {
        assert!(self_check(&index, &[0, 3, 99], &[1, 2, 0]).is_ok());
    }

    #[rstest]
    fn self_check_fails_on_mismatch(index: OverlapIndex<u32>) {
        assert!(self_check(&index, &[0, 3], &[1, 7]).is_err());
    }

    #[rstest]
    fn self_check_fails_on_length_mismatch(index: OverlapIndex<u32>) {
        assert!(self_check(&index, &[0, 3], &[1]).is_err());
    }

    #[test]
    fn run_count_end_to_end() {
        let extents = write_temp("0 40\n2 12\n4 30\n");
        let numbers = write_temp("0 3 20 99\n");
        let expected = write_temp("1 2 2 0\n");

        let cmd = crate::count::cli::create_count_cli();
        let matches = cmd
            .try_get_matches_from([
                "count",
                "-x",
                extents.path().to_str().unwrap(),
                "-n",
                numbers.path().to_str().unwrap(),
                "-e",
                expected.path().to_str().unwrap(),
            ])
            .unwrap();

        assert!(run_count(&matches).is_ok());
    }

    #[test]
    fn expected_file_parse_error_names_the_expected_file() {
        let extents = write_temp("0 40\n");
        let numbers = write_temp("1 2\n");
        let expected = write_temp("1 two\n");

        let cmd = crate::count::cli::create_count_cli();
        let matches = cmd
            .try_get_matches_from([
                "count",
                "-x",
                extents.path().to_str().unwrap(),
                "-n",
                numbers.path().to_str().unwrap(),
                "-e",
                expected.path().to_str().unwrap(),
            ])
            .unwrap();

        let err = run_count(&matches).unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.contains("expected counts"));
        assert!(rendered.contains(expected.path().to_str().unwrap()));
    }

    #[test]
    fn run_count_surfaces_missing_extents_file() {
        let numbers = write_temp("1 2 3\n");

        let cmd = crate::count::cli::create_count_cli();
        let matches = cmd
            .try_get_matches_from([
                "count",
                "-x",
                "no/such/extents.txt",
                "-n",
                numbers.path().to_str().unwrap(),
            ])
            .unwrap();

        let err = run_count(&matches).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<extents_core::ExtentSourceError>(),
            Some(extents_core::ExtentSourceError::FileReadError(_))
        ));
    }
}
