use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::ExtentSourceError;
use crate::models::Extent;

///
/// Get a reader for either a gzip'd or non-gzip'd file
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, ExtentSourceError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)
        .map_err(|_| ExtentSourceError::FileReadError(format!("{}", path.display())))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

/// Read a full batch of extents from a text source.
///
/// The source is a stream of whitespace- or line-delimited unsigned
/// integers, consumed two at a time as `(start, end)` pairs. Pairs may
/// span a line break. Reversed pairs are normalized by [`Extent::new`].
pub fn read_extents(path: &Path) -> Result<Vec<Extent<u32>>, ExtentSourceError> {
    let reader = get_dynamic_reader(path)?;

    let mut extents = Vec::new();
    let mut pending: Option<u32> = None;

    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token
                .parse::<u32>()
                .map_err(|_| ExtentSourceError::CoordinateParseError(token.to_string()))?;
            pending = match pending.take() {
                Some(start) => {
                    extents.push(Extent::new(start, value));
                    None
                }
                None => Some(value),
            };
        }
    }

    if let Some(start) = pending {
        return Err(ExtentSourceError::UnpairedCoordinate(start.to_string()));
    }

    Ok(extents)
}

/// Read a stream of query points from a text source, one unsigned
/// integer per whitespace-delimited token.
pub fn read_points(path: &Path) -> Result<Vec<u32>, ExtentSourceError> {
    let reader = get_dynamic_reader(path)?;

    let mut points = Vec::new();

    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token
                .parse::<u32>()
                .map_err(|_| ExtentSourceError::PointParseError(token.to_string()))?;
            points.push(value);
        }
    }

    Ok(points)
}
