//! Digest construction from CSV person lists
//!
//! A source is a CSV document with a header row naming the columns `fname`,
//! `lname` and `age` in any order, followed by one row per person. The whole
//! source is rejected on the first bad row, so a digest is never built from a
//! partially valid source.

use crate::error::SourceError;
use crate::types::Digest;
use crate::validation;
use std::io::Read;
use tracing::debug;

/// Header name of the first-name column
pub const FIRST_NAME_FIELD: &str = "fname";
/// Header name of the last-name column
pub const LAST_NAME_FIELD: &str = "lname";
/// Header name of the age column
pub const AGE_FIELD: &str = "age";

const NUMBER_OF_FIELDS: usize = 3;

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct FieldPositions {
    first_name: usize,
    last_name: usize,
    age: usize,
}

impl FieldPositions {
    fn from_header(header: &csv::StringRecord) -> Result<Self, SourceError> {
        let mut first_name = None;
        let mut last_name = None;
        let mut age = None;

        for (pos, raw) in header.iter().enumerate() {
            let name = raw.trim_start_matches('\u{feff}').trim();
            let slot = match name {
                FIRST_NAME_FIELD => &mut first_name,
                LAST_NAME_FIELD => &mut last_name,
                AGE_FIELD => &mut age,
                other => {
                    debug!(column = other, "unexpected csv column name");
                    return Err(SourceError::InvalidFormat(format!(
                        "unexpected column name: {other}"
                    )));
                }
            };
            if slot.replace(pos).is_some() {
                return Err(SourceError::InvalidFormat(format!(
                    "duplicate column name: {name}"
                )));
            }
        }

        match (first_name, last_name, age) {
            (Some(first_name), Some(last_name), Some(age)) => Ok(Self {
                first_name,
                last_name,
                age,
            }),
            _ => Err(SourceError::InvalidFormat(
                "header must name fname, lname and age".to_string(),
            )),
        }
    }
}

/// Build a [`Digest`] from a CSV byte stream
///
/// # Errors
///
/// - [`SourceError::InvalidFormat`] for a wrong column count, an unknown or
///   repeated column name, an empty name, a non-integer age or malformed CSV
/// - [`SourceError::InvalidValue`] when a field fails validation
/// - [`SourceError::LoadFailure`] when reading the stream fails
pub fn build_digest<R: Read>(reader: R) -> Result<Digest, SourceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut digest = Digest::new();
    let mut positions: Option<FieldPositions> = None;
    let mut record = csv::StringRecord::new();

    loop {
        match csv_reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(classify_csv_error(e)),
        }

        if record.len() != NUMBER_OF_FIELDS {
            return Err(SourceError::InvalidFormat(format!(
                "expected {NUMBER_OF_FIELDS} fields, found {} on line {}",
                record.len(),
                record.position().map_or(0, |p| p.line())
            )));
        }

        match positions {
            None => positions = Some(FieldPositions::from_header(&record)?),
            Some(pos) => {
                let first_name = record[pos.first_name].trim();
                let last_name = record[pos.last_name].trim();
                let age_raw = record[pos.age].trim();

                if first_name.is_empty() || last_name.is_empty() {
                    return Err(SourceError::InvalidFormat(
                        "first and last name are required".to_string(),
                    ));
                }

                let age: i64 = age_raw.parse().map_err(|_| {
                    SourceError::InvalidFormat(format!("age is not an integer: {age_raw}"))
                })?;

                let person = validation::validate_person(first_name, last_name, age)?;
                digest.record(&person);
            }
        }
    }

    Ok(digest)
}

fn classify_csv_error(e: csv::Error) -> SourceError {
    if e.is_io_error() {
        SourceError::LoadFailure(format!("cannot read data: {e}"))
    } else {
        SourceError::InvalidFormat(e.to_string())
    }
}
