use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{MerchantError, ParseErrorKind, Result};

/// A merchant at an integer location on the road.
///
/// Merchants are told apart by name, several merchants may share a location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Merchant {
    name: String,
    location: i64,
}

impl Merchant {
    pub fn new(name: impl Into<String>, location: i64) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> i64 {
        self.location
    }
}

impl fmt::Display for Merchant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Merchant(name='{}', location={})", self.name, self.location)
    }
}

impl FromStr for Merchant {
    type Err = ParseErrorKind;

    /// Parses `<name> <location>`, separated by any amount of whitespace.
    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [name, location] = fields[..] else {
            return Err(ParseErrorKind::FieldCount(fields.len()));
        };

        let location = location
            .parse::<i64>()
            .map_err(|source| ParseErrorKind::Location {
                value: location.to_owned(),
                source,
            })?;

        Ok(Merchant::new(name, location))
    }
}

/// Reads one merchant per line. Lines containing only whitespace are skipped, any other line
/// that does not parse fails the whole read.
pub fn parse_merchants<R: BufRead>(reader: R) -> Result<Vec<Merchant>> {
    let mut merchants = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let merchant = line
            .parse::<Merchant>()
            .map_err(|kind| MerchantError::Parse { line: idx + 1, kind })?;
        merchants.push(merchant);
    }

    Ok(merchants)
}

/// Reads the merchants stored in the file at `path`.
pub fn read_merchants(path: impl AsRef<Path>) -> Result<Vec<Merchant>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MerchantError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let merchants = parse_merchants(BufReader::new(file))?;

    log::debug!("read {} merchants from {}", merchants.len(), path.display());

    Ok(merchants)
}
