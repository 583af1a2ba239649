use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MerchantError>;

#[derive(Debug, Error)]
pub enum MerchantError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),
    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
}

/// Why a single input line could not be turned into a merchant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected `<name> <location>`, found {0} field(s)")]
    FieldCount(usize),
    #[error("invalid location `{value}`: {source}")]
    Location {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
