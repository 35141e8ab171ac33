//! Errors from loading word lists, titles and cached results. The search itself cannot fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("column {0:?} not found in CSV header")]
    MissingColumn(String),

    #[error("malformed CSV at byte {offset}")]
    Csv { offset: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use crate::error::Error;

    #[test]
    fn error_display() {
        assert_eq!(Error::MissingColumn("title".to_string()).to_string(),
                   "column \"title\" not found in CSV header");
        assert_eq!(Error::Csv { offset: 12 }.to_string(), "malformed CSV at byte 12");
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
