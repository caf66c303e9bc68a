use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column \"{column}\"", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}:{line}: invalid start time \"{value}\"", path.display())]
    InvalidTimestamp {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("Invalid color mode \"{input}\" (expected auto, always or never)")]
    InvalidColor { input: String },

    #[error("Console I/O failed: {0}")]
    Prompt(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_missing_column() {
        let e = AppError::MissingColumn {
            path: PathBuf::from("chicago.csv"),
            column: "Start Time",
        };
        assert_eq!(
            e.to_string(),
            r#"chicago.csv is missing required column "Start Time""#
        );
    }

    #[test]
    fn app_error_display_timestamp() {
        let e = AppError::InvalidTimestamp {
            path: PathBuf::from("washington.csv"),
            line: 3,
            value: "yesterday".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"washington.csv:3: invalid start time "yesterday""#
        );
    }

    #[test]
    fn app_error_display_color() {
        let e = AppError::InvalidColor {
            input: "sometimes".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid color mode "sometimes" (expected auto, always or never)"#
        );
    }

    #[test]
    fn app_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let app: AppError = io.into();
        assert_eq!(app.to_string(), "Console I/O failed: closed");
    }

    #[test]
    fn app_error_io_keeps_source() {
        use std::error::Error as _;
        let e = AppError::Io {
            path: PathBuf::from("nowhere.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "Failed to open nowhere.csv: not found");
    }
}
