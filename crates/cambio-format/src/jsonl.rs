//! Newline-delimited JSON record output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use cambio_types::RateRecord;
use thiserror::Error;

/// Errors that can occur while writing records.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Output directory does not exist.
    #[error("Cannot write to file, path does not exist: {0}")]
    MissingDirectory(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes records as one compact JSON object per line, in input order.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_records<W: Write>(records: &[RateRecord], mut writer: W) -> Result<(), FormatError> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes records to `{stem}.jsonl`, returning the path written.
///
/// The parent directory must already exist and is checked before the file
/// is created, so an invalid path never produces an artifact. A failure
/// after creation leaves whatever lines were already written on disk.
///
/// # Errors
///
/// Returns an error if the parent directory is missing or the write fails.
pub fn write_records_file(records: &[RateRecord], stem: &Path) -> Result<PathBuf, FormatError> {
    let path = jsonl_path(stem);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        && !parent.is_dir()
    {
        return Err(FormatError::MissingDirectory(parent.to_path_buf()));
    }
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    write_records(records, &mut writer)?;
    writer.flush()?;
    Ok(path)
}

/// Appends the `.jsonl` extension to an output stem.
#[must_use]
pub fn jsonl_path(stem: &Path) -> PathBuf {
    let mut path = stem.as_os_str().to_os_string();
    path.push(".jsonl");
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn sample_records() -> Vec<RateRecord> {
        vec![
            RateRecord::new(
                NaiveDate::from_ymd_opt(2021, 2, 1).unwrap(),
                "USD".to_string(),
                "EUR".to_string(),
                0.82754,
            ),
            RateRecord::new(
                NaiveDate::from_ymd_opt(2021, 2, 2).unwrap(),
                "USD".to_string(),
                "EUR".to_string(),
                0.83029,
            ),
        ]
    }

    #[test]
    fn test_one_line_per_record() {
        let mut output = Cursor::new(Vec::new());
        write_records(&sample_records(), &mut output).unwrap();

        let text = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"date":"2021-02-01","base":"USD","symbol":"EUR","rate":0.82754}"#
        );
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let records = sample_records();

        let written = write_records_file(&records, &dir.path().join("rates")).unwrap();
        assert_eq!(written, dir.path().join("rates.jsonl"));

        let text = std::fs::read_to_string(&written).unwrap();
        let parsed: Vec<RateRecord> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_empty_records_write_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_records_file(&[], &dir.path().join("rates")).unwrap();
        assert_eq!(std::fs::read_to_string(written).unwrap(), "");
    }

    #[test]
    fn test_missing_directory_refused_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("no_such_dir").join("rates");

        let err = write_records_file(&sample_records(), &stem).unwrap_err();
        assert!(matches!(err, FormatError::MissingDirectory(_)));
        assert!(!stem.with_extension("jsonl").exists());
    }

    #[test]
    fn test_jsonl_path_appends_extension() {
        assert_eq!(jsonl_path(Path::new("rates")), PathBuf::from("rates.jsonl"));
        assert_eq!(
            jsonl_path(Path::new("out/rates")),
            PathBuf::from("out/rates.jsonl")
        );
    }
}
