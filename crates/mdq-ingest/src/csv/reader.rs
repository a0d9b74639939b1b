//! CSV file reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

use super::header::parse_header_line;

fn open_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads the first line of a file, `None` for an empty file.
fn read_first_line(path: &Path) -> Result<Option<String>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Reads and normalizes the header row without loading any data rows.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let Some(line) = read_first_line(path)? else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    let columns = parse_header_line(&line);
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Column types are inferred from every row, so numeric columns arrive as
/// integers or floats and empty cells as nulls.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_headers() {
        let file = create_temp_csv("id,name,email\n1,Ann,a@b.com\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers, vec!["id", "name", "email"]);
    }

    #[test]
    fn test_read_csv_headers_with_bom() {
        let file = create_temp_csv("\u{feff}id,name\n1,Ann\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers, vec!["id", "name"]);
    }

    #[test]
    fn test_read_csv_headers_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_headers(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_csv_headers_blank_line() {
        let file = create_temp_csv("\n1,2\n");
        let result = read_csv_headers(file.path());
        assert!(matches!(result, Err(IngestError::NoHeaderDetected { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_csv_headers(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_csv_frame_shape() {
        let file = create_temp_csv("A,B,C\n1,2,3\n4,5,6\n");
        let df = read_csv_frame(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
    }
}
