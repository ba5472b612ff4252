//! CSV manifest loader for cargo items
//!
//! Expected columns: kind,id,weight,volume with kind one of bulk, pallet
//! or custom. A leading header row is skipped when present.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use stowage_types::CargoItem;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown cargo kind in row {row}: {value}")]
    UnknownKind { row: usize, value: String },

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing field in row {row}")]
    MissingField { row: usize },

    #[error("Invalid item in row {row}: {message}")]
    InvalidItem { row: usize, message: String },

    #[error("Manifest contains no items")]
    Empty,
}

/// Load cargo items from a CSV manifest, in file order
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<CargoItem>, ManifestError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut items = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 1;

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        if row_num == 1 && is_header(&record) {
            continue;
        }

        items.push(parse_record(&record, row_num)?);
    }

    if items.is_empty() {
        return Err(ManifestError::Empty);
    }

    Ok(items)
}

fn is_header(record: &csv::StringRecord) -> bool {
    record
        .get(0)
        .map(|field| field.eq_ignore_ascii_case("kind"))
        .unwrap_or(false)
}

fn parse_record(record: &csv::StringRecord, row_num: usize) -> Result<CargoItem, ManifestError> {
    let kind = field(record, 0, row_num)?;
    let id = field(record, 1, row_num)?;
    let weight = parse_u32(field(record, 2, row_num)?, row_num, "weight")?;
    let volume = parse_f64(field(record, 3, row_num)?, row_num, "volume")?;

    let item = match kind.to_lowercase().as_str() {
        "bulk" => CargoItem::bulk(id, weight, volume),
        "pallet" => CargoItem::pallet(id, weight, volume),
        "custom" => CargoItem::ad_hoc(id, weight, volume),
        _ => {
            return Err(ManifestError::UnknownKind {
                row: row_num,
                value: kind.to_string(),
            })
        }
    };

    item.map_err(|e| ManifestError::InvalidItem {
        row: row_num,
        message: e.to_string(),
    })
}

fn field<'a>(record: &'a csv::StringRecord, index: usize, row_num: usize) -> Result<&'a str, ManifestError> {
    record
        .get(index)
        .ok_or(ManifestError::MissingField { row: row_num })
}

fn parse_u32(s: &str, row: usize, column: &str) -> Result<u32, ManifestError> {
    s.replace(',', "")
        .parse()
        .map_err(|_| ManifestError::InvalidNumber {
            row,
            column: column.to_string(),
            value: s.to_string(),
        })
}

fn parse_f64(s: &str, row: usize, column: &str) -> Result<f64, ManifestError> {
    s.replace(',', "")
        .parse()
        .map_err(|_| ManifestError::InvalidNumber {
            row,
            column: column.to_string(),
            value: s.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_manifest(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.csv");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_with_header() {
        let (_dir, path) =
            write_manifest("kind,id,weight,volume\nbulk,V001,10,20.0\npallet,P001,5,10.0\n");
        let items = load_manifest(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id(), "V001");
        assert_eq!(items[1].weight(), 5);
    }

    #[test]
    fn test_header_is_optional() {
        let (_dir, path) = write_manifest("bulk,V001,10,20.0\n");
        let items = load_manifest(&path).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_kind_is_case_insensitive() {
        let (_dir, path) = write_manifest("BULK,V001,10,20.0\nPallet,P001,5,10.0\n");
        let items = load_manifest(&path).unwrap();
        assert_eq!(items[0].kind().label(), "bulk");
        assert_eq!(items[1].kind().label(), "pallet");
    }

    #[test]
    fn test_blank_rows_skipped() {
        let (_dir, path) = write_manifest("bulk,V001,10,20.0\n\nbulk,V002,5,1.0\n");
        let items = load_manifest(&path).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_unknown_kind_reports_row() {
        let (_dir, path) = write_manifest("kind,id,weight,volume\nbulk,V001,10,20.0\ncrate,X,1,1.0\n");
        let err = load_manifest(&path).unwrap_err();
        match err {
            ManifestError::UnknownKind { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "crate");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_invalid_number_reports_column() {
        let (_dir, path) = write_manifest("bulk,V001,heavy,20.0\n");
        let err = load_manifest(&path).unwrap_err();
        match err {
            ManifestError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "weight");
                assert_eq!(value, "heavy");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_invalid_item_reports_row() {
        let (_dir, path) = write_manifest("pallet,P001,0,10.0\n");
        let err = load_manifest(&path).unwrap_err();
        match err {
            ManifestError::InvalidItem { row, message } => {
                assert_eq!(row, 1);
                assert!(message.contains("pallet weight cannot be zero"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_short_row_reports_missing_field() {
        let (_dir, path) = write_manifest("bulk,V001,10\n");
        assert!(matches!(
            load_manifest(&path),
            Err(ManifestError::MissingField { row: 1 })
        ));
    }

    #[test]
    fn test_header_only_manifest_is_empty() {
        let (_dir, path) = write_manifest("kind,id,weight,volume\n");
        assert!(matches!(load_manifest(&path), Err(ManifestError::Empty)));
    }

    #[test]
    fn test_custom_rows_are_distinct_items() {
        let (_dir, path) = write_manifest("custom,C1,7,3.0\ncustom,C1,7,3.0\n");
        let items = load_manifest(&path).unwrap();
        assert!(!items[0].matches(&items[1]));
    }
}
