//! One-shot CSV seeding of the breeds table.
//!
//! Layout: a header row, then six columns per row. Column 0 is ignored; 1 = species,
//! 2 = pet_size, 3 = name, 4 = weight_min, 5 = weight_max. Rows are inserted in file
//! order and are not deduplicated against existing data.

use crate::error::ImportError;
use crate::model::NewBreed;
use crate::store::BreedStore;
use std::path::Path;

const EXPECTED_COLUMNS: usize = 6;

/// Read `path` and insert every data row. A file that is not readable CSV inserts nothing.
/// A row that fails validation or insertion stops the import; rows before it stay inserted.
pub async fn import_breeds(store: &dyn BreedStore, path: &Path) -> Result<usize, ImportError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let count = import_from_reader(store, bytes.as_slice()).await?;
    tracing::info!(path = %path.display(), rows = count, "breeds imported");
    Ok(count)
}

/// Same as [`import_breeds`] over any CSV source.
pub async fn import_from_reader<R: std::io::Read>(store: &dyn BreedStore, reader: R) -> Result<usize, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    // Read the whole file before touching the store, so a syntax error inserts nothing.
    let records = csv_reader.records().collect::<Result<Vec<_>, _>>()?;

    let mut inserted = 0;
    for (i, record) in records.iter().enumerate().skip(1) {
        let line = i + 1;
        let breed = parse_row(record, line)?;
        store
            .insert(&breed)
            .await
            .map_err(|source| ImportError::InsertFailed { line, source })?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Validate and convert one data row. `line` is 1-based, counting the header.
pub fn parse_row(record: &csv::StringRecord, line: usize) -> Result<NewBreed, ImportError> {
    if record.len() != EXPECTED_COLUMNS {
        return Err(ImportError::MalformedRow {
            line,
            found: record.len(),
        });
    }
    Ok(NewBreed {
        species: record[1].trim().to_string(),
        pet_size: record[2].trim().to_string(),
        name: record[3].trim().to_string(),
        weight_min: parse_weight(&record[4], line, "weight_min")?,
        weight_max: parse_weight(&record[5], line, "weight_max")?,
    })
}

fn parse_weight(raw: &str, line: usize, column: &'static str) -> Result<f64, ImportError> {
    raw.trim().parse::<f64>().map_err(|_| ImportError::InvalidWeight {
        line,
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn row_fields_are_trimmed() {
        let b = parse_row(&record(&["1", " Dog ", " Small", "Beagle  ", " 9", "11.5 "]), 2).unwrap();
        assert_eq!(b.species, "Dog");
        assert_eq!(b.pet_size, "Small");
        assert_eq!(b.name, "Beagle");
        assert_eq!(b.weight_min, 9.0);
        assert_eq!(b.weight_max, 11.5);
    }

    #[test]
    fn short_row_is_malformed() {
        let err = parse_row(&record(&["1", "Dog", "Small", "Beagle", "9"]), 4).unwrap_err();
        assert!(matches!(err, ImportError::MalformedRow { line: 4, found: 5 }));
    }

    #[test]
    fn bad_weight_names_column_and_line() {
        let err = parse_row(&record(&["1", "Dog", "Small", "Beagle", "9", "heavy"]), 3).unwrap_err();
        match err {
            ImportError::InvalidWeight { line, column, value } => {
                assert_eq!(line, 3);
                assert_eq!(column, "weight_max");
                assert_eq!(value, "heavy");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
