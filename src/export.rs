//! CSV persistence for scraped datasets.

use std::path::Path;

use tracing::info;

use crate::error::{Result, ScrapeError};
use crate::model::BoxscoreDataset;

/// Read a previously written dataset so a new run can extend it.
///
/// A missing or malformed file is [`ScrapeError::DatasetRead`] rather than a
/// silently empty dataset; callers validate existing datasets before any
/// scraping starts to avoid wasted work.
pub fn read_dataset(path: &Path) -> Result<BoxscoreDataset> {
    let read_error = |source| ScrapeError::DatasetRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(read_error)?;
    let columns = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        rows.push(record.iter().map(String::from).collect());
    }

    let dataset = BoxscoreDataset::with_rows(columns, rows);
    info!(path = %path.display(), rows = dataset.len(), "read existing dataset");
    Ok(dataset)
}

/// Write a dataset as CSV, header first, overwriting any existing file.
pub fn write_dataset(path: &Path, dataset: &BoxscoreDataset) -> Result<()> {
    let write_error = |source| ScrapeError::DatasetWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_error)?;
    writer.write_record(dataset.columns()).map_err(write_error)?;
    for row in dataset.rows() {
        writer.write_record(row).map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|e| write_error(csv::Error::from(e)))?;

    info!(path = %path.display(), rows = dataset.len(), "wrote dataset");
    Ok(())
}
