use serde::Serialize;
use tracing::warn;

/// An ordered, append-only accumulation of scraped records.
///
/// The column set is fixed by the first appended record (or by the header of
/// a pre-existing dataset it was seeded from); later records are padded with
/// empty values when they carry fewer fields. No deduplication is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoxscoreDataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl BoxscoreDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a dataset with an explicit header and existing rows.
    pub fn with_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append one record. The first record fixes the column set; subsequent
    /// records are padded to its width and stored positionally, so a record
    /// carrying a different header is flagged but still appended.
    pub fn append(&mut self, columns: &[String], mut values: Vec<String>) {
        if self.columns.is_empty() {
            self.columns = columns.to_vec();
        } else if self.columns != columns {
            warn!(
                expected = self.columns.len(),
                got = columns.len(),
                "record header differs from the dataset header, appending positionally"
            );
        }
        values.resize(self.columns.len(), String::new());
        self.rows.push(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_record_fixes_the_column_set() {
        let mut dataset = BoxscoreDataset::new();
        dataset.append(&cols(&["a", "b", "c"]), cols(&["1", "2", "3"]));
        dataset.append(&cols(&["a"]), cols(&["4"]));

        assert_eq!(dataset.columns(), cols(&["a", "b", "c"]));
        assert_eq!(dataset.rows()[1], cols(&["4", "", ""]));
    }

    #[test]
    fn mismatched_header_still_appends_positionally() {
        let mut dataset = BoxscoreDataset::with_rows(cols(&["a", "b", "c"]), Vec::new());
        dataset.append(&cols(&["a", "x"]), cols(&["1", "2"]));

        // The seeded header wins; the record lands padded to its width.
        assert_eq!(dataset.columns(), cols(&["a", "b", "c"]));
        assert_eq!(dataset.rows()[0], cols(&["1", "2", ""]));
    }

    #[test]
    fn seeded_dataset_keeps_existing_rows_first() {
        let mut dataset =
            BoxscoreDataset::with_rows(cols(&["a", "b"]), vec![cols(&["old", "row"])]);
        dataset.append(&cols(&["a", "b"]), cols(&["new", "row"]));

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0], cols(&["old", "row"]));
    }
}
