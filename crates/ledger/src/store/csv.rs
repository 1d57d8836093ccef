//! CSV-file-backed worksheets: one file per sheet under a root directory.

use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use super::{Row, SheetStore, StoreError};
use crate::schema;

/// Environment variable overriding the worksheet root, used by tests and
/// by deployments that keep the sheets somewhere else.
pub const SHEETS_ROOT_ENV: &str = "FUMIPLAN_SHEETS_ROOT";

/// Worksheets stored as CSV files, one per sheet, created with their schema
/// header on first touch.
pub struct CsvSheets {
  root: PathBuf,
}

impl CsvSheets {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Open the store at the configured root: `FUMIPLAN_SHEETS_ROOT` if set,
  /// otherwise `~/.fumiplan/sheets`.
  pub fn open_default() -> Result<Self, StoreError> {
    if let Ok(custom_root) = std::env::var(SHEETS_ROOT_ENV) {
      return Ok(Self::new(custom_root));
    }

    let home = dirs::home_dir()
      .ok_or_else(|| StoreError::access("could not find home directory"))?;
    Ok(Self::new(home.join(".fumiplan").join("sheets")))
  }

  pub fn root(&self) -> &std::path::Path {
    &self.root
  }

  /// Path of the sheet's CSV file, creating the file with its header row if
  /// it does not exist yet.
  fn ensure_sheet(&self, sheet: &str) -> Result<PathBuf, StoreError> {
    let columns =
      schema::columns_for(sheet).ok_or_else(|| StoreError::unknown_sheet(sheet))?;

    fs::create_dir_all(&self.root)?;
    let path = self.root.join(format!("{sheet}.csv"));
    if !path.exists() {
      let mut writer = WriterBuilder::new().from_path(&path)?;
      writer.write_record(columns)?;
      writer.flush()?;
    }
    Ok(path)
  }
}

impl SheetStore for CsvSheets {
  fn fetch_all(&self, sheet: &str) -> Result<Vec<Row>, StoreError> {
    let path = self.ensure_sheet(sheet)?;

    // Flexible: short rows read back padded with empty cells, the same
    // contract MemorySheets gives.
    let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).from_path(&path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
      let record = record?;
      let row: Row = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
          (header.to_string(), record.get(i).unwrap_or_default().to_string())
        })
        .collect();
      rows.push(row);
    }
    Ok(rows)
  }

  fn append_row(&self, sheet: &str, cells: &[String]) -> Result<(), StoreError> {
    let path = self.ensure_sheet(sheet)?;

    let file = OpenOptions::new().append(true).open(&path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(cells)?;
    writer.flush()?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::{CLIENTS_SHEET, CLIENT_COLUMNS};
  use tempfile::TempDir;

  #[test]
  fn first_touch_creates_file_with_header() {
    let temp = TempDir::new().unwrap();
    let store = CsvSheets::new(temp.path());

    assert!(store.fetch_all(CLIENTS_SHEET).unwrap().is_empty());

    let contents = std::fs::read_to_string(temp.path().join("Clientes.csv")).unwrap();
    let header = contents.lines().next().unwrap();
    assert!(header.contains("RUC"));
    assert!(header.contains("Responsable Técnico"));
  }

  #[test]
  fn appended_rows_come_back_keyed_and_ordered() {
    let temp = TempDir::new().unwrap();
    let store = CsvSheets::new(temp.path());

    let mut first: Vec<String> = CLIENT_COLUMNS.iter().map(|c| format!("a-{c}")).collect();
    first[0] = "1".to_string();
    let mut second: Vec<String> = CLIENT_COLUMNS.iter().map(|c| format!("b-{c}")).collect();
    second[0] = "2".to_string();

    store.append_row(CLIENTS_SHEET, &first).unwrap();
    store.append_row(CLIENTS_SHEET, &second).unwrap();

    let rows = store.fetch_all(CLIENTS_SHEET).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "1");
    assert_eq!(rows[0]["Nombre"], "a-Nombre");
    assert_eq!(rows[1]["id"], "2");
    assert_eq!(rows[1]["Ubicación"], "b-Ubicación");
  }

  #[test]
  fn short_rows_fill_with_empty_cells() {
    let temp = TempDir::new().unwrap();
    let store = CsvSheets::new(temp.path());

    store.append_row(CLIENTS_SHEET, &["7".to_string(), "0101".to_string()]).unwrap();

    let rows = store.fetch_all(CLIENTS_SHEET).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "7");
    assert_eq!(rows[0]["RUC"], "0101");
    assert_eq!(rows[0]["Email"], "");
    assert_eq!(rows[0]["fecha"], "");
  }

  #[test]
  fn cells_with_commas_survive_the_round_trip() {
    let temp = TempDir::new().unwrap();
    let store = CsvSheets::new(temp.path());

    let mut cells: Vec<String> = CLIENT_COLUMNS.iter().map(|_| String::new()).collect();
    cells[5] = "Km 12, vía Durán-Tambo".to_string();
    store.append_row(CLIENTS_SHEET, &cells).unwrap();

    let rows = store.fetch_all(CLIENTS_SHEET).unwrap();
    assert_eq!(rows[0]["Ubicación"], "Km 12, vía Durán-Tambo");
  }

  #[test]
  fn unknown_sheet_is_rejected_before_touching_disk() {
    let temp = TempDir::new().unwrap();
    let store = CsvSheets::new(temp.path());

    assert!(matches!(store.fetch_all("Facturas"), Err(StoreError::UnknownSheet { .. })));
    assert!(!temp.path().join("Facturas.csv").exists());
  }
}
