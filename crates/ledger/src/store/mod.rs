//! The worksheet store abstraction and its in-memory implementation.

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

use crate::schema;

mod csv;
pub use csv::{CsvSheets, SHEETS_ROOT_ENV};

/// One worksheet row, keyed by column header.
pub type Row = HashMap<String, String>;

#[derive(Error, Debug)]
pub enum StoreError {
  #[error("Worksheet access failed: {message}")]
  Access { message: String },

  #[error("Unknown worksheet '{name}'")]
  UnknownSheet { name: String },

  #[error("Worksheet I/O failed: {0}")]
  Io(#[from] std::io::Error),

  #[error("Worksheet parse failed: {0}")]
  Csv(#[from] ::csv::Error),
}

impl StoreError {
  pub fn access(message: impl Into<String>) -> Self {
    Self::Access { message: message.into() }
  }

  pub fn unknown_sheet(name: impl Into<String>) -> Self {
    Self::UnknownSheet { name: name.into() }
  }
}

/// A tabular, append-only record store: the two operations the registry
/// consumes, nothing more. Appends are positional in schema column order;
/// there is no conditional write, so precondition checks made against a
/// fetched snapshot can race concurrent writers.
pub trait SheetStore {
  /// All data rows of a worksheet, in sheet order, keyed by header.
  fn fetch_all(&self, sheet: &str) -> Result<Vec<Row>, StoreError>;

  /// Append one row of cells, positionally.
  fn append_row(&self, sheet: &str, cells: &[String]) -> Result<(), StoreError>;
}

#[derive(Default)]
struct MemoryState {
  sheets: HashMap<String, Vec<Vec<String>>>,
  fail_access: bool,
}

/// In-process store over the schema worksheets.
///
/// Doubles as the test fake: `set_fail_access(true)` makes every call
/// return [`StoreError::Access`], which is how tests exercise the blocked
/// store path.
#[derive(Default)]
pub struct MemorySheets {
  state: Mutex<MemoryState>,
}

impl MemorySheets {
  pub fn new() -> Self {
    Self::default()
  }

  /// Flip the store into (or out of) the failing state.
  pub fn set_fail_access(&self, fail: bool) {
    if let Ok(mut state) = self.state.lock() {
      state.fail_access = fail;
    }
  }

  fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, StoreError> {
    self.state.lock().map_err(|_| StoreError::access("sheet state poisoned"))
  }
}

impl SheetStore for MemorySheets {
  fn fetch_all(&self, sheet: &str) -> Result<Vec<Row>, StoreError> {
    let state = self.lock()?;
    if state.fail_access {
      return Err(StoreError::access(format!("worksheet '{sheet}' unavailable")));
    }
    let columns =
      schema::columns_for(sheet).ok_or_else(|| StoreError::unknown_sheet(sheet))?;

    let rows = state.sheets.get(sheet).map(Vec::as_slice).unwrap_or_default();
    Ok(rows.iter().map(|cells| zip_row(columns, cells)).collect())
  }

  fn append_row(&self, sheet: &str, cells: &[String]) -> Result<(), StoreError> {
    let mut state = self.lock()?;
    if state.fail_access {
      return Err(StoreError::access(format!("worksheet '{sheet}' unavailable")));
    }
    schema::columns_for(sheet).ok_or_else(|| StoreError::unknown_sheet(sheet))?;

    state.sheets.entry(sheet.to_string()).or_default().push(cells.to_vec());
    Ok(())
  }
}

fn zip_row(columns: &[&str], cells: &[String]) -> Row {
  columns
    .iter()
    .enumerate()
    .map(|(i, column)| {
      (column.to_string(), cells.get(i).cloned().unwrap_or_default())
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::{CLIENTS_SHEET, OPERATIONS_SHEET};

  #[test]
  fn append_then_fetch_round_trips_by_header() {
    let store = MemorySheets::new();
    let cells: Vec<String> = vec![
      "1", "0992223334", "Hacienda Rosa", "099111222", "rosa@example.ec", "Milagro",
      "Ing. Torres", "-2.1894", "-79.8891", "2024-05-01 08:00:00",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    store.append_row(CLIENTS_SHEET, &cells).unwrap();

    let rows = store.fetch_all(CLIENTS_SHEET).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["RUC"], "0992223334");
    assert_eq!(rows[0]["Nombre"], "Hacienda Rosa");
    assert_eq!(rows[0]["fecha"], "2024-05-01 08:00:00");
  }

  #[test]
  fn short_rows_fill_with_empty_cells() {
    let store = MemorySheets::new();
    store.append_row(CLIENTS_SHEET, &["7".to_string(), "0101".to_string()]).unwrap();

    let rows = store.fetch_all(CLIENTS_SHEET).unwrap();
    assert_eq!(rows[0]["id"], "7");
    assert_eq!(rows[0]["Email"], "");
  }

  #[test]
  fn unknown_sheet_is_rejected() {
    let store = MemorySheets::new();
    assert!(matches!(
      store.fetch_all("Facturas"),
      Err(StoreError::UnknownSheet { .. })
    ));
    assert!(store.append_row("Facturas", &[]).is_err());
  }

  #[test]
  fn fail_access_blocks_both_operations() {
    let store = MemorySheets::new();
    store.set_fail_access(true);

    assert!(matches!(store.fetch_all(OPERATIONS_SHEET), Err(StoreError::Access { .. })));
    assert!(matches!(
      store.append_row(OPERATIONS_SHEET, &["1".to_string()]),
      Err(StoreError::Access { .. })
    ));

    store.set_fail_access(false);
    assert!(store.fetch_all(OPERATIONS_SHEET).unwrap().is_empty());
  }
}
