//! Client registry and operation log for the spraying service.
//!
//! Records live in two worksheet-style tables ("Clientes" and
//! "Operaciones") accessed through the [`SheetStore`] trait: fetch all rows,
//! append one row. The store is injected everywhere so tests can run
//! against [`store::MemorySheets`] and the CLI against
//! [`store::CsvSheets`].
//!
//! The duplicate-RUC check and the count-derived record ids are evaluated
//! against the snapshot fetched in the same interaction. Two writers racing
//! on the same backing sheet can both pass their precheck; the append-only
//! store offers no conditional write, so this is an accepted weak guarantee.

pub mod client;
pub mod operation;
pub mod schema;
pub mod store;

pub use client::{create_client, find_by_ruc, list_clients, ClientRecord, NewClient};
pub use operation::{list_operations, submit_operation, Advisory, OperationDraft, OperationRecord};
pub use store::{CsvSheets, MemorySheets, Row, SheetStore, StoreError, SHEETS_ROOT_ENV};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
  #[error(transparent)]
  Store(#[from] StoreError),

  #[error("RUC '{ruc}' is already registered")]
  DuplicateRuc { ruc: String },
}

impl LedgerError {
  pub fn duplicate_ruc(ruc: impl Into<String>) -> Self {
    Self::DuplicateRuc { ruc: ruc.into() }
  }
}

/// Timestamp format shared by both worksheets, local clock.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn now_stamp() -> String {
  chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
