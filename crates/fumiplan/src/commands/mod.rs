pub mod client;
pub mod crops;
pub mod operation;
pub mod plan;

use anyhow::Result;
use ledger::CsvSheets;

/// Open the worksheet store at the configured root. Store failures are
/// blocking: the caller gets the error, prints it, and stops.
pub fn open_store() -> Result<CsvSheets> {
  Ok(CsvSheets::open_default()?)
}
