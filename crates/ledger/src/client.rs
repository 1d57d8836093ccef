//! The client registry: lookup and creation over the "Clientes" worksheet.

use serde::{Deserialize, Serialize};

use crate::schema::CLIENTS_SHEET;
use crate::store::{Row, SheetStore};
use crate::{now_stamp, LedgerError};

/// Fallback coordinates when the caller provides none: the operations base
/// in Guayaquil, matching the old map-picker default.
pub const DEFAULT_LAT: f64 = -2.1894;
pub const DEFAULT_LON: f64 = -79.8891;

/// A row of the client registry.
///
/// `id` is sequential and 1-based, assigned as fetched count + 1 at
/// creation time. It is not a stable unique key; the RUC is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
  pub id: u32,
  pub ruc: String,
  pub name: String,
  pub phone: String,
  pub email: String,
  pub location: String,
  pub technical_contact: String,
  pub lat: f64,
  pub lon: f64,
  pub created_at: String,
}

/// Operator input for client creation; everything but RUC and name is
/// optional free text.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
  pub ruc: String,
  pub name: String,
  pub phone: String,
  pub email: String,
  pub location: String,
  pub technical_contact: String,
  pub lat: Option<f64>,
  pub lon: Option<f64>,
}

impl ClientRecord {
  /// Build a record from a fetched row. Tolerant of the loose typing of
  /// worksheet cells: missing cells read as empty, unparseable numbers fall
  /// back to defaults.
  pub fn from_row(row: &Row) -> Self {
    let cell = |column: &str| row.get(column).cloned().unwrap_or_default();
    Self {
      id: cell("id").trim().parse().unwrap_or(0),
      ruc: cell("RUC"),
      name: cell("Nombre"),
      phone: cell("Teléfono"),
      email: cell("Email"),
      location: cell("Ubicación"),
      technical_contact: cell("Responsable Técnico"),
      lat: cell("lat").trim().parse().unwrap_or(DEFAULT_LAT),
      lon: cell("lon").trim().parse().unwrap_or(DEFAULT_LON),
      created_at: cell("fecha"),
    }
  }

  /// The record's cells in `schema::CLIENT_COLUMNS` order.
  pub fn to_cells(&self) -> Vec<String> {
    vec![
      self.id.to_string(),
      self.ruc.clone(),
      self.name.clone(),
      self.phone.clone(),
      self.email.clone(),
      self.location.clone(),
      self.technical_contact.clone(),
      self.lat.to_string(),
      self.lon.to_string(),
      self.created_at.clone(),
    ]
  }
}

/// Find a client by exact RUC match; first match wins.
pub fn find_by_ruc(
  store: &dyn SheetStore,
  ruc: &str,
) -> Result<Option<ClientRecord>, LedgerError> {
  let rows = store.fetch_all(CLIENTS_SHEET)?;
  Ok(rows.iter().find(|row| row.get("RUC").map(String::as_str) == Some(ruc)).map(ClientRecord::from_row))
}

/// All clients, in sheet order.
pub fn list_clients(store: &dyn SheetStore) -> Result<Vec<ClientRecord>, LedgerError> {
  let rows = store.fetch_all(CLIENTS_SHEET)?;
  Ok(rows.iter().map(ClientRecord::from_row).collect())
}

/// Register a new client.
///
/// Fails with [`LedgerError::DuplicateRuc`] without appending when the RUC
/// already exists in the fetched snapshot. The check is snapshot-local, not
/// transactional.
pub fn create_client(
  store: &dyn SheetStore,
  candidate: NewClient,
) -> Result<ClientRecord, LedgerError> {
  let rows = store.fetch_all(CLIENTS_SHEET)?;
  if rows.iter().any(|row| row.get("RUC").map(String::as_str) == Some(candidate.ruc.as_str())) {
    return Err(LedgerError::duplicate_ruc(candidate.ruc));
  }

  let record = ClientRecord {
    id: rows.len() as u32 + 1,
    ruc: candidate.ruc,
    name: candidate.name,
    phone: candidate.phone,
    email: candidate.email,
    location: candidate.location,
    technical_contact: candidate.technical_contact,
    lat: candidate.lat.unwrap_or(DEFAULT_LAT),
    lon: candidate.lon.unwrap_or(DEFAULT_LON),
    created_at: now_stamp(),
  };

  store.append_row(CLIENTS_SHEET, &record.to_cells())?;
  Ok(record)
}
