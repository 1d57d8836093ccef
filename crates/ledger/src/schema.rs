//! Worksheet names and column layouts.
//!
//! Column order is positional on append and must match these arrays
//! exactly; readers key cells by header name.

/// The client registry worksheet.
pub const CLIENTS_SHEET: &str = "Clientes";

/// The operation log worksheet.
pub const OPERATIONS_SHEET: &str = "Operaciones";

pub const CLIENT_COLUMNS: [&str; 10] = [
  "id",
  "RUC",
  "Nombre",
  "Teléfono",
  "Email",
  "Ubicación",
  "Responsable Técnico",
  "lat",
  "lon",
  "fecha",
];

pub const OPERATION_COLUMNS: [&str; 21] = [
  "index",
  "RUC",
  "cultivo",
  "hectáreas",
  "dilución",
  "descripción fórmula",
  "etapa cultivo",
  "tipo tratamiento",
  "condiciones terreno",
  "condiciones ambientales",
  "seguridad/observaciones",
  "solución total",
  "producto puro",
  "vuelos",
  "tiempo",
  "velocidad",
  "altura",
  "faja",
  "gota",
  "tasa aplicación",
  "fecha",
];

/// The column layout for a known worksheet, `None` for anything else.
pub fn columns_for(sheet: &str) -> Option<&'static [&'static str]> {
  match sheet {
    CLIENTS_SHEET => Some(&CLIENT_COLUMNS),
    OPERATIONS_SHEET => Some(&OPERATION_COLUMNS),
    _ => None,
  }
}
