//! The operation log: assembling and appending "Operaciones" rows.

use agro::{Crop, OperationMetrics};
use serde::{Deserialize, Serialize};

use crate::schema::OPERATIONS_SHEET;
use crate::store::{Row, SheetStore};
use crate::{now_stamp, LedgerError};

/// Operator-entered advisory figures, free text. Pre-filled from the crop
/// profile's suggested ranges and overridable field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
  pub speed: String,
  pub height: String,
  pub swath: String,
  pub droplet: String,
  pub application_rate: String,
}

impl Advisory {
  /// The crop profile's suggested values, as the form pre-filled them.
  pub fn suggested(crop: Crop) -> Self {
    let profile = crop.profile();
    Self {
      speed: profile.speed_range.to_string(),
      height: profile.height_range.to_string(),
      swath: profile.swath_range.to_string(),
      droplet: profile.droplet_size.to_string(),
      application_rate: profile.application_rate.to_string(),
    }
  }
}

/// Everything the operator enters for one operation; the derived metrics
/// come from the calculator separately.
#[derive(Debug, Clone)]
pub struct OperationDraft {
  pub ruc: String,
  pub crop: Crop,
  pub hectares: f64,
  pub dilution_percent: f64,
  pub mixture_description: String,
  pub growth_stage: String,
  pub treatment_type: String,
  pub terrain_conditions: String,
  pub environmental_conditions: String,
  pub safety_notes: String,
  pub advisory: Advisory,
}

/// A row of the operation log, as read back from the worksheet.
///
/// `index` is count-derived at append time, not a stable key. The RUC is a
/// free reference; nothing validates it against the client registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
  pub index: u32,
  pub ruc: String,
  pub crop_name: String,
  pub hectares: f64,
  pub dilution_percent: f64,
  pub mixture_description: String,
  pub growth_stage: String,
  pub treatment_type: String,
  pub terrain_conditions: String,
  pub environmental_conditions: String,
  pub safety_notes: String,
  pub total_solution_liters: f64,
  pub pure_product_liters: f64,
  pub flights: u32,
  pub estimated_hours: f64,
  pub advisory: Advisory,
  pub created_at: String,
}

impl OperationRecord {
  /// Build a record from a fetched row, with the same tolerant cell
  /// parsing as the client registry.
  pub fn from_row(row: &Row) -> Self {
    let cell = |column: &str| row.get(column).cloned().unwrap_or_default();
    let number = |column: &str| cell(column).trim().parse().unwrap_or(0.0);
    Self {
      index: cell("index").trim().parse().unwrap_or(0),
      ruc: cell("RUC"),
      crop_name: cell("cultivo"),
      hectares: number("hectáreas"),
      dilution_percent: number("dilución"),
      mixture_description: cell("descripción fórmula"),
      growth_stage: cell("etapa cultivo"),
      treatment_type: cell("tipo tratamiento"),
      terrain_conditions: cell("condiciones terreno"),
      environmental_conditions: cell("condiciones ambientales"),
      safety_notes: cell("seguridad/observaciones"),
      total_solution_liters: number("solución total"),
      pure_product_liters: number("producto puro"),
      flights: cell("vuelos").trim().parse().unwrap_or(0),
      estimated_hours: number("tiempo"),
      advisory: Advisory {
        speed: cell("velocidad"),
        height: cell("altura"),
        swath: cell("faja"),
        droplet: cell("gota"),
        application_rate: cell("tasa aplicación"),
      },
      created_at: cell("fecha"),
    }
  }
}

/// Append one operation to the log.
///
/// The index is count + 1 over the rows fetched immediately before the
/// write, so it shares the client registry's weak sequential-id guarantee.
/// Derived cells carry the display formatting: two decimals, and flights
/// as the rounded-up whole number.
pub fn submit_operation(
  store: &dyn SheetStore,
  draft: OperationDraft,
  metrics: &OperationMetrics,
) -> Result<OperationRecord, LedgerError> {
  let index = store.fetch_all(OPERATIONS_SHEET)?.len() as u32 + 1;
  let created_at = now_stamp();

  let cells = vec![
    index.to_string(),
    draft.ruc.clone(),
    draft.crop.to_string(),
    draft.hectares.to_string(),
    draft.dilution_percent.to_string(),
    draft.mixture_description.clone(),
    draft.growth_stage.clone(),
    draft.treatment_type.clone(),
    draft.terrain_conditions.clone(),
    draft.environmental_conditions.clone(),
    draft.safety_notes.clone(),
    metrics.total_solution_display(),
    metrics.pure_product_display(),
    metrics.flights_whole().to_string(),
    metrics.estimated_hours_display(),
    draft.advisory.speed.clone(),
    draft.advisory.height.clone(),
    draft.advisory.swath.clone(),
    draft.advisory.droplet.clone(),
    draft.advisory.application_rate.clone(),
    created_at.clone(),
  ];
  store.append_row(OPERATIONS_SHEET, &cells)?;

  Ok(OperationRecord {
    index,
    ruc: draft.ruc,
    crop_name: draft.crop.to_string(),
    hectares: draft.hectares,
    dilution_percent: draft.dilution_percent,
    mixture_description: draft.mixture_description,
    growth_stage: draft.growth_stage,
    treatment_type: draft.treatment_type,
    terrain_conditions: draft.terrain_conditions,
    environmental_conditions: draft.environmental_conditions,
    safety_notes: draft.safety_notes,
    total_solution_liters: metrics.total_solution_liters,
    pure_product_liters: metrics.pure_product_liters,
    flights: metrics.flights_whole(),
    estimated_hours: metrics.estimated_hours,
    advisory: draft.advisory,
    created_at,
  })
}

/// All logged operations, in sheet order.
pub fn list_operations(store: &dyn SheetStore) -> Result<Vec<OperationRecord>, LedgerError> {
  let rows = store.fetch_all(OPERATIONS_SHEET)?;
  Ok(rows.iter().map(OperationRecord::from_row).collect())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::MemorySheets;
  use agro::compute;

  fn draft(ruc: &str, crop: Crop, hectares: f64, dilution: f64) -> OperationDraft {
    OperationDraft {
      ruc: ruc.to_string(),
      crop,
      hectares,
      dilution_percent: dilution,
      mixture_description: "Fungicida X + adherente".to_string(),
      growth_stage: "Floración".to_string(),
      treatment_type: "Preventivo".to_string(),
      terrain_conditions: "Plano, húmedo".to_string(),
      environmental_conditions: "Viento 5 km/h".to_string(),
      safety_notes: "EPP completo".to_string(),
      advisory: Advisory::suggested(crop),
    }
  }

  #[test]
  fn submit_appends_the_full_row_in_schema_order() {
    let store = MemorySheets::new();
    let d = draft("0912345678", Crop::Banano, 10.0, 50.0);
    let metrics = compute(d.crop.profile(), d.hectares, d.dilution_percent).unwrap();

    let record = submit_operation(&store, d, &metrics).unwrap();
    assert_eq!(record.index, 1);

    let rows = store.fetch_all(OPERATIONS_SHEET).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["index"], "1");
    assert_eq!(rows[0]["cultivo"], "Banano");
    assert_eq!(rows[0]["solución total"], "180.00");
    assert_eq!(rows[0]["producto puro"], "90.00");
    assert_eq!(rows[0]["vuelos"], "5");
    assert_eq!(rows[0]["tiempo"], "0.75");
    assert_eq!(rows[0]["velocidad"], "20-30 km/h");
    assert_eq!(rows[0]["tasa aplicación"], "18");
    assert!(!rows[0]["fecha"].is_empty());
  }

  #[test]
  fn indices_derive_from_row_count() {
    let store = MemorySheets::new();
    for expected in 1..=3u32 {
      let d = draft("0101", Crop::Arroz, 2.0, 0.0);
      let metrics = compute(d.crop.profile(), d.hectares, d.dilution_percent).unwrap();
      let record = submit_operation(&store, d, &metrics).unwrap();
      assert_eq!(record.index, expected);
    }
  }

  #[test]
  fn list_round_trips_submitted_operations() {
    let store = MemorySheets::new();
    let d = draft("0101", Crop::Arroz, 2.0, 0.0);
    let metrics = compute(d.crop.profile(), d.hectares, d.dilution_percent).unwrap();
    submit_operation(&store, d, &metrics).unwrap();

    let operations = list_operations(&store).unwrap();
    assert_eq!(operations.len(), 1);
    let op = &operations[0];
    assert_eq!(op.crop_name, "Arroz");
    assert_eq!(op.hectares, 2.0);
    assert_eq!(op.total_solution_liters, 33.0);
    assert_eq!(op.pure_product_liters, 0.0);
    assert_eq!(op.flights, 1);
    // The sheet cell carries the two-decimal display value, so reading it
    // back yields 0.14, not the computed 0.1375.
    assert_eq!(op.estimated_hours, 0.14);
    assert_eq!(op.growth_stage, "Floración");
  }

  #[test]
  fn ruc_is_not_validated_against_the_registry() {
    // The log accepts any RUC string; referential integrity is out of scope.
    let store = MemorySheets::new();
    let d = draft("no-such-client", Crop::Cacao, 1.0, 10.0);
    let metrics = compute(d.crop.profile(), d.hectares, d.dilution_percent).unwrap();
    assert!(submit_operation(&store, d, &metrics).is_ok());
  }

  #[test]
  fn advisory_suggestions_follow_the_profile() {
    let advisory = Advisory::suggested(Crop::Maiz);
    assert_eq!(advisory.speed, "20-25 km/h");
    assert_eq!(advisory.droplet, "Fina/Media/Gruesa");
    assert_eq!(advisory.application_rate, "19");
  }

  #[test]
  fn store_failure_blocks_submission() {
    let store = MemorySheets::new();
    let d = draft("0101", Crop::Banano, 1.0, 0.0);
    let metrics = compute(d.crop.profile(), d.hectares, d.dilution_percent).unwrap();

    store.set_fail_access(true);
    assert!(matches!(
      submit_operation(&store, d, &metrics),
      Err(LedgerError::Store(_))
    ));
  }
}
