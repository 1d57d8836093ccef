//! The operation calculator: derives dosage and flight-time figures from a
//! crop profile and the operator's inputs.

use serde::{Deserialize, Serialize};

use crate::{AgroError, CropProfile};

/// Tank capacity of the drone in liters. One flight empties one tank.
pub const TANK_CAPACITY_LITERS: f64 = 40.0;

/// Minutes a full spraying flight takes, takeoff to landing.
pub const MINUTES_PER_FLIGHT: f64 = 10.0;

/// Derived operational figures for one spraying job.
///
/// `flight_count` keeps its fractional value; displays and worksheet cells
/// go through [`OperationMetrics::flights_whole`], which rounds up because
/// a partial tank still costs a full takeoff-landing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationMetrics {
  pub total_solution_liters: f64,
  pub pure_product_liters: f64,
  pub flight_count: f64,
  pub estimated_hours: f64,
}

impl OperationMetrics {
  /// Flight count as a whole number of flights, rounded up.
  pub fn flights_whole(&self) -> u32 {
    self.flight_count.ceil() as u32
  }

  /// Total solution, formatted to two decimals for display and worksheets.
  pub fn total_solution_display(&self) -> String {
    format!("{:.2}", self.total_solution_liters)
  }

  /// Pure product, formatted to two decimals.
  pub fn pure_product_display(&self) -> String {
    format!("{:.2}", self.pure_product_liters)
  }

  /// Estimated hours, formatted to two decimals.
  pub fn estimated_hours_display(&self) -> String {
    format!("{:.2}", self.estimated_hours)
  }
}

/// Derive the operational metrics for spraying `hectares` of a crop with
/// the given dilution percentage.
///
/// Pure and deterministic. Rejects non-positive or non-finite hectares and
/// negative or non-finite dilution with [`AgroError::InvalidInput`]; any
/// further range constraints belong to the caller's input surface.
pub fn compute(
  profile: &CropProfile,
  hectares: f64,
  dilution_percent: f64,
) -> Result<OperationMetrics, AgroError> {
  if !hectares.is_finite() || hectares <= 0.0 {
    return Err(AgroError::invalid_input(format!("hectares must be positive, got {hectares}")));
  }
  if !dilution_percent.is_finite() || dilution_percent < 0.0 {
    return Err(AgroError::invalid_input(format!(
      "dilution percent must be zero or more, got {dilution_percent}"
    )));
  }

  let total_solution_liters = profile.application_rate * hectares;
  let pure_product_liters = total_solution_liters * (dilution_percent / 100.0);
  let flight_count = total_solution_liters / TANK_CAPACITY_LITERS;
  let estimated_hours = flight_count * MINUTES_PER_FLIGHT / 60.0;

  Ok(OperationMetrics {
    total_solution_liters,
    pure_product_liters,
    flight_count,
    estimated_hours,
  })
}
