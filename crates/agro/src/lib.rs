//! Agronomic baseline data and operation math for drone crop spraying.
//!
//! Everything in this crate is pure: the crop coefficient table is compiled
//! in, and the calculator derives metrics from it without side effects.

pub mod calc;
pub mod crop;

pub use calc::{compute, OperationMetrics, MINUTES_PER_FLIGHT, TANK_CAPACITY_LITERS};
pub use crop::{Crop, CropProfile};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgroError {
  #[error("Unknown crop '{name}' (supported: Banano, Maíz, Arroz, Cacao)")]
  UnknownCrop { name: String },

  #[error("Invalid input: {message}")]
  InvalidInput { message: String },
}

impl AgroError {
  pub fn unknown_crop(name: impl Into<String>) -> Self {
    Self::UnknownCrop { name: name.into() }
  }

  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput { message: message.into() }
  }
}
