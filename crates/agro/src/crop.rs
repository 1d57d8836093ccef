//! The crop coefficient table: recommended application parameters per crop
//! for the DJI Agras T50, as published in the operational recommendation
//! sheet. Fixed at compile time, never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AgroError;

/// Recommended application parameters for one crop.
///
/// `application_rate` is numeric (it feeds the calculator); the remaining
/// fields are operator-facing display ranges, carried verbatim from the
/// recommendation sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropProfile {
  /// Liters of solution per hectare
  pub application_rate: f64,
  pub speed_range: &'static str,
  pub height_range: &'static str,
  pub swath_range: &'static str,
  pub droplet_size: &'static str,
}

/// The crops the operation currently supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
  Banano,
  Maiz,
  Arroz,
  Cacao,
}

static BANANO: CropProfile = CropProfile {
  application_rate: 18.0,
  speed_range: "20-30 km/h",
  height_range: "7-8 m",
  swath_range: "7-9.5 m",
  droplet_size: "Fina/Media",
};

static MAIZ: CropProfile = CropProfile {
  application_rate: 19.0,
  speed_range: "20-25 km/h",
  height_range: "5-6 m",
  swath_range: "7-8.5 m",
  droplet_size: "Fina/Media/Gruesa",
};

static ARROZ: CropProfile = CropProfile {
  application_rate: 16.5,
  speed_range: "25-30 km/h",
  height_range: "4-7 m",
  swath_range: "6.5-8 m",
  droplet_size: "Muy Fina/Fina/Media",
};

static CACAO: CropProfile = CropProfile {
  application_rate: 25.0,
  speed_range: "20-25 km/h",
  height_range: "7 m",
  swath_range: "7-8.5 m",
  droplet_size: "Muy Fina/Fina/Media",
};

impl Crop {
  /// All supported crops, in the order the recommendation sheet lists them.
  pub const ALL: [Crop; 4] = [Crop::Banano, Crop::Maiz, Crop::Arroz, Crop::Cacao];

  /// The fixed technical baseline for this crop.
  pub fn profile(&self) -> &'static CropProfile {
    match self {
      Crop::Banano => &BANANO,
      Crop::Maiz => &MAIZ,
      Crop::Arroz => &ARROZ,
      Crop::Cacao => &CACAO,
    }
  }
}

impl fmt::Display for Crop {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Crop::Banano => "Banano",
      Crop::Maiz => "Maíz",
      Crop::Arroz => "Arroz",
      Crop::Cacao => "Cacao",
    };
    write!(f, "{name}")
  }
}

impl FromStr for Crop {
  type Err = AgroError;

  /// Case-insensitive, and tolerant of the accentless spelling of Maíz so
  /// the name survives ASCII-only shells.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "banano" => Ok(Crop::Banano),
      "maíz" | "maiz" => Ok(Crop::Maiz),
      "arroz" => Ok(Crop::Arroz),
      "cacao" => Ok(Crop::Cacao),
      _ => Err(AgroError::unknown_crop(s.trim())),
    }
  }
}
