use anyhow::Result;
use colored::*;

use agro::Crop;

/// Print the fixed per-crop recommendation table.
pub fn show() -> Result<()> {
  println!("{}", "Tabla de coeficientes por cultivo".bold());
  println!(
    "{:<8} {:>12} {:<12} {:<8} {:<10} {}",
    "CULTIVO", "TASA (L/ha)", "VELOCIDAD", "ALTURA", "FAJA", "GOTA"
  );
  println!("{}", "-".repeat(72));

  for crop in Crop::ALL {
    let profile = crop.profile();
    println!(
      "{:<8} {:>12} {:<12} {:<8} {:<10} {}",
      crop.to_string().cyan(),
      profile.application_rate,
      profile.speed_range,
      profile.height_range,
      profile.swath_range,
      profile.droplet_size
    );
  }

  Ok(())
}
