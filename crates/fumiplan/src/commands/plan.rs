use anyhow::Result;
use colored::*;

use agro::{compute, Crop, OperationMetrics};

use crate::SprayJob;

/// Compute and print the recommendation sheet for a job, writing nothing.
pub fn run(job: &SprayJob) -> Result<()> {
  let crop: Crop = job.crop.parse()?;
  let profile = crop.profile();
  let metrics = compute(profile, job.hectares, job.dilution)?;

  println!(
    "{} - {} ha, dilución {}%",
    crop.to_string().cyan().bold(),
    job.hectares,
    job.dilution
  );
  println!();
  println!("{}", "Recomendaciones técnicas para el operador".bold());
  println!("  Velocidad:          {}", profile.speed_range);
  println!("  Altura:             {}", profile.height_range);
  println!("  Ancho de faja:      {}", profile.swath_range);
  println!("  Tamaño de gota:     {}", profile.droplet_size);
  println!("  Tasa de aplicación: {} L/ha", profile.application_rate);
  println!();
  print_metrics(&metrics);

  Ok(())
}

pub fn print_metrics(metrics: &OperationMetrics) {
  println!("{}", "Cálculos operativos".bold());
  println!("  {} Solución total:   {} L", "✓".green(), metrics.total_solution_display());
  println!("  {} Producto puro:    {} L", "✓".green(), metrics.pure_product_display());
  println!("  {} Vuelos:           {}", "✓".green(), metrics.flights_whole());
  println!("  {} Tiempo estimado:  {} h", "✓".green(), metrics.estimated_hours_display());
}
