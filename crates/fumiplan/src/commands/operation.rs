use anyhow::Result;
use colored::*;

use agro::{compute, Crop};
use ledger::{list_operations, submit_operation, Advisory, OperationDraft};

use super::{open_store, plan};
use crate::{AdvisoryOverrides, SprayJob};

#[allow(clippy::too_many_arguments)]
pub fn save(
  ruc: String,
  job: &SprayJob,
  mixture: String,
  stage: String,
  treatment: String,
  terrain: String,
  environment: String,
  safety: String,
  overrides: AdvisoryOverrides,
) -> Result<()> {
  let crop: Crop = job.crop.parse()?;
  let metrics = compute(crop.profile(), job.hectares, job.dilution)?;

  let mut advisory = Advisory::suggested(crop);
  if let Some(speed) = overrides.speed {
    advisory.speed = speed;
  }
  if let Some(height) = overrides.height {
    advisory.height = height;
  }
  if let Some(swath) = overrides.swath {
    advisory.swath = swath;
  }
  if let Some(droplet) = overrides.droplet {
    advisory.droplet = droplet;
  }
  if let Some(rate) = overrides.rate {
    advisory.application_rate = rate;
  }

  let draft = OperationDraft {
    ruc,
    crop,
    hectares: job.hectares,
    dilution_percent: job.dilution,
    mixture_description: mixture,
    growth_stage: stage,
    treatment_type: treatment,
    terrain_conditions: terrain,
    environmental_conditions: environment,
    safety_notes: safety,
    advisory,
  };

  let store = open_store()?;
  let record = submit_operation(&store, draft, &metrics)?;

  plan::print_metrics(&metrics);
  println!();
  println!(
    "{} Operación guardada: #{} {} / {}",
    "✓".green(),
    record.index,
    record.ruc.cyan(),
    record.crop_name.yellow()
  );
  Ok(())
}

pub fn list(json: bool) -> Result<()> {
  let store = open_store()?;
  let operations = list_operations(&store)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&operations)?);
    return Ok(());
  }

  if operations.is_empty() {
    println!("No hay operaciones registradas");
    return Ok(());
  }

  for op in &operations {
    println!(
      "{:>4}  {}  {:<8} {:>7} ha  {:>8} L  {:>3} vuelos  {}",
      op.index,
      op.ruc.cyan(),
      op.crop_name,
      op.hectares,
      format!("{:.2}", op.total_solution_liters),
      op.flights,
      op.created_at
    );
  }
  println!("{} operación(es)", operations.len());
  Ok(())
}
