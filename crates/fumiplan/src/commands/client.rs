use anyhow::Result;
use colored::*;

use ledger::{create_client, find_by_ruc, list_clients, ClientRecord, NewClient};

use super::open_store;

#[allow(clippy::too_many_arguments)]
pub fn add(
  ruc: String,
  name: String,
  phone: String,
  email: String,
  location: String,
  contact: String,
  lat: Option<f64>,
  lon: Option<f64>,
) -> Result<()> {
  let store = open_store()?;

  let record = create_client(
    &store,
    NewClient { ruc, name, phone, email, location, technical_contact: contact, lat, lon },
  )?;

  println!(
    "{} Cliente guardado: {} {} (id {})",
    "✓".green(),
    record.ruc.cyan(),
    record.name.yellow(),
    record.id
  );
  Ok(())
}

pub fn find(ruc: &str) -> Result<()> {
  let store = open_store()?;

  match find_by_ruc(&store, ruc)? {
    Some(record) => print_client(&record),
    None => vocera::warn(&format!("Cliente no encontrado: {ruc}")),
  }
  Ok(())
}

pub fn list(json: bool) -> Result<()> {
  let store = open_store()?;
  let clients = list_clients(&store)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&clients)?);
    return Ok(());
  }

  if clients.is_empty() {
    println!("No hay clientes registrados");
    return Ok(());
  }

  for record in &clients {
    println!(
      "{:>4}  {}  {}  {}",
      record.id,
      record.ruc.cyan(),
      record.name.yellow(),
      record.location
    );
  }
  println!("{} cliente(s)", clients.len());
  Ok(())
}

fn print_client(record: &ClientRecord) {
  println!("{} {}", record.ruc.cyan().bold(), record.name.yellow().bold());
  if !record.phone.is_empty() {
    println!("  Teléfono:    {}", record.phone);
  }
  if !record.email.is_empty() {
    println!("  Email:       {}", record.email);
  }
  if !record.location.is_empty() {
    println!("  Ubicación:   {}", record.location);
  }
  if !record.technical_contact.is_empty() {
    println!("  Responsable: {}", record.technical_contact);
  }
  println!("  Coordenadas: {:.4}, {:.4}", record.lat, record.lon);
  println!("  Registrado:  {}", record.created_at);
}
