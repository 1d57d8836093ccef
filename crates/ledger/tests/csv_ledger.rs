//! End-to-end registry flow over the CSV-backed store.

use agro::{compute, Crop};
use ledger::{
  create_client, find_by_ruc, list_operations, submit_operation, Advisory, CsvSheets, NewClient,
  OperationDraft,
};
use tempfile::TempDir;

fn new_client(ruc: &str, name: &str) -> NewClient {
  NewClient { ruc: ruc.to_string(), name: name.to_string(), ..Default::default() }
}

#[test]
fn full_flow_survives_reopening_the_store() {
  let temp = TempDir::new().unwrap();

  {
    let store = CsvSheets::new(temp.path());
    let client = create_client(&store, new_client("0992223334001", "Bananera Sur")).unwrap();
    assert_eq!(client.id, 1);

    let crop = Crop::Banano;
    let draft = OperationDraft {
      ruc: client.ruc.clone(),
      crop,
      hectares: 10.0,
      dilution_percent: 50.0,
      mixture_description: "Mezcla estándar".to_string(),
      growth_stage: "Floración".to_string(),
      treatment_type: "Preventivo".to_string(),
      terrain_conditions: "Plano".to_string(),
      environmental_conditions: "Despejado".to_string(),
      safety_notes: String::new(),
      advisory: Advisory::suggested(crop),
    };
    let metrics = compute(crop.profile(), draft.hectares, draft.dilution_percent).unwrap();
    let record = submit_operation(&store, draft, &metrics).unwrap();
    assert_eq!(record.index, 1);
    assert_eq!(record.flights, 5);
  }

  // A fresh store over the same root sees everything that was appended.
  let reopened = CsvSheets::new(temp.path());
  let client = find_by_ruc(&reopened, "0992223334001").unwrap().unwrap();
  assert_eq!(client.name, "Bananera Sur");

  let operations = list_operations(&reopened).unwrap();
  assert_eq!(operations.len(), 1);
  assert_eq!(operations[0].ruc, "0992223334001");
  assert_eq!(operations[0].total_solution_liters, 180.0);
  assert_eq!(operations[0].advisory.speed, "20-30 km/h");
}

#[test]
fn duplicate_ruc_is_refused_across_store_instances() {
  let temp = TempDir::new().unwrap();

  let store = CsvSheets::new(temp.path());
  create_client(&store, new_client("0101", "Primera")).unwrap();

  let second_session = CsvSheets::new(temp.path());
  let result = create_client(&second_session, new_client("0101", "Segunda"));
  assert!(result.is_err());
  assert!(result.unwrap_err().to_string().contains("already registered"));
}
