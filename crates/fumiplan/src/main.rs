use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fumiplan")]
#[command(
  about = "Fumiplan - Hoja de Recomendaciones Operativas\nDosage and flight planning for drone crop spraying (DJI Agras T50)"
)]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

/// Spraying job inputs shared by planning and logging
#[derive(Args)]
struct SprayJob {
  /// Crop to spray (Banano, Maíz, Arroz, Cacao)
  crop: String,
  /// Surface to treat, in hectares
  hectares: f64,
  /// Dilution of active product, percent
  #[arg(short, long, default_value_t = 0.0)]
  dilution: f64,
}

/// Operator overrides for the advisory fields; each defaults to the crop
/// profile's suggested value
#[derive(Args, Default)]
struct AdvisoryOverrides {
  /// Flight speed to record (free text)
  #[arg(long)]
  speed: Option<String>,
  /// Flight height to record (free text)
  #[arg(long)]
  height: Option<String>,
  /// Swath width to record (free text)
  #[arg(long)]
  swath: Option<String>,
  /// Droplet size to record (free text)
  #[arg(long)]
  droplet: Option<String>,
  /// Application rate to record (free text)
  #[arg(long)]
  rate: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the crop coefficient table
  Crops,
  /// Manage the client registry
  Client {
    #[command(subcommand)]
    command: ClientCommands,
  },
  /// Compute dosage and flight figures without logging anything
  Plan {
    #[command(flatten)]
    job: SprayJob,
  },
  /// Manage the operation log
  Operation {
    #[command(subcommand)]
    command: OperationCommands,
  },
}

#[derive(Subcommand)]
enum ClientCommands {
  /// Register a new client
  Add {
    /// Tax identification code, the client's unique key
    ruc: String,
    /// Client name
    name: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    /// Location, free text
    #[arg(long, default_value = "")]
    location: String,
    /// Technical contact
    #[arg(long, default_value = "")]
    contact: String,
    /// Latitude (defaults to the operations base)
    #[arg(long)]
    lat: Option<f64>,
    /// Longitude (defaults to the operations base)
    #[arg(long)]
    lon: Option<f64>,
  },
  /// Look up a client by RUC
  Find {
    ruc: String,
  },
  /// List all registered clients
  List {
    /// Emit JSON instead of the table
    #[arg(long)]
    json: bool,
  },
}

#[derive(Subcommand)]
enum OperationCommands {
  /// Compute the metrics and append an operation row
  Save {
    /// RUC of the client being serviced
    ruc: String,
    #[command(flatten)]
    job: SprayJob,
    /// Mixture/formula description
    #[arg(long, default_value = "")]
    mixture: String,
    /// Crop growth stage
    #[arg(long, default_value = "")]
    stage: String,
    /// Treatment type
    #[arg(long, default_value = "")]
    treatment: String,
    /// Terrain conditions
    #[arg(long, default_value = "")]
    terrain: String,
    /// Environmental conditions
    #[arg(long, default_value = "")]
    environment: String,
    /// Safety notes and observations
    #[arg(long, default_value = "")]
    safety: String,
    #[command(flatten)]
    advisory: AdvisoryOverrides,
  },
  /// List the logged operations
  List {
    /// Emit JSON instead of the table
    #[arg(long)]
    json: bool,
  },
}

fn main() {
  let cli = Cli::parse();

  if let Err(e) = run(cli) {
    vocera::error(&format!("{e:#}"));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> anyhow::Result<()> {
  match cli.command {
    Commands::Crops => commands::crops::show(),
    Commands::Client { command } => match command {
      ClientCommands::Add { ruc, name, phone, email, location, contact, lat, lon } => {
        commands::client::add(ruc, name, phone, email, location, contact, lat, lon)
      }
      ClientCommands::Find { ruc } => commands::client::find(&ruc),
      ClientCommands::List { json } => commands::client::list(json),
    },
    Commands::Plan { job } => commands::plan::run(&job),
    Commands::Operation { command } => match command {
      OperationCommands::Save {
        ruc,
        job,
        mixture,
        stage,
        treatment,
        terrain,
        environment,
        safety,
        advisory,
      } => commands::operation::save(
        ruc,
        &job,
        mixture,
        stage,
        treatment,
        terrain,
        environment,
        safety,
        advisory,
      ),
      OperationCommands::List { json } => commands::operation::list(json),
    },
  }
}
