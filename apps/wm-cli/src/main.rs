use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wm_app::{AppConfig, AppError, AppResult, HeadlessMap, WorkoutApp, WorkoutForm};
use wm_core::{LatLng, WorkoutId};
use wm_model::StoredWorkout;
use wm_storage::FileStore;

type App = WorkoutApp<FileStore, HeadlessMap>;

#[derive(Parser)]
#[command(name = "wm-cli")]
#[command(about = "workmap CLI - log running and cycling workouts", long_about = None)]
struct Cli {
    /// Directory holding the workout storage slot
    #[arg(long, default_value = ".workmap")]
    data_dir: PathBuf,
    /// Optional YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a new workout
    #[command(subcommand)]
    Add(AddCommands),
    /// List logged workouts, oldest first
    List,
    /// Show one workout
    Show {
        /// Workout ID
        id: String,
    },
    /// Remove one workout
    Remove {
        /// Workout ID
        id: String,
    },
    /// Remove every workout
    Clear,
    /// Export stored workouts as JSON
    Export {
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct Common {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,
    /// Distance in km
    #[arg(long, allow_hyphen_values = true)]
    distance: String,
    /// Duration in minutes
    #[arg(long, allow_hyphen_values = true)]
    duration: String,
}

#[derive(Subcommand)]
enum AddCommands {
    /// Log a run
    Running {
        #[command(flatten)]
        common: Common,
        /// Cadence in steps per minute
        #[arg(long, allow_hyphen_values = true)]
        cadence: String,
    },
    /// Log a ride
    Cycling {
        #[command(flatten)]
        common: Common,
        /// Elevation gain in metres
        #[arg(long, allow_hyphen_values = true)]
        elevation: String,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = open_app(&cli.data_dir, cli.config.as_deref())?;

    match cli.command {
        Commands::Add(add) => cmd_add(&mut app, add),
        Commands::List => cmd_list(&app),
        Commands::Show { id } => cmd_show(&app, &id),
        Commands::Remove { id } => cmd_remove(&mut app, &id),
        Commands::Clear => cmd_clear(&mut app),
        Commands::Export { output } => cmd_export(&app, output.as_deref()),
    }
}

fn open_app(data_dir: &Path, config_path: Option<&Path>) -> AppResult<App> {
    let config = match config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let home = config.home;
    let store = FileStore::new(data_dir.to_path_buf())?;
    let mut app = WorkoutApp::new(store, config);

    let outcome = home.ok_or_else(|| "no home location configured".to_string());
    match app.on_position(outcome, |_| HeadlessMap::new()) {
        Ok(placed) => tracing::debug!(placed, "markers placed"),
        Err(AppError::NoPosition { reason }) => {
            tracing::info!(%reason, "running without a map");
        }
        Err(err) => return Err(err),
    }
    Ok(app)
}

fn cmd_add(app: &mut App, add: AddCommands) -> AppResult<()> {
    let (common, form) = match add {
        AddCommands::Running { common, cadence } => {
            let form = WorkoutForm {
                kind: "running".to_string(),
                distance: common.distance.clone(),
                duration: common.duration.clone(),
                cadence,
                elevation: String::new(),
            };
            (common, form)
        }
        AddCommands::Cycling { common, elevation } => {
            let form = WorkoutForm {
                kind: "cycling".to_string(),
                distance: common.distance.clone(),
                duration: common.duration.clone(),
                cadence: String::new(),
                elevation,
            };
            (common, form)
        }
    };

    let at = LatLng::new(common.lat, common.lng)?;
    let id = app.log_workout(form.parse(at)?)?;
    if let Some(workout) = app.find(&id) {
        println!("✓ Logged {} [{}]", workout.description(), id);
    }
    Ok(())
}

fn cmd_list(app: &App) -> AppResult<()> {
    let summaries = app.summaries();
    if summaries.is_empty() {
        println!("No workouts logged");
        return Ok(());
    }
    for summary in summaries {
        println!("{}", summary);
    }
    Ok(())
}

fn cmd_show(app: &App, id: &str) -> AppResult<()> {
    let id = WorkoutId::from(id);
    match app.find(&id) {
        Some(workout) => {
            println!("{}", wm_app::WorkoutSummary::from(workout));
            println!("  at {}", workout.coords());
            println!("  logged {}", workout.created_at().to_rfc3339());
        }
        None => println!("No workout with id {}", id),
    }
    Ok(())
}

fn cmd_remove(app: &mut App, id: &str) -> AppResult<()> {
    let id = WorkoutId::from(id);
    if app.remove(&id) {
        println!("✓ Removed {}", id);
    } else {
        println!("No workout with id {}", id);
    }
    Ok(())
}

fn cmd_clear(app: &mut App) -> AppResult<()> {
    let count = app.store().len();
    app.remove_all();
    println!("✓ Removed {} workouts", count);
    Ok(())
}

fn cmd_export(app: &App, output: Option<&Path>) -> AppResult<()> {
    let stored: Vec<StoredWorkout> = app
        .store()
        .records()
        .iter()
        .map(StoredWorkout::from)
        .collect();
    let json = serde_json::to_string_pretty(&stored)
        .map_err(|e| AppError::Storage(format!("Failed to serialize workouts: {}", e)))?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("✓ Exported {} workouts to {}", stored.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
