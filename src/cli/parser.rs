use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkoutMap
/// CLI application to log running and cycling workouts on a map, stored in SQLite
#[derive(Parser)]
#[command(
    name = "rworkoutmap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record running and cycling workouts at map locations and keep them in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a workout at a map location
    Add {
        /// Workout type: running or cycling
        #[arg(long = "type", short = 't', default_value = "running")]
        kind: String,

        /// Latitude of the map click
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude of the map click
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Distance in km
        #[arg(long, short = 'd', allow_hyphen_values = true)]
        distance: String,

        /// Duration in minutes
        #[arg(long = "duration", short = 'm', allow_hyphen_values = true)]
        duration: String,

        /// Cadence in steps/min (running)
        #[arg(long, allow_hyphen_values = true)]
        cadence: Option<String>,

        /// Elevation gain in meters (cycling)
        #[arg(long = "elevation", allow_hyphen_values = true)]
        elevation: Option<String>,
    },

    /// List recorded workouts
    List {
        /// Only show one workout type (running, cycling)
        #[arg(long = "type", short = 't')]
        kind: Option<String>,

        /// Show full workout cards instead of a table
        #[arg(long = "details")]
        details: bool,
    },

    /// Show one workout and center the map on it
    Show {
        /// Workout id
        id: String,
    },

    /// Render the map: current view and all markers
    Map,

    /// Delete a workout by ID
    Del {
        /// Workout id
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete all workouts
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Edit a workout (not available yet)
    Edit {
        /// Workout id
        id: String,
    },

    /// Export workouts
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "json")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import workouts from a JSON file (an export, or a browser localStorage dump)
    Import {
        /// Input file path
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
