use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rPlanner
#[derive(Parser)]
#[command(
    name = "rplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "Capacity planner: place work on a resource x day grid and project it into a validated timesheet",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Pin the planner clock to a date (YYYY-MM-DD) instead of today
    #[arg(global = true, long = "today", value_name = "DATE")]
    pub today: Option<String>,

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

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Audit {
        #[arg(long = "print", help = "Print rows from the audit log")]
        print: bool,
    },

    /// List the resource roster
    Resources,

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage allocations on the planning grid
    Alloc {
        #[command(subcommand)]
        action: AllocAction,
    },

    /// Create demand and auto-place it in the first free slot
    Demand {
        /// Total hours of the demand
        hours: f64,

        #[arg(long, default_value = "DEMANDA NOVA", help = "Project / description")]
        project: String,
    },

    /// Show the capacity grid
    Plan,

    /// Fill an empty planner with demo allocations
    Seed,

    /// Project allocations into time logs
    Sync,

    /// Manage time logs
    Log {
        #[command(subcommand)]
        action: LogAction,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Add a project
    Add {
        name: String,
        #[arg(long)]
        code: Option<String>,
    },
    /// List projects
    List,
    /// Close a project
    Close { id: String },
}

/// Target column of a gesture: a grid day or a raw pointer offset in pixels.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct Target {
    #[arg(long = "day", help = "Target grid day (0-based)")]
    pub day: Option<u32>,

    #[arg(long = "x", help = "Pointer offset in pixels from the first day column")]
    pub x: Option<f64>,
}

#[derive(Subcommand)]
pub enum AllocAction {
    /// Create an allocation directly
    Add {
        project: String,
        resource: String,
        /// Grid day (0-based)
        day: u32,
        /// Total hours over the span
        hours: f64,
        #[arg(long, help = "Span in days (default 1)")]
        span: Option<u32>,
    },
    /// List allocations
    List,
    /// Drag an allocation to another resource/day
    Move {
        id: i64,
        resource: String,
        #[command(flatten)]
        target: Target,
    },
    /// Drag the trailing edge of an allocation
    Resize {
        id: i64,
        #[command(flatten)]
        target: Target,
    },
    /// Delete an allocation
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum LogAction {
    /// Add a time log
    Add {
        /// Collaborator (resource id)
        collaborator: String,
        /// Date (YYYY-MM-DD)
        date: String,
        /// Project id
        project: String,
        /// Activity type
        activity: String,
        /// Hours worked (> 0)
        hours: f64,

        #[arg(long, default_value = "N/A", help = "Project phase (FEL 0 / FEL 1, PE, PC, Pós obra, CO, LS, N/A)")]
        phase: String,

        #[arg(long, default_value = "project", help = "Demand type (fel, warranty, routine, support, project)")]
        demand: String,

        #[arg(long = "obs")]
        observation: Option<String>,

        #[arg(long = "project-name")]
        project_name: Option<String>,
    },
    /// List time logs
    List {
        #[arg(long = "who")]
        collaborator: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Edit a time log in place
    Edit {
        id: i64,
        #[arg(long)]
        hours: Option<f64>,
        #[arg(long)]
        activity: Option<String>,
        #[arg(long)]
        phase: Option<String>,
        #[arg(long = "obs")]
        observation: Option<String>,
    },
    /// Delete a time log
    Del { id: i64 },
}
