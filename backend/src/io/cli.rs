use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "khet-bondhu", version)]
#[command(
    about = "Bilingual (Bangla/English) farming companion: crop guides and field observations"
)]
pub struct Cli {
    /// Config file (default: <config dir>/khet-bondhu/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory, overrides the config file
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Without a command the interactive browser starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new crop observation
    Observe(ObserveArgs),
    /// List observations, newest first
    History {
        /// Only this crop
        #[arg(long)]
        crop: Option<String>,
    },
    /// Change an existing observation
    Update(UpdateArgs),
    /// Delete an observation
    Delete {
        /// Observation ID
        id: String,
    },
    /// List observations not yet synced
    Unsynced,
    /// Mark observations as synced
    MarkSynced {
        /// Observation IDs
        ids: Vec<String>,
        /// Mark every unsynced observation
        #[arg(long, conflicts_with = "ids")]
        all: bool,
    },
    /// Erase all observations
    Clear {
        /// Confirm erasing
        #[arg(long)]
        yes: bool,
    },
    /// Show or change the display language
    Language {
        #[arg(value_enum)]
        choice: Option<LanguageChoice>,
    },
    /// List the crop catalog
    Crops,
    /// Show the dragon fruit cultivation guide
    Guide,
    /// Show dragon fruit pests and diseases
    Pests,
    /// Export the photos of an observation as image files
    Photos {
        /// Observation ID
        id: String,
        /// Target directory
        dir: PathBuf,
    },
    /// Browse the app screen by screen
    Browse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LanguageChoice {
    Bn,
    En,
    Toggle,
}

#[derive(Args, Debug)]
pub struct ObserveArgs {
    /// Crop ID from the catalog
    #[arg(long, default_value = "dragon-fruit")]
    pub crop: String,
    /// nursery, vegetative, flowering, fruiting or harvest
    #[arg(short, long)]
    pub stage: String,
    /// healthy, warning, disease or pest
    #[arg(short = 'H', long)]
    pub health: String,
    /// English note
    #[arg(long, default_value = "")]
    pub notes: String,
    /// Bangla note
    #[arg(long = "notes-bn", default_value = "")]
    pub notes_bangla: String,
    /// Image file to attach, repeatable
    #[arg(long = "photo")]
    pub photos: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Observation ID
    pub id: String,
    #[arg(long)]
    pub crop: Option<String>,
    #[arg(short, long)]
    pub stage: Option<String>,
    #[arg(short = 'H', long)]
    pub health: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long = "notes-bn")]
    pub notes_bangla: Option<String>,
    /// Replace the photos with these image files
    #[arg(long = "photo")]
    pub photos: Vec<PathBuf>,
}
