//! Command-line front end for the avatar session configuration store.
//!
//! # Startup sequence
//!
//! 1. Load `.env` (if any) and initialise logging.
//! 2. Resolve the snapshot directory (`--storage-dir` or the platform
//!    config directory).
//! 3. Build the store: literal defaults → environment → stored snapshot.
//! 4. Run the requested command.  Mutating commands persist through the
//!    store; `flush` on exit surfaces any write failure.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use avatar_session_config::{
    config::{ConfigField, StoragePaths},
    persist::{FileStorage, Persistence},
    store::ConfigurationStore,
};

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "avatar-session-config",
    version,
    about = "Inspect and edit avatar streaming session settings"
)]
struct Cli {
    /// Directory holding the configuration snapshot.
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every field.
    Show {
        /// Print the API credential instead of masking it.
        #[arg(long)]
        reveal: bool,
    },
    /// Check whether a session could be started.
    Validate,
    /// Print the session options payload as JSON.
    Options,
    /// Set one field, e.g. `set mode_type 1` or `set voice_params '{"speed":1.2}'`.
    Set { field: ConfigField, value: String },
    /// Restore every field to its literal default.
    Reset,
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn show(store: &ConfigurationStore, reveal: bool) -> Result<()> {
    let value = serde_json::to_value(store.config()).context("encoding configuration")?;

    for field in ConfigField::ALL {
        let shown = match value.get(field.key()) {
            Some(serde_json::Value::String(s)) if field.is_secret() && !reveal => mask(s),
            Some(v) => v.to_string(),
            None => String::new(),
        };
        println!("{:<17} {shown}", field.key());
    }

    println!();
    println!("api configured    {}", store.is_api_configured());
    println!("avatar configured {}", store.is_avatar_configured());
    Ok(())
}

fn validate(store: &ConfigurationStore) -> Result<()> {
    let report = store.validate();
    if report.is_valid {
        println!("Configuration is valid");
        return Ok(());
    }
    for error in &report.errors {
        println!("- {error}");
    }
    bail!("configuration has {} problem(s)", report.errors.len())
}

fn options(store: &ConfigurationStore) -> Result<()> {
    let payload = serde_json::to_string_pretty(&store.session_options())
        .context("encoding session options")?;
    println!("{payload}");
    Ok(())
}

/// Keep the last four characters of a secret.  Secrets of four characters
/// or fewer are hidden entirely.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let hidden = if chars.len() <= 4 {
        chars.len()
    } else {
        chars.len() - 4
    };
    let tail: String = chars[hidden..].iter().collect();
    format!("\"{}{tail}\"", "*".repeat(hidden))
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // 1. Environment + logging
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // 2. Snapshot location
    let paths = match cli.storage_dir {
        Some(dir) => StoragePaths::in_dir(dir),
        None => StoragePaths::new(),
    };
    log::debug!("Configuration snapshot: {}", paths.snapshot_file.display());

    // 3. Store
    let persistence = Persistence::new(FileStorage::new(&paths.config_dir));
    let mut store = ConfigurationStore::from_env(persistence);

    // 4. Command
    match cli.command {
        Command::Show { reveal } => show(&store, reveal)?,
        Command::Validate => validate(&store)?,
        Command::Options => options(&store)?,
        Command::Set { field, value } => {
            store.set_from_str(field, &value)?;
            store
                .flush()
                .with_context(|| format!("saving {}", paths.snapshot_file.display()))?;
            log::info!("Set {field}");
        }
        Command::Reset => {
            store.reset_to_defaults();
            store
                .flush()
                .with_context(|| format!("saving {}", paths.snapshot_file.display()))?;
        }
    }

    Ok(())
}
