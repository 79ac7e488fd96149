//! Command-line front end.
//!
//! Every command works on one configuration file, by default the working
//! configuration under the platform data directory. Editing commands load
//! it, apply one validated change and write it back.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use shelfkit_configurator::serialization::load_from_file;
use shelfkit_configurator::{presets, ConfiguratorState, FileStore};
use shelfkit_core::MeasurementSystem;
use shelfkit_settings::Config;

use crate::configurator_options;

#[derive(Debug, Parser)]
#[command(name = "shelfkit", version, about = "Compose modular shelving on a grid")]
pub struct Cli {
    /// Settings file (.toml or .json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Configuration file to operate on
    #[arg(long, short, global = true)]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in presets
    Presets,
    /// Start a new configuration, optionally from a preset
    New {
        #[arg(long)]
        preset: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Print modules and overall dimensions
    Show,
    /// Print overall dimensions
    Bounds {
        /// Show inches instead of the configured measurement system
        #[arg(long, conflicts_with = "metric")]
        imperial: bool,
        /// Show millimeters instead of the configured measurement system
        #[arg(long)]
        metric: bool,
    },
    /// Add a unit module at the next free floor slot
    Add,
    /// Move a module to another grid cell
    Move {
        id: String,
        #[arg(allow_hyphen_values = true)]
        x: i32,
        #[arg(allow_hyphen_values = true)]
        y: i32,
        #[arg(allow_hyphen_values = true)]
        z: i32,
    },
    /// Delete a module
    Remove { id: String },
    /// Change a module's size in grid units
    Resize {
        id: String,
        width: f64,
        height: f64,
        depth: f64,
    },
    /// Change a module's color
    Color { id: String, color: String },
    /// Rename the configuration
    Rename { name: String },
    /// Replace the configuration with JSON read from a file
    Import { source: PathBuf },
    /// Print the configuration as JSON
    Export {
        /// Also copy the JSON to the clipboard
        #[arg(long)]
        clipboard: bool,
        /// Write the JSON to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Report grid invariant violations without changing anything
    Check,
}

impl Cli {
    /// Default log level implied by `-v` flags
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

fn resolve_file(cli: &Cli, config: &Config) -> Result<PathBuf> {
    match &cli.file {
        Some(path) => Ok(path.clone()),
        None => config
            .storage_path()
            .context("No --file given and no data directory available"),
    }
}

/// Open the configuration at `path` with write-through to the same file.
fn open_state(path: &Path, config: &Config) -> Result<ConfiguratorState> {
    let configuration = load_from_file(path)?;
    Ok(ConfiguratorState::open(
        configuration,
        Box::new(FileStore::new(path)),
        configurator_options(config),
    ))
}

/// Fail when the last write-through to `path` did not land.
fn ensure_saved(state: &ConfiguratorState, path: &Path) -> Result<()> {
    match state.persist_error() {
        Some(e) => bail!("Failed to write {}: {}", path.display(), e),
        None => Ok(()),
    }
}

fn print_bounds(state: &ConfiguratorState, system: MeasurementSystem) {
    let bounds = state.bounds();
    println!(
        "{} × {} × {} units ({})",
        bounds.width_units,
        bounds.height_units,
        bounds.depth_units,
        bounds.describe(system)
    );
}

/// Copy text to the system clipboard. Failure only warns.
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => tracing::info!("Copied configuration to clipboard"),
        Err(e) => tracing::warn!("Clipboard unavailable: {}", e),
    }
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let path = resolve_file(&cli, &config)?;
    tracing::debug!("Using configuration file {}", path.display());

    match cli.command {
        Command::Presets => {
            for preset in presets() {
                println!(
                    "{:<12} {:<12} {} ({} modules)",
                    preset.key,
                    preset.name,
                    preset.description,
                    preset.modules.len()
                );
            }
        }
        Command::New { preset, name } => {
            let mut state = ConfiguratorState::with_options(
                Box::new(FileStore::new(&path)),
                configurator_options(&config),
            );
            match preset {
                Some(key) => state.load_preset(&key)?,
                None => state.clear(),
            }
            if let Some(name) = name {
                state.rename(name);
            }
            ensure_saved(&state, &path)?;
            println!(
                "Created '{}' with {} modules at {}",
                state.configuration().name,
                state.modules().len(),
                path.display()
            );
        }
        Command::Show => {
            let state = open_state(&path, &config)?;
            println!("{} ({})", state.configuration().name, state.configuration().id);
            for module in state.modules() {
                println!(
                    "  {}  {}  {} × {} × {}  {}",
                    module.id,
                    module.position(),
                    module.width,
                    module.height,
                    module.depth,
                    module.color
                );
            }
            print_bounds(&state, config.display.measurement_system);
        }
        Command::Bounds { imperial, metric } => {
            let state = open_state(&path, &config)?;
            let system = if imperial {
                MeasurementSystem::Imperial
            } else if metric {
                MeasurementSystem::Metric
            } else {
                config.display.measurement_system
            };
            print_bounds(&state, system);
        }
        Command::Add => {
            let mut state = open_state(&path, &config)?;
            let id = state.add_module();
            ensure_saved(&state, &path)?;
            println!("{}", id);
        }
        Command::Move { id, x, y, z } => {
            let mut state = open_state(&path, &config)?;
            state.move_module(&id, x, y, z)?;
            ensure_saved(&state, &path)?;
        }
        Command::Remove { id } => {
            let mut state = open_state(&path, &config)?;
            state.remove_module(&id)?;
            ensure_saved(&state, &path)?;
        }
        Command::Resize {
            id,
            width,
            height,
            depth,
        } => {
            let mut state = open_state(&path, &config)?;
            state.resize_module(&id, width, height, depth)?;
            ensure_saved(&state, &path)?;
        }
        Command::Color { id, color } => {
            let mut state = open_state(&path, &config)?;
            state.set_module_color(&id, &color)?;
            ensure_saved(&state, &path)?;
        }
        Command::Rename { name } => {
            let mut state = open_state(&path, &config)?;
            state.rename(name);
            ensure_saved(&state, &path)?;
        }
        Command::Import { source } => {
            let text = std::fs::read_to_string(&source)
                .with_context(|| format!("Failed to read {}", source.display()))?;
            let configuration = match load_from_file(&path) {
                Ok(configuration) => configuration,
                Err(e) => {
                    tracing::debug!("Starting from an empty configuration: {:#}", e);
                    Default::default()
                }
            };
            let mut state = ConfiguratorState::open(
                configuration,
                Box::new(FileStore::new(&path)),
                configurator_options(&config),
            );
            let count = state.import_json(&text)?;
            ensure_saved(&state, &path)?;
            println!("Imported {} modules", count);
        }
        Command::Export { clipboard, output } => {
            let state = open_state(&path, &config)?;
            let json = state.export_json();
            if clipboard {
                copy_to_clipboard(&json);
            }
            match output {
                Some(out) => std::fs::write(&out, &json)
                    .with_context(|| format!("Failed to write {}", out.display()))?,
                None => println!("{}", json),
            }
        }
        Command::Check => {
            let state = open_state(&path, &config)?;
            let violations = state.violations();
            if violations.is_empty() {
                println!("No violations");
            } else {
                for violation in &violations {
                    println!("{}", violation);
                }
                bail!("{} invariant violations", violations.len());
            }
        }
    }

    Ok(())
}
