//! Command-line front end for the theme toggler.
//!
//! Drives a [`ThemeToggler`] over a headless surface, persisting the choice in
//! a JSON settings file, so scripts and terminal users share the same
//! auto/light/dark selection as any other host reading that file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use theme_toggler::{
    HeadlessSurface, JsonFileStore, ManualPreference, PreferenceSignal, SystemPreference,
    ThemeState, ThemeTogglePresenter, ThemeToggler, TogglerConfig, TransitionTable,
};

#[derive(Debug, Parser)]
#[command(name = "theme-toggler", version, about = "Cycle between auto, light and dark themes")]
struct Cli {
    /// Settings file the theme is persisted in
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// JSON file with toggler settings
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Activation table (overrides the config file)
    #[arg(long, global = true, value_enum)]
    table: Option<TableArg>,

    /// System preference to assume instead of asking the OS
    #[arg(long, global = true, value_enum, default_value_t = PreferArg::System)]
    prefer: PreferArg,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the current state, appearance and label
    Status,
    /// Activate the toggle
    Toggle {
        /// Number of activations
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Select a state directly (unrecognized values select auto)
    Set {
        /// auto, light or dark
        state: String,
    },
    /// Print the control's label
    Label,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TableArg {
    Cyclic,
    Toggle,
}

impl From<TableArg> for TransitionTable {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Cyclic => TransitionTable::Cyclic,
            TableArg::Toggle => TransitionTable::Toggle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PreferArg {
    System,
    Light,
    Dark,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => TogglerConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => TogglerConfig::default(),
    };
    if let Some(table) = cli.table {
        config = config.with_transitions(table.into());
    }

    let store = match &cli.store {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::at_default_location().context("locating the settings file")?,
    };
    log::debug!("Using settings file {}", store.path().display());

    match cli.prefer {
        PreferArg::System => run(&cli.command, store, SystemPreference::new(), config),
        PreferArg::Light => run(&cli.command, store, ManualPreference::new(false), config),
        PreferArg::Dark => run(&cli.command, store, ManualPreference::new(true), config),
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run<P>(command: &Command, store: JsonFileStore, preference: P, config: TogglerConfig) -> Result<()>
where
    P: PreferenceSignal + Clone + 'static,
{
    let document_attribute = config.document_attribute.clone();
    let surface = HeadlessSurface::new();
    let presenter = ThemeTogglePresenter::new(store, preference, config);
    let mut toggler = ThemeToggler::new(presenter, surface.clone());
    toggler.connect();

    match command {
        Command::Status => print_status(&toggler, &surface, &document_attribute),
        Command::Toggle { times } => {
            for _ in 0..*times {
                surface.activate();
                let state = toggler.current_state();
                println!(
                    "{} {}",
                    style("→").dim(),
                    style_state(state)
                );
            }
            println!("{}", style(toggler.current_label()).italic());
        }
        Command::Set { state } => {
            let selected = toggler.select(state);
            if ThemeState::parse(state).is_none() {
                eprintln!(
                    "{} unrecognized theme '{}', using auto",
                    style("warning:").yellow().bold(),
                    state
                );
            }
            println!("{}", style_state(selected));
        }
        Command::Label => println!("{}", toggler.current_label()),
    }

    toggler.disconnect();
    Ok(())
}

fn print_status<S, P>(
    toggler: &ThemeToggler<S, P, HeadlessSurface>,
    surface: &HeadlessSurface,
    document_attribute: &str,
) where
    S: theme_toggler::KeyValueStore + 'static,
    P: PreferenceSignal + Clone + 'static,
{
    let presenter = toggler.presenter();
    let prefers = if presenter.is_dark_preferred() {
        "dark"
    } else {
        "light"
    };

    println!("{:<12} {}", style("state").bold(), style_state(presenter.current_state()));
    println!(
        "{:<12} {}",
        style("appearance").bold(),
        presenter.effective_appearance()
    );
    println!("{:<12} {}", style("system").bold(), prefers);
    println!(
        "{:<12} {}",
        style("table").bold(),
        presenter.config().transitions
    );
    println!(
        "{:<12} {}",
        style("label").bold(),
        surface.label().unwrap_or_default()
    );
    println!(
        "{:<12} {}",
        style(document_attribute).bold(),
        surface
            .document_attribute(document_attribute)
            .unwrap_or_else(|| style("(unset)").dim().to_string())
    );
}

fn style_state(state: ThemeState) -> console::StyledObject<&'static str> {
    match state {
        ThemeState::Auto => style(state.as_str()).cyan(),
        ThemeState::Light => style(state.as_str()).yellow(),
        ThemeState::Dark => style(state.as_str()).blue(),
    }
}
