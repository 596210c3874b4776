//! synthdial: control surface for a remote synthesizer.
//!
//! With no subcommand, opens the terminal UI. `play` sends a single request
//! and reports the outcome; `keyboard` prints a keyboard layout.

use std::process::ExitCode;

use clap::Parser;

use synthdial::cli::{Cli, Command};
use synthdial::config::AppConfig;
use synthdial::keyboard;
use synthdial::logging::init_logging;
use synthdial::params::{ParameterStore, Waveform};
use synthdial::playback::{PlayOutcome, PlaybackDispatcher, PlaybackRequest};
use synthdial::tui::{render_rows, App};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("warning: logging disabled: {e}");
    }

    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = match loaded {
        Ok(config) => cli.apply_overrides(config),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let store = match config.build_store() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("invalid dial seed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        None | Some(Command::Ui { .. }) => run_ui(&config, store),
        Some(Command::Play {
            waveform,
            set,
            dry_run,
        }) => run_play(&config, store, waveform, &set, dry_run),
        Some(Command::Keyboard { .. }) => {
            print_keyboard(config.keyboard_keys);
            ExitCode::SUCCESS
        }
    }
}

fn run_ui(config: &AppConfig, store: ParameterStore) -> ExitCode {
    let dispatcher = match PlaybackDispatcher::http(&config.endpoint) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("failed to create HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = App::new(store, dispatcher, config.keyboard_keys);

    let mut terminal = match ratatui::try_init() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("failed to initialise terminal: {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = app.run(&mut terminal);
    ratatui::restore();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("ui error: {e}");
            eprintln!("ui error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_play(
    config: &AppConfig,
    mut store: ParameterStore,
    waveform: Option<Waveform>,
    assignments: &[(String, f64)],
    dry_run: bool,
) -> ExitCode {
    for (id, value) in assignments {
        if store.get(id).is_none() {
            log::warn!("--set {id}: no such dial, ignored");
            eprintln!("warning: no dial '{id}', ignored");
        }
        store = store.update_value(id, *value);
    }
    if let Some(w) = waveform {
        store = store.with_waveform(w);
    }

    let request = PlaybackRequest::from_store(&store);
    if dry_run {
        match serde_json::to_string_pretty(&request) {
            Ok(json) => {
                println!("{json}");
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                eprintln!("could not encode request: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let dispatcher = match PlaybackDispatcher::http(&config.endpoint) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("failed to create HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = dispatcher.send(&request);
    println!("{outcome}");
    match outcome {
        PlayOutcome::Success(_) | PlayOutcome::AlreadyPlaying => ExitCode::SUCCESS,
        PlayOutcome::Failure(_) => ExitCode::FAILURE,
    }
}

fn print_keyboard(keys: usize) {
    let layout = keyboard::generate(keys);
    let rows = render_rows(&layout);
    println!("{}", rows.black);
    println!("{}", rows.white);
    println!(
        "{keys} white, {} black",
        keyboard::black_key_count(keys)
    );
}
