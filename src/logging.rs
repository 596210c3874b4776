//! Logging: a file logger, so log output never draws over the terminal UI.

use std::fs::File;
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

/// Default log location: ~/.synthdial/synthdial.log.
pub fn default_log_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".synthdial")
        .join("synthdial.log")
}

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger. Falls back to the temp dir when the default
/// location is not writable. Returns the path actually used.
pub fn init_logging(verbose: bool) -> std::io::Result<PathBuf> {
    let level = level_for(verbose);
    let primary = default_log_path();
    if let Some(parent) = primary.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let (path, file) = match File::create(&primary) {
        Ok(file) => (primary, file),
        Err(_) => {
            let fallback = std::env::temp_dir().join("synthdial.log");
            let file = File::create(&fallback)?;
            (fallback, file)
        }
    };

    // A logger may already be installed (tests, repeated init); keep it.
    if WriteLogger::init(level, Config::default(), file).is_ok() {
        log::info!("synthdial starting (log level: {level:?})");
    }
    Ok(path)
}
