use log::LevelFilter;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Where interactive sessions write their log
pub fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crossword.log")
}

/// Initialize logging.
///
/// # Behavior
/// - Default level is `Warn`, or `Debug` with `verbose`; `RUST_LOG` overrides.
/// - `to_file` sends output to [`log_path`] so it cannot tear the alternate
///   screen; otherwise it goes to stderr.
pub fn init_logger(verbose: bool, to_file: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if to_file {
        match OpenOptions::new().create(true).append(true).open(log_path()) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                // No writable log file; stay quiet rather than draw over the UI
                builder.filter(None, LevelFilter::Off);
            }
        }
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
