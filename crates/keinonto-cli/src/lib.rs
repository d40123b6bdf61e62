// keinonto-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use keinonto_fi::{Generator, GeneratorOptions, MemoryStore, Witnesses};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the word database file.
const DB_ENV: &str = "KEINONTO_DB";

/// Environment variable holding the log filter.
const LOG_ENV: &str = "KEINONTO_LOG";

/// Database file name under `~/.keinonto`.
const HOME_DB: &str = "words.json";

/// Database file name in the working directory.
const LOCAL_DB: &str = "keinonto.json";

/// Install a stderr tracing subscriber filtered by `KEINONTO_LOG`
/// (default `warn`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Pick the database file.
///
/// Search order:
/// 1. `db_path` argument (if provided)
/// 2. `KEINONTO_DB` environment variable
/// 3. `~/.keinonto/words.json`
/// 4. `./keinonto.json`
///
/// An explicit path is used whether or not it exists yet. Otherwise the
/// first existing candidate wins, and a fresh database goes to the first
/// candidate.
pub fn resolve_db_path(db_path: Option<&str>) -> Result<PathBuf, String> {
    if let Some(p) = db_path {
        return Ok(PathBuf::from(p));
    }
    if let Ok(env_path) = std::env::var(DB_ENV) {
        return Ok(PathBuf::from(env_path));
    }
    let candidates = build_search_paths();
    if let Some(found) = candidates.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| "could not determine a database path; pass --db PATH".to_string())
}

/// Implicit database locations, in search order.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = home_dir() {
        paths.push(home.join(".keinonto").join(HOME_DB));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_DB));
    }
    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Open the generator over the database at `path`. A missing file yields
/// an empty lexicon.
pub fn load_generator(path: &Path) -> Result<Generator, String> {
    let store = if path.is_file() {
        MemoryStore::load(path).map_err(|e| format!("failed to load {}: {e}", path.display()))?
    } else {
        info!(path = %path.display(), "no database yet, starting empty");
        MemoryStore::new()
    };
    Ok(Generator::with_store(store, GeneratorOptions::default()))
}

/// Write the generator's lexicon back to `path`.
pub fn save_generator(generator: &Generator, path: &Path) -> Result<(), String> {
    generator
        .store()
        .save(path)
        .map_err(|e| format!("failed to save {}: {e}", path.display()))
}

/// Read witness forms from a JSON object keyed `"case_number"`.
pub fn load_witnesses(path: &Path) -> Result<Witnesses, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid witness file {}: {e}", path.display()))
}

/// Extract a `--long=VALUE`, `--long VALUE` or `-s VALUE` option.
///
/// Returns `(value, remaining_args)`.
pub fn take_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--db=PATH`, `--db PATH` or `-d PATH` argument.
pub fn parse_db_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--db", "-d")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
