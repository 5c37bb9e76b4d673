use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".risk-dashboard.toml";

/// Load config file content
///
/// Searches, in order:
/// 1. `.risk-dashboard.toml` in the current working directory
/// 2. `.risk-dashboard.toml` in the home directory
/// 3. `config.toml` in the platform config directory
///
/// Returns the content of the first readable file, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let home = env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE));
    let global = crate::paths::app_config_path()
        .map_err(|e| log::debug!("No global config location: {}", e))
        .ok();

    home.into_iter().chain(global).collect()
}
