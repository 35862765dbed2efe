//! Runtime configuration

use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Catalog page size; large enough to cover every known species.
pub const DEFAULT_CATALOG_LIMIT: u32 = 1010;

/// Upper bound for random lookups (snapshot of the known species count).
pub const DEFAULT_RANDOM_MAX: u32 = 1010;

pub const LOG_LEVEL_ENV: &str = "POKEDEX_TUI_LOG_LEVEL";

/// Values resolved from the command line
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub catalog_limit: u32,
    pub random_max: u32,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            catalog_limit: DEFAULT_CATALOG_LIMIT,
            random_max: DEFAULT_RANDOM_MAX,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}

pub fn default_log_file() -> PathBuf {
    dirs_next::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("pokedex-tui")
        .join("pokedex-tui.log")
}
