use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the service origin
pub const BASE_URL_ENV: &str = "KNOWLEDGE_BOX_URL";

/// Default knowledge service origin, used when neither the CLI flag nor the
/// environment variable is set
pub const DEFAULT_BASE_URL: &str = "https://ai-knowledge-box.onrender.com";

/// Client configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Resolve the service origin: `--base-url` flag, then the
    /// `KNOWLEDGE_BOX_URL` environment variable, then the built-in default.
    /// Empty values are treated as unset; trailing slashes are stripped.
    pub fn resolve(flag: Option<String>) -> Self {
        let base_url = flag
            .filter(|s| !s.trim().is_empty())
            .or_else(|| env::var(BASE_URL_ENV).ok().filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { base_url: base_url.trim().trim_end_matches('/').to_string() }
    }
}

/// Log file used while the TUI owns the terminal
/// (`<cache_dir>/knowledge-box/knowledge-box.log`).
pub fn log_file_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir().context("could not determine cache directory")?;
    Ok(cache_dir.join("knowledge-box").join("knowledge-box.log"))
}
