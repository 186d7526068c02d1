use std::{fs, path::Path};

use list_tidy_domain::ProcessingOptions;
use list_tidy_shared_kernel::{ErrorContext, InfrastructureError, PresentationError, Result};

/// Load processing options from a `.json`, `.yaml` or `.yml` file.
///
/// Missing fields fall back to their defaults.
///
/// # Errors
///
/// Fails on an unknown extension, an unreadable file or malformed content.
pub fn load_preset(path: &Path) -> Result<ProcessingOptions> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> Result<ProcessingOptions> = match ext.as_str() {
        "json" => parse_json,
        "yaml" | "yml" => parse_yaml,
        _ => return Err(PresentationError::UnsupportedPresetFormat { path: path.to_path_buf() }.into()),
    };

    let raw = fs::read_to_string(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    let options = parse(&raw).with_context(|| format!("invalid preset '{}'", path.display()))?;
    log::debug!("loaded preset {}: {options:?}", path.display());
    Ok(options)
}

fn parse_json(raw: &str) -> Result<ProcessingOptions> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_yaml(raw: &str) -> Result<ProcessingOptions> {
    Ok(serde_yaml::from_str(raw)?)
}
