// In crates/app-config/src/lib.rs

use std::path::Path;

use config::{Config, File, FileFormat};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::Settings;

use types::RawSettings;

/// Loads the job settings from a single structured config file.
///
/// The file format is picked from the extension: `.toml` and `.json` are read
/// as such, everything else (`.yaml`, `.yml`, no extension) is read as YAML.
/// All three keys (`seed`, `window`, `version`) are required; there are no
/// defaults and no environment overrides.
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let raw: RawSettings = Config::builder()
        .add_source(File::new(&path.to_string_lossy(), format_for(path)))
        .build()?
        .try_deserialize()?;

    let settings = raw.validate()?;
    tracing::debug!(path = %path.display(), ?settings, "Settings parsed.");
    Ok(settings)
}

fn format_for(path: &Path) -> FileFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => FileFormat::Toml,
        Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
        _ => FileFormat::Yaml,
    }
}

impl RawSettings {
    fn validate(self) -> Result<Settings> {
        let seed = self.seed.ok_or(Error::MissingKey("seed"))?;
        let window = self.window.ok_or(Error::MissingKey("window"))?;
        let version = self.version.ok_or(Error::MissingKey("version"))?;

        match usize::try_from(window).ok().filter(|w| *w >= 1) {
            Some(window) => Ok(Settings { seed, window, version }),
            None => Err(Error::InvalidWindow { window, version }),
        }
    }
}
