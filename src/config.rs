use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::data::City;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) data_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) color: Option<String>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    /// City key → data file, e.g. `washington = "dc/2017.csv"`
    #[serde(default)]
    pub(crate) files: BTreeMap<String, PathBuf>,

    /// File the values came from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
    /// Candidate files that failed to parse, with the parser message
    #[serde(skip)]
    pub(crate) rejected: Vec<(PathBuf, String)>,
}

impl Config {
    /// First parseable config file, or defaults. Nothing is logged here because
    /// logging depends on the merged settings; call `log_origin` afterwards.
    pub(crate) fn load() -> Self {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Self {
        let mut rejected = Vec::new();

        for path in paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        config.source = Some(path.clone());
                        config.rejected = rejected;
                        return config;
                    }
                    Err(e) => rejected.push((path.clone(), e.to_string())),
                }
            }
        }

        Config {
            rejected,
            ..Self::default()
        }
    }

    pub(crate) fn log_origin(&self) {
        for (path, err) in &self.rejected {
            warn!("Failed to parse {}: {}", path.display(), err.trim());
        }
        if let Some(path) = &self.source {
            debug!("Loaded config from {}", path.display());
        }
    }

    /// `[files]` entries naming a supported city; unknown keys are skipped with a warning
    pub(crate) fn city_overrides(&self) -> Vec<(City, &Path)> {
        self.files
            .iter()
            .filter_map(|(key, path)| match City::from_config_key(key) {
                Some(city) => Some((city, path.as_path())),
                None => {
                    warn!("Ignoring [files] entry for unknown city \"{key}\"");
                    None
                }
            })
            .collect()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/bikeshare/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("bikeshare").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/bikeshare/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("bikeshare").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.bikeshare.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".bikeshare.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        for p in &paths {
            println!("Path: {:?}, exists: {}", p, p.exists());
        }
        assert!(!paths.is_empty());
    }

    #[test]
    fn parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
data_dir = "/srv/bikeshare"
color = "never"
debug = true

[files]
new_york_city = "nyc/2017.csv"
"#,
        )
        .unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/bikeshare")));
        assert_eq!(config.color.as_deref(), Some("never"));
        assert!(config.debug);
        assert!(!config.no_color);
        assert_eq!(
            config.city_overrides(),
            vec![(City::NewYorkCity, Path::new("nyc/2017.csv"))]
        );
    }

    #[test]
    fn unknown_city_override_is_skipped() {
        let config: Config = toml::from_str("[files]\nboston = \"b.csv\"\nchicago = \"c.csv\"\n").unwrap();
        assert_eq!(config.city_overrides(), vec![(City::Chicago, Path::new("c.csv"))]);
    }

    #[test]
    fn first_valid_file_wins() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        let later = dir.path().join("later.toml");
        fs::write(&broken, "data_dir = [").unwrap();
        fs::write(&good, "debug = true").unwrap();
        fs::write(&later, "no_color = true").unwrap();

        let missing = dir.path().join("missing.toml");
        let config = Config::load_from(&[missing, broken.clone(), good.clone(), later]);
        assert!(config.debug);
        assert!(!config.no_color);
        assert_eq!(config.source, Some(good));
        assert_eq!(config.rejected.len(), 1);
        assert_eq!(config.rejected[0].0, broken);
    }

    #[test]
    fn no_files_gives_defaults() {
        let config = Config::load_from(&[]);
        assert!(config.source.is_none());
        assert!(config.files.is_empty());
        assert!(config.data_dir.is_none());
    }
}
