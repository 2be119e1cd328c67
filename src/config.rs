use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::utils::debug_log;

/// Optional settings from `config.toml`; CLI flags override every field
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Directory searched for QA logs
    #[serde(default)]
    pub(crate) dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        debug_log(&format!("Loaded config from {}", path.display()));
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/qalog/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("qalog").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support/qalog/config.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("qalog").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.qalog.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".qalog.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_end_with_dotfile() {
        let paths = Config::get_config_paths();
        if let Some(last) = paths.last() {
            assert!(last.ends_with(".qalog.toml"));
        }
    }

    #[test]
    fn parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
dir = "/srv/qa"
timezone = "Europe/Berlin"
json = true
debug = true
"#,
        )
        .unwrap();
        assert_eq!(config.dir, Some(PathBuf::from("/srv/qa")));
        assert_eq!(config.timezone.as_deref(), Some("Europe/Berlin"));
        assert!(config.json);
        assert!(config.debug);
    }

    #[test]
    fn missing_keys_default() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.dir.is_none());
        assert!(config.timezone.is_none());
        assert!(!config.json);
        assert!(!config.debug);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(toml::from_str::<Config>("json = \"yes\"").is_err());
    }
}
