use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const ANNOTATION_DIR: &str = "ANNOTATION_DIR";
pub const TRANSCRIPT_COMPOSITE_MODEL_FILENAME: &str = "TRANSCRIPT_COMPOSITE_MODEL_FILENAME";

const ENV_VAR: &str = "FUSIONSEQ_CONFPATH";

/// A `key = value` (or `key value`) configuration file, tolerating blank lines and
/// `#` comments. Unknown keys are retained but unused by the core (§10.3).
#[derive(Debug, Clone, Default)]
pub struct Config {
    values: HashMap<String, String>,
}

impl Config {
    /// Resolve the config path: `override_path`, else the `FUSIONSEQ_CONFPATH` env var.
    pub fn resolve_path(override_path: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
        match override_path {
            Some(path) => Ok(path),
            None => std::env::var(ENV_VAR).map(PathBuf::from).map_err(|_| ConfigError::MissingEnvVar(ENV_VAR.to_string())),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;

        let mut values = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = match line.split_once('=') {
                Some((k, v)) => (k.trim(), v.trim()),
                None => match line.split_once(char::is_whitespace) {
                    Some((k, v)) => (k.trim(), v.trim()),
                    None => continue,
                },
            };
            values.insert(key.to_string(), value.to_string());
        }
        Ok(Config { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str, path: &Path) -> Result<&str, ConfigError> {
        self.get(key).ok_or_else(|| ConfigError::MissingKey { path: path.display().to_string(), key: key.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn parses_equals_and_whitespace_separated_keys() {
        let file = write_config("# comment\nANNOTATION_DIR = /data/annot\nTRANSCRIPT_COMPOSITE_MODEL_FILENAME /data/model.txt\n\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.get(ANNOTATION_DIR), Some("/data/annot"));
        assert_eq!(config.get(TRANSCRIPT_COMPOSITE_MODEL_FILENAME), Some("/data/model.txt"));
    }

    #[test]
    fn require_fails_on_missing_key() {
        let file = write_config("ANNOTATION_DIR = /data/annot\n");
        let config = Config::load(file.path()).unwrap();
        let err = config.require(TRANSCRIPT_COMPOSITE_MODEL_FILENAME, file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { .. }));
    }

    #[test]
    fn resolve_path_prefers_override_to_env() {
        let resolved = Config::resolve_path(Some(PathBuf::from("/explicit/path"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/explicit/path"));
    }

    #[test]
    fn resolve_path_fails_without_override_or_env() {
        std::env::remove_var(ENV_VAR);
        let err = Config::resolve_path(None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }
}
