//! # MelodyFlow Configuration Module
//!
//! This module provides configuration management for MelodyFlow, including:
//! - Loading configuration from YAML files
//! - Merging with embedded default configuration
//! - Environment variable overrides
//! - Type-safe getters and setters for configuration values
//! - Thread-safe singleton access pattern
//!
//! ## Usage
//!
//! ```no_run
//! use mfconfig::get_config;
//!
//! let config = get_config();
//!
//! let country = config.get_catalog_country()?;
//! config.set_default_volume(60)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{anyhow, Result};
use dirs::home_dir;
use lazy_static::lazy_static;
use serde_yaml::{Mapping, Number, Value};
use std::{
    env, fs,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};
use tracing::info;

const DEFAULT_CONFIG: &str = include_str!("melodyflow.yaml");

lazy_static! {
    static ref CONFIG: Arc<Config> =
        Arc::new(Config::load_config("").expect("Failed to load MelodyFlow configuration"));
}

const ENV_CONFIG_DIR: &str = "MELODYFLOW_CONFIG";
const ENV_PREFIX: &str = "MELODYFLOW_CONFIG__";
const CONFIG_DIR_NAME: &str = ".melodyflow";

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://itunes.apple.com";
pub const DEFAULT_CATALOG_COUNTRY: &str = "IN";
pub const DEFAULT_CATALOG_COUNTRY_LABEL: &str = "India";
pub const DEFAULT_RADIO_BASE_URL: &str = "https://de1.api.radio-browser.info/json";
pub const DEFAULT_RADIO_COUNTRY: &str = "India";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "MelodyFlow/0.1.0";
pub const DEFAULT_VOLUME: u8 = 70;
const DEFAULT_LOG_MIN_LEVEL: &str = "INFO";
const DEFAULT_LOG_ENABLE_CONSOLE: bool = true;

/// Generates a getter/setter pair for string values with a default
macro_rules! impl_string_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> Result<String> {
            match self.get_value($path) {
                Ok(Value::String(s)) if !s.is_empty() => Ok(s),
                _ => Ok($default.to_string()),
            }
        }

        pub fn $setter(&self, value: impl Into<String>) -> Result<()> {
            self.set_value($path, Value::String(value.into()))
        }
    };
}

/// Generates a getter/setter pair for u64 values with a default
macro_rules! impl_u64_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> Result<u64> {
            match self.get_value($path) {
                Ok(Value::Number(n)) => Ok(n.as_u64().unwrap_or($default)),
                _ => Ok($default),
            }
        }

        pub fn $setter(&self, value: u64) -> Result<()> {
            self.set_value($path, Value::Number(Number::from(value)))
        }
    };
}

/// Generates a getter/setter pair for bool values with a default
macro_rules! impl_bool_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> Result<bool> {
            match self.get_value($path) {
                Ok(Value::Bool(b)) => Ok(b),
                _ => Ok($default),
            }
        }

        pub fn $setter(&self, value: bool) -> Result<()> {
            self.set_value($path, Value::Bool(value))
        }
    };
}

/// Configuration manager for MelodyFlow
///
/// Holds the merged YAML tree (embedded defaults, `config.yaml`, environment
/// overrides) and writes it back to disk on every change.
///
/// # Examples
///
/// ```no_run
/// use mfconfig::get_config;
///
/// let config = get_config();
/// println!("Catalog: {}", config.get_catalog_base_url()?);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug)]
pub struct Config {
    config_dir: String,
    path: String,
    data: Mutex<Value>,
}

impl Config {
    /// Finds a config directory by trying different locations in order
    fn find_config_dir(directory: &str) -> String {
        if !directory.is_empty() {
            return directory.to_string();
        }

        if let Ok(env_path) = env::var(ENV_CONFIG_DIR) {
            info!(env_var = ENV_CONFIG_DIR, path = %env_path, "Trying to load config from env");
            return env_path;
        }

        if Path::new(CONFIG_DIR_NAME).exists() {
            return CONFIG_DIR_NAME.to_string();
        }

        if let Some(home) = home_dir() {
            let home_config = home.join(CONFIG_DIR_NAME);
            if home_config.exists() {
                return home_config.to_string_lossy().to_string();
            }
        }

        CONFIG_DIR_NAME.to_string()
    }

    /// Creates the directory if needed and checks it is readable and writable
    fn validate_config_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        if !path.is_dir() {
            return Err(anyhow!("{} is not a directory", path.display()));
        }

        let test_file = path.join(".write_test");
        fs::write(&test_file, b"test")?;
        fs::remove_file(&test_file)?;

        fs::read_dir(path)?;

        Ok(())
    }

    /// Determines and validates the configuration directory
    ///
    /// The directory is searched in the following order:
    /// 1. The provided `directory` parameter if not empty
    /// 2. The `MELODYFLOW_CONFIG` environment variable
    /// 3. `.melodyflow` in the current directory
    /// 4. `.melodyflow` in the user's home directory
    pub fn config_dir(directory: &str) -> Result<String> {
        let dir_path = Self::find_config_dir(directory);
        Self::validate_config_dir(Path::new(&dir_path))?;
        Ok(dir_path)
    }

    /// Loads the configuration from the specified directory
    ///
    /// This method:
    /// 1. Determines the configuration directory
    /// 2. Loads the default embedded configuration
    /// 3. Merges it with the external config.yaml file if present
    /// 4. Applies environment variable overrides
    /// 5. Saves the merged configuration
    pub fn load_config(directory: &str) -> Result<Self> {
        let config_dir = Self::config_dir(directory)?;
        info!(config_dir = %config_dir, "Using config directory");

        let config_file_path = Path::new(&config_dir).join("config.yaml");
        let path = config_file_path.to_string_lossy().to_string();

        let mut default_value: Value = serde_yaml::from_str(DEFAULT_CONFIG)?;

        let yaml_data = if let Ok(data) = fs::read(&path) {
            info!(config_file = %path, "Loaded config file");
            data
        } else {
            info!(config_file = %path, "Config file not found, using default embedded config");
            DEFAULT_CONFIG.as_bytes().to_vec()
        };

        let external_value: Value = serde_yaml::from_slice(&yaml_data)?;
        merge_yaml(&mut default_value, &external_value);
        let mut config_value = Self::lower_keys_value(default_value);

        Self::apply_env_overrides(&mut config_value);

        let config = Config {
            config_dir,
            path,
            data: Mutex::new(config_value),
        };

        config.save()?;
        Ok(config)
    }

    /// Directory holding `config.yaml`
    pub fn directory(&self) -> &str {
        &self.config_dir
    }

    fn lock(&self) -> Result<MutexGuard<'_, Value>> {
        self.data
            .lock()
            .map_err(|_| anyhow!("configuration lock poisoned"))
    }

    /// Saves the current configuration to the config.yaml file
    pub fn save(&self) -> Result<()> {
        let yaml = {
            let data = self.lock()?;
            serde_yaml::to_string(&*data)?
        };
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    /// Sets a configuration value at the specified path and saves it
    ///
    /// # Arguments
    ///
    /// * `path` - Array of keys representing the path (e.g., `&["catalog", "country"]`)
    /// * `value` - The YAML value to set
    pub fn set_value(&self, path: &[&str], value: Value) -> Result<()> {
        {
            let mut data = self.lock()?;
            Self::set_value_internal(&mut data, path, value)?;
        }
        self.save()
    }

    fn set_value_internal(data: &mut Value, path: &[&str], value: Value) -> Result<()> {
        if path.is_empty() {
            *data = value;
            return Ok(());
        }
        if let Value::Mapping(map) = data {
            let key_value = Value::String(path[0].to_lowercase());
            if path.len() == 1 {
                map.insert(key_value, value);
            } else {
                let entry = map
                    .entry(key_value)
                    .or_insert(Value::Mapping(Mapping::new()));
                Self::set_value_internal(entry, &path[1..], value)?;
            }
            Ok(())
        } else {
            Err(anyhow!("Current node is not a map"))
        }
    }

    /// Gets a configuration value at the specified path
    ///
    /// Returns an error if the path doesn't exist.
    pub fn get_value(&self, path: &[&str]) -> Result<Value> {
        let data = self.lock()?;
        Self::get_value_internal(&data, path)
    }

    fn get_value_internal(data: &Value, path: &[&str]) -> Result<Value> {
        let mut current = data;
        for (i, key) in path.iter().enumerate() {
            if let Value::Mapping(map) = current {
                match map.get(&Value::String(key.to_lowercase())) {
                    Some(next) => current = next,
                    None => return Err(anyhow!("Path {} does not exist", path[..=i].join("."))),
                }
            } else {
                return Err(anyhow!("Path {} is not a Config", path[..i].join(".")));
            }
        }
        Ok(current.clone())
    }

    fn apply_env_overrides(config: &mut Value) {
        for (key, value) in env::vars() {
            if let Some(stripped) = key.strip_prefix(ENV_PREFIX) {
                let key_path = stripped.split("__").collect::<Vec<_>>();
                let yaml_value = Self::convert_env_value(&value);
                let _ = Self::set_value_internal(config, &key_path, yaml_value);
            }
        }
    }

    fn convert_env_value(value: &str) -> Value {
        serde_yaml::from_str::<Value>(value).unwrap_or_else(|_| Value::String(value.to_string()))
    }

    fn lower_keys_value(value: Value) -> Value {
        match value {
            Value::Mapping(map) => {
                let mut new_map = Mapping::new();
                for (k, v) in map {
                    let key = match k {
                        Value::String(s) => Value::String(s.to_lowercase()),
                        other => other,
                    };
                    new_map.insert(key, Self::lower_keys_value(v));
                }
                Value::Mapping(new_map)
            }
            Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(Self::lower_keys_value).collect())
            }
            _ => value,
        }
    }

    // ========================================================================
    // Catalog search API
    // ========================================================================

    impl_string_config!(
        get_catalog_base_url,
        set_catalog_base_url,
        &["catalog", "base_url"],
        DEFAULT_CATALOG_BASE_URL
    );

    impl_string_config!(
        get_catalog_country,
        set_catalog_country,
        &["catalog", "country"],
        DEFAULT_CATALOG_COUNTRY
    );

    impl_string_config!(
        get_catalog_country_label,
        set_catalog_country_label,
        &["catalog", "country_label"],
        DEFAULT_CATALOG_COUNTRY_LABEL
    );

    impl_u64_config!(
        get_catalog_timeout_secs,
        set_catalog_timeout_secs,
        &["catalog", "timeout_secs"],
        DEFAULT_TIMEOUT_SECS
    );

    // ========================================================================
    // Radio directory API
    // ========================================================================

    impl_string_config!(
        get_radio_base_url,
        set_radio_base_url,
        &["radio", "base_url"],
        DEFAULT_RADIO_BASE_URL
    );

    impl_string_config!(
        get_radio_country,
        set_radio_country,
        &["radio", "country"],
        DEFAULT_RADIO_COUNTRY
    );

    impl_u64_config!(
        get_radio_timeout_secs,
        set_radio_timeout_secs,
        &["radio", "timeout_secs"],
        DEFAULT_TIMEOUT_SECS
    );

    // ========================================================================
    // Host
    // ========================================================================

    impl_string_config!(
        get_user_agent,
        set_user_agent,
        &["host", "user_agent"],
        DEFAULT_USER_AGENT
    );

    impl_string_config!(
        get_log_min_level,
        set_log_min_level,
        &["host", "logger", "min_level"],
        DEFAULT_LOG_MIN_LEVEL
    );

    impl_bool_config!(
        get_log_enable_console,
        set_log_enable_console,
        &["host", "logger", "enable_console"],
        DEFAULT_LOG_ENABLE_CONSOLE
    );

    // ========================================================================
    // Player
    // ========================================================================

    /// Volume the transport bar restores when unmuting
    pub fn get_default_volume(&self) -> Result<u8> {
        match self.get_value(&["player", "default_volume"]) {
            Ok(Value::Number(n)) => Ok(n
                .as_u64()
                .and_then(|v| u8::try_from(v).ok())
                .unwrap_or(DEFAULT_VOLUME)),
            _ => Ok(DEFAULT_VOLUME),
        }
    }

    pub fn set_default_volume(&self, volume: u8) -> Result<()> {
        self.set_value(
            &["player", "default_volume"],
            Value::Number(Number::from(volume)),
        )
    }
}

/// Returns the global configuration instance
///
/// The configuration is lazily loaded on first access.
///
/// # Panics
///
/// Panics if no configuration directory can be created or read.
pub fn get_config() -> Arc<Config> {
    CONFIG.clone()
}

/// Merges external YAML configuration into default configuration
///
/// Mappings are merged key by key; scalars and sequences from `external`
/// replace the default.
fn merge_yaml(default: &mut Value, external: &Value) {
    match (default, external) {
        (Value::Mapping(dmap), Value::Mapping(emap)) => {
            for (k, v) in emap {
                match dmap.get_mut(k) {
                    Some(dv) => merge_yaml(dv, v),
                    None => {
                        dmap.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        (d, e) => *d = e.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_in(dir: &tempfile::TempDir) -> Config {
        Config::load_config(dir.path().to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_defaults_from_embedded_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_in(&dir);

        assert_eq!(config.get_catalog_base_url().unwrap(), DEFAULT_CATALOG_BASE_URL);
        assert_eq!(config.get_catalog_country().unwrap(), "IN");
        assert_eq!(config.get_radio_country().unwrap(), "India");
        assert_eq!(config.get_catalog_timeout_secs().unwrap(), 30);
        assert_eq!(config.get_default_volume().unwrap(), 70);
        assert!(config.get_log_enable_console().unwrap());
        assert!(dir.path().join("config.yaml").exists());
    }

    #[test]
    fn test_set_value_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        {
            let config = load_in(&dir);
            config.set_catalog_country("FR").unwrap();
            config.set_default_volume(55).unwrap();
        }

        let reloaded = load_in(&dir);
        assert_eq!(reloaded.get_catalog_country().unwrap(), "FR");
        assert_eq!(reloaded.get_default_volume().unwrap(), 55);
        // untouched keys keep their defaults
        assert_eq!(reloaded.get_radio_base_url().unwrap(), DEFAULT_RADIO_BASE_URL);
    }

    #[test]
    fn test_external_file_is_merged_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.yaml"),
            "radio:\n  country: Germany\n",
        )
        .unwrap();

        let config = load_in(&dir);
        assert_eq!(config.get_radio_country().unwrap(), "Germany");
        assert_eq!(config.get_radio_timeout_secs().unwrap(), 30);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_in(&dir);

        let err = config.get_value(&["catalog", "nope"]).unwrap_err();
        assert!(err.to_string().contains("catalog.nope"));
    }

    #[test]
    fn test_out_of_range_volume_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_in(&dir);

        config
            .set_value(&["player", "default_volume"], Value::Number(Number::from(900)))
            .unwrap();
        assert_eq!(config.get_default_volume().unwrap(), DEFAULT_VOLUME);
    }

    #[test]
    fn test_merge_yaml_replaces_scalars() {
        let mut base: Value = serde_yaml::from_str("a: 1\nb:\n  c: 2\n  d: 3\n").unwrap();
        let ext: Value = serde_yaml::from_str("b:\n  c: 5\n").unwrap();
        merge_yaml(&mut base, &ext);

        let expected: Value = serde_yaml::from_str("a: 1\nb:\n  c: 5\n  d: 3\n").unwrap();
        assert_eq!(base, expected);
    }
}
