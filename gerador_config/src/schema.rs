use gerador_core::{BirthYearWindow, DEFAULT_INITIAL_BANKS, STORAGE_KEY, ServiceSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR_NAME: &str = "gerador";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub banks: BanksConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub backup: BackupConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the store file. Defaults to the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "StorageConfig::default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: Self::default_key(),
        }
    }
}

impl StorageConfig {
    fn default_key() -> String {
        STORAGE_KEY.to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BanksConfig {
    #[serde(default = "BanksConfig::default_initial_count")]
    pub initial_count: usize,
    #[serde(default = "BanksConfig::default_min_birth_year")]
    pub min_birth_year: i32,
    #[serde(default = "BanksConfig::default_max_birth_year")]
    pub max_birth_year: i32,
}

impl Default for BanksConfig {
    fn default() -> Self {
        Self {
            initial_count: Self::default_initial_count(),
            min_birth_year: Self::default_min_birth_year(),
            max_birth_year: Self::default_max_birth_year(),
        }
    }
}

impl BanksConfig {
    const fn default_initial_count() -> usize {
        DEFAULT_INITIAL_BANKS
    }

    fn default_min_birth_year() -> i32 {
        BirthYearWindow::default().min
    }

    fn default_max_birth_year() -> i32 {
        BirthYearWindow::default().max
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SecurityConfig {
    /// Typed to confirm destructive commands. Not a security boundary.
    #[serde(default = "SecurityConfig::default_passphrase")]
    pub confirmation_passphrase: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            confirmation_passphrase: Self::default_passphrase(),
        }
    }
}

impl SecurityConfig {
    fn default_passphrase() -> String {
        "100822".to_string()
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BackupConfig {
    /// Where `export` writes by default. Current directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads `~/gerador/config.json`, or defaults when the file is missing.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.banks.min_birth_year > self.banks.max_birth_year {
            anyhow::bail!(
                "banks.min_birth_year ({}) is greater than banks.max_birth_year ({})",
                self.banks.min_birth_year,
                self.banks.max_birth_year
            );
        }
        if self.storage.key.trim().is_empty() {
            anyhow::bail!("storage.key must not be empty");
        }
        Ok(())
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Directory of the store file.
    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::config_dir(),
        }
    }

    #[must_use]
    pub fn backup_dir(&self) -> PathBuf {
        self.backup.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    #[must_use]
    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            initial_banks: self.banks.initial_count,
            birth_years: BirthYearWindow::new(self.banks.min_birth_year, self.banks.max_birth_year),
        }
    }

    #[must_use]
    pub fn passphrase_matches(&self, attempt: &str) -> bool {
        attempt == self.security.confirmation_passphrase
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        Self::write_template(&config_path)?;
        Ok(config_path)
    }

    /// Writes the default config to `path`. Refuses to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)?;
        Ok(())
    }
}
