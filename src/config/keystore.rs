use crate::utils::error::{FortuneError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 持久化的使用者設定，目前只有 API 金鑰
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_key: String,
}

/// 金鑰儲存：啟動時載入、--save-key 時整檔覆寫，不提供刪除
#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("astro-fortune").join("config.toml"))
    }

    pub fn from_default_location() -> Result<Self> {
        Self::default_path()
            .map(Self::new)
            .ok_or_else(|| FortuneError::ConfigError {
                message: "無法定位使用者設定目錄".to_string(),
            })
    }

    /// 讀出已儲存的金鑰；檔案不存在或金鑰為空時回 None
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let settings: Settings = toml::from_str(&content)?;

        if settings.api_key.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(settings.api_key))
        }
    }

    pub fn save(&self, api_key: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let settings = Settings {
            api_key: api_key.to_string(),
        };
        fs::write(&self.path, toml::to_string_pretty(&settings)?)?;

        tracing::debug!("🔑 API 金鑰寫入 {}", self.path.display());
        Ok(())
    }
}
