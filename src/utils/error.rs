use thiserror::Error;

#[derive(Error, Debug)]
pub enum FortuneError {
    #[error("缺少 API 金鑰")]
    MissingApiKey,

    #[error("未指定星座")]
    MissingSign,

    #[error("API 請求失敗: {status}")]
    RequestFailed { status: u16 },

    #[error("API request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("設定檔解析失敗: {0}")]
    SettingsParseError(#[from] toml::de::Error),

    #[error("設定檔寫入失敗: {0}")]
    SettingsWriteError(#[from] toml::ser::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl FortuneError {
    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FortuneError::MissingApiKey => "缺少 API 金鑰".to_string(),
            FortuneError::MissingSign => "未指定星座".to_string(),
            FortuneError::RequestFailed { status } => format!("API 請求失敗: {}", status),
            FortuneError::HttpError(_) => "無法連線至 Gemini API".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FortuneError::MissingApiKey => {
                "使用 --api-key 提供金鑰，或加上 --save-key 寫入設定檔".to_string()
            }
            FortuneError::MissingSign => {
                "使用 --zodiac 指定星座，或以 --birthdate yyyy-mm-dd 推算".to_string()
            }
            FortuneError::RequestFailed { .. } => {
                "確認 API 金鑰仍然有效，以及 --endpoint 指向正確的模型".to_string()
            }
            FortuneError::HttpError(_) => "檢查網路連線後重試".to_string(),
            FortuneError::SettingsParseError(_) | FortuneError::SettingsWriteError(_) => {
                "檢查設定檔內容，必要時刪除後重新 --save-key".to_string()
            }
            _ => "檢查輸入參數後重試".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FortuneError>;
