pub mod keystore;

use crate::core::fetch::DEFAULT_ENDPOINT;
use crate::domain::model::Period;
use crate::domain::zodiac::Sign;
use crate::utils::error::{FortuneError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "astro-fortune")]
#[command(about = "AI 星座運勢占卜 CLI")]
pub struct CliConfig {
    /// 星座 (aries..pisces)，與 --birthdate 擇一
    #[arg(long)]
    pub zodiac: Option<Sign>,

    /// 生日 (yyyy-mm-dd)，用來推算星座
    #[arg(long)]
    pub birthdate: Option<NaiveDate>,

    /// 運勢區間 daily/weekly/monthly/yearly
    #[arg(long, default_value_t = Period::Daily)]
    pub period: Period,

    /// Gemini API 金鑰，未提供時讀取設定檔
    #[arg(long)]
    pub api_key: Option<String>,

    /// 把 --api-key 寫進設定檔供之後使用
    #[arg(long)]
    pub save_key: bool,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// 設定檔路徑，預設在使用者設定目錄
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// 以 JSON 輸出正規化後的結果
    #[arg(long)]
    pub raw_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 決定要查的星座：明確指定優先，否則由生日推算
    pub fn resolve_sign(&self) -> Result<Sign> {
        if let Some(sign) = self.zodiac {
            return Ok(sign);
        }
        if let Some(date) = self.birthdate {
            return Sign::for_date(date).ok_or(FortuneError::MissingSign);
        }
        Err(FortuneError::MissingSign)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;

        if let Some(key) = &self.api_key {
            validate_non_empty_string("api_key", key)?;
        }

        if self.save_key && self.api_key.is_none() {
            return Err(FortuneError::ConfigError {
                message: "--save-key 需要同時提供 --api-key".to_string(),
            });
        }

        Ok(())
    }
}
