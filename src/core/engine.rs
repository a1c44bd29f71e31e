use crate::core::fetch::GeminiClient;
use crate::core::normalize::normalize_reply;
use crate::core::prompt::build_prompt;
use crate::domain::model::{HoroscopeReading, Period};
use crate::domain::zodiac::Sign;
use crate::utils::error::Result;
use chrono::{Local, NaiveDate};

/// 一次查詢的完整流程：組提示 → 呼叫 Gemini → 正規化。
/// 單一請求、等它跑完為止，沒有重試與快取。
pub struct FortuneEngine {
    client: GeminiClient,
}

impl FortuneEngine {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, api_key: &str, sign: Sign, period: Period) -> Result<HoroscopeReading> {
        self.run_at(api_key, sign, period, Local::now().date_naive())
            .await
    }

    /// 以指定的「今天」執行，日期範圍計算因此可測
    pub async fn run_at(
        &self,
        api_key: &str,
        sign: Sign,
        period: Period,
        today: NaiveDate,
    ) -> Result<HoroscopeReading> {
        tracing::info!(
            "🔮 查詢 {} ({}) {}運勢",
            sign.zh(),
            sign.en(),
            period.label_zh()
        );

        let prompt = build_prompt(sign, period, today);
        let text = self.client.generate(api_key, &prompt).await?;
        tracing::debug!("收到回覆 {} 字", text.chars().count());

        let reading = normalize_reply(&text);
        if !reading.is_structured() {
            // 解析失敗不是錯誤，降級為原文呈現
            tracing::warn!("⚠️ 回覆無法解析為 JSON，改以原文呈現");
        }

        Ok(reading)
    }
}
