use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// 運勢區間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    /// 提示文字用的中文區間
    pub fn label_zh(self) -> &'static str {
        match self {
            Period::Daily => "今日",
            Period::Weekly => "本週",
            Period::Monthly => "本月",
            Period::Yearly => "今年",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            "yearly" => Ok(Period::Yearly),
            other => Err(format!(
                "未知的區間: {} (可用: daily/weekly/monthly/yearly)",
                other
            )),
        }
    }
}

/// 一次查詢正規化後的運勢結果。
///
/// 不變量：結構化欄位（主欄位或 extra）與 raw 原文擇一有內容，
/// 解析失敗時只有 raw 帶原始回覆。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeReading {
    pub love: String,
    pub career: String,
    pub health: String,
    pub wealth: String,
    pub lucky_number: String,
    pub lucky_color: String,
    pub overall: String,
    pub advice: String,
    /// 上游自動擴充的額外欄位
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
    /// 解析全數失敗時保留的原始回覆
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl HoroscopeReading {
    /// 從任意 JSON 物件組出固定欄位；非物件值整個降級為原文
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::raw_fallback(value.to_string());
        };

        let mut reading = Self::default();
        for (key, val) in obj {
            match key.as_str() {
                "love" => reading.love = facet_text(val),
                "career" => reading.career = facet_text(val),
                "health" => reading.health = facet_text(val),
                "wealth" => reading.wealth = facet_text(val),
                "luckyNumber" | "lucky_number" => reading.lucky_number = facet_text(val),
                "luckyColor" | "lucky_color" => reading.lucky_color = facet_text(val),
                "overall" => reading.overall = facet_text(val),
                "advice" => reading.advice = facet_text(val),
                // 上游把整段原文塞在 other 欄位時視為 raw 候選
                "other" if val.is_string() => {
                    reading.raw = val.as_str().map(str::to_string);
                }
                _ => {
                    reading.extra.insert(key.clone(), val.clone());
                }
            }
        }
        reading
    }

    pub fn raw_fallback(text: impl Into<String>) -> Self {
        Self {
            raw: Some(text.into()),
            ..Self::default()
        }
    }

    /// 主欄位或額外欄位任一有內容
    pub fn is_structured(&self) -> bool {
        let main = [
            &self.love,
            &self.career,
            &self.health,
            &self.wealth,
            &self.lucky_number,
            &self.lucky_color,
            &self.overall,
            &self.advice,
        ];
        main.iter().any(|s| !s.is_empty()) || !self.extra.is_empty()
    }
}

/// 主欄位一律轉成文字：字串原樣，數字/布林轉字串，巢狀值轉 JSON 文字
fn facet_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
