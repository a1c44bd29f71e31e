use crate::domain::color::extract_color_info;
use crate::domain::model::{HoroscopeReading, Period};
use crate::domain::zodiac::Sign;
use chrono::NaiveDate;
use serde_json::Value;

/// 主欄位顯示順序與標籤
const MAIN_FIELDS: [(&str, &str); 8] = [
    ("love", "愛情💖"),
    ("career", "事業💼"),
    ("health", "健康🩺"),
    ("wealth", "財運💰"),
    ("luckyNumber", "幸運數字🎲"),
    ("luckyColor", "幸運色彩🎨"),
    ("overall", "總評🌟"),
    ("advice", "建議📌"),
];

/// 額外欄位的標籤對照，沒對到的直接用鍵名
fn extra_label(key: &str) -> (&str, String) {
    match key {
        "general" => ("📋", "綜合運勢".to_string()),
        "summary" => ("🌟", "總評".to_string()),
        "tip" => ("💡", "小建議".to_string()),
        "advice" => ("📌", "建議".to_string()),
        "note" => ("📝", "備註".to_string()),
        "sign" => ("🔮", "星座".to_string()),
        other => ("📋", other.to_string()),
    }
}

fn main_value<'a>(reading: &'a HoroscopeReading, key: &str) -> &'a str {
    match key {
        "love" => &reading.love,
        "career" => &reading.career,
        "health" => &reading.health,
        "wealth" => &reading.wealth,
        "luckyNumber" => &reading.lucky_number,
        "luckyColor" => &reading.lucky_color,
        "overall" => &reading.overall,
        "advice" => &reading.advice,
        _ => "",
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 把運勢結果排成終端輸出：主欄位依序、額外欄位自動展開、
/// 解析失敗時原文照登，最後附上查詢日期。
pub fn render_reading(
    sign: Sign,
    period: Period,
    reading: &HoroscopeReading,
    today: NaiveDate,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {} ({}) {}運勢",
        sign.emoji(),
        sign.zh(),
        sign.en(),
        period.label_zh()
    ));
    lines.push(String::new());

    for (key, label) in MAIN_FIELDS {
        let value = main_value(reading, key);
        if value.is_empty() {
            continue;
        }
        if key == "luckyColor" {
            let color = extract_color_info(value);
            if color.code.is_empty() {
                lines.push(format!("{}：{}", label, color.name));
            } else {
                lines.push(format!("{}：{} ({})", label, color.name, color.code));
            }
        } else {
            lines.push(format!("{}：{}", label, value));
        }
    }

    for (key, value) in &reading.extra {
        if key == "date" {
            continue;
        }
        let (emoji, label) = extra_label(key);
        // 巢狀物件逐一展開子欄位
        if let Value::Object(map) = value {
            for (sub_key, sub_val) in map {
                lines.push(format!(
                    "{} {}（{}）：{}",
                    emoji,
                    label,
                    sub_key,
                    value_text(sub_val)
                ));
            }
        } else {
            lines.push(format!("{} {}：{}", emoji, label, value_text(value)));
        }
    }

    if let Some(raw) = &reading.raw {
        if !raw.is_empty() {
            if !reading.is_structured() {
                lines.push("⚠️ 回覆無法解析為 JSON，以下為原始內容：".to_string());
            }
            lines.push(raw.clone());
        }
    }

    lines.push(String::new());
    lines.push(format!("date：{}", today.format("%Y-%m-%d")));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
    }

    #[test]
    fn test_render_header_and_facets() {
        let reading = HoroscopeReading {
            love: "桃花運旺".to_string(),
            career: "適合談合作".to_string(),
            ..Default::default()
        };
        let output = render_reading(Sign::Aries, Period::Daily, &reading, today());

        assert!(output.contains("♈️ 牡羊座 (Aries) 今日運勢"));
        assert!(output.contains("愛情💖：桃花運旺"));
        assert!(output.contains("事業💼：適合談合作"));
        // 空欄位不出現
        assert!(!output.contains("健康🩺"));
        assert!(output.contains("date：2025-06-18"));
    }

    #[test]
    fn test_render_lucky_color_resolves_code_from_table() {
        let reading = HoroscopeReading {
            lucky_color: "粉紅".to_string(),
            ..Default::default()
        };
        let output = render_reading(Sign::Libra, Period::Weekly, &reading, today());
        assert!(output.contains("幸運色彩🎨：粉紅 (#FFC0CB)"));
    }

    #[test]
    fn test_render_lucky_color_keeps_embedded_code() {
        let reading = HoroscopeReading {
            lucky_color: "草綠色 (#32CD32)".to_string(),
            ..Default::default()
        };
        let output = render_reading(Sign::Libra, Period::Daily, &reading, today());
        assert!(output.contains("幸運色彩🎨：草綠色 (#32CD32)"));
    }

    #[test]
    fn test_render_extra_fields_with_labels() {
        let mut reading = HoroscopeReading {
            love: "好".to_string(),
            ..Default::default()
        };
        reading.extra.insert("tip".to_string(), json!("早點睡"));
        reading
            .extra
            .insert("study".to_string(), json!({"focus": "下午狀態最佳"}));

        let output = render_reading(Sign::Gemini, Period::Daily, &reading, today());
        assert!(output.contains("💡 小建議：早點睡"));
        assert!(output.contains("📋 study（focus）：下午狀態最佳"));
    }

    #[test]
    fn test_render_raw_fallback_verbatim() {
        let reading = HoroscopeReading::raw_fallback("今天適合靜心等待。");
        let output = render_reading(Sign::Pisces, Period::Daily, &reading, today());
        assert!(output.contains("⚠️ 回覆無法解析為 JSON"));
        assert!(output.contains("今天適合靜心等待。"));
    }

    #[test]
    fn test_render_skips_date_extra_field() {
        let mut reading = HoroscopeReading {
            love: "好".to_string(),
            ..Default::default()
        };
        reading.extra.insert("date".to_string(), json!("2025-06-18"));
        let output = render_reading(Sign::Leo, Period::Daily, &reading, today());
        assert!(!output.contains("📋 date"));
    }
}
