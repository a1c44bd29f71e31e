use crate::domain::model::HoroscopeReading;
use crate::domain::zodiac::Sign;
use regex::Regex;
use serde_json::Value;

/// 依序嘗試的解析策略，每一段自行吞掉失敗，全部失敗才回 None：
/// 1. 去掉頭尾 ```json 圍欄後解析
/// 2. 原文直接解析
/// 3. 擷取第一段 `{...}` 子字串解析
pub fn parse_reply_text(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }

    strip_fences_and_parse(text)
        .or_else(|| parse_object(text))
        .or_else(|| parse_brace_substring(text))
}

fn strip_fences_and_parse(text: &str) -> Option<Value> {
    let re = Regex::new(r"^```json|```$").expect("fence pattern");
    let cleaned = re.replace_all(text.trim(), "");
    parse_object(cleaned.trim())
}

fn parse_object(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(Value::is_object)
}

fn parse_brace_substring(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    parse_object(&text[start..=end])
}

/// 上游偶爾把結果包成 {"aries": {...}}，鍵名是已知星座時往下剝一層
fn unwrap_sign_key(value: Value) -> Value {
    if let Value::Object(map) = &value {
        if map.len() == 1 {
            if let Some((key, inner)) = map.iter().next() {
                if Sign::from_key(key).is_some() && inner.is_object() {
                    return inner.clone();
                }
            }
        }
    }
    value
}

/// 把 Gemini 的回覆文字正規化成固定欄位的運勢結果。
/// 解析全數失敗時主欄位留空、raw 帶原文，絕不往外丟錯。
pub fn normalize_reply(text: &str) -> HoroscopeReading {
    match parse_reply_text(text) {
        Some(value) => reading_from_value(value),
        None => HoroscopeReading::raw_fallback(text),
    }
}

fn reading_from_value(value: Value) -> HoroscopeReading {
    let value = unwrap_sign_key(value);
    let reading = HoroscopeReading::from_value(&value);

    // raw 欄位（上游的 other）內容若仍是 JSON 字串，遞迴再解析一次
    if let Some(raw) = reading.raw.as_deref() {
        if let Some(inner) = parse_reply_text(raw) {
            return reading_from_value(inner);
        }
    }

    reading
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CLEAN_REPLY: &str = r#"{
        "love": "桃花運旺",
        "career": "適合談合作",
        "health": "注意睡眠",
        "wealth": "偏財運佳",
        "luckyNumber": "7",
        "luckyColor": "草綠色 (#32CD32)",
        "overall": "整體順遂",
        "advice": "把握機會"
    }"#;

    #[test]
    fn test_clean_json_parses_unchanged() {
        let reading = normalize_reply(CLEAN_REPLY);
        assert_eq!(reading.love, "桃花運旺");
        assert_eq!(reading.lucky_number, "7");
        assert_eq!(reading.lucky_color, "草綠色 (#32CD32)");
        assert_eq!(reading.advice, "把握機會");
        assert!(reading.raw.is_none());
    }

    #[test]
    fn test_fenced_reply_parses_same_as_clean() {
        let fenced = format!("```json\n{}\n```", CLEAN_REPLY);
        assert_eq!(normalize_reply(&fenced), normalize_reply(CLEAN_REPLY));
    }

    #[test]
    fn test_fence_without_language_tag() {
        let fenced = format!("```\n{}\n```", CLEAN_REPLY);
        let reading = normalize_reply(&fenced);
        assert_eq!(reading.love, "桃花運旺");
    }

    #[test]
    fn test_json_embedded_in_prose() {
        let text = format!("好的，以下是運勢：\n{}\n祝順心！", CLEAN_REPLY);
        let reading = normalize_reply(&text);
        assert_eq!(reading.career, "適合談合作");
        assert!(reading.raw.is_none());
    }

    #[test]
    fn test_pure_prose_falls_back_to_raw() {
        let text = "今天整體運勢平平，多喝水，早點休息。";
        let reading = normalize_reply(text);
        assert!(!reading.is_structured());
        assert_eq!(reading.raw.as_deref(), Some(text));
    }

    #[test]
    fn test_empty_reply_falls_back_to_raw() {
        let reading = normalize_reply("");
        assert!(!reading.is_structured());
        assert_eq!(reading.raw.as_deref(), Some(""));
    }

    #[test]
    fn test_sign_keyed_wrapper_unwraps() {
        let text = r#"{"aries": {"love": "不錯", "career": "平穩"}}"#;
        let reading = normalize_reply(text);
        assert_eq!(reading.love, "不錯");
        assert_eq!(reading.career, "平穩");
        assert!(reading.extra.get("aries").is_none());
    }

    #[test]
    fn test_unknown_single_key_is_not_unwrapped() {
        let text = r#"{"forecast": {"love": "不錯"}}"#;
        let reading = normalize_reply(text);
        assert!(reading.love.is_empty());
        assert_eq!(reading.extra["forecast"], json!({"love": "不錯"}));
    }

    #[test]
    fn test_other_field_with_embedded_json_reparses() {
        let inner = r#"{\"love\": \"穩定\", \"wealth\": \"小有進帳\"}"#;
        let text = format!(
            r#"{{"love": "", "career": "", "health": "", "wealth": "",
                "luckyNumber": "", "luckyColor": "", "other": "{}"}}"#,
            inner
        );
        let reading = normalize_reply(&text);
        assert_eq!(reading.love, "穩定");
        assert_eq!(reading.wealth, "小有進帳");
        assert!(reading.raw.is_none());
    }

    #[test]
    fn test_other_field_with_plain_text_stays_raw() {
        let text = r#"{"love": "", "career": "", "health": "", "wealth": "",
                       "luckyNumber": "", "luckyColor": "", "other": "水星逆行，注意溝通"}"#;
        let reading = normalize_reply(text);
        assert!(!reading.is_structured());
        assert_eq!(reading.raw.as_deref(), Some("水星逆行，注意溝通"));
    }

    #[test]
    fn test_non_object_json_is_treated_as_prose() {
        let reading = normalize_reply("42");
        assert!(!reading.is_structured());
        assert_eq!(reading.raw.as_deref(), Some("42"));
    }

    #[test]
    fn test_parse_brace_substring_requires_balanced_span() {
        assert!(parse_reply_text("開頭 } 再來 { 結束").is_none());
    }
}
