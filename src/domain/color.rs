use regex::Regex;

/// 常見中文色名對應 CSS 色碼
const COLOR_TABLE: [(&str, &str); 28] = [
    ("草綠色", "#32CD32"),
    ("粉紅", "#FFC0CB"),
    ("天藍", "#87CEEB"),
    ("金色", "#FFD700"),
    ("紅色", "#FF0000"),
    ("黑色", "#000000"),
    ("白色", "#FFFFFF"),
    ("灰色", "#808080"),
    ("銀色", "#C0C0C0"),
    ("綠色", "#008000"),
    ("藍色", "#0000FF"),
    ("黃色", "#FFFF00"),
    ("紫色", "#800080"),
    ("橙色", "#FFA500"),
    ("棕色", "#964B00"),
    ("青色", "#008080"),
    ("粉色", "#FFB6C1"),
    ("褐色", "#A52A2A"),
    ("淺綠", "#C6F4D6"),
    ("淺藍", "#ADD8E6"),
    ("淺黃", "#FFFFE0"),
    ("淺紅", "#FFC5C5"),
    ("淺紫", "#C7B8EA"),
    ("淺橙", "#FFD7BE"),
    ("淺棕", "#F5DEB3"),
    ("淺青", "#B2E6CE"),
    ("淺粉", "#FFC0CB"),
    ("淺褐", "#F0E4CC"),
];

/// 由 luckyColor 欄位解析出的色名與色碼。code 為空字串時表示未知色碼。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorInfo {
    pub name: String,
    pub code: String,
}

impl ColorInfo {
    /// 可直接當 CSS 顏色使用的值：有色碼用色碼，否則把色名當作顏色 token
    pub fn css_token(&self) -> &str {
        if self.code.is_empty() {
            &self.name
        } else {
            &self.code
        }
    }
}

pub fn resolve_color_name(name: &str) -> Option<&'static str> {
    COLOR_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

/// 解析「草綠色 (#32CD32)」或「粉紅（#FFC0CB）」這類格式，半形全形括號皆可。
/// 沒有附色碼時改查色名對照表；查不到就原樣帶出色名。
pub fn extract_color_info(lucky_color: &str) -> ColorInfo {
    if lucky_color.trim().is_empty() {
        return ColorInfo::default();
    }

    let re = Regex::new(r"([\x{4e00}-\x{9fa5}A-Za-z]+)[\s(（]*#?([0-9A-Fa-f]{6,8})?[)）]?")
        .expect("color pattern");

    if let Some(caps) = re.captures(lucky_color) {
        let name = caps[1].to_string();
        let code = caps
            .get(2)
            .map(|m| format!("#{}", m.as_str()))
            .or_else(|| resolve_color_name(&name).map(str::to_string))
            .unwrap_or_default();
        return ColorInfo { name, code };
    }

    ColorInfo {
        name: lucky_color.to_string(),
        code: String::new(),
    }
}
