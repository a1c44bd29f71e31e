use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// 十二星座
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// 星座靜態資料：中英文名、符號與日期範圍
#[derive(Debug, Clone, Copy)]
pub struct SignInfo {
    pub key: &'static str,
    pub zh: &'static str,
    pub en: &'static str,
    pub emoji: &'static str,
    /// (起始月, 起始日, 結束月, 結束日)，魔羯座跨年
    pub range: (u32, u32, u32, u32),
}

const SIGN_TABLE: [SignInfo; 12] = [
    SignInfo { key: "aries", zh: "牡羊座", en: "Aries", emoji: "♈️", range: (3, 21, 4, 19) },
    SignInfo { key: "taurus", zh: "金牛座", en: "Taurus", emoji: "♉️", range: (4, 20, 5, 20) },
    SignInfo { key: "gemini", zh: "雙子座", en: "Gemini", emoji: "♊️", range: (5, 21, 6, 20) },
    SignInfo { key: "cancer", zh: "巨蟹座", en: "Cancer", emoji: "♋️", range: (6, 21, 7, 22) },
    SignInfo { key: "leo", zh: "獅子座", en: "Leo", emoji: "♌️", range: (7, 23, 8, 22) },
    SignInfo { key: "virgo", zh: "處女座", en: "Virgo", emoji: "♍️", range: (8, 23, 9, 22) },
    SignInfo { key: "libra", zh: "天秤座", en: "Libra", emoji: "♎️", range: (9, 23, 10, 22) },
    SignInfo { key: "scorpio", zh: "天蠍座", en: "Scorpio", emoji: "♏️", range: (10, 23, 11, 21) },
    SignInfo { key: "sagittarius", zh: "射手座", en: "Sagittarius", emoji: "♐️", range: (11, 22, 12, 21) },
    SignInfo { key: "capricorn", zh: "魔羯座", en: "Capricorn", emoji: "♑️", range: (12, 22, 1, 19) },
    SignInfo { key: "aquarius", zh: "水瓶座", en: "Aquarius", emoji: "♒️", range: (1, 20, 2, 18) },
    SignInfo { key: "pisces", zh: "雙魚座", en: "Pisces", emoji: "♓️", range: (2, 19, 3, 20) },
];

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn info(self) -> &'static SignInfo {
        &SIGN_TABLE[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn zh(self) -> &'static str {
        self.info().zh
    }

    pub fn en(self) -> &'static str {
        self.info().en
    }

    pub fn emoji(self) -> &'static str {
        self.info().emoji
    }

    pub fn from_key(key: &str) -> Option<Sign> {
        Sign::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// 由生日推算星座。日期範圍不依賴特定年份，魔羯座 12/22–1/19 跨年比對。
    pub fn for_date(date: NaiveDate) -> Option<Sign> {
        Sign::for_month_day(date.month(), date.day())
    }

    pub fn for_month_day(month: u32, day: u32) -> Option<Sign> {
        Sign::ALL.iter().copied().find(|sign| {
            let (start_m, start_d, end_m, end_d) = sign.info().range;
            (month == start_m && day >= start_d) || (month == end_m && day <= end_d)
        })
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Sign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::from_key(&s.to_lowercase())
            .ok_or_else(|| format!("未知的星座: {} (可用: aries..pisces)", s))
    }
}
