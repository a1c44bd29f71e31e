use crate::domain::model::Period;
use crate::domain::zodiac::Sign;
use chrono::{Datelike, Duration, NaiveDate};

/// 計算區間實際涵蓋的日曆範圍。今日運勢不附範圍；
/// 本週為週一到週日，本月為當月第一天到最後一天，今年為 1/1 到 12/31。
pub fn period_range(period: Period, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    match period {
        Period::Daily => None,
        Period::Weekly => {
            let offset = today.weekday().num_days_from_monday() as i64;
            let monday = today - Duration::days(offset);
            Some((monday, monday + Duration::days(6)))
        }
        Period::Monthly => {
            let first = today.with_day(1)?;
            let next_month = if today.month() == 12 {
                NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)?
            } else {
                NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)?
            };
            Some((first, next_month.pred_opt()?))
        }
        Period::Yearly => Some((
            NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
            NaiveDate::from_ymd_opt(today.year(), 12, 31)?,
        )),
    }
}

/// 組出要求 Gemini 直接回傳乾淨 JSON 的提示文字
pub fn build_prompt(sign: Sign, period: Period, today: NaiveDate) -> String {
    let range_text = period_range(period, today)
        .map(|(start, end)| {
            format!(
                "（{} ～ {}）",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            )
        })
        .unwrap_or_default();

    format!(
        "請以 JSON 格式回覆{zh}({en}){period}{range}的星座運勢，內容包含：\n\
         - 愛情（love）\n\
         - 事業（career）\n\
         - 健康（health）\n\
         - 財運（wealth）\n\
         - 幸運數字（luckyNumber）\n\
         - 幸運色彩（luckyColor）：請同時提供色名與 CSS 顏色碼，例如「草綠色 (#32CD32)」或「粉紅（#FFC0CB）」\n\
         - 總評（overall）\n\
         - 建議（advice）\n\
         其餘欄位可自動擴充。\n\
         請直接回傳乾淨的 JSON，不要有多餘說明。",
        zh = sign.zh(),
        en = sign.en(),
        period = period.label_zh(),
        range = range_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_has_no_range() {
        assert_eq!(period_range(Period::Daily, date(2025, 6, 18)), None);
    }

    #[test]
    fn test_weekly_range_is_monday_to_sunday() {
        // 2025-06-18 是週三
        let range = period_range(Period::Weekly, date(2025, 6, 18)).unwrap();
        assert_eq!(range, (date(2025, 6, 16), date(2025, 6, 22)));

        // 週一與週日落在同一週
        assert_eq!(
            period_range(Period::Weekly, date(2025, 6, 16)).unwrap(),
            (date(2025, 6, 16), date(2025, 6, 22))
        );
        assert_eq!(
            period_range(Period::Weekly, date(2025, 6, 22)).unwrap(),
            (date(2025, 6, 16), date(2025, 6, 22))
        );
    }

    #[test]
    fn test_weekly_range_across_month_boundary() {
        // 2025-07-01 是週二，該週從 6/30 開始
        let range = period_range(Period::Weekly, date(2025, 7, 1)).unwrap();
        assert_eq!(range, (date(2025, 6, 30), date(2025, 7, 6)));
    }

    #[test]
    fn test_monthly_range_handles_leap_february() {
        assert_eq!(
            period_range(Period::Monthly, date(2024, 2, 15)).unwrap(),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            period_range(Period::Monthly, date(2025, 2, 15)).unwrap(),
            (date(2025, 2, 1), date(2025, 2, 28))
        );
        assert_eq!(
            period_range(Period::Monthly, date(2025, 12, 5)).unwrap(),
            (date(2025, 12, 1), date(2025, 12, 31))
        );
    }

    #[test]
    fn test_yearly_range() {
        assert_eq!(
            period_range(Period::Yearly, date(2025, 8, 30)).unwrap(),
            (date(2025, 1, 1), date(2025, 12, 31))
        );
    }

    #[test]
    fn test_prompt_names_sign_and_period() {
        let prompt = build_prompt(Sign::Aries, Period::Daily, date(2025, 6, 18));
        assert!(prompt.contains("牡羊座(Aries)今日"));
        assert!(prompt.contains("luckyColor"));
        assert!(prompt.contains("乾淨的 JSON"));
        // 今日不附日期範圍
        assert!(!prompt.contains("～"));
    }

    #[test]
    fn test_prompt_embeds_weekly_range() {
        let prompt = build_prompt(Sign::Libra, Period::Weekly, date(2025, 6, 18));
        assert!(prompt.contains("天秤座(Libra)本週（2025-06-16 ～ 2025-06-22）"));
    }

    #[test]
    fn test_prompt_embeds_yearly_range() {
        let prompt = build_prompt(Sign::Pisces, Period::Yearly, date(2025, 6, 18));
        assert!(prompt.contains("今年（2025-01-01 ～ 2025-12-31）"));
    }
}
