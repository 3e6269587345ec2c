// ==========================================
// ERP运营驾驶舱 - 日期工具
// ==========================================
// 职责: ISO 日期字符串的解析与月份键运算
// 约束: 源数据日期是定宽 ISO 字符串 (YYYY-MM-DD, 可能带时间部分);
//       解析失败的值由调用方跳过,不中断聚合
// ==========================================

use chrono::{Datelike, NaiveDate};

/// 解析 ISO 日期字符串的日期部分
///
/// 接受 "2024-05-10" 或 "2024-05-10T09:30:00" 形态;
/// 无法解析时返回 None,由日期类阶段跳过该记录
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// 月份键 "YYYY-MM"
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// 指定日期所在月的月份键
pub fn month_key_of(date: NaiveDate) -> String {
    month_key(date.year(), date.month())
}

/// 从指定月份往前回退 months_back 个月 (跨年回卷)
///
/// 返回 (年, 月)
pub fn shift_months_back(year: i32, month: u32, months_back: u32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 - months_back as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

/// 日期字符串是否落在指定月份键内 (前缀匹配)
pub fn in_month(raw_date: Option<&str>, key: &str) -> bool {
    raw_date.map_or(false, |d| d.starts_with(key))
}
