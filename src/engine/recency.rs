// ==========================================
// ERP运营驾驶舱 - 近期记录选择引擎
// ==========================================
// 职责: 取日期最新的前 N 条记录
// 约束: 定宽 ISO 日期串直接按字典序比较 (这是对数据格式的
//       书面假设,不是通用日期比较器); 缺日期的记录排在最后
// ==========================================

use std::cmp::Ordering;

// ==========================================
// RecencySelector - 近期选择
// ==========================================
pub struct RecencySelector;

impl RecencySelector {
    /// 按日期降序取前 limit 条
    ///
    /// # 参数
    /// - records: 过滤后的记录视图
    /// - date_of: 记录 → 原始 ISO 日期串 (可缺失)
    /// - limit: 输出上限
    pub fn newest<'a, T: ?Sized>(
        records: &[&'a T],
        date_of: impl Fn(&T) -> Option<&str>,
        limit: usize,
    ) -> Vec<&'a T> {
        let mut sorted: Vec<&'a T> = records.to_vec();
        sorted.sort_by(|a, b| match (date_of(a), date_of(b)) {
            (Some(da), Some(db)) => db.cmp(da), // 字典序降序
            (Some(_), None) => Ordering::Less,  // 有日期的在前
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        sorted.truncate(limit);
        sorted
    }
}
