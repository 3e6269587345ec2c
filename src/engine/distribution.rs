// ==========================================
// ERP运营驾驶舱 - 状态分布引擎
// ==========================================
// 职责: 按状态码生成直方图
// 约束: 每条记录恰好进一个桶 (桶计数之和 == 集合长度);
//       桶顺序 = 状态码首次出现顺序; 未知状态码自成一桶
// ==========================================

use crate::engine::view::StatusBucket;

// ==========================================
// DistributionBuilder - 分布构建
// ==========================================
pub struct DistributionBuilder;

impl DistributionBuilder {
    /// 对任意记录集合按状态码计数
    ///
    /// # 参数
    /// - records: 过滤后的记录视图
    /// - status_of: 记录 → 原始状态码
    pub fn build<T>(records: &[&T], status_of: impl Fn(&T) -> &str) -> Vec<StatusBucket> {
        let mut buckets: Vec<StatusBucket> = Vec::new();
        for record in records {
            let code = status_of(record);
            match buckets.iter_mut().find(|b| b.status == code) {
                Some(bucket) => bucket.count += 1,
                None => buckets.push(StatusBucket {
                    status: code.to_string(),
                    count: 1,
                }),
            }
        }
        buckets
    }
}
