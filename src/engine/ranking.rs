// ==========================================
// ERP运营驾驶舱 - 客户排名引擎
// ==========================================
// 职责: 按客户聚合销售额并取前 N 名
// 约束: 无客户的订单归入固定"未指定"标签而不是丢弃;
//       同额并列保持首次出现顺序 (稳定排序)
// ==========================================

use crate::domain::sales::SalesOrder;
use crate::engine::view::CustomerRevenue;

/// 无法解析客户时的固定归并标签
pub const UNKNOWN_PARTNER_LABEL: &str = "거래처 미지정";

// ==========================================
// RankingBuilder - 排名构建
// ==========================================
pub struct RankingBuilder;

impl RankingBuilder {
    /// 客户销售额排名 (降序,最多 limit 名)
    pub fn top_customers(orders: &[&SalesOrder], limit: usize) -> Vec<CustomerRevenue> {
        let mut totals: Vec<CustomerRevenue> = Vec::new();

        for order in orders {
            let name = order.partner_name().unwrap_or(UNKNOWN_PARTNER_LABEL);
            match totals.iter_mut().find(|c| c.name == name) {
                Some(entry) => entry.revenue += order.amount(),
                None => totals.push(CustomerRevenue {
                    name: name.to_string(),
                    revenue: order.amount(),
                }),
            }
        }

        // sort_by 是稳定排序: 同额客户保持累计时的首次出现顺序
        totals.sort_by(|a, b| b.revenue.cmp(&a.revenue));
        totals.truncate(limit);
        totals
    }
}
