// ==========================================
// ERP运营驾驶舱 - 月度走势引擎
// ==========================================
// 职责: 生成以基准月收尾的滚动月度销售额序列
// 约束: 输出点数恒等于窗口长度,无数据的月份补零点;
//       月份归属按日期字符串前缀匹配,解析不出月份的记录不进任何点
// ==========================================

use chrono::{Datelike, NaiveDate};

use crate::domain::sales::SalesOrder;
use crate::engine::calendar::{in_month, month_key, shift_months_back};
use crate::engine::view::MonthlyPoint;

// ==========================================
// TimeSeriesBuilder - 走势构建
// ==========================================
pub struct TimeSeriesBuilder;

impl TimeSeriesBuilder {
    /// 生成滚动月度序列 (最旧在前,末点为基准月)
    ///
    /// # 参数
    /// - orders: 过滤后订单
    /// - today: 基准日期
    /// - months: 窗口长度 (默认配置为 6)
    pub fn build(orders: &[&SalesOrder], today: NaiveDate, months: u32) -> Vec<MonthlyPoint> {
        let mut points = Vec::with_capacity(months as usize);

        for offset in (0..months).rev() {
            let (year, month) = shift_months_back(today.year(), today.month(), offset);
            let key = month_key(year, month);
            // 月序号显示标签,沿用产品的韩文显示惯例
            let label = format!("{}월", month);

            let mut revenue: i64 = 0;
            let mut count: usize = 0;
            for order in orders {
                if in_month(order.order_date.as_deref(), &key) {
                    revenue += order.amount();
                    count += 1;
                }
            }

            points.push(MonthlyPoint {
                month_key: key,
                label,
                revenue,
                count,
            });
        }

        points
    }
}
