// ==========================================
// ERP运营驾驶舱 - 指标聚合引擎
// ==========================================
// 职责: 在过滤后集合上做标量归约
// 约束: 全部指标针对同一个基准日期计算,一次调用内不得重取时钟;
//       数值字段缺失按 0 计,绝不产生 NaN 或中断
// ==========================================

use chrono::NaiveDate;

use crate::domain::types::{DefectStatus, OrderStatus, PlanStatus};
use crate::engine::calendar::{in_month, month_key_of};
use crate::engine::scope_filter::ScopedCollections;

// ==========================================
// KpiSet - 标量指标集
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpiSet {
    pub total_orders: usize,
    pub month_orders: usize,
    pub pending_orders: usize,
    pub delivered_orders: usize,
    pub production_completed_orders: usize,
    pub total_revenue: i64,
    pub month_revenue: i64,
    pub delivery_rate: i64,
    pub total_plans: usize,
    pub active_plans: usize,
    pub completed_plans: usize,
    pub total_purchase_orders: usize,
    pub total_outsourcing_orders: usize,
    pub pending_purchase_items: usize,
    pub pending_outsourcing_items: usize,
    pub total_stock_productions: usize,
    pub active_stock_productions: usize,
    pub total_defects: usize,
    pub unresolved_defects: usize,
    pub total_partners: usize,
    pub total_products: usize,
    pub active_staff: usize,
}

// ==========================================
// KpiAggregator - 指标聚合
// ==========================================
pub struct KpiAggregator;

impl KpiAggregator {
    /// 计算全部标量指标
    ///
    /// # 参数
    /// - scoped: 过滤后的集合视图
    /// - today: 基准日期 (决定"本月"口径)
    pub fn aggregate(scoped: &ScopedCollections<'_>, today: NaiveDate) -> KpiSet {
        let this_month = month_key_of(today);

        // 订单类
        let total_orders = scoped.orders.len();
        let month_orders = scoped
            .orders
            .iter()
            .filter(|o| in_month(o.order_date.as_deref(), &this_month))
            .count();
        let pending_orders = scoped
            .orders
            .iter()
            .filter(|o| matches!(o.status, OrderStatus::Pending | OrderStatus::Confirmed))
            .count();
        let delivered_orders = scoped
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::DeliveryCompleted)
            .count();
        let production_completed_orders = scoped
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::ProductionCompleted)
            .count();
        let total_revenue: i64 = scoped.orders.iter().map(|o| o.amount()).sum();
        let month_revenue: i64 = scoped
            .orders
            .iter()
            .filter(|o| in_month(o.order_date.as_deref(), &this_month))
            .map(|o| o.amount())
            .sum();

        // 生产/采购类
        let active_plans = scoped
            .plans
            .iter()
            .filter(|p| p.status.is_active())
            .count();
        let completed_plans = scoped
            .plans
            .iter()
            .filter(|p| p.status == PlanStatus::Completed)
            .count();
        let active_stock_productions = scoped
            .stock_productions
            .iter()
            .filter(|sp| sp.status.is_active())
            .count();

        // 品质类
        let unresolved_defects = scoped
            .defects
            .iter()
            .filter(|d| d.status != DefectStatus::Resolved)
            .count();

        KpiSet {
            total_orders,
            month_orders,
            pending_orders,
            delivered_orders,
            production_completed_orders,
            total_revenue,
            month_revenue,
            delivery_rate: pct(delivered_orders as i64, total_orders as i64),
            total_plans: scoped.plans.len(),
            active_plans,
            completed_plans,
            total_purchase_orders: scoped.purchase_orders.len(),
            total_outsourcing_orders: scoped.outsourcing_orders.len(),
            pending_purchase_items: scoped.pending_purchase_items.len(),
            pending_outsourcing_items: scoped.pending_outsourcing_items.len(),
            total_stock_productions: scoped.stock_productions.len(),
            active_stock_productions,
            total_defects: scoped.defects.len(),
            unresolved_defects,
            // 组织级口径,不随产品组过滤变化
            total_partners: scoped.partners.len(),
            total_products: scoped.products.len(),
            active_staff: scoped.staff.iter().filter(|s| s.is_active).count(),
        }
    }
}

/// 安全百分比: 分母为 0 时返回 0,否则四舍五入到整数
pub fn pct(numerator: i64, denominator: i64) -> i64 {
    if denominator == 0 {
        return 0;
    }
    (100.0 * numerator as f64 / denominator as f64).round() as i64
}
