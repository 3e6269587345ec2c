// ==========================================
// ERP运营驾驶舱 - 聚合引擎层
// ==========================================
// 职责: 把输入快照 + 产品组选择 + 基准日期派生成驾驶舱视图
// 约束: 纯函数,无 I/O,无共享可变状态; 相同输入必得深度相等的输出;
//       基准日期在调用入口取一次,贯穿全部阶段
// ==========================================

pub mod calendar;
pub mod distribution;
pub mod kpi;
pub mod ranking;
pub mod recency;
pub mod scope;
pub mod scope_filter;
pub mod time_series;
pub mod urgency;
pub mod view;

// 重导出核心引擎
pub use distribution::DistributionBuilder;
pub use kpi::{pct, KpiAggregator, KpiSet};
pub use ranking::{RankingBuilder, UNKNOWN_PARTNER_LABEL};
pub use recency::RecencySelector;
pub use scope::{ProductScope, ScopeResolver};
pub use scope_filter::{LinkRule, ScopeFilter, ScopedCollections, COLLECTION_RULES};
pub use time_series::TimeSeriesBuilder;
pub use urgency::UrgencyDetector;
pub use view::{
    CustomerRevenue, DashboardOverview, MonthlyPoint, RecentDefect, RecentOrder, StatusBucket,
    UrgentDelivery,
};

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::config::EngineConfig;
use crate::domain::snapshot::{DashboardSnapshot, GroupSelection};

// ==========================================
// DashboardEngine - 聚合流水线
// ==========================================
// 阶段: 范围解析 → 集合过滤 → 指标/分布/走势/排名/近期/紧急
// 过滤之后的各阶段互不依赖,顺序无关
pub struct DashboardEngine {
    config: EngineConfig,
}

impl Default for DashboardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardEngine {
    /// 以产品默认口径创建引擎
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// 以自定义参数创建引擎
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// 当前参数
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 派生驾驶舱视图
    ///
    /// # 参数
    /// - snapshot: 调用方一次取齐的源集合快照
    /// - selection: 产品组选择
    /// - today: 基准日期,贯穿所有阶段
    #[instrument(skip(self, snapshot), fields(
        orders = snapshot.orders.len(),
        plans = snapshot.plans.len(),
        defects = snapshot.defects.len(),
    ))]
    pub fn build(
        &self,
        snapshot: &DashboardSnapshot,
        selection: &GroupSelection,
        today: NaiveDate,
    ) -> DashboardOverview {
        // 阶段 1: 组选择 → 产品范围
        let scope = ScopeResolver::resolve(&snapshot.product_groups, &snapshot.products, selection);

        // 阶段 2: 范围 → 过滤后视图
        let scoped = ScopeFilter::apply(snapshot, &scope);
        debug!(
            unfiltered = scope.is_unfiltered(),
            orders_in_scope = scoped.orders.len(),
            defects_in_scope = scoped.defects.len(),
            "scope resolved"
        );

        // 阶段 3: 标量指标
        let kpi = KpiAggregator::aggregate(&scoped, today);

        // 阶段 4: 状态分布
        let order_status_data = DistributionBuilder::build(&scoped.orders, |o| o.status.code());
        let plan_status_data = DistributionBuilder::build(&scoped.plans, |p| p.status.code());
        let defect_status_data = DistributionBuilder::build(&scoped.defects, |d| d.status.code());

        // 阶段 5: 月度走势
        let monthly_revenue =
            TimeSeriesBuilder::build(&scoped.orders, today, self.config.revenue_window_months);

        // 阶段 6: 客户排名
        let top_customers =
            RankingBuilder::top_customers(&scoped.orders, self.config.top_customers_limit);

        // 阶段 7: 近期列表与紧急纳期
        let recent_orders = RecencySelector::newest(
            &scoped.orders,
            |o| o.order_date.as_deref(),
            self.config.recent_orders_limit,
        )
        .into_iter()
        .map(|o| RecentOrder {
            id: o.id,
            order_no: o.order_no.clone(),
            partner_name: o.partner_name().map(str::to_string),
            order_date: o.order_date.clone(),
            total_amount: o.amount(),
            status: o.status.code().to_string(),
        })
        .collect();

        let recent_defects = RecencySelector::newest(
            &scoped.defects,
            |d| d.defect_date.as_deref(),
            self.config.recent_defects_limit,
        )
        .into_iter()
        .map(|d| RecentDefect {
            id: d.id,
            defect_date: d.defect_date.clone(),
            defect_type: d.defect_type.clone(),
            quantity: d.quantity.unwrap_or(0),
            status: d.status.code().to_string(),
        })
        .collect();

        let urgent_deliveries = UrgencyDetector::detect(
            &scoped.orders,
            today,
            self.config.overdue_window_days,
            self.config.upcoming_window_days,
            self.config.urgent_deliveries_limit,
        );

        DashboardOverview {
            total_orders: kpi.total_orders,
            month_orders: kpi.month_orders,
            pending_orders: kpi.pending_orders,
            delivered_orders: kpi.delivered_orders,
            production_completed_orders: kpi.production_completed_orders,
            total_revenue: kpi.total_revenue,
            month_revenue: kpi.month_revenue,
            delivery_rate: kpi.delivery_rate,
            total_plans: kpi.total_plans,
            active_plans: kpi.active_plans,
            completed_plans: kpi.completed_plans,
            total_purchase_orders: kpi.total_purchase_orders,
            total_outsourcing_orders: kpi.total_outsourcing_orders,
            pending_purchase_items: kpi.pending_purchase_items,
            pending_outsourcing_items: kpi.pending_outsourcing_items,
            total_stock_productions: kpi.total_stock_productions,
            active_stock_productions: kpi.active_stock_productions,
            total_defects: kpi.total_defects,
            unresolved_defects: kpi.unresolved_defects,
            total_partners: kpi.total_partners,
            total_products: kpi.total_products,
            active_staff: kpi.active_staff,
            order_status_data,
            plan_status_data,
            defect_status_data,
            monthly_revenue,
            top_customers,
            recent_orders,
            recent_defects,
            urgent_deliveries,
        }
    }
}
