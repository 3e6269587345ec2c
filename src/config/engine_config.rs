// ==========================================
// ERP运营驾驶舱 - 引擎参数
// ==========================================
// 职责: 聚合引擎的窗口与上限参数
// 说明: 默认值即产品口径; 宿主可整体覆写,引擎内不读环境
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// EngineConfig - 聚合引擎参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 紧急窗口: 最多回看的逾期天数
    #[serde(default = "default_overdue_window_days")]
    pub overdue_window_days: i64,

    /// 紧急窗口: 最多前瞻的到期天数
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: i64,

    /// 客户排名输出上限
    #[serde(default = "default_top_customers_limit")]
    pub top_customers_limit: usize,

    /// 最近订单输出上限
    #[serde(default = "default_recent_orders_limit")]
    pub recent_orders_limit: usize,

    /// 最近不良输出上限
    #[serde(default = "default_recent_defects_limit")]
    pub recent_defects_limit: usize,

    /// 紧急纳期输出上限
    #[serde(default = "default_urgent_deliveries_limit")]
    pub urgent_deliveries_limit: usize,

    /// 月度走势窗口长度 (月)
    #[serde(default = "default_revenue_window_months")]
    pub revenue_window_months: u32,
}

fn default_overdue_window_days() -> i64 {
    30
}

fn default_upcoming_window_days() -> i64 {
    7
}

fn default_top_customers_limit() -> usize {
    5
}

fn default_recent_orders_limit() -> usize {
    6
}

fn default_recent_defects_limit() -> usize {
    5
}

fn default_urgent_deliveries_limit() -> usize {
    5
}

fn default_revenue_window_months() -> u32 {
    6
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            overdue_window_days: default_overdue_window_days(),
            upcoming_window_days: default_upcoming_window_days(),
            top_customers_limit: default_top_customers_limit(),
            recent_orders_limit: default_recent_orders_limit(),
            recent_defects_limit: default_recent_defects_limit(),
            urgent_deliveries_limit: default_urgent_deliveries_limit(),
            revenue_window_months: default_revenue_window_months(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_product_baseline() {
        let config = EngineConfig::default();
        assert_eq!(config.overdue_window_days, 30);
        assert_eq!(config.upcoming_window_days, 7);
        assert_eq!(config.top_customers_limit, 5);
        assert_eq!(config.recent_orders_limit, 6);
        assert_eq!(config.recent_defects_limit, 5);
        assert_eq!(config.urgent_deliveries_limit, 5);
        assert_eq!(config.revenue_window_months, 6);
    }

    #[test]
    fn test_partial_override_from_json() {
        // 缺失字段回落到默认值
        let config: EngineConfig =
            serde_json::from_str(r#"{"top_customers_limit": 10}"#).unwrap();
        assert_eq!(config.top_customers_limit, 10);
        assert_eq!(config.revenue_window_months, 6);
    }
}
