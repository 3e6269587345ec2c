// ==========================================
// DashboardApi 集成测试
// ==========================================
// 测试目标: 验证 JSON 快照入口的边界行为
// 覆盖范围: 缺失集合 / 调用形态错误 / 脏数据消化 / 参数覆写
// ==========================================

use chrono::NaiveDate;
use erp_ops_analytics::domain::snapshot::GroupSelection;
use erp_ops_analytics::{ApiError, DashboardApi, EngineConfig};
use serde_json::json;

// ==========================================
// 测试辅助函数
// ==========================================

/// 基准日期: 2024-05-31
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
}

/// 取数层产出形态的 JSON 快照
fn fetched_document() -> serde_json::Value {
    json!({
        "orders": [
            {
                "id": 1,
                "order_no": "SO-20240510-001",
                "status": "CONFIRMED",
                "order_date": "2024-05-10",
                "delivery_date": "2024-06-03",
                "total_amount": 1_000_000,
                "partner": {"id": 3, "name": "대한정밀"},
                "items": [{"product_id": 1}]
            },
            {
                "id": 2,
                "status": "DELIVERY_COMPLETED",
                "order_date": "2024-04-02",
                "total_amount": 500_000,
                "partner": {"id": 4, "name": "가공산업"},
                "items": [{"product_id": 2}]
            }
        ],
        "plans": [
            {"id": 1, "status": "IN_PROGRESS", "plan_items": [{"product_id": 1}]}
        ],
        "defects": [
            {"id": 1, "status": "OCCURRED", "defect_date": "2024-05-20T10:00:00",
             "plan_item": {"product_id": 1}}
        ],
        "staff": [
            {"id": 1, "name": "김현수", "is_active": true},
            {"id": 2, "name": "박지훈", "is_active": false}
        ],
        "products": [
            {"id": 1, "group_id": 11},
            {"id": 2, "group_id": 21}
        ],
        "product_groups": [
            {"id": 10, "type": "MAJOR"},
            {"id": 11, "type": "MINOR", "parent_id": 10},
            {"id": 20, "type": "MAJOR"},
            {"id": 21, "type": "MINOR", "parent_id": 20}
        ]
    })
}

// ==========================================
// 场景 1: 正常 JSON 快照
// ==========================================

#[test]
fn test_overview_from_fetched_document() {
    let api = DashboardApi::new();
    let overview = api
        .overview_from_json(fetched_document(), &GroupSelection::none(), today())
        .unwrap();

    assert_eq!(overview.total_orders, 2);
    assert_eq!(overview.month_orders, 1);
    assert_eq!(overview.total_revenue, 1_500_000);
    assert_eq!(overview.active_plans, 1);
    assert_eq!(overview.unresolved_defects, 1);
    assert_eq!(overview.active_staff, 1);
    assert_eq!(overview.top_customers[0].name, "대한정밀");
    // 纳期 2024-06-03 距基准日 +3 天 → 紧急列表
    assert_eq!(overview.urgent_deliveries.len(), 1);
    assert_eq!(overview.urgent_deliveries[0].days_remaining, 3);
}

#[test]
fn test_group_filter_applies_through_json_path() {
    let api = DashboardApi::new();
    let overview = api
        .overview_from_json(fetched_document(), &GroupSelection::major(20), today())
        .unwrap();

    // 大组 20 → 小组 21 → 产品 2 → 仅 O2
    assert_eq!(overview.total_orders, 1);
    assert_eq!(overview.total_revenue, 500_000);
    // 组织级口径不变
    assert_eq!(overview.total_products, 2);
}

// ==========================================
// 场景 2: 缺失集合与空文档
// ==========================================

#[test]
fn test_missing_collections_are_empty_not_errors() {
    let api = DashboardApi::new();
    let overview = api
        .overview_from_json(
            json!({"orders": [{"id": 1, "total_amount": 100}]}),
            &GroupSelection::none(),
            today(),
        )
        .unwrap();

    assert_eq!(overview.total_orders, 1);
    assert_eq!(overview.total_plans, 0);
    assert_eq!(overview.total_defects, 0);
    assert_eq!(overview.monthly_revenue.len(), 6);
}

#[test]
fn test_empty_document_yields_zero_overview() {
    let api = DashboardApi::new();
    let overview = api
        .overview_from_json(json!({}), &GroupSelection::none(), today())
        .unwrap();

    assert_eq!(overview.total_orders, 0);
    assert_eq!(overview.delivery_rate, 0);
    assert!(overview.top_customers.is_empty());
    assert!(overview.urgent_deliveries.is_empty());
}

// ==========================================
// 场景 3: 调用形态错误
// ==========================================

#[test]
fn test_non_array_collection_is_invalid_input() {
    let api = DashboardApi::new();
    let result = api.overview_from_json(
        json!({"orders": {"id": 1}}),
        &GroupSelection::none(),
        today(),
    );
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[test]
fn test_non_object_document_is_invalid_input() {
    let api = DashboardApi::new();
    let result =
        api.overview_from_json(json!("전체 데이터"), &GroupSelection::none(), today());
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

// ==========================================
// 场景 4: 脏数据消化 (不报错)
// ==========================================

#[test]
fn test_dirty_records_never_raise() {
    let api = DashboardApi::new();
    let overview = api
        .overview_from_json(
            json!({
                "orders": [
                    {"id": 1, "status": "ON_HOLD", "order_date": "미정",
                     "delivery_date": "곧", "total_amount": null},
                    {"id": 2}
                ],
                "defects": [{"id": 1, "status": "REOPENED"}]
            }),
            &GroupSelection::none(),
            today(),
        )
        .unwrap();

    assert_eq!(overview.total_orders, 2);
    assert_eq!(overview.total_revenue, 0);
    // 未知状态码自成分布桶
    assert!(overview
        .order_status_data
        .iter()
        .any(|b| b.status == "ON_HOLD"));
    // 缺状态的订单落入上游默认值 PENDING
    assert!(overview
        .order_status_data
        .iter()
        .any(|b| b.status == "PENDING"));
    // 烂日期不进日期类输出
    assert!(overview.urgent_deliveries.is_empty());
    // 未知不良状态仍算未处理
    assert_eq!(overview.unresolved_defects, 1);
}

// ==========================================
// 场景 5: 参数覆写
// ==========================================

#[test]
fn test_custom_limits_respected() {
    let config = EngineConfig {
        top_customers_limit: 1,
        recent_orders_limit: 1,
        ..Default::default()
    };
    let api = DashboardApi::with_config(config);
    let overview = api
        .overview_from_json(fetched_document(), &GroupSelection::none(), today())
        .unwrap();

    assert_eq!(overview.top_customers.len(), 1);
    assert_eq!(overview.recent_orders.len(), 1);
    assert_eq!(
        overview.recent_orders[0].order_date.as_deref(),
        Some("2024-05-10")
    );
}

// ==========================================
// 场景 6: 输出序列化契约
// ==========================================

#[test]
fn test_overview_serializes_for_frontend() {
    let api = DashboardApi::new();
    let overview = api
        .overview_from_json(fetched_document(), &GroupSelection::none(), today())
        .unwrap();

    let value = serde_json::to_value(&overview).unwrap();
    assert!(value["totalOrders"].is_number());
    assert!(value["monthlyRevenue"].is_array());
    assert_eq!(value["monthlyRevenue"].as_array().unwrap().len(), 6);
    assert!(value["urgentDeliveries"].is_array());
}
