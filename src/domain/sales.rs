// ==========================================
// ERP运营驾驶舱 - 销售实体
// ==========================================
// 职责: 销售订单(수주)及其明细的只读输入模型
// 约束: 实体归上游CRUD层所有,引擎只读不写
// ==========================================
// 日期字段保持抓取时的原始 ISO 字符串: 解析失败的记录
// 仍需计入非日期类指标,类型化日期会在反序列化时就丢弃它们
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::OrderStatus;

// ==========================================
// SalesOrder - 销售订单 (Header)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: i64,

    /// 订单编号 (上游自动生成)
    #[serde(default)]
    pub order_no: Option<String>,

    /// 订单状态,缺失时取上游建单默认值 PENDING
    #[serde(default)]
    pub status: OrderStatus,

    /// 下单日期 (ISO YYYY-MM-DD)
    #[serde(default)]
    pub order_date: Option<String>,

    /// 纳期 (ISO YYYY-MM-DD)
    #[serde(default)]
    pub delivery_date: Option<String>,

    /// 实际纳品日期
    #[serde(default)]
    pub actual_delivery_date: Option<String>,

    /// 订单总额 (整数货币单位),缺失视为 0
    #[serde(default)]
    pub total_amount: Option<i64>,

    /// 客户引用 (冗余展开,含名称)
    #[serde(default)]
    pub partner: Option<PartnerRef>,

    /// 订单明细
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl SalesOrder {
    /// 订单总额,缺失按 0 计
    pub fn amount(&self) -> i64 {
        self.total_amount.unwrap_or(0)
    }

    /// 客户显示名称
    pub fn partner_name(&self) -> Option<&str> {
        self.partner.as_ref().and_then(|p| p.name.as_deref())
    }
}

// ==========================================
// OrderItem - 订单明细 (Detail)
// ==========================================
// product_id 是产品组过滤的连接键
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: Option<i64>,

    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub unit_price: Option<i64>,
}

// ==========================================
// PartnerRef - 客户冗余引用
// ==========================================
// 排名阶段按名称聚合,无需回表 join
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRef {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserialize_minimal() {
        // 除 id 外全部字段可缺失
        let order: SalesOrder = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(order.id, 1);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.amount(), 0);
        assert!(order.items.is_empty());
        assert!(order.partner_name().is_none());
    }

    #[test]
    fn test_order_deserialize_full() {
        let order: SalesOrder = serde_json::from_str(
            r#"{
                "id": 7,
                "order_no": "SO-20240510-001",
                "status": "CONFIRMED",
                "order_date": "2024-05-10",
                "delivery_date": "2024-05-25",
                "total_amount": 1000000,
                "partner": {"id": 3, "name": "대한정밀"},
                "items": [{"product_id": 1, "quantity": 10, "unit_price": 100000}]
            }"#,
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.amount(), 1_000_000);
        assert_eq!(order.partner_name(), Some("대한정밀"));
        assert_eq!(order.items[0].product_id, Some(1));
    }

    #[test]
    fn test_null_amount_counts_as_zero() {
        let order: SalesOrder =
            serde_json::from_str(r#"{"id": 2, "total_amount": null}"#).unwrap();
        assert_eq!(order.amount(), 0);
    }
}
