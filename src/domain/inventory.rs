// ==========================================
// ERP运营驾驶舱 - 库存生产实体
// ==========================================
// 职责: 无订单背景的库存补充生产(재고 생산)的只读输入模型
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::StockProductionStatus;

// ==========================================
// StockProduction - 库存生产请求
// ==========================================
// product_id 直接挂在记录上 (扁平连接键)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockProduction {
    pub id: i64,

    /// 库存生产编号 (SP-YYYYMMDD-XXX)
    #[serde(default)]
    pub production_no: Option<String>,

    #[serde(default)]
    pub product_id: Option<i64>,

    #[serde(default)]
    pub quantity: Option<i64>,

    /// 状态,缺失时取上游建单默认值 PENDING
    #[serde(default)]
    pub status: StockProductionStatus,

    #[serde(default)]
    pub request_date: Option<String>,

    #[serde(default)]
    pub target_date: Option<String>,
}
