// ==========================================
// ERP运营驾驶舱 - 采购/外协实体
// ==========================================
// 职责: 采购订单(발주)、外协订单(외주 발주)与待采项的只读输入模型
// 说明: 采购与外协是两个结构相同的并行集合,引擎不合并它们
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// PurchaseOrder - 采购订单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,

    #[serde(default)]
    pub order_no: Option<String>,

    /// 原始状态码,引擎不在采购状态上做指标,原样携带
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub order_date: Option<String>,

    #[serde(default)]
    pub delivery_date: Option<String>,

    #[serde(default)]
    pub total_amount: Option<i64>,

    #[serde(default)]
    pub items: Vec<ProcurementItem>,
}

// ==========================================
// OutsourcingOrder - 外协订单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutsourcingOrder {
    pub id: i64,

    #[serde(default)]
    pub order_no: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub order_date: Option<String>,

    #[serde(default)]
    pub delivery_date: Option<String>,

    #[serde(default)]
    pub total_amount: Option<i64>,

    #[serde(default)]
    pub items: Vec<ProcurementItem>,
}

// ==========================================
// ProcurementItem - 采购/外协明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementItem {
    #[serde(default)]
    pub product_id: Option<i64>,

    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub unit_price: Option<i64>,
}

// ==========================================
// PendingProcurementItem - 待采项 (扁平结构)
// ==========================================
// 由生产计划派生、尚未开采购/外协单的工序项,
// product_id 直接挂在记录上
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingProcurementItem {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub product_id: Option<i64>,

    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub process_name: Option<String>,

    #[serde(default)]
    pub partner_name: Option<String>,
}
