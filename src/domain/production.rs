// ==========================================
// ERP运营驾驶舱 - 生产实体
// ==========================================
// 职责: 生产计划(생산 계획)及其工序明细的只读输入模型
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::PlanStatus;

// ==========================================
// ProductionPlan - 生产计划 (Header)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    pub id: i64,

    /// 计划状态,缺失时取上游建单默认值 PLANNED
    #[serde(default)]
    pub status: PlanStatus,

    /// 计划建立日期
    #[serde(default)]
    pub plan_date: Option<String>,

    /// 来源销售订单
    #[serde(default)]
    pub order_id: Option<i64>,

    /// 工序明细,产品组过滤按其中任一 product_id 命中即保留
    #[serde(default)]
    pub plan_items: Vec<PlanItem>,
}

// ==========================================
// PlanItem - 计划工序明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    #[serde(default)]
    pub product_id: Option<i64>,

    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub process_name: Option<String>,
}
