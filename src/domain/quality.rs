// ==========================================
// ERP运营驾驶舱 - 品质不良实体
// ==========================================
// 职责: 品质不良记录(품질 불량)的只读输入模型
// 说明: 产品连接可能来自计划工序(plan_item)或来源订单(order)两条路径,
//       也可能两者都没有(孤儿不良记录)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::DefectStatus;

// ==========================================
// DefectRecord - 品质不良记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectRecord {
    pub id: i64,

    /// 状态,缺失时取上游建单默认值 OCCURRED
    #[serde(default)]
    pub status: DefectStatus,

    /// 发生日期 (ISO, 可能带时间部分)
    #[serde(default)]
    pub defect_date: Option<String>,

    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub defect_type: Option<String>,

    /// 计划工序连接 (一级嵌套的 product_id)
    #[serde(default)]
    pub plan_item: Option<DefectPlanItemRef>,

    /// 来源订单连接 (两级嵌套: order.items[].product_id)
    #[serde(default)]
    pub order: Option<DefectOrderRef>,
}

impl DefectRecord {
    /// 是否完全没有产品连接 (孤儿记录)
    pub fn is_unlinked(&self) -> bool {
        self.plan_item.is_none() && self.order.is_none()
    }
}

// ==========================================
// DefectPlanItemRef - 计划工序连接
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectPlanItemRef {
    #[serde(default)]
    pub product_id: Option<i64>,
}

// ==========================================
// DefectOrderRef - 来源订单连接
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectOrderRef {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub items: Vec<DefectOrderItemRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectOrderItemRef {
    #[serde(default)]
    pub product_id: Option<i64>,
}
