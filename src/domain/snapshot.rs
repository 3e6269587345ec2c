// ==========================================
// ERP运营驾驶舱 - 输入快照
// ==========================================
// 职责: 承载一次聚合调用的全部源集合
// 约束: 快照由调用方一次性取齐后传入,引擎内不再取数,
//       同一次调用内所有派生字段都来自同一份快照
// 说明: 缺失的集合按空数组处理,不报错
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::basics::{Partner, StaffMember};
use crate::domain::inventory::StockProduction;
use crate::domain::product::{Product, ProductGroup};
use crate::domain::production::ProductionPlan;
use crate::domain::purchasing::{OutsourcingOrder, PendingProcurementItem, PurchaseOrder};
use crate::domain::quality::DefectRecord;
use crate::domain::sales::SalesOrder;

// ==========================================
// DashboardSnapshot - 驾驶舱输入快照
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// 销售订单
    #[serde(default)]
    pub orders: Vec<SalesOrder>,

    /// 生产计划
    #[serde(default)]
    pub plans: Vec<ProductionPlan>,

    /// 采购订单
    #[serde(default)]
    pub purchase_orders: Vec<PurchaseOrder>,

    /// 外协订单
    #[serde(default)]
    pub outsourcing_orders: Vec<OutsourcingOrder>,

    /// 待采项 (采购)
    #[serde(default)]
    pub pending_purchase_items: Vec<PendingProcurementItem>,

    /// 待采项 (外协)
    #[serde(default)]
    pub pending_outsourcing_items: Vec<PendingProcurementItem>,

    /// 客户主数据 (组织级,不过滤)
    #[serde(default)]
    pub partners: Vec<Partner>,

    /// 产品主数据 (组织级,不过滤; 组解析阶段读取其 group_id)
    #[serde(default)]
    pub products: Vec<Product>,

    /// 职员主数据 (组织级,不过滤)
    #[serde(default)]
    pub staff: Vec<StaffMember>,

    /// 库存生产
    #[serde(default)]
    pub stock_productions: Vec<StockProduction>,

    /// 品质不良记录
    #[serde(default)]
    pub defects: Vec<DefectRecord>,

    /// 产品组分类 (组解析阶段的输入)
    #[serde(default)]
    pub product_groups: Vec<ProductGroup>,
}

// ==========================================
// GroupSelection - 产品组筛选
// ==========================================
// 小组选择优先于大组选择; 两者皆空 = 不过滤
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSelection {
    #[serde(default)]
    pub major_id: Option<i64>,

    #[serde(default)]
    pub minor_id: Option<i64>,
}

impl GroupSelection {
    /// 无筛选
    pub fn none() -> Self {
        Self::default()
    }

    /// 仅选大组
    pub fn major(id: i64) -> Self {
        Self {
            major_id: Some(id),
            minor_id: None,
        }
    }

    /// 选中小组 (可同时带着过期的大组选择,小组优先)
    pub fn minor(id: i64) -> Self {
        Self {
            major_id: None,
            minor_id: Some(id),
        }
    }

    /// 是否未选择任何组
    pub fn is_empty(&self) -> bool {
        self.major_id.is_none() && self.minor_id.is_none()
    }
}
