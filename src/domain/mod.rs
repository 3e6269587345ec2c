// ==========================================
// ERP运营驾驶舱 - 领域模型层
// ==========================================
// 职责: 定义源集合实体、状态码类型与输入快照
// 约束: 实体归上游CRUD层所有,本层只读; 不含过滤/聚合逻辑
// ==========================================

pub mod basics;
pub mod inventory;
pub mod product;
pub mod production;
pub mod purchasing;
pub mod quality;
pub mod sales;
pub mod snapshot;
pub mod types;

// 重导出核心实体
pub use basics::{Partner, StaffMember};
pub use inventory::StockProduction;
pub use product::{Product, ProductGroup};
pub use production::{PlanItem, ProductionPlan};
pub use purchasing::{OutsourcingOrder, PendingProcurementItem, ProcurementItem, PurchaseOrder};
pub use quality::{DefectOrderItemRef, DefectOrderRef, DefectPlanItemRef, DefectRecord};
pub use sales::{OrderItem, PartnerRef, SalesOrder};
pub use snapshot::{DashboardSnapshot, GroupSelection};
pub use types::{
    DefectStatus, GroupKind, OrderStatus, PlanStatus, StockProductionStatus,
};
