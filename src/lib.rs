// ==========================================
// 制造ERP运营驾驶舱 - 分析聚合引擎
// ==========================================
// 系统定位: 运营驾驶舱的只读聚合层
// 输入: 取数层一次取齐的源集合快照 + 产品组选择 + 基准日期
// 输出: 单一不可变视图对象 (指标/分布/走势/排名/近期/紧急)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 源集合实体与输入快照
pub mod domain;

// 引擎层 - 聚合流水线
pub mod engine;

// API 层 - 调用入口与展示文案
pub mod api;

// 配置层 - 引擎参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    DefectStatus, GroupKind, OrderStatus, PlanStatus, StockProductionStatus,
};

// 领域实体与快照
pub use domain::{
    DashboardSnapshot, DefectRecord, GroupSelection, OutsourcingOrder, Partner,
    PendingProcurementItem, Product, ProductGroup, ProductionPlan, PurchaseOrder, SalesOrder,
    StaffMember, StockProduction,
};

// 引擎
pub use engine::{
    DashboardEngine, DistributionBuilder, KpiAggregator, ProductScope, RankingBuilder,
    RecencySelector, ScopeFilter, ScopeResolver, TimeSeriesBuilder, UrgencyDetector,
};

// 输出视图
pub use engine::{
    CustomerRevenue, DashboardOverview, MonthlyPoint, RecentDefect, RecentOrder, StatusBucket,
    UrgentDelivery,
};

// API
pub use api::{ApiError, ApiResult, DashboardApi};

// 配置
pub use config::EngineConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "制造ERP运营驾驶舱";
