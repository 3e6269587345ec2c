// ==========================================
// ERP运营驾驶舱 - 输出视图模型
// ==========================================
// 职责: 定义聚合结果的唯一输出契约
// 约束: 输出是不可变值对象; 状态一律用原始状态码,
//       显示文案的翻译在展示层做 (api::labels)
// 序列化: camelCase,面向前端图表/卡片/表格消费
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DashboardOverview - 驾驶舱总览
// ==========================================
// 所有字段来自同一份过滤后快照与同一个基准日期,
// 字段之间不会出现口径不一致
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    // ==========================================
    // 订单类标量
    // ==========================================
    /// 订单总数
    pub total_orders: usize,
    /// 本月订单数
    pub month_orders: usize,
    /// 进行中订单数 (PENDING / CONFIRMED)
    pub pending_orders: usize,
    /// 纳品完成订单数 (DELIVERY_COMPLETED)
    pub delivered_orders: usize,
    /// 生产完成订单数 (PRODUCTION_COMPLETED)
    pub production_completed_orders: usize,
    /// 累计销售额
    pub total_revenue: i64,
    /// 本月销售额
    pub month_revenue: i64,
    /// 纳品进度 (delivered / total, 四舍五入百分比)
    pub delivery_rate: i64,

    // ==========================================
    // 生产/采购类标量
    // ==========================================
    /// 生产计划总数
    pub total_plans: usize,
    /// 进行中计划数 (PLANNED / IN_PROGRESS)
    pub active_plans: usize,
    /// 完成计划数 (COMPLETED)
    pub completed_plans: usize,
    /// 采购订单总数
    pub total_purchase_orders: usize,
    /// 外协订单总数
    pub total_outsourcing_orders: usize,
    /// 待采项数 (采购)
    pub pending_purchase_items: usize,
    /// 待采项数 (外协)
    pub pending_outsourcing_items: usize,
    /// 库存生产总数
    pub total_stock_productions: usize,
    /// 进行中库存生产数 (PENDING / IN_PROGRESS)
    pub active_stock_productions: usize,

    // ==========================================
    // 品质类标量
    // ==========================================
    /// 不良记录总数
    pub total_defects: usize,
    /// 未处理不良数 (状态 != RESOLVED)
    pub unresolved_defects: usize,

    // ==========================================
    // 组织级标量 (不受产品组过滤影响)
    // ==========================================
    /// 客户总数
    pub total_partners: usize,
    /// 产品总数
    pub total_products: usize,
    /// 在职职员数
    pub active_staff: usize,

    // ==========================================
    // 列表输出
    // ==========================================
    /// 订单状态分布
    pub order_status_data: Vec<StatusBucket>,
    /// 计划状态分布
    pub plan_status_data: Vec<StatusBucket>,
    /// 不良状态分布
    pub defect_status_data: Vec<StatusBucket>,
    /// 滚动 6 个月销售额走势 (最旧在前,末点为基准月)
    pub monthly_revenue: Vec<MonthlyPoint>,
    /// 客户销售额排名 (降序,最多 5)
    pub top_customers: Vec<CustomerRevenue>,
    /// 最近订单 (最多 6)
    pub recent_orders: Vec<RecentOrder>,
    /// 最近不良 (最多 5)
    pub recent_defects: Vec<RecentDefect>,
    /// 紧急纳期订单 (最多 5, 最逾期/最临近在前)
    pub urgent_deliveries: Vec<UrgentDelivery>,
}

// ==========================================
// StatusBucket - 状态分布桶
// ==========================================
// status 是原始状态码; 首次出现顺序即输出顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBucket {
    pub status: String,
    pub count: usize,
}

// ==========================================
// MonthlyPoint - 月度走势点
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    /// 月份键 "YYYY-MM"
    pub month_key: String,
    /// 显示标签 "<月序号>월"
    pub label: String,
    pub revenue: i64,
    pub count: usize,
}

// ==========================================
// CustomerRevenue - 客户销售额
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRevenue {
    pub name: String,
    pub revenue: i64,
}

// ==========================================
// RecentOrder - 最近订单条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: i64,
    pub order_no: Option<String>,
    pub partner_name: Option<String>,
    pub order_date: Option<String>,
    pub total_amount: i64,
    pub status: String,
}

// ==========================================
// RecentDefect - 最近不良条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentDefect {
    pub id: i64,
    pub defect_date: Option<String>,
    pub defect_type: Option<String>,
    pub quantity: i64,
    pub status: String,
}

// ==========================================
// UrgentDelivery - 紧急纳期条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgentDelivery {
    pub id: i64,
    pub order_no: Option<String>,
    pub partner_name: Option<String>,
    pub delivery_date: String,
    pub status: String,
    /// 距纳期天数 (负数=已逾期)
    pub days_remaining: i64,
}
