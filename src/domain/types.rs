// ==========================================
// ERP运营驾驶舱 - 领域状态码定义
// ==========================================
// 职责: 定义各集合的状态码类型
// 约束: 未知状态码原样保留,不丢弃、不折叠
// 序列化格式: SCREAMING_SNAKE_CASE (与上游存储一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 销售订单状态 (Order Status)
// ==========================================
// 上游历史原因,取消状态存在 CANCELED / CANCELLED 两种拼写,
// 解析时统一归一为 CANCELED
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,             // 대기
    Confirmed,           // 확정
    ProductionCompleted, // 생산 완료
    DeliveryCompleted,   // 납품 완료
    Canceled,            // 취소
    Other(String),       // 未知状态码,原样保留
}

impl OrderStatus {
    /// 从原始状态码解析
    pub fn from_code(code: &str) -> Self {
        match code {
            "PENDING" => OrderStatus::Pending,
            "CONFIRMED" => OrderStatus::Confirmed,
            "PRODUCTION_COMPLETED" => OrderStatus::ProductionCompleted,
            "DELIVERY_COMPLETED" => OrderStatus::DeliveryCompleted,
            "CANCELED" | "CANCELLED" => OrderStatus::Canceled,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    /// 规范状态码
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::ProductionCompleted => "PRODUCTION_COMPLETED",
            OrderStatus::DeliveryCompleted => "DELIVERY_COMPLETED",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Other(code) => code,
        }
    }
}

impl Default for OrderStatus {
    // 上游建单默认值
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl From<String> for OrderStatus {
    fn from(code: String) -> Self {
        OrderStatus::from_code(&code)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 生产计划状态 (Plan Status)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanStatus {
    Pending,       // 대기
    Planned,       // 계획 수립
    InProgress,    // 진행 중
    Completed,     // 완료
    Canceled,      // 취소
    Other(String), // 未知状态码,原样保留
}

impl PlanStatus {
    /// 从原始状态码解析
    pub fn from_code(code: &str) -> Self {
        match code {
            "PENDING" => PlanStatus::Pending,
            "PLANNED" => PlanStatus::Planned,
            "IN_PROGRESS" => PlanStatus::InProgress,
            "COMPLETED" => PlanStatus::Completed,
            "CANCELED" | "CANCELLED" => PlanStatus::Canceled,
            other => PlanStatus::Other(other.to_string()),
        }
    }

    /// 规范状态码
    pub fn code(&self) -> &str {
        match self {
            PlanStatus::Pending => "PENDING",
            PlanStatus::Planned => "PLANNED",
            PlanStatus::InProgress => "IN_PROGRESS",
            PlanStatus::Completed => "COMPLETED",
            PlanStatus::Canceled => "CANCELED",
            PlanStatus::Other(code) => code,
        }
    }

    /// 是否为进行中的计划 (PLANNED / IN_PROGRESS)
    pub fn is_active(&self) -> bool {
        matches!(self, PlanStatus::Planned | PlanStatus::InProgress)
    }
}

impl Default for PlanStatus {
    // 上游建单默认值
    fn default() -> Self {
        PlanStatus::Planned
    }
}

impl From<String> for PlanStatus {
    fn from(code: String) -> Self {
        PlanStatus::from_code(&code)
    }
}

impl From<PlanStatus> for String {
    fn from(status: PlanStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 库存生产状态 (Stock Production Status)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockProductionStatus {
    Pending,       // 대기
    InProgress,    // 생산 진행 중
    Completed,     // 완료
    Canceled,      // 취소
    Other(String), // 未知状态码,原样保留
}

impl StockProductionStatus {
    /// 从原始状态码解析
    pub fn from_code(code: &str) -> Self {
        match code {
            "PENDING" => StockProductionStatus::Pending,
            "IN_PROGRESS" => StockProductionStatus::InProgress,
            "COMPLETED" => StockProductionStatus::Completed,
            "CANCELED" | "CANCELLED" => StockProductionStatus::Canceled,
            other => StockProductionStatus::Other(other.to_string()),
        }
    }

    /// 规范状态码
    pub fn code(&self) -> &str {
        match self {
            StockProductionStatus::Pending => "PENDING",
            StockProductionStatus::InProgress => "IN_PROGRESS",
            StockProductionStatus::Completed => "COMPLETED",
            StockProductionStatus::Canceled => "CANCELED",
            StockProductionStatus::Other(code) => code,
        }
    }

    /// 是否占用产能 (PENDING / IN_PROGRESS)
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            StockProductionStatus::Pending | StockProductionStatus::InProgress
        )
    }
}

impl Default for StockProductionStatus {
    // 上游建单默认值
    fn default() -> Self {
        StockProductionStatus::Pending
    }
}

impl From<String> for StockProductionStatus {
    fn from(code: String) -> Self {
        StockProductionStatus::from_code(&code)
    }
}

impl From<StockProductionStatus> for String {
    fn from(status: StockProductionStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for StockProductionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 品质不良状态 (Defect Status)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DefectStatus {
    Occurred,      // 발생
    Resolved,      // 처리 완료
    Other(String), // 未知状态码,原样保留
}

impl DefectStatus {
    /// 从原始状态码解析
    pub fn from_code(code: &str) -> Self {
        match code {
            "OCCURRED" => DefectStatus::Occurred,
            "RESOLVED" => DefectStatus::Resolved,
            other => DefectStatus::Other(other.to_string()),
        }
    }

    /// 规范状态码
    pub fn code(&self) -> &str {
        match self {
            DefectStatus::Occurred => "OCCURRED",
            DefectStatus::Resolved => "RESOLVED",
            DefectStatus::Other(code) => code,
        }
    }
}

impl Default for DefectStatus {
    // 上游建单默认值
    fn default() -> Self {
        DefectStatus::Occurred
    }
}

impl From<String> for DefectStatus {
    fn from(code: String) -> Self {
        DefectStatus::from_code(&code)
    }
}

impl From<DefectStatus> for String {
    fn from(status: DefectStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for DefectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 产品组类型 (Group Kind)
// ==========================================
// 两级分类: MAJOR(大组) 无父组, MINOR(小组) 通过 parent_id 挂接大组
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupKind {
    Major,
    Minor,
    Other(String), // 未知类型,既非大组也非小组
}

impl GroupKind {
    /// 从原始类型码解析
    pub fn from_code(code: &str) -> Self {
        match code {
            "MAJOR" => GroupKind::Major,
            "MINOR" => GroupKind::Minor,
            other => GroupKind::Other(other.to_string()),
        }
    }

    /// 规范类型码
    pub fn code(&self) -> &str {
        match self {
            GroupKind::Major => "MAJOR",
            GroupKind::Minor => "MINOR",
            GroupKind::Other(code) => code,
        }
    }
}

impl Default for GroupKind {
    fn default() -> Self {
        GroupKind::Other(String::new())
    }
}

impl From<String> for GroupKind {
    fn from(code: String) -> Self {
        GroupKind::from_code(&code)
    }
}

impl From<GroupKind> for String {
    fn from(kind: GroupKind) -> Self {
        kind.code().to_string()
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
