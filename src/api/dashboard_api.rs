// ==========================================
// ERP运营驾驶舱 - 驾驶舱 API
// ==========================================
// 职责: 封装 DashboardEngine,面向取数/渲染宿主提供聚合入口
// 架构: API 层 → 引擎层 (DashboardEngine) → 各阶段
// 说明: 墙钟时间只在便捷入口取一次,随后作为显式参数下传,
//       同一次调用内所有派生字段共享同一个基准日期
// ==========================================

use chrono::NaiveDate;
use tracing::instrument;

use crate::api::error::{ApiError, ApiResult};
use crate::config::EngineConfig;
use crate::domain::snapshot::{DashboardSnapshot, GroupSelection};
use crate::engine::{DashboardEngine, DashboardOverview};

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================
pub struct DashboardApi {
    engine: DashboardEngine,
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardApi {
    /// 以产品默认口径创建
    pub fn new() -> Self {
        Self {
            engine: DashboardEngine::new(),
        }
    }

    /// 以自定义引擎参数创建
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: DashboardEngine::with_config(config),
        }
    }

    /// 派生驾驶舱视图 (类型化入口,基准日期显式传入)
    ///
    /// # 参数
    /// - snapshot: 调用方一次取齐的源集合快照
    /// - selection: 产品组选择
    /// - today: 基准日期 (测试中注入固定值以保证可复现)
    pub fn overview(
        &self,
        snapshot: &DashboardSnapshot,
        selection: &GroupSelection,
        today: NaiveDate,
    ) -> DashboardOverview {
        self.engine.build(snapshot, selection, today)
    }

    /// 派生驾驶舱视图 (墙钟便捷入口)
    ///
    /// 基准日期在此处取一次本地日期,再走显式入口
    pub fn overview_now(
        &self,
        snapshot: &DashboardSnapshot,
        selection: &GroupSelection,
    ) -> DashboardOverview {
        let today = chrono::Local::now().date_naive();
        self.overview(snapshot, selection, today)
    }

    /// 从取数层的原始 JSON 文档派生驾驶舱视图
    ///
    /// 缺失的集合按空数组处理; 集合不是数组、记录缺主键等
    /// 结构问题属于调用方编程错误,报 InvalidInput
    ///
    /// # 返回
    /// - Ok(DashboardOverview): 聚合结果
    /// - Err(ApiError::InvalidInput): 快照结构不对
    #[instrument(skip(self, document))]
    pub fn overview_from_json(
        &self,
        document: serde_json::Value,
        selection: &GroupSelection,
        today: NaiveDate,
    ) -> ApiResult<DashboardOverview> {
        let snapshot: DashboardSnapshot = serde_json::from_value(document)
            .map_err(|e| ApiError::InvalidInput(format!("快照结构不合法: {}", e)))?;
        Ok(self.overview(&snapshot, selection, today))
    }
}
