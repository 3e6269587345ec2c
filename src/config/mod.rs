// ==========================================
// ERP运营驾驶舱 - 配置层
// ==========================================
// 职责: 聚合引擎的可调参数
// ==========================================

pub mod engine_config;

pub use engine_config::EngineConfig;
