// ==========================================
// ERP运营驾驶舱 - API层错误类型
// ==========================================
// 职责: 定义调用边界的错误类型
// 约束: 只有调用形态错误 (快照不是对象、集合不是数组) 才报错;
//       脏数据在引擎内按缺省口径消化,永不冒泡成错误
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 调用形态错误: 快照文档或集合的结构不对
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
