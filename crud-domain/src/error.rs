//! 领域层统一错误定义
//!
//! 标识与校验本身是全函数，不产生错误；这里只覆盖仓储契约与序列化
//! 可能出现的最小必要集合，便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // --- 仓储/持久化 ---
    #[error("ephemeral identity cannot be used as a storage key: {entity}")]
    EphemeralKey { entity: &'static str },
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
