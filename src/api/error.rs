// ==========================================
// 献血管理系统 - API层错误类型
// ==========================================
// 职责: 汇总各层错误，转换为用户可读的错误消息
// ==========================================

use crate::api::form::FormError;
use crate::client::ClientError;
use crate::config::ConfigError;
use crate::presentation::ChartError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(#[from] FormError),

    #[error("图表数据无效: {0}")]
    Chart(#[from] ChartError),

    // ==========================================
    // 协作方错误
    // ==========================================
    #[error("后端请求失败: {0}")]
    Client(#[from] ClientError),

    #[error("后端业务失败: {0}")]
    BackendRejected(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
