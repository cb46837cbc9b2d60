// ==========================================
// 献血管理系统 - 后端客户端错误类型
// ==========================================

use thiserror::Error;

/// 后端客户端错误类型
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("请求发送失败: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("服务端返回错误状态: HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("响应格式无法识别 (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("后端不可用: {0}")]
    Unavailable(String),
}

/// 客户端 Result 类型别名
pub type ClientResult<T> = Result<T, ClientError>;
