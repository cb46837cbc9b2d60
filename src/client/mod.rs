// ==========================================
// 献血管理系统 - 后端客户端层
// ==========================================
// 职责: 与服务端协作接口通信（库存更新、计数）
// ==========================================

pub mod backend;
pub mod error;
pub mod http;

pub use backend::PortalBackend;
pub use error::{ClientError, ClientResult};
pub use http::HttpPortalBackend;
