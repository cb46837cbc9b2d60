// ==========================================
// 献血管理系统 - API 层
// ==========================================
// 职责: 组合判定引擎、后端客户端与页面元素，处理用户交互
// ==========================================

pub mod chart_api;
pub mod dashboard_api;
pub mod donation_gate;
pub mod eligibility_api;
pub mod error;
pub mod form;
pub mod inventory_api;

// 重导出核心类型
pub use chart_api::ChartApi;
pub use dashboard_api::{BadgeUpdate, DashboardApi};
pub use donation_gate::{DonationRequestGate, SubmitDecision};
pub use eligibility_api::{EligibilityApi, EligibilityDisplay};
pub use error::{ApiError, ApiResult};
pub use form::{EligibilityForm, FormError};
pub use inventory_api::InventoryApi;
