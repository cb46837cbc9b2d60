// ==========================================
// 献血管理系统 - 客户端展示核心库
// ==========================================
// 职责: 献血资格自查、图表配置、库存调整与角标轮询
// 系统定位: 展示层（业务规则以服务端为准）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 资格判定
pub mod engine;

// 配置层 - 客户端配置
pub mod config;

// 后端客户端 - 协作接口
pub mod client;

// 展示协作层 - 页面元素/提示/图表
pub mod presentation;

// API 层 - 用户交互
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    BadgeKind, ChartKind, ChartSeries, CountResponse, DonorEligibilityInput, EligibilityRules,
    EligibilityVerdict, InventoryAdjustment, InventoryUpdateResponse, ParsePolicy, PortalRole,
    Violation,
};

pub use engine::{evaluate, EligibilityCore, EligibilityEngine};

pub use api::{
    ApiError, ApiResult, DashboardApi, DonationRequestGate, EligibilityApi, EligibilityDisplay,
    EligibilityForm, InventoryApi, SubmitDecision,
};

pub use client::{HttpPortalBackend, PortalBackend};

pub use config::{ConfigManager, PortalConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "献血管理系统";
