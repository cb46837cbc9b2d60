// ==========================================
// 献血管理系统 - 配置层
// ==========================================
// 职责: 客户端配置（JSON 文件 + 环境变量覆写）与判定阈值读取
// ==========================================

pub mod config_manager;
pub mod eligibility_config_trait;
pub mod error;
pub mod portal_config;

// 重导出核心配置类型
pub use config_manager::{config_keys, ConfigManager};
pub use eligibility_config_trait::EligibilityConfigReader;
pub use error::{ConfigError, ConfigResult};
pub use portal_config::PortalConfig;
