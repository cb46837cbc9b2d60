// ==========================================
// 献血管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、值对象与枚举
// 红线: 不含网络访问逻辑,不含判定逻辑
// ==========================================

pub mod chart;
pub mod donor;
pub mod inventory;
pub mod notification;
pub mod types;

// 重导出核心类型
pub use chart::ChartSeries;
pub use donor::{DonorEligibilityInput, EligibilityRules, EligibilityVerdict, Violation};
pub use inventory::{InventoryAdjustment, InventoryRecord, InventoryUpdateResponse};
pub use notification::CountResponse;
pub use types::{BadgeKind, ChartKind, ParsePolicy, PortalRole};
