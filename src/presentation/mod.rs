// ==========================================
// 献血管理系统 - 展示协作层
// ==========================================
// 职责: 页面元素、提示框、图表渲染的注入式接口
// 红线: 无全局状态, 每个元素一个实现
// ==========================================

pub mod alert;
pub mod chart;
pub mod view;

pub use alert::{schedule_auto_dismiss, Notifier};
pub use chart::{ChartConfig, ChartConfigBuilder, ChartError, ChartRenderer, BLOOD_COLORS};
pub use view::{BadgeSink, InventoryView};
