// ==========================================
// 献血管理系统 - 领域类型定义
// ==========================================
// 职责: 图表类型、表单解析策略、门户角色等枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 图表类型 (Chart Kind)
// ==========================================
// 序列化格式: 小写 (与图表库的 type 字段一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,  // 饼图 (库存占比)
    Bar,  // 柱状图 (各血型库存)
    Line, // 折线图 (献血趋势)
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Line => write!(f, "line"),
        }
    }
}

// ==========================================
// 表单解析策略 (Parse Policy)
// ==========================================
// 决定无法解析的数字字段如何进入资格判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParsePolicy {
    /// 任何字段无法解析即返回错误
    Reject,
    /// 无法解析的字段转为非数值状态，由判定器视为不满足约束
    #[default]
    Coerce,
}

impl fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePolicy::Reject => write!(f, "REJECT"),
            ParsePolicy::Coerce => write!(f, "COERCE"),
        }
    }
}

// ==========================================
// 门户角色 (Portal Role)
// ==========================================
// 决定仪表盘加载时轮询哪个计数接口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortalRole {
    Donor,    // 献血者: 未读通知数
    Hospital, // 医院: 待处理献血申请数
    Admin,    // 管理员: 无角标
}

impl fmt::Display for PortalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalRole::Donor => write!(f, "donor"),
            PortalRole::Hospital => write!(f, "hospital"),
            PortalRole::Admin => write!(f, "admin"),
        }
    }
}

// ==========================================
// 角标类型 (Badge Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Notifications,    // .notification-badge
    PendingDonations, // .pending-badge
}

impl fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeKind::Notifications => write!(f, "notification-badge"),
            BadgeKind::PendingDonations => write!(f, "pending-badge"),
        }
    }
}
