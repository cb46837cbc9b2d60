// ==========================================
// 献血管理系统 - 页面元素接口
// ==========================================
// 每个页面元素对应一个注入的实现，初始化时绑定，无共享状态
// ==========================================

use crate::domain::types::BadgeKind;

/// 角标（通知数 / 待处理数）
pub trait BadgeSink: Send + Sync {
    fn set_badge(&self, kind: BadgeKind, text: &str);
}

/// 库存单位数显示（inventory-units-{id}）
pub trait InventoryView: Send + Sync {
    fn set_units(&self, inventory_id: i64, units: i64);
}
