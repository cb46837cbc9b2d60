// ==========================================
// 献血管理系统 - 计数接口领域模型
// ==========================================

use serde::{Deserialize, Serialize};

/// 计数接口响应: {count}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

impl CountResponse {
    /// 仅当 count > 0 时展示角标
    pub fn badge_text(&self) -> Option<String> {
        if self.count > 0 {
            Some(self.count.to_string())
        } else {
            None
        }
    }
}
