// ==========================================
// 献血管理系统 - 血液库存领域模型
// ==========================================
// 职责: 库存调整请求与服务端响应
// 红线: 客户端不做库存一致性校验，以服务端响应为准
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// InventoryAdjustment - 库存调整请求
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryAdjustment {
    pub inventory_id: i64,
    /// 表单 units 字段的值；服务端将其作为新的库存单位数
    pub units_delta: i64,
}

// ==========================================
// InventoryRecord - 服务端返回的库存记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: Option<i64>,
    pub blood_group: Option<String>,
    pub units: Option<i64>,
    pub last_updated: Option<String>,
}

// ==========================================
// InventoryUpdateResponse - 库存更新响应
// ==========================================
// 兼容两种形态:
// - {success, units?, error?}
// - {success, message, data: {units, ...}}
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryUpdateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<InventoryRecord>,
}

impl InventoryUpdateResponse {
    /// 更新后的库存单位数（顶层 units 优先）
    pub fn resolved_units(&self) -> Option<i64> {
        self.units
            .or_else(|| self.data.as_ref().and_then(|d| d.units))
    }

    /// 失败原因（error 优先，其次 message）
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}
