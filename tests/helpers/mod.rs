// ==========================================
// 集成测试辅助模块
// ==========================================

#![allow(dead_code)]

pub mod http_stub;
pub mod mock_backend;
pub mod mock_config;
pub mod recording_views;
