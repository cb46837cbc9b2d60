// ==========================================
// 献血管理系统 - 图表数据领域模型
// ==========================================
// 数据由服务端计算，客户端只负责组装图表配置
// ==========================================

use serde::{Deserialize, Serialize};

/// 图表数据序列: 分类标签 + 数值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    /// 标签与数值长度一致
    pub fn is_aligned(&self) -> bool {
        self.labels.len() == self.values.len()
    }

    /// 数值合计（忽略 NaN）
    pub fn total(&self) -> f64 {
        self.values.iter().filter(|v| !v.is_nan()).sum()
    }
}
