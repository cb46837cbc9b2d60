// ==========================================
// 献血管理系统 - 图表 API
// ==========================================
// 职责: 服务端数据 → 图表配置 → 宿主渲染器
// 页面: 库存饼图 / 血型柱状图 / 献血趋势折线图
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::chart::ChartSeries;
use crate::domain::types::ChartKind;
use crate::presentation::{ChartConfig, ChartConfigBuilder, ChartRenderer};
use anyhow::Context;
use std::sync::Arc;
use tracing::instrument;

pub struct ChartApi {
    builder: ChartConfigBuilder,
    renderer: Arc<dyn ChartRenderer>,
}

impl ChartApi {
    pub fn new(renderer: Arc<dyn ChartRenderer>, locale: impl Into<String>) -> Self {
        Self {
            builder: ChartConfigBuilder::new(locale),
            renderer,
        }
    }

    /// 组装图表配置并交给渲染器
    ///
    /// # 返回
    /// - Ok(ChartConfig): 已渲染的配置
    /// - Err(ApiError::Chart): labels 与 values 长度不一致，未调用渲染器
    /// - Err(ApiError::Other): 渲染器失败
    #[instrument(skip(self, series), fields(points = series.values.len()))]
    pub fn render(&self, kind: ChartKind, series: &ChartSeries) -> ApiResult<ChartConfig> {
        let chart = self.builder.build(kind, series)?;
        self.renderer
            .render(&chart)
            .with_context(|| format!("{} 图表渲染失败", kind))?;

        tracing::debug!("图表已渲染");
        Ok(chart)
    }
}
