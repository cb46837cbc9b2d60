// ==========================================
// 献血管理系统 - 图表配置
// ==========================================
// 职责: 由服务端数据组装图表库配置（饼图/柱状图/折线图）
// 红线: 不涉及图表库内部实现，渲染交给 ChartRenderer
// ==========================================

use crate::domain::chart::ChartSeries;
use crate::domain::types::ChartKind;
use crate::i18n;
use serde_json::{json, Value};
use thiserror::Error;

/// 血型配色（A+ A- B+ B- AB+ AB- O+ O- 顺序对应）
pub const BLOOD_COLORS: [&str; 8] = [
    "#dc3545", "#fd7e14", "#0d6efd", "#20c997", "#198754", "#6610f2", "#ffc107", "#e83e8c",
];

const TREND_FILL: &str = "rgba(220, 53, 69, 0.2)";
const TREND_BORDER: &str = "#dc3545";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("图表数据长度不一致: labels={labels}, values={values}")]
    LengthMismatch { labels: usize, values: usize },
}

/// 组装完成的图表
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    /// 图表库配置 (type/data/options)
    pub config: Value,
    /// 每个数据点的提示文本
    pub tooltip_labels: Vec<String>,
}

/// 图表渲染接口（由宿主页面实现，失败原因任意）
pub trait ChartRenderer: Send + Sync {
    fn render(&self, chart: &ChartConfig) -> anyhow::Result<()>;
}

// ==========================================
// ChartConfigBuilder
// ==========================================
pub struct ChartConfigBuilder {
    locale: String,
}

impl ChartConfigBuilder {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn build(&self, kind: ChartKind, series: &ChartSeries) -> Result<ChartConfig, ChartError> {
        if !series.is_aligned() {
            return Err(ChartError::LengthMismatch {
                labels: series.labels.len(),
                values: series.values.len(),
            });
        }

        let config = match kind {
            ChartKind::Pie => self.pie_config(series),
            ChartKind::Bar => self.bar_config(series),
            ChartKind::Line => self.line_config(series),
        };

        Ok(ChartConfig {
            kind,
            config,
            tooltip_labels: self.tooltip_labels(kind, series),
        })
    }

    fn t(&self, key: &str) -> String {
        i18n::t_in(&self.locale, key, &[])
    }

    fn pie_config(&self, series: &ChartSeries) -> Value {
        json!({
            "type": ChartKind::Pie,
            "data": {
                "labels": series.labels,
                "datasets": [{
                    "data": series.values,
                    "backgroundColor": BLOOD_COLORS,
                }]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": {
                    "legend": {
                        "position": "right",
                        "labels": { "font": { "size": 12 } }
                    }
                }
            }
        })
    }

    fn bar_config(&self, series: &ChartSeries) -> Value {
        json!({
            "type": ChartKind::Bar,
            "data": {
                "labels": series.labels,
                "datasets": [{
                    "label": self.t("chart.units_available"),
                    "data": series.values,
                    "backgroundColor": BLOOD_COLORS,
                    "borderWidth": 1,
                }]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": { "legend": { "display": false } },
                "scales": {
                    "y": {
                        "beginAtZero": true,
                        "title": { "display": true, "text": self.t("chart.units") }
                    },
                    "x": {
                        "title": { "display": true, "text": self.t("chart.blood_group") }
                    }
                }
            }
        })
    }

    fn line_config(&self, series: &ChartSeries) -> Value {
        json!({
            "type": ChartKind::Line,
            "data": {
                "labels": series.labels,
                "datasets": [{
                    "label": self.t("chart.donations"),
                    "data": series.values,
                    "backgroundColor": TREND_FILL,
                    "borderColor": TREND_BORDER,
                    "borderWidth": 2,
                    "tension": 0.1,
                }]
            },
            "options": {
                "responsive": true,
                "scales": {
                    "y": {
                        "beginAtZero": true,
                        "title": { "display": true, "text": self.t("chart.number_of_donations") }
                    },
                    "x": {
                        "title": { "display": true, "text": self.t("chart.date") }
                    }
                }
            }
        })
    }

    fn tooltip_labels(&self, kind: ChartKind, series: &ChartSeries) -> Vec<String> {
        match kind {
            ChartKind::Pie => {
                let total = series.total();
                series
                    .labels
                    .iter()
                    .zip(&series.values)
                    .map(|(label, value)| pie_tooltip(label, *value, total))
                    .collect()
            }
            ChartKind::Bar => series
                .values
                .iter()
                .map(|value| {
                    i18n::t_in(
                        &self.locale,
                        "chart.units_tooltip",
                        &[("value", &format_value(*value))],
                    )
                })
                .collect(),
            ChartKind::Line => series
                .labels
                .iter()
                .zip(&series.values)
                .map(|(label, value)| format!("{}: {}", label, format_value(*value)))
                .collect(),
        }
    }
}

/// 饼图提示: "<label>: <value> units (<pct>%)"，合计为 0 时占比为 0.0
pub fn pie_tooltip(label: &str, value: f64, total: f64) -> String {
    let percentage = if total > 0.0 { value / total * 100.0 } else { 0.0 };
    format!(
        "{}: {} units ({:.1}%)",
        label,
        format_value(value),
        percentage
    )
}

/// 整数值不带小数点；超出 i64 范围的按浮点格式输出
fn format_value(value: f64) -> String {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    if value.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&value) {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blood_series() -> ChartSeries {
        ChartSeries::new(
            vec!["A+".into(), "B+".into(), "O+".into(), "AB-".into()],
            vec![10.0, 5.0, 25.0, 0.0],
        )
    }

    #[test]
    fn test_pie_tooltip_percentages() {
        assert_eq!(pie_tooltip("A+", 10.0, 40.0), "A+: 10 units (25.0%)");
        assert_eq!(pie_tooltip("B-", 1.0, 3.0), "B-: 1 units (33.3%)");
        assert_eq!(pie_tooltip("O-", 0.0, 0.0), "O-: 0 units (0.0%)");
    }

    #[test]
    fn test_pie_config() {
        let builder = ChartConfigBuilder::new("en");
        let chart = builder.build(ChartKind::Pie, &blood_series()).unwrap();

        assert_eq!(chart.config["type"], "pie");
        assert_eq!(chart.config["data"]["labels"][2], "O+");
        assert_eq!(chart.config["data"]["datasets"][0]["backgroundColor"][0], "#dc3545");
        assert_eq!(chart.tooltip_labels[0], "A+: 10 units (25.0%)");
        assert_eq!(chart.tooltip_labels[3], "AB-: 0 units (0.0%)");
    }

    #[test]
    fn test_bar_config_uses_locale() {
        let chart = ChartConfigBuilder::new("en")
            .build(ChartKind::Bar, &blood_series())
            .unwrap();
        assert_eq!(chart.config["data"]["datasets"][0]["label"], "Units Available");
        assert_eq!(chart.config["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(chart.tooltip_labels[1], "5 units");

        let chart = ChartConfigBuilder::new("zh-CN")
            .build(ChartKind::Bar, &blood_series())
            .unwrap();
        assert_eq!(chart.config["options"]["scales"]["x"]["title"]["text"], "血型");
    }

    #[test]
    fn test_line_config() {
        let series = ChartSeries::new(
            vec!["2025-01-01".into(), "2025-01-02".into()],
            vec![3.0, 4.0],
        );
        let chart = ChartConfigBuilder::new("en")
            .build(ChartKind::Line, &series)
            .unwrap();
        assert_eq!(chart.config["type"], "line");
        assert_eq!(chart.config["data"]["datasets"][0]["borderColor"], "#dc3545");
        assert_eq!(chart.tooltip_labels, vec!["2025-01-01: 3", "2025-01-02: 4"]);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let series = ChartSeries::new(vec!["A+".into()], vec![1.0, 2.0]);
        let err = ChartConfigBuilder::new("en")
            .build(ChartKind::Bar, &series)
            .unwrap_err();
        assert_eq!(err, ChartError::LengthMismatch { labels: 1, values: 2 });
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(1e19), "10000000000000000000");
        assert_eq!(format_value(-1e19), "-10000000000000000000");
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "inf");
    }
}
