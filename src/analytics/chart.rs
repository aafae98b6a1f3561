// src/analytics/chart.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::analytics::ratio::percentage;
use crate::models::dashboard::MetricPoint;

// Canvas fixo 200x200, raio 80, centro no meio
pub const PIE_CANVAS: f64 = 200.0;
pub const PIE_RADIUS: f64 = 80.0;
const PIE_CENTER: f64 = PIE_CANVAS / 2.0;

pub const PALETTE: [&str; 8] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444",
    "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
];

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarSegment {
    pub label: String,
    pub value: f64,
    pub height_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub total: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub slices: Vec<PieSlice>,
}

/// Altura de cada barra relativa ao maior valor da série.
/// A ordem de entrada é mantida (buckets cronológicos).
pub fn bar_geometry(points: &[MetricPoint]) -> Vec<BarSegment> {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    points
        .iter()
        .map(|point| BarSegment {
            label: point.label.clone(),
            value: point.value,
            height_percent: percentage(point.value, max),
        })
        .collect()
}

pub fn pie_geometry(points: &[MetricPoint]) -> PieChart {
    let total: f64 = points.iter().map(|p| p.value).sum();
    let mut start_angle = 0.0;

    let slices = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let percentage = percentage(point.value, total);
            let angle = percentage / 100.0 * 360.0;
            let end_angle = start_angle + angle;

            let slice = PieSlice {
                label: point.label.clone(),
                value: point.value,
                percentage,
                start_angle,
                end_angle,
                path: arc_path(start_angle, end_angle),
                color: PALETTE[index % PALETTE.len()].to_string(),
            };
            start_angle = end_angle;
            slice
        })
        .collect();

    PieChart {
        total,
        width: PIE_CANVAS,
        height: PIE_CANVAS,
        radius: PIE_RADIUS,
        slices,
    }
}

// Ângulo 0 fica às 12 horas, sentido horário
fn point_on_circle(angle_deg: f64) -> (f64, f64) {
    let radians = (angle_deg - 90.0).to_radians();
    (
        PIE_CENTER + PIE_RADIUS * radians.cos(),
        PIE_CENTER + PIE_RADIUS * radians.sin(),
    )
}

fn arc_path(start_angle: f64, end_angle: f64) -> String {
    let angle = end_angle - start_angle;
    let (x1, y1) = point_on_circle(start_angle);
    let (x2, y2) = point_on_circle(end_angle);

    // Um arco com início == fim (depois do arredondamento) não desenha nada:
    // a fatia dominante vira dois semicírculos
    let same_point = format!("{x1:.2} {y1:.2}") == format!("{x2:.2} {y2:.2}");
    if angle >= 360.0 || (angle > 180.0 && same_point) {
        let (xm, ym) = point_on_circle(start_angle + 180.0);
        return format!(
            "M {c:.2} {c:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 0 1 {xm:.2} {ym:.2} A {r:.2} {r:.2} 0 0 1 {x1:.2} {y1:.2} Z",
            c = PIE_CENTER,
            r = PIE_RADIUS,
        );
    }

    let large_arc = if angle > 180.0 { 1 } else { 0 };

    format!(
        "M {c:.2} {c:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z",
        c = PIE_CENTER,
        r = PIE_RADIUS,
    )
}
