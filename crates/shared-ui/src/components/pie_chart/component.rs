use dioxus::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};

const VIEWBOX: f64 = 200.0;
const CENTER: f64 = VIEWBOX / 2.0;
const OUTER_RADIUS: f64 = 90.0;
const INNER_RADIUS: f64 = 56.0;

/// Fraction at which a slice is drawn as a closed ring. A single arc cannot
/// describe a full circle in SVG.
const FULL_RING: f64 = 0.9999;

/// One value of an already-aggregated series.
#[derive(Debug, Clone, PartialEq)]
pub struct PieDatum {
    pub label: String,
    /// Secondary text shown in the legend (e.g. the entity type).
    pub detail: String,
    pub value: f64,
    pub color: String,
}

/// Angular extent of one drawable datum. Angles are radians measured
/// clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSegment {
    /// Index into the input series.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

fn is_drawable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Lay consecutive slices around the circle in input order. Non-positive and
/// non-finite values get no segment.
pub fn layout_segments(values: &[f64]) -> Vec<PieSegment> {
    let total: f64 = values.iter().copied().filter(|v| is_drawable(*v)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut cursor = 0.0;
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| is_drawable(**v))
        .map(|(index, value)| {
            let fraction = value / total;
            let start = cursor;
            cursor += fraction * TAU;
            PieSegment {
                index,
                start,
                end: cursor,
                fraction,
            }
        })
        .collect()
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (CENTER + radius * theta.cos(), CENTER + radius * theta.sin())
}

fn fmt(n: f64) -> String {
    let s = format!("{n:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// SVG path data for a donut segment. A segment spanning the whole circle
/// becomes two concentric circles filled with `evenodd`.
pub fn donut_path(segment: &PieSegment) -> String {
    if segment.fraction >= FULL_RING {
        let ring = |r: f64| {
            format!(
                "M {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
                fmt(CENTER),
                fmt(CENTER - r),
                fmt(CENTER),
                fmt(CENTER + r),
                fmt(CENTER),
                fmt(CENTER - r),
                r = fmt(r),
            )
        };
        return format!("{} {}", ring(OUTER_RADIUS), ring(INNER_RADIUS));
    }

    let large_arc = if segment.end - segment.start > std::f64::consts::PI {
        1
    } else {
        0
    };
    let (ox0, oy0) = point(OUTER_RADIUS, segment.start);
    let (ox1, oy1) = point(OUTER_RADIUS, segment.end);
    let (ix1, iy1) = point(INNER_RADIUS, segment.end);
    let (ix0, iy0) = point(INNER_RADIUS, segment.start);

    format!(
        "M {} {} A {o} {o} 0 {large_arc} 1 {} {} L {} {} A {i} {i} 0 {large_arc} 0 {} {} Z",
        fmt(ox0),
        fmt(oy0),
        fmt(ox1),
        fmt(oy1),
        fmt(ix1),
        fmt(iy1),
        fmt(ix0),
        fmt(iy0),
        o = fmt(OUTER_RADIUS),
        i = fmt(INNER_RADIUS),
    )
}

/// Percentage label with one decimal, e.g. `"42.9%"`.
pub fn format_percentage(fraction: f64) -> String {
    if !fraction.is_finite() || fraction <= 0.0 {
        return "0%".to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// Donut chart with a legend. Renders nothing for an empty or all-zero
/// series; callers show their own empty state.
#[component]
pub fn PieChart(
    data: Vec<PieDatum>,
    /// Accessible description of the chart.
    label: String,
    /// Text in the middle of the ring, e.g. the total.
    #[props(default)]
    center_label: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        PieChartBody { data, label, center_label }
    }
}

/// A segment joined with the datum it draws, ready for markup.
#[derive(Debug, Clone, PartialEq)]
struct DrawnSlice {
    key: usize,
    path: String,
    color: String,
    label: String,
    detail: String,
    value: String,
    percentage: String,
}

fn drawn_slices(data: &[PieDatum]) -> Vec<DrawnSlice> {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    layout_segments(&values)
        .iter()
        .map(|segment| {
            let datum = &data[segment.index];
            DrawnSlice {
                key: segment.index,
                path: donut_path(segment),
                color: datum.color.clone(),
                label: datum.label.clone(),
                detail: datum.detail.clone(),
                value: datum.value.to_string(),
                percentage: format_percentage(segment.fraction),
            }
        })
        .collect()
}

#[component]
fn PieChartBody(data: Vec<PieDatum>, label: String, center_label: Option<String>) -> Element {
    let slices = drawn_slices(&data);
    if slices.is_empty() {
        return rsx! {};
    }
    let viewbox = format!("0 0 {VIEWBOX} {VIEWBOX}");

    rsx! {
        figure { class: "pie-chart",
            svg {
                class: "pie-chart-svg",
                view_box: "{viewbox}",
                role: "img",
                "aria-label": "{label}",
                for slice in slices.iter() {
                    path {
                        key: "{slice.key}",
                        class: "pie-chart-slice",
                        d: "{slice.path}",
                        fill: "{slice.color}",
                        fill_rule: "evenodd",
                        title { "{slice.label}: {slice.percentage}" }
                    }
                }
                if let Some(center) = center_label {
                    text {
                        class: "pie-chart-center",
                        x: "{CENTER}",
                        y: "{CENTER}",
                        text_anchor: "middle",
                        dominant_baseline: "central",
                        "{center}"
                    }
                }
            }
            figcaption { class: "pie-chart-legend",
                ul {
                    for slice in slices.iter() {
                        li { key: "{slice.key}", class: "pie-chart-legend-item",
                            span {
                                class: "pie-chart-swatch",
                                style: "background: {slice.color}",
                            }
                            span { class: "pie-chart-legend-label", "{slice.label}" }
                            if !slice.detail.is_empty() {
                                span { class: "pie-chart-legend-detail", "{slice.detail}" }
                            }
                            span { class: "pie-chart-legend-value", "{slice.value} · {slice.percentage}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn datum(label: &str, value: f64) -> PieDatum {
        PieDatum {
            label: label.to_string(),
            detail: "person".to_string(),
            value,
            color: "#1e40af".to_string(),
        }
    }

    #[test]
    fn segments_cover_the_circle_in_order() {
        let segs = layout_segments(&[1.0, 2.0, 1.0]);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].start, 0.0);
        assert!((segs[0].end - TAU / 4.0).abs() < 1e-9);
        assert!((segs[1].end - 3.0 * TAU / 4.0).abs() < 1e-9);
        assert!((segs[2].end - TAU).abs() < 1e-9);
        assert!((segs[1].fraction - 0.5).abs() < 1e-9);
    }

    #[test]
    fn non_positive_values_are_skipped() {
        let segs = layout_segments(&[0.0, 3.0, -1.0, f64::NAN, 1.0]);
        let indices: Vec<usize> = segs.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 4]);
        assert!((segs[0].fraction - 0.75).abs() < 1e-9);
    }

    #[test]
    fn empty_or_zero_series_has_no_segments() {
        assert!(layout_segments(&[]).is_empty());
        assert!(layout_segments(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn single_slice_is_a_full_ring() {
        let segs = layout_segments(&[5.0]);
        let path = donut_path(&segs[0]);
        // Two closed subpaths, one per circle.
        assert_eq!(path.matches('Z').count(), 2);
        assert!(path.starts_with("M 100 10 A 90 90"));
    }

    #[test]
    fn half_slice_path_uses_small_arc_flags() {
        let segs = layout_segments(&[1.0, 1.0]);
        let path = donut_path(&segs[0]);
        assert_eq!(path, "M 100 10 A 90 90 0 0 1 100 190 L 100 156 A 56 56 0 0 0 100 44 Z");
    }

    #[test]
    fn large_slice_sets_large_arc_flag() {
        let segs = layout_segments(&[3.0, 1.0]);
        assert!(donut_path(&segs[0]).contains(" 0 1 1 "));
        assert!(donut_path(&segs[1]).contains(" 0 0 1 "));
    }

    #[test]
    fn percentage_formatting() {
        assert_eq!(format_percentage(0.4286), "42.9%");
        assert_eq!(format_percentage(1.0), "100.0%");
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(f64::NAN), "0%");
    }

    #[test]
    fn renders_one_path_and_legend_row_per_drawable_slice() {
        let html = dioxus_ssr::render_element(rsx! {
            PieChartBody {
                data: vec![datum("Acme Corp", 12.0), datum("Nobody", 0.0), datum("Jane Doe", 4.0)],
                label: "Facts per entity".to_string(),
                center_label: Some("16".to_string()),
            }
        });
        assert_eq!(html.matches("pie-chart-slice").count(), 2);
        assert_eq!(html.matches("pie-chart-legend-item").count(), 2);
        assert!(html.contains("Acme Corp"));
        assert!(html.contains("75.0%"));
        assert!(!html.contains("Nobody"));
        assert!(html.contains(r#"aria-label="Facts per entity""#));
    }

    #[test]
    fn renders_nothing_without_data() {
        let html = dioxus_ssr::render_element(rsx! {
            PieChartBody { data: vec![], label: "Facts".to_string(), center_label: None }
        });
        assert!(!html.contains("<svg"));
    }
}
