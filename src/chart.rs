//! Donut chart geometry and SVG rendering.
//!
//! Split in two layers: [`wedges`] computes the pure geometry (angles,
//! arc endpoints) so it can be tested without parsing markup, and
//! [`render_donut`] turns that geometry into an SVG document.

use core::f64::consts::{PI, TAU};

/// One chart input: a labeled, colored value.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Label shown in legends.
    pub label: String,
    /// Non-negative magnitude; slices are proportional to it.
    pub value: f64,
    /// Fill color (any SVG color string).
    pub color: String,
}

/// Rendering options for the donut.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Width and height of the square viewport, in user units.
    pub size: f64,
    /// Inner hole radius as a fraction of the outer radius.
    pub hole_ratio: f64,
    /// Background color, used for the hole and the placeholder.
    pub background: String,
    /// Text centered in the hole.
    pub center_label: String,
}

impl Default for ChartOptions {
    #[inline]
    fn default() -> Self {
        Self {
            size: 200.0,
            hole_ratio: 0.6,
            background: "#1a1a2e".to_owned(),
            center_label: "TOTAL".to_owned(),
        }
    }
}

/// A point in the SVG coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Computed geometry for one donut wedge.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    /// Label carried over from the slice.
    pub label: String,
    /// Fill color carried over from the slice.
    pub color: String,
    /// Angle where the wedge begins, in radians from the positive x axis.
    pub start_angle: f64,
    /// Angular extent of the wedge, in radians.
    pub sweep_angle: f64,
    /// Whether the arc spans more than half the circle.
    pub large_arc: bool,
    /// Arc start point on the outer radius.
    pub start: Point,
    /// Arc end point on the outer radius.
    pub end: Point,
}

/// Computes wedge geometry for the given slices.
///
/// Walks the circle once from angle zero, giving each slice a sweep
/// proportional to its share of the total. Slice order is preserved and
/// values are not re-normalized or sorted. Returns an empty vector when
/// the total is zero or negative.
#[inline]
#[must_use]
pub fn wedges(slices: &[Slice], options: &ChartOptions) -> Vec<Wedge> {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    if total <= 0.0_f64 {
        return Vec::new();
    }
    let center = options.size / 2.0_f64;
    let radius = options.size / 2.0_f64;

    let mut start_angle = 0.0_f64;
    slices
        .iter()
        .map(|slice| {
            let sweep_angle = slice.value / total * TAU;
            let wedge = Wedge {
                label: slice.label.clone(),
                color: slice.color.clone(),
                start_angle,
                sweep_angle,
                large_arc: sweep_angle > PI,
                start: point_at(center, center, radius, start_angle),
                end: point_at(center, center, radius, start_angle + sweep_angle),
            };
            start_angle += sweep_angle;
            wedge
        })
        .collect()
}

/// Renders the donut as a standalone SVG document.
///
/// When every value is zero (or there are no slices) a placeholder with
/// a "No data" message is produced instead of a degenerate chart.
#[inline]
#[must_use]
pub fn render_donut(slices: &[Slice], options: &ChartOptions) -> String {
    let computed = wedges(slices, options);
    if computed.is_empty() {
        return render_placeholder(options);
    }

    let size = options.size;
    let center = size / 2.0_f64;
    let outer_radius = size / 2.0_f64;
    let hole_radius = outer_radius * options.hole_ratio;

    let mut parts: Vec<String> = Vec::with_capacity(computed.len() + 4);
    parts.push(svg_open(size));
    for wedge in &computed {
        parts.push(format!(
            r#"<path d="M {center} {center} L {sx} {sy} A {r} {r} 0 {large} 1 {ex} {ey} Z" fill="{color}"/>"#,
            sx = wedge.start.x,
            sy = wedge.start.y,
            r = outer_radius,
            large = u8::from(wedge.large_arc),
            ex = wedge.end.x,
            ey = wedge.end.y,
            color = wedge.color,
        ));
    }
    parts.push(format!(
        r#"<circle cx="{center}" cy="{center}" r="{hole_radius}" fill="{}"/>"#,
        options.background,
    ));
    parts.push(format!(
        r##"<text x="{center}" y="{center}" text-anchor="middle" dominant-baseline="central" fill="#ffffff" font-size="{font_size}">{label}</text>"##,
        font_size = size * 0.08_f64,
        label = options.center_label,
    ));
    parts.push("</svg>".to_owned());
    parts.concat()
}

/// Builds the placeholder document shown when there is nothing to chart.
fn render_placeholder(options: &ChartOptions) -> String {
    let size = options.size;
    let center = size / 2.0_f64;
    let parts = [
        svg_open(size),
        format!(
            r#"<circle cx="{center}" cy="{center}" r="{radius}" fill="{background}"/>"#,
            radius = size / 2.0_f64,
            background = options.background,
        ),
        format!(
            r##"<text x="{center}" y="{center}" text-anchor="middle" dominant-baseline="central" fill="#888888" font-size="{font_size}">No data</text>"##,
            font_size = size * 0.07_f64,
        ),
        "</svg>".to_owned(),
    ];
    parts.concat()
}

/// The opening `<svg>` tag for a square viewport.
fn svg_open(size: f64) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">"#
    )
}

/// Point on a circle of the given radius at the given angle.
fn point_at(cx: f64, cy: f64, radius: f64, angle: f64) -> Point {
    Point {
        x: cx + radius * angle.cos(),
        y: cy + radius * angle.sin(),
    }
}
