//! Single-slice pie chart for the predicted category, rendered straight to an SVG fragment.

use serde::Serialize;
use std::fmt::Write;

const SIZE: f64 = 320.0;
const RADIUS: f64 = 110.0;
const CENTER_Y: f64 = 170.0;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slice: Slice,
}

impl PieChart {
    pub fn single(title: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        PieChart {
            title: title.into(),
            slice: Slice { label: label.into(), color: color.into() },
        }
    }

    pub fn to_svg(&self) -> String {
        let cx = SIZE / 2.0;
        let title = escape(&self.title);
        let label = escape(&self.slice.label);
        let color = escape(&self.slice.color);

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {SIZE} {h}" role="img" aria-label="{title}">"#,
            h = CENTER_Y + RADIUS + 50.0,
        );
        let _ = write!(
            svg,
            r#"<text x="{cx}" y="30" text-anchor="middle" font-size="18" font-family="sans-serif">{title}</text>"#,
        );
        // the whole disc is the one category
        let _ = write!(svg, r#"<circle cx="{cx}" cy="{CENTER_Y}" r="{RADIUS}" fill="{color}"/>"#);
        let _ = write!(
            svg,
            r#"<rect x="20" y="{ry}" width="14" height="14" fill="{color}"/><text x="42" y="{y}" font-size="14" font-family="sans-serif">{label} (100.0%)</text>"#,
            ry = CENTER_Y + RADIUS + 18.0,
            y = CENTER_Y + RADIUS + 30.0,
        );
        svg.push_str("</svg>");
        svg
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
