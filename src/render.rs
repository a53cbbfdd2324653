use crate::callout::{CalloutContent, CalloutGeometry, CalloutPath, PathSegment};
use crate::geometry::Viewport;
use crate::style::{CalloutStyle, Paint};
use anyhow::Result;
use std::path::Path;

/// Renders the viewport with the callout on it. Nothing is painted for an
/// uncommitted outline.
pub fn render_svg(
    geometry: &CalloutGeometry,
    content: &CalloutContent,
    style: &CalloutStyle,
    paint: &Paint,
    viewport: Viewport,
) -> String {
    let mut svg = String::new();
    let width = viewport.width.max(1.0);
    let height = viewport.height.max(1.0);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        paint.background
    ));

    let surface = geometry.surface_path();
    if surface.committed {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.2}\" data-leader=\"{}\"/>",
            path_data(&surface),
            paint.fill,
            paint.stroke,
            style.border_width,
            geometry.adjusted_leader_position
        ));
        svg.push_str(&content_svg(geometry, content, style, paint));
    }

    svg.push_str(&format!(
        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"3\" fill=\"{}\"/>",
        geometry.anchor.x, geometry.anchor.y, paint.stroke
    ));
    svg.push_str("</svg>");
    svg
}

/// SVG path data for an outline. Arcs are quarter circles turning clockwise.
pub fn path_data(path: &CalloutPath) -> String {
    if path.segments.is_empty() {
        return String::new();
    }
    let mut d = String::new();
    d.push_str(&format!("M {:.2} {:.2}", path.start.x, path.start.y));
    for segment in &path.segments {
        match segment {
            PathSegment::LineTo { to } => {
                d.push_str(&format!(" L {:.2} {:.2}", to.x, to.y));
            }
            PathSegment::ArcTo { to, radius, .. } => {
                d.push_str(&format!(
                    " A {radius:.2} {radius:.2} 0 0 1 {:.2} {:.2}",
                    to.x, to.y
                ));
            }
        }
    }
    d.push_str(" Z");
    d
}

fn content_svg(
    geometry: &CalloutGeometry,
    content: &CalloutContent,
    style: &CalloutStyle,
    paint: &Paint,
) -> String {
    let body = geometry.body_origin();
    let inset = style.corner_radius;
    let x = body.x + inset;
    let mut y = body.y + inset + paint.font_size;
    let mut text = String::new();

    if !content.title.is_empty() {
        text.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"600\" fill=\"{}\">{}</text>",
            paint.font_family,
            paint.font_size,
            paint.text_color,
            escape_xml(&content.title)
        ));
        y += paint.font_size * 1.4;
    }
    if !content.detail.is_empty() {
        text.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            paint.font_family,
            paint.font_size * 0.9,
            paint.detail_color,
            escape_xml(&content.detail)
        ));
    }
    text
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, paint: &Paint, viewport: Viewport) -> Result<()> {
    let mut opt = usvg::Options::default();
    if let Some(family) = paint.font_family.split(',').next() {
        opt.font_family = family.trim().trim_matches('"').to_string();
    }
    opt.default_size = usvg::Size::from_wh(viewport.width, viewport.height)
        .or_else(|| usvg::Size::from_wh(800.0, 600.0))
        .ok_or_else(|| anyhow::anyhow!("Invalid default canvas size"))?;

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _paint: &Paint, _viewport: Viewport) -> Result<()> {
    Err(anyhow::anyhow!(
        "PNG output requires the `png` feature"
    ))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callout::compute_callout;
    use crate::geometry::Point;
    use crate::position::LeaderPosition;

    fn sample() -> (CalloutGeometry, CalloutContent, CalloutStyle) {
        let style = CalloutStyle::standard();
        let content = CalloutContent::new("Harbor <North>", "Depth 12 m").with_natural_size(140.0, 40.0);
        let geometry = compute_callout(
            Point::new(300.0, 250.0),
            Viewport::new(600.0, 400.0),
            &content,
            &style,
            LeaderPosition::Automatic,
        );
        (geometry, content, style)
    }

    #[test]
    fn render_svg_basic() {
        let (geometry, content, style) = sample();
        let svg = render_svg(
            &geometry,
            &content,
            &style,
            &Paint::default(),
            Viewport::new(600.0, 400.0),
        );
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<path d=\"M "));
        assert!(svg.contains("Harbor &lt;North&gt;"));
        assert!(svg.contains("data-leader=\"bottom\""));
    }

    #[test]
    fn uncommitted_outline_is_not_painted() {
        let (mut geometry, content, style) = sample();
        geometry.path.committed = false;
        let svg = render_svg(
            &geometry,
            &content,
            &style,
            &Paint::default(),
            Viewport::new(600.0, 400.0),
        );
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("Harbor"));
    }

    #[test]
    fn path_data_closes_and_uses_arcs() {
        let (geometry, _, _) = sample();
        let d = path_data(&geometry.path);
        assert!(d.starts_with("M "));
        assert!(d.ends_with(" Z"));
        assert_eq!(d.matches(" A ").count(), 4);
        assert_eq!(d.matches(" L ").count(), 7);
    }
}
