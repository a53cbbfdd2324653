use crate::callout::{CalloutGeometry, PathSegment};
use crate::geometry::Viewport;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryDump {
    pub viewport: [f32; 2],
    pub anchor: [f32; 2],
    pub requested_position: String,
    pub adjusted_leader_position: String,
    pub rect_width: f32,
    pub rect_height: f32,
    pub frame_origin: [f32; 2],
    pub frame_size: [f32; 2],
    pub leader_tip: [f32; 2],
    pub content_left_margin: f32,
    pub overflows_edge_buffer: bool,
    pub committed: bool,
    /// Surface-coordinate outline.
    pub path: Vec<SegmentDump>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum SegmentDump {
    MoveTo { to: [f32; 2] },
    LineTo { to: [f32; 2] },
    ArcTo { corner: [f32; 2], to: [f32; 2], radius: f32 },
}

impl GeometryDump {
    pub fn from_geometry(geometry: &CalloutGeometry, viewport: Viewport) -> Self {
        let surface = geometry.surface_path();
        let mut path = Vec::with_capacity(surface.segments.len() + 1);
        path.push(SegmentDump::MoveTo {
            to: [surface.start.x, surface.start.y],
        });
        path.extend(surface.segments.iter().map(|segment| match segment {
            PathSegment::LineTo { to } => SegmentDump::LineTo { to: [to.x, to.y] },
            PathSegment::ArcTo { corner, to, radius } => SegmentDump::ArcTo {
                corner: [corner.x, corner.y],
                to: [to.x, to.y],
                radius: *radius,
            },
        }));

        GeometryDump {
            viewport: [viewport.width, viewport.height],
            anchor: [geometry.anchor.x, geometry.anchor.y],
            requested_position: geometry.requested_position.to_string(),
            adjusted_leader_position: geometry.adjusted_leader_position.to_string(),
            rect_width: geometry.rect_width,
            rect_height: geometry.rect_height,
            frame_origin: [geometry.frame.origin.x, geometry.frame.origin.y],
            frame_size: [geometry.frame.size.width, geometry.frame.size.height],
            leader_tip: [geometry.leader_tip.x, geometry.leader_tip.y],
            content_left_margin: geometry.frame.content_left_margin,
            overflows_edge_buffer: geometry.overflows_edge_buffer,
            committed: surface.committed,
            path,
        }
    }
}

pub fn geometry_json(geometry: &CalloutGeometry, viewport: Viewport) -> anyhow::Result<String> {
    let dump = GeometryDump::from_geometry(geometry, viewport);
    Ok(serde_json::to_string_pretty(&dump)?)
}

pub fn write_geometry_dump(
    path: Option<&Path>,
    geometry: &CalloutGeometry,
    viewport: Viewport,
) -> anyhow::Result<()> {
    let dump = GeometryDump::from_geometry(geometry, viewport);
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &dump)?;
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callout::{CalloutContent, compute_callout};
    use crate::geometry::Point;
    use crate::position::LeaderPosition;
    use crate::style::CalloutStyle;

    #[test]
    fn dump_starts_with_move_and_reports_positions() {
        let viewport = Viewport::new(400.0, 300.0);
        let geometry = compute_callout(
            Point::new(200.0, 150.0),
            viewport,
            &CalloutContent::default(),
            &CalloutStyle::compact(),
            LeaderPosition::Automatic,
        );
        let json = geometry_json(&geometry, viewport).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["requestedPosition"], "automatic");
        assert_eq!(value["adjustedLeaderPosition"], "bottom");
        assert_eq!(value["path"][0]["op"], "moveTo");
        assert_eq!(value["path"].as_array().map(Vec::len), Some(12));
        assert_eq!(value["committed"], true);
        assert_eq!(value["leaderTip"][0], 200.0);
        assert_eq!(value["leaderTip"][1], 150.0);
    }
}
