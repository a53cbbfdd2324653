use crate::geometry::{Point, Size};
use crate::position::{ConcretePosition, LeaderStyle};
use serde::Serialize;

use super::frame::body_offset;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PathSegment {
    LineTo { to: Point },
    /// Quarter circle rounding `corner`, ending at `to`. Same shape as the
    /// canvas `arcTo(corner, to, radius)` call.
    ArcTo { corner: Point, to: Point, radius: f32 },
}

impl PathSegment {
    pub fn end(&self) -> Point {
        match self {
            Self::LineTo { to } | Self::ArcTo { to, .. } => *to,
        }
    }

    fn translated(self, dx: f32, dy: f32) -> Self {
        match self {
            Self::LineTo { to } => Self::LineTo {
                to: to.offset(dx, dy),
            },
            Self::ArcTo { corner, to, radius } => Self::ArcTo {
                corner: corner.offset(dx, dy),
                to: to.offset(dx, dy),
                radius,
            },
        }
    }
}

/// Closed callout outline. Painting is only allowed once `committed` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalloutPath {
    pub start: Point,
    pub segments: Vec<PathSegment>,
    pub committed: bool,
}

impl CalloutPath {
    pub fn end(&self) -> Point {
        self.segments.last().map_or(self.start, PathSegment::end)
    }

    pub fn is_closed(&self) -> bool {
        !self.segments.is_empty() && self.start.approx_eq(self.end())
    }

    pub fn commit(&mut self) {
        self.committed = true;
    }

    pub fn translated(&self, offset: Point) -> Self {
        Self {
            start: self.start.offset(offset.x, offset.y),
            segments: self
                .segments
                .iter()
                .map(|segment| segment.translated(offset.x, offset.y))
                .collect(),
            committed: self.committed,
        }
    }
}

/// Segment count of a closed outline for each leader style.
pub fn segment_count(style: LeaderStyle) -> usize {
    match style {
        // 4 sides + 4 arcs + 3 triangle lines
        LeaderStyle::MidEdge => 11,
        // 4 sides + 3 arcs + 2 notch lines
        LeaderStyle::CornerNotch => 9,
    }
}

struct PathWriter {
    start: Point,
    segments: Vec<PathSegment>,
}

impl PathWriter {
    fn new(start: Point, style: LeaderStyle) -> Self {
        Self {
            start,
            segments: Vec::with_capacity(segment_count(style)),
        }
    }

    fn line(&mut self, x: f32, y: f32) {
        self.segments.push(PathSegment::LineTo {
            to: Point::new(x, y),
        });
    }

    fn arc(&mut self, corner: (f32, f32), to: (f32, f32), radius: f32) {
        self.segments.push(PathSegment::ArcTo {
            corner: Point::new(corner.0, corner.1),
            to: Point::new(to.0, to.1),
            radius,
        });
    }

    fn finish(self) -> CalloutPath {
        CalloutPath {
            start: self.start,
            segments: self.segments,
            committed: false,
        }
    }
}

/// Leader base widths fitted to the straight part of the edge they sit on.
/// A body shrunk to its corners keeps a closed outline with a zero-width base.
#[derive(Debug, Clone, Copy)]
struct LeaderBase {
    half_across: f32,
    half_along: f32,
    notch: f32,
}

impl LeaderBase {
    fn fit(rect: Size, corner_radius: f32, leader_width: f32) -> Self {
        let half = leader_width / 2.0;
        Self {
            half_across: half.min(((rect.width - 2.0 * corner_radius) / 2.0).max(0.0)),
            half_along: half.min(((rect.height - 2.0 * corner_radius) / 2.0).max(0.0)),
            notch: leader_width.min((rect.width - corner_radius).max(0.0)),
        }
    }
}

/// Builds the outline in frame-local coordinates, clockwise from the top edge
/// just right of the top-left corner. The returned path is not committed.
pub fn build_path(
    rect: Size,
    corner_radius: f32,
    leader_width: f32,
    leader_height: f32,
    position: ConcretePosition,
) -> CalloutPath {
    let body = body_offset(leader_height, position);
    let (left, top) = (body.x, body.y);
    let right = left + rect.width;
    let bottom = top + rect.height;
    let cx = left + rect.width / 2.0;
    let cy = top + rect.height / 2.0;
    let r = corner_radius;
    let base = LeaderBase::fit(rect, r, leader_width);
    let (half, notch) = (base.half_across, base.notch);
    let lh = leader_height;

    let start = if position == ConcretePosition::UpperLeft {
        Point::new(left + notch, top)
    } else {
        Point::new(left + r, top)
    };
    let mut path = PathWriter::new(start, position.leader_style());

    // top edge, left to right
    if position == ConcretePosition::Top {
        path.line(cx - half, top);
        path.line(cx, top - lh);
        path.line(cx + half, top);
    }
    if position == ConcretePosition::UpperRight {
        path.line(right - notch, top);
        path.line(right - notch / 2.0, top - lh);
        path.line(right, top);
    } else {
        path.line(right - r, top);
        path.arc((right, top), (right, top + r), r);
    }

    // right edge, top to bottom
    if position == ConcretePosition::Right {
        path.line(right, cy - base.half_along);
        path.line(right + lh, cy);
        path.line(right, cy + base.half_along);
    }
    if position == ConcretePosition::LowerRight {
        path.line(right, bottom);
        path.line(right - notch / 2.0, bottom + lh);
        path.line(right - notch, bottom);
    } else {
        path.line(right, bottom - r);
        path.arc((right, bottom), (right - r, bottom), r);
    }

    // bottom edge, right to left
    if position == ConcretePosition::Bottom {
        path.line(cx + half, bottom);
        path.line(cx, bottom + lh);
        path.line(cx - half, bottom);
    }
    if position == ConcretePosition::LowerLeft {
        path.line(left + notch, bottom);
        path.line(left + notch / 2.0, bottom + lh);
        path.line(left, bottom);
    } else {
        path.line(left + r, bottom);
        path.arc((left, bottom), (left, bottom - r), r);
    }

    // left edge, bottom to top
    if position == ConcretePosition::Left {
        path.line(left, cy + base.half_along);
        path.line(left - lh, cy);
        path.line(left, cy - base.half_along);
    }
    if position == ConcretePosition::UpperLeft {
        path.line(left, top);
        path.line(left + notch / 2.0, top - lh);
        path.line(start.x, start.y);
    } else {
        path.line(left, top + r);
        path.arc((left, top), (start.x, start.y), r);
    }

    path.finish()
}

/// Point the leader tip touches, in frame-local coordinates.
pub fn leader_apex(
    rect: Size,
    corner_radius: f32,
    leader_width: f32,
    leader_height: f32,
    position: ConcretePosition,
) -> Point {
    let body = body_offset(leader_height, position);
    let (left, top) = (body.x, body.y);
    let right = left + rect.width;
    let bottom = top + rect.height;
    let half_notch = LeaderBase::fit(rect, corner_radius, leader_width).notch / 2.0;
    match position {
        ConcretePosition::UpperLeft => Point::new(left + half_notch, top - leader_height),
        ConcretePosition::Top => Point::new(left + rect.width / 2.0, top - leader_height),
        ConcretePosition::UpperRight => Point::new(right - half_notch, top - leader_height),
        ConcretePosition::Right => Point::new(right + leader_height, top + rect.height / 2.0),
        ConcretePosition::LowerRight => Point::new(right - half_notch, bottom + leader_height),
        ConcretePosition::Bottom => Point::new(left + rect.width / 2.0, bottom + leader_height),
        ConcretePosition::LowerLeft => Point::new(left + half_notch, bottom + leader_height),
        ConcretePosition::Left => Point::new(left - leader_height, top + rect.height / 2.0),
    }
}
