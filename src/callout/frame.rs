use crate::geometry::{Point, Size, Viewport};
use crate::position::ConcretePosition;
use serde::Serialize;

/// Where the callout frame sits for a given leader position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FramePlacement {
    /// Top-left of the frame (body plus leader) in surface coordinates.
    pub origin: Point,
    pub size: Size,
    /// Top-left of the body box inside the frame.
    pub body_offset: Point,
    /// Extra inner left margin reserved for a left-side leader.
    pub content_left_margin: f32,
}

impl FramePlacement {
    /// Whether the frame pokes past the viewport inset by `edge_buffer`.
    pub fn overflows(&self, viewport: Viewport, edge_buffer: f32) -> bool {
        self.origin.x < edge_buffer
            || self.origin.y < edge_buffer
            || self.origin.x + self.size.width > viewport.width - edge_buffer
            || self.origin.y + self.size.height > viewport.height - edge_buffer
    }
}

pub fn frame_size(
    rect: Size,
    leader_width: f32,
    leader_height: f32,
    position: ConcretePosition,
) -> Size {
    match position {
        ConcretePosition::Left => Size::new(rect.width + leader_height, rect.height),
        ConcretePosition::Right => Size::new(rect.width + leader_width, rect.height),
        _ => Size::new(rect.width, rect.height + leader_height),
    }
}

pub fn place_frame(
    anchor: Point,
    rect: Size,
    leader_width: f32,
    leader_height: f32,
    position: ConcretePosition,
) -> FramePlacement {
    let above = anchor.y - (leader_height + rect.height);
    let (x, y) = match position {
        ConcretePosition::Top => (anchor.x - rect.width / 2.0, anchor.y),
        ConcretePosition::Bottom => (anchor.x - rect.width / 2.0, above),
        ConcretePosition::Left => (anchor.x, anchor.y - rect.height / 2.0),
        ConcretePosition::Right => (
            anchor.x - (rect.width + leader_width),
            anchor.y - rect.height / 2.0,
        ),
        ConcretePosition::UpperLeft => (anchor.x - leader_width / 2.0, anchor.y),
        ConcretePosition::UpperRight => (
            anchor.x - leader_width / 2.0 - (rect.width - leader_width),
            anchor.y,
        ),
        ConcretePosition::LowerLeft => (anchor.x - leader_width / 2.0, above),
        ConcretePosition::LowerRight => (anchor.x - rect.width + leader_width / 2.0, above),
    };

    let body_offset = body_offset(leader_height, position);
    FramePlacement {
        origin: Point::new(x, y),
        size: frame_size(rect, leader_width, leader_height, position),
        body_offset,
        content_left_margin: body_offset.x,
    }
}

/// Top-left of the body box relative to the frame origin.
pub fn body_offset(leader_height: f32, position: ConcretePosition) -> Point {
    let x = if position == ConcretePosition::Left {
        leader_height
    } else {
        0.0
    };
    let y = if position.is_upper() { leader_height } else { 0.0 };
    Point::new(x, y)
}
