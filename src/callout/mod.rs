pub mod frame;
pub mod leader;
pub mod path;
pub mod size;

use crate::geometry::{Point, Size, Viewport};
use crate::position::{ConcretePosition, LeaderPosition};
use crate::style::CalloutStyle;
use serde::Serialize;
use tracing::{debug, warn};

pub use frame::{FramePlacement, place_frame};
pub use leader::resolve_leader_position;
pub use path::{CalloutPath, PathSegment, build_path, leader_apex};
pub use size::{CalloutContent, resolve_size};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalloutGeometry {
    pub anchor: Point,
    pub rect_width: f32,
    pub rect_height: f32,
    pub requested_position: LeaderPosition,
    pub adjusted_leader_position: ConcretePosition,
    pub frame: FramePlacement,
    /// Outline in frame-local coordinates.
    pub path: CalloutPath,
    /// Leader tip in surface coordinates.
    pub leader_tip: Point,
    /// The frame extends past the viewport inset by the style's edge buffer.
    pub overflows_edge_buffer: bool,
}

impl CalloutGeometry {
    pub fn rect(&self) -> Size {
        Size::new(self.rect_width, self.rect_height)
    }

    pub fn surface_path(&self) -> CalloutPath {
        self.path.translated(self.frame.origin)
    }

    pub fn body_origin(&self) -> Point {
        self.frame
            .origin
            .offset(self.frame.body_offset.x, self.frame.body_offset.y)
    }
}

struct Provisional {
    rect: Size,
    position: ConcretePosition,
    frame: FramePlacement,
    path: CalloutPath,
}

fn provisional(
    anchor: Point,
    viewport: Viewport,
    content: &CalloutContent,
    style: &CalloutStyle,
    requested: LeaderPosition,
) -> Provisional {
    let rect = resolve_size(content, style, viewport);
    let position = requested.concrete().unwrap_or(style.default_position);
    let frame = place_frame(anchor, rect, style.leader_width, style.leader_height, position);
    let path = build_path(
        rect,
        style.corner_radius,
        style.leader_width,
        style.leader_height,
        position,
    );
    Provisional {
        rect,
        position,
        frame,
        path,
    }
}

fn finalize(
    anchor: Point,
    viewport: Viewport,
    style: &CalloutStyle,
    requested: LeaderPosition,
    provisional: Provisional,
) -> CalloutGeometry {
    let Provisional {
        rect,
        position: provisional_position,
        frame: provisional_frame,
        mut path,
    } = provisional;

    let resolved = resolve_leader_position(
        requested,
        style.default_position,
        anchor,
        provisional_frame.size,
        viewport,
    );
    let frame = place_frame(anchor, rect, style.leader_width, style.leader_height, resolved);
    if resolved != provisional_position {
        debug!(
            from = %provisional_position,
            to = %resolved,
            "leader moved, rebuilding outline"
        );
        path = build_path(
            rect,
            style.corner_radius,
            style.leader_width,
            style.leader_height,
            resolved,
        );
    }
    path.commit();
    let leader_tip = leader_apex(
        rect,
        style.corner_radius,
        style.leader_width,
        style.leader_height,
        resolved,
    )
    .offset(frame.origin.x, frame.origin.y);

    let overflows_edge_buffer = frame.overflows(viewport, style.edge_buffer);
    if overflows_edge_buffer {
        warn!(
            position = %resolved,
            origin_x = frame.origin.x,
            origin_y = frame.origin.y,
            width = frame.size.width,
            height = frame.size.height,
            viewport_width = viewport.width,
            viewport_height = viewport.height,
            "callout frame extends past the edge buffer"
        );
    }

    CalloutGeometry {
        anchor,
        rect_width: rect.width,
        rect_height: rect.height,
        requested_position: requested,
        adjusted_leader_position: resolved,
        frame,
        path,
        leader_tip,
        overflows_edge_buffer,
    }
}

/// Runs one full placement pass. Pure: identical inputs give identical output.
pub fn compute_callout(
    anchor: Point,
    viewport: Viewport,
    content: &CalloutContent,
    style: &CalloutStyle,
    requested: LeaderPosition,
) -> CalloutGeometry {
    let pass = provisional(anchor, viewport, content, style, requested);
    finalize(anchor, viewport, style, requested, pass)
}

/// Holds the inputs between passes and reruns the placement on show and on
/// anchor changes while visible.
#[derive(Debug, Clone)]
pub struct Callout {
    style: CalloutStyle,
    content: CalloutContent,
    viewport: Viewport,
    requested: LeaderPosition,
    anchor: Point,
    screen_offset: Point,
    visible: bool,
    geometry: Option<CalloutGeometry>,
}

impl Callout {
    pub fn new(style: CalloutStyle) -> Self {
        Self {
            style,
            content: CalloutContent::default(),
            viewport: Viewport::default(),
            requested: LeaderPosition::Automatic,
            anchor: Point::default(),
            screen_offset: Point::default(),
            visible: false,
            geometry: None,
        }
    }

    pub fn style(&self) -> &CalloutStyle {
        &self.style
    }

    /// Takes effect on the next pass.
    pub fn set_style(&mut self, style: CalloutStyle) {
        self.style = style;
    }

    pub fn set_content(&mut self, content: CalloutContent) {
        self.content = content;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_leader_position(&mut self, requested: LeaderPosition) {
        self.requested = requested;
    }

    pub fn set_screen_offset(&mut self, dx: f32, dy: f32) {
        self.screen_offset = Point::new(dx, dy);
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn effective_anchor(&self) -> Point {
        self.anchor
            .offset(self.screen_offset.x, self.screen_offset.y)
    }

    /// Records the new anchor and, when visible, reruns the pass.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
        if self.visible {
            self.refresh();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn geometry(&self) -> Option<&CalloutGeometry> {
        self.geometry.as_ref()
    }

    pub fn show(&mut self) -> &CalloutGeometry {
        if !self.visible {
            debug!("showing callout");
        }
        self.visible = true;
        self.refresh()
    }

    pub fn dismiss(&mut self) {
        if self.visible {
            debug!("dismissing callout");
        }
        self.visible = false;
        self.geometry = None;
    }

    fn refresh(&mut self) -> &CalloutGeometry {
        let anchor = self.effective_anchor();
        // Overwrite any uncommitted state from an earlier pass.
        let pass = provisional(
            anchor,
            self.viewport,
            &self.content,
            &self.style,
            self.requested,
        );
        let geometry = finalize(anchor, self.viewport, &self.style, self.requested, pass);
        self.geometry.insert(geometry)
    }
}

impl Default for Callout {
    fn default() -> Self {
        Self::new(CalloutStyle::default())
    }
}
