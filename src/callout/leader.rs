use crate::geometry::{Point, Size, Viewport};
use crate::position::{ConcretePosition, LeaderPosition, MoveDirection};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Past {
    Beyond,
    Before,
}

/// Narrow (horizontal) or short (vertical) callouts bypass the guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guard {
    pub fraction: f32,
    pub past: Past,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: ConcretePosition,
    pub direction: MoveDirection,
    pub to: ConcretePosition,
    pub guard: Guard,
}

const ONE_THIRD: f32 = 1.0 / 3.0;
const HALF: f32 = 0.5;
const TWO_THIRDS: f32 = 2.0 / 3.0;

const fn cell(
    from: ConcretePosition,
    direction: MoveDirection,
    to: ConcretePosition,
    fraction: f32,
    past: Past,
) -> Transition {
    Transition {
        from,
        direction,
        to,
        guard: Guard { fraction, past },
    }
}

use ConcretePosition as P;
use MoveDirection as D;

/// `(position, direction) -> (guard, position)`. Cells not listed have no move.
pub const TRANSITIONS: [Transition; 20] = [
    // Right edge overflow: anchor must be far enough right.
    cell(P::UpperRight, D::Right, P::Top, ONE_THIRD, Past::Beyond),
    cell(P::Top, D::Right, P::UpperLeft, TWO_THIRDS, Past::Beyond),
    cell(P::Right, D::Right, P::Left, HALF, Past::Beyond),
    cell(P::LowerRight, D::Right, P::Bottom, ONE_THIRD, Past::Beyond),
    cell(P::Bottom, D::Right, P::LowerLeft, TWO_THIRDS, Past::Beyond),
    // Left edge overflow.
    cell(P::UpperLeft, D::Left, P::Top, TWO_THIRDS, Past::Before),
    cell(P::Top, D::Left, P::UpperRight, ONE_THIRD, Past::Before),
    cell(P::Left, D::Left, P::Right, HALF, Past::Before),
    cell(P::LowerLeft, D::Left, P::Bottom, TWO_THIRDS, Past::Before),
    cell(P::Bottom, D::Left, P::LowerRight, ONE_THIRD, Past::Before),
    // Bottom edge overflow.
    cell(P::UpperLeft, D::Down, P::Left, ONE_THIRD, Past::Beyond),
    cell(P::Left, D::Down, P::LowerLeft, TWO_THIRDS, Past::Beyond),
    cell(P::Top, D::Down, P::Bottom, HALF, Past::Beyond),
    cell(P::UpperRight, D::Down, P::Right, ONE_THIRD, Past::Beyond),
    cell(P::Right, D::Down, P::LowerRight, TWO_THIRDS, Past::Beyond),
    // Top edge overflow.
    cell(P::LowerLeft, D::Up, P::Left, TWO_THIRDS, Past::Before),
    cell(P::Left, D::Up, P::UpperLeft, ONE_THIRD, Past::Before),
    cell(P::Bottom, D::Up, P::Top, HALF, Past::Before),
    cell(P::LowerRight, D::Up, P::Right, TWO_THIRDS, Past::Before),
    cell(P::Right, D::Up, P::UpperRight, ONE_THIRD, Past::Before),
];

pub fn lookup(from: ConcretePosition, direction: MoveDirection) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|cell| cell.from == from && cell.direction == direction)
}

#[derive(Debug, Clone, Copy)]
pub struct MoveContext {
    pub anchor: Point,
    pub frame: Size,
    pub viewport: Viewport,
}

impl MoveContext {
    fn relaxed(&self, direction: MoveDirection) -> bool {
        if direction.is_horizontal() {
            self.frame.width <= self.viewport.width / 2.0
        } else {
            self.frame.height <= self.viewport.height / 2.0
        }
    }

    fn guard_holds(&self, direction: MoveDirection, guard: Guard) -> bool {
        if self.relaxed(direction) {
            return true;
        }
        let (coordinate, extent) = if direction.is_horizontal() {
            (self.anchor.x, self.viewport.width)
        } else {
            (self.anchor.y, self.viewport.height)
        };
        let threshold = extent * guard.fraction;
        match guard.past {
            Past::Beyond => coordinate > threshold,
            Past::Before => coordinate < threshold,
        }
    }
}

pub fn attempt_move(
    current: ConcretePosition,
    direction: MoveDirection,
    ctx: &MoveContext,
) -> Option<ConcretePosition> {
    let Some(transition) = lookup(current, direction) else {
        debug!(from = %current, ?direction, "no transition for leader position");
        return None;
    };
    let allowed = ctx.guard_holds(direction, transition.guard);
    debug!(
        from = %current,
        to = %transition.to,
        ?direction,
        fraction = transition.guard.fraction,
        allowed,
        "leader move guard evaluated"
    );
    allowed.then_some(transition.to)
}

pub fn horizontal_overflow(anchor: Point, frame: Size, viewport: Viewport) -> Option<MoveDirection> {
    if anchor.x + frame.width > viewport.width {
        Some(MoveDirection::Right)
    } else if anchor.x - frame.width < 0.0 {
        Some(MoveDirection::Left)
    } else {
        None
    }
}

pub fn vertical_overflow(anchor: Point, frame: Size, viewport: Viewport) -> Option<MoveDirection> {
    if anchor.y + frame.height > viewport.height {
        Some(MoveDirection::Down)
    } else if anchor.y - frame.height < 0.0 {
        Some(MoveDirection::Up)
    } else {
        None
    }
}

/// A fixed request is returned untouched. `Automatic` applies at most one
/// move, and the vertical check only runs when the horizontal one did not move.
pub fn resolve_leader_position(
    requested: LeaderPosition,
    default_position: ConcretePosition,
    anchor: Point,
    frame: Size,
    viewport: Viewport,
) -> ConcretePosition {
    if let Some(fixed) = requested.concrete() {
        return fixed;
    }

    let ctx = MoveContext {
        anchor,
        frame,
        viewport,
    };
    let horizontal = horizontal_overflow(anchor, frame, viewport)
        .and_then(|direction| attempt_move(default_position, direction, &ctx));
    let resolved = horizontal
        .or_else(|| {
            vertical_overflow(anchor, frame, viewport)
                .and_then(|direction| attempt_move(default_position, direction, &ctx))
        })
        .unwrap_or(default_position);

    debug!(
        requested = %requested,
        default = %default_position,
        resolved = %resolved,
        anchor_x = anchor.x,
        anchor_y = anchor.y,
        frame_width = frame.width,
        frame_height = frame.height,
        "resolved leader position"
    );
    resolved
}
