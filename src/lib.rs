pub mod callout;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod geometry_dump;
pub mod position;
pub mod render;
pub mod style;

pub use callout::{
    Callout, CalloutContent, CalloutGeometry, CalloutPath, PathSegment, compute_callout,
};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, load_config};
pub use error::Error;
pub use geometry::{Point, Size, Viewport};
pub use position::{ConcretePosition, LeaderPosition, LeaderStyle, MoveDirection};
pub use render::render_svg;
pub use style::{CalloutStyle, Paint, Platform};
