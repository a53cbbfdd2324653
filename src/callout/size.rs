use crate::geometry::{Size, Viewport};
use crate::style::{CalloutStyle, Platform};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalloutContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub natural_width: f32,
    #[serde(default)]
    pub natural_height: f32,
}

impl CalloutContent {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            natural_width: 0.0,
            natural_height: 0.0,
        }
    }

    pub fn with_natural_size(mut self, width: f32, height: f32) -> Self {
        self.natural_width = width;
        self.natural_height = height;
        self
    }

    /// Zero or negative sizes mean the host has not measured the content yet.
    pub fn is_measured(&self) -> bool {
        !self.title.is_empty()
            && !self.detail.is_empty()
            && self.natural_width > 0.0
            && self.natural_height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimits {
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
}

pub fn size_limits(style: &CalloutStyle, viewport: Viewport) -> SizeLimits {
    let corners = 2.0 * style.corner_radius;
    // Keep room for the border, both corners and three leaders of context.
    let margin = style.border_width + corners + 3.0 * style.leader_height;

    let max_width = (style.max_width - corners)
        .min(viewport.width - margin)
        .max(0.0);
    let max_height = (style.max_height - corners)
        .min(viewport.height - margin)
        .max(0.0);

    SizeLimits {
        min_width: style.min_width.min(max_width).max(0.0),
        min_height: style.min_height.min(max_height).max(0.0),
        max_width,
        max_height,
    }
}

/// Width and height of the body box, leader excluded.
pub fn resolve_size(content: &CalloutContent, style: &CalloutStyle, viewport: Viewport) -> Size {
    let limits = size_limits(style, viewport);
    let padding = 2.0 * style.corner_radius;

    let (width, height) = if content.is_measured() {
        let content_width = content
            .natural_width
            .clamp(limits.min_width, limits.max_width);
        let content_height = content
            .natural_height
            .clamp(limits.min_height, limits.max_height);
        let mut width = content_width + padding;
        if style.platform == Platform::Ios {
            // iOS lays the title row out with a leader-width inset on both sides.
            width += 2.0 * style.leader_width;
        }
        (width, content_height + padding)
    } else {
        (limits.min_width + padding, limits.min_height + padding)
    };

    let size = Size::new(
        width.min(style.max_width).max(0.0),
        height.min(style.max_height).max(0.0),
    );
    trace!(
        min_width = limits.min_width,
        max_width = limits.max_width,
        min_height = limits.min_height,
        max_height = limits.max_height,
        measured = content.is_measured(),
        width = size.width,
        height = size.height,
        "resolved callout size"
    );
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_style() -> CalloutStyle {
        CalloutStyle {
            border_width: 0.0,
            corner_radius: 10.0,
            leader_width: 30.0,
            leader_height: 15.0,
            min_width: 210.0,
            min_height: 100.0,
            max_width: 210.0,
            max_height: 100.0,
            ..CalloutStyle::standard()
        }
    }

    #[test]
    fn unmeasured_content_collapses_to_minimum() {
        let size = resolve_size(
            &CalloutContent::default(),
            &fixed_style(),
            Viewport::new(400.0, 300.0),
        );
        assert_eq!(size, Size::new(210.0, 100.0));
    }

    #[test]
    fn negative_natural_size_counts_as_unmeasured() {
        let content = CalloutContent::new("Title", "Detail").with_natural_size(-5.0, 40.0);
        assert!(!content.is_measured());
        let style = CalloutStyle {
            max_width: 400.0,
            max_height: 300.0,
            min_width: 80.0,
            min_height: 40.0,
            ..fixed_style()
        };
        let size = resolve_size(&content, &style, Viewport::new(1000.0, 1000.0));
        assert_eq!(size, Size::new(100.0, 60.0));
    }

    #[test]
    fn title_alone_is_not_measured() {
        let content = CalloutContent::new("Title", "").with_natural_size(150.0, 50.0);
        assert!(!content.is_measured());
    }

    #[test]
    fn measured_content_is_clamped_between_limits() {
        let style = CalloutStyle {
            min_width: 50.0,
            min_height: 20.0,
            max_width: 200.0,
            max_height: 120.0,
            ..fixed_style()
        };
        let viewport = Viewport::new(1000.0, 1000.0);
        let limits = size_limits(&style, viewport);
        assert_eq!(limits.max_width, 180.0);
        assert_eq!(limits.max_height, 100.0);

        for natural in [0.5, 10.0, 75.0, 180.0, 500.0, 10_000.0] {
            let content = CalloutContent::new("T", "D").with_natural_size(natural, natural);
            let size = resolve_size(&content, &style, viewport);
            let content_width = size.width - 20.0;
            let content_height = size.height - 20.0;
            assert!(content_width >= limits.min_width && content_width <= limits.max_width);
            assert!(content_height >= limits.min_height && content_height <= limits.max_height);
            assert!(size.width <= style.max_width && size.height <= style.max_height);
        }
    }

    #[test]
    fn small_viewport_shrinks_the_limits() {
        let style = CalloutStyle {
            border_width: 2.0,
            ..fixed_style()
        };
        let limits = size_limits(&style, Viewport::new(150.0, 90.0));
        // 150 - (2 + 20 + 45)
        assert_eq!(limits.max_width, 83.0);
        assert_eq!(limits.min_width, 83.0);
        // 90 - 67 = 23, below style.max_height - 20
        assert_eq!(limits.max_height, 23.0);
    }

    #[test]
    fn tiny_viewport_never_goes_negative() {
        let limits = size_limits(&fixed_style(), Viewport::new(10.0, 10.0));
        assert_eq!(limits.max_width, 0.0);
        assert_eq!(limits.min_height, 0.0);
        let size = resolve_size(&CalloutContent::default(), &fixed_style(), Viewport::new(10.0, 10.0));
        assert_eq!(size, Size::new(20.0, 20.0));
    }

    #[test]
    fn ios_adds_two_leader_widths_to_measured_width() {
        let base = CalloutStyle {
            min_width: 50.0,
            min_height: 20.0,
            max_width: 400.0,
            max_height: 200.0,
            ..fixed_style()
        };
        let ios = CalloutStyle {
            platform: Platform::Ios,
            ..base.clone()
        };
        let content = CalloutContent::new("Title", "Detail").with_natural_size(120.0, 40.0);
        let viewport = Viewport::new(1000.0, 1000.0);
        let desktop = resolve_size(&content, &base, viewport);
        let phone = resolve_size(&content, &ios, viewport);
        assert_eq!(desktop.width, 140.0);
        assert_eq!(phone.width, 200.0);
        assert_eq!(desktop.height, phone.height);

        // Unmeasured content ignores the platform inset.
        let empty = CalloutContent::default();
        assert_eq!(
            resolve_size(&empty, &base, viewport),
            resolve_size(&empty, &ios, viewport)
        );
    }
}
