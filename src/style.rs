use crate::position::ConcretePosition;
use serde::{Deserialize, Serialize};

/// Host platform. Only affects horizontal padding of measured content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Platform {
    #[default]
    Desktop,
    Android,
    Ios,
}

impl Platform {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "desktop" | "windows" | "macos" | "linux" => Some(Self::Desktop),
            "android" => Some(Self::Android),
            "ios" => Some(Self::Ios),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalloutStyle {
    pub border_width: f32,
    pub corner_radius: f32,
    pub leader_width: f32,
    pub leader_height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
    pub edge_buffer: f32,
    pub platform: Platform,
    /// Position used when `Automatic` is requested and no move is needed.
    pub default_position: ConcretePosition,
}

impl CalloutStyle {
    pub fn standard() -> Self {
        Self {
            border_width: 2.0,
            corner_radius: 10.0,
            leader_width: 30.0,
            leader_height: 15.0,
            min_width: 210.0,
            min_height: 100.0,
            max_width: 300.0,
            max_height: 200.0,
            edge_buffer: 10.0,
            platform: Platform::Desktop,
            default_position: ConcretePosition::Bottom,
        }
    }

    pub fn compact() -> Self {
        Self {
            border_width: 1.0,
            corner_radius: 6.0,
            leader_width: 16.0,
            leader_height: 8.0,
            min_width: 120.0,
            min_height: 48.0,
            max_width: 220.0,
            max_height: 120.0,
            edge_buffer: 6.0,
            platform: Platform::Desktop,
            default_position: ConcretePosition::Bottom,
        }
    }

    pub fn from_preset(name: &str) -> Option<Self> {
        match name {
            "default" | "standard" => Some(Self::standard()),
            "compact" => Some(Self::compact()),
            _ => None,
        }
    }
}

impl Default for CalloutStyle {
    fn default() -> Self {
        Self::standard()
    }
}

/// Paint settings for the SVG/PNG output. Not consulted by the geometry engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    pub fill: String,
    pub stroke: String,
    pub text_color: String,
    pub detail_color: String,
    pub font_family: String,
    pub font_size: f32,
    pub background: String,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill: "#FFFFFF".to_string(),
            stroke: "#7A8AA6".to_string(),
            text_color: "#1C2430".to_string(),
            detail_color: "#4A5568".to_string(),
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            background: "#F4F6FA".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve_by_name() {
        assert_eq!(CalloutStyle::from_preset("default"), Some(CalloutStyle::standard()));
        assert_eq!(CalloutStyle::from_preset("compact"), Some(CalloutStyle::compact()));
        assert!(CalloutStyle::from_preset("huge").is_none());
    }

    #[test]
    fn style_deserializes_camel_case() {
        let style: CalloutStyle = serde_json::from_str(
            r#"{
                "borderWidth": 1, "cornerRadius": 4, "leaderWidth": 12, "leaderHeight": 6,
                "minWidth": 50, "minHeight": 20, "maxWidth": 100, "maxHeight": 60,
                "edgeBuffer": 2, "platform": "ios", "defaultPosition": "upperLeft"
            }"#,
        )
        .unwrap();
        assert_eq!(style.platform, Platform::Ios);
        assert_eq!(style.default_position, ConcretePosition::UpperLeft);
        assert_eq!(style.leader_width, 12.0);
    }
}
