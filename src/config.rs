use crate::error::{Error, Result};
use crate::position::LeaderPosition;
use crate::style::{CalloutStyle, Paint, Platform};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub style: CalloutStyle,
    pub paint: Paint,
    pub render: RenderConfig,
    pub leader_position: LeaderPosition,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StyleOverrides {
    border_width: Option<f32>,
    corner_radius: Option<f32>,
    leader_width: Option<f32>,
    leader_height: Option<f32>,
    min_width: Option<f32>,
    min_height: Option<f32>,
    max_width: Option<f32>,
    max_height: Option<f32>,
    edge_buffer: Option<f32>,
    platform: Option<String>,
    default_position: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaintOverrides {
    fill: Option<String>,
    stroke: Option<String>,
    text_color: Option<String>,
    detail_color: Option<String>,
    font_family: Option<String>,
    font_size: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    preset: Option<String>,
    style: Option<StyleOverrides>,
    paint: Option<PaintOverrides>,
    leader_position: Option<String>,
    width: Option<f32>,
    height: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents).map_err(|err| match err {
        Error::ConfigParse { message, .. } => Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })
}

/// Parses a JSON config; JSON5 (comments, trailing commas) is accepted as a fallback.
pub fn parse_config(contents: &str) -> Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(contents).map_err(|_| Error::ConfigParse {
            path: Default::default(),
            message: json_err.to_string(),
        })?,
    };
    apply_config_file(Config::default(), parsed)
}

fn apply_config_file(mut config: Config, parsed: ConfigFile) -> Result<Config> {
    if let Some(name) = parsed.preset.as_deref() {
        config.style =
            CalloutStyle::from_preset(name).ok_or_else(|| Error::UnknownPreset(name.to_string()))?;
    }

    if let Some(style) = parsed.style {
        let target = &mut config.style;
        if let Some(v) = style.border_width {
            target.border_width = v;
        }
        if let Some(v) = style.corner_radius {
            target.corner_radius = v;
        }
        if let Some(v) = style.leader_width {
            target.leader_width = v;
        }
        if let Some(v) = style.leader_height {
            target.leader_height = v;
        }
        if let Some(v) = style.min_width {
            target.min_width = v;
        }
        if let Some(v) = style.min_height {
            target.min_height = v;
        }
        if let Some(v) = style.max_width {
            target.max_width = v;
        }
        if let Some(v) = style.max_height {
            target.max_height = v;
        }
        if let Some(v) = style.edge_buffer {
            target.edge_buffer = v;
        }
        if let Some(v) = style.platform.as_deref() {
            target.platform = parse_platform(v)?;
        }
        if let Some(v) = style.default_position.as_deref() {
            let position: LeaderPosition = v.parse()?;
            target.default_position = position.concrete().ok_or(Error::AutomaticDefault)?;
        }
    }

    if let Some(paint) = parsed.paint {
        let target = &mut config.paint;
        if let Some(v) = paint.fill {
            target.fill = v;
        }
        if let Some(v) = paint.stroke {
            target.stroke = v;
        }
        if let Some(v) = paint.text_color {
            target.text_color = v;
        }
        if let Some(v) = paint.detail_color {
            target.detail_color = v;
        }
        if let Some(v) = paint.font_family {
            target.font_family = v;
        }
        if let Some(v) = paint.font_size {
            target.font_size = v;
        }
        if let Some(v) = paint.background {
            target.background = v;
        }
    }

    if let Some(v) = parsed.leader_position.as_deref() {
        config.leader_position = v.parse()?;
    }
    if let Some(v) = parsed.width {
        config.render.width = v;
    }
    if let Some(v) = parsed.height {
        config.render.height = v;
    }

    Ok(config)
}

pub fn parse_platform(token: &str) -> Result<Platform> {
    Platform::from_token(token).ok_or_else(|| Error::UnknownPlatform(token.to_string()))
}
