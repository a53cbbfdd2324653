use callout_rs_renderer::config::parse_config;
use callout_rs_renderer::geometry_dump::geometry_json;
use callout_rs_renderer::{
    CalloutContent, CalloutGeometry, LeaderPosition, Point, Viewport, compute_callout, render_svg,
};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalloutRenderOptions {
    anchor_x: f32,
    anchor_y: f32,
    viewport_width: Option<f32>,
    viewport_height: Option<f32>,
    #[serde(default)]
    content: CalloutContent,
    leader_position: Option<String>,
    /// Same shape as the CLI config file.
    config: Option<serde_json::Value>,
}

struct Prepared {
    geometry: CalloutGeometry,
    content: CalloutContent,
    config: callout_rs_renderer::Config,
    viewport: Viewport,
}

fn prepare(options: CalloutRenderOptions) -> Result<Prepared, String> {
    let mut config = match options.config {
        Some(raw) => parse_config(&raw.to_string()).map_err(|error| error.to_string())?,
        None => callout_rs_renderer::Config::default(),
    };
    if let Some(raw) = options.leader_position.as_deref() {
        config.leader_position = raw
            .parse::<LeaderPosition>()
            .map_err(|error| error.to_string())?;
    }
    let viewport = Viewport::new(
        options.viewport_width.unwrap_or(config.render.width),
        options.viewport_height.unwrap_or(config.render.height),
    );
    let geometry = compute_callout(
        Point::new(options.anchor_x, options.anchor_y),
        viewport,
        &options.content,
        &config.style,
        config.leader_position,
    );
    Ok(Prepared {
        geometry,
        content: options.content,
        config,
        viewport,
    })
}

fn parse_options(options_json: &str) -> Result<CalloutRenderOptions, JsValue> {
    serde_json::from_str::<CalloutRenderOptions>(options_json)
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

#[wasm_bindgen]
pub fn render_callout_svg(options_json: &str) -> Result<String, JsValue> {
    let prepared = prepare(parse_options(options_json)?).map_err(|error| JsValue::from_str(&error))?;
    Ok(render_svg(
        &prepared.geometry,
        &prepared.content,
        &prepared.config.style,
        &prepared.config.paint,
        prepared.viewport,
    ))
}

#[wasm_bindgen]
pub fn callout_geometry_json(options_json: &str) -> Result<String, JsValue> {
    let prepared = prepare(parse_options(options_json)?).map_err(|error| JsValue::from_str(&error))?;
    geometry_json(&prepared.geometry, prepared.viewport)
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::{CalloutRenderOptions, prepare};
    use callout_rs_renderer::ConcretePosition;

    #[test]
    fn prepares_geometry_from_options() {
        let options: CalloutRenderOptions = serde_json::from_str(
            r#"{
                "anchorX": 390, "anchorY": 150,
                "viewportWidth": 400, "viewportHeight": 300,
                "content": { "title": "Gauge", "detail": "2.4 m" },
                "config": { "style": { "minWidth": 210, "maxWidth": 210, "minHeight": 100, "maxHeight": 100 } }
            }"#,
        )
        .expect("options should parse");
        let prepared = prepare(options).expect("options should resolve");
        assert_eq!(
            prepared.geometry.adjusted_leader_position,
            ConcretePosition::LowerLeft
        );
        assert!(prepared.geometry.path.committed);
    }

    #[test]
    fn rejects_unknown_leader_position() {
        let options: CalloutRenderOptions =
            serde_json::from_str(r#"{ "anchorX": 1, "anchorY": 1, "leaderPosition": "nowhere" }"#)
                .expect("options should parse");
        assert!(prepare(options).is_err());
    }
}
