use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry constants for the arrow layout. The defaults encode the widget's
/// one fixed visual style; changing them changes the rendered appearance, not
/// just its scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Clearance above the terminal arrow tip.
    pub top_margin: f32,
    /// Blank space to the right of the flow stack, where labels land.
    pub right_margin: f32,
    /// Fraction of a flow's size used for its merge notch.
    pub notch_size: f32,
    /// Offset pushing labels clear of the geometry (right for merge labels,
    /// up for the terminal label).
    pub text_margin_left: f32,
    /// Empirical ratio relating a flow's vertical run to its cumulative
    /// horizontal position; approximates the 45-degree-ish merge slope.
    pub rise_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_margin: 30.0,
            right_margin: 200.0,
            notch_size: 0.3,
            text_margin_left: 20.0,
            rise_ratio: 0.414,
        }
    }
}

/// Fallback raster size for PNG output when the SVG carries no usable size.
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

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    text_color: Option<String>,
    default_fill: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutVariables {
    top_margin: Option<f32>,
    right_margin: Option<f32>,
    notch_size: Option<f32>,
    text_margin_left: Option<f32>,
    rise_ratio: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutVariables>,
    render: Option<RenderConfig>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "modern" {
            config.theme = Theme::modern();
        } else if theme_name == "plain" || theme_name == "default" {
            config.theme = Theme::plain();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = vars.default_fill {
            config.theme.default_fill = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    if let Some(vars) = parsed.layout {
        if let Some(v) = vars.top_margin {
            config.layout.top_margin = v;
        }
        if let Some(v) = vars.right_margin {
            config.layout.right_margin = v;
        }
        if let Some(v) = vars.notch_size {
            config.layout.notch_size = v;
        }
        if let Some(v) = vars.text_margin_left {
            config.layout.text_margin_left = v;
        }
        if let Some(v) = vars.rise_ratio {
            config.layout.rise_ratio = v;
        }
    }

    if let Some(render) = parsed.render {
        config.render = render;
    }

    Ok(config)
}
