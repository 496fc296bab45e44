use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub text_color: String,
    /// Fill used for flows that do not specify one.
    pub default_fill: String,
    /// Canvas background; "none" leaves the canvas transparent.
    pub background: String,
}

impl Theme {
    /// Matches how the widget looked in a plain browser document: black
    /// shapes and text, no background rect.
    pub fn plain() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 16.0,
            text_color: "#000000".to_string(),
            default_fill: "#000000".to_string(),
            background: "none".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            text_color: "#1C2430".to_string(),
            default_fill: "#7A8AA6".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}
