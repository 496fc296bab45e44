use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One arrow segment: its proportional thickness, fill color, and optional
/// label drawn near the segment's notch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flow {
    pub size: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The component's declarative property surface. `id` identifies the widget
/// instance to a host framework and plays no part in the layout. `height` and
/// `width`, when set, override the computed canvas dimensions without
/// rescaling the content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub flows: Vec<Flow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

#[derive(Debug, Error)]
pub enum FlowSpecError {
    #[error("invalid flows document: {0}")]
    Parse(#[from] json5::Error),
    #[error("flow {index}: size must be a positive finite number, got {size}")]
    InvalidSize { index: usize, size: f32 },
}

/// Parses a flows document (JSON or JSON5) and validates it. Parsing is the
/// validation boundary: the layout functions assume sizes are positive.
pub fn parse_flow_spec(input: &str) -> Result<FlowSpec, FlowSpecError> {
    let spec: FlowSpec = json5::from_str(input)?;
    for (index, flow) in spec.flows.iter().enumerate() {
        if !flow.size.is_finite() || flow.size <= 0.0 {
            return Err(FlowSpecError::InvalidSize {
                index,
                size: flow.size,
            });
        }
    }
    Ok(spec)
}
