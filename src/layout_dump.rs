use crate::flow::FlowSpec;
use crate::layout::ArrowLayout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON snapshot of a computed layout, for inspection and diffing against
/// other renderers of the same flows document.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub id: Option<String>,
    pub flow_count: usize,
    pub sizes: Vec<f32>,
    pub width: f32,
    pub height: f32,
    pub translate: [f32; 2],
    pub shapes: Vec<ShapeDump>,
    pub labels: Vec<LabelDump>,
}

#[derive(Debug, Serialize)]
pub struct ShapeDump {
    pub index: usize,
    pub terminal: bool,
    pub fill: Option<String>,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub text: String,
    pub anchor: [f32; 2],
    pub offset: [f32; 2],
}

impl LayoutDump {
    pub fn from_layout(layout: &ArrowLayout, spec: &FlowSpec) -> Self {
        let shapes = layout
            .shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| ShapeDump {
                index,
                terminal: shape.terminal,
                fill: shape.fill.clone(),
                path: shape.path.clone(),
            })
            .collect();

        let labels = layout
            .labels
            .iter()
            .map(|label| LabelDump {
                text: label.text.clone(),
                anchor: [label.x, label.y],
                offset: [label.dx, label.dy],
            })
            .collect();

        LayoutDump {
            id: spec.id.clone(),
            flow_count: spec.flows.len(),
            sizes: spec.flows.iter().map(|flow| flow.size).collect(),
            width: layout.width,
            height: layout.height,
            translate: [layout.translate.0, layout.translate.1],
            shapes,
            labels,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &ArrowLayout, spec: &FlowSpec) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout, spec);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
