use serde::Serialize;

use crate::config::LayoutConfig;
use crate::flow::FlowSpec;

/// Computed geometry for one arrow diagram. Recomputed in full on every call;
/// nothing is cached between invocations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrowLayout {
    pub width: f32,
    pub height: f32,
    /// Applied to the group holding every shape and label, so the whole
    /// diagram can be repositioned as one unit.
    pub translate: (f32, f32),
    pub shapes: Vec<ShapeLayout>,
    pub labels: Vec<LabelLayout>,
}

/// One closed outline per flow, in input order. Later flows paint on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeLayout {
    pub path: String,
    pub fill: Option<String>,
    /// The last flow gets a pointed arrow tip instead of a curved merge.
    pub terminal: bool,
}

/// Anchor point plus a directional offset for one flow label. The offset
/// pushes non-terminal labels right, clear of the merge curve, and the
/// terminal label up, clear of the arrow tip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelLayout {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub text: String,
}

/// Lays out the arrow diagram. Returns `None` when there are no flows, which
/// the renderer maps to empty output.
pub fn compute_layout(spec: &FlowSpec, config: &LayoutConfig) -> Option<ArrowLayout> {
    let flows = &spec.flows;
    if flows.is_empty() {
        return None;
    }

    let mut cum_sizes = Vec::with_capacity(flows.len());
    let mut cum_size = 0.0f32;
    for flow in flows {
        cum_sizes.push(cum_size);
        cum_size += flow.size;
    }

    let notch = config.notch_size;
    let straight_height = cum_size;
    let left_margin = cum_size;
    // The merge curve's radius equals the total stacked size, so larger flow
    // sets produce proportionally larger curves.
    let curve = cum_size;

    let last = flows.len() - 1;
    let last_size = flows[last].size;
    let last_notch_width = notch * last_size;
    let last_notch_height = (0.5 + notch) * last_size;

    let total_height = cum_sizes[last] / config.rise_ratio
        + config.top_margin
        + curve
        + last_notch_height
        + straight_height;
    let height = spec.height.unwrap_or(total_height);
    let width = spec
        .width
        .unwrap_or(left_margin + cum_size + last_notch_width + config.right_margin);

    // Drawn flush with the canvas bottom, shifted right so the terminal tip
    // stays on-canvas.
    let translate = (last_size * notch, height - total_height);

    let mut shapes = Vec::with_capacity(flows.len());
    for (index, flow) in flows.iter().enumerate() {
        let size = flow.size;
        let start_x = cum_size - cum_sizes[index];
        let rise = cum_sizes[index] / config.rise_ratio;
        let leg = size * (0.5 + notch);
        let terminal = index == last;
        let path = if terminal {
            // Straight run all the way up, then a triangular arrow tip.
            format!(
                "M {x} {h} h -{s} v -{drop} h -{nw} l {leg} -{leg} l {leg} {leg} h -{nw} Z",
                x = num(start_x),
                h = num(height),
                s = num(size),
                drop = num(straight_height + rise + curve),
                nw = num(size * notch),
                leg = num(leg),
            )
        } else {
            // Straight run, outer arc into the trunk, merge chevron, inner
            // arc back down the far edge.
            format!(
                "M {x} {h} h -{s} v -{drop} a {c} {c} 0 0 1 {c} -{c} v -{nv} l {leg} {leg} l -{leg} {leg} v -{nv} a {i} {i} 0 0 0 -{i} {i} Z",
                x = num(start_x),
                h = num(height),
                s = num(size),
                drop = num(straight_height + rise),
                c = num(curve),
                nv = num(size * notch),
                leg = num(leg),
                i = num(curve - size),
            )
        };
        shapes.push(ShapeLayout {
            path,
            fill: flow.fill.clone(),
            terminal,
        });
    }

    let mut labels = Vec::new();
    for (index, flow) in flows.iter().enumerate() {
        let text = match flow.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => continue,
        };
        let size = flow.size;
        let terminal = index == last;
        let x = if terminal {
            size * 0.5
        } else {
            cum_size - cum_sizes[index] + curve + size * (notch - 0.5)
        };
        let y = height
            - straight_height
            - cum_sizes[index] / config.rise_ratio
            - curve
            + size * if terminal { -(0.5 + notch) } else { 0.5 };
        let (dx, dy) = if terminal {
            (0.0, -config.text_margin_left)
        } else {
            (config.text_margin_left, 0.0)
        };
        labels.push(LabelLayout {
            x,
            y,
            dx,
            dy,
            text: text.to_string(),
        });
    }

    Some(ArrowLayout {
        width,
        height,
        translate,
        shapes,
        labels,
    })
}

fn num(value: f32) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::Flow;

    fn flow(size: f32) -> Flow {
        Flow {
            size,
            fill: None,
            text: None,
        }
    }

    fn spec(flows: Vec<Flow>) -> FlowSpec {
        FlowSpec {
            flows,
            ..FlowSpec::default()
        }
    }

    #[test]
    fn empty_flows_yield_no_layout() {
        let layout = compute_layout(&FlowSpec::default(), &LayoutConfig::default());
        assert!(layout.is_none());
    }

    #[test]
    fn one_shape_per_flow_one_label_per_text() {
        let layout = compute_layout(
            &spec(vec![
                Flow {
                    size: 10.0,
                    fill: Some("#4e79a7".to_string()),
                    text: Some("inflow".to_string()),
                },
                flow(20.0),
                Flow {
                    size: 5.0,
                    fill: None,
                    text: Some("result".to_string()),
                },
            ]),
            &LayoutConfig::default(),
        )
        .unwrap();
        assert_eq!(layout.shapes.len(), 3);
        assert_eq!(layout.labels.len(), 2);
        assert_eq!(layout.shapes[0].fill.as_deref(), Some("#4e79a7"));
    }

    #[test]
    fn blank_text_produces_no_label() {
        let layout = compute_layout(
            &spec(vec![
                Flow {
                    size: 10.0,
                    fill: None,
                    text: Some(String::new()),
                },
                flow(5.0),
            ]),
            &LayoutConfig::default(),
        )
        .unwrap();
        assert!(layout.labels.is_empty());
    }

    #[test]
    fn computed_canvas_dimensions() {
        let layout = compute_layout(
            &spec(vec![flow(10.0), flow(20.0), flow(5.0)]),
            &LayoutConfig::default(),
        )
        .unwrap();
        // cum_sizes = [0, 10, 30], total = 35, lastNotchWidth = 1.5
        assert_eq!(layout.width, 35.0 + 35.0 + 1.5 + 200.0);
        // 30/0.414 + 30 + 35 + 4 + 35
        let expected = 30.0f32 / 0.414 + 104.0;
        assert!((layout.height - expected).abs() < 1e-3, "{}", layout.height);
        // tip shift = 5 * 0.3, flush with the bottom
        assert!((layout.translate.0 - 1.5).abs() < 1e-6);
        assert!(layout.translate.1.abs() < 1e-3);
    }

    #[test]
    fn explicit_dimensions_override_without_rescaling() {
        let base = spec(vec![flow(10.0), flow(20.0), flow(5.0)]);
        let overridden = FlowSpec {
            height: Some(400.0),
            width: Some(900.0),
            ..base.clone()
        };
        let layout = compute_layout(&overridden, &LayoutConfig::default()).unwrap();
        assert_eq!(layout.width, 900.0);
        assert_eq!(layout.height, 400.0);

        let computed = compute_layout(&base, &LayoutConfig::default()).unwrap();
        // Content moves with the bottom edge, it is not rescaled: the extra
        // height shows up in the vertical translation.
        assert!((layout.translate.1 - (400.0 - computed.height)).abs() < 1e-3);
    }

    #[test]
    fn layout_is_idempotent() {
        let input = spec(vec![
            Flow {
                size: 12.0,
                fill: Some("#76b7b2".to_string()),
                text: Some("a".to_string()),
            },
            flow(3.0),
        ]);
        let first = compute_layout(&input, &LayoutConfig::default()).unwrap();
        let second = compute_layout(&input, &LayoutConfig::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn terminal_shape_is_the_pointed_variant() {
        let layout = compute_layout(
            &spec(vec![flow(10.0), flow(20.0), flow(5.0)]),
            &LayoutConfig::default(),
        )
        .unwrap();
        let (tip, merged): (Vec<_>, Vec<_>) =
            layout.shapes.iter().partition(|shape| shape.terminal);
        assert_eq!(tip.len(), 1);
        assert!(layout.shapes.last().unwrap().terminal);
        assert!(!tip[0].path.contains(" a "), "tip has no merge arcs");
        for shape in merged {
            assert_eq!(shape.path.matches(" a ").count(), 2);
        }
    }

    #[test]
    fn single_flow_is_terminal() {
        let layout = compute_layout(&spec(vec![flow(8.0)]), &LayoutConfig::default()).unwrap();
        assert_eq!(layout.shapes.len(), 1);
        assert!(layout.shapes[0].terminal);
    }

    #[test]
    fn path_commands_match_the_fixed_style() {
        // Binary-exact constants keep the expected strings free of float
        // formatting noise.
        let config = LayoutConfig {
            notch_size: 0.25,
            rise_ratio: 0.5,
            ..LayoutConfig::default()
        };
        let layout = compute_layout(&spec(vec![flow(10.0), flow(5.0)]), &config).unwrap();
        // cum = 15, curve = 15, total height = 10/0.5 + 30 + 15 + 3.75 + 15.
        assert_eq!(
            layout.shapes[0].path,
            "M 15 83.75 h -10 v -15 a 15 15 0 0 1 15 -15 v -2.5 l 7.5 7.5 l -7.5 7.5 v -2.5 a 5 5 0 0 0 -5 5 Z"
        );
        assert_eq!(
            layout.shapes[1].path,
            "M 5 83.75 h -5 v -50 h -1.25 l 3.75 -3.75 l 3.75 3.75 h -1.25 Z"
        );
    }

    #[test]
    fn label_offsets_are_asymmetric() {
        let layout = compute_layout(
            &spec(vec![
                Flow {
                    size: 10.0,
                    fill: None,
                    text: Some("tributary".to_string()),
                },
                Flow {
                    size: 5.0,
                    fill: None,
                    text: Some("trunk".to_string()),
                },
            ]),
            &LayoutConfig::default(),
        )
        .unwrap();
        let [tributary, trunk] = layout.labels.as_slice() else {
            panic!("expected two labels");
        };
        assert_eq!((tributary.dx, tributary.dy), (20.0, 0.0));
        assert_eq!((trunk.dx, trunk.dy), (0.0, -20.0));
        // Terminal label sits centered under its own tip.
        assert_eq!(trunk.x, 2.5);
        // Others sit at the merge curve plus the (notch - 0.5) shift.
        assert_eq!(tributary.x, 15.0 + 15.0 + 10.0 * (0.3 - 0.5));
    }
}
