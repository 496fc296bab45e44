#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod flow;
pub mod layout;
pub mod layout_dump;
pub mod render;
pub mod theme;

pub use config::{Config, LayoutConfig, RenderConfig, load_config};
pub use flow::{Flow, FlowSpec, FlowSpecError, parse_flow_spec};
pub use layout::{ArrowLayout, LabelLayout, ShapeLayout, compute_layout};
pub use render::{render_svg, write_output_svg};
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
