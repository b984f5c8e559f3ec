//! Handling of the HTML fragments returned by the visualization service.
//!
//! - [`extract`]: recover the plot id and `Plotly.newPlot` arguments (diagnostic only).
//! - [`literal`]: the literal-only value parser used by the extractor.
//! - [`render`]: sandbox frame description used by `PlotEmbed`.

pub mod extract;
pub mod literal;
pub mod render;
mod scan;

pub use extract::{parse_plot_html, ParsedSnippet, PlotCall};
pub use literal::{parse_literal, LiteralError};
pub use render::{SandboxFrame, SandboxPolicy};
