//! Extraction of the plot identifier and `Plotly.newPlot` arguments from an
//! HTML fragment produced by the visualization service.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::literal::{parse_literal, LiteralError};
use super::scan;

/// Class carried by the element that hosts the plot.
pub const MARKER_CLASS: &str = "plotly-graph-div";

static DIV_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<div\b[^>]*>").expect("valid div tag pattern"));

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("valid attribute pattern")
});

static NEW_PLOT_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Plotly\.newPlot\(\s*"([^"]+)"\s*,"#).expect("valid newPlot pattern")
});

/// Arguments of the embedded `Plotly.newPlot(target, data, layout, config);` call.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotCall {
    pub target: String,
    pub data: Value,
    pub layout: Value,
    pub config: Value,
}

/// What could be recovered from a fragment.
///
/// `plot_id` and `call` are independent. The three call arguments are
/// all-or-nothing: if any of them fails to parse, `call` is `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedSnippet {
    pub plot_id: Option<String>,
    pub call: Option<PlotCall>,
}

impl ParsedSnippet {
    pub fn data(&self) -> Option<&Value> {
        self.call.as_ref().map(|c| &c.data)
    }

    pub fn layout(&self) -> Option<&Value> {
        self.call.as_ref().map(|c| &c.layout)
    }

    pub fn config(&self) -> Option<&Value> {
        self.call.as_ref().map(|c| &c.config)
    }
}

/// Parse a fragment. Total: malformed input only yields `None` fields.
pub fn parse_plot_html(html: &str) -> ParsedSnippet {
    let plot_id = find_plot_id(html);
    let call = match find_plot_call(html) {
        Some(Ok(call)) => Some(call),
        Some(Err(err)) => {
            tracing::debug!(error = %err, "Discarding plot arguments");
            None
        }
        None => None,
    };
    ParsedSnippet { plot_id, call }
}

/// `id` of the first `<div>` whose class list contains [`MARKER_CLASS`].
fn find_plot_id(html: &str) -> Option<String> {
    DIV_TAG.find_iter(html).find_map(|tag| {
        let mut id = None;
        let mut marked = false;
        for caps in ATTRIBUTE.captures_iter(tag.as_str()) {
            let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            match caps[1].to_ascii_lowercase().as_str() {
                "id" if id.is_none() => id = Some(value),
                "class" => marked |= value.split_whitespace().any(|c| c == MARKER_CLASS),
                _ => {}
            }
        }
        id.filter(|id| marked && !id.is_empty()).map(str::to_string)
    })
}

/// `None` when there is no complete call; `Some(Err)` when its arguments are not literals.
fn find_plot_call(html: &str) -> Option<Result<PlotCall, LiteralError>> {
    let caps = NEW_PLOT_CALL.captures(html)?;
    let target = caps[1].to_string();
    let rest = &html[caps.get(0)?.end()..];

    let close = scan::find_call_end(rest)?;
    if !rest[close + 1..].trim_start().starts_with(';') {
        return None;
    }

    let mut segments = scan::split_top_level(&rest[..close]).into_iter().take(3);
    Some(parse_arguments(
        target,
        segments.next(),
        segments.next(),
        segments.next(),
    ))
}

fn parse_arguments(
    target: String,
    data: Option<&str>,
    layout: Option<&str>,
    config: Option<&str>,
) -> Result<PlotCall, LiteralError> {
    let data = parse_literal(data.unwrap_or(""))?;
    let layout = layout.map_or_else(|| Ok(empty_object()), parse_literal)?;
    let config = config.map_or_else(|| Ok(empty_object()), parse_literal)?;
    Ok(PlotCall {
        target,
        data,
        layout,
        config,
    })
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
