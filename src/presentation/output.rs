//! Decision Rendering
//!
//! Renders the final decision line as plain text or a single JSON object.

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::selector::Decision;

/// Trait for rendering the final decision
pub trait DecisionRenderer {
    fn render(&self, decision: &Decision, out: &mut dyn Write) -> io::Result<()>;
}

/// Plain text: `Tonights Dinner is: <name>` or the no-meals message
pub struct TextRenderer;

impl DecisionRenderer for TextRenderer {
    fn render(&self, decision: &Decision, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", decision.message())
    }
}

/// One JSON line for scripting
pub struct JsonRenderer;

impl DecisionRenderer for JsonRenderer {
    fn render(&self, decision: &Decision, out: &mut dyn Write) -> io::Result<()> {
        let value = serde_json::json!({
            "event": "decision",
            "meal": decision.meal().map(|meal| meal.name()),
            "survivors": decision.survivors(),
        });
        writeln!(out, "{}", value)
    }
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn DecisionRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
