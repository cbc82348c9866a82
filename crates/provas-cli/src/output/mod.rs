use serde::Serialize;

use crate::cli::OutputFormat;

pub mod text;

/// Plain-text rendering for `--format text`.
pub trait RenderText {
    fn render_text(&self) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + RenderText>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(value.render_text()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + RenderText>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
