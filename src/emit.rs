//! Renders category totals as JSON.

use crate::model::CategoryTotal;
use anyhow::Context;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

const INDENT: &[u8] = b"    ";

/// Renders the totals as a JSON array indented by four spaces, followed by a newline.
pub fn to_json(totals: &[CategoryTotal]) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    totals
        .serialize(&mut ser)
        .context("Unable to serialize category totals")?;
    buf.push(b'\n');
    Ok(buf)
}

/// Writes the rendered JSON to `out` in a single write and flushes it.
pub fn emit(totals: &[CategoryTotal], mut out: impl Write) -> anyhow::Result<()> {
    let json = to_json(totals)?;
    out.write_all(&json).context("Unable to write JSON output")?;
    out.flush().context("Unable to flush JSON output")
}
