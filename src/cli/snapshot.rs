//! Headless snapshot of one view.

use color_eyre::Result;
use std::io::Write;

use crate::controller::ViewKind;
use crate::pipeline::Pipeline;

/// Run one fetch cycle for `view` and write the result as pretty JSON.
pub async fn write_snapshot<W: Write>(pipeline: &Pipeline, view: ViewKind, out: &mut W) -> Result<()> {
    let data = pipeline.load(view).await?;
    serde_json::to_writer_pretty(&mut *out, &data)?;
    writeln!(out)?;
    Ok(())
}
