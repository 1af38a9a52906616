//! Validate that the content collection builds

use anyhow::Result;

use crate::Minipress;

/// Build the collection and report the result.
///
/// This is the deploy-time gate: a nonzero exit means the content must not
/// ship.
pub fn run(app: &Minipress) -> Result<()> {
    let collection = app.build()?;
    println!(
        "OK: {} posts built from {:?}",
        collection.len(),
        app.content_dir
    );
    Ok(())
}
