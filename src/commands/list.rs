//! List built posts

use anyhow::Result;

use crate::Minipress;

/// Print the built posts, newest first.
pub fn run(app: &Minipress, json: bool) -> Result<()> {
    let collection = app.build()?;

    if json {
        println!("{}", serde_json::to_string_pretty(collection.list_all())?);
        return Ok(());
    }

    println!("Posts ({}):", collection.len());
    for post in collection.list_all() {
        let marker = if post.protected { " [protected]" } else { "" };
        println!(
            "  {} - {} by {}{} [{}]",
            post.date.format("%Y-%m-%d"),
            post.title,
            post.author,
            marker,
            post.path
        );
    }

    Ok(())
}
