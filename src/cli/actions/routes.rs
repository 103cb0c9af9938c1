use crate::router::RouteTable;
use anyhow::Result;
use std::fmt::{self, Write as _};

#[derive(Debug)]
pub struct Args {
    pub table: RouteTable,
    pub json: bool,
}

/// Print the flattened route table.
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn execute(args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(args.table.records())?);
    } else {
        print!("{}", render(&args.table)?);
    }

    Ok(())
}

fn render(table: &RouteTable) -> Result<String, fmt::Error> {
    let width = table
        .records()
        .iter()
        .map(|record| record.path.len() + 2 * record.depth)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in table.records() {
        let path = format!("{}{}", "  ".repeat(record.depth), record.path);
        let auth = if record.requires_auth() { "auth" } else { "public" };
        writeln!(
            out,
            "{path:<width$}  {name:<12}  {auth:<6}  {view}{title}",
            name = record.name().unwrap_or("-"),
            view = record.component,
            title = record
                .title()
                .map(|title| format!("  {title}"))
                .unwrap_or_default(),
        )?;
    }
    Ok(out)
}
