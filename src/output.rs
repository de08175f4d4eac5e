//! Terminal rendering: status tags, change-set display, and the output
//! modes of the `get` commands.

use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};

use crate::reconcile::ChangeSet;

const RULE: &str =
    "--------------------------------------------------------------------------------------";

/// `[TAG] message` with a colored tag, the house style of every
/// command's progress output.
pub fn tagged(tag: &str, color: Color, message: &str) {
    println!("[{}] {}", tag.with(color), message);
}

pub fn ok(message: &str) {
    tagged("OK", Color::Green, message);
}

pub fn warn(message: &str) {
    tagged("WARNING", Color::Yellow, message);
}

/// Fatal errors go to stderr so piped output stays clean.
pub fn error(message: &str) {
    eprintln!("[{}] {}", "ERROR".with(Color::Red), message);
}

/// Highlight a value the way single-value results are printed.
pub fn highlight(value: &str) -> String {
    format!("[{}]", value.with(Color::Yellow))
}

/// Render the change list and validation failures ahead of the
/// confirmation prompt.
pub fn render_change_set(set: &ChangeSet) {
    println!("{RULE}");
    for entry in &set.changes {
        println!(
            "[{}] {} -> {}",
            entry.field.with(Color::Green),
            entry.before.to_string().with(Color::Red),
            entry.after.to_string().with(Color::Yellow),
        );
    }
    for failure in &set.failures {
        warn(failure);
    }
    println!("{RULE}");
    println!("Options matching the current values are not listed.");
}

/// Output modes shared by the `get` listing commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayOpts {
    /// Print the key field without color.
    pub raw: bool,
    /// Print the full JSON object on one line.
    pub verbose: bool,
    /// Pretty-print the full JSON object; overrides the other modes.
    pub pretty: bool,
}

/// Print one fetched resource according to the selected mode. `key`
/// names the field highlighted in the default and raw modes.
pub fn print_resource(value: &serde_json::Value, key: &str, opts: DisplayOpts) -> Result<()> {
    if opts.pretty {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("serialize pretty json")?
        );
        return Ok(());
    }
    if opts.verbose {
        println!("{value}");
        return Ok(());
    }

    let field = value
        .get(key)
        .with_context(|| format!("the response has no <{key}> field"))?;
    let text = match field {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if opts.raw {
        println!("{text}");
    } else {
        println!("{}", highlight(&text));
    }
    Ok(())
}

/// Look up a single parameter (and optional sub-parameter) of a fetched
/// resource. `all` dumps the whole object.
pub fn print_parameter(
    value: &serde_json::Value,
    parameter: &str,
    sub_parameter: Option<&str>,
    pretty: bool,
) -> Result<()> {
    if parameter == "all" {
        let rendered = if pretty {
            serde_json::to_string_pretty(value).context("serialize pretty json")?
        } else {
            value.to_string()
        };
        println!("{rendered}");
        return Ok(());
    }

    let field = value.get(parameter).with_context(|| {
        format!("the parameter <{parameter}> does not exist for this element")
    })?;
    let field = match sub_parameter {
        Some(sub) => field.get(sub).with_context(|| {
            format!(
                "the sub-parameter <{sub}> does not exist under the parameter <{parameter}>"
            )
        })?,
        None => field,
    };
    match field {
        serde_json::Value::String(s) => println!("{s}"),
        other => println!("{other}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/output_tests.rs"]
mod tests;
