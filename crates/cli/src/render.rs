//! Rendering of query results and domain errors as terminal output.

use std::fmt::Display;
use std::io::{self, Write};

use serde::Serialize;

use stockbook_core::DomainError;
use stockbook_inventory::Item;

use crate::args::OutputFormat;

/// One user-facing line per domain error.
pub fn write_domain_error<W>(out: &mut W, error: &DomainError) -> io::Result<()>
where
    W: Write,
{
    match error {
        DomainError::Validation(message) => writeln!(out, "Invalid value: {message}."),
        DomainError::NotFound => writeln!(out, "Item not found in the inventory."),
        DomainError::InsufficientQuantity {
            requested,
            available,
        } => writeln!(
            out,
            "Not enough quantity available to decrement (requested {requested}, available {available})."
        ),
        DomainError::EmptyInventory => writeln!(out, "Inventory is empty."),
    }
}

/// Render one item on its own line (text) or as a JSON object.
pub fn write_item<W>(out: &mut W, format: OutputFormat, item: &Item) -> io::Result<()>
where
    W: Write,
{
    match format {
        OutputFormat::Text => writeln!(out, "{item}"),
        OutputFormat::Json => write_json(out, item),
    }
}

/// Render one item behind a text label, e.g. extremal query results. JSON
/// output drops the label; the object stands alone.
pub fn write_labeled_item<W>(
    out: &mut W,
    format: OutputFormat,
    label: &str,
    item: &Item,
) -> io::Result<()>
where
    W: Write,
{
    match format {
        OutputFormat::Text => writeln!(out, "{label}{item}"),
        OutputFormat::Json => write_json(out, item),
    }
}

/// Render a sequence of items, one line each (text) or as a JSON array.
pub fn write_items<W, T>(out: &mut W, format: OutputFormat, items: &[T]) -> io::Result<()>
where
    W: Write,
    T: Display + Serialize,
{
    match format {
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{item}")?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, items),
    }
}

/// Render the whole-inventory valuation.
pub fn write_total_value<W>(out: &mut W, format: OutputFormat, total: f64) -> io::Result<()>
where
    W: Write,
{
    match format {
        OutputFormat::Text => writeln!(out, "Total value of the inventory: ${total}"),
        OutputFormat::Json => write_json(out, &serde_json::json!({ "total_value": total })),
    }
}

fn write_json<W, T>(out: &mut W, value: &T) -> io::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{rendered}")
}
