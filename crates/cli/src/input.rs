//! Prompted reads with re-prompting on malformed input.
//!
//! Every helper returns `Ok(None)` at end of input so the session can wind
//! down cleanly instead of spinning on a closed stdin.

use std::io::{self, BufRead, ErrorKind, Write};

/// Read one line with the trailing line ending stripped. `Ok(None)` on EOF.
pub fn read_line<R>(input: &mut R) -> io::Result<Option<String>>
where
    R: BufRead,
{
    let mut buffer = String::new();
    let bytes_read = loop {
        match input.read_line(&mut buffer) {
            Ok(bytes_read) => break bytes_read,
            // Keep the session alive on Ctrl-C style interrupts.
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        }
    };

    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim_end_matches(['\n', '\r']).to_owned()))
}

/// Prompt until a non-blank name is supplied. The line is stored as typed,
/// minus the line ending.
pub fn prompt_name<R, W>(input: &mut R, out: &mut W) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "Enter item name: ")?;
    out.flush()?;
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
        write!(out, "Name cannot be blank. Enter item name: ")?;
        out.flush()?;
    }
}

/// Prompt until the line parses as a non-negative integer.
pub fn prompt_u64<R, W>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<u64>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<u64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                write!(out, "Invalid input. Please enter a valid number: ")?;
                out.flush()?;
            }
        }
    }
}

/// Prompt until the line parses as a signed integer.
pub fn prompt_i64<R, W>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<i64>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                write!(out, "Invalid input. Please enter a valid number: ")?;
                out.flush()?;
            }
        }
    }
}

/// Prompt until the line parses as a finite, non-negative number. `"nan"`
/// and `"inf"` parse as floats, so finiteness is checked explicitly.
pub fn prompt_price<R, W>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<f64>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => return Ok(Some(value)),
            Ok(value) if value.is_finite() => {
                write!(out, "Price cannot be negative. Please enter a valid number: ")?;
                out.flush()?;
            }
            _ => {
                write!(out, "Invalid input. Please enter a valid number: ")?;
                out.flush()?;
            }
        }
    }
}

/// Prompt until the line parses as a finite number. Negative values are
/// allowed; range bounds below zero simply match nothing.
pub fn prompt_f64<R, W>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<f64>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => return Ok(Some(value)),
            _ => {
                write!(out, "Invalid input. Please enter a valid number: ")?;
                out.flush()?;
            }
        }
    }
}

/// Read menu choice numbers until one parses. The menu itself has already
/// printed the prompt, so this carries no label of its own.
pub fn read_choice_number<R, W>(input: &mut R, out: &mut W) -> io::Result<Option<u32>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<u32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                write!(out, "Invalid input. Please enter a valid number: ")?;
                out.flush()?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_line_endings() {
        let mut input = Cursor::new("Apple\r\n");
        assert_eq!(read_line(&mut input).unwrap(), Some("Apple".to_string()));
    }

    #[test]
    fn read_line_signals_eof_with_none() {
        let mut input = Cursor::new("");
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn prompt_name_reprompts_on_blank_lines() {
        let mut input = Cursor::new("\n   \nApple\n");
        let mut out = Vec::new();
        let name = prompt_name(&mut input, &mut out).unwrap();
        assert_eq!(name, Some("Apple".to_string()));

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("Name cannot be blank.").count(), 2);
    }

    #[test]
    fn prompt_name_keeps_inner_spacing_as_typed() {
        let mut input = Cursor::new("Wood Screw\n");
        let mut out = Vec::new();
        let name = prompt_name(&mut input, &mut out).unwrap();
        assert_eq!(name, Some("Wood Screw".to_string()));
    }

    #[test]
    fn prompt_u64_reprompts_until_a_number_arrives() {
        let mut input = Cursor::new("abc\n-3\n7\n");
        let mut out = Vec::new();
        let value = prompt_u64(&mut input, &mut out, "Enter item quantity: ").unwrap();
        assert_eq!(value, Some(7));

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("Invalid input.").count(), 2);
    }

    #[test]
    fn prompt_u64_returns_none_at_eof() {
        let mut input = Cursor::new("garbage\n");
        let mut out = Vec::new();
        let value = prompt_u64(&mut input, &mut out, "Enter item quantity: ").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn prompt_i64_accepts_negative_numbers() {
        let mut input = Cursor::new("-4\n");
        let mut out = Vec::new();
        let value = prompt_i64(&mut input, &mut out, "Enter quantity change: ").unwrap();
        assert_eq!(value, Some(-4));
    }

    #[test]
    fn prompt_price_rejects_negative_then_accepts() {
        let mut input = Cursor::new("-2.5\n2.5\n");
        let mut out = Vec::new();
        let value = prompt_price(&mut input, &mut out, "Enter item price: $").unwrap();
        assert_eq!(value, Some(2.5));

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Price cannot be negative."));
    }

    #[test]
    fn prompt_price_rejects_non_finite_input() {
        let mut input = Cursor::new("nan\ninf\n1.0\n");
        let mut out = Vec::new();
        let value = prompt_price(&mut input, &mut out, "Enter item price: $").unwrap();
        assert_eq!(value, Some(1.0));

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("Invalid input.").count(), 2);
    }

    #[test]
    fn prompt_f64_allows_negative_range_bounds() {
        let mut input = Cursor::new("-10.0\n");
        let mut out = Vec::new();
        let value = prompt_f64(&mut input, &mut out, "Enter minimum price: $").unwrap();
        assert_eq!(value, Some(-10.0));
    }

    #[test]
    fn choice_reader_reprompts_on_non_numeric_input() {
        let mut input = Cursor::new("exit\n13\n");
        let mut out = Vec::new();
        let value = read_choice_number(&mut input, &mut out).unwrap();
        assert_eq!(value, Some(13));

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Invalid input. Please enter a valid number: "));
    }
}
