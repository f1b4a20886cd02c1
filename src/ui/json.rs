//! NDJSON output utilities for CI mode.
//!
//! Every event is one JSON object per line on stdout: a `start` event, one
//! `check` event per recorded check, and a final `complete` event.

use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_event_emits_one_line_of_valid_json() {
        let mut buffer = Vec::new();
        write_event(
            &mut buffer,
            &serde_json::json!({"event": "start", "command": "audit"}),
        )
        .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["event"], "start");
        assert_eq!(parsed["command"], "audit");
    }

    #[test]
    fn write_event_produces_ndjson_stream() {
        let mut buffer = Vec::new();
        write_event(&mut buffer, &serde_json::json!({"event": "start"})).unwrap();
        write_event(&mut buffer, &serde_json::json!({"event": "complete"})).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(serde_json::from_str::<serde_json::Value>(line).is_ok());
        }
    }
}
