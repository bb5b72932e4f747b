use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &impl serde::Serialize) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &impl serde::Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// `error` event for a command that stopped before producing its report.
pub fn error_event(command: &str, message: &str, exit_code: i32) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "command": command,
        "message": message,
        "exit_code": exit_code,
    })
}
