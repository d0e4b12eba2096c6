use std::io;
use std::sync::{Mutex, PoisonError};

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

/// Activate buffering. While active, log lines are stored instead of being
/// printed to stderr, so they don't tear through the TUI.
pub fn activate() {
    *BUFFER.lock().unwrap_or_else(PoisonError::into_inner) = Some(Vec::new());
}

/// Deactivate buffering and return all collected lines.
pub fn drain() -> Vec<String> {
    BUFFER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .unwrap_or_default()
}

pub fn is_active() -> bool {
    BUFFER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Writer handed to the tracing subscriber. Each formatted event arrives as
/// one `write` call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter;

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = BUFFER.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(lines) = guard.as_mut() {
            let text = String::from_utf8_lossy(buf);
            lines.extend(
                text.lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string),
            );
            Ok(buf.len())
        } else {
            drop(guard);
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // One test owns the global buffer so parallel tests can't interleave.
    #[test]
    fn test_activate_buffers_and_drain_releases() {
        activate();
        assert!(is_active());
        LogWriter.write_all(b"WARN first line\n").unwrap();
        LogWriter.write_all(b"INFO second\n\n").unwrap();

        let lines = drain();
        assert_eq!(lines, vec!["WARN first line", "INFO second"]);
        assert!(!is_active());
        assert!(drain().is_empty());
    }
}
