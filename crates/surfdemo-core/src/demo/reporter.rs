use tracing::debug;

use crate::consts::LOG_TARGET;

/// Sink for the human-readable demo transcript.
pub trait Reporter {
    /// Emit one line of output.
    fn line(&mut self, line: &str);

    /// Emit a possibly multi-line message, one line at a time.
    fn message(&mut self, message: &str) {
        for line in message.split('\n') {
            self.line(line);
        }
    }
}

/// Sends every line to the debug log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn line(&mut self, line: &str) {
        debug!(target: LOG_TARGET, "{line}");
    }
}

/// Collects lines in memory.
impl Reporter for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::Reporter;

    #[test]
    fn test_message_splits_lines() {
        let mut out: Vec<String> = Vec::new();
        out.message("error: \nseed index out of range");
        assert_eq!(out, vec!["error: ", "seed index out of range"]);
    }
}
