//! Catch-and-report wrapper applied at every store operation boundary.
//!
//! Faults never escape an operation: [`guarded`] runs it, and on error hands
//! the error to a [`Reporter`], which prints it as `[ERROR] <message>`. The
//! caller gets `None` and carries on.

use tracing::debug;

use crate::error::{Error, Result};

/// Marker prefixed to every reported fault.
pub const ERROR_MARKER: &str = "[ERROR]";

/// Sink for faults caught at an operation boundary.
pub trait Reporter {
    /// Report a fault raised by `operation`.
    fn report_error(&mut self, operation: &str, err: &Error);
}

/// Run `op`, reporting any error it returns.
///
/// The reporter is lent to `op` so operations that also talk to the user
/// (prompts, confirmations) can use it without a second borrow.
pub fn guarded<T, P, F>(reporter: &mut P, operation: &str, op: F) -> Option<T>
where
    P: Reporter + ?Sized,
    F: FnOnce(&mut P) -> Result<T>,
{
    match op(reporter) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(operation = %operation, error = %err, "operation failed");
            reporter.report_error(operation, &err);
            None
        }
    }
}

/// Format a fault as a console line.
#[must_use]
pub fn error_line(err: &Error) -> String {
    format!("{ERROR_MARKER} {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Collected {
        lines: Vec<String>,
    }

    impl Reporter for Collected {
        fn report_error(&mut self, _operation: &str, err: &Error) {
            self.lines.push(error_line(err));
        }
    }

    #[test]
    fn test_guarded_passes_value_through() {
        let mut reporter = Collected::default();
        let value = guarded(&mut reporter, "test", |_| Ok(42));
        assert_eq!(value, Some(42));
        assert!(reporter.lines.is_empty());
    }

    #[test]
    fn test_guarded_reports_error() {
        let mut reporter = Collected::default();
        let value: Option<()> = guarded(&mut reporter, "add", |_| {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        });
        assert!(value.is_none());
        assert_eq!(reporter.lines, vec!["[ERROR] I/O error: denied".to_string()]);
    }

    #[test]
    fn test_guarded_lends_reporter() {
        let mut reporter = Collected::default();
        let value = guarded(&mut reporter, "nested", |inner| {
            inner.lines.push("prompted".to_string());
            Ok(inner.lines.len())
        });
        assert_eq!(value, Some(1));
    }

    #[test]
    fn test_error_line_prefix() {
        let err = Error::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(error_line(&err), "[ERROR] I/O error: denied");
    }
}
