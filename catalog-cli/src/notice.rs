use std::fmt;

/// Severity of a transient user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    fn label(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Print a short status line. Errors go to stderr, everything else to
/// stdout.
pub fn notice(severity: Severity, text: &str) {
    log::debug!("notice [{}]: {}", severity, text);
    match severity {
        Severity::Error => eprintln!("[{}] {}", severity, text),
        _ => println!("[{}] {}", severity, text),
    }
}
