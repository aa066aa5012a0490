//! One-line console status messages for the `vehicle-dash` commands

/// Tag printed in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Warn,
    Error,
    Done,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Status::Warn => "\x1b[1;33m[warn]\x1b[0m",
            Status::Error => "\x1b[1;31m[error]\x1b[0m",
            Status::Done => "\x1b[1;32m[done]\x1b[0m",
        }
    }
}

/// `[tag] title: details`, or just `[tag] title` when there are no details.
pub fn format_status(status: Status, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", status.tag(), title)
    } else {
        format!("{} {}: {}", status.tag(), title, details)
    }
}

pub fn print_status(status: Status, title: &str, details: &str) {
    println!("{}", format_status(status, title, details));
}

/// Warning about something the command worked around.
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_status(
            $crate::cli_messages::Status::Warn,
            $title,
            &format!($($details)*),
        )
    };
}

/// Failure that ends the command.
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_status($crate::cli_messages::Status::Error, $title, $details)
    };
}

/// Command finished.
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_status(
            $crate::cli_messages::Status::Done,
            $title,
            &format!($($details)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_with_details() {
        let line = format_status(Status::Warn, "Config", "using defaults");
        assert!(line.contains("[warn]"));
        assert!(line.ends_with("Config: using defaults"));
    }

    #[test]
    fn test_status_line_without_details() {
        let line = format_status(Status::Done, "Config written", "");
        assert!(line.ends_with("[done]\x1b[0m Config written"));
    }
}
