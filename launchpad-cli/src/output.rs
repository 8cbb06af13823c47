//! Terminal output behind a trait
//!
//! Commands write through [`Output`] so tests can capture what a launch
//! printed and on which stream.

use crate::error::CliResult;

/// Destination of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

pub trait Output: Send + Sync {
    /// Write one line to `stream`
    fn write_line(&self, stream: Stream, line: &str) -> CliResult<()>;

    fn print(&self, msg: &str) -> CliResult<()> {
        self.write_line(Stream::Stdout, msg)
    }

    /// Failure lines go to stderr so `--format json` output stays parseable
    fn error(&self, msg: &str) -> CliResult<()> {
        self.write_line(Stream::Stderr, msg)
    }

    fn print_json(&self, value: &serde_json::Value) -> CliResult<()> {
        self.print(&serde_json::to_string_pretty(value)?)
    }

    fn success(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("✅ {}", msg))
    }

    fn warning(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("⚠️  {}", msg))
    }

    fn info(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("ℹ️  {}", msg))
    }

    /// Title underlined with `=`
    fn header(&self, title: &str) -> CliResult<()> {
        let rule = "=".repeat(title.chars().count());
        self.print(&format!("\n{}\n{}", title, rule))
    }
}

/// Writes to the process's stdout/stderr
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn write_line(&self, stream: Stream, line: &str) -> CliResult<()> {
        match stream {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MockOutput;
    use super::*;

    #[test]
    fn test_streams_are_kept_apart() {
        let output = MockOutput::new();
        output.print("launched").unwrap();
        output.error("failed").unwrap();

        assert_eq!(output.printed(), vec!["launched".to_string()]);
        assert_eq!(output.errors(), vec!["failed".to_string()]);
    }

    #[test]
    fn test_decorated_lines() {
        let output = MockOutput::new();
        output.success("Config written").unwrap();
        output.warning("Short lock").unwrap();
        output.info("Submitting").unwrap();
        output.header("Factory").unwrap();

        let printed = output.printed();
        assert!(printed[0].starts_with("✅"));
        assert!(printed[1].starts_with("⚠️"));
        assert!(printed[2].starts_with("ℹ️"));
        assert_eq!(printed[3], "\nFactory\n=======");
        assert!(output.errors().is_empty());
    }
}
