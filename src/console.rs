//! Console I/O port
//!
//! The game loop talks to the terminal through this trait so tests can script
//! input sequences and capture output without touching real stdin/stdout.

use std::io::{self, BufRead, Write};

/// Line-oriented console capability
pub trait Console {
    /// Show `prompt` without a trailing newline and read one line of input
    ///
    /// The returned line is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if input cannot be read, including end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<String>;

    /// Write one line of output
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the line cannot be written.
    fn line(&mut self, text: &str) -> io::Result<()>;
}

/// Console backed by process stdin/stdout
pub struct StdConsole;

impl Console for StdConsole {
    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes = io::stdin().lock().read_line(&mut input)?;
        if bytes == 0 {
            // Stdin closed mid-session; surface it rather than spinning on empty reads
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }

        Ok(input.trim().to_string())
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        println!("{text}");
        Ok(())
    }
}

/// Console double driven by a fixed input script, capturing all output
#[cfg(test)]
pub struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|&s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    /// Everything written so far, one line per entry
    pub fn output_text(&self) -> String {
        self.output.join("\n")
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        self.output.push(prompt.to_string());
        self.inputs
            .pop_front()
            .map(|input| input.trim().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_console_replays_inputs_in_order() {
        let mut console = ScriptedConsole::new(&["a", "b"]);
        assert_eq!(console.prompt("first: ").unwrap(), "a");
        assert_eq!(console.prompt("second: ").unwrap(), "b");
    }

    #[test]
    fn scripted_console_trims_inputs() {
        let mut console = ScriptedConsole::new(&["  x \n"]);
        assert_eq!(console.prompt("> ").unwrap(), "x");
    }

    #[test]
    fn scripted_console_errors_when_exhausted() {
        let mut console = ScriptedConsole::new(&[]);
        let err = console.prompt("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn scripted_console_captures_output() {
        let mut console = ScriptedConsole::new(&["y"]);
        console.line("hello").unwrap();
        console.prompt("ready? ").unwrap();
        console.line("goodbye").unwrap();

        assert_eq!(console.output, vec!["hello", "ready? ", "goodbye"]);
        assert!(console.output_text().contains("hello"));
    }
}
