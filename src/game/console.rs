//! Line-oriented console used by every game loop.
//!
//! [`StdConsole`] talks to the terminal. [`ScriptedConsole`] feeds canned
//! answers and records everything printed, which lets whole sessions run in
//! tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::errors::GameError;

pub trait Console {
    /// Print one narrative line.
    fn say(&mut self, line: &str) -> Result<(), GameError>;

    /// Show `prompt` and read one line of input without its line ending.
    /// End of input is reported as [`GameError::InputClosed`].
    fn ask(&mut self, prompt: &str) -> Result<String, GameError>;
}

/// Console bound to any reader/writer pair; `StdConsole::stdio()` for the terminal.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn say(&mut self, line: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        // invalid UTF-8 is a bad answer, not an I/O failure
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(GameError::InputClosed);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Replays a fixed list of answers and captures the transcript.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every line printed and every prompt shown, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.transcript.iter().filter(|l| l.contains(needle)).count()
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> Result<(), GameError> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        self.transcript.push(prompt.to_string());
        self.answers.pop_front().ok_or(GameError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_console_strips_line_endings() {
        let input = io::Cursor::new(b"north\r\nDark\n".to_vec());
        let mut out = Vec::new();
        {
            let mut console = StdConsole::new(input, &mut out);
            assert_eq!(console.ask("Where to? ").unwrap(), "north");
            assert_eq!(console.ask("Type: ").unwrap(), "Dark");
            assert!(matches!(console.ask("Again: "), Err(GameError::InputClosed)));
            console.say("bye").unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Where to? Type: "));
        assert!(text.ends_with("bye\n"));
    }

    #[test]
    fn std_console_decodes_invalid_utf8_lossily() {
        let input = io::Cursor::new(b"\xff\xfe\nnorth\n".to_vec());
        let mut console = StdConsole::new(input, Vec::new());
        let garbled = console.ask("? ").unwrap();
        assert!(garbled.contains('\u{FFFD}'));
        assert!(crate::game::world::Direction::parse(&garbled).is_none());
        assert_eq!(console.ask("? ").unwrap(), "north");
    }

    #[test]
    fn scripted_console_records_prompts_and_lines() {
        let mut console = ScriptedConsole::new(["a"]);
        console.say("hello").unwrap();
        assert_eq!(console.ask("? ").unwrap(), "a");
        assert!(matches!(console.ask("? "), Err(GameError::InputClosed)));
        assert_eq!(console.transcript(), &["hello", "? ", "? "]);
        assert_eq!(console.count("? "), 2);
        assert_eq!(console.remaining_answers(), 0);
    }
}
