//! Input abstraction for interactive prompts.
//!
//! The menu logic is written against [`PromptSource`] so selection can be
//! tested with scripted input instead of a terminal.

use std::io::{self, Write};

/// A source of user input lines.
pub trait PromptSource {
    /// Display `prompt` and read one line, trimmed. `None` signals end of
    /// input (EOF).
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// The real prompt: writes to stderr, reads from stdin.
pub struct StdinPrompt;

impl PromptSource for StdinPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stderr = io::stderr();
        write!(stderr, "{prompt}")?;
        stderr.flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }
}

/// Scripted input for tests: returns queued lines, then EOF.
#[cfg(test)]
pub(crate) struct ScriptedPrompt {
    inputs: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub(crate) fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl PromptSource for ScriptedPrompt {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }
}
