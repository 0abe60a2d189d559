//! Prompt collector
//!
//! Writes a question to the prompt sink and reads one line of answer from the
//! line source. Generic over both ends so tests can drive it with in-memory
//! buffers.

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

use thiserror::Error;
use tracing::debug;

use crate::answers::Answer;

/// Errors raised while asking a question
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Input ended before '{prompt}' was answered")]
    InputClosed { prompt: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Asks questions over a line source and a prompt sink
pub struct Prompter<R, W> {
    input: R,
    output: W,
    accept_defaults: bool,
}

impl Prompter<StdinLock<'static>, StdoutLock<'static>> {
    /// Prompter bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            accept_defaults: false,
        }
    }

    /// Answer every question with its default instead of reading input
    pub fn accept_defaults(mut self, enabled: bool) -> Self {
        self.accept_defaults = enabled;
        self
    }

    /// Ask one question
    ///
    /// The default is shown in brackets when it is non-empty and used
    /// verbatim when the trimmed answer is empty. With `split`, the text is
    /// broken on commas into trimmed pieces; empty text yields an empty list.
    pub fn ask(&mut self, prompt: &str, default: Option<&str>, split: bool) -> Result<Answer, PromptError> {
        debug!(%prompt, ?default, %split, "Prompter::ask: called");
        match default {
            Some(d) if !d.is_empty() => write!(self.output, "{} [{}]: ", prompt, d)?,
            _ => write!(self.output, "{}: ", prompt)?,
        }
        self.output.flush()?;

        let line = if self.accept_defaults {
            writeln!(self.output)?;
            String::new()
        } else {
            self.read_line(prompt)?
        };

        let mut text = line.trim().to_string();
        if text.is_empty()
            && let Some(d) = default
        {
            debug!("Prompter::ask: empty input, using default");
            text = d.to_string();
        }

        if split {
            Ok(Answer::List(split_list(&text)))
        } else {
            Ok(Answer::Text(text))
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            debug!(%prompt, "Prompter::read_line: end of input");
            return Err(PromptError::InputClosed {
                prompt: prompt.to_string(),
            });
        }
        Ok(line)
    }

    /// Give back the prompt sink
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Split comma-separated text into trimmed pieces
pub fn split_list(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(|piece| piece.trim().to_string()).collect()
}
