//! Line-oriented terminal abstraction.
//!
//! The controller only ever writes whole lines and reads one answer per
//! prompt, so that is all a [`Console`] has to offer. The CLI wraps stdin and
//! stdout; tests use [`ScriptedConsole`].
use std::collections::VecDeque;
use std::io;

pub trait Console {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Shows `prompt` and reads one line of input without its line ending.
    ///
    /// Returns `None` once input is closed.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).prompt(prompt)
    }
}

/// In-memory console for testing.
///
/// Answers prompts from a fixed list of inputs and keeps everything written,
/// prompts included, as separate lines.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// True when some written line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    /// Number of written lines that contain `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.output
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    pub fn unread_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_owned());
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push(prompt.to_owned());
        Ok(self.inputs.pop_front())
    }
}
