use std::io::{self, BufRead, Write};

/// A yes/no question put to the operator.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self(question))
    }
}

/// Only `Y` and `y` count as yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim_end_matches(['\r', '\n']), "Y" | "y")
}

/// Asks on `output` and reads one line from `input`.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}
impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}
impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{} Y/N ? - ", question)?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

pub type StdinPrompt = LinePrompt<io::StdinLock<'static>, io::Stderr>;

pub fn stdin_prompt() -> StdinPrompt {
    LinePrompt::new(io::stdin().lock(), io::stderr())
}
