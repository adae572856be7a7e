//! Terminal and scripted collaborators for the wizard

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::form::{Answer, AnswerSource, FocusEvent, FormView, Presenter};

/// Prompts for each matrix on a line-oriented terminal.
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
    max_blocks: usize,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W, max_blocks: usize) -> Self {
        Self {
            reader,
            writer,
            max_blocks,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one trimmed line. `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_yes_no(&mut self, question: &str, default: bool) -> io::Result<Option<bool>> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            write!(self.writer, "{} [{}] ", question, hint)?;
            self.writer.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_yes_no(&line) {
                Some(value) => return Ok(Some(value.unwrap_or(default))),
                None => writeln!(self.writer, "Please answer y or n.")?,
            }
        }
    }

    fn ask_blocks(&mut self) -> io::Result<Option<usize>> {
        loop {
            write!(
                self.writer,
                "Number of field-split blocks (1-{}): ",
                self.max_blocks
            )?;
            self.writer.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if (1..=self.max_blocks).contains(&n) => return Ok(Some(n)),
                _ => writeln!(
                    self.writer,
                    "Please enter a number between 1 and {}.",
                    self.max_blocks
                )?,
            }
        }
    }
}

/// `Some(Some(b))` for an explicit answer, `Some(None)` for an empty line,
/// `None` if unrecognized.
fn parse_yes_no(input: &str) -> Option<Option<bool>> {
    match input.to_ascii_lowercase().as_str() {
        "" => Some(None),
        "y" | "yes" => Some(Some(true)),
        "n" | "no" => Some(Some(false)),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePrompt<R, W> {
    fn focus(&mut self, event: &FocusEvent) -> io::Result<()> {
        match FormView::for_event(event) {
            Some(form) => {
                writeln!(self.writer)?;
                writeln!(self.writer, "{}", form.title)
            }
            None => writeln!(self.writer, "\nFinished asking."),
        }
    }
}

impl<R: BufRead, W: Write> AnswerSource for ConsolePrompt<R, W> {
    fn next_answer(&mut self, form: &FormView) -> Result<Option<Answer>> {
        let mut form = form.clone();

        let Some(symm) = self.ask_yes_no("Symmetric?", form.symm)? else {
            return Ok(None);
        };
        form.set_symm(symm);

        if form.posdef_visible {
            let Some(posdef) = self.ask_yes_no("Positive definite?", form.posdef)? else {
                return Ok(None);
            };
            form.set_posdef(posdef);
        }

        if form.logstruc_visible {
            let Some(logstruc) = self.ask_yes_no("Log-structured?", form.logstruc)? else {
                return Ok(None);
            };
            form.set_logstruc(logstruc);
        }

        if form.blocks_visible {
            let Some(blocks) = self.ask_blocks()? else {
                return Ok(None);
            };
            form.set_blocks(blocks);
        }

        Ok(Some(form.answer()))
    }
}

/// Answers read ahead of time, handed out in visit order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<Answer>,
}

impl ScriptedAnswers {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    /// Parse a JSON array of answer objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let answers: Vec<Answer> = serde_json::from_str(json)?;
        Ok(Self::new(answers))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let script = Self::from_json(&json)?;
        debug!(path = %path.display(), answers = script.remaining(), "loaded answers");
        Ok(script)
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(&mut self, form: &FormView) -> Result<Option<Answer>> {
        let answer = self.answers.pop_front();
        if let Some(answer) = &answer {
            debug!(id = %form.id, ?answer, "scripted answer");
        }
        Ok(answer)
    }
}

/// Presenter that only logs focus changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn focus(&mut self, event: &FocusEvent) -> io::Result<()> {
        match event.id() {
            Some(id) => info!(matrix = %id.label(), "asking"),
            None => info!("finished asking"),
        }
        Ok(())
    }
}
