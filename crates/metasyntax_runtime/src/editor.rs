//! Terminal input for the REPL.
//!
//! The REPL talks to a [`LineEditor`]; [`RustylineEditor`] is the terminal
//! implementation and highlights the line being typed with the current
//! rules.

use std::borrow::Cow;
use std::sync::Arc;

use metasyntax_foundation::{Error, ErrorKind, Result};
use metasyntax_language::RuleSet;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::config::Palette;
use crate::highlight::SampleHighlighter;

/// REPL commands offered for completion.
pub const COMMANDS: [&str; 6] = [":load", ":rules", ":tokens", ":description", ":help", ":quit"];

/// What one prompt produced.
#[derive(Debug)]
pub enum ReadResult {
    /// The entered line, without its newline.
    Line(String),
    /// Ctrl+C; the REPL discards the line and prompts again.
    Interrupted,
    /// Ctrl+D or closed input.
    Eof,
}

/// Source of REPL input lines.
pub trait LineEditor {
    /// Prompts for one line.
    ///
    /// # Errors
    ///
    /// Fails on terminal I/O errors other than Ctrl+C and Ctrl+D.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Remembers an entered line.
    fn add_history(&mut self, line: &str);

    /// Replace the rules used to highlight input.
    fn set_rules(&mut self, rules: Arc<RuleSet>);
}

/// Rustyline helper that colors sample text as it is typed.
#[derive(Helper, Completer, Hinter, Validator)]
struct MetaSyntaxHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: SampleHighlighter,
}

impl Highlighter for MetaSyntaxHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with(':') {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(self.highlighter.highlight(line))
        }
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for REPL commands and `:load` paths.
struct CommandCompleter {
    file_completer: FilenameCompleter,
}

impl CommandCompleter {
    fn new() -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
        }
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        if head.starts_with(":load ") {
            return self.file_completer.complete(line, pos, ctx);
        }
        if !head.starts_with(':') || head.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|command| command.starts_with(head))
            .map(|command| Pair {
                display: (*command).to_string(),
                replacement: (*command).to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

/// Interactive [`LineEditor`] backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<MetaSyntaxHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Opens the terminal editor, coloring input with `rules`.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot be set up.
    pub fn new(rules: Arc<RuleSet>, palette: Palette) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = MetaSyntaxHelper {
            completer: CommandCompleter::new(),
            hinter: HistoryHinter::new(),
            highlighter: SampleHighlighter::new(rules, palette),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::debug!(error = %e, "history entry dropped");
        }
    }

    fn set_rules(&mut self, rules: Arc<RuleSet>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.highlighter.set_rules(rules);
        }
    }
}
