//! The interactive REPL.
//!
//! Lines starting with `:` are commands; any other line is sample text and
//! is echoed highlighted, followed by its token list.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use metasyntax_foundation::{Error, ErrorKind, Result};

use crate::config::HighlightConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::highlight::{DescriptionHighlighter, SampleHighlighter, token_table};
use crate::session::{Applied, Session};

const PROMPT: &str = "ms> ";

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Output(String),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// Where input lines come from.
    editor: E,

    /// Description and rule state.
    session: Session,

    /// Output settings.
    config: HighlightConfig,

    /// Whether submitted samples print their token list.
    show_tokens: bool,

    /// Print the banner on start.
    show_banner: bool,
}

impl Repl<RustylineEditor> {
    /// Builds a REPL reading from the terminal.
    ///
    /// # Errors
    ///
    /// Fails if the terminal editor cannot be opened.
    pub fn new(session: Session, config: HighlightConfig) -> Result<Self> {
        let editor = RustylineEditor::new(Arc::clone(session.rules()), config.palette)?;
        Ok(Self::with_editor(editor, session, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Builds a REPL around `editor`.
    pub fn with_editor(editor: E, session: Session, config: HighlightConfig) -> Self {
        Self {
            editor,
            session,
            config,
            show_tokens: true,
            show_banner: true,
        }
    }

    /// Starts without the banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// The session behind this REPL.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one prompt; `Ok(false)` ends the loop.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(PROMPT)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Reply::Output(text)) => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
            Ok(Reply::Quit) => return Ok(false),
            Err(e) => eprint!("{}", format_error(&e, self.config.ansi)),
        }
        Ok(true)
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands and failed loads.
    pub fn eval(&mut self, input: &str) -> Result<Reply> {
        let Some(command) = input.trim().strip_prefix(':') else {
            return Ok(Reply::Output(self.render_sample(input)));
        };

        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, arg)| (name, arg.trim()));

        match name {
            "load" | "l" => {
                if arg.is_empty() {
                    return Err(Error::new(ErrorKind::Internal(
                        ":load requires a path".to_string(),
                    )));
                }
                let count = self.load(Path::new(arg))?;
                Ok(Reply::Output(format!("Loaded {count} rules from {arg}\n")))
            }
            "rules" | "r" => Ok(Reply::Output(self.rules_listing())),
            "tokens" | "t" => {
                self.show_tokens = !self.show_tokens;
                let state = if self.show_tokens { "on" } else { "off" };
                Ok(Reply::Output(format!("Token list {state}\n")))
            }
            "description" | "d" => Ok(Reply::Output(self.render_description())),
            "help" | "h" | "?" => Ok(Reply::Output(HELP.to_string())),
            "quit" | "q" => Ok(Reply::Quit),
            other => Err(Error::new(ErrorKind::Internal(format!(
                "unknown command :{other} (try :help)"
            )))),
        }
    }

    /// Loads a description file and installs its rules.
    ///
    /// A description that fails to compile leaves the current rules in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not compile.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Io(format!("failed to read {}: {e}", path.display())))
        })?;

        match self.session.update_description(source) {
            Applied::Installed => {
                self.editor.set_rules(Arc::clone(self.session.rules()));
                Ok(self.session.rules().len())
            }
            Applied::Rejected(mut e) => {
                let context = e.context.take().unwrap_or_default();
                Err(e.with_context(context.with_source(path.display().to_string())))
            }
            Applied::Superseded => Err(Error::new(ErrorKind::Internal(
                "load was superseded by a newer description".to_string(),
            ))),
        }
    }

    /// Renders sample text and, if enabled, its token list.
    fn render_sample(&self, sample: &str) -> String {
        let items = self.session.tokenize(sample);
        let mut out = if self.config.ansi {
            SampleHighlighter::new(Arc::clone(self.session.rules()), self.config.palette)
                .highlight(sample)
        } else {
            sample.to_string()
        };
        out.push('\n');
        if self.show_tokens {
            out.push_str(&token_table(&items, &self.config));
        }
        out
    }

    /// Lists the installed rules in the order they are tried.
    fn rules_listing(&self) -> String {
        let rules = self.session.rules();
        if rules.is_empty() {
            return "No rules loaded\n".to_string();
        }
        let mut out = String::new();
        for (i, rule) in rules.prioritized().enumerate() {
            let _ = writeln!(out, "{:>3}. {rule}", i + 1);
        }
        out
    }

    /// Renders the description source of the installed rules.
    fn render_description(&self) -> String {
        let source = self.session.description();
        let mut out = if self.config.ansi {
            DescriptionHighlighter::new(self.config.description_theme).highlight(source)
        } else {
            source.to_string()
        };
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    /// Banner with the command summary.
    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        if self.config.ansi {
            println!("\x1b[1;36mMetaSyntax\x1b[0m v{version}");
        } else {
            println!("MetaSyntax v{version}");
        }
        println!("Type sample text to tokenize it, :help for commands, Ctrl+D to exit.\n");
    }
}

/// Formats an error with its context for the terminal.
#[must_use]
pub fn format_error(error: &Error, ansi: bool) -> String {
    let mut out = if ansi {
        format!("\x1b[31mError: {error}\x1b[0m\n")
    } else {
        format!("Error: {error}\n")
    };
    if let Some(context) = &error.context {
        let _ = writeln!(out, "{context}");
    }
    out
}

const HELP: &str = "\
Commands:
  :load PATH       Load a description file
  :rules           List rules in the order they are tried
  :tokens          Toggle the token list for sample lines
  :description     Show the current description
  :help            Show this help
  :quit            Exit
Any other line is tokenized as sample text.
";
