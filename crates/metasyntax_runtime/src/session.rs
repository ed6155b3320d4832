//! Session state for interactive use.
//!
//! A session owns the current description and the last rule set that
//! compiled. Compiles are stamped with a generation so that a caller
//! compiling off the main thread can discard results an edit has already
//! superseded. A failed compile never replaces working rules.

use std::sync::Arc;

use metasyntax_engine::{StreamItem, run};
use metasyntax_foundation::{Error, ErrorContext, Result};
use metasyntax_language::{EXAMPLE_DESCRIPTION, RuleSet, compile};
use tracing::{debug, info, warn};

/// The description a new interactive session starts with.
pub const DEFAULT_DESCRIPTION: &str = EXAMPLE_DESCRIPTION;

/// Sample text matching [`DEFAULT_DESCRIPTION`].
pub const DEFAULT_SAMPLE: &str = "if (condition){\n    this();\n} else {\n    that();\n}";

/// A description waiting to be compiled.
#[derive(Clone, Debug)]
pub struct CompileRequest {
    generation: u64,
    source: String,
}

impl CompileRequest {
    /// Returns the generation stamped by [`Session::begin`].
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the description source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Compiles the description.
    ///
    /// Touches no session state, so it can run on any thread.
    #[must_use]
    pub fn compile(self) -> Compilation {
        let result = compile(&self.source).map_err(|e| attach_snippet(e, &self.source));
        debug!(
            generation = self.generation,
            ok = result.is_ok(),
            "compiled description"
        );
        Compilation {
            generation: self.generation,
            source: self.source,
            result,
        }
    }
}

/// The outcome of compiling a [`CompileRequest`].
#[derive(Clone, Debug)]
pub struct Compilation {
    generation: u64,
    source: String,
    result: Result<RuleSet>,
}

impl Compilation {
    /// Returns the generation of the request this came from.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if the description compiled.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns the compile error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

/// What [`Session::apply`] did with a compilation.
#[derive(Clone, Debug)]
pub enum Applied {
    /// The new rules replaced the previous ones.
    Installed,
    /// The description failed to compile; the previous rules stay.
    Rejected(Error),
    /// A newer compilation was already applied; this one was ignored.
    Superseded,
}

/// Description and rule state for an interactive session.
#[derive(Debug, Default)]
pub struct Session {
    /// Source of the installed rules.
    description: String,
    /// Rules from the last successful compile.
    rules: Arc<RuleSet>,
    /// Generation handed to the most recent request.
    issued: u64,
    /// Newest generation applied, installed or rejected.
    applied: Option<u64>,
}

impl Session {
    /// Creates a session with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a compiled description.
    ///
    /// # Errors
    ///
    /// Returns the compile error if the description does not compile.
    pub fn with_description(source: impl Into<String>) -> Result<Self> {
        let mut session = Self::new();
        match session.update_description(source) {
            Applied::Rejected(e) => Err(e),
            Applied::Installed | Applied::Superseded => Ok(session),
        }
    }

    /// Stamps a new description with the next generation.
    pub fn begin(&mut self, source: impl Into<String>) -> CompileRequest {
        self.issued += 1;
        CompileRequest {
            generation: self.issued,
            source: source.into(),
        }
    }

    /// Applies a compilation.
    ///
    /// Results older than the newest applied generation are ignored, so
    /// the last edit wins however compiles interleave.
    pub fn apply(&mut self, compilation: Compilation) -> Applied {
        let generation = compilation.generation;
        if self.applied.is_some_and(|newest| generation <= newest) {
            debug!(generation, "discarded superseded compilation");
            return Applied::Superseded;
        }
        self.applied = Some(generation);

        match compilation.result {
            Ok(rules) => {
                info!(generation, rules = rules.len(), "installed rules");
                self.rules = Arc::new(rules);
                self.description = compilation.source;
                Applied::Installed
            }
            Err(e) => {
                warn!(generation, error = %e, "description rejected; keeping previous rules");
                Applied::Rejected(e)
            }
        }
    }

    /// Compiles and applies a description in one step.
    pub fn update_description(&mut self, source: impl Into<String>) -> Applied {
        let request = self.begin(source);
        self.apply(request.compile())
    }

    /// Tokenizes sample text with the installed rules.
    ///
    /// Without rules the result is only the sentinel.
    #[must_use]
    pub fn tokenize(&self, sample: &str) -> Vec<StreamItem> {
        run(&self.rules, sample)
    }

    /// Returns the installed rules.
    #[must_use]
    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Returns the source of the installed rules.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the newest applied generation.
    #[must_use]
    pub const fn generation(&self) -> Option<u64> {
        self.applied
    }
}

/// Attaches the offending source line to a located error.
fn attach_snippet(error: Error, source: &str) -> Error {
    match error.location() {
        Some(location) => error.with_context(ErrorContext::for_location(source, location)),
        None => error,
    }
}
