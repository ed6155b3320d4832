//! MetaSyntax CLI entry point.

use metasyntax_foundation::{Color, Error, ErrorContext};
use metasyntax_runtime::{
    DEFAULT_DESCRIPTION, DescriptionHighlighter, HighlightConfig, Palette, Repl,
    SampleHighlighter, Session, format_error, token_table,
};
use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Level;

/// Command-line options.
#[derive(Default)]
struct CliConfig {
    description: Option<PathBuf>,
    sample: Option<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    tokens: bool,
    check: bool,
    show_description: bool,
    no_color: bool,
    no_eof: bool,
    normal_color: Option<Color>,
    special_color: Option<Color>,
    verbosity: u8,
}

impl CliConfig {
    fn max_level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn highlight_config(&self) -> HighlightConfig {
        let ansi = !self.no_color && io::stdout().is_terminal();
        let mut palette = Palette::default();
        if let Some(color) = self.normal_color {
            palette = palette.with_normal(color);
        }
        if let Some(color) = self.special_color {
            palette = palette.with_special(color);
        }
        HighlightConfig::default()
            .with_ansi(ansi)
            .with_show_eof(!self.no_eof)
            .with_palette(palette)
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let ansi = io::stderr().is_terminal();
            match e.downcast_ref::<Error>() {
                Some(error) => eprint!("{}", format_error(error, ansi)),
                None if ansi => eprintln!("\x1b[31mError: {e}\x1b[0m"),
                None => eprintln!("Error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut positional = Vec::new();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--tokens" => config.tokens = true,
            "--check" => config.check = true,
            "--show-description" => config.show_description = true,
            "--no-color" => config.no_color = true,
            "--no-eof" => config.no_eof = true,
            "--normal-color" => config.normal_color = Some(color_value(&arg, args.next())?),
            "--special-color" => config.special_color = Some(color_value(&arg, args.next())?),
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "-vv" => config.verbosity = config.verbosity.saturating_add(2),
            "-vvv" => config.verbosity = config.verbosity.saturating_add(3),
            "-" => positional.push(arg),
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    config.description = positional.next().map(PathBuf::from);
    config.sample = positional.next();
    if let Some(extra) = positional.next() {
        return Err(format!("unexpected argument: {extra}").into());
    }
    if config.description.as_deref() == Some(Path::new("-")) {
        return Err("the description cannot be read from stdin".into());
    }

    Ok(config)
}

/// Parses the `#RRGGBB` value following a color option.
fn color_value(flag: &str, value: Option<String>) -> Result<Color, Box<dyn std::error::Error>> {
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    Color::from_hex(&value).ok_or_else(|| format!("invalid {flag} value: {value}").into())
}

fn setup_tracing(level: Level) -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("metasyntax {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    setup_tracing(config.max_level())?;
    let highlight = config.highlight_config();

    let session = load_session(&config)?;
    tracing::info!(rules = session.rules().len(), "description ready");

    if config.check {
        let rules = session.rules();
        println!("{} rules", rules.len());
        for rule in rules.prioritized() {
            println!("  {rule}");
        }
    }

    if config.show_description {
        let source = session.description();
        if highlight.ansi {
            let highlighter = DescriptionHighlighter::new(highlight.description_theme);
            println!("{}", highlighter.highlight(source));
        } else {
            println!("{source}");
        }
    }

    if let Some(sample) = &config.sample {
        let text = read_sample(sample)
            .map_err(|e| Error::from(e).with_context(ErrorContext::new().with_source(sample)))?;
        if config.tokens {
            print!("{}", token_table(&session.tokenize(&text), &highlight));
        } else if highlight.ansi {
            let rules = Arc::clone(session.rules());
            let highlighter = SampleHighlighter::new(rules, highlight.palette);
            println!("{}", highlighter.highlight(&text));
        } else {
            println!("{text}");
        }
    }

    // Batch runs stop after printing.
    if config.batch_mode {
        return Ok(());
    }

    let mut repl = Repl::new(session, highlight)?;
    if config.description.is_some() {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(())
}

/// Compiles the description named on the command line, or the built-in one.
fn load_session(config: &CliConfig) -> Result<Session, Error> {
    let Some(path) = &config.description else {
        return Session::with_description(DEFAULT_DESCRIPTION);
    };
    let name = path.display().to_string();
    let source = fs::read_to_string(path)
        .map_err(|e| Error::from(e).with_context(ErrorContext::new().with_source(&name)))?;

    Session::with_description(source).map_err(|mut e| {
        let context = e.context.take().unwrap_or_default();
        e.with_context(context.with_source(name))
    })
}

fn read_sample(sample: &str) -> io::Result<String> {
    if sample == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(sample)
    }
}

fn print_help() {
    println!(
        "\x1b[1mMetaSyntax\x1b[0m - Token description compiler and highlighter

\x1b[1mUSAGE:\x1b[0m
    metasyntax [OPTIONS] [DESCRIPTION] [SAMPLE]

\x1b[1mARGUMENTS:\x1b[0m
    [DESCRIPTION]    Description file (default: built-in example)
    [SAMPLE]         Sample file to tokenize, or - for stdin

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -b, --batch           Print file output and exit (no REPL)
    --tokens              Print the sample as a token table
    --check               Compile the description and list its rules
    --show-description    Print the highlighted description
    --no-color            Disable ANSI colors
    --no-eof              Leave the EOF row out of token tables
    --normal-color HEX    Default color for Normal tokens (#RRGGBB)
    --special-color HEX   Default color for Special tokens (#RRGGBB)
    -v, --verbose         Increase log verbosity (repeatable)

\x1b[1mEXAMPLES:\x1b[0m
    metasyntax                              Start the REPL with the example description
    metasyntax lang.ms                      Load lang.ms, then start the REPL
    metasyntax -b lang.ms code.txt          Print code.txt highlighted and exit
    metasyntax -b --tokens lang.ms -        Tokenize stdin and print a token table
    metasyntax -b --check lang.ms           Check that lang.ms compiles

\x1b[1mREPL COMMANDS:\x1b[0m
    :load PATH        Load a description file
    :rules            List rules in the order they are tried
    :tokens           Toggle the token list for sample lines
    :description      Show the current description
    :help             Show command help
    :quit             Exit
    Ctrl+D            Exit REPL
    Ctrl+C            Cancel current input"
    );
}
