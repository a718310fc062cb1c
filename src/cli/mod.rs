//! Command-line interface module

use clap::{Parser, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

use crate::conversion::{ConversionRequest, SplitMode, TokenSettings};
use crate::error::{ConversionError, ConversionErrorKind, JoinResult};
use crate::parser::TextSource;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "SPLITJOIN_LOG";

/// Main CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "splitjoin")]
#[command(about = "Split text into elements and join them with custom delimiters")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Text to convert (default: standard input when it is piped)
    #[arg()]
    pub input: Option<String>,

    /// Read text from standard input
    #[arg(long, conflicts_with = "input")]
    pub stdin: bool,

    /// Start token (default: ")
    #[arg(short, long)]
    pub start: Option<String>,

    /// Separator between elements (default: ",")
    #[arg(short = 'd', long)]
    pub separator: Option<String>,

    /// End token (default: ")
    #[arg(short, long)]
    pub end: Option<String>,

    /// Treat each line as one element instead of splitting it into words
    #[arg(short = 'l', long)]
    pub whole_lines: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Copy the result to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Print word and character counts
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// How the result is printed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The joined text only
    #[default]
    Text,
    /// Output and counts as JSON
    Json,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub tokens: TokenSettings,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> JoinResult<Self> {
        let tokens = TokenSettings::resolve(
            args.start.as_deref().unwrap_or_default(),
            args.separator.as_deref().unwrap_or_default(),
            args.end.as_deref().unwrap_or_default(),
        );
        tokens.validate()?;

        Ok(Self { args, tokens })
    }

    pub fn mode(&self) -> SplitMode {
        SplitMode::from_whole_line_flag(self.args.whole_lines)
    }

    /// Pick the text source. Without an argument, piped stdin is used.
    pub fn source(&self, stdin_is_terminal: bool) -> JoinResult<TextSource> {
        if let Some(input) = &self.args.input {
            Ok(TextSource::Argument(input.clone()))
        } else if self.args.stdin || !stdin_is_terminal {
            Ok(TextSource::Stdin)
        } else {
            Err(ConversionError::conversion(ConversionErrorKind::NoInput))
        }
    }

    /// Build the conversion request for `raw_text`
    pub fn request(&self, raw_text: String) -> ConversionRequest {
        ConversionRequest::with_tokens(raw_text, self.tokens.clone()).with_mode(self.mode())
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}

/// Log filter for the given flags; `SPLITJOIN_LOG` wins when set
pub fn log_filter(verbose: bool) -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(env) => EnvFilter::new(env),
        Err(_) if verbose => EnvFilter::new("splitjoin=debug"),
        Err(_) => EnvFilter::new("warn"),
    }
}

/// Install the stderr tracing subscriber
pub fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message on stderr (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                eprintln!("{} {}", style("✓").green(), message);
            } else {
                eprintln!("✓ {}", message);
            }
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        if Self::should_use_color() {
            eprintln!("{} {}", style("✗").red().bold(), message);
        } else {
            eprintln!("✗ {}", message);
        }
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                eprintln!("{} {}", style("⚠").yellow(), message);
            } else {
                eprintln!("⚠ {}", message);
            }
        }
    }

    /// Check if stderr output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stderr) && std::env::var("NO_COLOR").is_err()
    }

    /// Check if stdin is attached to a terminal
    pub fn stdin_is_terminal() -> bool {
        atty::is(atty::Stream::Stdin)
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    if let Some(ConversionErrorKind::InvalidToken { .. }) = error.kind() {
        eprintln!("\nTip: tokens may be any non-whitespace text, e.g. --separator '|'");
    }

    eprintln!("\nTry 'splitjoin --help' for usage information.");
}
