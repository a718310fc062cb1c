use clap::Parser;
use tracing::{debug, info};

use anyhow::Result;

use splitjoin::cli::{handle_error, init_logging, Args, CliConfig, CliUtils, OutputFormat};
use splitjoin::clipboard::{ClipboardSink, SystemClipboard};
use splitjoin::conversion::{convert, ConversionResult};
use splitjoin::error::ConversionError;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        match e.downcast_ref::<ConversionError>() {
            Some(err) => handle_error(err),
            None => CliUtils::show_error(&e.to_string()),
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;
    let source = config.source(CliUtils::stdin_is_terminal())?;
    debug!(source = source.description(), "reading input");

    let raw_text = source.read()?;
    let request = config.request(raw_text);
    let result = convert(&request);

    print_result(&result, config.args.format)?;

    if config.want_stats() && !config.is_quiet() {
        eprintln!("{}", result.status_line());
    }

    if config.args.copy {
        copy_result(&result, config.is_quiet());
    }

    Ok(())
}

fn print_result(result: &ConversionResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", result.output),
        OutputFormat::Json => println!("{}", result.to_json()?),
    }
    Ok(())
}

// Clipboard failure is reported as a warning only
fn copy_result(result: &ConversionResult, quiet: bool) {
    match SystemClipboard::new().set_text(&result.output) {
        Ok(()) => {
            info!("result copied to clipboard");
            CliUtils::show_success("Copied to clipboard", quiet);
        }
        Err(e) => CliUtils::show_warning(&ConversionError::from(e).user_message(), quiet),
    }
}
