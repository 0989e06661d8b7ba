use std::io::Write;
use std::process::ExitCode;

use clap::{ Args, Parser, Subcommand };
use log::debug;

use generatepass::{
    generate_password, generate_token, GeneratorConfig, PasswordOptions, Result, TokenKind, TokenOptions,
};

#[derive(Parser)]
#[command(name = "generatepass", version, about = "Generate random passwords and tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one or more passwords
    Password(PasswordArgs),
    /// SHA-256 token as 64 hex characters
    Hex,
    /// SHA-256 token as base64
    Base64(TokenArgs),
    /// Raw seed encoded as base64
    Base64b(TokenArgs),
}

/// Every boolean option has an on and an off flag; whichever is given
/// overrides the `GENERATEPASS_*` default.
#[derive(Args, Default)]
struct PasswordArgs {
    #[arg(short = 'L', long)]
    length: Option<usize>,
    #[arg(long, conflicts_with = "no_uppercase")]
    uppercase: bool,
    #[arg(long)]
    no_uppercase: bool,
    #[arg(long, conflicts_with = "no_symbols")]
    symbols: bool,
    #[arg(long)]
    no_symbols: bool,
    #[arg(long, conflicts_with = "no_digits")]
    digits: bool,
    #[arg(long)]
    no_digits: bool,
    #[arg(long, conflicts_with = "no_exclude_ambiguous")]
    exclude_ambiguous: bool,
    #[arg(long)]
    no_exclude_ambiguous: bool,
    #[arg(long, conflicts_with = "no_url_safe")]
    url_safe: bool,
    #[arg(long)]
    no_url_safe: bool,
    #[arg(short, long, default_value_t = 1)]
    count: usize,
    /// JSON options object, replaces all other option flags
    #[arg(long, conflicts_with_all = [
        "length", "uppercase", "no_uppercase", "symbols", "no_symbols", "digits", "no_digits",
        "exclude_ambiguous", "no_exclude_ambiguous", "url_safe", "no_url_safe",
    ])]
    options: Option<String>,
}

#[derive(Args)]
struct TokenArgs {
    #[arg(long)]
    url_safe: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Password(args) => {
            let options = match args.options.as_deref() {
                Some(json) => PasswordOptions::from_json(json)?,
                None => merge_flags(&args, GeneratorConfig::from_env()?.defaults),
            };
            debug!("Password options: {:?}", options);

            for _ in 0..args.count {
                let password = generate_password(&options)?;
                writeln!(out, "{}", password)?;
            }
        }
        Command::Hex => {
            writeln!(out, "{}", generate_token(TokenKind::Hex, &TokenOptions::default()))?;
        }
        Command::Base64(args) => {
            let options = TokenOptions { url_safe: args.url_safe };
            writeln!(out, "{}", generate_token(TokenKind::Base64, &options))?;
        }
        Command::Base64b(args) => {
            let options = TokenOptions { url_safe: args.url_safe };
            let token = generate_token(TokenKind::Base64Raw, &options);
            // the padded form already ends with a newline
            if token.ends_with('\n') {
                write!(out, "{}", token)?;
            } else {
                writeln!(out, "{}", token)?;
            }
        }
    }

    out.flush()?;

    Ok(())
}

/// Apply command-line flags on top of the environment defaults. Validation
/// happens afterwards, on the merged options.
fn merge_flags(args: &PasswordArgs, defaults: PasswordOptions) -> PasswordOptions {
    PasswordOptions {
        length: args.length.unwrap_or(defaults.length),
        include_uppercase: toggle(args.uppercase, args.no_uppercase, defaults.include_uppercase),
        include_symbols: toggle(args.symbols, args.no_symbols, defaults.include_symbols),
        include_digits: toggle(args.digits, args.no_digits, defaults.include_digits),
        exclude_ambiguous: toggle(args.exclude_ambiguous, args.no_exclude_ambiguous, defaults.exclude_ambiguous),
        url_safe: toggle(args.url_safe, args.no_url_safe, defaults.url_safe),
    }
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}
