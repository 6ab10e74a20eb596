use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use jsx_lexer::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    render::{to_json, to_listing},
    tokenize_partial, tokenize_with, LexerConfig, Token, TokenKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One aligned row per token
    Table,
    /// Pretty-printed JSON array
    Json,
    /// TOKENS_COUNT / TOKEN_<i> lines for diffing
    Listing,
}

#[derive(Parser)]
#[command(name = "jsx-lexer")]
#[command(about = "Tokenize JSX-like markup")]
struct Args {
    /// Markup to tokenize; reads stdin when neither this nor --file is given
    input: Option<String>,

    /// Read the markup from a file
    #[arg(short, long, conflicts_with = "input")]
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Treat text left open at the end of the input as an error
    #[arg(long)]
    strict: bool,

    /// Only report whether the input is valid
    #[arg(long)]
    check: bool,

    /// Print the tokens found before a failure as well as the failure
    #[arg(long, conflicts_with = "check")]
    partial: bool,

    /// Only print tokens of this kind (repeatable)
    #[arg(long = "only", value_name = "KIND")]
    only: Vec<TokenKind>,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_input(args: &Args) -> io::Result<(String, String)> {
    if let Some(input) = &args.input {
        return Ok((input.clone(), String::from("<argument>")));
    }

    if let Some(path) = &args.file {
        let source = fs::read_to_string(path)?;
        return Ok((source, path.to_string_lossy().to_string()));
    }

    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok((source, String::from("<stdin>")))
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    let (source, origin) = match read_input(&args) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = if args.strict {
        LexerConfig::strict()
    } else {
        LexerConfig::default()
    };

    if args.check {
        return match tokenize_with(&source, &config) {
            Ok(_) => {
                println!("valid");
                ExitCode::SUCCESS
            }
            Err(error) => {
                println!("invalid");
                display_error(&error, &source, &origin);
                ExitCode::FAILURE
            }
        };
    }

    let (tokens, error) = if args.partial {
        tokenize_partial(&source, &config)
    } else {
        match tokenize_with(&source, &config) {
            Ok(tokens) => (tokens, None),
            Err(error) => (vec![], Some(error)),
        }
    };

    if error.is_none() || args.partial {
        let tokens = filter(tokens, &args.only);

        match print_tokens(&tokens, args.format) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    match error {
        Some(error) => {
            display_error(&error, &source, &origin);
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}

fn filter(tokens: Vec<Token>, only: &[TokenKind]) -> Vec<Token> {
    if only.is_empty() {
        return tokens;
    }

    tokens
        .into_iter()
        .filter(|token| token.is_one_of_many(only))
        .collect()
}

fn print_tokens(tokens: &[Token], format: Format) -> Result<String, serde_json::Error> {
    let output = match format {
        Format::Json => {
            let mut json = to_json(tokens)?;
            json.push('\n');
            json
        }
        Format::Listing => to_listing(tokens),
        Format::Table => {
            let mut table = String::new();
            for (i, token) in tokens.iter().enumerate() {
                table.push_str(&format!(
                    "{:>4}  {:<26} {:>5}..{:<5} {:?}\n",
                    i, token.kind, token.span.start, token.span.end, token.value
                ));
            }
            table
        }
    };

    Ok(output)
}

fn display_error(error: &Error, source: &str, origin: &str) {
    /*
        Error: InvalidIdentifierChar (self-closing tags are not supported, ...)
        -> <argument>:1:5
          |
        1 | <div/>
          |     ^
    */

    let position = error.get_position();
    let (line, line_text, column) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_kind());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}:{}:{}", origin, line, column + 1);
    eprintln!("{:>padding$}", "|");
    eprintln!("{} | {}", line_string, line_text);

    let arrows = column + 1;

    eprintln!("{:>padding$} {:>arrows$}", "|", "^");
}
