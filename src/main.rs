use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use minic::{
    PipelineOrder,
    ast::{parse, printer::print_ast},
    compile,
    error::CompileError,
    lexer::tokenize,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file, or `-` for stdin.
    input: PathBuf,

    /// Dump the token stream.
    #[arg(long)]
    tokens: bool,

    /// Dump the syntax tree.
    #[arg(long)]
    ast: bool,

    /// Print the three-address code.
    #[arg(long)]
    tac: bool,

    /// Lower to TAC before running the semantic check.
    #[arg(long)]
    generate_first: bool,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_source(input: &Path) -> io::Result<String> {
    if input.as_os_str() == "-" {
        let mut src = String::new();
        io::stdin().read_to_string(&mut src)?;
        Ok(src)
    } else {
        fs::read_to_string(input)
    }
}

#[derive(Debug, thiserror::Error)]
enum DriverError {
    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Stage dumps are written as soon as their stage succeeds. The TAC is only
/// written once the whole pipeline has accepted the program.
fn run(args: &Args, src: &str, out: &mut impl Write) -> Result<(), DriverError> {
    if args.tokens || args.ast {
        let tokens = tokenize(src).map_err(CompileError::from)?;
        if args.tokens {
            for token in &tokens {
                writeln!(
                    out,
                    "{}:{}\t{:?}\t{:?}",
                    token.pos.line, token.pos.col, token.token_type, token.lexeme
                )?;
            }
        }
        if args.ast {
            let program = parse(tokens).map_err(CompileError::from)?;
            write!(out, "{}", print_ast(&program))?;
        }
    }

    let order = if args.generate_first {
        PipelineOrder::GenerateThenValidate
    } else {
        PipelineOrder::ValidateThenGenerate
    };
    let compilation = compile(src, order)?;
    if args.tac {
        write!(out, "{}", compilation.tac)?;
    }

    writeln!(out, "program is valid")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let src = match read_source(&args.input) {
        Ok(src) => src,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    let mut out = io::stdout().lock();
    match run(&args, &src, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let DriverError::Compile(err) = &err {
                tracing::debug!(kind = %err.kind(), pos = ?err.pos(), "compilation failed");
            }
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
