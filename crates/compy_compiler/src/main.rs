mod cli;
mod compiler;
mod diagnostics;


use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as _;
use cli::{Cli, Command};
use compy_backend::{CCompiler, CcError};
use temp_dir::TempDir;

use crate::compiler::Compiler;
use crate::diagnostics::PrettyDiagnosticEmitter;

const SOURCE_EXTENSION: &str = "b";

#[derive(thiserror::Error, Debug)]
enum CompilerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("bad filename {0:?}, expected a `.b` file")]
    BadExtension(String),

    #[error(transparent)]
    Cc(#[from] CcError),

    #[error("errors while compiling")]
    HadErrors,
}

type CompilerResult<T> = Result<T, CompilerError>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");

    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: Cli) -> CompilerResult<()> {
    match cli.command {
        Command::Build {
            input,
            source: input_is_source,
            output,
            emit_c,
            cc,
            cc_args,
        } => {
            let (name, source) = if input_is_source {
                ("<unnamed>".to_owned(), input)
            } else {
                check_extension(&input)?;
                let source = std::fs::read_to_string(&input)?;
                (input, source)
            };

            log::info!("building {name}");

            let mut compiler = Compiler::new(PrettyDiagnosticEmitter::default());
            let c_source = compiler.compile_to_c(&name, &source)?;

            if emit_c {
                match output {
                    Some(path) => std::fs::write(path, c_source)?,
                    None => std::io::stdout().write_all(c_source.as_bytes())?,
                }
                return Ok(());
            }

            let output = output.unwrap_or_else(|| default_output(&name, input_is_source));

            // Removed when `temp_dir` is dropped, after the C compiler is done with it.
            let temp_dir = TempDir::new()?;
            let c_file = temp_dir.path().join(c_file_name(&name, input_is_source));
            std::fs::write(&c_file, c_source)?;
            log::debug!("wrote generated C to {}", c_file.display());

            let cc = CCompiler::new(cc).with_args(cc_args);
            let cc_output = cc.compile(&c_file, &output)?;
            std::io::stdout().write_all(&cc_output)?;

            Ok(())
        }
    }
}

fn check_extension(input: &str) -> CompilerResult<()> {
    match Path::new(input).extension() {
        Some(ext) if ext == SOURCE_EXTENSION => Ok(()),
        _ => Err(CompilerError::BadExtension(input.to_owned())),
    }
}

fn default_output(name: &str, input_is_source: bool) -> PathBuf {
    if input_is_source {
        return PathBuf::from("a.out");
    }

    // Next to the working directory, like `cc` does, not next to the input.
    Path::new(name)
        .file_stem()
        .map_or_else(|| PathBuf::from("a.out"), PathBuf::from)
}

fn c_file_name(name: &str, input_is_source: bool) -> PathBuf {
    let mut file = default_output(name, input_is_source);
    file.set_extension("c");
    file
}
