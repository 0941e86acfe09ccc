use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log what the compiler is doing (overrides `RUST_LOG`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a program.
    Build {
        /// The input file, which must end in `.b`.
        input: String,

        /// Whether the given input should be used directly as the source instead
        /// of as the source file path.
        #[clap(long, short, action)]
        source: bool,

        /// The output file. Defaults to the input file name without `.b`.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the generated C instead of building an executable. Goes to stdout
        /// if no output file is given.
        #[arg(long)]
        emit_c: bool,

        /// The C compiler used to build the executable.
        #[arg(long, env = "CC", default_value = "cc")]
        cc: String,

        /// An extra argument for the C compiler. May be repeated.
        #[arg(long = "cc-arg", value_name = "ARG", allow_hyphen_values = true)]
        cc_args: Vec<String>,
    },
}
