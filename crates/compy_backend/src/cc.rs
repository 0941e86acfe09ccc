use std::ffi::OsStr;
use std::process::Command;

#[derive(thiserror::Error, Debug)]
pub enum CcError {
    #[error("couldn't run C compiler: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "C compiler exited with code {code} and output:\n{}",
        String::from_utf8_lossy(.output)
    )]
    Exited { code: i32, output: Vec<u8> },

    #[error(
        "C compiler terminated with output:\n{}",
        String::from_utf8_lossy(.output)
    )]
    Terminated { output: Vec<u8> },
}

/// An external C compiler, invoked as `<command> <args...> -o <output> <c file>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CCompiler {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for CCompiler {
    fn default() -> Self {
        Self::new("cc")
    }
}

impl CCompiler {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: vec![],
        }
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn command<P0: AsRef<OsStr>, P1: AsRef<OsStr>>(&self, c_file: P0, output: P1) -> Command {
        let mut cmd = Command::new(&self.command);

        cmd.args(&self.args);

        cmd.arg("-o");
        cmd.arg(output);

        cmd.arg(c_file);

        cmd
    }

    /// Compiles `c_file` into the executable `output`.
    ///
    /// Returns the compiler's stdout followed by its stderr, untouched, whether or
    /// not it succeeded.
    pub fn compile<P0: AsRef<OsStr>, P1: AsRef<OsStr>>(
        &self,
        c_file: P0,
        output: P1,
    ) -> Result<Vec<u8>, CcError> {
        let mut cmd = self.command(c_file, output);
        log::debug!("running {cmd:?}");

        let result = cmd.output()?;

        let mut output = result.stdout;
        output.extend(result.stderr);

        if result.status.success() {
            Ok(output)
        } else {
            match result.status.code() {
                Some(code) => Err(CcError::Exited { code, output }),
                None => Err(CcError::Terminated { output }),
            }
        }
    }
}
