use std::io::{self, Write};

use compy_frontend::ParseError;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// `<file>:<line>:<col> <message>`
    pub message: String,
    pub line: u32,
    pub col: u32,

    /// The source line the diagnostic points at, if it could be found.
    pub source_line: Option<String>,
}

pub trait DiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticEmitter for Vec<Diagnostic> {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

pub struct PrettyDiagnosticEmitter {
    pub stream: StandardStream,
}

impl Default for PrettyDiagnosticEmitter {
    fn default() -> Self {
        Self {
            stream: StandardStream::stderr(ColorChoice::Auto),
        }
    }
}

impl DiagnosticEmitter for PrettyDiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        if let Err(err) = write_diagnostic(&diagnostic, &mut self.stream) {
            log::error!("failed to emit diagnostic: {err}");
        }
    }
}

pub trait IntoDiagnostic<Context: ?Sized> {
    fn into_diagnostic(self, cx: &Context) -> Diagnostic;
}

/// The context is the source text the error was found in.
impl IntoDiagnostic<str> for ParseError {
    fn into_diagnostic(self, source: &str) -> Diagnostic {
        let source_line = (self.line as usize)
            .checked_sub(1)
            .and_then(|index| source.lines().nth(index))
            .map(str::to_owned);

        Diagnostic {
            message: self.to_string(),
            line: self.line,
            col: self.col,
            source_line,
        }
    }
}

pub fn write_diagnostic(diagnostic: &Diagnostic, stream: &mut impl WriteColor) -> io::Result<()> {
    stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stream, "error")?;
    stream.reset()?;
    writeln!(stream, ": {}", diagnostic.message)?;

    let Some(source_line) = &diagnostic.source_line else {
        return Ok(());
    };

    let digits = diagnostic.line.to_string().len();

    writeln!(stream, "{:digits$} |", "")?;
    writeln!(stream, "{:>digits$} | {source_line}", diagnostic.line)?;

    // Keep tabs so the caret lines up however wide the terminal renders them.
    let padding: String = source_line
        .chars()
        .take(diagnostic.col.saturating_sub(1) as usize)
        .map(|ch| if ch == '\t' { '\t' } else { ' ' })
        .collect();

    write!(stream, "{:digits$} | {padding}", "")?;
    stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    writeln!(stream, "^")?;
    stream.reset()
}
