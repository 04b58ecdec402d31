use crate::error::{LexError, ParseError, RuntimeError, TypeError};

/// The failure of a whole pipeline run.
///
/// Each variant carries the complete error list of the pass that failed,
/// together with the logical file name the source came from (`"repl"` for
/// interactive input). A failing pass blocks every later pass, so exactly
/// one variant describes a run.
///
/// `Display` renders one `<file>:<row>:<col> - <message>` line per error,
/// which is the format the driver prints to stderr.
#[derive(Debug)]
pub enum RunError {
    /// The lexer reported errors; parsing never ran.
    Lex {
        /// The logical file name.
        file:   String,
        /// Every error the lexer accumulated.
        errors: Vec<LexError>,
    },
    /// The parser reported errors; type checking never ran.
    Parse {
        /// The logical file name.
        file:   String,
        /// Every error the parser accumulated.
        errors: Vec<ParseError>,
    },
    /// The type checker reported errors; evaluation never ran.
    Type {
        /// The logical file name.
        file:   String,
        /// Every error the checker accumulated.
        errors: Vec<TypeError>,
    },
    /// Evaluation was aborted by a runtime error.
    Runtime {
        /// The logical file name.
        file:  String,
        /// The error that stopped execution.
        error: RuntimeError,
    },
}

fn write_lines<E: std::fmt::Display>(f: &mut std::fmt::Formatter<'_>,
                                     file: &str,
                                     errors: &[E])
                                     -> std::fmt::Result {
    for (i, error) in errors.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "{file}:{error}")?;
    }
    Ok(())
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex { file, errors } => write_lines(f, file, errors),
            Self::Parse { file, errors } => write_lines(f, file, errors),
            Self::Type { file, errors } => write_lines(f, file, errors),
            Self::Runtime { file, error } => write!(f, "{file}:{error}"),
        }
    }
}

impl std::error::Error for RunError {}
