/**
 * Definitions shared by the rest of the application: the error type and the
 * structs that hold command-line arguments.
 */
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use structopt::StructOpt;


pub type Result<T> = ::std::result::Result<T, QuizError>;


#[derive(Debug)]
pub enum QuizError {
    /// For when the quiz file cannot be opened or read.
    CannotReadFile(PathBuf),
    /// For when the question pool holds fewer questions than a quiz needs.
    InsufficientData { available: usize, requested: usize },
    Io(io::Error),
    ReadlineInterrupted,
}


impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuizError::CannotReadFile(ref path) => {
                write!(f, "cannot read quiz file '{}'", path.to_string_lossy())
            },
            QuizError::InsufficientData { available, requested } => {
                write!(
                    f,
                    "the quiz file holds {} question(s) but {} were requested",
                    available, requested
                )
            },
            QuizError::Io(ref err) => {
                write!(f, "IO error ({})", err)
            },
            QuizError::ReadlineInterrupted => {
                Ok(())
            },
        }
    }
}


impl error::Error for QuizError {
    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            QuizError::Io(ref err) => Some(err),
            _ => None,
        }
    }
}


pub fn is_broken_pipe(e: &QuizError) -> bool {
    if let QuizError::Io(e) = e {
        if let io::ErrorKind::BrokenPipe = e.kind() {
            return true;
        }
    }
    false
}


/// Holds the command-line configuration for the application.
#[derive(StructOpt)]
#[structopt(name = "quiztime", about = "Take a pop quiz in the terminal.")]
pub struct Options {
    /// Path to the quiz file.
    #[structopt(default_value = "quiz.txt")]
    pub path: PathBuf,
    /// Number of questions per quiz.
    #[structopt(short = "n", default_value = "10")]
    pub num_to_ask: usize,
    /// Seed the random number generator, for reproducible quizzes.
    #[structopt(long = "seed")]
    pub seed: Option<u64>,
    /// Do not emit colorized output.
    #[structopt(long = "no-color")]
    pub no_color: bool,
}
