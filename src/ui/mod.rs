use std::{fmt, io};

pub mod dispatch;
pub mod input;
pub mod pagination;
pub mod repl;
pub mod search;
pub mod session;
pub mod state;
pub mod views;

#[derive(Debug)]
pub enum ReplError {
    Console(io::Error),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReplError::Console(err) => write!(f, "Console error: {}", err),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(error: io::Error) -> Self {
        ReplError::Console(error)
    }
}
