use core::fmt;
use std::io;

/// Errors produced while generating, packing or exporting geometry.
#[derive(Debug)]
pub enum Error {
    /// A recursion depth below zero was requested.
    NegativeDepth(i64),
    /// A recursion depth above [`crate::config::MAX_DEPTH`] was requested.
    DepthTooLarge { depth: u64, max: u32 },
    /// An upload did not fit into a fixed-capacity buffer.
    BufferOverflow {
        kind: BufferKind,
        requested: usize,
        capacity: usize,
    },
    /// An index buffer referenced a vertex that does not exist.
    IndexOutOfRange { index: u32, len: usize },
    /// A triangle-list index buffer whose length is not a multiple of 3.
    IncompleteTriangle { len: usize },
    Io(io::Error),
}

/// Which half of a mesh an upload was targeting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BufferKind {
    Vertex,
    Index,
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferKind::Vertex => f.write_str("vertex"),
            BufferKind::Index => f.write_str("index"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NegativeDepth(depth) => {
                write!(f, "recursion depth must be non-negative, got {}", depth)
            }
            Error::DepthTooLarge { depth, max } => {
                write!(f, "recursion depth {} exceeds the maximum of {}", depth, max)
            }
            Error::BufferOverflow {
                kind,
                requested,
                capacity,
            } => write!(
                f,
                "{} buffer overflow: {} elements requested, capacity is {}",
                kind, requested, capacity
            ),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for {} vertices", index, len)
            }
            Error::IncompleteTriangle { len } => {
                write!(f, "triangle list has {} indices, which is not a multiple of 3", len)
            }
            Error::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let msg = Error::DepthTooLarge { depth: 12, max: 10 }.to_string();
        assert!(msg.contains("12") && msg.contains("10"));

        let msg = Error::BufferOverflow {
            kind: BufferKind::Index,
            requested: 9,
            capacity: 4,
        }
        .to_string();
        assert!(msg.starts_with("index buffer overflow"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;

        let err = Error::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(err.source().is_some());
        assert!(Error::NegativeDepth(-1).source().is_none());
    }
}
