use std::fmt;

/// Rejected board operations.
///
/// Every variant leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Requested global radius is outside the configured bounds.
    InvalidRadius { requested: i32, min: u32, max: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidRadius { requested, min, max } => {
                write!(f, "radius {requested} is outside [{min}, {max}]")
            }
        }
    }
}

impl std::error::Error for BoardError {}
