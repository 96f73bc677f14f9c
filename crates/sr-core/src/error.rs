use thiserror::Error;

pub type SrResult<T> = Result<T, SrError>;

/// Shared error taxonomy.
///
/// `Domain` describes physically invalid input (the computation must abort);
/// `Shape` and `Empty` describe mismatched or missing sequences.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SrError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Domain error: {what} at index {index} (value={value})")]
    Domain {
        what: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Shape mismatch: {what} (expected={expected}, found={found})")]
    Shape {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Empty input: {what}")]
    Empty { what: &'static str },
}

impl SrError {
    /// Invalid physical input.
    pub fn is_domain(&self) -> bool {
        matches!(self, SrError::Domain { .. })
    }

    /// Mismatched sequence lengths or empty phase/evaluation lists.
    pub fn is_shape(&self) -> bool {
        matches!(self, SrError::Shape { .. } | SrError::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_quantity_and_index() {
        let err = SrError::Domain {
            what: "density",
            index: 3,
            value: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("density"));
        assert!(msg.contains("index 3"));
    }

    #[test]
    fn classification() {
        assert!(SrError::Empty { what: "phases" }.is_shape());
        assert!(
            SrError::Shape {
                what: "vs",
                expected: 2,
                found: 3
            }
            .is_shape()
        );
        assert!(
            SrError::Domain {
                what: "K",
                index: 0,
                value: f64::NAN
            }
            .is_domain()
        );
        assert!(!SrError::InvalidArg { what: "q" }.is_domain());
    }
}
