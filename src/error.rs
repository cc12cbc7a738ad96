use thiserror::Error;

/// Errors reported by the generator and the filter.
///
/// Both kinds are terminal input-validation failures. Nothing here is
/// transient and no call returns partial output on failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An input parameter was outside its documented range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The recursion produced a non-finite intermediate value.
    #[error("non-finite value {value} at step {step}")]
    NumericDegenerate {
        /// Index of the observation whose step degenerated.
        step: usize,
        /// The offending value.
        value: f64,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
