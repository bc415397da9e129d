use std::fmt::Display;

use crate::Float;

/// The error type returned by [`PSO::run`](crate::algorithms::particles::PSO::run) and the
/// [`Swarm`](crate::algorithms::particles::Swarm) operations.
///
/// The generic `E` is the error type of the [`CostFunction`](crate::traits::CostFunction) being
/// minimized.
#[derive(Debug, Clone, PartialEq)]
pub enum PsoError<E> {
    /// The optimizer or swarm was configured with invalid values (zero particles, zero
    /// dimensions, malformed limits, negative coefficients, ...).
    InvalidConfiguration(String),
    /// The cost function returned an error while being evaluated at `position`.
    Evaluation {
        /// The position at which the evaluation failed.
        position: Vec<Float>,
        /// The error returned by the cost function.
        source: E,
    },
    /// The cost function returned `NaN` or an infinite value at `position`.
    NonFinite {
        /// The position at which the evaluation produced a non-finite value.
        position: Vec<Float>,
        /// The offending value.
        value: Float,
    },
}

impl<E> PsoError<E> {
    /// Returns `true` if the error was caused by evaluating the cost function, either because it
    /// failed or because it returned a non-finite value.
    pub const fn is_evaluation_error(&self) -> bool {
        matches!(self, Self::Evaluation { .. } | Self::NonFinite { .. })
    }
}

impl<E: Display> Display for PsoError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(reason) => write!(f, "Invalid configuration: {reason}"),
            Self::Evaluation { position, source } => {
                write!(f, "Evaluation failed at {position:?}: {source}")
            }
            Self::NonFinite { position, value } => {
                write!(f, "Evaluation at {position:?} returned a non-finite value ({value})")
            }
        }
    }
}

impl<E> std::error::Error for PsoError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Evaluation { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{convert::Infallible, error::Error};

    #[derive(Debug)]
    struct Boom;
    impl Display for Boom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "boom")
        }
    }
    impl Error for Boom {}

    #[test]
    fn test_display() {
        let err: PsoError<Infallible> = PsoError::InvalidConfiguration("no particles".into());
        assert_eq!(err.to_string(), "Invalid configuration: no particles");
        let err: PsoError<Infallible> = PsoError::NonFinite {
            position: vec![1.0],
            value: Float::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "Evaluation at [1.0] returned a non-finite value (inf)"
        );
    }

    #[test]
    fn test_evaluation_error_grouping_and_source() {
        let err = PsoError::Evaluation {
            position: vec![0.0, 1.0],
            source: Boom,
        };
        assert!(err.is_evaluation_error());
        assert_eq!(err.source().map(|s| s.to_string()), Some("boom".to_string()));
        let err: PsoError<Boom> = PsoError::InvalidConfiguration("bad".into());
        assert!(!err.is_evaluation_error());
        assert!(err.source().is_none());
    }
}
