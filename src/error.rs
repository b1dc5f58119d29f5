use thiserror::Error;

/// Hard failures detected while constructing or reconfiguring an engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A parameter or status component lies outside its valid range.
    #[error("{name} = {value} is outside [0, {modulus})")]
    OutOfRange { name: &'static str, value: i64, modulus: i64 },
    /// Lagged Fibonacci taps are not strictly increasing, contain 0,
    /// or do not fit inside the ring.
    #[error("invalid taps {taps:?}: {reason}")]
    InvalidTaps { taps: Vec<u32>, reason: &'static str },
    /// Explicit ring state has the wrong shape.
    #[error("invalid ring state: {0}")]
    InvalidRing(&'static str),
    /// A serialized parameter or status block has the wrong number of components.
    #[error("expected {expected} components, found {found}")]
    WrongLength { expected: usize, found: usize },
    /// split(s, n) requires s >= 1 and n < s.
    #[error("invalid split into {streams} streams, stream {index} requested")]
    InvalidSplit { streams: u32, index: u32 },
    /// A coefficient has no multiplicative inverse modulo the engine modulus.
    #[error("{0} has no inverse modulo {1}")]
    NoInverse(i64, i64),
    /// The linear system for the leapfrog coefficients has no solution.
    #[error("leapfrog recurrence has no solution modulo {0}")]
    SingularSystem(i64),
}

/// Failure to read an engine or distribution from its text form.
/// The target object is never modified when this is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected:?} at offset {offset}")]
    Expected { expected: String, offset: usize },
    #[error("malformed number {token:?} at offset {offset}")]
    Number { token: String, offset: usize },
    #[error("unknown engine name {0:?}")]
    UnknownName(String),
    #[error("engine word width {found} does not match {expected}")]
    WordWidth { found: u32, expected: u32 },
    #[error("invalid state: {0}")]
    Invalid(#[from] EngineError),
    #[error("invalid distribution parameters: {0}")]
    Param(#[from] DistError),
    #[error("trailing input at offset {0}")]
    Trailing(usize),
}

/// Distribution parameters that violate the law's constraints.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DistError {
    #[error("{name} must be {requirement}")]
    InvalidParameter { name: &'static str, requirement: &'static str },
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {
        let err = EngineError::OutOfRange { name: "a1", value: -3, modulus: 2147462579 };
        assert_eq!(err.to_string(), "a1 = -3 is outside [0, 2147462579)");

        let err = EngineError::InvalidSplit { streams: 2, index: 5 };
        assert!(err.to_string().contains("2 streams"));

        let err: ParseError = EngineError::InvalidRing("index out of range").into();
        assert!(err.to_string().contains("index out of range"));

        let err: ParseError = DistError::InvalidParameter { name: "sigma", requirement: "positive" }.into();
        assert_eq!(err.to_string(), "invalid distribution parameters: sigma must be positive");
    }
}
