//! Thread-local domain error indicator.
//!
//! Distribution math never panics on bad input. An argument outside the
//! domain of `pdf` or `icdf` yields NaN and records [`MathError::Domain`]
//! here, in the manner of C's `errno = EDOM`. Each thread sees only its
//! own indicator.

use std::cell::Cell;
use thiserror::Error;

/// Kind of the most recent math failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("argument outside the domain of the function")]
    Domain,
}

thread_local! {
    static LAST_ERROR: Cell<Option<MathError>> = const { Cell::new(None) };
}

/// Records a domain error and returns NaN for convenient tail use.
#[inline]
pub fn domain_error() -> f64 {
    LAST_ERROR.with(|e| e.set(Some(MathError::Domain)));
    f64::NAN
}

/// The most recent error on this thread, if any.
pub fn last_error() -> Option<MathError> {
    LAST_ERROR.with(|e| e.get())
}

/// Clears the indicator on this thread.
pub fn clear() {
    LAST_ERROR.with(|e| e.set(None));
}
