use crate::{
    error::Result,
    inspect::{self, Failure},
};

/**
 * Error classification as a capability set.
 * Implement it with an empty `impl ErrorHandler for MyType {}` to get all the
 * inspection methods on `MyType`. They forward to the free functions in `inspect`.
 */
pub trait ErrorHandler {
    /// See [`inspect::try_get_code`].
    fn try_get_code<E: Failure + ?Sized>(&self, err: &E) -> Result<i32> {
        inspect::try_get_code(err)
    }

    /// See [`inspect::get_code`].
    fn get_code<E: Failure + ?Sized>(&self, err: &E) -> i32 {
        inspect::get_code(err)
    }

    fn is_conflict<E: Failure + ?Sized>(&self, err: &E) -> bool {
        inspect::is_conflict(err)
    }

    fn is_not_found<E: Failure + ?Sized>(&self, err: &E) -> bool {
        inspect::is_not_found(err)
    }

    fn is_unhandled<E: Failure + ?Sized>(&self, err: &E) -> bool {
        inspect::is_unhandled(err)
    }
}

/// Stateless [`ErrorHandler`], for use as a field or on its own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Handler;

impl ErrorHandler for Handler {}
