//! Classification of arbitrary errors.

use std::{
    any::{self, Any},
    error::Error,
};

use crate::error::{ClassifiedError, Result, UNHANDLED};

/// Returned by [`get_code`] when the error is not a [`ClassifiedError`].
pub const UNKNOWN_CODE: i32 = -1;

/**
 * Any error value that can be checked for a `ClassifiedError`.
 * Implemented for every sized `std::error::Error + 'static` type and for the
 * usual `dyn Error` trait objects, so `&*boxed_error` works too.
 */
pub trait Failure {
    /// Name of the type behind this value.
    fn type_name(&self) -> &'static str;

    fn as_classified(&self) -> Option<&ClassifiedError>;
}

impl<T: Error + 'static> Failure for T {
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn as_classified(&self) -> Option<&ClassifiedError> {
        (self as &dyn Any).downcast_ref::<ClassifiedError>()
    }
}

// The concrete type is erased here, the object type name is the best we get.
macro_rules! impl_failure_for_dyn {
    ($($object:ty),+ $(,)?) => {
        $(
            impl Failure for $object {
                fn type_name(&self) -> &'static str {
                    any::type_name::<$object>()
                }

                fn as_classified(&self) -> Option<&ClassifiedError> {
                    self.downcast_ref::<ClassifiedError>()
                }
            }
        )+
    };
}

impl_failure_for_dyn!(
    dyn Error + 'static,
    dyn Error + Send + 'static,
    dyn Error + Send + Sync + 'static,
);

/**
 * Returns the code if `err` is a `ClassifiedError`.
 * Otherwise returns an `UNHANDLED` error naming the type that didn't convert.
 */
pub fn try_get_code<E: Failure + ?Sized>(err: &E) -> Result<i32> {
    match err.as_classified() {
        Some(classified) => Ok(classified.code()),
        None => {
            let type_name = err.type_name();
            tracing::trace!(type_name, "error is not a ClassifiedError");
            Err(ClassifiedError::new(
                format!("could not convert type {} to type Error", type_name),
                UNHANDLED,
            ))
        }
    }
}

/// Like [`try_get_code`] but returns [`UNKNOWN_CODE`] instead of failing.
pub fn get_code<E: Failure + ?Sized>(err: &E) -> i32 {
    try_get_code(err).unwrap_or(UNKNOWN_CODE)
}

/// True if `err` is a `ClassifiedError` with the conflict code.
pub fn is_conflict<E: Failure + ?Sized>(err: &E) -> bool {
    err.as_classified().is_some_and(ClassifiedError::is_conflict)
}

/// True if `err` is a `ClassifiedError` with the not found code.
pub fn is_not_found<E: Failure + ?Sized>(err: &E) -> bool {
    err.as_classified().is_some_and(ClassifiedError::is_not_found)
}

/// True if `err` is a `ClassifiedError` with the unhandled code.
pub fn is_unhandled<E: Failure + ?Sized>(err: &E) -> bool {
    err.as_classified().is_some_and(ClassifiedError::is_unhandled)
}
