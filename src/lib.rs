//! Errors carrying a status code, and helpers to classify them.

pub mod error;
pub mod handler;
pub mod inspect;

pub use crate::error::{new, ClassifiedError, Result, CONFLICT, NOT_FOUND, UNHANDLED};
pub use crate::handler::{ErrorHandler, Handler};
pub use crate::inspect::{
    get_code, is_conflict, is_not_found, is_unhandled, try_get_code, Failure, UNKNOWN_CODE,
};
