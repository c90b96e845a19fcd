//! Small helpers shared by the infrastructure layer.
//!
//! - [`db_error`] - Recognising specific database constraint violations

pub mod db_error;
