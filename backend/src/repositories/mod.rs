//! Database repositories: the only code that issues queries.
//!
//! Every query binds caller-supplied values as parameters; nothing is ever
//! interpolated into SQL text.

pub mod provider_repository;
pub mod review_repository;
pub mod user_repository;
