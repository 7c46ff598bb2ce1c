//! Domain models for the credential verification service.

pub mod password;
pub mod user;

pub use password::PasswordDigest;
pub use user::{UserId, UserRecord, Username};
