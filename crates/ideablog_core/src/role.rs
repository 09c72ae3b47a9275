//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a conversation turn.
///
/// # Examples
///
/// ```
/// use ideablog_core::Role;
///
/// assert_ne!(Role::User, Role::Assistant);
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// Out-of-band instructions for the model
    System,
    /// Turns written by the caller
    User,
    /// Turns produced by the model
    Assistant,
}
