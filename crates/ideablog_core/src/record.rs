//! Interaction records kept in session memory.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A raw narrative response, stamped when it was received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// When the response was recorded
    pub timestamp: DateTime<Local>,
    /// Full text returned by the model
    pub raw_response: String,
}

impl InteractionRecord {
    /// Stamp a response with the current time.
    pub fn now(raw_response: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            raw_response: raw_response.into(),
        }
    }
}

/// A draft and the styled post produced from it.
///
/// # Examples
///
/// ```
/// use ideablog_core::DraftRecord;
///
/// let record = DraftRecord::now("<draft>d</draft>", "post");
/// let json = serde_json::to_value(&record).unwrap();
/// assert!(json["timestamp"].is_string());
/// assert_eq!(json["original_draft"], "<draft>d</draft>");
/// assert_eq!(json["styled_draft"], "post");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    /// When the conversion finished
    pub timestamp: DateTime<Local>,
    /// The draft as sent to the model
    pub original_draft: String,
    /// The extracted blog post
    pub styled_draft: String,
}

impl DraftRecord {
    /// Stamp a conversion with the current time.
    pub fn now(original_draft: impl Into<String>, styled_draft: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            original_draft: original_draft.into(),
            styled_draft: styled_draft.into(),
        }
    }
}
