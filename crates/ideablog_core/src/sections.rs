//! Sections parsed out of a narrative response.

use serde::{Deserialize, Serialize};

/// The three delimited sections of a narrative completion.
///
/// Serialized with the field names the relay returns to clients.
///
/// # Examples
///
/// ```
/// use ideablog_core::ParsedSections;
///
/// let sections = ParsedSections::new("N", "G", "C");
/// let json = serde_json::to_value(&sections).unwrap();
/// assert_eq!(json["connected_narrative"], "N");
/// assert_eq!(json["ai_contributions"], "C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedSections {
    /// Strengthened, expanded argument
    pub connected_narrative: String,
    /// Directions for further expansion
    pub growth_points: String,
    /// What the model added to the original ideas
    pub ai_contributions: String,
}

impl ParsedSections {
    /// Assemble sections from their parts.
    pub fn new(
        connected_narrative: impl Into<String>,
        growth_points: impl Into<String>,
        ai_contributions: impl Into<String>,
    ) -> Self {
        Self {
            connected_narrative: connected_narrative.into(),
            growth_points: growth_points.into(),
            ai_contributions: ai_contributions.into(),
        }
    }
}
