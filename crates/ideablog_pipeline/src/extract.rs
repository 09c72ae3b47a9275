//! Section extraction from tagged model output.

use ideablog_core::ParsedSections;
use ideablog_error::{IdeaBlogResult, PipelineError, PipelineErrorKind};

/// Tag holding the expanded argument.
pub const CONNECTED_NARRATIVE: &str = "connected_narrative";
/// Tag holding expansion directions.
pub const GROWTH_POINTS: &str = "growth_points";
/// Tag holding the model's account of its additions.
pub const AI_CONTRIBUTIONS: &str = "ai_contributions";
/// Tag holding the styled blog post.
pub const STYLED_DRAFT: &str = "styled_draft";

/// Return the trimmed text between the first `<tag>` and the first `</tag>`
/// that follows it.
///
/// Only the first pair is honored; nested or repeated tags of the same name
/// are not interpreted.
///
/// # Errors
///
/// Fails with a missing-section error naming `tag` when either marker is absent.
///
/// # Examples
///
/// ```
/// use ideablog_pipeline::extract;
///
/// let response = "Sure!\n<styled_draft>\n  The post.\n</styled_draft>\nDone.";
/// assert_eq!(extract(response, "styled_draft").unwrap(), "The post.");
/// assert!(extract(response, "growth_points").is_err());
/// ```
pub fn extract(text: &str, tag: &str) -> IdeaBlogResult<String> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let start = text
        .find(&open)
        .map(|idx| idx + open.len())
        .ok_or_else(|| missing(tag))?;
    let len = text[start..].find(&close).ok_or_else(|| missing(tag))?;

    Ok(text[start..start + len].trim().to_string())
}

/// Extract all three narrative sections, failing on the first one absent.
pub fn extract_sections(text: &str) -> IdeaBlogResult<ParsedSections> {
    Ok(ParsedSections {
        connected_narrative: extract(text, CONNECTED_NARRATIVE)?,
        growth_points: extract(text, GROWTH_POINTS)?,
        ai_contributions: extract(text, AI_CONTRIBUTIONS)?,
    })
}

#[track_caller]
fn missing(tag: &str) -> PipelineError {
    tracing::warn!(tag, "Model response is missing a section");
    PipelineError::new(PipelineErrorKind::MissingSection(tag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideablog_error::{ErrorCategory, IdeaBlogErrorKind};

    #[test]
    fn trims_surrounding_whitespace() {
        let text = "<growth_points>\n\n  - more  \n</growth_points>";
        assert_eq!(extract(text, "growth_points").unwrap(), "- more");
    }

    #[test]
    fn first_pair_wins() {
        let text = "<t>one</t> <t>two</t>";
        assert_eq!(extract(text, "t").unwrap(), "one");
    }

    #[test]
    fn empty_section_is_allowed() {
        assert_eq!(extract("<t></t>", "t").unwrap(), "");
    }

    #[test]
    fn close_before_open_is_missing() {
        let err = extract("</t> text <t>", "t").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::MissingSection);
    }

    #[test]
    fn missing_close_names_tag() {
        let err = extract("<styled_draft>unterminated", STYLED_DRAFT).unwrap_err();
        match err.kind() {
            IdeaBlogErrorKind::Pipeline(e) => {
                assert_eq!(e.kind, PipelineErrorKind::MissingSection("styled_draft".into()))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn tag_names_do_not_match_by_prefix() {
        assert!(extract("<tag_extra>x</tag_extra>", "tag").is_err());
    }

    #[test]
    fn sections_extracted_in_any_order() {
        let text = "<ai_contributions>C</ai_contributions>\
                    <connected_narrative>N</connected_narrative>\
                    <growth_points>G</growth_points>";
        assert_eq!(extract_sections(text).unwrap(), ParsedSections::new("N", "G", "C"));
    }

    #[test]
    fn any_missing_section_fails() {
        let text = "<connected_narrative>N</connected_narrative><growth_points>G</growth_points>";
        let err = extract_sections(text).unwrap_err();
        assert!(err.message().contains(AI_CONTRIBUTIONS));
    }
}
