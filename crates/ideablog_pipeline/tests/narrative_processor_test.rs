mod test_utils;

use ideablog_core::{GenerationConfig, ParsedSections, Role};
use ideablog_error::ErrorCategory;
use ideablog_pipeline::NarrativeProcessor;
use test_utils::{ScriptedDriver, narrative_reply};

#[tokio::test]
async fn process_returns_sections_and_records_response() -> anyhow::Result<()> {
    let reply = narrative_reply("N", "G", "C");
    let driver = ScriptedDriver::always(reply.clone());
    let mut processor = NarrativeProcessor::new(driver.clone(), GenerationConfig::narrative_default());

    let sections = processor.process("hello").await?;

    assert_eq!(sections, ParsedSections::new("N", "G", "C"));
    assert_eq!(processor.current_narrative(), Some("N"));
    assert_eq!(processor.current_growth_points(), Some("G"));
    assert_eq!(processor.memory().len(), 1);
    assert_eq!(processor.memory().history()[0].raw_response, reply);

    let request = &driver.requests()[0];
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, Role::User);
    assert!(request.messages[0].content.contains("<brain_dump>\nhello\n</brain_dump>"));
    assert_eq!(request.model.as_deref(), Some("gemini-2.0-flash-thinking-exp-01-21"));
    Ok(())
}

#[tokio::test]
async fn refine_before_process_fails_without_calling_model() {
    let driver = ScriptedDriver::always(narrative_reply("N", "G", "C"));
    let mut processor = NarrativeProcessor::new(driver.clone(), GenerationConfig::narrative_default());

    let err = processor.refine("more").await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::PreconditionViolation);
    assert_eq!(err.message(), "No content to refine");
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn refine_embeds_current_narrative() -> anyhow::Result<()> {
    let driver = ScriptedDriver::sequence([
        narrative_reply("first narrative", "G1", "C1"),
        narrative_reply("second narrative", "G2", "C2"),
    ]);
    let mut processor = NarrativeProcessor::new(driver.clone(), GenerationConfig::narrative_default());

    processor.process("idea").await?;
    let refined = processor.refine("add examples").await?;

    let prompt = driver.last_prompt().unwrap();
    assert!(prompt.contains("<current_narrative>\nfirst narrative\n</current_narrative>"));
    assert!(prompt.contains("<refinement_focus>\nadd examples\n</refinement_focus>"));
    assert_eq!(refined.connected_narrative, "second narrative");
    assert_eq!(processor.current_narrative(), Some("second narrative"));
    assert_eq!(processor.current_growth_points(), Some("G2"));
    assert_eq!(processor.memory().len(), 2);
    Ok(())
}

#[tokio::test]
async fn failed_refine_keeps_previous_narrative() -> anyhow::Result<()> {
    let driver = ScriptedDriver::sequence([
        narrative_reply("kept", "G", "C"),
        "no tags at all".to_string(),
    ]);
    let mut processor = NarrativeProcessor::new(driver.clone(), GenerationConfig::narrative_default());

    processor.process("idea").await?;
    let err = processor.refine("change it").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::MissingSection);

    driver.push_failure("quota exceeded");
    let err = processor.refine("change it").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::RemoteCallFailure);

    assert_eq!(processor.current_narrative(), Some("kept"));
    assert_eq!(processor.memory().len(), 1);
    Ok(())
}

#[tokio::test]
async fn export_writes_current_values() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("final_narrative.json");
    let driver = ScriptedDriver::always(narrative_reply("N", "G", "C"));
    let mut processor = NarrativeProcessor::new(driver, GenerationConfig::narrative_default());

    processor.process("idea").await?;
    processor.export(&path)?;

    let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(doc["connected_narrative"], "N");
    assert_eq!(doc["growth_points"], "G");
    assert!(doc["timestamp"].is_string());
    assert!(doc.get("ai_contributions").is_none());
    Ok(())
}

#[tokio::test]
async fn history_export_and_transcript_number_responses() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("narrative_history.json");
    let driver = ScriptedDriver::sequence([
        narrative_reply("A", "G", "C"),
        narrative_reply("B", "G", "C"),
    ]);
    let mut processor = NarrativeProcessor::new(driver, GenerationConfig::narrative_default());

    processor.process("idea").await?;
    processor.refine("again").await?;
    processor.export_history(&path)?;

    let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(doc["interactions"].as_array().map(Vec::len), Some(2));

    let transcript = processor.memory_transcript();
    assert!(transcript.contains("<response1>"));
    assert!(transcript.contains("</response2>"));
    assert_eq!(transcript.matches("<interaction timestamp=").count(), 2);
    Ok(())
}
