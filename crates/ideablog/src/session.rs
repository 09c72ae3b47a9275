//! Interactive terminal sessions.
//!
//! Both sessions read from any `BufRead` and write to any `Write`, so the
//! binary wires them to stdin/stdout and tests feed them scripted input.

use ideablog_interface::IdeaBlogDriver;
use ideablog_pipeline::{NarrativeProcessor, StyleTransformer};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Line that ends a multi-line draft, compared case-insensitively.
pub const END_MARKER: &str = "END";

const RULE_WIDTH: usize = 50;

/// How a narrative session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThinkOutcome {
    /// The narrative was written to this path
    Exported(PathBuf),
    /// Input ran out before the user chose to export
    Abandoned,
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Read lines until [`END_MARKER`] or end of input, joined with newlines.
pub fn read_draft<R: BufRead>(input: &mut R) -> std::io::Result<String> {
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim().eq_ignore_ascii_case(END_MARKER) {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Brain dump, then a refine/export loop.
///
/// The first processing failure ends the session. A failed refinement is
/// reported and the loop continues with the previous narrative.
pub async fn think_session<D, R, W>(
    processor: &mut NarrativeProcessor<D>,
    mut input: R,
    output: &mut W,
    export_path: &Path,
) -> anyhow::Result<ThinkOutcome>
where
    D: IdeaBlogDriver,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the Thought Processor!")?;
    writeln!(output, "Please enter your initial brain dump:")?;
    output.flush()?;

    let Some(brain_dump) = read_line(&mut input)? else {
        return Ok(ThinkOutcome::Abandoned);
    };

    let sections = processor.process(&brain_dump).await?;
    writeln!(output, "\nConnected Narrative:\n{}", sections.connected_narrative)?;
    writeln!(output, "\nGrowth Points:\n{}", sections.growth_points)?;

    loop {
        writeln!(output, "\nOptions:")?;
        writeln!(output, "1: Suggest a refinement")?;
        writeln!(output, "2: Export and finish")?;
        write!(output, "Choose an option (1 or 2): ")?;
        output.flush()?;

        let Some(choice) = read_line(&mut input)? else {
            tracing::info!("Input closed before export");
            return Ok(ThinkOutcome::Abandoned);
        };

        match choice.trim() {
            "1" => {
                writeln!(output, "Enter your refinement request:")?;
                output.flush()?;
                let Some(request) = read_line(&mut input)? else {
                    return Ok(ThinkOutcome::Abandoned);
                };
                match processor.refine(&request).await {
                    Ok(sections) => {
                        writeln!(output, "\nRefined Narrative:\n{}", sections.connected_narrative)?;
                        writeln!(output, "\nUpdated Growth Points:\n{}", sections.growth_points)?;
                    }
                    Err(e) => {
                        tracing::warn!(category = %e.category(), "Refinement failed");
                        writeln!(output, "\nRefinement failed: {}", e.message())?;
                    }
                }
            }
            "2" => {
                processor.export(export_path)?;
                writeln!(
                    output,
                    "\nFinal narrative exported to {}",
                    export_path.display()
                )?;
                return Ok(ThinkOutcome::Exported(export_path.to_path_buf()));
            }
            _ => writeln!(output, "Invalid choice. Please choose 1 or 2.")?,
        }
    }
}

/// Read one draft, style it, print it and export the history.
///
/// Returns the styled post.
pub async fn blog_session<D, R, W>(
    transformer: &mut StyleTransformer<D>,
    mut input: R,
    output: &mut W,
    history_path: &Path,
) -> anyhow::Result<String>
where
    D: IdeaBlogDriver,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to Draft2Blog!")?;
    writeln!(
        output,
        "Enter your draft text, then '{}' on a new line when finished:",
        END_MARKER
    )?;
    output.flush()?;

    let draft = read_draft(&mut input)?;
    let post = transformer.convert(&draft).await?;

    let rule = "-".repeat(RULE_WIDTH);
    writeln!(output, "\nStyled Blog Post:\n{rule}\n{post}\n{rule}")?;

    transformer.export_history(history_path)?;
    writeln!(
        output,
        "\nConversion history has been exported to {}",
        history_path.display()
    )?;

    Ok(post)
}
