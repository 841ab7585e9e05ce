use resumer_core::error::ResumeError;
use resumer_core::extraction::PdfExtractor;
use resumer_core::model::Section;
use resumer_core::ParseOptions;
use std::path::PathBuf;
use tracing::info;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    section: Option<&str>,
    strict: bool,
    extractor: &dyn PdfExtractor,
) -> Result<(), ResumeError> {
    let only = section
        .map(|name| {
            Section::from_str_loose(name).ok_or_else(|| ResumeError::UnknownSection(name.into()))
        })
        .transpose()?;

    let options = ParseOptions {
        strict_layout: strict,
    };
    let parsed = resumer_core::parse_file(&input_file, extractor, &options)?;
    info!(
        file = %input_file.display(),
        filled = parsed.resume.filled_sections(),
        "parsed résumé"
    );

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = output::json::to_pretty_json(&parsed.resume)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} of {} section(s), written to {}",
                parsed.resume.filled_sections(),
                Section::ALL.len(),
                path.display()
            );
            for issue in &parsed.layout_issues {
                eprintln!("  warning: {issue}");
            }
        }
        None => {
            let output_str = match (output_format, only) {
                ("text", Some(section)) => output::text::format_section(&parsed.resume, section),
                ("text", None) => output::text::format_resume(&parsed.resume),
                (_, Some(section)) => output::json::to_pretty_json(parsed.resume.section(section))?,
                _ => output::json::to_pretty_json(&parsed.resume)?,
            };
            println!("{output_str}");
        }
    }

    Ok(())
}
