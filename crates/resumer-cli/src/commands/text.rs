use resumer_core::error::ResumeError;
use resumer_core::extraction::PdfExtractor;
use resumer_core::parsing::normalize_text;
use std::path::PathBuf;

pub fn run(input_file: PathBuf, raw: bool, extractor: &dyn PdfExtractor) -> Result<(), ResumeError> {
    let text = resumer_core::extract_text(&input_file, extractor)?;

    if raw {
        print!("{text}");
    } else {
        println!("{}", normalize_text(&text));
    }

    Ok(())
}
