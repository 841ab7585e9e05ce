use resumer_core::model::{ParsedResume, Section};
use std::fmt::Write;

const INDENT: &str = "  ";

/// Human-readable rendering: one block per section, Contact first.
pub fn format_resume(resume: &ParsedResume) -> String {
    let mut out = String::new();

    out.push_str("Contact\n");
    if resume.contact.is_empty() {
        out.push_str(INDENT);
        out.push_str("(none found)\n");
    }
    if let Some(ref email) = resume.contact.email {
        let _ = writeln!(out, "{INDENT}Email: {email}");
    }
    if let Some(ref phone) = resume.contact.phone_number {
        let _ = writeln!(out, "{INDENT}Phone Number: {phone}");
    }

    for (section, _) in resume.sections() {
        out.push('\n');
        out.push_str(&format_section(resume, section));
        out.push('\n');
    }

    out.trim_end().to_string()
}

/// A single section block: header line, then the indented content.
pub fn format_section(resume: &ParsedResume, section: Section) -> String {
    let content = resume.section(section);
    if content.is_empty() {
        format!("{section}\n{INDENT}(empty)")
    } else {
        format!("{section}\n{INDENT}{content}")
    }
}
