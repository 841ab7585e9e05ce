use crate::model::{ParsedResume, Section};
use crate::parsing::contact::extract_contact;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Window patterns for one section.
///
/// `bounded` runs from this section's header to a later header, one pattern
/// per later section in declared order. `open` runs to end of text.
struct SectionWindows {
    section: Section,
    bounded: Vec<(Section, Regex)>,
    open: Regex,
}

static WINDOWS: LazyLock<Vec<SectionWindows>> = LazyLock::new(|| {
    Section::ALL
        .iter()
        .enumerate()
        .map(|(i, &section)| {
            let start = regex::escape(section.header());
            let bounded = Section::ALL[i + 1..]
                .iter()
                .map(|&next| {
                    let end = regex::escape(next.header());
                    let re = Regex::new(&format!(r"(?s){start}(.*?){end}"))
                        .expect("valid section window pattern");
                    (next, re)
                })
                .collect();
            let open =
                Regex::new(&format!(r"(?s){start}(.*)")).expect("valid section window pattern");
            SectionWindows {
                section,
                bounded,
                open,
            }
        })
        .collect()
});

/// Split normalized résumé text into its labeled sections.
///
/// Each section's window starts at its header and ends at the next declared
/// header found after it, or at end of text when no later header follows.
/// Windows are matched independently against the whole text, so they may
/// overlap when headers are out of order. A section whose header never
/// appears is left empty.
pub fn parse_sections(text: &str) -> ParsedResume {
    let mut resume = ParsedResume {
        contact: extract_contact(text),
        ..Default::default()
    };

    for windows in WINDOWS.iter() {
        let value = match find_window(windows, text) {
            Some(body) => body.replace(windows.section.header(), "").trim().to_string(),
            None => String::new(),
        };
        *resume.section_mut(windows.section) = value;
    }

    resume
}

/// Body of the first matching window, excluding both headers.
fn find_window<'t>(windows: &SectionWindows, text: &'t str) -> Option<&'t str> {
    for (next, re) in &windows.bounded {
        if let Some(body) = re.captures(text).and_then(|c| c.get(1)) {
            debug!(
                section = %windows.section,
                until = %next,
                len = body.len(),
                "matched section window"
            );
            return Some(body.as_str());
        }
    }

    let body = windows.open.captures(text).and_then(|c| c.get(1))?;
    debug!(
        section = %windows.section,
        until = "end of text",
        len = body.len(),
        "matched section window"
    );
    Some(body.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "Contact jane@x.com Education BS CS 2020 Experience Intern at Acme \
        Projects Built a widget Skills Python, SQL Course Work Algorithms \
        Achievements Dean's list Certificates AWS Cert";

    #[test]
    fn test_all_sections_in_order() {
        let r = parse_sections(FULL);
        assert_eq!(r.contact.email.as_deref(), Some("jane@x.com"));
        assert_eq!(r.contact.phone_number, None);
        assert_eq!(r.education, "BS CS 2020");
        assert_eq!(r.experience, "Intern at Acme");
        assert_eq!(r.projects, "Built a widget");
        assert_eq!(r.skills, "Python, SQL");
        assert_eq!(r.course_work, "Algorithms");
        assert_eq!(r.achievements, "Dean's list");
        assert_eq!(r.certificates, "AWS Cert");
    }

    #[test]
    fn test_missing_section_is_empty_and_neighbours_survive() {
        let text = FULL.replace("Projects Built a widget ", "");
        let r = parse_sections(&text);
        assert_eq!(r.projects, "");
        assert_eq!(r.experience, "Intern at Acme");
        assert_eq!(r.skills, "Python, SQL");
        assert_eq!(r.education, "BS CS 2020");
        assert_eq!(r.certificates, "AWS Cert");
    }

    #[test]
    fn test_missing_last_section_runs_to_end() {
        let text = "Education BSc Achievements Hackathon winner";
        let r = parse_sections(text);
        assert_eq!(r.education, "BSc");
        assert_eq!(r.achievements, "Hackathon winner");
        assert_eq!(r.certificates, "");
    }

    #[test]
    fn test_empty_input() {
        let r = parse_sections("");
        assert!(r.contact.is_empty());
        for (section, value) in r.sections() {
            assert_eq!(value, "", "{section}");
        }
    }

    #[test]
    fn test_repeated_own_header_is_removed() {
        let text = "Skills Skills: Rust Course Work Compilers";
        let r = parse_sections(text);
        assert_eq!(r.skills, ": Rust");
        assert_eq!(r.course_work, "Compilers");
    }

    #[test]
    fn test_adjacent_headers_give_empty_section() {
        let r = parse_sections("Education Experience Acme");
        assert_eq!(r.education, "");
        assert_eq!(r.experience, "Acme");
    }

    #[test]
    fn test_out_of_order_headers_overlap() {
        // Skills before Projects: Projects runs on to Course Work.
        let text = "Skills Rust Projects Widget Course Work Algorithms";
        let r = parse_sections(text);
        assert_eq!(r.projects, "Widget");
        assert_eq!(r.skills, "Rust Projects Widget");
        assert_eq!(r.course_work, "Algorithms");
    }
}
