use crate::model::Section;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A deviation from the expected header layout: every section header
/// present exactly once, in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutIssue {
    /// The section's header never appears.
    Missing { section: Section },
    /// The section's header appears more than once; only the first counts.
    Repeated { section: Section, occurrences: usize },
    /// The section's header appears before the header of `after`,
    /// which is declared earlier.
    OutOfOrder { section: Section, after: Section },
}

impl LayoutIssue {
    pub fn section(&self) -> Section {
        match self {
            LayoutIssue::Missing { section }
            | LayoutIssue::Repeated { section, .. }
            | LayoutIssue::OutOfOrder { section, .. } => *section,
        }
    }
}

impl fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutIssue::Missing { section } => write!(f, "'{section}' header not found"),
            LayoutIssue::Repeated {
                section,
                occurrences,
            } => write!(f, "'{section}' header appears {occurrences} times"),
            LayoutIssue::OutOfOrder { section, after } => {
                write!(f, "'{section}' header appears before '{after}'")
            }
        }
    }
}

/// Check that the section headers appear once each and in declared order.
///
/// Sections are still extracted when this reports problems; the issues
/// tell the caller which sections may be truncated, merged or empty.
pub fn check_layout(text: &str) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();
    // Last present section and the offset of its first header.
    let mut previous: Option<(Section, usize)> = None;

    for section in Section::ALL {
        let header = section.header();
        let Some(first) = text.find(header) else {
            issues.push(LayoutIssue::Missing { section });
            continue;
        };

        let occurrences = text.matches(header).count();
        if occurrences > 1 {
            issues.push(LayoutIssue::Repeated {
                section,
                occurrences,
            });
        }

        match previous {
            Some((after, prev_offset)) if first < prev_offset => {
                issues.push(LayoutIssue::OutOfOrder { section, after });
            }
            _ => previous = Some((section, first)),
        }
    }

    for issue in &issues {
        warn!(section = %issue.section(), "{issue}");
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERED: &str = "Education BSc Experience Acme Projects Widget Skills Rust \
        Course Work Algorithms Achievements Award Certificates AWS";

    #[test]
    fn test_well_formed_layout() {
        assert!(check_layout(ORDERED).is_empty());
    }

    #[test]
    fn test_missing_header() {
        let text = ORDERED.replace("Projects Widget ", "");
        assert_eq!(
            check_layout(&text),
            vec![LayoutIssue::Missing {
                section: Section::Projects
            }]
        );
    }

    #[test]
    fn test_repeated_header() {
        let text = ORDERED.replace("Rust", "Rust Skills Go");
        assert_eq!(
            check_layout(&text),
            vec![LayoutIssue::Repeated {
                section: Section::Skills,
                occurrences: 2
            }]
        );
    }

    #[test]
    fn test_out_of_order_header() {
        let text = "Experience Acme Education BSc";
        let issues = check_layout(text);
        assert!(issues.contains(&LayoutIssue::OutOfOrder {
            section: Section::Experience,
            after: Section::Education,
        }));
    }

    #[test]
    fn test_out_of_order_compares_against_last_in_order_section() {
        // Projects is out of order; Skills is compared with Experience, not Projects.
        let text = "Projects Widget Education BSc Experience Acme Skills Rust";
        let issues = check_layout(text);
        assert!(issues.contains(&LayoutIssue::OutOfOrder {
            section: Section::Projects,
            after: Section::Experience,
        }));
        assert!(!issues.iter().any(|i| matches!(
            i,
            LayoutIssue::OutOfOrder {
                section: Section::Skills,
                ..
            }
        )));
    }

    #[test]
    fn test_empty_text_reports_every_section_missing() {
        let issues = check_layout("");
        assert_eq!(issues.len(), Section::ALL.len());
        assert!(issues
            .iter()
            .all(|i| matches!(i, LayoutIssue::Missing { .. })));
    }

    #[test]
    fn test_display() {
        let issue = LayoutIssue::OutOfOrder {
            section: Section::CourseWork,
            after: Section::Skills,
        };
        assert_eq!(issue.to_string(), "'Course Work' header appears before 'Skills'");
    }
}
