use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\t]+").expect("valid line break pattern"));

/// Collapse every run of newlines/tabs into a single space and trim the result.
///
/// Other whitespace (including runs of spaces) is left alone inside the text.
pub fn normalize_text(text: &str) -> String {
    LINE_BREAKS.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_newline_and_tab_runs() {
        assert_eq!(
            normalize_text("Education\n\n\tBSc Computer Science\n2020"),
            "Education BSc Computer Science 2020"
        );
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(normalize_text("\n\n  Skills  \t"), "Skills");
    }

    #[test]
    fn test_keeps_inner_spaces() {
        assert_eq!(normalize_text("Course  Work"), "Course  Work");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("\n\t\n"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "plain",
            "\tEducation\nBSc\r\n2020\n\n",
            "  a \n b\t\tc  ",
            "Projects\n\u{a0}\nWidget",
        ];
        for s in samples {
            let once = normalize_text(s);
            assert_eq!(normalize_text(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn test_no_newline_or_tab_remains() {
        let samples = ["a\nb", "\t\t", "x\r\ny\tz", "line one\n\nline two\n"];
        for s in samples {
            let out = normalize_text(s);
            assert!(!out.contains('\n') && !out.contains('\t'), "{out:?}");
        }
    }
}
