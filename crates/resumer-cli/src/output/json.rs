use resumer_core::error::ResumeError;
use serde::Serialize;

/// Pretty-print as JSON with four-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ResumeError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumer_core::model::{ContactInfo, ParsedResume};

    #[test]
    fn test_four_space_indent() {
        let resume = ParsedResume {
            contact: ContactInfo {
                email: Some("jane@x.com".into()),
                phone_number: None,
            },
            skills: "Rust".into(),
            ..Default::default()
        };
        let json = to_pretty_json(&resume).unwrap();
        assert!(json.starts_with("{\n    \"Contact\": {\n        \"Email\": \"jane@x.com\"\n    },"));
        assert!(json.contains("\n    \"Skills\": \"Rust\",\n"));
    }
}
