use crate::model::ContactInfo;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email pattern")
});

// Optional '+', then at least ten digits/spaces/hyphens bounded by digits.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d -]{8,}\d").expect("valid phone pattern"));

/// Find the first email address and the first phone number in the text.
pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone_number: PHONE.find(text).map(|m| m.as_str().to_string()),
    }
}
