pub mod contact;
pub mod layout;
pub mod normalize;
pub mod sections;

pub use contact::extract_contact;
pub use layout::{check_layout, LayoutIssue};
pub use normalize::normalize_text;
pub use sections::parse_sections;
