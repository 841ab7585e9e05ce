use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed résumé sections, in the order they are expected to
/// appear in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Education,
    Experience,
    Projects,
    Skills,
    #[serde(rename = "Course Work")]
    CourseWork,
    Achievements,
    Certificates,
}

impl Section {
    /// All sections in declared order.
    pub const ALL: [Section; 7] = [
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::CourseWork,
        Section::Achievements,
        Section::Certificates,
    ];

    /// Literal header text marking the start of this section.
    pub fn header(self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::CourseWork => "Course Work",
            Section::Achievements => "Achievements",
            Section::Certificates => "Certificates",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Section> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        Section::ALL.into_iter().find(|section| {
            let name: String = section
                .header()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();
            name == wanted
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Contact details found anywhere in the résumé text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        rename = "Phone Number",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone_number.is_none()
    }
}

/// A résumé split into its labeled sections.
///
/// Field order is the serialized key order: Contact first, then the
/// sections in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(rename = "Contact")]
    pub contact: ContactInfo,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Projects")]
    pub projects: String,
    #[serde(rename = "Skills")]
    pub skills: String,
    #[serde(rename = "Course Work")]
    pub course_work: String,
    #[serde(rename = "Achievements")]
    pub achievements: String,
    #[serde(rename = "Certificates")]
    pub certificates: String,
}

impl ParsedResume {
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Education => &self.education,
            Section::Experience => &self.experience,
            Section::Projects => &self.projects,
            Section::Skills => &self.skills,
            Section::CourseWork => &self.course_work,
            Section::Achievements => &self.achievements,
            Section::Certificates => &self.certificates,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Education => &mut self.education,
            Section::Experience => &mut self.experience,
            Section::Projects => &mut self.projects,
            Section::Skills => &mut self.skills,
            Section::CourseWork => &mut self.course_work,
            Section::Achievements => &mut self.achievements,
            Section::Certificates => &mut self.certificates,
        }
    }

    /// Sections paired with their content, in declared order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::ALL.into_iter().map(move |s| (s, self.section(s)))
    }

    /// Number of sections with non-empty content.
    pub fn filled_sections(&self) -> usize {
        self.sections().filter(|(_, text)| !text.is_empty()).count()
    }
}
