use std::{fmt, str::FromStr};

use thiserror::Error;

/// One scrollable region of the page. Variant order is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Achievements,
    Leadership,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Achievements,
        Section::Leadership,
        Section::Contact,
    ];

    /// Anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Leadership => "leadership",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Leadership => "Leadership",
            Self::Contact => "Contact",
        }
    }

    /// Icon class rendered next to the nav label.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "fa-solid fa-house",
            Self::About => "fa-solid fa-user",
            Self::Skills => "fa-solid fa-code",
            Self::Projects => "fa-solid fa-briefcase",
            Self::Achievements => "fa-solid fa-award",
            Self::Leadership => "fa-solid fa-users",
            Self::Contact => "fa-solid fa-envelope",
        }
    }

    pub fn first() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.to_string(), section.id());
        }
    }

    #[test]
    fn test_document_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            [
                "home",
                "about",
                "skills",
                "projects",
                "achievements",
                "leadership",
                "contact"
            ]
        );
        assert_eq!(Section::first(), Section::Home);
    }

    #[test]
    fn test_unknown_section() {
        let err = "nonexistent".parse::<Section>().unwrap_err();
        assert_eq!(err, UnknownSection("nonexistent".to_string()));
        assert_eq!(err.to_string(), "unknown section: nonexistent");
        // anchors are case sensitive
        assert!("Home".parse::<Section>().is_err());
    }
}
