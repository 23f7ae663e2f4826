//! Firm entries accumulated by the advisor form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How well the user knows their contact at a firm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
}

impl RelationshipStrength {
    pub const ALL: [Self; 4] = [Self::VeryStrong, Self::Strong, Self::Moderate, Self::Weak];

    pub fn next(&self) -> Self {
        match self {
            Self::VeryStrong => Self::Strong,
            Self::Strong => Self::Moderate,
            Self::Moderate => Self::Weak,
            Self::Weak => Self::VeryStrong,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::VeryStrong => Self::Weak,
            Self::Strong => Self::VeryStrong,
            Self::Moderate => Self::Strong,
            Self::Weak => Self::Moderate,
        }
    }

    /// Wire value, e.g. `very-strong`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryStrong => "very-strong",
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryStrong => "Very Strong",
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }

    /// Parse a wire value; anything unrecognised is `None`
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

/// How often the user is in touch with their contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactFrequency {
    Quarterly,
    Annually,
    Occasionally,
    Recently,
}

impl ContactFrequency {
    pub const ALL: [Self; 4] = [
        Self::Quarterly,
        Self::Annually,
        Self::Occasionally,
        Self::Recently,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Quarterly => Self::Annually,
            Self::Annually => Self::Occasionally,
            Self::Occasionally => Self::Recently,
            Self::Recently => Self::Quarterly,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Quarterly => Self::Recently,
            Self::Annually => Self::Quarterly,
            Self::Occasionally => Self::Annually,
            Self::Recently => Self::Occasionally,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quarterly => "quarterly",
            Self::Annually => "annually",
            Self::Occasionally => "occasionally",
            Self::Recently => "recently",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Quarterly => "Quarterly",
            Self::Annually => "Annually",
            Self::Occasionally => "Occasionally",
            Self::Recently => "Recently",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

/// Contact sub-form input for a matched firm
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub designation: String,
    pub relationship_strength: Option<RelationshipStrength>,
    pub contact_frequency: Option<ContactFrequency>,
}

impl ContactDetails {
    /// Names of the fields that are blank or unset
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.designation.trim().is_empty() {
            missing.push("designation");
        }
        if self.relationship_strength.is_none() {
            missing.push("relationship strength");
        }
        if self.contact_frequency.is_none() {
            missing.push("contact frequency");
        }
        missing
    }
}

/// One firm in the user's submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmEntry {
    pub id: Uuid,
    pub firm_name: String,
    pub is_matched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_strength: Option<RelationshipStrength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_frequency: Option<ContactFrequency>,
    pub timestamp: DateTime<Utc>,
}

impl FirmEntry {
    /// Entry for a name that is not in the directory; never carries contact fields
    pub fn unmatched(firm_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            firm_name: firm_name.into(),
            is_matched: false,
            contact_name: None,
            contact_designation: None,
            relationship_strength: None,
            contact_frequency: None,
            timestamp: Utc::now(),
        }
    }

    /// Entry for a directory firm with its contact details.
    ///
    /// Callers must have checked `contact.missing_fields()` is empty.
    pub(crate) fn matched(firm_name: impl Into<String>, contact: ContactDetails) -> Self {
        Self {
            id: Uuid::new_v4(),
            firm_name: firm_name.into(),
            is_matched: true,
            contact_name: Some(contact.name.trim().to_string()),
            contact_designation: Some(contact.designation.trim().to_string()),
            relationship_strength: contact.relationship_strength,
            contact_frequency: contact.contact_frequency,
            timestamp: Utc::now(),
        }
    }

    pub fn has_contact(&self) -> bool {
        self.contact_name.is_some()
    }

    /// One-line description for summaries
    pub fn summary_line(&self) -> String {
        if !self.is_matched {
            return format!("{} (not in directory)", self.firm_name);
        }
        format!(
            "{} - {}, {} ({}, {})",
            self.firm_name,
            self.contact_name.as_deref().unwrap_or("Not specified"),
            self.contact_designation.as_deref().unwrap_or("Not specified"),
            self.relationship_strength
                .map(|s| s.label())
                .unwrap_or("Not specified"),
            self.contact_frequency
                .map(|f| f.label())
                .unwrap_or("Not specified"),
        )
    }
}
