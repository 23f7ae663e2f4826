//! Chat webhook message composition
//!
//! Messages use the Google Chat card layout: a header naming the submitter,
//! a summary section, then one section per firm.

use crate::state::{ContactFrequency, RelationshipStrength};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

const NOT_SPECIFIED: &str = "Not specified";

/// A firm as received by the relay.
///
/// Parsed leniently: every field is optional and enumerations stay as raw
/// strings so unknown values can still be rendered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayFirm {
    pub firm_name: Option<String>,
    pub is_matched: bool,
    pub contact_name: Option<String>,
    pub contact_designation: Option<String>,
    pub relationship_strength: Option<String>,
    pub contact_frequency: Option<String>,
}

impl RelayFirm {
    fn name(&self) -> &str {
        non_blank(self.firm_name.as_deref()).unwrap_or("Unnamed firm")
    }

    fn relationship_label(&self) -> &'static str {
        self.relationship_strength
            .as_deref()
            .and_then(RelationshipStrength::parse)
            .map(|s| s.label())
            .unwrap_or(NOT_SPECIFIED)
    }

    fn frequency_label(&self) -> &'static str {
        self.contact_frequency
            .as_deref()
            .and_then(ContactFrequency::parse)
            .map(|f| f.label())
            .unwrap_or(NOT_SPECIFIED)
    }

    fn section(&self, index: usize) -> Value {
        let mut widgets = vec![field_widget(
            "Status",
            if self.is_matched {
                "Matched"
            } else {
                "Not in directory"
            },
        )];

        if self.is_matched {
            widgets.push(field_widget(
                "Contact",
                non_blank(self.contact_name.as_deref()).unwrap_or(NOT_SPECIFIED),
            ));
            widgets.push(field_widget(
                "Designation",
                non_blank(self.contact_designation.as_deref()).unwrap_or(NOT_SPECIFIED),
            ));
            widgets.push(field_widget("Relationship", self.relationship_label()));
            widgets.push(field_widget("Contact frequency", self.frequency_label()));
        }

        json!({
            "header": format!("{}. {}", index + 1, self.name()),
            "collapsible": false,
            "widgets": widgets,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn field_widget(label: &str, text: &str) -> Value {
    json!({
        "decoratedText": {
            "topLabel": label,
            "text": text,
        }
    })
}

/// Build the webhook payload for a submission
pub fn compose_chat_message(
    firms: &[RelayFirm],
    user_email: Option<&str>,
    submitted_at: DateTime<Utc>,
) -> Value {
    let email = non_blank(user_email).unwrap_or("Not provided");
    let matched = firms.iter().filter(|f| f.is_matched).count();

    let mut sections = vec![json!({
        "header": "Summary",
        "widgets": [
            field_widget("Submitted by", email),
            field_widget("Firms", &firms.len().to_string()),
            field_widget("Matched", &matched.to_string()),
            field_widget("Not in directory", &(firms.len() - matched).to_string()),
            field_widget("Submitted at", &submitted_at.to_rfc3339()),
        ],
    })];
    sections.extend(firms.iter().enumerate().map(|(i, firm)| firm.section(i)));

    json!({
        "text": format!(
            "New network assist submission from {email} ({} firms)",
            firms.len()
        ),
        "cardsV2": [{
            "cardId": "network-assist-submission",
            "card": {
                "header": {
                    "title": "New Network Assist Submission",
                    "subtitle": format!("Submitted by {email}"),
                },
                "sections": sections,
            },
        }],
    })
}
