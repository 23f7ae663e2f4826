//! Input state for the firm and contact views

use super::entry::{ContactDetails, ContactFrequency, RelationshipStrength};
use super::field::FormField;
use crate::directory::FirmDirectory;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Focus targets on the firm input view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmInputFocus {
    Email,
    FirmName,
    EnteredList,
}

/// Email, firm name and suggestion state for the firm input view
#[derive(Debug, Clone)]
pub struct FirmInputForm {
    pub email: FormField,
    pub firm_name: FormField,
    pub suggestions: Vec<String>,
    /// Highlighted suggestion, if the user moved into the list
    pub highlighted: Option<usize>,
    /// Selected row in the entered firms list
    pub selected_entry: usize,
    pub active_field_index: usize,
}

impl FirmInputForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Your email"),
            firm_name: FormField::text("firm_name", "Firm name"),
            suggestions: Vec::new(),
            highlighted: None,
            selected_entry: 0,
            active_field_index: 0,
        }
    }

    pub fn focus(&self) -> FirmInputFocus {
        match self.active_field_index {
            0 => FirmInputFocus::Email,
            1 => FirmInputFocus::FirmName,
            _ => FirmInputFocus::EnteredList,
        }
    }

    /// Recompute suggestions for the current firm name text
    pub fn refresh_suggestions(&mut self, directory: &FirmDirectory, max_suggestions: usize) {
        self.suggestions = directory.get_firm_suggestions(self.firm_name.as_text(), max_suggestions);
        self.highlighted = None;
    }

    pub fn highlight_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(self.suggestions.len() - 1),
        });
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = match self.highlighted {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Name to submit: the highlighted suggestion, else the typed text
    pub fn candidate(&self) -> String {
        self.highlighted
            .and_then(|i| self.suggestions.get(i))
            .cloned()
            .unwrap_or_else(|| self.firm_name.as_text().to_string())
    }

    pub fn clear_firm_name(&mut self) {
        self.firm_name.clear();
        self.suggestions.clear();
        self.highlighted = None;
    }

    /// Keep the list selection in range after entries change
    pub fn clamp_selection(&mut self, entry_count: usize) {
        if entry_count == 0 {
            self.selected_entry = 0;
        } else if self.selected_entry >= entry_count {
            self.selected_entry = entry_count - 1;
        }
    }

    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            FirmInputFocus::Email => Some(&mut self.email),
            FirmInputFocus::FirmName => Some(&mut self.firm_name),
            FirmInputFocus::EnteredList => None,
        }
    }
}

impl Default for FirmInputForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for FirmInputForm {
    fn field_count(&self) -> usize {
        3 // email, firm name, entered list
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
}

/// Contact sub-form for a matched firm
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub designation: FormField,
    pub relationship_strength: Option<RelationshipStrength>,
    pub contact_frequency: Option<ContactFrequency>,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("contact_name", "Contact name"),
            designation: FormField::text("contact_designation", "Designation"),
            relationship_strength: None,
            contact_frequency: None,
            active_field_index: 0,
        }
    }

    /// True if the active field is one of the choice fields
    pub fn is_choice_active(&self) -> bool {
        self.active_field_index >= 2
    }

    pub fn is_last_field_active(&self) -> bool {
        self.active_field_index == self.field_count() - 1
    }

    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.designation),
            _ => None,
        }
    }

    /// Move the active choice forward; an unset choice starts at the first option
    pub fn next_choice(&mut self) {
        match self.active_field_index {
            2 => {
                self.relationship_strength = Some(
                    self.relationship_strength
                        .map(|s| s.next())
                        .unwrap_or(RelationshipStrength::VeryStrong),
                )
            }
            3 => {
                self.contact_frequency = Some(
                    self.contact_frequency
                        .map(|f| f.next())
                        .unwrap_or(ContactFrequency::Quarterly),
                )
            }
            _ => {}
        }
    }

    /// Move the active choice backward; an unset choice starts at the last option
    pub fn prev_choice(&mut self) {
        match self.active_field_index {
            2 => {
                self.relationship_strength = Some(
                    self.relationship_strength
                        .map(|s| s.prev())
                        .unwrap_or(RelationshipStrength::Weak),
                )
            }
            3 => {
                self.contact_frequency = Some(
                    self.contact_frequency
                        .map(|f| f.prev())
                        .unwrap_or(ContactFrequency::Recently),
                )
            }
            _ => {}
        }
    }

    pub fn to_details(&self) -> ContactDetails {
        ContactDetails {
            name: self.name.as_text().to_string(),
            designation: self.designation.as_text().to_string(),
            relationship_strength: self.relationship_strength,
            contact_frequency: self.contact_frequency,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
}
