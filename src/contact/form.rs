//! Contact form state: field values, per-field validation flags, and the
//! submit status machine `Idle -> Submitting -> Success | Error -> Idle`.
//!
//! "Success" only means the inquiry was handed to the visitor's mail client.
//! Nothing reports back whether the mail was actually sent.

use std::fmt;
use std::rc::Rc;
use log::{debug, info};
use thiserror::Error;
use yew::prelude::*;

use crate::contact::mailto::HandOffError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Phone)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty() && self.message.is_empty()
    }

    /// Checks the required fields. Only an empty value counts as missing,
    /// matching the browser's `required` constraint.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let missing: FieldErrors = Field::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

/// Fields currently flagged as invalid, kept in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<Field>);

impl FieldErrors {
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[Field] {
        &self.0
    }

    fn clear(&mut self, field: Field) {
        self.0.retain(|f| *f != field);
    }
}

impl FromIterator<Field> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut fields: Vec<Field> = iter.into_iter().collect();
        fields.sort();
        fields.dedup();
        Self(fields)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|field| field.label()).collect();
        f.write_str(&names.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    #[error("missing required fields: {0}")]
    Validation(FieldErrors),
    #[error(transparent)]
    HandOff(#[from] HandOffError),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Inquiry handed to the mail client.
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmitStatus::Success | SubmitStatus::Error)
    }
}

pub enum ContactAction {
    Edit { field: Field, value: String },
    /// Validates and, when valid, enters `Submitting`.
    Submit,
    HandOffAccepted,
    HandOffFailed,
    /// Return to `Idle`. Ignored unless `cycle` is the current submit cycle.
    ResetStatus { cycle: u32 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
    /// Bumped on every accepted submit so stale reset timers can be told apart.
    pub cycle: u32,
}

impl ContactForm {
    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit { field, value } => {
                if self.status == SubmitStatus::Submitting {
                    debug!("Ignoring edit of {} while submitting", field);
                    return;
                }
                *self.fields.slot(field) = value;
                self.errors.clear(field);
            }
            ContactAction::Submit => {
                if self.status == SubmitStatus::Submitting {
                    return;
                }
                match self.fields.validate() {
                    Ok(()) => {
                        self.errors = FieldErrors::default();
                        self.cycle = self.cycle.wrapping_add(1);
                        self.status = SubmitStatus::Submitting;
                    }
                    Err(missing) => {
                        debug!("Submit blocked, missing: {}", missing);
                        self.errors = missing;
                    }
                }
            }
            ContactAction::HandOffAccepted => {
                if self.status == SubmitStatus::Submitting {
                    info!("Inquiry handed to the mail client");
                    self.fields = ContactFields::default();
                    self.status = SubmitStatus::Success;
                }
            }
            ContactAction::HandOffFailed => {
                if self.status == SubmitStatus::Submitting {
                    self.status = SubmitStatus::Error;
                }
            }
            ContactAction::ResetStatus { cycle } => {
                if cycle == self.cycle && self.status.is_settled() {
                    self.status = SubmitStatus::Idle;
                }
            }
        }
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(form: &mut ContactForm, field: Field, value: &str) {
        form.apply(ContactAction::Edit { field, value: value.to_string() });
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        edit(&mut form, Field::Name, "Alice");
        edit(&mut form, Field::Email, "a@x.com");
        edit(&mut form, Field::Message, "Hello");
        form
    }

    #[test]
    fn starts_empty_and_idle() {
        let form = ContactForm::default();
        assert!(form.fields.is_empty());
        assert_eq!(form.status, SubmitStatus::Idle);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn empty_name_blocks_submit() {
        let mut form = filled();
        edit(&mut form, Field::Name, "");
        form.apply(ContactAction::Submit);

        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.errors.fields(), &[Field::Name]);
        assert_eq!(form.cycle, 0);
    }

    #[test]
    fn every_missing_required_field_is_flagged() {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Submit);

        assert_eq!(form.errors.fields(), &[Field::Name, Field::Email, Field::Message]);
        assert!(!form.errors.contains(Field::Phone));
    }

    #[test]
    fn whitespace_only_values_count_as_present() {
        let mut form = filled();
        edit(&mut form, Field::Name, " ");
        form.apply(ContactAction::Submit);

        assert_eq!(form.status, SubmitStatus::Submitting);
        assert!(form.errors.is_empty());
        assert_eq!(form.cycle, 1);
    }

    #[test]
    fn editing_clears_that_fields_flag() {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Submit);
        edit(&mut form, Field::Email, "a@x.com");

        assert!(!form.errors.contains(Field::Email));
        assert!(form.errors.contains(Field::Name));
    }

    #[test]
    fn accepted_hand_off_clears_fields() {
        let mut form = filled();
        edit(&mut form, Field::Phone, "+250 788");
        form.apply(ContactAction::Submit);
        assert_eq!(form.status, SubmitStatus::Submitting);

        form.apply(ContactAction::HandOffAccepted);
        assert_eq!(form.status, SubmitStatus::Success);
        assert!(form.fields.is_empty());
    }

    #[test]
    fn failed_hand_off_keeps_fields() {
        let mut form = filled();
        form.apply(ContactAction::Submit);
        form.apply(ContactAction::HandOffFailed);

        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.fields.name, "Alice");
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut form = filled();
        form.apply(ContactAction::Submit);
        edit(&mut form, Field::Name, "Bob");
        assert_eq!(form.fields.name, "Alice");
    }

    #[test]
    fn outcomes_outside_submitting_are_ignored() {
        let mut form = filled();
        form.apply(ContactAction::HandOffAccepted);
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.fields.name, "Alice");
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut form = filled();
        form.apply(ContactAction::Submit);
        form.apply(ContactAction::HandOffFailed);

        form.apply(ContactAction::ResetStatus { cycle: form.cycle });
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn reset_from_a_superseded_cycle_is_ignored() {
        let mut form = filled();
        form.apply(ContactAction::Submit);
        form.apply(ContactAction::HandOffFailed);
        let stale = form.cycle;

        // Resubmit before the first reset fires
        form.apply(ContactAction::Submit);
        assert_eq!(form.status, SubmitStatus::Submitting);
        form.apply(ContactAction::HandOffAccepted);

        form.apply(ContactAction::ResetStatus { cycle: stale });
        assert_eq!(form.status, SubmitStatus::Success);
        form.apply(ContactAction::ResetStatus { cycle: form.cycle });
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn reset_does_not_interrupt_submitting() {
        let mut form = filled();
        form.apply(ContactAction::Submit);
        form.apply(ContactAction::ResetStatus { cycle: form.cycle });
        assert_eq!(form.status, SubmitStatus::Submitting);
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let form = Rc::new(ContactForm::default());
        let next = form.clone().reduce(ContactAction::ResetStatus { cycle: 0 });
        assert!(Rc::ptr_eq(&form, &next));
    }
}
