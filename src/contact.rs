//! Contact form state. Submissions are never sent anywhere: an accepted message
//! sits in `Loading` for [`SEND_DELAY`], shows `Success` for [`SUCCESS_DISPLAY`]
//! and then the form returns to `Idle`.

use std::time::Duration;

use thiserror::Error;

pub const SEND_DELAY: Duration = Duration::from_millis(2000);
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your@email.com",
            Self::Message => "Tell me about your project...",
        }
    }

    /// HTML input type; the message is rendered as a textarea instead.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
}

impl Status {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Loading => "Sending...",
            Self::Success => "Message Sent!",
        }
    }

    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("a message is already being sent")]
    Busy(Status),
}

/// A snapshot of what the visitor typed, taken when the form is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: Status,
    focused: Option<Field>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused == Some(field)
    }

    /// Accepts the form when idle and every field is filled in, moving to `Loading`.
    pub fn submit(&mut self) -> Result<Submission, ContactError> {
        if self.status.is_busy() {
            return Err(ContactError::Busy(self.status));
        }
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        self.transition(Status::Loading);
        Ok(Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// The simulated send finished: show success and clear the fields.
    pub fn finish_sending(&mut self) {
        if self.status != Status::Loading {
            return;
        }
        self.transition(Status::Success);
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// The success note has been shown long enough.
    pub fn settle(&mut self) {
        if self.status == Status::Success {
            self.transition(Status::Idle);
        }
    }

    fn transition(&mut self, to: Status) {
        log::debug!("contact: {:?} -> {:?}", self.status, to);
        self.status = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Let's build something.");
        form
    }

    #[test]
    fn test_timing_constants() {
        assert_eq!(SEND_DELAY, Duration::from_secs(2));
        assert_eq!(SUCCESS_DISPLAY, Duration::from_secs(3));
    }

    #[test]
    fn test_full_cycle_clears_fields() {
        let mut form = filled();
        assert_eq!(form.status(), Status::Idle);

        let submission = form.submit().expect("filled form should be accepted");
        assert_eq!(submission.name, "Ada");
        assert_eq!(form.status(), Status::Loading);
        // fields stay visible while sending
        assert_eq!(form.value(Field::Email), "ada@example.com");

        form.finish_sending();
        assert_eq!(form.status(), Status::Success);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }

        form.settle();
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut form = filled();
        form.set(Field::Email, "   ");
        assert_eq!(form.submit(), Err(ContactError::MissingField(Field::Email)));
        assert_eq!(form.status(), Status::Idle);

        let mut empty = ContactForm::new();
        assert_eq!(empty.submit(), Err(ContactError::MissingField(Field::Name)));
    }

    #[test]
    fn test_submit_while_busy_rejected() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(ContactError::Busy(Status::Loading)));
        form.finish_sending();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Again");
        assert_eq!(form.submit(), Err(ContactError::Busy(Status::Success)));
    }

    #[test]
    fn test_out_of_order_transitions_are_ignored() {
        let mut form = filled();
        form.finish_sending();
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.value(Field::Name), "Ada");
        form.settle();
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn test_focus_tracking() {
        let mut form = ContactForm::new();
        form.focus(Field::Message);
        assert!(form.is_focused(Field::Message));
        assert!(!form.is_focused(Field::Name));
        form.focus(Field::Name);
        assert!(!form.is_focused(Field::Message));
        form.blur();
        assert!(Field::ALL.iter().all(|f| !form.is_focused(*f)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Status::Idle.button_label(), "Send Message");
        assert_eq!(Status::Loading.button_label(), "Sending...");
        assert_eq!(Status::Success.button_label(), "Message Sent!");
        assert_eq!(
            ContactError::MissingField(Field::Message).to_string(),
            "Message is required"
        );
    }
}
