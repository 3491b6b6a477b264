use std::time::Duration;

use super::severity::{NoticeKind, Severity, ToastPosition};

#[derive(Debug, Clone, PartialEq)]
pub struct ToastParams {
    pub message: String,
    pub icon: Severity,
    pub position: ToastPosition,
}

impl ToastParams {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: Severity) -> Self {
        self.icon = icon;
        self
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }
}

impl Default for ToastParams {
    fn default() -> Self {
        Self {
            message: String::new(),
            icon: Severity::Success,
            position: ToastPosition::TopEnd,
        }
    }
}

/// Text regions of a severity message. Every region defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageParams {
    pub title: String,
    pub message: String,
    pub footer: String,
}

impl MessageParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Number,
    Range,
    Date,
    Email,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Range => "range",
            InputKind::Date => "date",
            InputKind::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputConstraints {
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
}

impl InputConstraints {
    pub fn range(min: impl ToString, max: impl ToString, step: impl ToString) -> Self {
        Self {
            min: Some(min.to_string()),
            max: Some(max.to_string()),
            step: Some(step.to_string()),
        }
    }
}

/// Labelled input rendered under the dialog body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogInput {
    pub kind: InputKind,
    pub label: Option<String>,
    pub constraints: InputConstraints,
    pub initial_value: Option<String>,
}

impl DialogInput {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn constraints(mut self, constraints: InputConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }
}

/// A confirmable dialog. `body_markup` is trusted HTML from the caller and is
/// rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub body_markup: String,
    pub icon: Option<Severity>,
    pub input: Option<DialogInput>,
    pub presentation_class: Option<String>,
    pub confirm_label: String,
    pub confirm_color: Option<String>,
    pub show_confirm_button: bool,
}

impl DialogRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_markup: String::new(),
            icon: None,
            input: None,
            presentation_class: None,
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
            confirm_color: None,
            show_confirm_button: true,
        }
    }

    pub fn body(mut self, markup: impl Into<String>) -> Self {
        self.body_markup = markup.into();
        self
    }

    pub fn icon(mut self, icon: Severity) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn input(mut self, input: DialogInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn presentation_class(mut self, class: impl Into<String>) -> Self {
        self.presentation_class = Some(class.into());
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn confirm_color(mut self, color: impl Into<String>) -> Self {
        self.confirm_color = Some(color.into());
        self
    }

    pub fn hide_confirm_button(mut self) -> Self {
        self.show_confirm_button = false;
        self
    }

    /// Title, body and icon only; what the lean modal variant renders.
    pub fn simplified(self) -> Self {
        Self {
            title: self.title,
            body_markup: self.body_markup,
            icon: self.icon,
            show_confirm_button: self.show_confirm_button,
            ..Self::new(String::new())
        }
    }
}

pub const DEFAULT_CONFIRM_LABEL: &str = "OK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Markup(String),
}

/// Confirm-only blocking dialog: severity messages and `notify_modal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSpec {
    pub icon: Option<Severity>,
    pub title: String,
    pub body: MessageBody,
    pub footer: String,
    pub confirm_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastSpec {
    pub params: ToastParams,
    /// `params.icon` when that severity is enabled, otherwise none.
    pub icon: Option<Severity>,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSpec {
    pub message: String,
    pub kind: NoticeKind,
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplified_request_drops_rich_fields() {
        let request = DialogRequest::new("Block day")
            .body("<p>sure?</p>")
            .input(DialogInput::new(InputKind::Number).label("Days"))
            .presentation_class("day-block-toggle")
            .confirm_label("Block")
            .confirm_color("#0d6efd")
            .simplified();

        assert_eq!(request.title, "Block day");
        assert_eq!(request.body_markup, "<p>sure?</p>");
        assert!(request.input.is_none());
        assert!(request.presentation_class.is_none());
        assert_eq!(request.confirm_label, DEFAULT_CONFIRM_LABEL);
        assert!(request.confirm_color.is_none());
    }

    #[test]
    fn message_params_default_to_empty_regions() {
        let params = MessageParams::new().message("Sorry, this room is not available");
        assert!(params.title.is_empty());
        assert!(params.footer.is_empty());
    }
}
