use serde::{Deserialize, Serialize};

/// Icon shown on toasts, message dialogs and custom dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
    Question,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Success,
        Severity::Warning,
        Severity::Error,
        Severity::Info,
        Severity::Question,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Question => "question",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Warning => "!",
            Severity::Error => "✕",
            Severity::Info => "i",
            Severity::Question => "?",
        }
    }

    fn bit(&self) -> u8 {
        match self {
            Severity::Success => 1,
            Severity::Warning => 1 << 1,
            Severity::Error => 1 << 2,
            Severity::Info => 1 << 3,
            Severity::Question => 1 << 4,
        }
    }
}

/// Severities a façade is allowed to render with an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeveritySet(u8);

impl SeveritySet {
    pub fn all() -> Self {
        Severity::ALL.iter().fold(Self::none(), |set, s| set.with(*s))
    }

    pub fn none() -> Self {
        Self(0)
    }

    pub fn with(self, severity: Severity) -> Self {
        Self(self.0 | severity.bit())
    }

    pub fn contains(&self, severity: Severity) -> bool {
        self.0 & severity.bit() != 0
    }
}

impl Default for SeveritySet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Severity> for SeveritySet {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), |set, s| set.with(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    Top,
    TopStart,
    #[default]
    TopEnd,
    Center,
    Bottom,
    BottomStart,
    BottomEnd,
}

impl ToastPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::Top => "top",
            ToastPosition::TopStart => "top-start",
            ToastPosition::TopEnd => "top-end",
            ToastPosition::Center => "center",
            ToastPosition::Bottom => "bottom",
            ToastPosition::BottomStart => "bottom-start",
            ToastPosition::BottomEnd => "bottom-end",
        }
    }
}

/// Style of a banner notice. Separate from [`Severity`]: banners have a
/// neutral kind and no question kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
    #[default]
    Info,
    Neutral,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
            NoticeKind::Neutral => "neutral",
        }
    }
}
