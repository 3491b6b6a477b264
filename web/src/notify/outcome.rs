/// How a custom dialog ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// Confirmed and the carried value is not blank.
    Confirmed(T),
    /// Confirmed with a blank carried value.
    ConfirmedEmpty,
    /// The cancel action.
    Cancelled,
    /// Any other dismissal path, such as the escape key.
    Dismissed,
}

impl<T> DialogOutcome<T> {
    /// The value callers act on. Empty confirms, cancels and dismissals all
    /// collapse to `None` and cannot be told apart from here.
    pub fn into_confirmed(self) -> Option<T> {
        match self {
            DialogOutcome::Confirmed(value) => Some(value),
            DialogOutcome::ConfirmedEmpty | DialogOutcome::Cancelled | DialogOutcome::Dismissed => {
                None
            }
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, DialogOutcome::Confirmed(_))
    }
}

/// A value a dialog confirm can carry forward.
pub trait CarriedValue: Sized {
    fn is_blank(&self) -> bool;

    /// Value carried when confirm is activated and no pre-confirm hook is
    /// installed. `input` is the dialog input's value, if it has one.
    fn from_confirm(input: Option<String>) -> Self;
}

impl CarriedValue for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn from_confirm(input: Option<String>) -> Self {
        input.unwrap_or_default()
    }
}

/// Plain "are you sure" dialogs carry nothing and always count as confirmed.
impl CarriedValue for () {
    fn is_blank(&self) -> bool {
        false
    }

    fn from_confirm(_input: Option<String>) -> Self {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Escape,
    Close,
}
