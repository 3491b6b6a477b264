use thiserror::Error;

use super::outcome::CarriedValue;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HookError {
    #[error("dialog element #{0} is missing")]
    MissingElement(String),

    #[error("{hook} fired while the dialog was {stage}")]
    OutOfOrder {
        hook: &'static str,
        stage: &'static str,
    },

    /// Rejected input; shown inside the dialog, which stays open.
    #[error("{0}")]
    Invalid(String),

    #[error("date picker failed to attach: {0}")]
    Widget(String),
}

pub type HookResult<T = ()> = Result<T, HookError>;

type OpenHook = Box<dyn FnOnce() -> HookResult>;
type PreConfirmHook<T> = Box<dyn FnMut(Option<&str>) -> HookResult<T>>;
type CancelHook = Box<dyn FnOnce()>;

/// Callbacks fired at fixed points of a custom dialog's life.
pub struct DialogLifecycleHooks<T> {
    /// Dialog markup exists but is not yet interactive.
    pub on_will_open: Option<OpenHook>,
    /// Dialog is visible and interactive.
    pub on_did_open: Option<OpenHook>,
    /// Confirm was activated; receives the input's value and returns the
    /// value to carry forward.
    pub on_pre_confirm: Option<PreConfirmHook<T>>,
    /// Runs once when the dialog is closed through its cancel action.
    pub on_cancel_side_effect: Option<CancelHook>,
}

impl<T> DialogLifecycleHooks<T> {
    pub fn new() -> Self {
        Self {
            on_will_open: None,
            on_did_open: None,
            on_pre_confirm: None,
            on_cancel_side_effect: None,
        }
    }

    pub fn will_open(mut self, hook: impl FnOnce() -> HookResult + 'static) -> Self {
        self.on_will_open = Some(Box::new(hook));
        self
    }

    pub fn did_open(mut self, hook: impl FnOnce() -> HookResult + 'static) -> Self {
        self.on_did_open = Some(Box::new(hook));
        self
    }

    pub fn pre_confirm(
        mut self,
        hook: impl FnMut(Option<&str>) -> HookResult<T> + 'static,
    ) -> Self {
        self.on_pre_confirm = Some(Box::new(hook));
        self
    }

    pub fn on_cancel(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_cancel_side_effect = Some(Box::new(hook));
        self
    }

    pub(crate) fn without_cancel_side_effect(mut self) -> Self {
        self.on_cancel_side_effect = None;
        self
    }
}

impl<T> Default for DialogLifecycleHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// What a renderer reports back into an open dialog.
pub trait DialogEvents {
    fn will_open(&mut self) -> HookResult;
    fn did_open(&mut self) -> HookResult;
    fn pre_confirm(&mut self, input: Option<&str>) -> HookResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Created,
    Mounting,
    Interactive,
    Confirmed,
    Cancelled,
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Stage::Created => "created",
            Stage::Mounting => "mounting",
            Stage::Interactive => "interactive",
            Stage::Confirmed => "confirmed",
            Stage::Cancelled => "cancelled",
        }
    }
}

/// Runs a dialog's hooks and rejects any delivery that breaks
/// will-open → did-open → pre-confirm.
pub(crate) struct HookSequence<T> {
    hooks: DialogLifecycleHooks<T>,
    stage: Stage,
    carried: Option<T>,
}

impl<T: CarriedValue> HookSequence<T> {
    pub(crate) fn new(hooks: DialogLifecycleHooks<T>) -> Self {
        Self {
            hooks,
            stage: Stage::Created,
            carried: None,
        }
    }

    fn advance(&mut self, hook: &'static str, from: Stage, to: Stage) -> HookResult {
        if self.stage != from {
            return Err(HookError::OutOfOrder {
                hook,
                stage: self.stage.name(),
            });
        }
        self.stage = to;
        Ok(())
    }

    pub(crate) fn take_carried(&mut self) -> HookResult<T> {
        self.carried.take().ok_or(HookError::OutOfOrder {
            hook: "confirm",
            stage: self.stage.name(),
        })
    }

    pub(crate) fn cancel(&mut self) {
        if self.stage == Stage::Cancelled {
            return;
        }
        self.stage = Stage::Cancelled;
        if let Some(side_effect) = self.hooks.on_cancel_side_effect.take() {
            side_effect();
        }
    }
}

impl<T: CarriedValue> DialogEvents for HookSequence<T> {
    fn will_open(&mut self) -> HookResult {
        self.advance("will_open", Stage::Created, Stage::Mounting)?;
        match self.hooks.on_will_open.take() {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }

    fn did_open(&mut self) -> HookResult {
        self.advance("did_open", Stage::Mounting, Stage::Interactive)?;
        match self.hooks.on_did_open.take() {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }

    fn pre_confirm(&mut self, input: Option<&str>) -> HookResult {
        if self.stage != Stage::Interactive {
            return Err(HookError::OutOfOrder {
                hook: "pre_confirm",
                stage: self.stage.name(),
            });
        }
        let value = match self.hooks.on_pre_confirm.as_mut() {
            Some(hook) => hook(input)?,
            None => T::from_confirm(input.map(str::to_owned)),
        };
        self.carried = Some(value);
        self.stage = Stage::Confirmed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn did_open_before_will_open_is_rejected() {
        let mut sequence = HookSequence::<String>::new(DialogLifecycleHooks::new());
        assert_eq!(
            sequence.did_open(),
            Err(HookError::OutOfOrder {
                hook: "did_open",
                stage: "created"
            })
        );
    }

    #[test]
    fn will_open_runs_once() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut sequence = HookSequence::<String>::new(DialogLifecycleHooks::new().will_open(
            move || {
                *counter.borrow_mut() += 1;
                Ok(())
            },
        ));

        assert!(sequence.will_open().is_ok());
        assert!(sequence.will_open().is_err());
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn rejected_pre_confirm_can_be_retried() {
        let attempts = Rc::new(RefCell::new(0));
        let seen = attempts.clone();
        let mut sequence = HookSequence::new(DialogLifecycleHooks::new().pre_confirm(
            move |input: Option<&str>| {
                *seen.borrow_mut() += 1;
                match input {
                    Some("0") => Err(HookError::Invalid("pick at least one day".into())),
                    other => Ok(other.unwrap_or_default().to_string()),
                }
            },
        ));

        sequence.will_open().unwrap();
        sequence.did_open().unwrap();
        assert!(matches!(
            sequence.pre_confirm(Some("0")),
            Err(HookError::Invalid(_))
        ));
        assert!(sequence.pre_confirm(Some("2")).is_ok());
        assert_eq!(sequence.take_carried().unwrap(), "2");
        assert_eq!(*attempts.borrow(), 2);
    }

    #[test]
    fn cancel_side_effect_runs_at_most_once() {
        let resets = Rc::new(RefCell::new(0));
        let counter = resets.clone();
        let mut sequence = HookSequence::<String>::new(
            DialogLifecycleHooks::new().on_cancel(move || *counter.borrow_mut() += 1),
        );

        sequence.cancel();
        sequence.cancel();
        assert_eq!(*resets.borrow(), 1);
    }
}
