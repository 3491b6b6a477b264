//! In-memory renderer used by unit tests across the crate.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::hooks::HookError;
use super::outcome::DismissReason;
use super::renderer::{DialogRenderer, DialogResolution, SharedEvents};
use super::request::{BannerSpec, DialogRequest, MessageSpec, ToastSpec};

#[derive(Debug, Clone, PartialEq)]
pub enum Presented {
    Toast(ToastSpec),
    Banner(BannerSpec),
    Message(MessageSpec),
    Dialog(DialogRequest),
}

/// What the simulated user does with the next custom dialog.
#[derive(Debug, Clone)]
pub enum DialogScript {
    /// Confirm with the given input value. A rejected pre-confirm is recorded
    /// and the user then gives up with the escape key.
    Confirm(Option<String>),
    Cancel,
    Dismiss(DismissReason),
    /// Broken renderer: reports did-open without will-open.
    SkipWillOpen,
}

#[derive(Default)]
struct Recording {
    presented: Vec<Presented>,
    scripts: VecDeque<DialogScript>,
    validation_messages: Vec<String>,
}

#[derive(Clone, Default)]
pub struct RecordingRenderer {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the behaviour for the next dialog; unscripted dialogs are
    /// confirmed without input.
    pub fn script(&self, script: DialogScript) {
        self.inner.borrow_mut().scripts.push_back(script);
    }

    pub fn presented(&self) -> Vec<Presented> {
        self.inner.borrow().presented.clone()
    }

    pub fn dialogs(&self) -> Vec<DialogRequest> {
        self.presented()
            .into_iter()
            .filter_map(|presented| match presented {
                Presented::Dialog(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<MessageSpec> {
        self.presented()
            .into_iter()
            .filter_map(|presented| match presented {
                Presented::Message(spec) => Some(spec),
                _ => None,
            })
            .collect()
    }

    pub fn banners(&self) -> Vec<BannerSpec> {
        self.presented()
            .into_iter()
            .filter_map(|presented| match presented {
                Presented::Banner(spec) => Some(spec),
                _ => None,
            })
            .collect()
    }

    pub fn validation_messages(&self) -> Vec<String> {
        self.inner.borrow().validation_messages.clone()
    }

    fn record(&self, presented: Presented) {
        self.inner.borrow_mut().presented.push(presented);
    }

    fn next_script(&self) -> DialogScript {
        self.inner
            .borrow_mut()
            .scripts
            .pop_front()
            .unwrap_or(DialogScript::Confirm(None))
    }
}

#[async_trait(?Send)]
impl DialogRenderer for RecordingRenderer {
    fn show_toast(&self, toast: ToastSpec) {
        self.record(Presented::Toast(toast));
    }

    fn show_banner(&self, banner: BannerSpec) {
        self.record(Presented::Banner(banner));
    }

    async fn show_message(&self, message: MessageSpec) {
        self.record(Presented::Message(message));
    }

    async fn show_dialog(&self, request: DialogRequest, events: SharedEvents) -> DialogResolution {
        self.record(Presented::Dialog(request));
        let script = self.next_script();

        let mut events = events.borrow_mut();
        if !matches!(script, DialogScript::SkipWillOpen) {
            if let Err(err) = events.will_open() {
                return DialogResolution::Failed(err);
            }
        }
        if let Err(err) = events.did_open() {
            return DialogResolution::Failed(err);
        }

        match script {
            DialogScript::Confirm(input) => match events.pre_confirm(input.as_deref()) {
                Ok(()) => DialogResolution::Confirmed,
                Err(HookError::Invalid(message)) => {
                    self.inner.borrow_mut().validation_messages.push(message);
                    DialogResolution::Dismissed(DismissReason::Escape)
                }
                Err(err) => DialogResolution::Failed(err),
            },
            DialogScript::Cancel => DialogResolution::Cancelled,
            DialogScript::Dismiss(reason) => DialogResolution::Dismissed(reason),
            DialogScript::SkipWillOpen => DialogResolution::Confirmed,
        }
    }
}
