//! Toasts, banner notices, severity messages and confirmable dialogs behind a
//! single [`Inform`] handle. Rendering is delegated to a [`DialogRenderer`];
//! the browser backend lives in `components::notification_host`.

mod facade;
mod hooks;
mod outcome;
mod renderer;
mod request;
mod severity;
mod stacking;
mod toast_timer;

#[cfg(test)]
pub(crate) mod testing;

pub use facade::{Inform, InformConfig, ModalVariant, BANNER_DURATION, TOAST_DURATION};
pub use hooks::{DialogEvents, DialogLifecycleHooks, HookError, HookResult};
pub use outcome::{CarriedValue, DialogOutcome, DismissReason};
pub use renderer::{DialogRenderer, DialogResolution, SharedEvents};
pub use request::{
    BannerSpec, DialogInput, DialogRequest, InputConstraints, InputKind, MessageBody,
    MessageParams, MessageSpec, ToastParams, ToastSpec, DEFAULT_CONFIRM_LABEL,
};
pub use severity::{NoticeKind, Severity, SeveritySet, ToastPosition};
pub use stacking::{StackingContext, NAVBAR_Z_INDEX, NAVBAR_Z_INDEX_UNDER_NOTICE};
pub use toast_timer::ToastTimer;
