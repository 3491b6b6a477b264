use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use super::hooks::{DialogEvents, HookError};
use super::outcome::DismissReason;
use super::request::{BannerSpec, DialogRequest, MessageSpec, ToastSpec};

pub type SharedEvents = Rc<RefCell<dyn DialogEvents>>;

/// How a renderer closed a custom dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResolution {
    /// `pre_confirm` was accepted.
    Confirmed,
    Cancelled,
    Dismissed(DismissReason),
    /// `will_open` or `did_open` failed and the dialog was torn down.
    Failed(HookError),
}

/// Presentation backend behind [`super::Inform`].
///
/// For custom dialogs a renderer must call `will_open` once the markup exists,
/// `did_open` once it is interactive, and `pre_confirm` on every confirm
/// attempt; a rejected `pre_confirm` keeps the dialog open. Backdrop clicks
/// never close a dialog.
#[async_trait(?Send)]
pub trait DialogRenderer {
    fn show_toast(&self, toast: ToastSpec);

    fn show_banner(&self, banner: BannerSpec);

    /// Resolves once the message is dismissed.
    async fn show_message(&self, message: MessageSpec);

    async fn show_dialog(&self, request: DialogRequest, events: SharedEvents) -> DialogResolution;
}
