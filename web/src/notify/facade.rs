use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::logging::{log, warn};

use super::hooks::{DialogLifecycleHooks, HookResult, HookSequence};
use super::outcome::{CarriedValue, DialogOutcome};
use super::renderer::{DialogRenderer, DialogResolution};
use super::request::{
    BannerSpec, DialogRequest, MessageBody, MessageParams, MessageSpec, ToastParams, ToastSpec,
    DEFAULT_CONFIRM_LABEL,
};
use super::severity::{NoticeKind, Severity, SeveritySet};

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);
pub const BANNER_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVariant {
    /// Honours inputs, constraints, presentation classes, confirm styling and
    /// cancel side effects.
    #[default]
    Rich,
    /// Title, body and lifecycle hooks only.
    Lean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InformConfig {
    pub variant: ModalVariant,
    pub severities: SeveritySet,
}

impl InformConfig {
    pub fn rich() -> Self {
        Self::default()
    }

    pub fn lean() -> Self {
        Self {
            variant: ModalVariant::Lean,
            ..Self::default()
        }
    }

    pub fn severities(mut self, severities: SeveritySet) -> Self {
        self.severities = severities;
        self
    }
}

/// Handle for toasts, messages and confirmable dialogs.
///
/// Build one per page section and hand it to whatever needs it.
#[derive(Debug, Clone, Copy)]
pub struct Inform<R> {
    renderer: R,
    config: InformConfig,
}

impl<R: DialogRenderer> Inform<R> {
    pub fn new(renderer: R, config: InformConfig) -> Self {
        Self { renderer, config }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn config(&self) -> InformConfig {
        self.config
    }

    /// Non-blocking notice that dismisses itself after three seconds.
    pub fn toast(&self, params: ToastParams) {
        self.renderer.show_toast(ToastSpec {
            icon: self.icon_for(params.icon),
            params,
            duration: TOAST_DURATION,
        });
    }

    pub async fn success(&self, params: MessageParams) {
        self.message(Severity::Success, params).await
    }

    pub async fn warning(&self, params: MessageParams) {
        self.message(Severity::Warning, params).await
    }

    pub async fn error(&self, params: MessageParams) {
        self.message(Severity::Error, params).await
    }

    pub async fn info(&self, params: MessageParams) {
        self.message(Severity::Info, params).await
    }

    pub async fn question(&self, params: MessageParams) {
        self.message(Severity::Question, params).await
    }

    async fn message(&self, severity: Severity, params: MessageParams) {
        self.renderer
            .show_message(MessageSpec {
                icon: self.icon_for(severity),
                title: params.title,
                body: MessageBody::Text(params.message),
                footer: params.footer,
                confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
            })
            .await
    }

    fn icon_for(&self, severity: Severity) -> Option<Severity> {
        if self.config.severities.contains(severity) {
            Some(severity)
        } else {
            warn!(
                "severity `{}` is not enabled; rendering without an icon",
                severity.as_str()
            );
            None
        }
    }

    /// Blocking dialog with cancel and (optionally) confirm actions.
    ///
    /// Errors from `will_open`/`did_open` hooks, or a renderer delivering
    /// hooks out of order, come back as `Err`.
    pub async fn custom_modal<T>(
        &self,
        request: DialogRequest,
        hooks: DialogLifecycleHooks<T>,
    ) -> HookResult<DialogOutcome<T>>
    where
        T: CarriedValue + 'static,
    {
        let (request, hooks) = match self.config.variant {
            ModalVariant::Rich => (request, hooks),
            ModalVariant::Lean => (request.simplified(), hooks.without_cancel_side_effect()),
        };
        let request = DialogRequest {
            icon: request.icon.and_then(|icon| self.icon_for(icon)),
            ..request
        };

        let sequence = Rc::new(RefCell::new(HookSequence::new(hooks)));
        let resolution = self
            .renderer
            .show_dialog(request, sequence.clone())
            .await;

        let mut sequence = sequence.borrow_mut();
        let outcome = match resolution {
            DialogResolution::Confirmed => {
                let value = sequence.take_carried()?;
                if value.is_blank() {
                    DialogOutcome::ConfirmedEmpty
                } else {
                    DialogOutcome::Confirmed(value)
                }
            }
            DialogResolution::Cancelled => {
                sequence.cancel();
                DialogOutcome::Cancelled
            }
            DialogResolution::Dismissed(reason) => {
                log!("dialog dismissed: {reason:?}");
                DialogOutcome::Dismissed
            }
            DialogResolution::Failed(err) => return Err(err),
        };
        Ok(outcome)
    }

    /// [`Self::custom_modal`] delivering the collapsed result to `on_result`
    /// exactly once: `Some(value)` for a non-empty confirm, `None` otherwise.
    pub async fn custom_modal_with<T, F>(
        &self,
        request: DialogRequest,
        hooks: DialogLifecycleHooks<T>,
        on_result: F,
    ) -> HookResult
    where
        T: CarriedValue + 'static,
        F: FnOnce(Option<T>),
    {
        let outcome = self.custom_modal(request, hooks).await?;
        on_result(outcome.into_confirmed());
        Ok(())
    }

    /// Banner notice on its own channel; the default lifetime is three seconds.
    pub fn notify(&self, message: impl Into<String>, kind: NoticeKind, duration: Option<Duration>) {
        self.renderer.show_banner(BannerSpec {
            message: message.into(),
            kind,
            duration: duration.unwrap_or(BANNER_DURATION),
        });
    }

    /// Blocking dialog with a single confirm action and markup body.
    pub async fn notify_modal(
        &self,
        title: impl Into<String>,
        html: impl Into<String>,
        icon: Severity,
        confirm_label: impl Into<String>,
    ) {
        self.renderer
            .show_message(MessageSpec {
                icon: self.icon_for(icon),
                title: title.into(),
                body: MessageBody::Markup(html.into()),
                footer: String::new(),
                confirm_label: confirm_label.into(),
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::notify::hooks::HookError;
    use crate::notify::outcome::DismissReason;
    use crate::notify::request::{DialogInput, InputKind};
    use crate::notify::testing::{DialogScript, Presented, RecordingRenderer};

    fn inform(renderer: &RecordingRenderer) -> Inform<RecordingRenderer> {
        Inform::new(renderer.clone(), InformConfig::rich())
    }

    fn traced_hooks(trace: Rc<RefCell<Vec<&'static str>>>) -> DialogLifecycleHooks<String> {
        let (will, did, pre) = (trace.clone(), trace.clone(), trace);
        DialogLifecycleHooks::new()
            .will_open(move || {
                will.borrow_mut().push("will_open");
                Ok(())
            })
            .did_open(move || {
                did.borrow_mut().push("did_open");
                Ok(())
            })
            .pre_confirm(move |input| {
                pre.borrow_mut().push("pre_confirm");
                Ok(input.unwrap_or_default().to_string())
            })
    }

    #[test]
    fn hooks_fire_in_lifecycle_order() {
        let renderer = RecordingRenderer::new();
        renderer.script(DialogScript::Confirm(Some("2".into())));
        let trace = Rc::new(RefCell::new(Vec::new()));

        let outcome = block_on(
            inform(&renderer).custom_modal(DialogRequest::new("Days"), traced_hooks(trace.clone())),
        )
        .unwrap();

        assert_eq!(outcome, DialogOutcome::Confirmed("2".to_string()));
        assert_eq!(*trace.borrow(), ["will_open", "did_open", "pre_confirm"]);
    }

    #[test]
    fn empty_confirm_and_dismissals_collapse_to_the_same_result() {
        let renderer = RecordingRenderer::new();
        renderer.script(DialogScript::Confirm(Some(String::new())));
        renderer.script(DialogScript::Cancel);
        renderer.script(DialogScript::Dismiss(DismissReason::Escape));
        let inform = inform(&renderer);

        let mut delivered = Vec::new();
        for _ in 0..3 {
            block_on(inform.custom_modal_with(
                DialogRequest::new("Days"),
                DialogLifecycleHooks::<String>::new(),
                |result| delivered.push(result),
            ))
            .unwrap();
        }

        assert_eq!(delivered, [None, None, None]);
    }

    #[test]
    fn outcome_keeps_the_dismissal_tag() {
        let renderer = RecordingRenderer::new();
        renderer.script(DialogScript::Confirm(None));
        renderer.script(DialogScript::Cancel);
        let inform = inform(&renderer);

        let empty = block_on(inform.custom_modal(
            DialogRequest::new("Days"),
            DialogLifecycleHooks::<String>::new(),
        ));
        let cancelled = block_on(inform.custom_modal(
            DialogRequest::new("Days"),
            DialogLifecycleHooks::<String>::new(),
        ));

        assert_eq!(empty, Ok(DialogOutcome::ConfirmedEmpty));
        assert_eq!(cancelled, Ok(DialogOutcome::Cancelled));
    }

    #[test]
    fn plain_confirmation_carries_unit() {
        let renderer = RecordingRenderer::new();
        let outcome = block_on(
            inform(&renderer)
                .custom_modal(DialogRequest::new("Sure?"), DialogLifecycleHooks::<()>::new()),
        );
        assert_eq!(outcome, Ok(DialogOutcome::Confirmed(())));
    }

    #[test]
    fn cancel_side_effect_runs_only_on_cancel() {
        let renderer = RecordingRenderer::new();
        renderer.script(DialogScript::Dismiss(DismissReason::Escape));
        renderer.script(DialogScript::Cancel);
        let inform = inform(&renderer);
        let unchecked = Rc::new(RefCell::new(0));

        for _ in 0..2 {
            let counter = unchecked.clone();
            block_on(inform.custom_modal(
                DialogRequest::new("Block day"),
                DialogLifecycleHooks::<String>::new().on_cancel(move || *counter.borrow_mut() += 1),
            ))
            .unwrap();
        }

        assert_eq!(*unchecked.borrow(), 1);
    }

    #[test]
    fn lean_variant_strips_rich_fields_and_cancel_side_effect() {
        let renderer = RecordingRenderer::new();
        renderer.script(DialogScript::Cancel);
        let inform = Inform::new(renderer.clone(), InformConfig::lean());
        let unchecked = Rc::new(RefCell::new(false));
        let flag = unchecked.clone();

        block_on(inform.custom_modal(
            DialogRequest::new("Block day")
                .input(DialogInput::new(InputKind::Number))
                .presentation_class("day-block-toggle"),
            DialogLifecycleHooks::<String>::new().on_cancel(move || *flag.borrow_mut() = true),
        ))
        .unwrap();

        let Some(Presented::Dialog(request)) = renderer.presented().pop() else {
            panic!("expected a dialog");
        };
        assert!(request.input.is_none());
        assert!(request.presentation_class.is_none());
        assert!(!*unchecked.borrow());
    }

    #[test]
    fn failing_will_open_surfaces_to_the_caller() {
        let renderer = RecordingRenderer::new();
        let result = block_on(inform(&renderer).custom_modal(
            DialogRequest::new("Dates"),
            DialogLifecycleHooks::<String>::new()
                .will_open(|| Err(HookError::MissingElement("reservation-dates-modal".into()))),
        ));
        assert_eq!(
            result,
            Err(HookError::MissingElement("reservation-dates-modal".into()))
        );
    }

    #[test]
    fn renderer_skipping_will_open_is_a_contract_violation() {
        let renderer = RecordingRenderer::new();
        renderer.script(DialogScript::SkipWillOpen);
        let result = block_on(
            inform(&renderer)
                .custom_modal(DialogRequest::new("Dates"), DialogLifecycleHooks::<String>::new()),
        );
        assert!(matches!(
            result,
            Err(HookError::OutOfOrder {
                hook: "did_open",
                ..
            })
        ));
    }

    #[test]
    fn toast_uses_the_fixed_countdown() {
        let renderer = RecordingRenderer::new();
        inform(&renderer).toast(ToastParams::new("Saved"));

        let presented = renderer.presented();
        let [Presented::Toast(toast)] = presented.as_slice() else {
            panic!("expected a single toast, got {presented:?}");
        };
        assert_eq!(toast.duration, TOAST_DURATION);
        assert_eq!(toast.icon, Some(Severity::Success));
        assert_eq!(toast.params.position.as_str(), "top-end");
    }

    #[test]
    fn toast_with_disabled_severity_has_no_icon() {
        let renderer = RecordingRenderer::new();
        let inform = Inform::new(
            renderer.clone(),
            InformConfig::rich().severities([Severity::Error].into_iter().collect()),
        );
        inform.toast(ToastParams::new("Saved").icon(Severity::Info));
        inform.toast(ToastParams::new("Failed").icon(Severity::Error));

        let icons: Vec<_> = renderer
            .presented()
            .into_iter()
            .map(|presented| match presented {
                Presented::Toast(toast) => toast.icon,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(icons, [None, Some(Severity::Error)]);
    }

    #[test]
    fn severity_messages_carry_their_icon() {
        let renderer = RecordingRenderer::new();
        let inform = inform(&renderer);
        block_on(async {
            inform.success(MessageParams::new()).await;
            inform.warning(MessageParams::new()).await;
            inform.error(MessageParams::new()).await;
            inform.info(MessageParams::new()).await;
            inform.question(MessageParams::new().title("Why?")).await;
        });

        let icons: Vec<_> = renderer
            .presented()
            .into_iter()
            .map(|presented| match presented {
                Presented::Message(spec) => spec.icon,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(
            icons,
            Severity::ALL.iter().copied().map(Some).collect::<Vec<_>>()
        );
    }

    #[test]
    fn disabled_severity_renders_without_icon() {
        let renderer = RecordingRenderer::new();
        let inform = Inform::new(
            renderer.clone(),
            InformConfig::rich().severities([Severity::Error].into_iter().collect()),
        );
        block_on(inform.question(MessageParams::new().message("Really?")));

        let Some(Presented::Message(spec)) = renderer.presented().pop() else {
            panic!("expected a message");
        };
        assert_eq!(spec.icon, None);
        assert_eq!(spec.body, MessageBody::Text("Really?".into()));
    }

    #[test]
    fn notify_defaults_to_three_seconds() {
        let renderer = RecordingRenderer::new();
        let inform = inform(&renderer);
        inform.notify("Saved", NoticeKind::Success, None);
        inform.notify("Slow", NoticeKind::Warning, Some(Duration::from_secs(8)));

        let durations: Vec<_> = renderer
            .banners()
            .into_iter()
            .map(|banner| banner.duration)
            .collect();
        assert_eq!(durations, [BANNER_DURATION, Duration::from_secs(8)]);
    }

    #[test]
    fn notify_modal_renders_markup_with_custom_label() {
        let renderer = RecordingRenderer::new();
        block_on(inform(&renderer).notify_modal(
            "Reservation saved",
            "<strong>See you soon</strong>",
            Severity::Success,
            "Great",
        ));

        let Some(Presented::Message(spec)) = renderer.presented().pop() else {
            panic!("expected a message");
        };
        assert_eq!(spec.body, MessageBody::Markup("<strong>See you soon</strong>".into()));
        assert_eq!(spec.confirm_label, "Great");
    }
}
