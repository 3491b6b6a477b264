use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::logging::{error, warn};
use leptos::prelude::*;
use thaw::*;

use crate::notify::{
    BannerSpec, DialogRenderer, DialogRequest, DialogResolution, DismissReason, HookError,
    MessageBody, MessageSpec, NoticeKind, Severity, SharedEvents, StackingContext, ToastSpec,
    ToastTimer,
};

const TOAST_TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq)]
struct ActiveToast {
    id: u64,
    spec: ToastSpec,
    timer: ToastTimer,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveBanner {
    id: u64,
    spec: BannerSpec,
}

/// What occupies the single blocking-dialog slot.
#[derive(Debug, Clone, PartialEq)]
enum Frame {
    Message(MessageSpec),
    Dialog(DialogRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Mounting,
    Interactive,
}

enum Pending {
    Message(oneshot::Sender<()>),
    Dialog {
        generation: u64,
        events: SharedEvents,
        reply: oneshot::Sender<DialogResolution>,
        has_input: bool,
    },
}

/// Browser backend for [`crate::notify::Inform`]. Render it with
/// [`NotificationHost`]; every copy shares the same signals.
///
/// When the owner it was created under is disposed, open dialogs resolve as
/// closed and banners it raised are released from the [`StackingContext`].
#[derive(Clone, Copy)]
pub struct LeptosRenderer {
    toasts: RwSignal<Vec<ActiveToast>>,
    banners: RwSignal<Vec<ActiveBanner>>,
    frame: RwSignal<Option<Frame>>,
    phase: RwSignal<Phase>,
    validation: RwSignal<Option<String>>,
    input_value: RwSignal<String>,
    pending: StoredValue<Option<Pending>, LocalStorage>,
    next_id: StoredValue<u64>,
    stacking: StackingContext,
}

impl LeptosRenderer {
    pub fn new(stacking: StackingContext) -> Self {
        let renderer = Self {
            toasts: RwSignal::new(Vec::new()),
            banners: RwSignal::new(Vec::new()),
            frame: RwSignal::new(None),
            phase: RwSignal::new(Phase::Closed),
            validation: RwSignal::new(None),
            input_value: RwSignal::new(String::new()),
            pending: StoredValue::new_local(None),
            next_id: StoredValue::new(0),
            stacking,
        };
        on_cleanup(move || renderer.release());
        renderer
    }

    fn next_id(&self) -> u64 {
        let mut id = 0;
        self.next_id.update_value(|next| {
            id = *next;
            *next += 1;
        });
        id
    }

    fn take_pending(&self) -> Option<Pending> {
        let mut taken = None;
        self.pending.update_value(|pending| taken = pending.take());
        taken
    }

    // Runs while the signals are still alive, before the owner drops them.
    fn release(&self) {
        let live_banners = self
            .banners
            .try_update(std::mem::take)
            .map_or(0, |banners| banners.len());
        for _ in 0..live_banners {
            self.stacking.notice_hidden();
        }
        self.toasts.set(Vec::new());
        self.finish(DialogResolution::Dismissed(DismissReason::Close));
    }

    /// Close whatever is in the dialog slot and answer its caller.
    fn finish(&self, resolution: DialogResolution) {
        let pending = self.take_pending();
        self.frame.set(None);
        self.phase.set(Phase::Closed);
        self.validation.set(None);
        self.input_value.set(String::new());

        // A dropped receiver means the caller went away; nothing to answer.
        match pending {
            Some(Pending::Message(reply)) => {
                let _ = reply.send(());
            }
            Some(Pending::Dialog { reply, .. }) => {
                let _ = reply.send(resolution);
            }
            None => {}
        }
    }

    fn open(&self, frame: Frame, pending: Pending) {
        if self.pending.try_with_value(Option::is_some) == Some(true) {
            warn!("a dialog is already open; closing it");
            self.finish(DialogResolution::Dismissed(DismissReason::Close));
        }
        self.pending.set_value(Some(pending));
        self.frame.set(Some(frame));
    }

    /// Put a custom dialog in the slot without running any hook yet.
    fn begin_dialog(
        &self,
        request: DialogRequest,
        events: SharedEvents,
    ) -> (u64, oneshot::Receiver<DialogResolution>) {
        let (reply, answered) = oneshot::channel();
        let generation = self.next_id();
        let has_input = request.input.is_some();
        let initial = request
            .input
            .as_ref()
            .and_then(|input| input.initial_value.clone())
            .unwrap_or_default();

        self.open(
            Frame::Dialog(request),
            Pending::Dialog {
                generation,
                events,
                reply,
                has_input,
            },
        );
        self.input_value.set(initial);
        self.validation.set(None);
        self.phase.set(Phase::Mounting);
        (generation, answered)
    }

    fn current_dialog(&self) -> Option<(u64, SharedEvents, bool)> {
        self.pending
            .try_with_value(|pending| match pending {
                Some(Pending::Dialog {
                    generation,
                    events,
                    has_input,
                    ..
                }) => Some((*generation, events.clone(), *has_input)),
                _ => None,
            })
            .flatten()
    }

    fn events_for(&self, generation: u64) -> Option<SharedEvents> {
        self.current_dialog()
            .filter(|(current, _, _)| *current == generation)
            .map(|(_, events, _)| events)
    }

    /// Returns false when the dialog is gone or will-open failed.
    fn fire_will_open(&self, generation: u64) -> bool {
        let Some(events) = self.events_for(generation) else {
            return false;
        };
        let opened = events.borrow_mut().will_open();
        match opened {
            Ok(()) => true,
            Err(err) => {
                self.fail(err);
                false
            }
        }
    }

    fn fire_did_open(&self, generation: u64) {
        let Some(events) = self.events_for(generation) else {
            return;
        };
        let opened = events.borrow_mut().did_open();
        match opened {
            Ok(()) => self.phase.set(Phase::Interactive),
            Err(err) => self.fail(err),
        }
    }

    // will-open once the markup is in the document, did-open a tick later.
    fn run_open_hooks(&self, generation: u64) {
        let renderer = *self;
        request_animation_frame(move || {
            if renderer.fire_will_open(generation) {
                set_timeout(move || renderer.fire_did_open(generation), Duration::ZERO);
            }
        });
    }

    fn fail(&self, err: HookError) {
        error!("dialog closed: {err}");
        self.finish(DialogResolution::Failed(err));
    }

    fn confirm(&self) {
        if self.phase.try_get_untracked() != Some(Phase::Interactive) {
            return;
        }
        let Some((_, events, has_input)) = self.current_dialog() else {
            return;
        };
        let input = has_input.then(|| self.input_value.try_get_untracked().unwrap_or_default());
        let accepted = events.borrow_mut().pre_confirm(input.as_deref());
        match accepted {
            Ok(()) => self.finish(DialogResolution::Confirmed),
            Err(HookError::Invalid(message)) => self.validation.set(Some(message)),
            Err(err) => self.fail(err),
        }
    }

    fn cancel(&self) {
        self.finish(DialogResolution::Cancelled);
    }

    fn dismiss(&self, reason: DismissReason) {
        if self.frame.try_with_untracked(Option::is_some) == Some(true) {
            self.finish(DialogResolution::Dismissed(reason));
        }
    }

    fn tick_toasts(&self, elapsed: Duration) {
        if self.toasts.try_with_untracked(Vec::is_empty).unwrap_or(true) {
            return;
        }
        self.toasts.update(|toasts| {
            toasts.retain_mut(|toast| !toast.timer.advance(elapsed));
        });
    }

    fn set_toast_paused(&self, id: u64, paused: bool) {
        self.toasts.update(|toasts| {
            if let Some(toast) = toasts.iter_mut().find(|toast| toast.id == id) {
                if paused {
                    toast.timer.pause();
                } else {
                    toast.timer.resume();
                }
            }
        });
    }

    fn toast_progress(&self, id: u64) -> f64 {
        self.toasts
            .try_with(|toasts| {
                toasts
                    .iter()
                    .find(|toast| toast.id == id)
                    .map(|toast| toast.timer.progress())
            })
            .flatten()
            .unwrap_or(0.0)
    }

    /// Shows a banner and raises the stacking context; `None` once disposed.
    fn raise_banner(&self, banner: BannerSpec) -> Option<u64> {
        let id = self.next_id();
        self.banners
            .try_update(|banners| banners.push(ActiveBanner { id, spec: banner }))?;
        self.stacking.notice_shown();
        Some(id)
    }

    // A disposed renderer already released its banners in `release`.
    fn hide_banner(&self, id: u64) {
        let removed = self.banners.try_update(|banners| {
            let before = banners.len();
            banners.retain(|banner| banner.id != id);
            banners.len() != before
        });
        if removed == Some(true) {
            self.stacking.notice_hidden();
        }
    }
}

#[async_trait(?Send)]
impl DialogRenderer for LeptosRenderer {
    fn show_toast(&self, toast: ToastSpec) {
        let active = ActiveToast {
            id: self.next_id(),
            timer: ToastTimer::new(toast.duration),
            spec: toast,
        };
        self.toasts.update(|toasts| toasts.push(active));
    }

    fn show_banner(&self, banner: BannerSpec) {
        let duration = banner.duration;
        if let Some(id) = self.raise_banner(banner) {
            let renderer = *self;
            set_timeout(move || renderer.hide_banner(id), duration);
        }
    }

    async fn show_message(&self, message: MessageSpec) {
        let (reply, answered) = oneshot::channel();
        self.open(Frame::Message(message), Pending::Message(reply));
        self.phase.set(Phase::Interactive);
        let _ = answered.await;
    }

    async fn show_dialog(&self, request: DialogRequest, events: SharedEvents) -> DialogResolution {
        let (generation, answered) = self.begin_dialog(request, events);
        self.run_open_hooks(generation);

        answered
            .await
            .unwrap_or(DialogResolution::Dismissed(DismissReason::Close))
    }
}

/// Wall-clock time between two `performance.now()` readings. Background tabs
/// throttle intervals, so toasts count real time rather than ticks.
fn elapsed_between(last_ms: f64, now_ms: f64) -> Duration {
    Duration::from_secs_f64((now_ms - last_ms).max(0.0) / 1000.0)
}

fn now_ms() -> f64 {
    window()
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_default()
}

fn notice_intent(kind: NoticeKind) -> MessageBarIntent {
    match kind {
        NoticeKind::Success => MessageBarIntent::Success,
        NoticeKind::Warning => MessageBarIntent::Warning,
        NoticeKind::Error => MessageBarIntent::Error,
        NoticeKind::Info | NoticeKind::Neutral => MessageBarIntent::Info,
    }
}

fn icon_view(icon: Option<Severity>) -> impl IntoView {
    icon.map(|severity| {
        view! {
            <div class=format!("inform-icon inform-icon--{}", severity.as_str())>
                {severity.glyph()}
            </div>
        }
    })
}

/// Renders toasts, banner notices and the blocking dialog slot for one
/// [`LeptosRenderer`].
#[component]
pub fn NotificationHost(renderer: LeptosRenderer) -> impl IntoView {
    Effect::new(move |_| {
        let escape = window_event_listener(leptos::ev::keydown, move |event| {
            if event.key() == "Escape" {
                renderer.dismiss(DismissReason::Escape);
            }
        });

        let last_tick = Rc::new(Cell::new(now_ms()));
        let ticker = set_interval_with_handle(
            move || {
                let now = now_ms();
                renderer.tick_toasts(elapsed_between(last_tick.replace(now), now));
            },
            TOAST_TICK,
        )
        .map_err(|err| error!("toast timer unavailable: {err:?}"))
        .ok();

        on_cleanup(move || {
            escape.remove();
            if let Some(ticker) = ticker {
                ticker.clear();
            }
        });
    });

    view! {
        <div class="inform-toasts">
            <For
                each=move || renderer.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let icon = toast.spec.icon;
                    let params = toast.spec.params;
                    view! {
                        <div
                            class=format!(
                                "inform-toast inform-toast--{} inform-toast--{}",
                                params.position.as_str(),
                                params.icon.as_str(),
                            )
                            on:mouseenter=move |_| renderer.set_toast_paused(id, true)
                            on:mouseleave=move |_| renderer.set_toast_paused(id, false)
                        >
                            {icon.map(|icon| view! {
                                <span class="inform-toast__icon">{icon.glyph()}</span>
                            })}
                            <span class="inform-toast__message">{params.message}</span>
                            <div
                                class="inform-toast__progress"
                                style:width=move || format!("{:.1}%", renderer.toast_progress(id) * 100.0)
                            ></div>
                        </div>
                    }
                }
            />
        </div>

        <div class="inform-banners">
            <For
                each=move || renderer.banners.get()
                key=|banner| banner.id
                children=move |banner| {
                    view! {
                        <div class=format!("inform-banner inform-banner--{}", banner.spec.kind.as_str())>
                            <MessageBar intent=notice_intent(banner.spec.kind)>
                                {banner.spec.message}
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>

        {move || renderer.frame.get().map(|frame| {
            // No click handler on the overlay: only confirm, cancel and escape close it.
            let panel = match frame {
                Frame::Message(spec) => message_panel(renderer, spec).into_any(),
                Frame::Dialog(request) => dialog_panel(renderer, request).into_any(),
            };
            view! {
                <div class="inform-overlay" role="dialog" aria-modal="true">
                    {panel}
                </div>
            }
        })}
    }
}

fn message_panel(renderer: LeptosRenderer, spec: MessageSpec) -> impl IntoView {
    let body = match spec.body {
        MessageBody::Text(text) => view! { <p class="inform-dialog__text">{text}</p> }.into_any(),
        MessageBody::Markup(html) => view! { <div class="inform-dialog__html" inner_html=html></div> }.into_any(),
    };
    let footer = (!spec.footer.is_empty())
        .then(|| view! { <div class="inform-dialog__footer">{spec.footer}</div> });

    view! {
        <div class="inform-dialog">
            {icon_view(spec.icon)}
            <h2 class="inform-dialog__title">{spec.title}</h2>
            {body}
            <div class="inform-dialog__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| renderer.finish(DialogResolution::Confirmed)
                >
                    {spec.confirm_label}
                </Button>
            </div>
            {footer}
        </div>
    }
}

fn dialog_panel(renderer: LeptosRenderer, request: DialogRequest) -> impl IntoView {
    let class = match &request.presentation_class {
        Some(extra) => format!("inform-dialog {extra}"),
        None => "inform-dialog".to_string(),
    };
    let input = request.input.map(|input| {
        let label = input.label.map(|text| {
            view! { <label class="inform-dialog__label" for="inform-dialog-input">{text}</label> }
        });
        view! {
            {label}
            <input
                id="inform-dialog-input"
                class="inform-dialog__input"
                type=input.kind.as_str()
                min=input.constraints.min
                max=input.constraints.max
                step=input.constraints.step
                prop:value=move || renderer.input_value.get()
                on:input=move |ev| renderer.input_value.set(event_target_value(&ev))
            />
        }
    });
    let confirm_style = request
        .confirm_color
        .map(|color| format!("background-color: {color};"));
    let confirm = request.show_confirm_button.then(|| {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                attr:style=confirm_style
                disabled=Signal::derive(move || renderer.phase.get() != Phase::Interactive)
                on_click=move |_| renderer.confirm()
            >
                {request.confirm_label}
            </Button>
        }
    });

    view! {
        <div class=class>
            {icon_view(request.icon)}
            <h2 class="inform-dialog__title">{request.title}</h2>
            <div class="inform-dialog__html" inner_html=request.body_markup></div>
            {input}
            {move || renderer.validation.get().map(|message| view! {
                <div class="inform-dialog__validation">{message}</div>
            })}
            <div class="inform-dialog__actions">
                {confirm}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| renderer.cancel()>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
