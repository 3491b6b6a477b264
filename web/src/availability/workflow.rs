use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::logging::{error, log};
use shared_types::{
    reserve_room_link, AvailabilityRequest, AvailabilityResponse, SEARCH_AVAILABILITY_MODAL_PATH,
};
use thiserror::Error;

use super::inputs::{DateRangeInputs, PickerConfig};
use super::markup;
use super::selection::DateRangeSelection;
use super::transport::AvailabilityTransport;
use crate::notify::{
    DialogLifecycleHooks, DialogRenderer, DialogRequest, HookError, Inform, MessageParams,
    NoticeKind, Severity,
};

pub const DIALOG_TITLE: &str = "Choose your dates";
pub const AVAILABLE_TITLE: &str = "This room is available !";
pub const UNAVAILABLE_MESSAGE: &str = "Sorry, this room is not available";
pub const NETWORK_FAILURE_MESSAGE: &str = "Could not check availability, please try again";
const CONFIRM_COLOR: &str = "#0d6efd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            endpoint: SEARCH_AVAILABILITY_MODAL_PATH.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Ambient values every request for one room carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomContext {
    pub room_id: String,
    pub csrf_token: String,
}

impl RoomContext {
    pub fn new(room_id: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            csrf_token: csrf_token.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedKind {
    Available,
    Unavailable,
    NetworkError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    DialogOpening,
    DialogInteractive,
    Submitting,
    Resolved(ResolvedKind),
}

/// What one run of the workflow ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Dialog closed without a usable date range.
    Abandoned,
    Available { reserve_link: String },
    Unavailable,
    NetworkError,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("an availability check is already running ({0:?})")]
    Busy(WorkflowState),

    #[error(transparent)]
    Dialog(#[from] HookError),
}

/// Returns the workflow to `Idle` however the run ends.
struct IdleOnDrop(Rc<Cell<WorkflowState>>);

impl Drop for IdleOnDrop {
    fn drop(&mut self) {
        self.0.set(WorkflowState::Idle);
    }
}

/// The "check availability" flow for one room: date dialog, submission,
/// result presentation. At most one run is in flight per instance.
pub struct AvailabilityWorkflow<R, I, X> {
    inform: Inform<R>,
    inputs: Rc<I>,
    transport: X,
    room: RoomContext,
    state: Rc<Cell<WorkflowState>>,
}

impl<R, I, X> AvailabilityWorkflow<R, I, X>
where
    R: DialogRenderer,
    I: DateRangeInputs + 'static,
    X: AvailabilityTransport,
{
    pub fn new(inform: Inform<R>, inputs: I, transport: X, room: RoomContext) -> Self {
        Self {
            inform,
            inputs: Rc::new(inputs),
            transport,
            room,
            state: Rc::new(Cell::new(WorkflowState::Idle)),
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state.get()
    }

    pub fn is_idle(&self) -> bool {
        self.state() == WorkflowState::Idle
    }

    pub async fn run(&self) -> Result<Resolution, WorkflowError> {
        if !self.is_idle() {
            return Err(WorkflowError::Busy(self.state()));
        }
        let _idle = IdleOnDrop(self.state.clone());

        self.state.set(WorkflowState::DialogOpening);
        let request = DialogRequest::new(DIALOG_TITLE)
            .body(markup::date_range_form())
            .confirm_color(CONFIRM_COLOR);
        let outcome = self.inform.custom_modal(request, self.dialog_hooks()).await?;
        let Some(selection) = outcome.into_confirmed() else {
            return Ok(Resolution::Abandoned);
        };

        self.state.set(WorkflowState::Submitting);
        let request = AvailabilityRequest {
            start_date: selection.start_date,
            end_date: selection.end_date,
            csrf_token: self.room.csrf_token.clone(),
            room_id: self.room.room_id.clone(),
        };

        match self.transport.check(&request).await {
            Ok(response) if response.ok => {
                self.state
                    .set(WorkflowState::Resolved(ResolvedKind::Available));
                let reserve_link = self.reserve_link(&response, &request);
                self.present_available(&reserve_link).await?;
                Ok(Resolution::Available { reserve_link })
            }
            Ok(_) => {
                self.state
                    .set(WorkflowState::Resolved(ResolvedKind::Unavailable));
                self.inform
                    .error(MessageParams::new().message(UNAVAILABLE_MESSAGE))
                    .await;
                Ok(Resolution::Unavailable)
            }
            Err(err) => {
                self.state
                    .set(WorkflowState::Resolved(ResolvedKind::NetworkError));
                error!(
                    "availability check for room {} failed: {err}",
                    self.room.room_id
                );
                self.inform
                    .notify(NETWORK_FAILURE_MESSAGE, NoticeKind::Error, None);
                Ok(Resolution::NetworkError)
            }
        }
    }

    fn dialog_hooks(&self) -> DialogLifecycleHooks<DateRangeSelection> {
        let attach = self.inputs.clone();
        let enable = self.inputs.clone();
        let collect = self.inputs.clone();
        let state = self.state.clone();

        DialogLifecycleHooks::new()
            .will_open(move || attach.attach_picker(&PickerConfig::starting_today()))
            .did_open(move || {
                enable.enable()?;
                state.set(WorkflowState::DialogInteractive);
                Ok(())
            })
            .pre_confirm(move |_| {
                let selection = collect.selection()?;
                selection.validate()?;
                Ok(selection)
            })
    }

    // Endpoints that omit the echo fields still get a usable link.
    fn reserve_link(&self, response: &AvailabilityResponse, request: &AvailabilityRequest) -> String {
        let or_requested = |echoed: &str, requested: &str| {
            if echoed.is_empty() {
                requested.to_string()
            } else {
                echoed.to_string()
            }
        };
        reserve_room_link(
            &or_requested(&response.room_id, &request.room_id),
            &or_requested(&response.start_date, &request.start_date),
            &or_requested(&response.end_date, &request.end_date),
        )
    }

    async fn present_available(&self, reserve_link: &str) -> Result<(), HookError> {
        log!("room {} is available: {reserve_link}", self.room.room_id);
        let request = DialogRequest::new(AVAILABLE_TITLE)
            .icon(Severity::Success)
            .body(markup::reserve_now_link(reserve_link))
            .hide_confirm_button();
        self.inform
            .custom_modal(request, DialogLifecycleHooks::<()>::new())
            .await
            .map(|_| ())
    }
}
