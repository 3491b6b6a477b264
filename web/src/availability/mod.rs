//! The room page's "check availability" flow.

mod inputs;
pub mod markup;
mod selection;
mod transport;
mod workflow;

pub use inputs::{DateRangeInputs, DomDateRange, PickerConfig};
pub use selection::DateRangeSelection;
pub use transport::{AvailabilityTransport, FetchTransport, TransportError};
pub use workflow::{
    AvailabilityConfig, AvailabilityWorkflow, Resolution, ResolvedKind, RoomContext,
    WorkflowError, WorkflowState, AVAILABLE_TITLE, DIALOG_TITLE, NETWORK_FAILURE_MESSAGE,
    UNAVAILABLE_MESSAGE,
};
