use std::rc::Rc;

use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::availability::{
    AvailabilityConfig, AvailabilityWorkflow, DomDateRange, FetchTransport, Resolution,
    RoomContext, WorkflowError,
};
use crate::components::notification_host::LeptosRenderer;
use crate::notify::Inform;
use crate::utils::dom;

type RoomWorkflow = AvailabilityWorkflow<LeptosRenderer, DomDateRange, FetchTransport>;

/// The room page's "Check Availability" button.
#[component]
pub fn CheckAvailability(
    inform: Inform<LeptosRenderer>,
    #[prop(into)] room_id: String,
    #[prop(optional)] config: Option<AvailabilityConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let workflow: StoredValue<Rc<RoomWorkflow>, LocalStorage> =
        StoredValue::new_local(Rc::new(AvailabilityWorkflow::new(
            inform,
            DomDateRange,
            FetchTransport::new(config.endpoint, config.timeout),
            RoomContext::new(room_id, dom::csrf_token()),
        )));

    let on_click = move |_| {
        let workflow = workflow.get_value();
        spawn_local(async move {
            match workflow.run().await {
                Ok(Resolution::Available { reserve_link }) => log!("offered {reserve_link}"),
                Ok(resolution) => log!("availability check ended: {resolution:?}"),
                Err(WorkflowError::Busy(state)) => {
                    warn!("availability check already running ({state:?})")
                }
                Err(WorkflowError::Dialog(err)) => {
                    error!("availability dialog failed: {err}");
                    if cfg!(debug_assertions) {
                        panic!("availability dialog contract violated: {err}");
                    }
                }
            }
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Primary
            attr:id="check-availability-btn"
            on_click=on_click
        >
            "Check Availability"
        </Button>
    }
}
