//! Blocks submission of forms flagged for client-side validation while any
//! of their constraints fail.
//!
//! Guards are attached once at hydration; forms rendered afterwards (dialog
//! bodies included) are not covered.

pub const NEEDS_VALIDATION_CLASS: &str = "needs-validation";
pub const VALIDATED_CLASS: &str = "was-validated";

/// A form as far as the guard cares.
pub trait GuardedForm {
    fn check_validity(&self) -> bool;
    fn mark_validated(&self);
}

/// The submit event being guarded.
pub trait SubmitControl {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitVerdict {
    Proceed,
    Blocked,
}

/// Stops an invalid submission in its tracks. The form is marked validated
/// either way so feedback styles show up.
pub fn guard_submit(form: &impl GuardedForm, event: &impl SubmitControl) -> SubmitVerdict {
    let verdict = if form.check_validity() {
        SubmitVerdict::Proceed
    } else {
        event.prevent_default();
        event.stop_propagation();
        SubmitVerdict::Blocked
    };
    form.mark_validated();
    verdict
}

#[cfg(feature = "hydrate")]
mod dom {
    use leptos::logging::{log, warn};
    use leptos::prelude::document;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Event, HtmlFormElement};

    use super::*;

    impl GuardedForm for HtmlFormElement {
        fn check_validity(&self) -> bool {
            HtmlFormElement::check_validity(self)
        }

        fn mark_validated(&self) {
            if let Err(err) = self.class_list().add_1(VALIDATED_CLASS) {
                warn!("could not mark form as validated: {err:?}");
            }
        }
    }

    impl SubmitControl for Event {
        fn prevent_default(&self) {
            Event::prevent_default(self);
        }

        fn stop_propagation(&self) {
            Event::stop_propagation(self);
        }
    }

    /// Attach a submit guard to every form currently flagged
    /// `needs-validation`. Returns how many forms were guarded.
    pub fn install_form_guards() -> usize {
        let flagged = document().get_elements_by_class_name(NEEDS_VALIDATION_CLASS);
        let mut guarded = 0;

        for index in 0..flagged.length() {
            let Some(form) = flagged
                .item(index)
                .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
            else {
                continue;
            };

            let target = form.clone();
            let on_submit = Closure::<dyn Fn(Event)>::new(move |event: Event| {
                if guard_submit(&target, &event) == SubmitVerdict::Blocked {
                    log!("blocked submission of an invalid form");
                }
            });
            match form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            {
                Ok(()) => guarded += 1,
                Err(err) => warn!("could not guard form: {err:?}"),
            }
            // Guards live as long as the page.
            on_submit.forget();
        }

        guarded
    }
}

#[cfg(feature = "hydrate")]
pub use dom::install_form_guards;
