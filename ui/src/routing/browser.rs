use dioxus::logger::tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;

use super::source::{Listener, NavigationError, NavigationSource, Subscription};

const HASHCHANGE: &str = "hashchange";

/// Navigation source backed by `window.location.hash` and the `hashchange` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigation;

impl BrowserNavigation {
    pub fn new() -> Self {
        Self
    }
}

impl NavigationSource for BrowserNavigation {
    fn fragment(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }

    fn subscribe(&self, listener: Listener) -> Result<Subscription, NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::WindowUnavailable)?;

        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| listener());
        window
            .add_event_listener_with_callback(HASHCHANGE, closure.as_ref().unchecked_ref())
            .map_err(|err| NavigationError::Listen(format!("{err:?}")))?;

        Ok(Subscription::new(move || {
            // The closure must outlive its registration, so it is dropped only here.
            if let Err(err) = window
                .remove_event_listener_with_callback(HASHCHANGE, closure.as_ref().unchecked_ref())
            {
                warn!("could not remove navigation listener: {err:?}");
            }
            drop(closure);
        }))
    }
}
