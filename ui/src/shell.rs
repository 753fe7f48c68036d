use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::components::NavigationBar;
use crate::i18n;
use crate::routing::{NavigationHandle, PageRouter, Subscription};

/// Root of the dashboard: the navigation bar plus the page selected by the
/// location fragment.
///
/// The navigation source comes from a [`NavigationHandle`] context when the
/// host provides one, otherwise [`NavigationHandle::platform_default`].
#[component]
pub fn Shell() -> Element {
    i18n::init();

    let router = use_hook(|| {
        let handle = try_consume_context::<NavigationHandle>()
            .unwrap_or_else(NavigationHandle::platform_default);
        PageRouter::new(handle.source())
    });
    let token = use_signal(|| router.token());

    // Held by the hook so the listener is detached when this scope is dropped.
    let _subscription: Option<Rc<Subscription>> = use_hook(|| {
        let watched = router.watch(move |next| {
            debug!(route = %next, "navigation change");
            let mut token = token;
            token.set(next.clone());
        });
        match watched {
            Ok(subscription) => Some(Rc::new(subscription)),
            Err(err) => {
                warn!("navigation updates disabled: {err}");
                None
            }
        }
    });

    use_drop(|| debug!("shell torn down, releasing navigation listener"));

    let route = token.read().resolve();

    rsx! {
        div { class: "shell",
            NavigationBar {}
            {route.render()}
        }
    }
}
