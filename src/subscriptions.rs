//! Owned DOM subscriptions with scoped acquisition semantics.
//!
//! Every callback the page registers (scroll listener, viewport intersection
//! observer) is held by a handle that unregisters it on drop. Components
//! acquire their subscriptions on mount and release them unconditionally on
//! unmount, so no callback can outlive its panel.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// A DOM event listener that removes itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(_)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Watches one element for its first intersection with the viewport above a
/// threshold, fires `on_enter` once, then disconnects itself. Dropping the
/// handle disconnects the observer too, so a callback can never act on an
/// unmounted panel.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    pub fn once(
        element: &Element,
        threshold: f64,
        mut on_enter: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = match entry.dyn_into() {
                        Ok(e) => e,
                        Err(_) => continue,
                    };
                    if entry.is_intersecting() {
                        on_enter();
                        // One-shot: never re-arms after the first trigger.
                        observer.disconnect();
                        break;
                    }
                }
            },
        )
            as Box<dyn FnMut(_, _)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _closure: closure,
        })
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
