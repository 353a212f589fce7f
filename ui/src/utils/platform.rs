//! Platform Utilities
//!
//! Thin wrappers over the few browser APIs the classifier needs, with native
//! fallbacks so the form controller can be exercised outside the browser.
//!
//! - Wall clock in milliseconds (`Date.now()` in the browser)
//! - Async sleep (`setTimeout` via gloo-timers in the browser, tokio natively)
//! - Focusing and scrolling elements by id
//! - A document-wide `keydown` listener

use std::time::Duration;

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}

/// Resolves after `duration`; dropping the future cancels the timer
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

/// Resolves after `duration`; dropping the future cancels the timer
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Move keyboard focus to the element with `id`, if it exists
#[cfg(target_arch = "wasm32")]
pub fn focus_element(id: &str) {
    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlElement};

    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    match element {
        Some(element) => {
            if element.focus().is_err() {
                tracing::debug!("Could not focus #{}", id);
            }
        }
        None => tracing::debug!("No element #{} to focus", id),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn focus_element(_id: &str) {}

/// Smoothly scroll the element with `id` into the nearest visible position
#[cfg(target_arch = "wasm32")]
pub fn scroll_into_view(id: &str) {
    use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        tracing::debug!("No element #{} to scroll to", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_into_view(_id: &str) {}

/// Document-wide `keydown` subscription, removed again when dropped
#[cfg(target_arch = "wasm32")]
pub struct KeydownListener {
    document: web_sys::Document,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl KeydownListener {
    /// Listen on `document` so key presses are seen wherever focus is.
    ///
    /// `handler` receives whether Ctrl or Meta is held and the key name, and
    /// returns true to suppress the browser default for that press.
    pub fn on_document(mut handler: impl FnMut(bool, &str) -> bool + 'static) -> Option<Self> {
        use wasm_bindgen::{closure::Closure, JsCast};

        let document = web_sys::window().and_then(|w| w.document())?;
        let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                let command_held = event.ctrl_key() || event.meta_key();
                if handler(command_held, &event.key()) {
                    event.prevent_default();
                }
            },
        );

        if document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::debug!("Could not register document keydown listener");
            return None;
        }

        Some(Self { document, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for KeydownListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::debug!("Could not remove document keydown listener");
        }
    }
}

/// Without a document there is nothing to listen on
#[cfg(not(target_arch = "wasm32"))]
pub struct KeydownListener;

#[cfg(not(target_arch = "wasm32"))]
impl KeydownListener {
    pub fn on_document(_handler: impl FnMut(bool, &str) -> bool + 'static) -> Option<Self> {
        None
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_browser_timer_resolves() {
        let start = now_ms();
        sleep(Duration::from_millis(50)).await;
        assert!(now_ms() - start >= 45.0);
    }

    fn key_press(key: &str, ctrl: bool) -> web_sys::KeyboardEvent {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        init.set_ctrl_key(ctrl);
        init.set_cancelable(true);
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_document_listener_sees_unfocused_key_presses() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let document = web_sys::window().unwrap().document().unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let recorded = seen.clone();
        let listener = KeydownListener::on_document(move |command_held, key| {
            recorded.borrow_mut().push((command_held, key.to_string()));
            command_held && key == "Enter"
        })
        .unwrap();

        // dispatch_event returns false when the default was prevented
        assert!(!document.dispatch_event(&key_press("Enter", true)).unwrap());
        assert!(document.dispatch_event(&key_press("a", false)).unwrap());
        assert_eq!(
            *seen.borrow(),
            vec![(true, "Enter".to_string()), (false, "a".to_string())]
        );

        drop(listener);
        assert!(document.dispatch_event(&key_press("Enter", true)).unwrap());
        assert_eq!(seen.borrow().len(), 2);
    }

    #[wasm_bindgen_test]
    fn test_dom_helpers_ignore_missing_elements() {
        focus_element("no-such-element");
        scroll_into_view("no-such-element");
    }
}
