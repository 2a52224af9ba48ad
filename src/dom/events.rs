// ============================================================================
// EVENT HANDLING - listener registration helpers
// ============================================================================
// Listeners are registered with Closure::wrap + forget(). For listeners on
// DOM elements the browser drops them together with the element. Listeners
// on window/document must only be registered once, at boot.
// ============================================================================

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

/// Generic listener registration; the typed wrappers below cover the events
/// this app actually uses.
pub fn on_event<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(E) + 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    on_event(element.as_ref(), "click", handler)
}

pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::InputEvent) + 'static,
{
    on_event(element.as_ref(), "input", handler)
}

pub fn on_blur<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::FocusEvent) + 'static,
{
    on_event(element.as_ref(), "blur", handler)
}

pub fn on_submit<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    on_event(element.as_ref(), "submit", handler)
}

pub fn on_keydown<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::KeyboardEvent) + 'static,
{
    on_event(target, "keydown", handler)
}

pub fn on_mouse_enter<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    on_event(element.as_ref(), "mouseenter", handler)
}

pub fn on_mouse_leave<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    on_event(element.as_ref(), "mouseleave", handler)
}

pub fn on_resize<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    on_event(win.as_ref(), "resize", handler)
}
