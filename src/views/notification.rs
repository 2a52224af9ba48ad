// ============================================================================
// NOTIFICATION VIEW - transient, dismissible toast messages
// ============================================================================

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::dom::{append_child, document, on_click, ElementBuilder};
use crate::utils::constants::NOTIFICATION_DISMISS_MS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Alert modifier class; errors map to the "danger" styling.
    pub fn alert_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "alert-success",
            NotificationKind::Error => "alert-danger",
            NotificationKind::Warning => "alert-warning",
            NotificationKind::Info => "alert-info",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "bi-check-circle",
            NotificationKind::Error | NotificationKind::Warning => "bi-exclamation-triangle",
            NotificationKind::Info => "bi-info-circle",
        }
    }
}

/// Toast with the default (auth-flow) dismiss window.
pub fn notify(message: &str, kind: NotificationKind) -> Result<(), JsValue> {
    notify_for(message, kind, NOTIFICATION_DISMISS_MS)
}

/// Appends one toast to the body. Toasts stack (each is independent), expire
/// after `dismiss_ms`, and can be dismissed early through the close button;
/// early dismissal cancels the expiry timer.
pub fn notify_for(
    message: &str,
    kind: NotificationKind,
    dismiss_ms: u32,
) -> Result<(), JsValue> {
    let body = document()
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let toast = ElementBuilder::new("div")?
        .class(&format!(
            "alert {} alert-dismissible fade show position-fixed",
            kind.alert_class()
        ))
        .attr("role", "alert")?
        .style("top", "20px")?
        .style("right", "20px")?
        .style("z-index", "9999")?
        .style("min-width", "300px")?
        .style("max-width", "400px")?
        .build();

    let icon = ElementBuilder::new("i")?
        .class(&format!("bi {} me-2", kind.icon_class()))
        .build();
    let text = ElementBuilder::new("span")?.text(message).build();
    let close = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close")
        .attr("aria-label", "Close")?
        .build();

    append_child(&toast, &icon)?;
    append_child(&toast, &text)?;
    append_child(&toast, &close)?;
    body.append_child(&toast)?;

    // Expiry timer, held so the close button can cancel it by dropping.
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    {
        let toast = toast.clone();
        *timer.borrow_mut() = Some(Timeout::new(dismiss_ms, move || {
            toast.remove();
        }));
    }

    {
        let toast = toast.clone();
        let timer = timer.clone();
        on_click(&close, move |_| {
            timer.borrow_mut().take();
            toast.remove();
        })?;
    }

    Ok(())
}
