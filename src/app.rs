// ============================================================================
// APP BOOT - page detection and controller wiring
// ============================================================================
// Every controller is a no-op when its anchor element is absent, so boot can
// run the full list on every page and let the markup decide what activates.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::current_pathname;
use crate::services::SessionService;
use crate::{forms, search, ui};

/// Pages with auth-specific behaviour; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Other,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path.contains("login") {
            Page::Login
        } else if path.contains("register") {
            Page::Register
        } else {
            Page::Other
        }
    }
}

pub fn boot() -> Result<(), JsValue> {
    let page = Page::from_path(&current_pathname());
    log::info!("📄 [APP] Booting on {:?} page", page);

    // Auth pages first: an active session redirects away before any form
    // wiring matters.
    match page {
        Page::Login => {
            SessionService::new().check_session()?;
            forms::login::init()?;
        }
        Page::Register => {
            SessionService::new().check_session()?;
            forms::register::init()?;
        }
        Page::Other => {}
    }

    // Shared wiring, present on every page.
    forms::scaffold_validation()?;
    forms::password_toggle::init()?;
    ui::accessibility::init()?;
    ui::animations::init()?;
    ui::responsive::init()?;

    // Anchor-gated controllers.
    forms::profile::init()?;
    search::init()?;
    ui::carousel::init()?;
    ui::cart::init()?;

    log::info!("✅ [APP] Boot complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_pages_are_detected_by_path_substring() {
        assert_eq!(Page::from_path("/login.html"), Page::Login);
        assert_eq!(Page::from_path("/account/login"), Page::Login);
        assert_eq!(Page::from_path("/register.html"), Page::Register);
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(Page::from_path("/"), Page::Other);
        assert_eq!(Page::from_path("/index.html"), Page::Other);
        assert_eq!(Page::from_path("/profile.html"), Page::Other);
    }
}
