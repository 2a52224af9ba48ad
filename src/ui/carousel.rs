// ============================================================================
// CAROUSEL - promotion banner auto-advance with hover pause
// ============================================================================

use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    add_class, get_element_by_id, on_click, on_mouse_enter, on_mouse_leave, query_selector_all_in,
    remove_class,
};
use crate::utils::constants::CAROUSEL_INTERVAL_MS;

/// No-op when the page has no `#promotionCarousel`. Advances every 5 s,
/// wraps, pauses while the pointer is over the carousel and resumes when it
/// leaves. Dropping the Interval handle is what pauses the timer.
pub fn init() -> Result<(), JsValue> {
    let Some(carousel) = get_element_by_id("promotionCarousel") else {
        return Ok(());
    };

    let slides = query_selector_all_in(&carousel, ".carousel-item")?;
    if slides.len() < 2 {
        return Ok(());
    }
    log::info!("🎠 [CAROUSEL] {} slides, auto-advance every {}ms", slides.len(), CAROUSEL_INTERVAL_MS);

    let current: Rc<RefCell<usize>> = Rc::new(RefCell::new(
        slides
            .iter()
            .position(|s| s.class_list().contains("active"))
            .unwrap_or(0),
    ));

    let advance: Rc<dyn Fn(i32)> = {
        let slides = slides.clone();
        let current = current.clone();
        Rc::new(move |direction: i32| {
            let len = slides.len() as i32;
            let mut index = current.borrow_mut();
            let next = (*index as i32 + direction).rem_euclid(len) as usize;
            if let Err(e) = show_slide(&slides, *index, next) {
                log::error!("❌ [CAROUSEL] {:?}", e);
                return;
            }
            *index = next;
        })
    };

    let timer: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let start = {
        let advance = advance.clone();
        let timer = timer.clone();
        Rc::new(move || {
            let advance = advance.clone();
            let interval = Interval::new(CAROUSEL_INTERVAL_MS, move || advance(1));
            *timer.borrow_mut() = Some(interval);
        })
    };
    start();

    {
        let timer = timer.clone();
        on_mouse_enter(&carousel, move |_| {
            timer.borrow_mut().take();
        })?;
    }
    {
        let start = start.clone();
        on_mouse_leave(&carousel, move |_| start())?;
    }

    if let Ok(Some(prev)) = carousel.query_selector(".carousel-control-prev") {
        let advance = advance.clone();
        on_click(&prev, move |_| advance(-1))?;
    }
    if let Ok(Some(next)) = carousel.query_selector(".carousel-control-next") {
        let advance = advance.clone();
        on_click(&next, move |_| advance(1))?;
    }

    Ok(())
}

fn show_slide(slides: &[Element], from: usize, to: usize) -> Result<(), JsValue> {
    if let Some(old) = slides.get(from) {
        remove_class(old, "active")?;
    }
    if let Some(new) = slides.get(to) {
        add_class(new, "active")?;
    }
    Ok(())
}
