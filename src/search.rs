// ============================================================================
// SEARCH CONTROLLER - product search/filter wiring plus header quick search
// ============================================================================
// The controller owns a SearchState slice; the inputs, the slider and the
// quick-filter tags all write through it so the next query always sees one
// consistent filter.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{
    add_class, get_element_by_id, get_input, on_click, on_input, on_keydown, query_selector,
    query_selector_all, remove_class, set_inner_html, set_style,
};
use crate::services::catalog;
use crate::state::SearchState;
use crate::utils::constants::{
    NOTIFICATION_DISMISS_BRIEF_MS, PRICE_SLIDER_RESET, QUICK_SEARCH_LATENCY_MS,
    SUGGESTION_MIN_CHARS,
};
use crate::views::{notify_for, render_results, NotificationKind};

/// Parses a quick-filter tag range of the form `"10-25"`.
pub fn parse_tag_range(raw: &str) -> Option<(f64, f64)> {
    let (min, max) = raw.split_once('-')?;
    let min = min.trim().parse::<f64>().ok()?;
    let max = max.trim().parse::<f64>().ok()?;
    (min <= max).then_some((min, max))
}

/// No-op on pages without the search panel (`#productNameSearch`).
pub fn init() -> Result<(), JsValue> {
    init_quick_search()?;

    let Some(name_input) = get_input("productNameSearch") else {
        return Ok(());
    };
    log::info!("🔍 [SEARCH] Wiring product search panel");

    let state = SearchState::new();

    let perform_search: Rc<dyn Fn()> = {
        let state = state.clone();
        Rc::new(move || {
            let filter = state.filter();
            let results = catalog::search(&state.query(), filter.min, filter.max);
            log::info!(
                "🔍 [SEARCH] query='{}' range={}..={} -> {} hits",
                state.query(),
                filter.min,
                filter.max,
                results.len()
            );

            if let Some(container) = get_element_by_id("searchResults") {
                if let Err(e) = render_results(&container, &results) {
                    log::error!("❌ [SEARCH] render failed: {:?}", e);
                    return;
                }
            }
            let _ = notify_for(
                &format!("Found {} products matching your criteria", results.len()),
                NotificationKind::Info,
                NOTIFICATION_DISMISS_BRIEF_MS,
            );
        })
    };

    // Name input: track the query and filter the static suggestion list.
    {
        let state = state.clone();
        let field = name_input.clone();
        on_input(name_input.as_ref(), move |_| {
            let value = field.value();
            state.set_query(&value);
            update_suggestions(&value);
        })?;
    }
    {
        let perform = perform_search.clone();
        on_keydown(name_input.as_ref(), move |e: web_sys::KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                hide_suggestions();
                perform();
            }
        })?;
    }

    // Clicking a suggestion fills the input and searches right away.
    for item in query_selector_all(".suggestion-item")? {
        let state = state.clone();
        let input = name_input.clone();
        let perform = perform_search.clone();
        let item_el = item.clone();
        on_click(&item, move |_| {
            let text = item_el.text_content().unwrap_or_default();
            let text = text.trim();
            input.set_value(text);
            state.set_query(text);
            hide_suggestions();
            perform();
        })?;
    }

    // Slider drives the max bound and mirrors into the numeric input.
    if let Some(slider) = get_input("priceRange") {
        let state = state.clone();
        let slider_el = slider.clone();
        on_input(slider.as_ref(), move |_| {
            let value = slider_el.value();
            if let Some(max_input) = get_input("maxPrice") {
                max_input.set_value(&value);
            }
            state.set_max(&value);
            update_range_labels(&state);
        })?;
    }

    if let Some(min_input) = get_input("minPrice") {
        let state = state.clone();
        let input = min_input.clone();
        on_input(min_input.as_ref(), move |_| {
            state.set_min(&input.value());
            update_range_labels(&state);
        })?;
    }
    if let Some(max_input) = get_input("maxPrice") {
        let state = state.clone();
        let input = max_input.clone();
        on_input(max_input.as_ref(), move |_| {
            let value = input.value();
            if let Some(slider) = get_input("priceRange") {
                slider.set_value(&value);
            }
            state.set_max(&value);
            update_range_labels(&state);
        })?;
    }

    // Quick-filter tags: one active at a time, both bounds set atomically.
    let tags = query_selector_all(".price-tag")?;
    for (index, tag) in tags.iter().enumerate() {
        let state = state.clone();
        let perform = perform_search.clone();
        let tags = tags.clone();
        let tag_el = tag.clone();
        on_click(tag, move |_| {
            let Some((min, max)) = tag_el
                .get_attribute("data-range")
                .as_deref()
                .and_then(parse_tag_range)
            else {
                log::warn!("⚠️ [SEARCH] tag without a usable data-range");
                return;
            };

            for other in &tags {
                let _ = remove_class(other, "active");
            }
            let _ = add_class(&tag_el, "active");

            if let Some(input) = get_input("minPrice") {
                input.set_value(&format_price(min));
            }
            if let Some(input) = get_input("maxPrice") {
                input.set_value(&format_price(max));
            }
            if let Some(slider) = get_input("priceRange") {
                slider.set_value(&format_price(max));
            }

            state.apply_tag(index, min, max);
            update_range_labels(&state);
            perform();
        })?;
    }

    if let Some(button) = get_element_by_id("searchProducts") {
        let perform = perform_search.clone();
        on_click(&button, move |_| {
            hide_suggestions();
            perform();
        })?;
    }

    if let Some(button) = get_element_by_id("clearFilters") {
        let state = state.clone();
        let input = name_input.clone();
        on_click(&button, move |_| {
            input.set_value("");
            if let Some(min) = get_input("minPrice") {
                min.set_value("");
            }
            if let Some(max) = get_input("maxPrice") {
                max.set_value("");
            }
            if let Some(slider) = get_input("priceRange") {
                slider.set_value(PRICE_SLIDER_RESET);
            }
            if let Ok(tags) = query_selector_all(".price-tag") {
                for tag in tags {
                    let _ = remove_class(&tag, "active");
                }
            }
            if let Some(results) = get_element_by_id("searchResults") {
                let _ = set_style(&results, "display", "none");
            }
            hide_suggestions();
            state.clear();
            update_range_labels(&state);
            let _ = notify_for(
                "All filters cleared",
                NotificationKind::Info,
                NOTIFICATION_DISMISS_BRIEF_MS,
            );
        })?;
    }

    update_range_labels(&state);
    Ok(())
}

fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn update_range_labels(state: &SearchState) {
    let filter = state.filter();
    if let Ok(Some(labels)) = query_selector(".range-labels") {
        set_inner_html(
            &labels,
            &format!(
                "<span>${}</span><span>${}</span>",
                format_price(filter.min),
                format_price(filter.max)
            ),
        );
    }
}

/// Shows the suggestion list while the query is non-empty, hiding the items
/// that do not match it.
fn update_suggestions(query: &str) {
    let query = query.trim().to_lowercase();
    let Some(container) = get_element_by_id("searchSuggestions") else {
        return;
    };

    if query.is_empty() {
        let _ = set_style(&container, "display", "none");
        return;
    }

    let mut any_visible = false;
    if let Ok(items) = query_selector_all(".suggestion-item") {
        for item in items {
            let matches = item
                .text_content()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&query);
            any_visible |= matches;
            let _ = set_style(&item, "display", if matches { "block" } else { "none" });
        }
    }
    let _ = set_style(
        &container,
        "display",
        if any_visible { "block" } else { "none" },
    );
}

fn hide_suggestions() {
    if let Some(container) = get_element_by_id("searchSuggestions") {
        let _ = set_style(&container, "display", "none");
    }
}

/// Header quick search: a term check, a short simulated lookup with a
/// loading class on the button, then a result-count toast.
fn init_quick_search() -> Result<(), JsValue> {
    let Ok(Some(input)) = query_selector(".search-input") else {
        return Ok(());
    };
    let Ok(input) = input.dyn_into::<web_sys::HtmlInputElement>() else {
        return Ok(());
    };

    // Suggestion lookups kick in once the term is long enough to be useful.
    {
        let field = input.clone();
        on_input(input.as_ref(), move |_| {
            let term = field.value().trim().to_lowercase();
            if term.len() >= SUGGESTION_MIN_CHARS {
                let hits = catalog::search(&term, 0.0, f64::MAX);
                log::debug!("🔍 [QUICK-SEARCH] '{}' suggests {} products", term, hits.len());
            }
        })?;
    }

    let run: Rc<dyn Fn()> = {
        let input = input.clone();
        Rc::new(move || {
            let term = input.value().trim().to_string();
            if term.is_empty() {
                let _ = notify_for(
                    "Please enter a search term",
                    NotificationKind::Warning,
                    NOTIFICATION_DISMISS_BRIEF_MS,
                );
                return;
            }

            let button = query_selector(".btn-search").ok().flatten();
            if let Some(ref btn) = button {
                let _ = add_class(btn, "loading");
            }
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(QUICK_SEARCH_LATENCY_MS).await;
                if let Some(ref btn) = button {
                    let _ = remove_class(btn, "loading");
                }
                let hits = catalog::search(&term, 0.0, f64::MAX).len();
                let _ = notify_for(
                    &format!("Found {} products for \"{}\"", hits, term),
                    NotificationKind::Info,
                    NOTIFICATION_DISMISS_BRIEF_MS,
                );
            });
        })
    };

    if let Ok(Some(button)) = query_selector(".btn-search") {
        let run = run.clone();
        on_click(&button, move |e| {
            e.prevent_default();
            run();
        })?;
    }
    {
        let run = run.clone();
        on_keydown(input.as_ref(), move |e: web_sys::KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                run();
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_range_parses_min_and_max() {
        assert_eq!(parse_tag_range("10-25"), Some((10.0, 25.0)));
        assert_eq!(parse_tag_range(" 0 - 10 "), Some((0.0, 10.0)));
    }

    #[test]
    fn tag_range_rejects_garbage_and_inverted_bounds() {
        assert_eq!(parse_tag_range("cheap"), None);
        assert_eq!(parse_tag_range("10"), None);
        assert_eq!(parse_tag_range("25-10"), None);
        assert_eq!(parse_tag_range("a-b"), None);
    }

    #[test]
    fn prices_format_without_trailing_zeros() {
        assert_eq!(format_price(10.0), "10");
        assert_eq!(format_price(12.5), "12.5");
    }
}
