use super::*;

pub(super) fn window_document() -> Result<web_sys::Document, String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    window
        .document()
        .ok_or_else(|| "document is unavailable".to_string())
}

pub(super) fn encoded_current_pathname() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let pathname = window
        .location()
        .pathname()
        .map_err(|_| "browser pathname is unavailable".to_string())?;
    let encoded = js_sys::encode_uri_component(&pathname);
    Ok(encoded.as_string().unwrap_or(pathname))
}

pub(super) fn navigate_to(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    window
        .location()
        .set_href(url)
        .map_err(|_| format!("failed to navigate to {url}"))
}

/// Rewrites text and click behavior of every auth button. Assigning through
/// `onclick` replaces any handler an earlier response installed, so a later
/// response fully wins.
pub(super) fn render_auth_buttons(login_state: &LoginState) -> Result<(), String> {
    let document = window_document()?;
    let buttons = document
        .query_selector_all(AUTH_BUTTON_SELECTOR)
        .map_err(|_| "auth button query failed".to_string())?;

    let mut handlers = Vec::new();
    for index in 0..buttons.length() {
        let Some(node) = buttons.item(index) else {
            continue;
        };
        let Ok(button) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        button.set_inner_text(login_state.button_label());

        let target = login_state.toggle_login_url.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            if let Err(error) = navigate_to(&target) {
                console_error(&error);
            }
        }));
        button.set_onclick(Some(callback.as_ref().unchecked_ref()));
        handlers.push(callback);
    }

    // The previous generation of closures is dropped only after every button
    // already points at a fresh handler.
    AUTH_BUTTON_CLICK_HANDLERS.with(|slot| {
        *slot.borrow_mut() = handlers;
    });
    Ok(())
}

pub(super) fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

pub(super) fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
