#![allow(clippy::needless_pass_by_value)]

#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use gloo_net::http::Request;
    use mentorlink_client_core::auth::{
        LoginState, LoginStateError, LoginStateTransport, authenticate_request_path,
        decode_login_state,
    };
    use mentorlink_client_core::questionnaire::{
        ETHNICITY_LABEL, FORM_ID, OTHER_CHECKBOX_ID, aggregate_checked_groups,
        apply_checklist_other, apply_other_selection,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{HtmlElement, HtmlInputElement};

    use crate::wasm_constants::*;

    mod dom;
    mod form;
    mod network;

    use dom::*;
    use form::*;
    use network::*;

    thread_local! {
        static AUTH_BUTTON_CLICK_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = RefCell::new(Vec::new());
        static FORM_SUBMIT_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static OTHER_CHECKBOX_CHANGE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(error) = install_questionnaire_handlers() {
            console_warn(&format!("questionnaire wiring skipped: {error}"));
        }
        load_auth_button();
    }

    /// Refreshes every `auth-button` element from the `/authenticate`
    /// endpoint. Failures are logged and leave the buttons untouched.
    #[wasm_bindgen]
    pub fn load_auth_button() {
        spawn_local(async {
            if let Err(error) = refresh_auth_buttons().await {
                console_error(&format!("auth button refresh failed: {error}"));
            }
        });
    }

    /// Change-handler export for single-choice controls: shows the "Other"
    /// free-text input for `label` when `value` is "other", hides it
    /// otherwise. Callable from inline page handlers.
    #[wasm_bindgen]
    pub fn check_for_other(value: String, label: String) {
        match page_dom() {
            Ok(mut page) => apply_other_selection(&mut page, &value, &label),
            Err(error) => console_warn(&error),
        }
    }

    /// Checklist variant of [`check_for_other`], keyed off the
    /// `ethnicity-OTHER` checkbox.
    #[wasm_bindgen]
    pub fn checklist_check_for_other(label: String) {
        match page_dom() {
            Ok(mut page) => apply_checklist_other(&mut page, &label),
            Err(error) => console_warn(&error),
        }
    }

    async fn refresh_auth_buttons() -> Result<(), String> {
        let encoded_pathname = encoded_current_pathname()?;
        let login_state = GlooTransport
            .fetch_login_state(&encoded_pathname)
            .await
            .map_err(|error| error.to_string())?;

        if let Some(target) = login_state.forced_redirect() {
            return navigate_to(target);
        }

        render_auth_buttons(&login_state)
    }
}
