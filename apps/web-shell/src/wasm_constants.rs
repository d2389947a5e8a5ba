pub(crate) const AUTH_BUTTON_SELECTOR: &str = ".auth-button";
