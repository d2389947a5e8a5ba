use super::*;

use mentorlink_client_core::questionnaire::{
    QuestionnaireDom, other_field_name, other_region_id,
};

pub(super) fn install_questionnaire_handlers() -> Result<(), String> {
    let document = window_document()?;

    // The questionnaire form only exists on its own page; elsewhere this
    // script still runs for the auth button.
    let Some(form) = document.get_element_by_id(FORM_ID) else {
        return Ok(());
    };

    FORM_SUBMIT_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            match page_dom() {
                Ok(mut page) => aggregate_checked_groups(&mut page),
                Err(error) => console_error(&error),
            }
        }));
        let _ = form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    if let Some(other_checkbox) = document.get_element_by_id(OTHER_CHECKBOX_ID) {
        OTHER_CHECKBOX_CHANGE_HANDLER.with(|slot| {
            if slot.borrow().is_some() {
                return;
            }
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                match page_dom() {
                    Ok(mut page) => apply_checklist_other(&mut page, ETHNICITY_LABEL),
                    Err(error) => console_error(&error),
                }
            }));
            let _ = other_checkbox
                .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
            *slot.borrow_mut() = Some(callback);
        });
    }

    Ok(())
}

pub(super) fn page_dom() -> Result<WebPage, String> {
    Ok(WebPage {
        document: window_document()?,
    })
}

/// Live-page backing for [`QuestionnaireDom`]. Missing elements degrade to
/// logged no-ops instead of aborting the handler.
pub(super) struct WebPage {
    document: web_sys::Document,
}

impl QuestionnaireDom for WebPage {
    fn checked_values(&self, selector: &str) -> Vec<String> {
        let checked_selector = format!("{selector}:checked");
        let Ok(nodes) = self.document.query_selector_all(&checked_selector) else {
            return Vec::new();
        };
        let mut values = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
                values.push(input.value());
            }
        }
        values
    }

    fn set_field_value(&mut self, field_id: &str, value: &str) {
        let Some(element) = self.document.get_element_by_id(field_id) else {
            console_warn(&format!("aggregate field #{field_id} is missing"));
            return;
        };
        match element.dyn_into::<HtmlInputElement>() {
            Ok(field) => field.set_value(value),
            Err(_) => console_warn(&format!("aggregate field #{field_id} is not an input")),
        }
    }

    fn is_checked(&self, element_id: &str) -> bool {
        self.document
            .get_element_by_id(element_id)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .is_some_and(|input| input.checked())
    }

    fn show_other_input(&mut self, label: &str) {
        if let Err(error) = self.render_other_input(label) {
            console_error(&error);
        }
    }

    fn clear_other_region(&mut self, label: &str) {
        let region_id = other_region_id(label);
        if let Some(region) = self.document.get_element_by_id(&region_id) {
            region.set_text_content(None);
        }
    }
}

impl WebPage {
    // The input is built from real nodes rather than interpolated markup, so
    // a label can never smuggle markup into the page.
    fn render_other_input(&self, label: &str) -> Result<(), String> {
        let region_id = other_region_id(label);
        let region = self
            .document
            .get_element_by_id(&region_id)
            .ok_or_else(|| format!("other region #{region_id} is missing"))?;

        region.set_text_content(None);

        let prompt = self.document.create_text_node("Other: ");
        region
            .append_child(&prompt)
            .map_err(|_| "failed to append other prompt".to_string())?;

        let input = self
            .document
            .create_element("input")
            .map_err(|_| "failed to create other input".to_string())?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| "other input is not HtmlInputElement".to_string())?;
        input.set_type("text");
        let field_name = other_field_name(label);
        input.set_name(&field_name);
        input.set_id(&field_name);
        region
            .append_child(&input)
            .map_err(|_| "failed to append other input".to_string())?;
        Ok(())
    }
}
