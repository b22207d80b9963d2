use crate::constants::*;
use crate::fx::Theme;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Disable the voice toggle when recognition is unavailable.
pub fn set_voice_supported(document: &web::Document, supported: bool) {
    if let Some(el) = document.get_element_by_id(VOICE_TOGGLE_ID) {
        if let Some(btn) = el.dyn_ref::<web::HtmlButtonElement>() {
            btn.set_disabled(!supported);
        }
        let cl = el.class_list();
        if supported {
            _ = cl.remove_1(DISABLED_CLASS);
        } else {
            _ = cl.add_1(DISABLED_CLASS);
            _ = el.set_attribute("title", "Voice commands are not supported in this browser");
        }
    }
}

#[inline]
pub fn set_voice_listening(document: &web::Document, listening: bool) {
    if let Some(el) = document.get_element_by_id(VOICE_TOGGLE_ID) {
        _ = el.class_list().toggle_with_force(LISTENING_CLASS, listening);
        _ = el.set_attribute("aria-pressed", if listening { "true" } else { "false" });
    }
}

#[inline]
pub fn show_transcript(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(VOICE_TRANSCRIPT_ID) {
        el.set_text_content(Some(text));
    }
}

/// Reflect the active theme on `<body data-theme>` and the optional label.
pub fn show_theme(document: &web::Document, theme: Theme, automatic: bool) {
    if let Some(body) = document.body() {
        _ = body.set_attribute("data-theme", theme.name());
    }
    if let Some(el) = document.get_element_by_id(THEME_LABEL_ID) {
        let mode = if automatic { "auto" } else { "manual" };
        el.set_text_content(Some(&format!("{} ({})", theme.name(), mode)));
    }
}
