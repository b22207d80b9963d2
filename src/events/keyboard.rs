use crate::app::App;
use crate::constants::VOICE_TOGGLE_ID;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn is_typing_target(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| {
            let tag = el.tag_name();
            tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea")
        })
        .unwrap_or(false)
}

// Theme/effects/voice shortcuts; ignored while typing into a form field.
pub fn wire_global_keydown(app: &Rc<App>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let weak = Rc::downgrade(app);
    let handle = dom::listen(window.as_ref(), "keydown", move |ev: web::Event| {
        if is_typing_target(&ev) {
            return;
        }
        let (Some(app), Some(kev)) = (weak.upgrade(), ev.dyn_ref::<web::KeyboardEvent>()) else {
            return;
        };
        if kev.ctrl_key() || kev.meta_key() || kev.alt_key() {
            return;
        }
        app.on_key(&kev.key());
    })?;
    app.acquire_page(handle);
    Ok(())
}

/// Click on the voice toggle button, when the page has one.
pub fn wire_voice_toggle(app: &Rc<App>) -> anyhow::Result<()> {
    let Some(el) = app.document.get_element_by_id(VOICE_TOGGLE_ID) else {
        return Ok(());
    };
    let weak = Rc::downgrade(app);
    let handle = dom::listen(el.as_ref(), "click", move |ev: web::Event| {
        // Keep the window click handler from treating this as a heart burst.
        ev.stop_propagation();
        if let Some(app) = weak.upgrade() {
            app.toggle_voice();
        }
    })?;
    app.acquire_page(handle);
    Ok(())
}
