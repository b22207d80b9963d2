use crate::config::FxConfig;
use crate::constants::CONFIG_ELEMENT_ID;
use crate::schedule::WebHandle;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` for `kind` on `target`; the returned handle removes it.
pub fn listen(
    target: &web::EventTarget,
    kind: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<WebHandle> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
    Ok(WebHandle::Listener {
        target: target.clone(),
        kind,
        closure,
    })
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        if canvas.width() != w_px.max(1) || canvas.height() != h_px.max(1) {
            canvas.set_width(w_px.max(1));
            canvas.set_height(h_px.max(1));
        }
    }
}

/// Canvas size in CSS pixels (the coordinate space of pointer events).
#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
pub fn event_canvas_pos(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn local_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

/// Read the optional JSON config block. Invalid config is logged and ignored.
pub fn read_config(document: &web::Document) -> FxConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return FxConfig::default();
    };
    match FxConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[fx] ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            FxConfig::default()
        }
    }
}
