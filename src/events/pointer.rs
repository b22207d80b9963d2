use crate::app::App;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer move/click and resize on the window; handles go to the page scope.
pub fn wire_pointer_handlers(app: &Rc<App>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let target: &web::EventTarget = window.as_ref();

    let weak = Rc::downgrade(app);
    let handle = dom::listen(target, "pointermove", move |ev: web::Event| {
        let (Some(app), Some(ev)) = (weak.upgrade(), ev.dyn_ref::<web::MouseEvent>()) else {
            return;
        };
        let pos = dom::event_canvas_pos(ev, &app.canvas);
        if pos.is_finite() {
            app.on_pointer_move(pos);
        }
    })?;
    app.acquire_page(handle);

    let weak = Rc::downgrade(app);
    let handle = dom::listen(target, "click", move |ev: web::Event| {
        let (Some(app), Some(ev)) = (weak.upgrade(), ev.dyn_ref::<web::MouseEvent>()) else {
            return;
        };
        let pos = dom::event_canvas_pos(ev, &app.canvas);
        if pos.is_finite() {
            app.on_click(pos);
        }
    })?;
    app.acquire_page(handle);

    let weak = Rc::downgrade(app);
    let handle = dom::listen(target, "resize", move |_ev: web::Event| {
        if let Some(app) = weak.upgrade() {
            app.on_resize();
        }
    })?;
    app.acquire_page(handle);

    Ok(())
}
