use crate::app::App;
use crate::dom;
use crate::fx::HandleKey;
use crate::render;
use crate::schedule::WebHandle;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owner of the self-rescheduling frame closure. The closure holds a clone of
/// this cell, so `stop` must run to break the cycle.
#[derive(Clone, Default)]
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        // Dropped after the current borrow ends.
        let closure = self.tick.borrow_mut().take();
        drop(closure);
    }
}

pub struct FrameContext {
    pub ctx2d: Option<web::CanvasRenderingContext2d>,
}

impl FrameContext {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Self {
        let ctx2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok());
        if ctx2d.is_none() {
            log::warn!("[fx] no 2d context; effect updates are skipped");
        }
        Self { ctx2d }
    }

    /// Update everything, then draw. Without a context the frame is skipped.
    pub fn frame(&mut self, app: &App) {
        let has_surface = self.ctx2d.is_some();
        let Some(cmds) = app
            .state
            .borrow_mut()
            .frame(dom::local_hour(), has_surface)
        else {
            return;
        };
        if let Some(ctx) = &self.ctx2d {
            let (w, h) = (app.canvas.width(), app.canvas.height());
            render::draw(ctx, w, h, dom::device_pixel_ratio(), &cmds);
        }
    }
}

pub fn start_loop(app: &Rc<App>, mut frame_ctx: FrameContext) -> FrameLoop {
    let frame_loop = FrameLoop::default();
    let tick_clone = frame_loop.tick.clone();
    let raf_key: Rc<Cell<Option<HandleKey>>> = Rc::new(Cell::new(None));
    let raf_key_tick = raf_key.clone();
    let weak = Rc::downgrade(app);
    *frame_loop.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(app) = weak.upgrade() else {
            return;
        };
        if !app.is_running() {
            return;
        }
        frame_ctx.frame(&app);
        if let Some(id) = request_frame(&tick_clone) {
            let key = app.renew_page(raf_key_tick.get(), WebHandle::AnimationFrame(id));
            raf_key_tick.set(Some(key));
        }
    }) as Box<dyn FnMut()>));

    if let Some(id) = request_frame(&frame_loop.tick) {
        raf_key.set(Some(app.acquire_page(WebHandle::AnimationFrame(id))));
    }
    frame_loop
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| log::error!("[fx] requestAnimationFrame: {:?}", e))
        .ok()
}
