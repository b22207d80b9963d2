//! Visual effects core for a romantic single-page site.
//!
//! `fx`, `config` and `state` are plain Rust and build on any target; the
//! browser front end (canvas drawing, timers, listeners, speech) is `wasm32`
//! only.

pub mod config;
pub mod fx;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod schedule;
#[cfg(target_arch = "wasm32")]
mod speech;

#[cfg(target_arch = "wasm32")]
pub use web_api::*;

#[cfg(target_arch = "wasm32")]
mod web_api {
    use crate::app::{App, HostCallbacks};
    use crate::frame::{self, FrameContext, FrameLoop};
    use crate::fx::Theme;
    use crate::schedule;
    use crate::speech::{self, Recognizer};
    use crate::state::FxState;
    use crate::{dom, events, overlay};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("lovefx loaded");
        Ok(())
    }

    /// Handle returned to the host page by [`mount`].
    #[wasm_bindgen]
    pub struct FxHandle {
        app: Rc<App>,
        frame_loop: FrameLoop,
    }

    #[wasm_bindgen]
    impl FxHandle {
        /// Manually select "morning", "evening" or "night".
        pub fn set_theme(&self, name: &str) -> Result<(), JsValue> {
            let theme: Theme = name.parse().map_err(|e| JsValue::from_str(&format!("{e}")))?;
            self.app.select_theme(theme);
            Ok(())
        }

        pub fn resume_auto_theme(&self) {
            self.app.resume_auto_theme();
        }

        pub fn active_theme(&self) -> String {
            self.app.state.borrow().theme.active().name().to_string()
        }

        pub fn set_effects_active(&self, active: bool) {
            self.app.set_effects_active(active);
        }

        pub fn effects_active(&self) -> bool {
            self.app.state.borrow().effects_active
        }

        pub fn voice_supported(&self) -> bool {
            self.app.state.borrow().voice.is_supported()
        }

        /// Returns whether voice listening is on afterwards.
        pub fn toggle_voice(&self) -> bool {
            self.app.toggle_voice()
        }

        /// Release every listener, timer and frame request. Idempotent.
        pub fn unmount(&self) {
            self.app.unmount();
            self.frame_loop.stop();
        }
    }

    impl Drop for FxHandle {
        fn drop(&mut self) {
            self.unmount();
        }
    }

    /// Mount the effects on `#canvas_id`.
    ///
    /// `navigate(sectionId)` receives voice and menu commands; `on_theme(name)`
    /// is told about every theme change.
    #[wasm_bindgen]
    pub fn mount(
        canvas_id: &str,
        navigate: js_sys::Function,
        on_theme: Option<js_sys::Function>,
    ) -> Result<FxHandle, JsValue> {
        mount_inner(canvas_id, navigate, on_theme).map_err(|e| {
            log::error!("mount error: {:?}", e);
            JsValue::from_str(&format!("{e:#}"))
        })
    }

    fn mount_inner(
        canvas_id: &str,
        navigate: js_sys::Function,
        on_theme: Option<js_sys::Function>,
    ) -> anyhow::Result<FxHandle> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        dom::sync_canvas_backing_size(&canvas);

        let config = dom::read_config(&document);
        let ctor = speech::recognizer_constructor();
        let hour = dom::local_hour();
        let state = FxState::new(
            config.clone(),
            dom::canvas_css_size(&canvas),
            hour,
            ctor.is_some(),
        );
        log::info!(
            "[fx] mount theme={} voice={} cap={}",
            state.theme.active(),
            ctor.is_some(),
            config.pool_cap
        );

        let app = App::new(
            state,
            HostCallbacks { navigate, on_theme },
            document.clone(),
            canvas.clone(),
        );

        events::wire_pointer_handlers(&app)?;
        events::wire_global_keydown(&app)?;

        // Voice
        overlay::set_voice_supported(&document, ctor.is_some());
        if let Some(ctor) = ctor {
            let on_result = Rc::downgrade(&app);
            let on_end = Rc::downgrade(&app);
            match Recognizer::new(
                &ctor,
                move |text, is_final| {
                    if let Some(app) = on_result.upgrade() {
                        app.on_voice_result(&text, is_final);
                    }
                },
                move || {
                    if let Some(app) = on_end.upgrade() {
                        app.on_voice_end();
                    }
                },
            ) {
                Ok(rec) => {
                    app.set_recognizer(rec);
                    events::wire_voice_toggle(&app)?;
                }
                Err(e) => {
                    log::warn!("[voice] unavailable: {}", e);
                    app.state.borrow_mut().voice = crate::fx::VoicePanel::new(false);
                    overlay::set_voice_supported(&document, false);
                }
            }
        }

        // Theme poll
        let weak = Rc::downgrade(&app);
        let poll = schedule::set_interval(config.theme_poll_interval().as_millis() as u64, move || {
            if let Some(app) = weak.upgrade() {
                app.poll_theme();
            }
        })?;
        app.acquire_page(poll);
        app.poll_theme();

        if config.effects_active {
            app.set_effects_active(true);
        }

        let frame_loop = frame::start_loop(&app, FrameContext::new(&canvas));
        Ok(FxHandle { app, frame_loop })
    }
}
