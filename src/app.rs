use crate::dom;
use crate::fx::keymap::{action_for_key, KeyAction};
use crate::fx::{EffectScope, HandleKey, Release, Section, Theme, ThemeChange, VoiceOutcome};
use crate::overlay;
use crate::schedule::{self, WebHandle};
use crate::speech::Recognizer;
use crate::state::FxState;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Host page callbacks.
pub struct HostCallbacks {
    pub navigate: js_sys::Function,
    pub on_theme: Option<js_sys::Function>,
}

impl HostCallbacks {
    pub fn navigate(&self, section: Section) {
        log::info!("[nav] -> {}", section);
        if let Err(e) = self
            .navigate
            .call1(&JsValue::NULL, &JsValue::from_str(section.id()))
        {
            log::error!("[nav] navigate callback failed: {:?}", e);
        }
    }

    pub fn theme_changed(&self, theme: Theme) {
        if let Some(f) = &self.on_theme {
            if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from_str(theme.name())) {
                log::error!("[theme] listener failed: {:?}", e);
            }
        }
    }
}

#[derive(Default)]
struct Scopes {
    /// Listeners, frame loop, theme poll, override expiry.
    page: EffectScope<WebHandle>,
    /// Work that only exists while effects are active.
    effects: EffectScope<WebHandle>,
}

pub struct App {
    pub state: RefCell<FxState>,
    pub callbacks: HostCallbacks,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    scopes: RefCell<Scopes>,
    recognizer: RefCell<Option<Recognizer>>,
    override_key: Cell<Option<HandleKey>>,
    running: Cell<bool>,
}

impl App {
    pub fn new(
        state: FxState,
        callbacks: HostCallbacks,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
    ) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(state),
            callbacks,
            document,
            canvas,
            scopes: RefCell::new(Scopes::default()),
            recognizer: RefCell::new(None),
            override_key: Cell::new(None),
            running: Cell::new(true),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn acquire_page(&self, handle: WebHandle) -> HandleKey {
        self.scopes.borrow_mut().page.acquire(handle)
    }

    /// Swap the frame-loop handle; the previous request already fired.
    pub fn renew_page(&self, key: Option<HandleKey>, handle: WebHandle) -> HandleKey {
        let mut scopes = self.scopes.borrow_mut();
        if let Some(k) = key {
            _ = scopes.page.forget(k);
        }
        scopes.page.acquire(handle)
    }

    pub fn set_recognizer(&self, recognizer: Recognizer) {
        *self.recognizer.borrow_mut() = Some(recognizer);
    }

    // ---------------- Theme ----------------

    fn publish_theme(&self, change: Option<ThemeChange>) {
        let (theme, automatic) = {
            let st = self.state.borrow();
            (st.theme.active(), st.theme.is_automatic())
        };
        overlay::show_theme(&self.document, theme, automatic);
        if let Some(c) = change {
            log::info!("[theme] {} -> {}", c.from, c.to);
            self.callbacks.theme_changed(c.to);
        }
    }

    pub fn select_theme(self: &Rc<Self>, theme: Theme) {
        if !self.running.get() {
            return;
        }
        let (change, timeout) = {
            let mut st = self.state.borrow_mut();
            let now = st.now();
            let change = st.theme.select(theme, now);
            (change, st.theme.override_timeout())
        };
        self.schedule_override_expiry(timeout);
        self.publish_theme(change);
    }

    pub fn resume_auto_theme(&self) {
        if !self.running.get() {
            return;
        }
        if let Some(k) = self.override_key.take() {
            self.scopes.borrow_mut().page.release(k);
        }
        let change = self.state.borrow_mut().theme.resume_auto(dom::local_hour());
        self.publish_theme(change);
    }

    pub fn poll_theme(&self) {
        if !self.running.get() {
            return;
        }
        let change = {
            let mut st = self.state.borrow_mut();
            let now = st.now();
            st.theme.poll(now, dom::local_hour())
        };
        if change.is_some() || self.state.borrow().theme.is_automatic() {
            self.publish_theme(change);
        }
    }

    fn expire_override(&self) {
        if let Some(k) = self.override_key.take() {
            // Fired on its own; nothing to cancel.
            _ = self.scopes.borrow_mut().page.forget(k);
        }
        let change = {
            let mut st = self.state.borrow_mut();
            let now = st.now();
            st.theme.expire_override(now, dom::local_hour())
        };
        self.publish_theme(change);
    }

    fn schedule_override_expiry(self: &Rc<Self>, timeout: Duration) {
        let weak = Rc::downgrade(self);
        let handle = schedule::set_timeout(timeout.as_millis() as u64, move || {
            if let Some(app) = weak.upgrade() {
                app.expire_override();
            }
        });
        match handle {
            Ok(h) => {
                let key = self
                    .scopes
                    .borrow_mut()
                    .page
                    .replace(self.override_key.get(), h);
                self.override_key.set(Some(key));
            }
            Err(e) => log::warn!("[theme] no expiry timer, relying on poll: {}", e),
        }
    }

    // ---------------- Effects ----------------

    pub fn set_effects_active(self: &Rc<Self>, active: bool) {
        if !self.running.get() {
            return;
        }
        if !self.state.borrow_mut().set_effects_active(active) {
            return;
        }
        if active {
            let interval = self.state.borrow().config.ambient_interval();
            let weak = Rc::downgrade(self);
            match schedule::set_interval(interval.as_millis() as u64, move || {
                if let Some(app) = weak.upgrade() {
                    app.spawn_ambient();
                }
            }) {
                Ok(h) => {
                    self.scopes.borrow_mut().effects.acquire(h);
                }
                Err(e) => log::error!("[fx] ambient timer: {}", e),
            }
        } else {
            let n = self.scopes.borrow_mut().effects.release_all();
            log::info!("[fx] effects off, released {} handles", n);
        }
    }

    fn spawn_ambient(&self) {
        self.state.borrow_mut().spawn_ambient(dom::local_hour());
    }

    // ---------------- Input ----------------

    pub fn on_pointer_move(&self, pos: Vec2) {
        self.state.borrow_mut().pointer_moved(pos, dom::local_hour());
    }

    pub fn on_click(&self, pos: Vec2) {
        let target = self.state.borrow_mut().click(pos, dom::local_hour());
        // Callback runs with no borrow held; the host may call back into us.
        if let Some(section) = target {
            self.callbacks.navigate(section);
        }
    }

    pub fn on_key(self: &Rc<Self>, key: &str) {
        match action_for_key(key) {
            Some(KeyAction::SelectTheme(theme)) => self.select_theme(theme),
            Some(KeyAction::ResumeAutoTheme) => self.resume_auto_theme(),
            Some(KeyAction::ToggleEffects) => {
                let active = self.state.borrow().effects_active;
                self.set_effects_active(!active);
            }
            Some(KeyAction::ToggleVoice) => {
                self.toggle_voice();
            }
            None => {}
        }
    }

    pub fn on_resize(&self) {
        dom::sync_canvas_backing_size(&self.canvas);
        self.state
            .borrow_mut()
            .resize(dom::canvas_css_size(&self.canvas));
    }

    // ---------------- Voice ----------------

    /// Returns whether the panel is listening afterwards.
    pub fn toggle_voice(&self) -> bool {
        if !self.running.get() {
            return false;
        }
        let listening = self.state.borrow_mut().voice.toggle();
        if let Some(rec) = self.recognizer.borrow().as_ref() {
            if listening {
                rec.start();
            } else {
                rec.stop();
            }
        }
        overlay::set_voice_listening(&self.document, listening);
        listening
    }

    pub fn on_voice_result(&self, transcript: &str, is_final: bool) {
        let outcome = self.state.borrow_mut().voice.on_result(transcript, is_final);
        match outcome {
            VoiceOutcome::Interim(text) | VoiceOutcome::FreeText(text) => {
                overlay::show_transcript(&self.document, &text);
            }
            VoiceOutcome::Navigate(section) => {
                overlay::show_transcript(&self.document, section.label());
                self.callbacks.navigate(section);
            }
        }
    }

    pub fn on_voice_end(&self) {
        self.state.borrow_mut().voice.on_end();
        overlay::set_voice_listening(&self.document, false);
    }

    // ---------------- Teardown ----------------

    /// Release every handle and drop every effect entity. Idempotent.
    pub fn unmount(&self) {
        if !self.running.replace(false) {
            return;
        }
        let released = {
            let mut scopes = self.scopes.borrow_mut();
            scopes.effects.close() + scopes.page.close()
        };
        self.override_key.set(None);
        if let Some(rec) = self.recognizer.borrow_mut().take() {
            rec.release();
        }
        self.state.borrow_mut().clear();
        log::info!("[fx] unmounted, released {} handles", released);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}
