//! Feature-detected wrapper over the browser's speech recognition.
//!
//! `web-sys` only exposes `SpeechRecognition` behind unstable APIs and
//! Chromium ships it prefixed, so the object is driven through `Reflect`.

use crate::constants::SPEECH_LANG;
use crate::fx::Release;
use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const CONSTRUCTOR_NAMES: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// Constructor for the platform recognizer, if any.
pub fn recognizer_constructor() -> Option<Function> {
    let window = web::window()?;
    CONSTRUCTOR_NAMES.iter().find_map(|name| {
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .filter(|v| v.is_function())
            .map(|v| v.unchecked_into::<Function>())
    })
}

pub struct Recognizer {
    inner: JsValue,
    _onresult: Closure<dyn FnMut(JsValue)>,
    _onend: Closure<dyn FnMut(JsValue)>,
}

impl Recognizer {
    /// `on_result(transcript, is_final)` runs once per new result;
    /// `on_end` when the session stops for any reason.
    pub fn new(
        ctor: &Function,
        mut on_result: impl FnMut(String, bool) + 'static,
        mut on_end: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let inner = Reflect::construct(ctor, &js_sys::Array::new())
            .map_err(|e| anyhow::anyhow!("construct recognizer: {:?}", e))?;
        set(&inner, "continuous", &JsValue::TRUE)?;
        set(&inner, "interimResults", &JsValue::TRUE)?;
        set(&inner, "lang", &JsValue::from_str(SPEECH_LANG))?;

        let onresult = Closure::wrap(Box::new(move |ev: JsValue| {
            for (text, is_final) in read_results(&ev) {
                on_result(text, is_final);
            }
        }) as Box<dyn FnMut(JsValue)>);
        let onend = Closure::wrap(Box::new(move |_ev: JsValue| on_end()) as Box<dyn FnMut(JsValue)>);

        set(&inner, "onresult", onresult.as_ref())?;
        set(&inner, "onend", onend.as_ref())?;
        set(&inner, "onerror", onend.as_ref())?;

        Ok(Self {
            inner,
            _onresult: onresult,
            _onend: onend,
        })
    }

    pub fn start(&self) {
        if let Err(e) = self.call("start") {
            log::warn!("[voice] start failed: {}", e);
        }
    }

    pub fn stop(&self) {
        if let Err(e) = self.call("stop") {
            log::warn!("[voice] stop failed: {}", e);
        }
    }

    fn call(&self, method: &str) -> anyhow::Result<()> {
        let f: Function = Reflect::get(&self.inner, &JsValue::from_str(method))
            .map_err(|e| anyhow::anyhow!("{}: {:?}", method, e))?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("{} is not a function", method))?;
        f.call0(&self.inner)
            .map_err(|e| anyhow::anyhow!("{}: {:?}", method, e))?;
        Ok(())
    }
}

impl Release for Recognizer {
    fn release(self) {
        for handler in ["onresult", "onend", "onerror"] {
            _ = Reflect::set(&self.inner, &JsValue::from_str(handler), &JsValue::NULL);
        }
        if let Err(e) = self.call("abort") {
            log::debug!("[voice] abort: {}", e);
        }
    }
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> anyhow::Result<()> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map_err(|e| anyhow::anyhow!("set {}: {:?}", key, e))?;
    Ok(())
}

/// New results in a `SpeechRecognitionEvent`, starting at `resultIndex`.
fn read_results(ev: &JsValue) -> Vec<(String, bool)> {
    let get = |obj: &JsValue, key: &str| Reflect::get(obj, &JsValue::from_str(key)).ok();
    let start = get(ev, "resultIndex")
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;
    let Some(results) = get(ev, "results") else {
        return Vec::new();
    };
    let len = get(&results, "length")
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;
    (start..len)
        .filter_map(|i| {
            let result = Reflect::get_u32(&results, i).ok()?;
            let is_final = get(&result, "isFinal")?.as_bool().unwrap_or(false);
            let alt = Reflect::get_u32(&result, 0).ok()?;
            let text = get(&alt, "transcript")?.as_string()?;
            Some((text, is_final))
        })
        .collect()
}
