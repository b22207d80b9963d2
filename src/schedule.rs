use crate::fx::Release;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser-side resources owned by an `EffectScope`.
pub enum WebHandle {
    AnimationFrame(i32),
    Interval {
        id: i32,
        _closure: Closure<dyn FnMut()>,
    },
    Timeout {
        id: i32,
        _closure: Closure<dyn FnMut()>,
    },
    Listener {
        target: web::EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(web::Event)>,
    },
}

impl Release for WebHandle {
    fn release(self) {
        let window = web::window();
        match self {
            WebHandle::AnimationFrame(id) => {
                if let Some(w) = window {
                    _ = w.cancel_animation_frame(id);
                }
            }
            WebHandle::Interval { id, .. } => {
                if let Some(w) = window {
                    w.clear_interval_with_handle(id);
                }
            }
            WebHandle::Timeout { id, .. } => {
                if let Some(w) = window {
                    w.clear_timeout_with_handle(id);
                }
            }
            WebHandle::Listener {
                target,
                kind,
                closure,
            } => {
                _ = target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            }
        }
    }
}

pub fn set_interval(
    period_ms: u64,
    callback: impl FnMut() + 'static,
) -> anyhow::Result<WebHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            clamp_ms(period_ms),
        )
        .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
    Ok(WebHandle::Interval {
        id,
        _closure: closure,
    })
}

pub fn set_timeout(delay_ms: u64, callback: impl FnMut() + 'static) -> anyhow::Result<WebHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            clamp_ms(delay_ms),
        )
        .map_err(|e| anyhow::anyhow!("setTimeout: {:?}", e))?;
    Ok(WebHandle::Timeout {
        id,
        _closure: closure,
    })
}

#[inline]
fn clamp_ms(ms: u64) -> i32 {
    ms.min(i32::MAX as u64) as i32
}
