pub mod constants;
pub mod context;
pub mod error;
pub mod keymap;
pub mod lifecycle;
pub mod nav;
pub mod particles;
pub mod scene;
pub mod section;
pub mod theme;
pub mod trail;
pub mod voice;

pub use context::{EffectContext, PointerState};
pub use error::FxError;
pub use lifecycle::{EffectScope, HandleKey, Release};
pub use nav::MagneticNav;
pub use particles::{Particle, ParticleEngine, ParticleKind};
pub use scene::{build_scene, DrawCmd};
pub use section::Section;
pub use theme::{theme_for_hour, Palette, Theme, ThemeChange, ThemeSelector};
pub use trail::CursorTrail;
pub use voice::{match_command, VoiceOutcome, VoicePanel};
