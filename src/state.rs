//! Simulation state behind the page front end.
//!
//! The browser glue owns one `FxState` and forwards pointer, click, timer and
//! frame callbacks to it. Nothing here touches the DOM.

use crate::config::FxConfig;
use crate::fx::{
    build_scene, CursorTrail, DrawCmd, EffectContext, MagneticNav, ParticleEngine, PointerState,
    Section, ThemeSelector, VoicePanel,
};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Gap kept between the menu anchor and the viewport edge.
pub const NAV_EDGE_MARGIN: f32 = 60.0;

/// Pointer is written only by the pointer handlers, theme only through the
/// selector.
pub struct FxState {
    pub config: FxConfig,
    pub pointer: PointerState,
    pub viewport: Vec2,
    pub theme: ThemeSelector,
    pub particles: ParticleEngine,
    pub trail: CursorTrail,
    pub nav: MagneticNav,
    pub voice: VoicePanel,
    pub effects_active: bool,
    pub started: Instant,
}

impl FxState {
    pub fn new(config: FxConfig, viewport: Vec2, hour: u32, voice_supported: bool) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let theme = ThemeSelector::with_timeout(hour, config.override_timeout());
        let particles = ParticleEngine::new(config.particle_params(), seed);
        let trail = CursorTrail::new(config.trail_params(), seed.wrapping_add(1));
        let nav_home = (viewport - Vec2::splat(NAV_EDGE_MARGIN)).max(Vec2::ZERO);
        let nav = MagneticNav::new(nav_home, config.nav_params());
        Self {
            pointer: PointerState::default(),
            viewport,
            theme,
            particles,
            trail,
            nav,
            voice: VoicePanel::new(voice_supported),
            effects_active: false,
            started: Instant::now(),
            config,
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn context(&self, hour: u32) -> EffectContext {
        EffectContext::new(
            self.now(),
            hour,
            self.theme.active(),
            self.pointer.position,
            self.viewport,
        )
    }

    /// Returns false when effects were already in the requested state.
    pub fn set_effects_active(&mut self, active: bool) -> bool {
        if self.effects_active == active {
            return false;
        }
        self.effects_active = active;
        if active {
            // Before the first pointer event there is nowhere to put markers.
            if self.pointer.seen {
                self.trail.activate(self.pointer.position);
            }
        } else {
            self.trail.deactivate();
            self.particles.clear();
        }
        true
    }

    fn place_trail(&mut self, at: Vec2) {
        if self.effects_active && !self.trail.is_active() {
            self.trail.activate(at);
        }
    }

    pub fn pointer_moved(&mut self, pos: Vec2, hour: u32) {
        self.pointer.moved_to(pos.x, pos.y);
        if !self.effects_active {
            return;
        }
        self.place_trail(pos);
        let ctx = self.context(hour);
        self.particles.on_pointer_move(&ctx);
        self.trail.on_pointer_move(&ctx);
    }

    /// A click on an open menu item yields its section; anything else bursts
    /// hearts when effects are on.
    pub fn click(&mut self, pos: Vec2, hour: u32) -> Option<Section> {
        if let Some(section) = self.nav.item_at(pos) {
            self.nav.collapse();
            return Some(section);
        }
        if self.effects_active {
            self.place_trail(pos);
            let ctx = self.context(hour);
            self.trail.on_click(pos, &ctx);
        }
        None
    }

    pub fn spawn_ambient(&mut self, hour: u32) -> bool {
        if !self.effects_active {
            return false;
        }
        let ctx = self.context(hour);
        self.particles.spawn_ambient(&ctx)
    }

    /// New viewport size; the menu anchor is pulled back on screen.
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.nav.clamp_into(viewport, NAV_EDGE_MARGIN);
    }

    /// Advance everything by one frame and produce the draw list.
    pub fn step_frame(&mut self, hour: u32) -> Vec<DrawCmd> {
        let ctx = self.context(hour);
        if self.effects_active {
            self.particles.tick();
            self.trail.update(&ctx);
        }
        if self.pointer.seen {
            self.nav.update(ctx.pointer);
        }
        build_scene(
            self.particles.particles(),
            &self.trail,
            &self.nav,
            &ctx.palette,
            ctx.now,
        )
    }

    /// One animation frame. Without a drawing surface the update is skipped.
    pub fn frame(&mut self, hour: u32, has_surface: bool) -> Option<Vec<DrawCmd>> {
        if !has_surface {
            return None;
        }
        Some(self.step_frame(hour))
    }

    /// Drop every effect entity.
    pub fn clear(&mut self) {
        self.trail.deactivate();
        self.particles.clear();
        self.nav.collapse();
        self.voice.on_end();
        self.effects_active = false;
    }
}
