use super::constants::*;
use super::context::EffectContext;
use super::theme::{Palette, Theme};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Heart,
    Star,
    Spark,
}

impl ParticleKind {
    pub fn glyph(self) -> &'static str {
        match self {
            ParticleKind::Heart => "\u{2665}",
            ParticleKind::Star => "\u{2726}",
            ParticleKind::Spark => "\u{2022}",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: [f32; 3],
    pub age: u32,
    pub max_life: u32,
    pub kind: ParticleKind,
}

impl Particle {
    #[inline]
    pub fn opacity(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        (1.0 - self.age as f32 / self.max_life as f32).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.max_life
    }

    /// One simulation step.
    #[inline]
    fn step(&mut self, gravity: f32) {
        self.position += self.velocity;
        self.velocity.y += gravity;
        self.age += 1;
    }
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub pool_cap: usize,
    pub gravity: f32,
    pub move_spawn_probability: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            pool_cap: PARTICLE_POOL_CAP,
            gravity: GRAVITY,
            move_spawn_probability: MOVE_SPAWN_PROBABILITY,
        }
    }
}

/// Pool of independent particles. No two particles interact.
pub struct ParticleEngine {
    pub params: ParticleParams,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleEngine {
    pub fn new(params: ParticleParams, seed: u64) -> Self {
        // The cap comes from page config; only reserve the default pool.
        let reserve = params.pool_cap.min(PARTICLE_POOL_CAP);
        Self {
            params,
            particles: Vec::with_capacity(reserve),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Add one particle at `position` unless the pool is full.
    /// Returns whether a particle was added.
    pub fn spawn(&mut self, position: Vec2, kind: ParticleKind, palette: &Palette) -> bool {
        if self.particles.len() >= self.params.pool_cap {
            return false;
        }
        let rng = &mut self.rng;
        let velocity = Vec2::new(
            rng.gen_range(-PARTICLE_SPEED_X..=PARTICLE_SPEED_X),
            -rng.gen_range(0.0..=PARTICLE_LIFT_Y),
        );
        let radius = rng.gen_range(PARTICLE_MIN_RADIUS..=PARTICLE_MAX_RADIUS);
        let max_life = rng.gen_range(PARTICLE_MIN_LIFE..=PARTICLE_MAX_LIFE);
        let color = palette.color(rng.gen_range(0..palette.colors.len()));
        self.particles.push(Particle {
            position,
            velocity,
            radius,
            color,
            age: 0,
            max_life,
            kind,
        });
        true
    }

    /// Advance every particle one step and retire the expired ones.
    pub fn tick(&mut self) {
        let gravity = self.params.gravity;
        for p in &mut self.particles {
            p.step(gravity);
        }
        self.particles.retain(|p| !p.is_expired());
    }

    /// Ambient spawn at a random viewport position.
    pub fn spawn_ambient(&mut self, ctx: &EffectContext) -> bool {
        let x = self.rng.gen_range(0.0..=ctx.viewport.x.max(1.0));
        let y = self.rng.gen_range(0.0..=ctx.viewport.y.max(1.0));
        let kind = self.choose_kind(ctx.theme, ctx.hour);
        self.spawn(Vec2::new(x, y), kind, &ctx.palette)
    }

    /// Pointer-move trigger: spawns at the pointer with fixed probability.
    pub fn on_pointer_move(&mut self, ctx: &EffectContext) -> bool {
        if self.rng.gen::<f32>() >= self.params.move_spawn_probability {
            return false;
        }
        let kind = self.choose_kind(ctx.theme, ctx.hour);
        self.spawn(ctx.pointer, kind, &ctx.palette)
    }

    pub fn choose_kind(&mut self, theme: Theme, hour: u32) -> ParticleKind {
        let roll = self.rng.gen::<f32>();
        choose_kind(roll, theme, hour)
    }
}

/// Kind selection from a uniform roll in [0, 1).
///
/// Both gates are checked: the active theme and the raw wall-clock hour.
/// They usually agree, but a manual theme override makes them diverge.
pub fn choose_kind(roll: f32, theme: Theme, hour: u32) -> ParticleKind {
    let evening_hour = (EVENING_START_HOUR..NIGHT_START_HOUR).contains(&hour);
    if theme == Theme::Evening && roll < HEART_CHANCE_EVENING_THEME {
        ParticleKind::Heart
    } else if evening_hour && roll < HEART_CHANCE_EVENING_HOUR {
        ParticleKind::Heart
    } else if theme == Theme::Night && roll < STAR_CHANCE_NIGHT {
        ParticleKind::Star
    } else if roll < STAR_CHANCE_DEFAULT {
        ParticleKind::Star
    } else {
        ParticleKind::Spark
    }
}
