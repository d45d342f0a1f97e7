use super::config::FxParams;
use super::constants::*;
use super::error::FxResult;
use super::parallax::ParallaxCamera;
use super::particles::ParticlePool;
use super::pointer::PointerState;
use super::ribbons::{idle_orbit, RibbonPool};
use super::surface::{DrawSurface, Rgba, Viewport};
use glam::Vec2;
use rand::prelude::*;

/// User-togglable scene features.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    Trails,
    Particles,
    Parallax,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Trails, Feature::Particles, Feature::Parallax];

    /// Button label for the given state.
    pub fn label(self, on: bool) -> &'static str {
        match (self, on) {
            (Feature::Trails, true) => "Qi Trails: On",
            (Feature::Trails, false) => "Qi Trails: Off",
            (Feature::Particles, true) => "Particles: On",
            (Feature::Particles, false) => "Particles: Off",
            (Feature::Parallax, true) => "Parallax: On",
            (Feature::Parallax, false) => "Parallax: Off",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    pub trails: bool,
    pub particles: bool,
    pub parallax: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            trails: true,
            particles: true,
            parallax: true,
        }
    }
}

impl FeatureFlags {
    /// Reduced motion starts with trails and particles off; parallax is kept.
    pub fn for_reduced_motion(reduced_motion: bool) -> Self {
        Self {
            trails: !reduced_motion,
            particles: !reduced_motion,
            parallax: true,
        }
    }

    #[inline]
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::Trails => self.trails,
            Feature::Particles => self.particles,
            Feature::Parallax => self.parallax,
        }
    }

    #[inline]
    pub fn set(&mut self, feature: Feature, on: bool) {
        match feature {
            Feature::Trails => self.trails = on,
            Feature::Particles => self.particles = on,
            Feature::Parallax => self.parallax = on,
        }
    }
}

/// The single owned effects context.
///
/// Every callback (frame, resize, input, toggles) mutates the scene through
/// `&mut self`; each field has one writer:
/// - `viewport`: resize
/// - `pointer`: input
/// - `flags`, `frozen`: toggles
/// - `camera`, pools, tick counter: `tick`
pub struct Scene {
    viewport: Viewport,
    pointer: PointerState,
    flags: FeatureFlags,
    frozen: bool,
    camera: ParallaxCamera,
    particles: ParticlePool,
    ribbons: RibbonPool,
    params: FxParams,
    rng: StdRng,
    tick: u64,
}

impl Scene {
    pub fn new(params: FxParams, seed: u64, reduced_motion: bool) -> Self {
        Self {
            viewport: Viewport::default(),
            pointer: PointerState::default(),
            flags: FeatureFlags::for_reduced_motion(reduced_motion),
            frozen: false,
            camera: ParallaxCamera::default(),
            particles: ParticlePool::with_capacity(params.max_particles),
            ribbons: RibbonPool::with_capacity(params.max_ribbons),
            params,
            rng: StdRng::seed_from_u64(seed),
            tick: 0,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn flags(&self) -> FeatureFlags {
        self.flags
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    #[inline]
    pub fn camera_offset(&self) -> Vec2 {
        self.camera.offset
    }

    #[inline]
    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    #[inline]
    pub fn ribbons(&self) -> &RibbonPool {
        &self.ribbons
    }

    #[inline]
    pub fn params(&self) -> &FxParams {
        &self.params
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Adopt a new surface size. Live entities keep their logical coordinates.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!(
                "[resize] logical={}x{} dpr={:.2} backing={}x{}",
                viewport.width,
                viewport.height,
                viewport.scale,
                viewport.backing_width(),
                viewport.backing_height()
            );
        }
        self.viewport = viewport;
    }

    /// Pointer movement at surface-local logical coordinates.
    ///
    /// Updates the pointer and, with trails on, emits one ribbon at the raw
    /// coordinates unless the ribbon pool is full. Returns false when the event
    /// was ignored.
    pub fn pointer_moved(&mut self, local: Vec2) -> bool {
        if self.pointer.move_to(local, &self.viewport).is_none() {
            return false;
        }
        if self.flags.trails {
            let power = if self.pointer.down {
                POWER_POINTER_DOWN
            } else {
                POWER_POINTER_UP
            };
            self.ribbons.emit(&mut self.rng, local, power);
        }
        true
    }

    #[inline]
    pub fn pointer_pressed(&mut self) {
        self.pointer.press();
    }

    #[inline]
    pub fn pointer_released(&mut self) {
        self.pointer.release();
    }

    /// Flip a feature and return its new state.
    pub fn toggle(&mut self, feature: Feature) -> bool {
        let on = !self.flags.get(feature);
        self.set_feature(feature, on);
        on
    }

    pub fn set_feature(&mut self, feature: Feature, on: bool) {
        self.flags.set(feature, on);
        log::info!("[toggle] {:?} -> {}", feature, if on { "on" } else { "off" });
    }

    /// Flip the figure freeze. The scene itself keeps animating.
    pub fn toggle_freeze(&mut self) -> bool {
        self.frozen = !self.frozen;
        log::info!("[freeze] {}", self.frozen);
        self.frozen
    }

    /// One frame: parallax, fade, ribbons, particles, in that order.
    ///
    /// The simulation always advances; a failed draw call only costs the rest
    /// of that pool's drawing for this frame and is reported afterwards.
    pub fn tick<S: DrawSurface>(&mut self, surface: &mut S) -> FxResult<()> {
        self.tick += 1;
        let t = self.tick;
        let viewport = self.viewport;

        self.camera.step(&self.pointer, self.flags.parallax);

        let faded = surface.fill_rect(viewport.size(), Rgba::new(BACKGROUND_RGB, FADE_ALPHA));

        if self.flags.trails
            && !viewport.is_empty()
            && self.rng.gen::<f32>() < self.params.idle_ribbon_chance
        {
            let origin = idle_orbit(t, viewport.size());
            self.ribbons.emit(&mut self.rng, origin, POWER_IDLE);
        }
        self.ribbons.step(&mut self.rng, t);
        let ribbons = self.ribbons.draw(surface);

        if self.flags.particles && !viewport.is_empty() {
            self.particles.maybe_spawn(
                &mut self.rng,
                &viewport,
                self.params.particle_spawn_chance,
                self.params.particle_batch,
            );
        }
        self.particles.step(t, &viewport);
        let particles = self.particles.draw(surface);

        faded.and(ribbons).and(particles)
    }
}
