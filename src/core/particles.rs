use super::constants::*;
use super::error::FxResult;
use super::surface::{DrawSurface, Hsla, Viewport};
use glam::Vec2;
use rand::Rng;

/// Point light rising from below the stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub base_alpha: f32,
    pub hue: f32,
    pub life: i32,
}

impl Particle {
    /// New particle in the band just below the visible bottom edge.
    pub fn spawn<R: Rng>(rng: &mut R, viewport: &Viewport) -> Self {
        Self {
            position: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                viewport.height + rng.gen::<f32>() * PARTICLE_SPAWN_DEPTH,
            ),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_DRIFT_SPAN,
                -PARTICLE_RISE_MIN - rng.gen::<f32>() * PARTICLE_RISE_SPAN,
            ),
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            base_alpha: PARTICLE_ALPHA_MIN + rng.gen::<f32>() * PARTICLE_ALPHA_SPAN,
            hue: random_hue(rng),
            life: PARTICLE_LIFE_MIN + rng.gen_range(0..PARTICLE_LIFE_SPAN),
        }
    }

    /// Opacity derived from remaining life; never stored.
    #[inline]
    pub fn alpha(&self) -> f32 {
        (self.base_alpha * (self.life as f32 / PARTICLE_FADE_LIFE)).clamp(0.0, 1.0)
    }

    /// One tick of motion with a position-keyed horizontal sway.
    pub fn step(&mut self, tick: u64) {
        let sway = (tick as f64 * PARTICLE_SWAY_TIME_RATE as f64
            + (self.position.x * PARTICLE_SWAY_SPACE_RATE) as f64)
            .sin() as f32
            * PARTICLE_SWAY_AMPLITUDE;
        self.position += self.velocity + Vec2::new(sway, 0.0);
        self.life -= 1;
    }

    pub fn is_out_of_bounds(&self, viewport: &Viewport) -> bool {
        let p = self.position;
        p.y < -PARTICLE_MARGIN_TOP
            || p.y > viewport.height + PARTICLE_MARGIN_BOTTOM
            || p.x < -PARTICLE_MARGIN_SIDE
            || p.x > viewport.width + PARTICLE_MARGIN_SIDE
    }

    #[inline]
    pub fn is_expired(&self, viewport: &Viewport) -> bool {
        self.life <= 0 || self.is_out_of_bounds(viewport)
    }

    /// Core disc followed by a wide, faint halo of the same hue.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S) -> FxResult<()> {
        let alpha = self.alpha();
        surface.fill_disc(
            self.position,
            self.radius,
            Hsla {
                hue: self.hue,
                saturation: SATURATION_PCT,
                lightness: PARTICLE_CORE_LIGHTNESS,
                alpha,
            },
        )?;
        surface.fill_disc(
            self.position,
            self.radius * PARTICLE_HALO_RADIUS_SCALE,
            Hsla {
                hue: self.hue,
                saturation: SATURATION_PCT,
                lightness: PARTICLE_HALO_LIGHTNESS,
                alpha: alpha * PARTICLE_HALO_ALPHA_SCALE,
            },
        )
    }
}

/// Capacity-checked particle collection.
#[derive(Clone, Debug)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    capacity: usize,
}

impl ParticlePool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity.min(MAX_PARTICLES)),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Add a particle if the ceiling allows it.
    pub fn push(&mut self, particle: Particle) -> bool {
        if self.particles.len() >= self.capacity {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Independent per-tick roll; on success spawn up to `batch` particles
    /// without exceeding the ceiling. Returns how many were added.
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        rng: &mut R,
        viewport: &Viewport,
        chance: f32,
        batch: usize,
    ) -> usize {
        if self.particles.len() >= self.capacity || rng.gen::<f32>() >= chance {
            return 0;
        }
        let n = batch.min(self.capacity - self.particles.len());
        for _ in 0..n {
            self.particles.push(Particle::spawn(rng, viewport));
        }
        n
    }

    /// Advance every particle and drop the expired ones. Returns the number removed.
    pub fn step(&mut self, tick: u64, viewport: &Viewport) -> usize {
        let before = self.particles.len();
        for i in (0..self.particles.len()).rev() {
            self.particles[i].step(tick);
            if self.particles[i].is_expired(viewport) {
                self.particles.swap_remove(i);
            }
        }
        before - self.particles.len()
    }

    pub fn draw<S: DrawSurface>(&self, surface: &mut S) -> FxResult<()> {
        for p in &self.particles {
            p.draw(surface)?;
        }
        Ok(())
    }
}

#[inline]
pub fn random_hue<R: Rng>(rng: &mut R) -> f32 {
    HUE_MIN + rng.gen::<f32>() * HUE_SPAN
}
