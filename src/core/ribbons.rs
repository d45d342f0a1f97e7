use super::constants::*;
use super::error::FxResult;
use super::particles::random_hue;
use super::surface::{DrawSurface, Hsla};
use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;

/// Flowing polyline trail. Points form a sliding window of at most
/// `RIBBON_MAX_POINTS`; the hue is fixed for the ribbon's whole life.
#[derive(Clone, Debug, PartialEq)]
pub struct Ribbon {
    points: VecDeque<Vec2>,
    pub hue: f32,
    pub power: f32,
    pub base_alpha: f32,
    pub width: f32,
    pub life: i32,
}

impl Ribbon {
    pub fn spawn<R: Rng>(rng: &mut R, origin: Vec2, power: f32) -> Self {
        let mut points = VecDeque::with_capacity(RIBBON_MAX_POINTS + 1);
        points.push_back(origin);
        Self {
            points,
            hue: random_hue(rng),
            power,
            base_alpha: RIBBON_BASE_ALPHA * power,
            width: RIBBON_WIDTH_MIN + rng.gen::<f32>() * RIBBON_WIDTH_SPAN,
            life: RIBBON_LIFE_MIN + rng.gen_range(0..RIBBON_LIFE_SPAN),
        }
    }

    #[inline]
    pub fn points(&self) -> &VecDeque<Vec2> {
        &self.points
    }

    #[inline]
    pub fn head(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// Append a point, evicting the oldest once the window is full.
    pub fn push_point(&mut self, point: Vec2) {
        self.points.push_back(point);
        while self.points.len() > RIBBON_MAX_POINTS {
            self.points.pop_front();
        }
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        (self.base_alpha * (self.life as f32 / RIBBON_FADE_LIFE)).clamp(0.0, 1.0)
    }

    /// Drift keyed by the ribbon's own hue so ribbons diverge from one another.
    #[inline]
    pub fn drift(&self, tick: u64) -> Vec2 {
        let t = tick as f64;
        let hue = self.hue as f64;
        Vec2::new(
            (t * RIBBON_DRIFT_RATE_X as f64 + hue).sin() as f32 * RIBBON_DRIFT_X,
            (t * RIBBON_DRIFT_RATE_Y as f64 + hue).cos() as f32 * RIBBON_DRIFT_Y,
        )
    }

    pub fn step<R: Rng>(&mut self, rng: &mut R, tick: u64) {
        self.life -= 1;
        let Some(last) = self.head() else {
            return;
        };
        let jitter = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * RIBBON_JITTER;
        let next = last + jitter + self.drift(tick);
        self.push_point(next);
    }

    /// Core stroke, then the same path much wider and fainter as a halo.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S) -> FxResult<()> {
        let alpha = self.alpha();
        surface.stroke_polyline(
            &self.points,
            self.width,
            Hsla {
                hue: self.hue,
                saturation: SATURATION_PCT,
                lightness: RIBBON_CORE_LIGHTNESS,
                alpha,
            },
        )?;
        surface.stroke_polyline(
            &self.points,
            self.width * RIBBON_HALO_WIDTH_SCALE,
            Hsla {
                hue: self.hue,
                saturation: SATURATION_PCT,
                lightness: RIBBON_HALO_LIGHTNESS,
                alpha: alpha * RIBBON_HALO_ALPHA_SCALE,
            },
        )
    }
}

/// Live ribbons, capped at `capacity`. Emission is at most one ribbon per call.
#[derive(Clone, Debug)]
pub struct RibbonPool {
    ribbons: Vec<Ribbon>,
    capacity: usize,
}

impl Default for RibbonPool {
    fn default() -> Self {
        Self::with_capacity(MAX_RIBBONS)
    }
}

impl RibbonPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ribbons: Vec::with_capacity(capacity.min(MAX_RIBBONS)),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ribbons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ribbons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ribbon> {
        self.ribbons.iter()
    }

    /// Spawn a ribbon at `origin` unless the pool is full.
    pub fn emit<R: Rng>(&mut self, rng: &mut R, origin: Vec2, power: f32) -> bool {
        if self.ribbons.len() >= self.capacity {
            return false;
        }
        self.ribbons.push(Ribbon::spawn(rng, origin, power));
        true
    }

    /// Advance every ribbon and drop the expired ones. Returns the number removed.
    pub fn step<R: Rng>(&mut self, rng: &mut R, tick: u64) -> usize {
        let before = self.ribbons.len();
        for i in (0..self.ribbons.len()).rev() {
            self.ribbons[i].step(rng, tick);
            if self.ribbons[i].life <= 0 {
                self.ribbons.swap_remove(i);
            }
        }
        before - self.ribbons.len()
    }

    pub fn draw<S: DrawSurface>(&self, surface: &mut S) -> FxResult<()> {
        for r in &self.ribbons {
            r.draw(surface)?;
        }
        Ok(())
    }
}

/// Point on the slow Lissajous orbit the idle emitter seeds ribbons around.
pub fn idle_orbit(tick: u64, size: Vec2) -> Vec2 {
    let t = tick as f64;
    let x = IDLE_CENTER[0] + (t * IDLE_RATE[0] as f64).sin() as f32 * IDLE_RADIUS[0];
    let y = IDLE_CENTER[1] + (t * IDLE_RATE[1] as f64).cos() as f32 * IDLE_RADIUS[1];
    Vec2::new(x, y) * size
}
