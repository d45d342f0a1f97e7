use super::constants::*;
use super::error::{FxError, FxResult};

/// Emission parameters tuned for visual density.
///
/// These are configuration, not contracts: the defaults reproduce the look of
/// the showcase panel and a host page may override them through `data-*`
/// attributes on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct FxParams {
    pub max_particles: usize,
    pub max_ribbons: usize,
    pub particle_batch: usize,
    pub particle_spawn_chance: f32,
    pub idle_ribbon_chance: f32,
    pub move_interval_ms: u32,
}

impl Default for FxParams {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            max_ribbons: MAX_RIBBONS,
            particle_batch: PARTICLE_BATCH,
            particle_spawn_chance: PARTICLE_SPAWN_CHANCE,
            idle_ribbon_chance: IDLE_RIBBON_CHANCE,
            move_interval_ms: MOVE_INTERVAL_MS,
        }
    }
}

/// Attribute names (without the `data-` prefix) accepted as overrides.
pub const PARAM_KEYS: &[&str] = &[
    "max-particles",
    "max-ribbons",
    "particle-batch",
    "particle-spawn-chance",
    "idle-ribbon-chance",
    "move-interval-ms",
];

impl FxParams {
    /// Apply one textual override. On error the params are left untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> FxResult<()> {
        let invalid = || FxError::InvalidParam {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "max-particles" => {
                self.max_particles = parse_count(value, MAX_PARTICLES_LIMIT).ok_or_else(invalid)?
            }
            "max-ribbons" => {
                self.max_ribbons = parse_count(value, MAX_RIBBONS_LIMIT).ok_or_else(invalid)?
            }
            "particle-batch" => {
                self.particle_batch = parse_count(value, PARTICLE_BATCH_LIMIT).ok_or_else(invalid)?
            }
            "particle-spawn-chance" => {
                self.particle_spawn_chance = parse_probability(value).ok_or_else(invalid)?
            }
            "idle-ribbon-chance" => {
                self.idle_ribbon_chance = parse_probability(value).ok_or_else(invalid)?
            }
            "move-interval-ms" => {
                self.move_interval_ms = value
                    .parse::<u32>()
                    .ok()
                    .filter(|ms| *ms > 0)
                    .ok_or_else(invalid)?
            }
            _ => return Err(FxError::UnknownParam(key.to_string())),
        }
        Ok(())
    }

    /// Apply every override that parses; return the rejected ones.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> (Self, Vec<FxError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut rejected = Vec::new();
        for (key, value) in overrides {
            if let Err(e) = self.apply_override(key, value) {
                rejected.push(e);
            }
        }
        (self, rejected)
    }
}

/// Positive count no larger than `limit`.
#[inline]
fn parse_count(value: &str, limit: usize) -> Option<usize> {
    value
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=limit).contains(n))
}

#[inline]
fn parse_probability(value: &str) -> Option<f32> {
    value
        .parse::<f32>()
        .ok()
        .filter(|p| p.is_finite() && (0.0..=1.0).contains(p))
}
