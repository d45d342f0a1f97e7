// Simulation and drawing tuning constants.
// Units are logical (CSS) canvas units and ticks unless stated otherwise;
// one tick is one animation frame.

// Device scaling band
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Background fade painted every tick (leaves soft trails)
pub const BACKGROUND_RGB: [u8; 3] = [5, 6, 13];
pub const FADE_ALPHA: f32 = 0.14;

// Shared hue band for particles and ribbons (degrees)
pub const HUE_MIN: f32 = 160.0;
pub const HUE_SPAN: f32 = 170.0;
pub const SATURATION_PCT: f32 = 95.0;

// Particle pool
pub const MAX_PARTICLES: usize = 160;
pub const PARTICLE_BATCH: usize = 3;
pub const MAX_PARTICLES_LIMIT: usize = 4096; // largest accepted override
pub const PARTICLE_BATCH_LIMIT: usize = 64;
pub const PARTICLE_SPAWN_CHANCE: f32 = 0.65;
pub const PARTICLE_SPAWN_DEPTH: f32 = 40.0; // spawn band below the bottom edge
pub const PARTICLE_RADIUS_MIN: f32 = 1.2;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.2;
pub const PARTICLE_RISE_MIN: f32 = 0.25;
pub const PARTICLE_RISE_SPAN: f32 = 0.9;
pub const PARTICLE_DRIFT_SPAN: f32 = 0.3; // centred on zero
pub const PARTICLE_ALPHA_MIN: f32 = 0.35;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.5;
pub const PARTICLE_LIFE_MIN: i32 = 380;
pub const PARTICLE_LIFE_SPAN: i32 = 280;
pub const PARTICLE_FADE_LIFE: f32 = 300.0; // life at which alpha equals base alpha
pub const PARTICLE_SWAY_TIME_RATE: f32 = 0.004;
pub const PARTICLE_SWAY_SPACE_RATE: f32 = 0.01;
pub const PARTICLE_SWAY_AMPLITUDE: f32 = 0.08;
pub const PARTICLE_CORE_LIGHTNESS: f32 = 65.0;
pub const PARTICLE_HALO_LIGHTNESS: f32 = 70.0;
pub const PARTICLE_HALO_RADIUS_SCALE: f32 = 4.2;
pub const PARTICLE_HALO_ALPHA_SCALE: f32 = 0.25;

// Removal margins around the visible canvas
pub const PARTICLE_MARGIN_TOP: f32 = 40.0;
pub const PARTICLE_MARGIN_SIDE: f32 = 80.0;
pub const PARTICLE_MARGIN_BOTTOM: f32 = 80.0;

// Ribbon pool
pub const MAX_RIBBONS: usize = 120;
pub const MAX_RIBBONS_LIMIT: usize = 1024;
pub const RIBBON_MAX_POINTS: usize = 18;
pub const RIBBON_BASE_ALPHA: f32 = 0.55;
pub const RIBBON_WIDTH_MIN: f32 = 1.2;
pub const RIBBON_WIDTH_SPAN: f32 = 2.2;
pub const RIBBON_LIFE_MIN: i32 = 120;
pub const RIBBON_LIFE_SPAN: i32 = 60;
pub const RIBBON_FADE_LIFE: f32 = 120.0;
pub const RIBBON_JITTER: f32 = 6.0; // full width, centred on zero
pub const RIBBON_DRIFT_RATE_X: f32 = 0.01;
pub const RIBBON_DRIFT_RATE_Y: f32 = 0.012;
pub const RIBBON_DRIFT_X: f32 = 1.2;
pub const RIBBON_DRIFT_Y: f32 = 1.1;
pub const RIBBON_CORE_LIGHTNESS: f32 = 66.0;
pub const RIBBON_HALO_LIGHTNESS: f32 = 70.0;
pub const RIBBON_HALO_WIDTH_SCALE: f32 = 6.5;
pub const RIBBON_HALO_ALPHA_SCALE: f32 = 0.18;

// Ribbon emission power
pub const POWER_POINTER_UP: f32 = 0.7;
pub const POWER_POINTER_DOWN: f32 = 1.1;
pub const POWER_IDLE: f32 = 0.55;

// Idle ribbon emitter orbit ("breathing" around stage centre)
pub const IDLE_RIBBON_CHANCE: f32 = 0.28;
pub const IDLE_CENTER: [f32; 2] = [0.5, 0.56];
pub const IDLE_RADIUS: [f32; 2] = [0.14, 0.10];
pub const IDLE_RATE: [f32; 2] = [0.002, 0.0016];

// Parallax camera
pub const PARALLAX_SCALE_X: f32 = 18.0;
pub const PARALLAX_SCALE_Y: f32 = 14.0;
pub const PARALLAX_SMOOTHING: f32 = 0.07; // fraction of remaining distance closed per tick

// Move cycling
pub const MOVE_INTERVAL_MS: u32 = 5200;

// Frame budget used only for diagnostics
pub const FRAME_BUDGET_MS: f32 = 16.0;
