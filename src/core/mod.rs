pub mod config;
pub mod constants;
pub mod error;
pub mod moves;
pub mod parallax;
pub mod particles;
pub mod pointer;
pub mod ribbons;
pub mod scene;
pub mod surface;

pub use config::FxParams;
pub use error::{FxError, FxResult};
pub use moves::{MoveCycle, MoveEntry, MOVES};
pub use scene::{Feature, FeatureFlags, Scene};
pub use surface::{DrawSurface, Hsla, Rgba, Viewport};
