// DOM hooks shared by the browser wiring. The page markup owns these ids.

// Surfaces
pub const CANVAS_ID: &str = "fx";
pub const FIGURE_ID: &str = "acrobat";
pub const FIGURE_PARTS_SELECTOR: &str = ".arm,.leg,.qiAura";
pub const FIGURE_MOVE_ATTR: &str = "data-move";

// Move text
pub const MOVE_NAME_ID: &str = "moveName";
pub const MOVE_DESC_ID: &str = "moveDesc";
pub const MOVE_NOTE_ID: &str = "calloutText";

// Feature toggle buttons
pub const TOGGLE_TRAILS_ID: &str = "toggleTrails";
pub const TOGGLE_PARTICLES_ID: &str = "toggleParticles";
pub const TOGGLE_PARALLAX_ID: &str = "toggleCamera";
pub const TOGGLE_OFF_CLASS: &str = "off";

// Parallax output (custom properties on the document element)
pub const CAMERA_X_PROPERTY: &str = "--camx";
pub const CAMERA_Y_PROPERTY: &str = "--camy";

// Inputs
pub const FREEZE_KEY_CODE: &str = "Space";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
