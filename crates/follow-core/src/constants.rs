// Tuning constants shared by the controller and its hosts.

// Band layout (normalized viewport units, half-extents)
pub const DEFAULT_SAFE_BAND: [f32; 2] = [0.32, 0.21];
pub const DEFAULT_HARD_LIMIT_BAND: [f32; 2] = [0.095, 0.32];
pub const DEFAULT_VERTICAL_OFFSET: f32 = -0.004; // shifts the band centre below mid-screen
pub const VIEWPORT_MID: f32 = 0.5;

// Minimum gap between the safe band and the hard-limit band on each axis
pub const BAND_MARGIN: f32 = 0.05;

// Smoothing time constants (seconds)
pub const DEFAULT_BASE_SMOOTH_TIME: f32 = 0.2;
pub const DEFAULT_LIMIT_SMOOTH_TIME: f32 = 0.1;
pub const DEFAULT_RECENTER_SMOOTH_TIME: f32 = 1.0;

// Idle recentering
pub const DEFAULT_IDLE_RECENTER: bool = true;
pub const DEFAULT_IDLE_TIME_TO_RECENTER: f32 = 3.0;
pub const IDLE_STEP_SLACK: f32 = 1.0e-3; // fraction of a step forgiven when comparing idle time

// Fixed simulation step (seconds), 50 Hz
pub const DEFAULT_FIXED_STEP: f32 = 0.02;

// Integrator limits
pub const MIN_SMOOTH_TIME: f32 = 1.0e-4; // at or below this the integrator snaps
pub const SNAP_FACTOR: f32 = 1.0e4; // omega * dt above this snaps instead of evaluating the cubic

// Debug overlay
pub const OVERLAY_DEPTH: f32 = 0.3; // distance in front of the camera plane
pub const SAFE_BAND_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0]; // green
pub const HARD_LIMIT_BAND_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0]; // red
