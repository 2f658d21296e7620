//! Tiny Cove - a harbor cargo-allocation arcade game
//!
//! Core modules:
//! - `sim`: Round simulation (manifest, weight accounting, allocation state machine)
//! - `layout`: Screen geometry shared by the simulation and the renderer
//! - `renderer`: Scene building, HUD text and the WebGPU pipeline
//! - `audio`: Synthesized sound effects
//! - `settings`: Player preferences

pub mod audio;
pub mod layout;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target frame rate; one simulation step per frame
    pub const FPS: u32 = 60;
    pub const FRAME_DT: f32 = 1.0 / FPS as f32;
    /// Maximum substeps per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play area in pixels
    pub const WIDTH: f32 = 900.0;
    pub const HEIGHT: f32 = 600.0;

    /// Player
    pub const PLAYER_SIZE: f32 = 26.0;
    /// Pixels per frame on each held axis
    pub const PLAYER_SPEED: f32 = 4.2;
    pub const CARRY_SPEED_MULT: f32 = 0.7;

    /// Phase timings (seconds)
    pub const DOCK_SECONDS: f64 = 1.6;
    pub const COUNTDOWN_SECONDS: f64 = 45.0;
    pub const LASH_SECONDS: f64 = 1.2;
    /// Ready this long without confirming and the cargo lashes itself
    pub const AUTO_LASH_DELAY: f64 = 2.0;

    /// Boat animation
    pub const BOAT_START_X: f32 = -300.0;
    pub const BOAT_TARGET_X: f32 = 300.0;
    pub const BOAT_Y: f32 = 54.0;
    /// Departure speed (pixels/s)
    pub const DEPART_SPEED: f32 = 220.0;
    /// Boat is gone once its left edge passes this
    pub const DEPART_EXIT_X: f32 = WIDTH + 50.0;

    /// Boat load
    pub const PASSENGER_COUNT: u32 = 8;
    pub const PASSENGER_WEIGHT: u32 = 1;
    pub const MAX_CAPACITY: u32 = 12;
    /// Weight assumed for anything missing from the catalog
    pub const DEFAULT_CARGO_WEIGHT: u32 = 1;
}
