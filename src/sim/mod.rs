//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Frame clock passed in, never read from the platform
//! - Seeded RNG only
//! - No rendering, audio or DOM dependencies

pub mod autopilot;
pub mod catalog;
pub mod collision;
pub mod dock;
pub mod manifest;
pub mod session;
pub mod state;
pub mod tick;
pub mod weight;

pub use catalog::{CATALOG, CargoItem, CargoKind};
pub use collision::Rect;
pub use dock::{DockGrid, DockItem};
pub use manifest::Manifest;
pub use session::Session;
pub use state::{ClipboardEntry, Delivery, Outcome, Phase, RoundState};
pub use tick::{RoundEvent, TickInput, tick};
pub use weight::{cargo_weight, remaining_capacity, total_weight};
