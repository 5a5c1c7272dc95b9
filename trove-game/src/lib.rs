//! Trove Game Engine
//!
//! Platform-agnostic core logic for Trove, a turn-based treasure hunt:
//! a hunter hops between procedurally generated towns, trades gear, brawls
//! for gold, and digs and searches for the three treasures that win the
//! game. This crate provides all game mechanics without any terminal or
//! platform-specific dependencies; every stochastic operation takes an
//! injected RNG so front ends and tests control the draws.

mod constants;
pub mod hunter;
pub mod mode;
pub mod satchel;
pub mod session;
pub mod shop;
pub mod terrain;
pub mod town;

// Re-export commonly used types
pub use hunter::{Container, Hunter};
pub use mode::{GameMode, ModeConfig, ParseModeError};
pub use satchel::Satchel;
pub use session::{Command, Ending, Session, TurnReport};
pub use shop::{Shop, ShopIntent, ShopOutcome};
pub use terrain::Terrain;
pub use town::{DigOutcome, LeaveOutcome, SearchOutcome, Town, TroubleOutcome};
