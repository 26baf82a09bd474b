//! Game simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - One call to `tick::frame` per display frame
//! - Seeded RNG only
//! - Drawing goes through the `Painter` trait

pub mod collision;
pub mod entities;
pub mod input;
pub mod paint;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Bounds, Rect, overlaps, rect_intersect};
pub use entities::{Bullet, Enemy, Facing, Particle, Player, explode};
pub use input::{Control, InputState, Key, TickInput};
pub use paint::{Color, DrawCall, Painter, RecordingPainter, TextAlign, hsl_to_rgba, palette};
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::frame;
