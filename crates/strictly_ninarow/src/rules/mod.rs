//! Game rules for N-in-a-row.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the session contracts can compose them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{is_winning_move, run_length, Axis};
