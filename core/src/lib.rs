#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use chest::*;
pub use dig::*;
pub use error::*;
pub use game::*;
pub use opponent::*;
pub use placement::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod chest;
mod dig;
mod error;
mod game;
mod opponent;
mod placement;
mod types;
mod view;
