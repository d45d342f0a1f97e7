pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_freeze_key;
pub use pointer::{wire_input_handlers, InputWiring};
