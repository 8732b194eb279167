pub mod lifecycle;
pub mod pointer;
pub mod scroll;

pub use lifecycle::{wire_pagehide, wire_resize};
pub use pointer::wire_pointer_move;
pub use scroll::wire_scroll;
