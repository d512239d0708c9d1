mod layout;
mod render;

pub use layout::{BoardLayout, ButtonKind, MenuLayout};
pub use render::Renderer;
