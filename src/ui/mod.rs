//! Screen layout and rasterization

pub mod font;
pub mod layout;
pub mod palette;
pub mod renderer;

pub use font::TextFont;
pub use layout::{Frame, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use palette::PaletteColor;
pub use renderer::{FrameRenderer, RendererError};
