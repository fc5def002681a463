//! Paletted page rasterizer for retro adventure game engines
//!
//! How does this work
//!    gfx = Graphics( PageStore( Page x 4 ), Font, Palette )
//!  Page Operations
//!    set_work_page, fill_page, copy_page, resize
//!  Draw Operations (into the work page)
//!    draw_polygon(color, quad strip)
//!      scale vertices if page size != reference size
//!      Blend::from(color)            -- Opaque, Translucent, PageCopy
//!      walk strip from both ends, one band per vertex pair
//!        calc_step()                 -- 16.16 dx per scanline
//!        blend_hline()               -- one clipped span per scanline
//!    draw_point(x, y, color)
//!      blend_pixel()
//!    draw_char(c, x, y, color)       -- 8x8 glyph, literal color
//!  Output
//!    page(index)                     -- raw palette indices
//!    to_file(index, path)            -- expanded through the palette
//!
//! Color codes `0x10` and `0x11` select translucency (OR `0x08`) and a
//! copy from page 0; every other value is a palette index.

pub mod math;
pub mod strip;
pub mod buffer;
pub mod error;
pub mod store;
pub mod blend;
pub mod raster;
pub mod font;
pub mod color;
pub mod export;
pub mod graphics;

pub use math::*;
pub use strip::*;
pub use buffer::*;
pub use error::*;
pub use store::*;
pub use blend::*;
pub use raster::*;
pub use font::{Font, CHAR_SIZE, FONT_FIRST_CHAR, MAX_CHAR_X, MAX_CHAR_Y};
pub use color::*;
pub use graphics::*;

/// Reference width polygon data is authored for
pub const GFX_W : usize = 320;
/// Reference height polygon data is authored for
pub const GFX_H : usize = 200;

/// Drawing interface used by a game interpreter
pub trait Gfx {
    /// Reallocate all pages at a new physical size
    fn resize(&mut self, width: usize, height: usize);
    /// Raw palette indices of page `index`
    fn page(&self, index: usize) -> &[u8];
    /// Select the page draw operations write to
    fn set_work_page(&mut self, index: usize);
    /// Fill a quad strip with color code `color`
    fn draw_polygon(&mut self, color: u8, strip: &QuadStrip);
    /// Draw one pixel with color code `color`
    fn draw_point(&mut self, x: i16, y: i16, color: u8);
    /// Draw glyph `c` at cell column `x` and pixel row `y`
    fn draw_char(&mut self, c: u8, x: u16, y: u16, color: u8);
    /// Draw a string of glyphs starting at cell column `x` and pixel row `y`
    fn draw_string(&mut self, text: &str, x: u16, y: u16, color: u8);
    /// Set every pixel of page `index`
    fn fill_page(&mut self, index: usize, color: u8);
    /// Copy page `src` to `dst` shifted by `vscroll` rows
    fn copy_page(&mut self, src: usize, dst: usize, vscroll: i32);
}
