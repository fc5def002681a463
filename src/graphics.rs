//! Graphics state
//!
//! [Graphics](struct.Graphics.html) ties the page store, font and
//! palette together and is what an interpreter draws through.

use crate::blend::Blend;
use crate::color::Palette;
use crate::error::Error;
use crate::font;
use crate::font::Font;
use crate::export;
use crate::raster::fill_quad_strip;
use crate::store::GfxConfig;
use crate::store::PageStore;
use crate::strip::QuadStrip;
use crate::Gfx;

use std::path::Path;

/// Four page rasterizer
///
///     use page_raster::{Gfx, Graphics, GfxConfig, QuadStrip};
///
///     let mut gfx = Graphics::with_config(GfxConfig::native(4,4));
///     gfx.set_work_page(2);
///     gfx.draw_polygon(5, &QuadStrip::from_slice(&[(3,0),(3,4),(0,4),(0,0)]));
///     assert_eq!(gfx.page(2), &[5; 16][..]);
///     assert_eq!(gfx.page(0), &[0; 16][..]);
///
#[derive(Debug,Clone)]
pub struct Graphics {
    store: PageStore,
    font: Font,
    palette: Palette,
}

impl Default for Graphics {
    fn default() -> Graphics {
        Graphics::new()
    }
}

impl Graphics {
    /// Create 320x200 pages with a 320x200 reference size
    ///
    /// # Panics
    ///
    /// Panics if the pages cannot be allocated
    pub fn new() -> Self {
        Self::with_config(GfxConfig::default())
    }
    /// Create pages as described by `cfg`
    ///
    /// # Panics
    ///
    /// Panics if the pages cannot be allocated
    pub fn with_config(cfg: GfxConfig) -> Self {
        Self::from_store(PageStore::new(cfg))
    }
    /// Create pages as described by `cfg`, reporting allocation failure
    pub fn try_with_config(cfg: GfxConfig) -> Result<Self, Error> {
        Ok(Self::from_store(PageStore::try_new(cfg)?))
    }
    fn from_store(store: PageStore) -> Self {
        Graphics { store, font: Font::default(), palette: Palette::default() }
    }
    /// Reallocate pages, reporting allocation failure
    ///
    /// Pages are left untouched on failure
    pub fn try_resize(&mut self, width: usize, height: usize) -> Result<(), Error> {
        self.store.try_resize(width, height)
    }
    /// Page width in pixels
    pub fn width(&self) -> usize {
        self.store.width()
    }
    /// Page height in pixels
    pub fn height(&self) -> usize {
        self.store.height()
    }
    /// 16.16 scale ratios applied to polygon vertices
    pub fn scale_ratios(&self) -> (i32, i32) {
        self.store.scale_ratios()
    }
    /// Index of the current work page
    pub fn work_page(&self) -> usize {
        self.store.work_page()
    }
    /// Underlying page store
    pub fn store(&self) -> &PageStore {
        &self.store
    }
    /// Underlying page store, mutable
    ///
    ///     use page_raster::{Blend, Gfx, Graphics, GfxConfig};
    ///
    ///     let mut gfx = Graphics::with_config(GfxConfig::native(4,1));
    ///     gfx.store_mut().blend_hline(1, 2, 0, Blend::Opaque(3));
    ///     assert_eq!(gfx.page(2), &[0,3,3,0][..]);
    ///
    pub fn store_mut(&mut self) -> &mut PageStore {
        &mut self.store
    }
    /// Set the glyph table used by `draw_char`
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }
    pub fn font(&self) -> &Font {
        &self.font
    }
    /// Set the palette used when exporting pages
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    /// Page `index` expanded to packed RGB through the palette
    pub fn page_to_rgb(&self, index: usize) -> Vec<u8> {
        self.palette.expand(&self.store.page(index).data)
    }
    /// Write page `index` to an image file, expanded through the palette
    pub fn to_file<P: AsRef<Path>>(&self, index: usize, filename: P) -> Result<(), Error> {
        export::write_page(self.store.page(index), &self.palette, filename)
    }
    /// Compare page `index`, expanded through the palette, against an image file
    pub fn matches_file<P: AsRef<Path>>(&self, index: usize, filename: P) -> Result<bool, Error> {
        export::page_diff(self.store.page(index), &self.palette, filename)
    }
}

impl Gfx for Graphics {
    fn resize(&mut self, width: usize, height: usize) {
        self.store.resize(width, height);
    }
    fn page(&self, index: usize) -> &[u8] {
        &self.store.page(index).data
    }
    fn set_work_page(&mut self, index: usize) {
        self.store.set_work_page(index);
    }
    fn draw_polygon(&mut self, color: u8, strip: &QuadStrip) {
        fill_quad_strip(&mut self.store, color, strip);
    }
    fn draw_point(&mut self, x: i16, y: i16, color: u8) {
        self.store.blend_pixel(i32::from(x), i32::from(y), Blend::from(color));
    }
    fn draw_char(&mut self, c: u8, x: u16, y: u16, color: u8) {
        font::draw_char(&mut self.store, &self.font, c, x, y, color);
    }
    fn draw_string(&mut self, text: &str, x: u16, y: u16, color: u8) {
        font::draw_string(&mut self.store, &self.font, text, x, y, color);
    }
    fn fill_page(&mut self, index: usize, color: u8) {
        self.store.fill_page(index, color);
    }
    fn copy_page(&mut self, src: usize, dst: usize, vscroll: i32) {
        self.store.copy_page(src, dst, vscroll);
    }
}
