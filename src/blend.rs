//! Blend strategies
//!
//! A color code selects how a span or point is written into the work
//! page. The choice is made once per draw call.

use crate::store::PageStore;

use std::cmp::max;
use std::cmp::min;

/// Color code marking a translucent fill
pub const COLOR_TRANSLUCENT : u8 = 0x10;
/// Color code marking a copy from page 0
pub const COLOR_PAGE_COPY : u8 = 0x11;
/// Bit set in destination pixels by a translucent fill
pub const TRANSLUCENT_BIT : u8 = 0x08;

/// Pixel write mode
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Blend {
    /// Replace pixels with a palette index
    Opaque(u8),
    /// OR [TRANSLUCENT_BIT](constant.TRANSLUCENT_BIT.html) into existing pixels
    Translucent,
    /// Copy pixels from page 0 at the same location
    PageCopy,
}

impl From<u8> for Blend {
    /// Resolve a color code
    ///
    ///     use page_raster::Blend;
    ///
    ///     assert_eq!(Blend::from(0x10), Blend::Translucent);
    ///     assert_eq!(Blend::from(0x11), Blend::PageCopy);
    ///     assert_eq!(Blend::from(0x0f), Blend::Opaque(0x0f));
    ///
    fn from(color: u8) -> Blend {
        match color {
            COLOR_TRANSLUCENT => Blend::Translucent,
            COLOR_PAGE_COPY => Blend::PageCopy,
            c => Blend::Opaque(c),
        }
    }
}

impl PageStore {
    /// Blend the span from `x1` to `x2` (inclusive, either order) on row `y`
    ///
    /// Pixels outside the page are ignored
    pub fn blend_hline(&mut self, x1: i32, x2: i32, y: i32, blend: Blend) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        let xmax = max(x1, x2);
        let xmin = min(x1, x2);
        if y < 0 || y >= h || xmin >= w || xmax < 0 {
            return;
        }
        let (xmin, xmax) = (max(xmin, 0), min(xmax, w - 1));
        let n = (xmax - xmin + 1) as usize;
        let off = (y * w + xmin) as usize;
        let (work, page0) = self.work_with_page0();
        let dst = &mut work.data[off .. off + n];
        match blend {
            Blend::Opaque(c) => dst.iter_mut().for_each(|p| *p = c),
            Blend::Translucent => dst.iter_mut().for_each(|p| *p |= TRANSLUCENT_BIT),
            Blend::PageCopy => {
                if let Some(src) = page0 {
                    dst.copy_from_slice(&src.data[off .. off + n]);
                }
            }
        }
    }
    /// Blend a single pixel at (`x`,`y`)
    ///
    /// Pixels outside the page are ignored
    pub fn blend_pixel(&mut self, x: i32, y: i32, blend: Blend) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        if x < 0 || y < 0 || x >= w || y >= h {
            return;
        }
        let off = (y * w + x) as usize;
        let (work, page0) = self.work_with_page0();
        let p = &mut work.data[off];
        match blend {
            Blend::Opaque(c) => *p = c,
            Blend::Translucent => *p |= TRANSLUCENT_BIT,
            Blend::PageCopy => {
                if let Some(src) = page0 {
                    *p = src.data[off];
                }
            }
        }
    }
}
