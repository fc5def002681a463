//! Bitmap font glyphs
//!
//! Glyphs are 8x8 monochrome bitmaps, one byte per row with the left
//! most pixel in the high bit. Tables start at character 0x20.

use crate::store::PageStore;

use log::trace;

/// First character code present in a font table
pub const FONT_FIRST_CHAR : u8 = 0x20;
/// Width and height of a glyph cell in pixels
pub const CHAR_SIZE : usize = 8;
/// Largest cell column accepted by [draw_char](fn.draw_char.html)
pub const MAX_CHAR_X : u16 = 39;
/// Largest pixel row accepted by [draw_char](fn.draw_char.html)
pub const MAX_CHAR_Y : u16 = 192;

/// Glyph table
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Font {
    data: Vec<u8>,
}

impl Font {
    /// Create a font from a table of 8 byte glyphs starting at 0x20
    ///
    /// A trailing partial glyph is ignored
    pub fn new(data: &[u8]) -> Self {
        let n = data.len() / CHAR_SIZE * CHAR_SIZE;
        Font { data: data[.. n].to_vec() }
    }
    /// Number of glyphs in the table
    pub fn len(&self) -> usize {
        self.data.len() / CHAR_SIZE
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Bitmap for character `c`, if present
    ///
    ///     use page_raster::Font;
    ///
    ///     let font = Font::new(&[0xff; 16]);
    ///     assert!(font.glyph(b' ').is_some());
    ///     assert!(font.glyph(b'!').is_some());
    ///     assert!(font.glyph(b'"').is_none());
    ///     assert!(font.glyph(0x1f).is_none());
    ///
    pub fn glyph(&self, c: u8) -> Option<&[u8]> {
        let i = usize::from(c.checked_sub(FONT_FIRST_CHAR)?) * CHAR_SIZE;
        self.data.get(i .. i + CHAR_SIZE)
    }
}

/// Draw character `c` into the work page
///
/// `x` is a cell column (8 pixels wide) and `y` a pixel row. Calls with
/// `x > 39` or `y > 192` are ignored, as are characters missing from
/// the font. Set bits are written with `color` as a plain palette index,
/// the blend color codes are not interpreted.
///
/// Pixels are addressed by byte offset `(y + j) * width + x * 8 + i`, so
/// on pages narrower than 320 pixels a glyph may continue on the next
/// row. Offsets past the end of the page are dropped.
pub fn draw_char(store: &mut PageStore, font: &Font, c: u8, x: u16, y: u16, color: u8) {
    if x > MAX_CHAR_X || y > MAX_CHAR_Y {
        return;
    }
    let glyph = match font.glyph(c) {
        Some(g) => g,
        None => return,
    };
    trace!("draw_char: {:#04x} at {},{} color {:#04x}", c, x, y, color);
    let page = store.work_mut();
    let w = page.width;
    let base = usize::from(x) * CHAR_SIZE + usize::from(y) * w;
    for (j, &row) in glyph.iter().enumerate() {
        let mut bits = row;
        for i in 0 .. CHAR_SIZE {
            if bits & 0x80 != 0 {
                if let Some(p) = page.data.get_mut(base + j * w + i) {
                    *p = color;
                }
            }
            bits <<= 1;
        }
    }
}

/// Draw a string of characters into the work page
///
/// Characters advance one cell to the right; `\n` returns to column `x`
/// and moves down one cell.
pub fn draw_string(store: &mut PageStore, font: &Font, text: &str, x: u16, y: u16, color: u8) {
    let (mut cx, mut cy) = (x, y);
    for &c in text.as_bytes() {
        if c == b'\n' {
            cx = x;
            cy = cy.saturating_add(CHAR_SIZE as u16);
        } else {
            draw_char(store, font, c, cx, cy, color);
            cx = cx.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GfxConfig;

    // '!' is a vertical bar in column 0, '"' a full block
    fn font() -> Font {
        let mut t = vec![0u8; 8];
        t.extend_from_slice(&[0x80; 8]);
        t.extend_from_slice(&[0xff; 8]);
        Font::new(&t)
    }

    #[test]
    fn bits_high_to_low() {
        let mut s = PageStore::new(GfxConfig::default());
        let f = Font::new(&[0b1010_0001, 0, 0, 0, 0, 0, 0, 0x01]);
        draw_char(&mut s, &f, b' ', 1, 2, 9);
        let p = s.work();
        assert_eq!(&p.row(2)[8 .. 16], &[9,0,9,0,0,0,0,9]);
        assert_eq!(&p.row(9)[8 .. 16], &[0,0,0,0,0,0,0,9]);
        assert_eq!(p.data.iter().filter(|&&v| v != 0).count(), 4);
    }
    #[test]
    fn special_codes_written_literally() {
        let mut s = PageStore::new(GfxConfig::default());
        draw_char(&mut s, &font(), b'"', 0, 0, 0x11);
        assert_eq!(&s.work().row(0)[.. 8], &[0x11; 8]);
    }
    #[test]
    fn string_newline() {
        let mut s = PageStore::new(GfxConfig::default());
        draw_string(&mut s, &font(), "!!\n!", 2, 0, 3);
        let p = s.work();
        assert_eq!(p[(16,0)], 3);
        assert_eq!(p[(24,0)], 3);
        assert_eq!(p[(16,8)], 3);
        assert_eq!(p[(24,8)], 0);
    }
    #[test]
    fn narrow_page_stays_in_bounds() {
        let mut s = PageStore::new(GfxConfig::native(16,4));
        draw_char(&mut s, &font(), b'"', 39, 192, 1);
        draw_char(&mut s, &font(), b'"', 1, 0, 1);
        assert_eq!(s.work().data.iter().filter(|&&v| v == 1).count(), 8 * 4);
    }
}
