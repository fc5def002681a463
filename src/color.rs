//! Colors and palettes

use std::ops::Index;

/// Number of entries in a palette
pub const PALETTE_SIZE : usize = 16;

/// Color as Red, Green, and Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Create a color from a 12 bit `0x0RGB` value
    ///
    /// Each 4 bit component `c` expands to `(c << 4) | c`
    ///
    ///     use page_raster::Rgb8;
    ///
    ///     assert_eq!(Rgb8::from_rgb444(0x0F80), Rgb8::new(0xff, 0x88, 0x00));
    ///
    pub fn from_rgb444(c: u16) -> Self {
        let expand = |v: u16| {
            let v = (v & 0xF) as u8;
            (v << 4) | v
        };
        Self::new(expand(c >> 8), expand(c >> 4), expand(c))
    }
}

/// 16 color palette mapping page pixels to RGB
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Palette {
    pub colors: [Rgb8; PALETTE_SIZE],
}

impl Default for Palette {
    /// Greyscale ramp from black to white
    fn default() -> Palette {
        let mut colors = [Rgb8::black(); PALETTE_SIZE];
        for (i, c) in colors.iter_mut().enumerate() {
            let v = (i as u8) * 17;
            *c = Rgb8::new(v, v, v);
        }
        Palette { colors }
    }
}

impl Palette {
    pub fn new(colors: [Rgb8; PALETTE_SIZE]) -> Self {
        Palette { colors }
    }
    /// Decode a palette resource of 16 big-endian `0x0RGB` words
    ///
    /// Returns None if fewer than 32 bytes are given
    pub fn from_rgb444(data: &[u8]) -> Option<Self> {
        if data.len() < PALETTE_SIZE * 2 {
            return None;
        }
        let mut colors = [Rgb8::black(); PALETTE_SIZE];
        for (c, w) in colors.iter_mut().zip(data.chunks(2)) {
            *c = Rgb8::from_rgb444(u16::from_be_bytes([w[0], w[1]]));
        }
        Some(Palette { colors })
    }
    /// Color for pixel value `v`, wrapping at 16 entries
    pub fn lookup(&self, v: u8) -> Rgb8 {
        self.colors[usize::from(v) % PALETTE_SIZE]
    }
    /// Expand palette indices into packed RGB bytes
    pub fn expand(&self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(data.len() * 3);
        for &v in data {
            let c = self.lookup(v);
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out
    }
}

impl Index<u8> for Palette {
    type Output = Rgb8;
    fn index(&self, v: u8) -> &Rgb8 {
        &self.colors[usize::from(v) % PALETTE_SIZE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_resource() {
        let mut data = vec![0u8; 32];
        data[2] = 0x0F;
        data[3] = 0xFF;
        data[30] = 0x01;
        data[31] = 0x23;
        let pal = Palette::from_rgb444(&data).unwrap();
        assert_eq!(pal[0], Rgb8::black());
        assert_eq!(pal[1], Rgb8::white());
        assert_eq!(pal[15], Rgb8::new(0x11, 0x22, 0x33));
        assert!(Palette::from_rgb444(&data[..31]).is_none());
    }
    #[test]
    fn lookup_wraps() {
        let pal = Palette::default();
        assert_eq!(pal.lookup(0x18), pal.lookup(0x08));
        assert_eq!(pal.expand(&[0, 15]), vec![0,0,0, 255,255,255]);
    }
}
