//! Page buffer

use std::ops::Index;
use std::ops::IndexMut;

/// Paletted page
///
/// One palette index per byte, stored in row-major order (C-format)
///
///     use page_raster::Page;
///
///     let mut page = Page::new(3, 2);
///     page.row_mut(1)[2] = 7;
///     assert_eq!(page[(2,1)], 7);
///     assert_eq!(page.data, vec![0,0,0, 0,0,7]);
///
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Page {
    /// Palette indices
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl Page {
    /// Allocate a zeroed page of width * height bytes
    pub fn new(width: usize, height: usize) -> Self {
        Page { width, height, data: vec![0u8; width * height] }
    }
    /// Allocate a zeroed page, reporting allocation failure
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        let n = width.checked_mul(height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(n).ok()?;
        data.resize(n, 0);
        Some(Page { width, height, data })
    }
    /// Size of the page in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Byte offset of (x,y)
    pub fn offset(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
    /// Row `y` as a slice
    pub fn row(&self, y: usize) -> &[u8] {
        debug_assert!(y < self.height);
        let i = y * self.width;
        &self.data[i .. i + self.width]
    }
    /// Row `y` as a mutable slice
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        debug_assert!(y < self.height);
        let i = y * self.width;
        &mut self.data[i .. i + self.width]
    }
    /// Set every pixel to `color`
    pub fn fill(&mut self, color: u8) {
        self.data.iter_mut().for_each(|v| *v = color);
    }
}

impl Index<(usize,usize)> for Page {
    type Output = u8;
    fn index(&self, index: (usize,usize)) -> &u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[self.offset(index.0, index.1)]
    }
}
impl IndexMut<(usize,usize)> for Page {
    fn index_mut(&mut self, index: (usize,usize)) -> &mut u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &mut self.data[i]
    }
}
