//! Page Store
//!
//! Four pages of identical size plus the work page selection and the
//! 16.16 ratios mapping the reference (authoring) resolution onto the
//! physical one.

use crate::buffer::Page;
use crate::error::Error;
use crate::math::FIXED_SHIFT;
use crate::GFX_H;
use crate::GFX_W;

use log::{debug, error};

/// Number of pages
pub const NUM_PAGES : usize = 4;
/// Work page selected after construction and after every resize
pub const DEFAULT_WORK_PAGE : usize = 2;

/// Page size configuration
///
///     use page_raster::{GfxConfig, PageStore};
///
///     // 640x400 pages for polygon data authored at 320x200
///     let store = PageStore::new(GfxConfig::with_size(640, 400));
///     assert_eq!(store.reference_size(), (320, 200));
///     assert_eq!(store.scale_ratios(), (2 << 16, 2 << 16));
///
///     let store = PageStore::new(GfxConfig::native(64, 48));
///     assert_eq!(store.reference_size(), (64, 48));
///     assert!(! store.is_scaled());
///
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct GfxConfig {
    /// Physical width in pixels
    pub width: usize,
    /// Physical height in pixels
    pub height: usize,
    /// Width polygon data is authored for
    pub ref_width: usize,
    /// Height polygon data is authored for
    pub ref_height: usize,
}

impl Default for GfxConfig {
    fn default() -> GfxConfig {
        GfxConfig { width: GFX_W, height: GFX_H, ref_width: GFX_W, ref_height: GFX_H }
    }
}

impl GfxConfig {
    /// Physical size `width` x `height` with the default reference size
    pub fn with_size(width: usize, height: usize) -> Self {
        GfxConfig { width, height, .. Default::default() }
    }
    /// Physical and reference size both `width` x `height`
    pub fn native(width: usize, height: usize) -> Self {
        GfxConfig { width, height, ref_width: width, ref_height: height }
    }
}

/// Report an unrecoverable allocation failure and stop
fn fatal(e: Error) -> ! {
    error!("{}", e);
    panic!("{}", e);
}

fn ratio(size: usize, reference: usize) -> i32 {
    (((size as i64) << FIXED_SHIFT) / reference as i64) as i32
}

/// Owner of the four pages
#[derive(Debug,Clone)]
pub struct PageStore {
    pages: Vec<Page>,
    work: usize,
    u: i32,
    v: i32,
    ref_width: usize,
    ref_height: usize,
}

impl PageStore {
    /// Allocate four pages as described by `cfg`
    ///
    /// # Panics
    ///
    /// Panics if the pages cannot be allocated
    pub fn new(cfg: GfxConfig) -> Self {
        match Self::try_new(cfg) {
            Ok(store) => store,
            Err(e) => fatal(e),
        }
    }
    /// Allocate four pages as described by `cfg`, reporting failure
    pub fn try_new(cfg: GfxConfig) -> Result<Self, Error> {
        if cfg.ref_width == 0 || cfg.ref_height == 0 {
            return Err(Error::ZeroSize);
        }
        let mut store = PageStore {
            pages: vec![],
            work: DEFAULT_WORK_PAGE,
            u: 1 << FIXED_SHIFT,
            v: 1 << FIXED_SHIFT,
            ref_width: cfg.ref_width,
            ref_height: cfg.ref_height,
        };
        store.try_resize(cfg.width, cfg.height)?;
        Ok(store)
    }
    /// Reallocate all pages to `width` x `height`
    ///
    /// Pages are zero filled, scale ratios recomputed and the work page
    /// reset to page 2.
    ///
    /// # Panics
    ///
    /// Panics if the pages cannot be allocated
    pub fn resize(&mut self, width: usize, height: usize) {
        if let Err(e) = self.try_resize(width, height) {
            fatal(e);
        }
    }
    /// Reallocate all pages to `width` x `height`, reporting failure
    ///
    /// Existing pages are left untouched on failure
    pub fn try_resize(&mut self, width: usize, height: usize) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroSize);
        }
        let pages = (0 .. NUM_PAGES)
            .map(|_| Page::try_new(width, height))
            .collect::<Option<Vec<_>>>()
            .ok_or(Error::Alloc { bytes: width.saturating_mul(height) })?;
        self.pages = pages;
        self.u = ratio(width, self.ref_width);
        self.v = ratio(height, self.ref_height);
        self.work = DEFAULT_WORK_PAGE;
        debug!("resize: {}x{} (reference {}x{}) u {:#x} v {:#x}",
               width, height, self.ref_width, self.ref_height, self.u, self.v);
        Ok(())
    }
    /// Width of every page
    pub fn width(&self) -> usize {
        self.pages[0].width
    }
    /// Height of every page
    pub fn height(&self) -> usize {
        self.pages[0].height
    }
    /// Reference (authoring) size
    pub fn reference_size(&self) -> (usize, usize) {
        (self.ref_width, self.ref_height)
    }
    /// True if polygon vertices need scaling before rasterization
    pub fn is_scaled(&self) -> bool {
        self.width() != self.ref_width || self.height() != self.ref_height
    }
    /// 16.16 ratios (u,v) of physical to reference size
    pub fn scale_ratios(&self) -> (i32, i32) {
        (self.u, self.v)
    }
    /// Page `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in 0..4
    pub fn page(&self, index: usize) -> &Page {
        assert!(index < NUM_PAGES, "page index {} out of range", index);
        &self.pages[index]
    }
    /// Mutable page `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in 0..4
    pub fn page_mut(&mut self, index: usize) -> &mut Page {
        assert!(index < NUM_PAGES, "page index {} out of range", index);
        &mut self.pages[index]
    }
    /// Select page `index` as the destination of draw operations
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in 0..4
    pub fn set_work_page(&mut self, index: usize) {
        assert!(index < NUM_PAGES, "page index {} out of range", index);
        self.work = index;
    }
    /// Index of the current work page
    pub fn work_page(&self) -> usize {
        self.work
    }
    /// Current work page
    pub fn work(&self) -> &Page {
        &self.pages[self.work]
    }
    /// Current work page, mutable
    pub fn work_mut(&mut self) -> &mut Page {
        &mut self.pages[self.work]
    }
    /// Work page together with page 0
    ///
    /// Page 0 is `None` when it is itself the work page
    pub fn work_with_page0(&mut self) -> (&mut Page, Option<&Page>) {
        let work = self.work;
        let (head, tail) = self.pages.split_at_mut(1);
        if work == 0 {
            (&mut head[0], None)
        } else {
            (&mut tail[work - 1], Some(&head[0]))
        }
    }
    /// Set every pixel of page `index` to `color`
    pub fn fill_page(&mut self, index: usize, color: u8) {
        debug!("fill_page: {} color {:#04x}", index, color);
        self.page_mut(index).fill(color);
    }
    /// Copy page `src` into page `dst`, shifted down by `vscroll` rows
    ///
    /// Negative `vscroll` shifts up. Rows of `dst` not covered by the
    /// shifted source keep their contents. Scrolling by the page height
    /// or more does nothing, as does copying a page onto itself.
    ///
    ///     use page_raster::{PageStore, GfxConfig};
    ///
    ///     let mut store = PageStore::new(GfxConfig::native(2,3));
    ///     store.page_mut(1).data.copy_from_slice(&[1,1, 2,2, 3,3]);
    ///     store.copy_page(1, 3, 1);
    ///     assert_eq!(store.page(3).data, vec![0,0, 1,1, 2,2]);
    ///     store.copy_page(1, 3, -1);
    ///     assert_eq!(store.page(3).data, vec![2,2, 3,3, 2,2]);
    ///
    pub fn copy_page(&mut self, src: usize, dst: usize, vscroll: i32) {
        assert!(src < NUM_PAGES, "page index {} out of range", src);
        assert!(dst < NUM_PAGES, "page index {} out of range", dst);
        debug!("copy_page: {} -> {} vscroll {}", src, dst, vscroll);
        if src == dst {
            return;
        }
        let (w, h) = (self.width(), self.height() as i32);
        let (s, d) = self.pair_mut(src, dst);
        if vscroll == 0 {
            d.data.copy_from_slice(&s.data);
        } else if vscroll > -h && vscroll < h {
            let shift = vscroll.unsigned_abs() as usize * w;
            let n = (h as usize * w) - shift;
            if vscroll < 0 {
                d.data[.. n].copy_from_slice(&s.data[shift .. shift + n]);
            } else {
                d.data[shift .. shift + n].copy_from_slice(&s.data[.. n]);
            }
        }
    }
    fn pair_mut(&mut self, src: usize, dst: usize) -> (&Page, &mut Page) {
        debug_assert!(src != dst);
        if src < dst {
            let (a, b) = self.pages.split_at_mut(dst);
            (&a[src], &mut b[0])
        } else {
            let (a, b) = self.pages.split_at_mut(src);
            (&b[0], &mut a[dst])
        }
    }
}

impl Default for PageStore {
    fn default() -> PageStore {
        PageStore::new(GfxConfig::default())
    }
}
