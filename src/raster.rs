//! Polygon scan converter
//!
//! Quad strips are filled band by band. Two cursors walk the vertex list
//! from both ends toward the middle, the front cursor tracing the right
//! edge and the back cursor the left edge. Each band is interpolated one
//! scanline at a time with 16.16 accumulators.
//!
//!     use page_raster::{fill_quad_strip, GfxConfig, PageStore, QuadStrip};
//!
//!     let mut store = PageStore::new(GfxConfig::native(4,4));
//!     let qs = QuadStrip::from_slice(&[(3,0),(3,4),(0,4),(0,0)]);
//!     fill_quad_strip(&mut store, 5, &qs);
//!     assert_eq!(store.page(2).data, vec![5; 16]);
//!

use crate::blend::Blend;
use crate::math::calc_step;
use crate::math::Fixed;
use crate::store::PageStore;
use crate::strip::QuadStrip;

use log::trace;
use std::borrow::Cow;
use std::cmp::min;

/// Fraction the left accumulator is reset to at the start of each band
pub const LEFT_FRAC : u16 = 0x7FFF;
/// Fraction the right accumulator is reset to at the start of each band
pub const RIGHT_FRAC : u16 = 0x8000;

/// Fill a quad strip into the work page of `store` with color code `color`
///
/// Vertices are given in reference coordinates and scaled when the page
/// size differs from the reference size. Spans are clipped to the page
/// width; the fill stops at the first scanline below the page.
pub fn fill_quad_strip(store: &mut PageStore, color: u8, strip: &QuadStrip) {
    let n = strip.len();
    if n < 2 {
        return;
    }
    let qs = if store.is_scaled() {
        let (u, v) = store.scale_ratios();
        let mut qs = strip.clone();
        qs.scale(u, v);
        Cow::Owned(qs)
    } else {
        Cow::Borrowed(strip)
    };
    let vs = &qs.vertices;
    let blend = Blend::from(color);
    trace!("fill_quad_strip: {} vertices {:?} page {}", n, blend, store.work_page());

    let width = store.width() as i32;
    let height = store.height() as i32;

    let mut i = 0;
    let mut j = n - 1;

    let mut right = Fixed::from_int(vs[i].x);
    let mut left = Fixed::from_int(vs[j].x);
    let mut hline_y = i32::from(min(vs[i].y, vs[j].y));

    i += 1;
    j -= 1;

    let mut remaining = n;
    loop {
        remaining -= 2;
        if remaining < 2 {
            return;
        }
        assert!(i < j, "quad strip cursors crossed: {} {}", i, j);
        let (left_step, _) = calc_step(vs[j + 1], vs[j]);
        let (right_step, h) = calc_step(vs[i - 1], vs[i]);

        i += 1;
        j -= 1;

        left = left.with_frac(LEFT_FRAC);
        right = right.with_frac(RIGHT_FRAC);

        if h == 0 {
            left += left_step;
            right += right_step;
            continue;
        }
        for _ in 0 .. h {
            if hline_y >= 0 {
                let x1 = i32::from(left.int());
                let x2 = i32::from(right.int());
                if x1 < width && x2 >= 0 {
                    let x1 = x1.max(0);
                    let x2 = x2.min(width - 1);
                    if x1 <= x2 {
                        store.blend_hline(x1, x2, hline_y, blend);
                    }
                }
            }
            left += left_step;
            right += right_step;
            hline_y += 1;
            if hline_y >= height {
                return;
            }
        }
    }
}
