extern crate page_raster;

use page_raster::Gfx;
use page_raster::{Graphics, GfxConfig, QuadStrip};
use page_raster::{COLOR_PAGE_COPY, COLOR_TRANSLUCENT};

fn full_page() -> QuadStrip {
    QuadStrip::from_slice(&[(319,0),(319,200),(0,200),(0,0)])
}

// Diamond made of two bands, right side then left side
fn diamond() -> QuadStrip {
    QuadStrip::from_slice(&[(160,20),(220,100),(160,180),
                            (160,180),(100,100),(160,20)])
}

fn pattern(gfx: &mut Graphics, page: usize) {
    gfx.set_work_page(page);
    for y in 0 .. 200 {
        for x in (0 .. 320).step_by(3) {
            gfx.draw_point(x as i16, y as i16, ((x + y) % 16) as u8);
        }
    }
}

#[test]
fn opaque_full_cover() {
    let mut gfx = Graphics::new();
    pattern(&mut gfx, 2);
    gfx.draw_polygon(0x0c, &full_page());
    assert!(gfx.page(2).iter().all(|&v| v == 0x0c));
}

#[test]
fn translucent_full_cover() {
    let mut gfx = Graphics::new();
    pattern(&mut gfx, 1);
    let before = gfx.page(1).to_vec();
    gfx.draw_polygon(COLOR_TRANSLUCENT, &full_page());
    for (&b, &a) in before.iter().zip(gfx.page(1).iter()) {
        assert_eq!(a, b | 0x08);
        if b == 0 {
            assert_eq!(a, 0x08);
        }
    }
}

#[test]
fn page_copy_region() {
    let mut gfx = Graphics::new();
    pattern(&mut gfx, 0);
    gfx.set_work_page(3);
    gfx.fill_page(3, 0x0f);
    let qs = QuadStrip::from_slice(&[(200,50),(200,150),(40,150),(40,50)]);
    gfx.draw_polygon(COLOR_PAGE_COPY, &qs);
    for y in 0 .. 200 {
        for x in 0 .. 320 {
            let i = y * 320 + x;
            if (40 ..= 200).contains(&x) && (50 .. 150).contains(&y) {
                assert_eq!(gfx.page(3)[i], gfx.page(0)[i], "({},{})", x, y);
            } else {
                assert_eq!(gfx.page(3)[i], 0x0f, "({},{})", x, y);
            }
        }
    }
}

#[test]
fn page_copy_onto_page0_is_noop() {
    let mut gfx = Graphics::new();
    pattern(&mut gfx, 0);
    let before = gfx.page(0).to_vec();
    gfx.draw_polygon(COLOR_PAGE_COPY, &full_page());
    gfx.draw_point(3, 3, COLOR_PAGE_COPY);
    assert_eq!(gfx.page(0), &before[..]);
}

#[test]
fn opaque_fill_is_idempotent() {
    let mut once = Graphics::new();
    let mut twice = Graphics::new();
    pattern(&mut once, 2);
    pattern(&mut twice, 2);
    once.draw_polygon(7, &diamond());
    twice.draw_polygon(7, &diamond());
    twice.draw_polygon(7, &diamond());
    assert_eq!(once.page(2), twice.page(2));
}

#[test]
fn point_matches_one_pixel_polygon() {
    // Strip one pixel wide and one scanline tall at (5,2)
    let qs = QuadStrip::from_slice(&[(5,2),(5,3),(5,3),(5,2)]);
    for &code in [3u8, COLOR_TRANSLUCENT, COLOR_PAGE_COPY].iter() {
        let mut a = Graphics::with_config(GfxConfig::native(8,4));
        let mut b = Graphics::with_config(GfxConfig::native(8,4));
        for gfx in [&mut a, &mut b].iter_mut() {
            gfx.fill_page(0, 0x06);
            gfx.fill_page(2, 0x21);
        }
        a.draw_polygon(code, &qs);
        b.draw_point(5, 2, code);
        assert_eq!(a.page(2), b.page(2), "code {:#x}", code);
        assert_eq!(a.page(2).iter().filter(|&&v| v != 0x21).count(), 1);
    }
}

#[test]
fn diamond_is_symmetric() {
    let mut gfx = Graphics::new();
    gfx.draw_polygon(1, &diamond());
    let page = gfx.page(2);
    for y in 20 .. 180 {
        let row = &page[y * 320 .. (y + 1) * 320];
        let xs: Vec<usize> = (0 .. 320).filter(|&x| row[x] == 1).collect();
        assert!(! xs.is_empty(), "row {}", y);
        let (l, r) = (xs[0], xs[xs.len() - 1]);
        assert_eq!(xs.len(), r - l + 1, "row {} has gaps", y);
        assert!(l <= 160 && r >= 160, "row {} misses the axis", y);
    }
    assert!(page[.. 20 * 320].iter().all(|&v| v == 0));
    assert!(page[180 * 320 ..].iter().all(|&v| v == 0));
}
