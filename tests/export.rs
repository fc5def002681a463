extern crate page_raster;

use page_raster::Gfx;
use page_raster::{Error, Graphics, GfxConfig, Palette, QuadStrip, Rgb8};

use std::fs;
use std::path::PathBuf;

fn tmp(name: &str) -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("tests");
    dir.push("tmp");
    fs::create_dir_all(&dir).unwrap();
    dir.push(name);
    dir
}

fn palette() -> Palette {
    let mut colors = [Rgb8::black(); 16];
    colors[1] = Rgb8::new(200, 30, 10);
    colors[9] = Rgb8::new(10, 30, 200);
    Palette::new(colors)
}

fn scene() -> Graphics {
    let mut gfx = Graphics::with_config(GfxConfig::native(16,8));
    gfx.set_palette(palette());
    gfx.draw_polygon(1, &QuadStrip::from_slice(&[(11,2),(11,6),(4,6),(4,2)]));
    gfx.draw_polygon(0x10, &QuadStrip::from_slice(&[(7,0),(7,8),(6,8),(6,0)]));
    gfx
}

#[test]
fn page_round_trip_png() {
    let gfx = scene();
    let out = tmp("export_round_trip.png");
    gfx.to_file(2, &out).unwrap();

    let (data, w, h) = page_raster::export::read_rgb(&out).unwrap();
    assert_eq!((w, h), (16, 8));
    assert_eq!(data, gfx.page_to_rgb(2));
    let x = 3 * (4 * 16 + 6);
    assert_eq!(&data[x .. x + 3], &[10, 30, 200]);
    let x = 3 * (4 * 16 + 4);
    assert_eq!(&data[x .. x + 3], &[200, 30, 10]);

    assert!(gfx.matches_file(2, &out).unwrap());
    assert!(! gfx.matches_file(0, &out).unwrap());
}

#[test]
fn page_diff_size_mismatch() {
    let gfx = scene();
    let out = tmp("export_size_mismatch.png");
    gfx.to_file(2, &out).unwrap();
    let other = Graphics::with_config(GfxConfig::native(8,8));
    assert!(! other.matches_file(2, &out).unwrap());
}

#[test]
fn failed_export_is_reported() {
    let gfx = scene();
    match gfx.to_file(2, tmp("export_unknown.xyz")) {
        Err(Error::Io(_)) => {},
        r => panic!("unexpected result {:?}", r),
    }
    match gfx.to_file(2, tmp("no_such_dir").join("page.png")) {
        Err(Error::Io(_)) => {},
        r => panic!("unexpected result {:?}", r),
    }
    match gfx.matches_file(2, tmp("export_missing.png")) {
        Err(Error::Image(_)) => {},
        r => panic!("unexpected result {:?}", r),
    }
}
