//! Saving pages as images
//!
//! Pages are expanded through a [Palette](../color/struct.Palette.html)
//! into RGB. The file format follows the file extension (png, pnm, bmp,
//! gif, jpeg).

use crate::buffer::Page;
use crate::color::Palette;
use crate::error::Error;

use std::path::Path;

/// Write `page` as an image using `palette`
///
/// Unknown file extensions and unwritable paths are reported as
/// `Error::Io`
pub fn write_page<P: AsRef<Path>>(page: &Page, palette: &Palette, filename: P) -> Result<(), Error> {
    let rgb = palette.expand(&page.data);
    image::save_buffer(filename, &rgb, page.width as u32, page.height as u32, image::RGB(8))?;
    Ok(())
}

/// Read an image as packed RGB bytes, width and height
pub fn read_rgb<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize), Error> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Compare `page`, expanded through `palette`, against an image file
///
/// Returns false on a size mismatch or if any pixel differs. Differing
/// pixels are printed to stdout.
pub fn page_diff<P: AsRef<Path>>(page: &Page, palette: &Palette, filename: P) -> Result<bool, Error> {
    let (data, w, h) = read_rgb(filename)?;
    if w != page.width || h != page.height {
        println!("size {}x{} != {}x{}", w, h, page.width, page.height);
        return Ok(false);
    }
    let mut same = true;
    for (i, (&v, px)) in page.data.iter().zip(data.chunks(3)).enumerate() {
        let c = palette.lookup(v);
        if &[c.r, c.g, c.b][..] != px {
            println!("({},{}) index {:#04x}: {:?} != {:?}", i % w, i / w, v, c, px);
            same = false;
        }
    }
    Ok(same)
}
