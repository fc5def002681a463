//! Fixed point math
//!
//! Edge interpolation uses a 16.16 encoding: the low 16 bits hold the
//! fraction, the high 16 bits the signed integer part.

use crate::strip::Point;

use std::ops::Add;
use std::ops::AddAssign;

/// Number of fractional bits
pub const FIXED_SHIFT : u32 = 16;
/// Mask of the fractional bits
pub const FIXED_MASK : i32 = (1 << FIXED_SHIFT) - 1;

/// 16.16 Fixed point value
///
/// Arithmetic wraps like the 32 bit registers the polygon data was
/// authored against.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Fixed(pub i32);

impl Fixed {
    /// Fixed point value with integer part `v` and no fraction
    ///
    ///     use page_raster::Fixed;
    ///
    ///     assert_eq!(Fixed::from_int(3).0, 0x3_0000);
    ///     assert_eq!(Fixed::from_int(-1).int(), -1);
    ///
    pub fn from_int(v: i16) -> Self {
        Fixed(i32::from(v).wrapping_shl(FIXED_SHIFT))
    }
    /// Integer part, bits 16..31
    pub fn int(self) -> i16 {
        (self.0 >> FIXED_SHIFT) as i16
    }
    /// Fractional part, bits 0..15
    pub fn frac(self) -> u16 {
        (self.0 & FIXED_MASK) as u16
    }
    /// Keep the integer part and replace the fraction with `frac`
    ///
    ///     use page_raster::Fixed;
    ///
    ///     let v = Fixed(0x0002_1234).with_frac(0x8000);
    ///     assert_eq!(v.0, 0x0002_8000);
    ///
    pub fn with_frac(self, frac: u16) -> Self {
        Fixed((self.0 & !FIXED_MASK) | i32::from(frac))
    }
}

impl Add for Fixed {
    type Output = Fixed;
    fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(other.0))
    }
}
impl AddAssign for Fixed {
    fn add_assign(&mut self, other: Fixed) {
        self.0 = self.0.wrapping_add(other.0);
    }
}

/// Horizontal step per scanline along the edge `p1` -> `p2`
///
/// Returns the 16.16 delta-x per scanline and the number of scanlines
/// the edge spans. A zero height edge divides by 1 so the step holds
/// the whole horizontal run.
///
///     use page_raster::{calc_step, Point};
///
///     let (step, dy) = calc_step(Point::new(0,0), Point::new(4,2));
///     assert_eq!(dy, 2);
///     assert_eq!(step.0, 2 << 16);
///
///     let (step, dy) = calc_step(Point::new(0,5), Point::new(3,5));
///     assert_eq!(dy, 0);
///     assert_eq!(step.0, 3 << 16);
///
pub fn calc_step(p1: Point, p2: Point) -> (Fixed, u16) {
    let dy = p2.y.wrapping_sub(p1.y) as u16;
    let delta = if dy == 0 { 1 } else { i32::from(dy) };
    let dx = i32::from(p2.x) - i32::from(p1.x);
    let step = dx.wrapping_shl(FIXED_SHIFT).wrapping_div(delta);
    (Fixed(step), dy)
}
