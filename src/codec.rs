//! Sample wire format.
//!
//! Both the data registers and the FIFO carry an 11-bit magnitude field. The
//! data registers mark negative values with bit 15. A FIFO word uses bits 15:14
//! for the axis tag and marks negative values with bit 13 once the tag is
//! masked away.
//!
//! Negative magnitudes are recovered by inverting the 11-bit field and
//! subtracting one. [`encode_twos_complement_11`] is the exact inverse.

use crate::accel::Range;

/// One decoded sample: milli-g for X/Y/Z, raw units for temperature.
pub type Sample = i32;

/// Logical channel carried by a FIFO word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
  X = 0,
  Y = 1,
  Z = 2,
  Temperature = 3,
}

impl Axis {
  pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::Temperature];
}

impl From<Axis> for u8 {
  fn from(value: Axis) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for Axis {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Axis::X),
      1 => Ok(Axis::Y),
      2 => Ok(Axis::Z),
      3 => Ok(Axis::Temperature),
      _ => Err(()),
    }
  }
}

const MAGNITUDE_MASK: u16 = 0x07FF;
const WORD_SIGN_BIT: u16 = 1 << 15;
const FIFO_TAG_SHIFT: u32 = 14;
const FIFO_BODY_MASK: u16 = 0x3FFF;
const FIFO_SIGN_BIT: u16 = 1 << 13;

#[inline]
fn negate_field(raw: u16) -> u16 {
  (raw ^ MAGNITUDE_MASK).wrapping_sub(1) & MAGNITUDE_MASK
}

/// Axis encoded in the top two bits of a FIFO word.
#[inline]
pub const fn decode_axis_tag(word: u16) -> Axis {
  match word >> FIFO_TAG_SHIFT {
    0 => Axis::X,
    1 => Axis::Y,
    2 => Axis::Z,
    _ => Axis::Temperature,
  }
}

/// Split a data-register word into `(negative, magnitude)`.
///
/// Bit 15 is the sign. Bits above the 11-bit field are ignored.
pub fn decode_twos_complement_11(raw: u16) -> (bool, u16) {
  if raw & WORD_SIGN_BIT != 0 {
    (true, negate_field(raw))
  } else {
    (false, raw & MAGNITUDE_MASK)
  }
}

/// Split a FIFO word into `(negative, magnitude)`, ignoring the axis tag.
pub fn decode_fifo_body(word: u16) -> (bool, u16) {
  let body = word & FIFO_BODY_MASK;
  if body & FIFO_SIGN_BIT != 0 {
    (true, negate_field(body))
  } else {
    (false, body & MAGNITUDE_MASK)
  }
}

/// Inverse of [`decode_twos_complement_11`] for values in `-1024..=1023`.
///
/// Values outside that window are truncated to the 11-bit field.
pub fn encode_twos_complement_11(value: i32) -> u16 {
  if value < 0 {
    let magnitude = value.unsigned_abs() as u16;
    WORD_SIGN_BIT | ((magnitude.wrapping_add(1) ^ MAGNITUDE_MASK) & MAGNITUDE_MASK)
  } else {
    value as u16 & MAGNITUDE_MASK
  }
}

/// Apply a decoded sign to a magnitude.
#[inline]
pub fn signed(negative: bool, magnitude: u16) -> Sample {
  let m = magnitude as Sample;
  if negative {
    -m
  } else {
    m
  }
}

/// Decode a data-register word straight to a signed value.
#[inline]
pub fn decode_sample(raw: u16) -> Sample {
  let (negative, magnitude) = decode_twos_complement_11(raw);
  signed(negative, magnitude)
}

/// Convert a raw magnitude to milli-g and apply the axis zero offset.
///
/// `value * 1000 / (2000 / range) + zero`. Multiplying first keeps the integer
/// division from discarding resolution. The zero is added saturating, so an
/// out-of-range offset pins the result at `i32::MIN` or `i32::MAX`.
pub fn scale_sample(magnitude: u16, negative: bool, range: Range, zero: Sample) -> Sample {
  (signed(negative, magnitude) * 1000 / range.divisor()).saturating_add(zero)
}
