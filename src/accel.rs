//! Single-sample reads and measurement range.
//!
//! Each axis read is two single-register transactions (high byte, then low
//! byte) decoded with [`decode_twos_complement_11`](crate::codec::decode_twos_complement_11).
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(mut acc: adxl362::Adxl362<impl embedded_hal_async::spi::SpiDevice, impl embedded_hal_async::delay::DelayNs>) {
//! use adxl362::Range;
//!
//! acc.set_range(Range::G4).await.unwrap();
//! assert_eq!(acc.range(), Range::G4);
//!
//! // milli-g, zero offsets applied
//! let x = acc.get_x().await.unwrap();
//! let xyz = acc.get_xyz().await.unwrap();
//! # let _ = (x, xyz);
//! # }
//! ```

use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};
use micromath::vector::Vector3d;

use super::{
  codec::{self, Axis, Sample},
  defs::*,
  Adxl362, Error,
};

impl<S, D, E> Adxl362<S, D>
where
  S: SpiDevice<Error = E>,
  D: DelayNs,
{
  /// Read one axis.
  ///
  /// X/Y/Z are returned in milli-g with the axis zero applied. Temperature is
  /// returned as the raw signed register value.
  pub async fn read_axis(&mut self, axis: Axis) -> Result<Sample, Error<E>> {
    let word = self.read_axis_word(axis).await?;
    let (negative, magnitude) = codec::decode_twos_complement_11(word);
    Ok(match self.zero_for(axis) {
      Some(zero) => codec::scale_sample(magnitude, negative, self.range, zero),
      None => codec::signed(negative, magnitude),
    })
  }

  /// Read one axis as the unscaled signed register value.
  pub async fn read_axis_raw(&mut self, axis: Axis) -> Result<Sample, Error<E>> {
    let word = self.read_axis_word(axis).await?;
    Ok(codec::decode_sample(word))
  }

  async fn read_axis_word(&mut self, axis: Axis) -> Result<u16, Error<E>> {
    let (high, low) = match axis {
      Axis::X => (Reg::XDataH, Reg::XDataL),
      Axis::Y => (Reg::YDataH, Reg::YDataL),
      Axis::Z => (Reg::ZDataH, Reg::ZDataL),
      Axis::Temperature => (Reg::TempH, Reg::TempL),
    };
    self.read_pair(high, low).await
  }

  /// Scaled X sample in milli-g.
  pub async fn get_x(&mut self) -> Result<Sample, Error<E>> {
    self.read_axis(Axis::X).await
  }

  /// Scaled Y sample in milli-g.
  pub async fn get_y(&mut self) -> Result<Sample, Error<E>> {
    self.read_axis(Axis::Y).await
  }

  /// Scaled Z sample in milli-g.
  pub async fn get_z(&mut self) -> Result<Sample, Error<E>> {
    self.read_axis(Axis::Z).await
  }

  /// Raw temperature reading (device units, no scaling or offset).
  pub async fn get_temp(&mut self) -> Result<Sample, Error<E>> {
    self.read_axis(Axis::Temperature).await
  }

  /// Read X, Y and Z in that order.
  pub async fn get_xyz(&mut self) -> Result<Vector3d<i32>, Error<E>> {
    let x = self.get_x().await?;
    let y = self.get_y().await?;
    let z = self.get_z().await?;
    Ok(Vector3d { x, y, z })
  }

  /// Cached measurement range, as last read back from FILTER_CTL.
  pub fn range(&self) -> Range {
    self.range
  }

  /// Read FILTER_CTL and refresh the cached range.
  pub async fn update_range(&mut self) -> Result<Range, Error<E>> {
    let v = self.read_u8(Reg::FilterCtl).await?;
    self.range = Range::from_filter_ctl(v);
    Ok(self.range)
  }

  /// Change the measurement range with a read-modify-write of FILTER_CTL.
  ///
  /// Only the top two bits are touched. Selecting 8g sets bit 7 and leaves
  /// bit 6 as it was; the device reads both `0b10` and `0b11` as 8g.
  pub async fn set_range(&mut self, range: Range) -> Result<(), Error<E>> {
    let v = self.read_u8(Reg::FilterCtl).await?;
    self.write_u8(Reg::FilterCtl, range.apply(v)).await?;
    let now = self.update_range().await?;
    debug!("range set to {}g (FILTER_CTL was {})", now.g(), v);
    Ok(())
  }

  /// Like [`set_range`](Self::set_range) but takes the range in g.
  ///
  /// Anything other than 2, 4 or 8 writes FILTER_CTL back unchanged.
  pub async fn set_range_g(&mut self, g: u8) -> Result<(), Error<E>> {
    match Range::try_from(g) {
      Ok(range) => self.set_range(range).await,
      Err(()) => {
        warn!("ignoring unsupported range {}g", g);
        let v = self.read_u8(Reg::FilterCtl).await?;
        self.write_u8(Reg::FilterCtl, v).await?;
        self.update_range().await.map(|_| ())
      }
    }
  }
}

/// Accelerometer measurement range.
///
/// Higher ranges measure stronger accelerations at lower resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Range {
  /// ±2g range
  G2 = 2,
  /// ±4g range
  G4 = 4,
  /// ±8g range
  G8 = 8,
}

impl Range {
  /// Full scale in g.
  pub const fn g(self) -> u8 {
    self as u8
  }

  /// Raw counts per g, used as `raw * 1000 / divisor`.
  pub(crate) const fn divisor(self) -> i32 {
    2000 / self as i32
  }

  pub(crate) const fn from_filter_ctl(v: u8) -> Self {
    match v & RANGE_MASK {
      0xC0 | RANGE_BIT_8G => Range::G8,
      RANGE_BIT_4G => Range::G4,
      _ => Range::G2,
    }
  }

  /// New FILTER_CTL value selecting this range.
  pub(crate) const fn apply(self, v: u8) -> u8 {
    match self {
      Range::G2 => v & !RANGE_MASK,
      Range::G4 => (v & !RANGE_MASK) | RANGE_BIT_4G,
      Range::G8 => v | RANGE_BIT_8G,
    }
  }
}

impl From<Range> for u8 {
  fn from(value: Range) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for Range {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      2 => Ok(Range::G2),
      4 => Ok(Range::G4),
      8 => Ok(Range::G8),
      _ => Err(()),
    }
  }
}
