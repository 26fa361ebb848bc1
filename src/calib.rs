//! Zero-offset calibration.
//!
//! Each scaled X/Y/Z sample has a per-axis zero added to it. [`calibrate_zero`]
//! recomputes those zeros from readings taken at rest, with Z carrying 1 g.
//!
//! [`calibrate_zero`]: crate::Adxl362::calibrate_zero

use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};
use micromath::vector::Vector3d;

use crate::{codec::Axis, defs::*, Adxl362, Error};

impl<S, D> Adxl362<S, D> {
  /// Current zero offsets in milli-g.
  pub fn zeros(&self) -> Vector3d<i32> {
    self.zero
  }

  /// Replace the zero offsets, e.g. with values saved from an earlier
  /// calibration.
  pub fn set_zeros(&mut self, zero: Vector3d<i32>) {
    self.zero = zero;
  }

  /// Zero applied to `axis`; temperature has none.
  pub(crate) fn zero_for(&self, axis: Axis) -> Option<i32> {
    match axis {
      Axis::X => Some(self.zero.x),
      Axis::Y => Some(self.zero.y),
      Axis::Z => Some(self.zero.z),
      Axis::Temperature => None,
    }
  }
}

impl<S, D, E> Adxl362<S, D>
where
  S: SpiDevice<Error = E>,
  D: DelayNs,
{
  /// Recompute the zeros so that a sensor lying flat reads X = Y = 0 and
  /// Z = 1000 milli-g.
  ///
  /// Averages 100 rounds of X, Y, Z reads (truncating division) and shifts
  /// each zero by the difference between that average and the target. The
  /// device must be at rest while this runs. On a bus error the previous
  /// zeros are kept. Sums are taken in 64 bits and the new zeros saturate at
  /// the `i32` bounds.
  pub async fn calibrate_zero(&mut self) -> Result<Vector3d<i32>, Error<E>> {
    let mut sum = [0i64; 3];
    for _ in 0..CALIBRATION_ROUNDS {
      sum[0] += i64::from(self.get_x().await?);
      sum[1] += i64::from(self.get_y().await?);
      sum[2] += i64::from(self.get_z().await?);
    }
    let rounds = i64::from(CALIBRATION_ROUNDS);
    let shift = |target: i32, total: i64, zero: i32| {
      let avg = total / rounds;
      saturate(i64::from(target) - (avg - i64::from(zero)))
    };

    self.zero = Vector3d {
      x: shift(REST_TARGET_XY, sum[0], self.zero.x),
      y: shift(REST_TARGET_XY, sum[1], self.zero.y),
      z: shift(REST_TARGET_Z, sum[2], self.zero.z),
    };
    debug!("zeros calibrated: x={} y={} z={}", self.zero.x, self.zero.y, self.zero.z);
    Ok(self.zero)
  }
}

fn saturate(v: i64) -> i32 {
  v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
