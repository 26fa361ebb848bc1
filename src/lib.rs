#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
//!
//! ## Design Principles
//!
//! - **Bit-exact**: Samples are decoded exactly as the device packs them
//!   (11-bit field, sign bit 15 in data registers, sign bit 13 and a 2-bit
//!   axis tag in FIFO words)
//! - **Async-first**: Built on `embedded-hal-async` SPI device traits, so
//!   chip-select framing is owned by the bus implementation
//! - **No hidden failures**: Queue overflow and empty pops are reported as
//!   values, never panics
//!
//! ## Module Organization
//!
//! - [`accel`]: Single-sample reads and measurement range
//! - [`calib`]: Zero-offset calibration
//! - [`codec`]: Wire format of data registers and FIFO words
//! - [`fifo`]: FIFO configuration and draining into per-axis queues
//! - [`queue`]: Fixed-capacity per-axis sample queue
//! - [`io`]: Raw register access and identification
//!
//! ## Basic Usage
//!
//! ```no_run
//! # async fn example<S, D>(spi: S, delay: D) -> Result<(), adxl362::Error<S::Error>>
//! # where S: embedded_hal_async::spi::SpiDevice, D: embedded_hal_async::delay::DelayNs {
//! use adxl362::{Adxl362, Axis};
//!
//! let mut acc = Adxl362::new(spi, delay);
//! acc.begin().await?;
//! acc.init_fifo().await?;
//!
//! let z = acc.get_z().await?;
//!
//! acc.drain_fifo().await?;
//! let mut xs = [0; 512];
//! let n = acc.queue_mut(Axis::X).drain_into(&mut xs);
//! # let _ = (z, n);
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod fmt;

pub mod accel;
pub mod calib;
pub mod codec;
mod defs;
pub mod fifo;
pub mod io;
pub(crate) mod rw;
pub mod queue;
mod types;

use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};
use micromath::vector::Vector3d;

pub use accel::Range;
pub use codec::{Axis, Sample};
use defs::*;
pub use fifo::{DrainReport, FifoControl, FifoMode};
pub use queue::{AxisQueue, AxisQueues, PushOutcome};
pub use types::*;

/// Driver error type.
///
/// Wraps the underlying SPI error. Queue overflow and empty reads are not
/// errors; see [`PushOutcome`] and [`AxisQueue::pop_front`].
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// SPI communication error
  Spi(E),
  /// Part ID mismatch (expected 0xF2)
  InvalidDeviceId(u8),
  /// Packed register conversion failed
  Data,
}

/// Driver configuration applied at construction and by [`Adxl362::init`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
  /// Initial calibration zero per axis, in milli-g.
  pub zero: Vector3d<i32>,
  /// Value written to FILTER_CTL during init (range and output data rate).
  pub filter_ctl: u8,
  /// Queue temperature-tagged FIFO words instead of discarding them.
  pub buffer_temperature: bool,
}

impl Default for Config {
  fn default() -> Self {
    Config { zero: Vector3d { x: -120, y: -175, z: -320 }, filter_ctl: SENSOR_RANGE_8, buffer_temperature: false }
  }
}

/// ADXL362 driver instance.
///
/// Owns the SPI device, the delay provider, the cached range, the per-axis
/// calibration zeros and the four sample queues. All access goes through
/// `&mut self`, so one instance is never used from two places at once.
///
/// # Type Parameters
///
/// - `S`: SPI device (must implement `embedded_hal_async::spi::SpiDevice`);
///   it asserts chip-select for the whole of each transaction
/// - `D`: Delay provider (must implement `embedded_hal_async::delay::DelayNs`)
pub struct Adxl362<S, D> {
  spi: S,
  delay: D,
  range: Range,
  zero: Vector3d<i32>,
  config_zero: Vector3d<i32>,
  filter_ctl: u8,
  buffer_temperature: bool,
  queues: AxisQueues,
}

impl<S, D> Adxl362<S, D> {
  /// Create a driver with [`Config::default`]. Does not touch the bus.
  pub fn new(spi: S, delay: D) -> Self {
    Self::with_config(spi, delay, Config::default())
  }

  /// Create a driver with an explicit configuration. Does not touch the bus.
  ///
  /// The cached range is 2g until [`update_range`](Self::update_range) or
  /// [`init`](Self::init) reads it back from the device.
  pub fn with_config(spi: S, delay: D, config: Config) -> Self {
    Self {
      spi,
      delay,
      range: Range::G2,
      zero: config.zero,
      config_zero: config.zero,
      filter_ctl: config.filter_ctl,
      buffer_temperature: config.buffer_temperature,
      queues: AxisQueues::new(),
    }
  }

  /// Give back the SPI device and delay provider.
  pub fn release(self) -> (S, D) {
    (self.spi, self.delay)
  }

  /// All four sample queues.
  pub fn queues(&self) -> &AxisQueues {
    &self.queues
  }

  /// All four sample queues, mutably.
  pub fn queues_mut(&mut self) -> &mut AxisQueues {
    &mut self.queues
  }

  /// Queue holding samples for `axis`.
  pub fn queue(&self, axis: Axis) -> &AxisQueue {
    self.queues.get(axis)
  }

  /// Queue holding samples for `axis`, mutably.
  pub fn queue_mut(&mut self, axis: Axis) -> &mut AxisQueue {
    self.queues.get_mut(axis)
  }
}

impl<S, D, E> Adxl362<S, D>
where
  S: SpiDevice<Error = E>,
  D: DelayNs,
{
  /// Restore the configured zeros, then soft reset and [`init`](Self::init).
  ///
  /// Zeros set by [`set_zeros`](Self::set_zeros) or
  /// [`calibrate_zero`](Self::calibrate_zero) do not survive this call.
  pub async fn begin(&mut self) -> Result<(), Error<E>> {
    self.zero = self.config_zero;
    self.soft_reset().await?;
    self.init().await
  }

  /// Write the soft reset key. Registers return to their power-on values.
  pub async fn soft_reset(&mut self) -> Result<(), Error<E>> {
    self.write_u8(Reg::SoftReset, SOFT_RESET_KEY).await
  }

  /// Program the measurement setup and refresh the cached range.
  ///
  /// Sets free-fall detection (600 mg for 30 ms, absolute inactivity on
  /// INT1), writes the configured FILTER_CTL value and starts measuring. Each
  /// write is preceded by a settling delay.
  pub async fn init(&mut self) -> Result<(), Error<E>> {
    let sequence = [
      (Reg::ThreshInactL, FREE_FALL_THRESH),
      (Reg::TimeInactL, FREE_FALL_TIME),
      (Reg::ActInactCtl, ABS_INACT_ENABLE),
      (Reg::ThreshInactH, INACT_ON_INT1),
      (Reg::FilterCtl, self.filter_ctl),
      (Reg::PowerCtl, BEGIN_MEASURE),
    ];
    for (reg, value) in sequence {
      self.delay.delay_ms(SETTLE_DELAY_MS).await;
      self.write_u8(reg, value).await?;
    }
    self.delay.delay_ms(SETTLE_DELAY_MS).await;

    let range = self.update_range().await?;
    debug!("adxl362 initialised, range {}g", range.g());
    Ok(())
  }

  /// Read the STATUS register.
  pub async fn get_status(&mut self) -> Result<Status, Error<E>> {
    self.read(Reg::Status).await
  }
}
