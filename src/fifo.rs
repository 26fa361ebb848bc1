//! FIFO configuration and draining.
//!
//! The ADXL362 FIFO holds up to 512 tagged 16-bit words. A drain reads the
//! entry count, pulls that many words in one chip-select frame and routes each
//! decoded sample to the queue for its axis.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(mut acc: adxl362::Adxl362<impl embedded_hal_async::spi::SpiDevice, impl embedded_hal_async::delay::DelayNs>) {
//! use adxl362::Axis;
//!
//! // Stream mode, 511-sample watermark, data-ready on INT1
//! acc.init_fifo().await.unwrap();
//!
//! let report = acc.drain_fifo().await.unwrap();
//! let mut ys = [0; 512];
//! let n = acc.queue_mut(Axis::Y).drain_into(&mut ys);
//! assert_eq!(n, report.y);
//! # }
//! ```

use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};
use micromath::vector::Vector3d;

use super::{
  accel::Range,
  codec::{self, Axis},
  defs::*,
  queue::{AxisQueues, PushOutcome},
  Adxl362, Error,
};

impl<S, D, E> Adxl362<S, D>
where
  S: SpiDevice<Error = E>,
  D: DelayNs,
{
  /// Route data-ready to INT1 and start the FIFO in stream mode with a
  /// 511-sample watermark.
  pub async fn init_fifo(&mut self) -> Result<(), Error<E>> {
    self.write_u8(Reg::IntMap1, DATA_READY_ON_INT1).await?;
    self.set_fifo_control(FifoControl::default()).await?;
    self.write_u8(Reg::FifoSamples, FIFO_SAMPLES_DEFAULT).await
  }

  pub async fn get_fifo_control(&mut self) -> Result<FifoControl, Error<E>> {
    self.read(Reg::FifoControl).await
  }

  pub async fn set_fifo_control(&mut self, ctl: FifoControl) -> Result<(), Error<E>> {
    self.write(Reg::FifoControl, ctl).await
  }

  /// Set the FIFO watermark in samples (0..=511).
  ///
  /// Bit 8 of the watermark lives in FIFO_CONTROL, so this is a
  /// read-modify-write of that register followed by FIFO_SAMPLES.
  pub async fn set_fifo_samples(&mut self, level: u16) -> Result<(), Error<E>> {
    let level = core::cmp::min(level, (FIFO_DEPTH_WORDS - 1) as u16);
    let mut ctl = self.get_fifo_control().await?;
    ctl.above_half = level & 0x100 != 0;
    self.set_fifo_control(ctl).await?;
    self.write_u8(Reg::FifoSamples, level as u8).await
  }

  /// Number of words waiting in the FIFO.
  ///
  /// The entry registers are decoded through the same signed 11-bit path as
  /// samples, so a corrupted read can come back negative.
  pub async fn get_fifo_entries(&mut self) -> Result<i32, Error<E>> {
    let word = self.read_pair(Reg::FifoEntriesH, Reg::FifoEntriesL).await?;
    Ok(codec::decode_sample(word))
  }

  /// Drain the device FIFO into the axis queues.
  ///
  /// Reads every pending word in one burst. X/Y/Z samples are scaled with the
  /// cached range and their axis zero. Temperature words are counted but
  /// only queued when [`Config::buffer_temperature`](crate::Config) is set.
  /// A bus error during the burst leaves the queues untouched.
  pub async fn drain_fifo(&mut self) -> Result<DrainReport, Error<E>> {
    let entries = self.get_fifo_entries().await?;
    if entries <= 0 {
      if entries < 0 {
        warn!("FIFO entry count decoded as {}, skipping drain", entries);
      }
      return Ok(DrainReport::default());
    }

    let mut count = entries as usize;
    if count > FIFO_DEPTH_WORDS {
      warn!("FIFO reports {} entries, reading only {}", count, FIFO_DEPTH_WORDS);
      count = FIFO_DEPTH_WORDS;
    }

    let mut buf = [0u8; FIFO_DEPTH_WORDS * 2];
    let bytes = &mut buf[..count * 2];
    self.read_fifo_burst(bytes).await?;

    let words = bytes.chunks_exact(2).map(|w| u16::from_le_bytes([w[0], w[1]]));
    let report = route_words(words, &mut self.queues, self.range, self.zero, self.buffer_temperature);

    if report.overwritten > 0 {
      warn!("{} FIFO samples overwrote a full queue", report.overwritten);
    }
    trace!("drained {} FIFO words (x={} y={} z={} t={})", report.words(), report.x, report.y, report.z, report.temperature);
    Ok(report)
  }
}

/// Decode FIFO words and push each sample onto the queue for its axis.
///
/// X/Y/Z samples are scaled with `range` and the matching component of
/// `zero`. Temperature samples are pushed unscaled to the temperature queue
/// when `buffer_temperature` is set and dropped otherwise.
pub fn route_words<const N: usize>(
  words: impl IntoIterator<Item = u16>,
  queues: &mut AxisQueues<N>,
  range: Range,
  zero: Vector3d<i32>,
  buffer_temperature: bool,
) -> DrainReport {
  let mut report = DrainReport::default();
  for word in words {
    let axis = codec::decode_axis_tag(word);
    let (negative, magnitude) = codec::decode_fifo_body(word);
    let sample = match axis {
      Axis::X => {
        report.x += 1;
        codec::scale_sample(magnitude, negative, range, zero.x)
      }
      Axis::Y => {
        report.y += 1;
        codec::scale_sample(magnitude, negative, range, zero.y)
      }
      Axis::Z => {
        report.z += 1;
        codec::scale_sample(magnitude, negative, range, zero.z)
      }
      Axis::Temperature => {
        report.temperature += 1;
        if !buffer_temperature {
          continue;
        }
        codec::signed(negative, magnitude)
      }
    };
    if queues.get_mut(axis).push_back(sample) == PushOutcome::OverwroteLast {
      report.overwritten += 1;
    }
  }
  report
}

/// Outcome of one FIFO drain, counted by axis tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrainReport {
  pub x: usize,
  pub y: usize,
  pub z: usize,
  /// Temperature-tagged words seen, queued or not.
  pub temperature: usize,
  /// Pushes that landed on an already saturated queue.
  pub overwritten: usize,
}

impl DrainReport {
  /// Total words read from the FIFO.
  pub fn words(&self) -> usize {
    self.x + self.y + self.z + self.temperature
  }
}

/// FIFO operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
  Disabled = 0x0,
  /// Keep the oldest samples once full
  OldestSaved = 0x1,
  /// Keep the newest samples once full
  Stream = 0x2,
  /// Keep samples around an activity trigger
  Triggered = 0x3,
}

impl From<FifoMode> for u8 {
  fn from(value: FifoMode) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for FifoMode {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x0 => Ok(FifoMode::Disabled),
      0x1 => Ok(FifoMode::OldestSaved),
      0x2 => Ok(FifoMode::Stream),
      0x3 => Ok(FifoMode::Triggered),
      _ => Err(()),
    }
  }
}

/// FIFO_CONTROL register.
///
/// The default is the value written by [`init_fifo`](crate::Adxl362::init_fifo):
/// stream mode, no temperature words, watermark bit 8 set.
///
/// ```text
// Closed by the bit layout fence that packbits appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct FifoControl {
  #[bits(2)]
  pub mode: FifoMode,
  /// Interleave temperature words with X/Y/Z.
  #[bits(1)]
  pub store_temperature: bool,
  /// Bit 8 of the FIFO_SAMPLES watermark.
  #[bits(1)]
  pub above_half: bool,
}

impl Default for FifoControl {
  fn default() -> Self {
    FifoControl { mode: FifoMode::Stream, store_temperature: false, above_half: true }
  }
}
