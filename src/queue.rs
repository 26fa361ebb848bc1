//! Fixed-capacity per-axis sample queue.
//!
//! The queue is index based and never wraps. Once `tail` reaches the last slot
//! further pushes keep overwriting that slot, so the oldest samples survive an
//! overflow and the newest are lost. Popping past the end resets the queue.
//!
//! # Examples
//!
//! ```
//! use adxl362::queue::{AxisQueue, PushOutcome};
//!
//! let mut q: AxisQueue<4> = AxisQueue::new();
//! assert_eq!(q.push_back(10), PushOutcome::Stored);
//! q.push_back(20);
//!
//! let mut out = [0; 4];
//! let n = q.drain_into(&mut out);
//! assert_eq!(&out[..n], &[10, 20]);
//! assert_eq!(q.size(), 0);
//! ```

use crate::codec::{Axis, Sample};

/// Capacity used for the driver's four axis queues.
pub const QUEUE_CAPACITY: usize = 512;

/// Fill value written into every slot on reset. Never returned by reads.
pub const SENTINEL: Sample = -999_999;

/// What happened to a pushed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PushOutcome {
  /// Appended after the previous sample.
  Stored,
  /// Queue was saturated; the final slot was overwritten.
  OverwroteLast,
}

/// Fixed-capacity sample queue for one axis.
#[derive(Debug, Clone)]
pub struct AxisQueue<const N: usize = QUEUE_CAPACITY> {
  data: [Sample; N],
  head: usize,
  tail: usize,
}

impl<const N: usize> Default for AxisQueue<N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize> AxisQueue<N> {
  const LAST: usize = N - 1;

  /// Empty queue with every slot set to [`SENTINEL`].
  pub const fn new() -> Self {
    Self { data: [SENTINEL; N], head: 0, tail: 0 }
  }

  /// Number of slots, `N`.
  pub const fn capacity(&self) -> usize {
    N
  }

  /// Number of slots filled since the last reset, counted from slot 0.
  ///
  /// Pops do not lower this; the count drops to zero only when the queue is
  /// reset, either explicitly or by popping past the last stored sample.
  pub fn size(&self) -> usize {
    self.tail
  }

  /// `true` when no unread sample remains.
  pub fn is_empty(&self) -> bool {
    self.head >= self.tail
  }

  /// Oldest unread sample, if any.
  pub fn front(&self) -> Option<Sample> {
    (self.tail > self.head).then(|| self.data[self.head])
  }

  /// Most recently stored sample since the last reset.
  pub fn back(&self) -> Option<Sample> {
    self.tail.checked_sub(1).map(|i| self.data[i])
  }

  /// Store `value` after the last sample, or over it once saturated.
  pub fn push_back(&mut self, value: Sample) -> PushOutcome {
    self.data[self.tail] = value;
    if self.tail != Self::LAST {
      self.tail += 1;
      PushOutcome::Stored
    } else {
      PushOutcome::OverwroteLast
    }
  }

  /// Remove the oldest unread sample.
  ///
  /// Returns `None` once the queue is exhausted, resetting it in the process.
  pub fn pop_front(&mut self) -> Option<Sample> {
    if self.tail > self.head {
      let v = self.data[self.head];
      self.head += 1;
      Some(v)
    } else {
      self.reset();
      None
    }
  }

  /// Pop samples into `out` while fewer than `size()` have been written,
  /// then reset.
  ///
  /// `size()` is re-read after every pop, so the first pop past the last
  /// stored sample writes one 0 and stops the drain. Writes at most
  /// `out.len()` values and returns how many were written. Anything that did
  /// not fit is discarded by the reset.
  pub fn drain_into(&mut self, out: &mut [Sample]) -> usize {
    let mut written = 0;
    while written < out.len() && written < self.size() {
      out[written] = self.pop_front().unwrap_or_default();
      written += 1;
    }
    self.reset();
    written
  }

  /// Owned variant of [`drain_into`](Self::drain_into).
  pub fn drain(&mut self) -> heapless::Vec<Sample, N> {
    let mut out = heapless::Vec::new();
    while out.len() < self.size() {
      // Cannot overflow: size() never exceeds N.
      let _ = out.push(self.pop_front().unwrap_or_default());
    }
    self.reset();
    out
  }

  /// Empty the queue and refill every slot with [`SENTINEL`].
  pub fn reset(&mut self) {
    self.data = [SENTINEL; N];
    self.head = 0;
    self.tail = 0;
  }
}

/// The four queues fed by a FIFO drain, one per [`Axis`].
#[derive(Debug, Clone, Default)]
pub struct AxisQueues<const N: usize = QUEUE_CAPACITY> {
  pub x: AxisQueue<N>,
  pub y: AxisQueue<N>,
  pub z: AxisQueue<N>,
  pub temperature: AxisQueue<N>,
}

impl<const N: usize> AxisQueues<N> {
  pub const fn new() -> Self {
    Self { x: AxisQueue::new(), y: AxisQueue::new(), z: AxisQueue::new(), temperature: AxisQueue::new() }
  }

  pub fn get(&self, axis: Axis) -> &AxisQueue<N> {
    match axis {
      Axis::X => &self.x,
      Axis::Y => &self.y,
      Axis::Z => &self.z,
      Axis::Temperature => &self.temperature,
    }
  }

  pub fn get_mut(&mut self, axis: Axis) -> &mut AxisQueue<N> {
    match axis {
      Axis::X => &mut self.x,
      Axis::Y => &mut self.y,
      Axis::Z => &mut self.z,
      Axis::Temperature => &mut self.temperature,
    }
  }

  pub fn reset_all(&mut self) {
    for axis in Axis::ALL {
      self.get_mut(axis).reset();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn size_tracks_pushes_below_capacity() {
    let mut q: AxisQueue<8> = AxisQueue::new();
    for k in 1..8 {
      assert_eq!(q.push_back(k as Sample), PushOutcome::Stored);
      assert_eq!(q.size(), k);
    }
  }

  #[test]
  fn saturates_at_last_slot() {
    let mut q: AxisQueue<8> = AxisQueue::new();
    for v in 0..7 {
      q.push_back(v);
    }
    assert_eq!(q.push_back(100), PushOutcome::OverwroteLast);
    assert_eq!(q.push_back(101), PushOutcome::OverwroteLast);
    assert_eq!(q.size(), 7);
    assert_eq!(q.data[7], 101);
    // Oldest samples are untouched.
    assert_eq!(q.front(), Some(0));
    assert_eq!(q.back(), Some(6));
  }

  #[test]
  fn full_size_queue_saturates_one_below_capacity() {
    let mut q: AxisQueue = AxisQueue::new();
    for v in 0..600 {
      q.push_back(v);
    }
    assert_eq!(q.capacity(), QUEUE_CAPACITY);
    assert_eq!(q.size(), QUEUE_CAPACITY - 1);
    assert_eq!(q.data[QUEUE_CAPACITY - 1], 599);
  }

  #[test]
  fn drain_into_yields_insertion_order() {
    let mut q: AxisQueue<16> = AxisQueue::new();
    for v in [5, -3, 42, 0, 7] {
      q.push_back(v);
    }
    let mut out = [SENTINEL; 16];
    assert_eq!(q.drain_into(&mut out), 5);
    assert_eq!(&out[..5], &[5, -3, 42, 0, 7]);
    assert_eq!(out[5], SENTINEL);
    assert_eq!(q.size(), 0);
    assert!(q.is_empty());
  }

  #[test]
  fn drain_into_short_buffer_discards_remainder() {
    let mut q: AxisQueue<16> = AxisQueue::new();
    for v in 1..=6 {
      q.push_back(v);
    }
    let mut out = [0; 4];
    assert_eq!(q.drain_into(&mut out), 4);
    assert_eq!(out, [1, 2, 3, 4]);
    assert_eq!(q.size(), 0);
  }

  #[test]
  fn drain_after_partial_pop_pads_with_zero() {
    let mut q: AxisQueue<16> = AxisQueue::new();
    for v in [10, 20, 30] {
      q.push_back(v);
    }
    assert_eq!(q.pop_front(), Some(10));
    // size() still counts from slot 0.
    assert_eq!(q.size(), 3);
    let out = q.drain();
    assert_eq!(out.as_slice(), &[20, 30, 0]);
    assert_eq!(q.size(), 0);
  }

  #[test]
  fn drain_after_two_pops_stops_at_reset() {
    let mut q: AxisQueue<16> = AxisQueue::new();
    for v in [10, 20, 30] {
      q.push_back(v);
    }
    assert_eq!(q.pop_front(), Some(10));
    assert_eq!(q.pop_front(), Some(20));

    let mut out = [77; 8];
    assert_eq!(q.drain_into(&mut out), 2);
    assert_eq!(out[..3], [30, 0, 77]);
    assert_eq!(q.size(), 0);
  }

  #[test]
  fn owned_drain_after_two_pops_stops_at_reset() {
    let mut q: AxisQueue<16> = AxisQueue::new();
    for v in [10, 20, 30] {
      q.push_back(v);
    }
    q.pop_front();
    q.pop_front();
    assert_eq!(q.drain().as_slice(), &[30, 0]);
  }

  #[test]
  fn pop_on_empty_resets_and_is_idempotent() {
    let mut q: AxisQueue<4> = AxisQueue::new();
    assert_eq!(q.pop_front(), None);
    assert_eq!(q.pop_front(), None);
    assert_eq!(q.size(), 0);
    assert_eq!(q.pop_front().unwrap_or_default(), 0);

    q.push_back(9);
    assert_eq!(q.pop_front(), Some(9));
    assert_eq!(q.size(), 1);
    assert_eq!(q.pop_front(), None);
    assert_eq!(q.size(), 0);
    assert_eq!(q.front(), None);
    assert_eq!(q.back(), None);
  }

  #[test]
  fn reset_fills_sentinel() {
    let mut q: AxisQueue<4> = AxisQueue::new();
    q.push_back(1);
    q.push_back(2);
    q.reset();
    assert_eq!(q.size(), 0);
    assert!(q.data.iter().all(|&v| v == SENTINEL));
  }

  #[test]
  fn queues_index_by_axis() {
    let mut qs: AxisQueues<4> = AxisQueues::new();
    qs.get_mut(Axis::Y).push_back(3);
    qs.get_mut(Axis::Temperature).push_back(4);
    assert_eq!(qs.y.front(), Some(3));
    assert_eq!(qs.get(Axis::Temperature).size(), 1);
    assert_eq!(qs.get(Axis::X).size(), 0);
    qs.reset_all();
    assert!(Axis::ALL.iter().all(|&a| qs.get(a).size() == 0));
  }
}
