/// STATUS register.
///
/// Bit 0 is `data_ready`, bit 7 is `err_user_regs`.
///
/// ```text
// Closed by the bit layout fence that packbits appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct Status {
  pub data_ready: bool,
  pub fifo_ready: bool,
  pub fifo_watermark: bool,
  pub fifo_overrun: bool,
  pub activity: bool,
  pub inactivity: bool,
  pub awake: bool,
  /// Configuration registers changed since last read (SEU detection).
  pub err_user_regs: bool,
}

/// Identification registers, as read by
/// [`get_device_ids`](crate::Adxl362::get_device_ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIds {
  /// Analog Devices ID, 0xAD.
  pub ad: u8,
  /// MEMS ID, 0x1D.
  pub mst: u8,
  /// Part ID, 0xF2.
  pub part: u8,
}
