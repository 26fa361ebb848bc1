#![allow(dead_code)]

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Reg {
  DevIdAd = 0x00,
  DevIdMst = 0x01,
  PartId = 0x02,
  RevId = 0x03,
  XData = 0x08,
  YData = 0x09,
  ZData = 0x0A,
  Status = 0x0B,
  FifoEntriesL = 0x0C,
  FifoEntriesH = 0x0D,
  XDataL = 0x0E,
  XDataH = 0x0F,
  YDataL = 0x10,
  YDataH = 0x11,
  ZDataL = 0x12,
  ZDataH = 0x13,
  TempL = 0x14,
  TempH = 0x15,
  SoftReset = 0x1F,
  ThreshActL = 0x20,
  ThreshActH = 0x21,
  TimeAct = 0x22,
  ThreshInactL = 0x23,
  ThreshInactH = 0x24,
  TimeInactL = 0x25,
  TimeInactH = 0x26,
  ActInactCtl = 0x27,
  FifoControl = 0x28,
  FifoSamples = 0x29,
  IntMap1 = 0x2A,
  IntMap2 = 0x2B,
  FilterCtl = 0x2C,
  PowerCtl = 0x2D,
  SelfTest = 0x2E,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

/// Instruction byte that opens every SPI transaction.
#[repr(u8)]
pub(crate) enum Command {
  WriteReg = 0x0A,
  ReadReg = 0x0B,
  ReadFifo = 0x0D,
}

impl From<Command> for u8 {
  #[inline]
  fn from(c: Command) -> Self {
    c as u8
  }
}

// Identification
pub(crate) const ADXL362_DEVID_AD: u8 = 0xAD;
pub(crate) const ADXL362_DEVID_MST: u8 = 0x1D;
pub(crate) const ADXL362_PART_ID: u8 = 0xF2;

// Writing 'R' to SOFT_RESET resets the device.
pub(crate) const SOFT_RESET_KEY: u8 = b'R';

// Init sequence
pub(crate) const FREE_FALL_THRESH: u8 = 0x96; // 600 mg
pub(crate) const FREE_FALL_TIME: u8 = 0x03; // 30 ms
pub(crate) const ABS_INACT_ENABLE: u8 = 0x0C;
pub(crate) const INACT_ON_INT1: u8 = 0x20;
pub(crate) const SENSOR_RANGE_8: u8 = 0x83; // 8g, 100 Hz ODR
pub(crate) const SENSOR_RANGE_4: u8 = 0x43; // 4g, 100 Hz ODR
pub(crate) const SENSOR_RANGE_2: u8 = 0x03; // 2g, 100 Hz ODR
pub(crate) const BEGIN_MEASURE: u8 = 0x22;
pub(crate) const SETTLE_DELAY_MS: u32 = 10;

// FIFO
pub(crate) const DATA_READY_ON_INT1: u8 = 0x01;
pub(crate) const FIFO_SAMPLES_DEFAULT: u8 = 0xFF;
/// Depth of the on-chip FIFO in 16-bit words.
pub(crate) const FIFO_DEPTH_WORDS: usize = 512;

// FILTER_CTL range field
pub(crate) const RANGE_MASK: u8 = 0xC0;
pub(crate) const RANGE_BIT_4G: u8 = 0x40;
pub(crate) const RANGE_BIT_8G: u8 = 0x80;

// Calibration
pub(crate) const CALIBRATION_ROUNDS: i32 = 100;
pub(crate) const REST_TARGET_XY: i32 = 0;
pub(crate) const REST_TARGET_Z: i32 = 1000; // milli-g, gravity on Z
