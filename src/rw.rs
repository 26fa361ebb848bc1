use embedded_hal_async::{
  delay::DelayNs,
  spi::{Operation, SpiDevice},
};

use crate::{defs::*, Adxl362, Error};

impl<S, D, E> Adxl362<S, D>
where
  S: SpiDevice<Error = E>,
  D: DelayNs,
{
  pub(crate) async fn read<const N: usize, T: TryFrom<[u8; N]>>(&mut self, reg: Reg) -> Result<T, Error<E>> {
    let mut b = [0u8; N];
    self.read_bytes(reg.into(), &mut b).await?;
    T::try_from(b).map_err(|_| Error::Data)
  }

  pub(crate) async fn write<const N: usize, T: TryInto<[u8; N]>>(&mut self, reg: Reg, v: T) -> Result<(), Error<E>> {
    let b = v.try_into().map_err(|_| Error::Data)?;
    self.write_bytes(reg.into(), &b).await
  }

  pub(crate) async fn read_u8(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    let mut b = [0u8; 1];
    self.read_bytes(reg.into(), &mut b).await?;
    Ok(b[0])
  }

  pub(crate) async fn write_u8(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.write_bytes(reg.into(), &[value]).await
  }

  /// Two single-register reads, high byte first, combined big-end first.
  pub(crate) async fn read_pair(&mut self, high: Reg, low: Reg) -> Result<u16, Error<E>> {
    let h = self.read_u8(high).await?;
    let l = self.read_u8(low).await?;
    Ok(u16::from_be_bytes([h, l]))
  }

  /// One framed read starting at `addr`; the device auto-increments.
  pub(crate) async fn read_bytes(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
    let header: [u8; 2] = [Command::ReadReg.into(), addr];
    self
      .spi
      .transaction(&mut [Operation::Write(&header), Operation::Read(buf)])
      .await
      .map_err(Error::Spi)
  }

  pub(crate) async fn write_bytes(&mut self, addr: u8, data: &[u8]) -> Result<(), Error<E>> {
    let header: [u8; 2] = [Command::WriteReg.into(), addr];
    self
      .spi
      .transaction(&mut [Operation::Write(&header), Operation::Write(data)])
      .await
      .map_err(Error::Spi)
  }

  /// Read `buf.len()` FIFO bytes in a single chip-select frame.
  ///
  /// Each sample arrives LSB first. Chip-select stays asserted for the whole
  /// burst; releasing it mid-way would discard the partially read word.
  pub(crate) async fn read_fifo_burst(&mut self, buf: &mut [u8]) -> Result<(), Error<E>> {
    let header: [u8; 1] = [Command::ReadFifo.into()];
    self
      .spi
      .transaction(&mut [Operation::Write(&header), Operation::Read(buf)])
      .await
      .map_err(Error::Spi)
  }
}
