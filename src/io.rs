//! Raw register access and device identification.

use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};

use crate::{defs::*, Adxl362, DeviceIds, Error};

impl<S, D, E> Adxl362<S, D>
where
  S: SpiDevice<Error = E>,
  D: DelayNs,
{
  /// Read any register by address.
  pub async fn read_register(&mut self, addr: u8) -> Result<u8, Error<E>> {
    let mut b = [0u8; 1];
    self.read_bytes(addr, &mut b).await?;
    Ok(b[0])
  }

  /// Write any register by address. No check is made that it is writable.
  pub async fn write_register(&mut self, addr: u8, value: u8) -> Result<(), Error<E>> {
    self.write_bytes(addr, &[value]).await
  }

  /// Read the part ID register (0xF2 for the ADXL362).
  pub async fn get_part_id(&mut self) -> Result<u8, Error<E>> {
    self.read_u8(Reg::PartId).await
  }

  /// Read the three identification registers in one burst.
  pub async fn get_device_ids(&mut self) -> Result<DeviceIds, Error<E>> {
    let mut b = [0u8; 3];
    self.read_bytes(Reg::DevIdAd.into(), &mut b).await?;
    Ok(DeviceIds { ad: b[0], mst: b[1], part: b[2] })
  }

  /// Check that an ADXL362 answers on the bus.
  pub async fn verify_device(&mut self) -> Result<(), Error<E>> {
    let ids = self.get_device_ids().await?;
    if ids.ad != ADXL362_DEVID_AD || ids.mst != ADXL362_DEVID_MST || ids.part != ADXL362_PART_ID {
      error!("unexpected device ids: ad={} mst={} part={}", ids.ad, ids.mst, ids.part);
      return Err(Error::InvalidDeviceId(ids.part));
    }
    Ok(())
  }
}
