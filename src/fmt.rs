//! Crate-internal logging macros.
//!
//! Forwards to `defmt` or `log` depending on the enabled feature. With neither
//! enabled the macros compile to nothing but still borrow their arguments, so a
//! value computed only for a log line does not trigger unused warnings.
#![allow(unused_macros)]

macro_rules! trace {
  ($s:literal $(, $x:expr)* $(,)?) => {
    {
      #[cfg(feature = "defmt")]
      ::defmt::trace!($s $(, $x)*);
      #[cfg(all(feature = "log", not(feature = "defmt")))]
      ::log::trace!($s $(, $x)*);
      #[cfg(not(any(feature = "log", feature = "defmt")))]
      let _ = ($( & $x ),*);
    }
  };
}

macro_rules! debug {
  ($s:literal $(, $x:expr)* $(,)?) => {
    {
      #[cfg(feature = "defmt")]
      ::defmt::debug!($s $(, $x)*);
      #[cfg(all(feature = "log", not(feature = "defmt")))]
      ::log::debug!($s $(, $x)*);
      #[cfg(not(any(feature = "log", feature = "defmt")))]
      let _ = ($( & $x ),*);
    }
  };
}

macro_rules! warn {
  ($s:literal $(, $x:expr)* $(,)?) => {
    {
      #[cfg(feature = "defmt")]
      ::defmt::warn!($s $(, $x)*);
      #[cfg(all(feature = "log", not(feature = "defmt")))]
      ::log::warn!($s $(, $x)*);
      #[cfg(not(any(feature = "log", feature = "defmt")))]
      let _ = ($( & $x ),*);
    }
  };
}

macro_rules! error {
  ($s:literal $(, $x:expr)* $(,)?) => {
    {
      #[cfg(feature = "defmt")]
      ::defmt::error!($s $(, $x)*);
      #[cfg(all(feature = "log", not(feature = "defmt")))]
      ::log::error!($s $(, $x)*);
      #[cfg(not(any(feature = "log", feature = "defmt")))]
      let _ = ($( & $x ),*);
    }
  };
}
