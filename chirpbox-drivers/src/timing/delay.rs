//! Blocking delay adapter

use chirpbox_core::traits::Delay;
use embedded_hal::delay::DelayNs;

/// [`Delay`] backed by any `embedded-hal` blocking delay
pub struct HalDelay<D> {
    inner: D,
}

impl<D: DelayNs> HalDelay<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: DelayNs> Delay for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.inner.delay_ms(ms);
    }
}
