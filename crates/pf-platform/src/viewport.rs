use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use pf_core::ports::ViewportPort;
use tracing::trace;

/// Window size as last reported by the host.
///
/// The host calls [`ObservedViewport::resize`] from its resize listener;
/// readers always see the latest pair.
#[derive(Debug)]
pub struct ObservedViewport {
    width_px: AtomicU32,
    height_bits: AtomicU64,
}

impl ObservedViewport {
    pub const DEFAULT_WIDTH_PX: u32 = 1280;
    pub const DEFAULT_HEIGHT_PX: f64 = 800.0;

    pub fn new(width_px: u32, height_px: f64) -> Self {
        Self {
            width_px: AtomicU32::new(width_px),
            height_bits: AtomicU64::new(height_px.to_bits()),
        }
    }

    pub fn resize(&self, width_px: u32, height_px: f64) {
        self.width_px.store(width_px, Ordering::Relaxed);
        self.height_bits.store(height_px.to_bits(), Ordering::Relaxed);
        trace!(width_px, height_px, "viewport resized");
    }
}

impl Default for ObservedViewport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH_PX, Self::DEFAULT_HEIGHT_PX)
    }
}

impl ViewportPort for ObservedViewport {
    fn width_px(&self) -> u32 {
        self.width_px.load(Ordering::Relaxed)
    }

    fn height_px(&self) -> f64 {
        f64::from_bits(self.height_bits.load(Ordering::Relaxed))
    }
}
