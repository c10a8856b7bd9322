use crate::catalog::ViewportMode;

/// Media-query style view of the current window.
pub trait ViewportPort: Send + Sync {
    fn width_px(&self) -> u32;
    fn height_px(&self) -> f64;

    /// Evaluated fresh on every call so a resize across the breakpoint
    /// takes effect immediately.
    fn mode(&self, breakpoint_px: u32) -> ViewportMode {
        ViewportMode::from_width(self.width_px(), breakpoint_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::Sequence;

    mock! {
        Viewport {}
        impl ViewportPort for Viewport {
            fn width_px(&self) -> u32;
            fn height_px(&self) -> f64;
        }
    }

    #[test]
    fn mode_reads_width_on_every_call() {
        let mut viewport = MockViewport::new();
        let mut seq = Sequence::new();
        viewport
            .expect_width_px()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(1024u32);
        viewport
            .expect_width_px()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(600u32);

        assert_eq!(viewport.mode(768), ViewportMode::Desktop);
        assert_eq!(viewport.mode(768), ViewportMode::Mobile);
    }
}
