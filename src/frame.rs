/// Per-frame input handed to the collaborators and the pipeline driver.
/// Pixel data stays borrowed; the core never decodes or owns video.
pub struct Frame<'a> {
    pub image: &'a [u8],
    pub dims: (u32, u32),
    /// Wall-clock seconds at processing time. Dwell timing runs on this,
    /// not on frame counts.
    pub timestamp: f64,
}

impl<'a> Frame<'a> {
    pub fn new(image: &'a [u8], dims: (u32, u32), timestamp: f64) -> Self {
        Self {
            image,
            dims,
            timestamp,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.1
    }
}
