use alloc::sync::Arc;

use crate::seekbar::RangeSeekBar;
use crate::{ConfigError, Scale, SeekEvent};

/// A callback fired for every listener notification (`Created`, `SeekStart`, `Seek`,
/// `SeekStop`).
///
/// It runs synchronously, after the seek bar has applied the change that caused it.
pub type OnSeekCallback = Arc<dyn Fn(&RangeSeekBar, &SeekEvent) + Send + Sync>;

/// Configuration for [`crate::RangeSeekBar`].
///
/// The scale is a validated [`Scale`], so an options value is always usable as-is. Cloning is
/// cheap: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct RangeSeekOptions {
    pub thumb_count: usize,

    /// Keeps thumbs from crossing their neighbors (coinciding is allowed).
    pub ordered: bool,

    pub scale: Scale,

    /// When disabled, pointer events are not handled.
    pub enabled: bool,

    pub on_event: Option<OnSeekCallback>,
}

impl RangeSeekOptions {
    pub const DEFAULT_THUMB_COUNT: usize = 2;

    pub fn new(thumb_count: usize) -> Self {
        Self {
            thumb_count,
            ordered: true,
            scale: Scale::default(),
            enabled: true,
            on_event: None,
        }
    }

    pub fn with_thumb_count(mut self, thumb_count: usize) -> Self {
        self.thumb_count = thumb_count;
        self
    }

    pub fn with_ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Validates and sets the scale in one step.
    pub fn with_scale_range(mut self, min: f32, max: f32, step: f32) -> Result<Self, ConfigError> {
        self.scale = Scale::new(min, max, step)?;
        Ok(self)
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_event(
        mut self,
        on_event: Option<impl Fn(&RangeSeekBar, &SeekEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_event = on_event.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for RangeSeekOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THUMB_COUNT)
    }
}

impl core::fmt::Debug for RangeSeekOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RangeSeekOptions")
            .field("thumb_count", &self.thumb_count)
            .field("ordered", &self.ordered)
            .field("scale", &self.scale)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
