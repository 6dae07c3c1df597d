use crate::ConfigError;

/// The numeric value domain of a seek bar.
///
/// Construct it with [`Scale::new`], which rejects degenerate ranges and steps. With
/// `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ScaleFields"))]
pub struct Scale {
    min: f32,
    max: f32,
    step: f32,
}

impl Scale {
    pub const DEFAULT_STEP: f32 = 5.0;

    /// Validates and creates a scale.
    ///
    /// `step` must be positive and no larger than `max - min`, and `max` must be greater than
    /// `min`. All three values must be finite.
    pub fn new(min: f32, max: f32, step: f32) -> Result<Self, ConfigError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(ConfigError::NonFiniteScale);
        }
        if step <= 0.0 {
            return Err(ConfigError::InvalidStep { step });
        }
        if max <= min {
            return Err(ConfigError::EmptyScale { min, max });
        }
        let range = max - min;
        if step > range {
            return Err(ConfigError::StepExceedsRange { step, range });
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

// Deserialized scales go through the same validation as `Scale::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ScaleFields {
    min: f32,
    max: f32,
    step: f32,
}

#[cfg(feature = "serde")]
impl TryFrom<ScaleFields> for Scale {
    type Error = ConfigError;

    fn try_from(f: ScaleFields) -> Result<Self, Self::Error> {
        Self::new(f.min, f.max, f.step)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: Self::DEFAULT_STEP,
        }
    }
}

/// The pixel interval thumb centers may occupy.
///
/// It is inset by half a thumb on both ends so a thumb never overflows the visual track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    pub pixel_min: f32,
    pub pixel_max: f32,
}

impl Track {
    pub fn new(pixel_min: f32, pixel_max: f32) -> Self {
        Self {
            pixel_min,
            pixel_max,
        }
    }

    /// Derives the track for a main-axis length and a half thumb extent.
    pub fn from_extent(track_length: f32, thumb_half: f32) -> Self {
        Self {
            pixel_min: thumb_half,
            pixel_max: track_length - thumb_half,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.pixel_min.is_finite() && self.pixel_max.is_finite() && self.pixel_max > self.pixel_min
    }

    pub fn width(&self) -> f32 {
        self.pixel_max - self.pixel_min
    }

    /// Limits `pixel` to the track. Never panics, even on a degenerate track.
    pub fn clamp(&self, pixel: f32) -> f32 {
        pixel.max(self.pixel_min).min(self.pixel_max)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Visual state of a single thumb, interpreted by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThumbVisual {
    #[default]
    Normal,
    Pressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeekEventKind {
    /// Fired once, after the thumbs are spread out on the first valid layout.
    Created,
    SeekStart,
    Seek,
    SeekStop,
}

/// A listener notification carrying the affected thumb and its current value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeekEvent {
    pub kind: SeekEventKind,
    pub index: usize,
    pub value: f32,
}

impl SeekEvent {
    pub fn new(kind: SeekEventKind, index: usize, value: f32) -> Self {
        Self { kind, index, value }
    }
}
