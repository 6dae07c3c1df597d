use crate::{Scale, Track};

/// Pure conversions between track pixels, scale values and step indexes.
///
/// Every conversion is an affine map of one interval onto another. The mapper does not guard
/// against degenerate intervals: [`Scale::new`] and [`Track::is_valid`] are checked before a
/// mapper is built by the seek bar.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleMapper {
    track: Track,
    scale: Scale,
}

impl ScaleMapper {
    pub fn new(track: Track, scale: Scale) -> Self {
        Self { track, scale }
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Number of whole steps that fit in the scale: `floor((max - min) / step)`.
    pub fn step_count(&self) -> f32 {
        floor(self.scale.range() / self.scale.step())
    }

    pub fn pixel_to_scale(&self, pixel: f32) -> f32 {
        (pixel - self.track.pixel_min) * self.scale.range() / self.track.width() + self.scale.min()
    }

    pub fn scale_to_pixel(&self, value: f32) -> f32 {
        (value - self.scale.min()) * self.track.width() / self.scale.range() + self.track.pixel_min
    }

    /// Maps a pixel onto the step index domain `[0, step_count]`, rounding half-up.
    ///
    /// Pixels outside the track land on the first or last step.
    pub fn pixel_to_step(&self, pixel: f32) -> f32 {
        let step_count = self.step_count();
        let steps = (pixel - self.track.pixel_min) * step_count / self.track.width();
        round_half_up(steps).clamp(0.0, step_count)
    }

    pub fn step_to_pixel(&self, step: f32) -> f32 {
        step * self.track.width() / self.step_count() + self.track.pixel_min
    }

    /// Quantizes a pixel to the pixel of the nearest step.
    pub fn snap_to_step(&self, pixel: f32) -> f32 {
        self.track.clamp(self.step_to_pixel(self.pixel_to_step(pixel)))
    }
}

// `f32::floor` lives in `std`; step indexes stay far below the `i64` range.
fn floor(x: f32) -> f32 {
    let truncated = x as i64 as f32;
    if truncated > x {
        truncated - 1.0
    } else {
        truncated
    }
}

fn round_half_up(x: f32) -> f32 {
    floor(x + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_handles_negative_and_integral_values() {
        assert_eq!(floor(2.7), 2.0);
        assert_eq!(floor(-2.2), -3.0);
        assert_eq!(floor(-3.0), -3.0);
        assert_eq!(floor(0.0), 0.0);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_half_up(3.5), 4.0);
        assert_eq!(round_half_up(4.5), 5.0);
        assert_eq!(round_half_up(3.49), 3.0);
        assert_eq!(round_half_up(-0.5), 0.0);
    }
}
