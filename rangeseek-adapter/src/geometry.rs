use alloc::vec::Vec;

use rangeseek::{Orientation, RangeSeekBar, ThumbVisual};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Visual size of one thumb. Half of it along the orientation insets the track.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbSize {
    pub width: f32,
    pub height: f32,
}

impl ThumbSize {
    pub const DEFAULT: Self = Self {
        width: 50.0,
        height: 50.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.width / 2.0,
            Orientation::Vertical => self.height / 2.0,
        }
    }
}

impl Default for ThumbSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(p: f32) -> Self {
        Self::new(p, p, p, p)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Padding before the track along the orientation.
    pub fn leading(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbGeometry {
    pub index: usize,
    pub rect: RectF,
    pub visual: ThumbVisual,
}

/// Everything a renderer needs for one frame, in view coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub track: RectF,
    /// The filled part of the track between the outermost thumbs; `None` without thumbs.
    pub range: Option<RectF>,
    pub thumbs: Vec<ThumbGeometry>,
}

/// View geometry the rectangles are computed against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewFrame {
    pub orientation: Orientation,
    pub size: Size,
    pub padding: Padding,
    pub thumb_half: f32,
}

impl ViewFrame {
    /// The view area inside the padding.
    pub fn track_rect(&self) -> RectF {
        RectF::new(
            self.padding.left,
            self.padding.top,
            self.size.width - self.padding.right,
            self.size.height - self.padding.bottom,
        )
    }

    /// A rectangle spanning the cross axis between two track pixels.
    fn span(&self, from: f32, to: f32) -> RectF {
        let inner = self.track_rect();
        let lead = self.padding.leading(self.orientation);
        match self.orientation {
            Orientation::Horizontal => RectF::new(from + lead, inner.top, to + lead, inner.bottom),
            Orientation::Vertical => RectF::new(inner.left, from + lead, inner.right, to + lead),
        }
    }

    pub fn thumb_rect(&self, position: f32) -> RectF {
        self.span(position - self.thumb_half, position + self.thumb_half)
    }

    pub fn thumb_rects(&self, bar: &RangeSeekBar) -> Vec<ThumbGeometry> {
        bar.thumbs()
            .iter()
            .enumerate()
            .map(|(index, thumb)| ThumbGeometry {
                index,
                rect: self.thumb_rect(thumb.position()),
                visual: thumb.visual(),
            })
            .collect()
    }

    /// The fill between the thumb nearest the track start and the thumb nearest `pixel_max`.
    ///
    /// A single thumb fills from the start of the track.
    pub fn range_rect(&self, bar: &RangeSeekBar) -> Option<RectF> {
        let thumbs = bar.thumbs();
        let track = bar.track()?;
        let low = thumbs.closest_index_to(0.0)?;
        let high = thumbs.closest_index_to(track.pixel_max)?;
        let from = if thumbs.len() == 1 {
            0.0
        } else {
            thumbs.position_of(low).ok()?
        };
        let to = thumbs.position_of(high).ok()?;
        Some(self.span(from, to))
    }

    pub fn geometry(&self, bar: &RangeSeekBar) -> Geometry {
        Geometry {
            track: self.track_rect(),
            range: self.range_rect(bar),
            thumbs: self.thumb_rects(bar),
        }
    }
}
