use rangeseek::Orientation;

use crate::{Padding, ThumbSize};

/// A size constraint handed down by the host's layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureSpec {
    /// The parent decided the size.
    Exactly(f32),
    /// The view may be as large as it wants up to this size.
    AtMost(f32),
    /// No constraint; the value is only a hint.
    Unspecified(f32),
}

/// Resolves the view width.
///
/// A vertical bar under `AtMost` shrinks to one thumb width plus padding.
pub fn measure_width(
    constraint: MeasureSpec,
    orientation: Orientation,
    thumb: ThumbSize,
    padding: Padding,
) -> f32 {
    match constraint {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::Unspecified(size) => size + padding.horizontal(),
        MeasureSpec::AtMost(size) => {
            let mut result = (size + padding.horizontal()).min(size);
            if orientation == Orientation::Vertical {
                result = result.min(thumb.width + padding.horizontal());
            }
            result
        }
    }
}

/// Resolves the view height.
///
/// Without a constraint the bar is one thumb tall; a horizontal bar under `AtMost` shrinks to
/// the same.
pub fn measure_height(
    constraint: MeasureSpec,
    orientation: Orientation,
    thumb: ThumbSize,
    padding: Padding,
) -> f32 {
    match constraint {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::Unspecified(_) => thumb.height + padding.vertical(),
        MeasureSpec::AtMost(size) => {
            let mut result = (size + padding.vertical()).min(size);
            if orientation == Orientation::Horizontal {
                result = result.min(thumb.height + padding.vertical());
            }
            result
        }
    }
}
