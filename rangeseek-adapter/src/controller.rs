use rangeseek::{Orientation, PointerAction, RangeSeekBar, RangeSeekOptions};

use crate::{
    Geometry, MeasureSpec, Padding, Size, ThumbSize, ViewFrame, measure_height, measure_width,
};

/// A pointer event in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }
}

/// View-level configuration owned by the adapter rather than the seek bar core.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdapterOptions {
    pub orientation: Orientation,
    pub thumb_size: ThumbSize,
    pub padding: Padding,
}

impl AdapterOptions {
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_thumb_size(mut self, thumb_size: ThumbSize) -> Self {
        self.thumb_size = thumb_size;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

/// A framework-neutral controller that wraps a `rangeseek::RangeSeekBar` and performs the view
/// work around it: measuring, projecting 2-D input onto the track axis, and producing render
/// geometry.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `measure` / `on_layout` from the host's layout pass
/// - `on_pointer` for every pointer event delivered to the view
/// - `take_needs_redraw` + `geometry` when deciding whether and what to draw
#[derive(Clone, Debug)]
pub struct Controller {
    bar: RangeSeekBar,
    options: AdapterOptions,
    view_size: Option<Size>,
}

impl Controller {
    pub fn new(options: RangeSeekOptions, adapter: AdapterOptions) -> Self {
        Self::from_seek_bar(RangeSeekBar::new(options), adapter)
    }

    pub fn from_seek_bar(bar: RangeSeekBar, adapter: AdapterOptions) -> Self {
        Self {
            bar,
            options: adapter,
            view_size: None,
        }
    }

    pub fn seek_bar(&self) -> &RangeSeekBar {
        &self.bar
    }

    pub fn seek_bar_mut(&mut self) -> &mut RangeSeekBar {
        &mut self.bar
    }

    pub fn into_seek_bar(self) -> RangeSeekBar {
        self.bar
    }

    pub fn adapter_options(&self) -> AdapterOptions {
        self.options
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    pub fn view_size(&self) -> Option<Size> {
        self.view_size
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.options.orientation = orientation;
        self.relayout();
    }

    pub fn set_thumb_size(&mut self, thumb_size: ThumbSize) {
        self.options.thumb_size = thumb_size;
        self.relayout();
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.options.padding = padding;
        self.relayout();
    }

    pub fn thumb_half(&self) -> f32 {
        self.options
            .thumb_size
            .half_along(self.options.orientation)
    }

    /// Resolves the view size for the host's measure pass.
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let AdapterOptions {
            orientation,
            thumb_size,
            padding,
        } = self.options;
        Size::new(
            measure_width(width, orientation, thumb_size, padding),
            measure_height(height, orientation, thumb_size, padding),
        )
    }

    /// Call this when the host assigns the view its size.
    ///
    /// Returns `true` when the seek bar has a valid track afterwards.
    pub fn on_layout(&mut self, width: f32, height: f32) -> bool {
        self.view_size = Some(Size::new(width, height));
        self.relayout()
    }

    fn relayout(&mut self) -> bool {
        let Some(size) = self.view_size else {
            return false;
        };
        let padding = self.options.padding;
        let track_length = match self.options.orientation {
            Orientation::Horizontal => size.width - padding.horizontal(),
            Orientation::Vertical => size.height - padding.vertical(),
        };
        adebug!(
            width = size.width,
            height = size.height,
            track_length,
            "Controller::relayout"
        );
        self.bar.set_layout(track_length, self.thumb_half())
    }

    /// Projects a pointer event onto the track axis and forwards it to the seek bar.
    ///
    /// Returns whether the event was handled, for the host's input dispatcher.
    pub fn on_pointer(&mut self, event: PointerEvent) -> bool {
        let padding = self.options.padding;
        let coordinate = match self.options.orientation {
            Orientation::Horizontal => event.x - padding.left,
            Orientation::Vertical => event.y - padding.top,
        };
        let handled = self.bar.on_pointer(event.action, coordinate);
        atrace!(action = ?event.action, coordinate, handled, "Controller::on_pointer");
        handled
    }

    pub fn take_needs_redraw(&mut self) -> bool {
        self.bar.take_needs_redraw()
    }

    pub fn frame(&self) -> Option<ViewFrame> {
        let size = self.view_size?;
        Some(ViewFrame {
            orientation: self.options.orientation,
            size,
            padding: self.options.padding,
            thumb_half: self.thumb_half(),
        })
    }

    /// Render geometry for the current state; `None` until the view has a valid track.
    pub fn geometry(&self) -> Option<Geometry> {
        self.bar.track()?;
        Some(self.frame()?.geometry(&self.bar))
    }
}
