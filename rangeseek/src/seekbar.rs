use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    ConfigError, EvenDistributor, GestureController, GestureState, PointerAction, RangeSeekOptions,
    Scale, ScaleMapper, SeekEvent, ThumbSet, Track,
};

/// A headless multi-thumb range seek bar.
///
/// This type is UI-agnostic:
/// - It does not hold any drawing resources; thumbs carry a [`crate::ThumbVisual`] tag instead.
/// - Your adapter drives it with the track length (`set_layout`) and pointer coordinates along
///   the track axis (`on_pointer`).
/// - Rendering reads thumb positions from [`Self::thumbs`] whenever [`Self::take_needs_redraw`]
///   reports a change.
///
/// For orientation handling, measuring and render geometry, see the `rangeseek-adapter` crate.
#[derive(Clone, Debug)]
pub struct RangeSeekBar {
    options: RangeSeekOptions,
    thumbs: ThumbSet,
    gesture: GestureController,
    distributor: EvenDistributor,
}

impl RangeSeekBar {
    pub fn new(options: RangeSeekOptions) -> Self {
        rdebug!(
            thumbs = options.thumb_count,
            ordered = options.ordered,
            enabled = options.enabled,
            "RangeSeekBar::new"
        );
        Self {
            thumbs: ThumbSet::new(options.thumb_count, options.scale, options.ordered),
            gesture: GestureController::new(),
            distributor: EvenDistributor::new(),
            options,
        }
    }

    pub fn options(&self) -> &RangeSeekOptions {
        &self.options
    }

    pub fn thumbs(&self) -> &ThumbSet {
        &self.thumbs
    }

    pub fn thumb_count(&self) -> usize {
        self.thumbs.len()
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture.state()
    }

    pub fn is_seeking(&self) -> bool {
        self.gesture.is_seeking()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.gesture.active_index()
    }

    pub fn scale(&self) -> Scale {
        self.thumbs.scale()
    }

    pub fn track(&self) -> Option<Track> {
        self.thumbs.track()
    }

    pub fn mapper(&self) -> Option<ScaleMapper> {
        self.thumbs.mapper()
    }

    pub fn is_distributed(&self) -> bool {
        self.distributor.is_done()
    }

    pub fn needs_redraw(&self) -> bool {
        self.thumbs.needs_redraw()
    }

    pub fn take_needs_redraw(&mut self) -> bool {
        self.thumbs.take_needs_redraw()
    }

    fn dispatch(&self, events: &[SeekEvent]) {
        let Some(cb) = &self.options.on_event else {
            return;
        };
        for event in events {
            cb(self, event);
        }
    }

    pub fn set_on_event(
        &mut self,
        on_event: Option<impl Fn(&RangeSeekBar, &SeekEvent) + Send + Sync + 'static>,
    ) {
        self.options.on_event = on_event.map(|f| Arc::new(f) as _);
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    /// Enables or disables pointer handling.
    ///
    /// Disabling during a drag ends the gesture where it is, with a `SeekStop` notification.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        rdebug!(enabled, "RangeSeekBar::set_enabled");
        if !enabled {
            let mut events = Vec::new();
            self.gesture
                .finish(&mut self.thumbs, &mut |event| events.push(event));
            self.dispatch(&events);
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.thumbs.is_ordered()
    }

    pub fn set_ordered(&mut self, ordered: bool) {
        self.options.ordered = ordered;
        self.thumbs.set_ordered(ordered);
        self.gesture.refresh_bounds(&self.thumbs);
    }

    /// Replaces the scale. Thumb values are clamped into the new scale.
    pub fn set_scale(&mut self, scale: Scale) {
        rdebug!(
            min = scale.min(),
            max = scale.max(),
            step = scale.step(),
            "RangeSeekBar::set_scale"
        );
        self.options.scale = scale;
        self.thumbs.set_scale(scale);
        self.gesture.refresh_bounds(&self.thumbs);
    }

    /// Validates `(min, max, step)` and applies it with [`Self::set_scale`].
    pub fn set_scale_range(&mut self, min: f32, max: f32, step: f32) -> Result<(), ConfigError> {
        let scale = match Scale::new(min, max, step) {
            Ok(scale) => scale,
            Err(err) => {
                rwarn!(%err, "RangeSeekBar::set_scale_range rejected");
                return Err(err);
            }
        };
        self.set_scale(scale);
        Ok(())
    }

    /// Recreates the thumb set with `count` fresh thumbs, discarding prior positions.
    ///
    /// Any gesture in progress is dropped. The fresh thumbs are spread over the track right
    /// away when one is known, otherwise on the next valid layout.
    pub fn set_thumb_count(&mut self, count: usize) {
        rdebug!(count, "RangeSeekBar::set_thumb_count");
        self.options.thumb_count = count;
        self.thumbs.init_thumbs(count);
        self.gesture.reset();
        self.distributor.rearm();
        if let Some(event) = self.distributor.on_layout(&mut self.thumbs) {
            self.dispatch(&[event]);
        }
    }

    /// Applies a new layout: the track length along the orientation and half the thumb extent.
    ///
    /// Returns `false` (and keeps any previous track) when the resulting track is degenerate.
    /// The first valid layout spreads the thumbs evenly and fires `Created`.
    pub fn set_layout(&mut self, track_length: f32, thumb_half: f32) -> bool {
        let track = Track::from_extent(track_length, thumb_half);
        if !track.is_valid() {
            rwarn!(
                track_length,
                thumb_half,
                "RangeSeekBar::set_layout: degenerate track ignored"
            );
            return false;
        }
        let mapper = ScaleMapper::new(track, self.thumbs.scale());
        if self.thumbs.mapper() != Some(mapper) {
            rdebug!(
                pixel_min = track.pixel_min,
                pixel_max = track.pixel_max,
                "RangeSeekBar::set_layout"
            );
            self.thumbs.set_mapper(mapper);
            self.gesture.refresh_bounds(&self.thumbs);
        }
        if let Some(event) = self.distributor.on_layout(&mut self.thumbs) {
            self.dispatch(&[event]);
        }
        true
    }

    /// Feeds one pointer event. `coordinate` is measured along the track axis, in the same
    /// pixel space as the layout.
    ///
    /// Returns `false` when the event is not handled: the control is disabled, has no thumbs,
    /// or has not been laid out yet.
    pub fn on_pointer(&mut self, action: PointerAction, coordinate: f32) -> bool {
        if !self.options.enabled {
            rtrace!(?action, "pointer event ignored: disabled");
            return false;
        }
        let mut events = Vec::new();
        let handled = self.gesture.handle(
            &mut self.thumbs,
            action,
            coordinate,
            &mut |event| events.push(event),
        );
        self.dispatch(&events);
        handled
    }

    pub fn value(&self, index: usize) -> Result<f32, ConfigError> {
        self.thumbs.value_of(index)
    }

    pub fn position(&self, index: usize) -> Result<f32, ConfigError> {
        self.thumbs.position_of(index)
    }

    pub fn values(&self) -> Vec<f32> {
        self.thumbs.values()
    }

    /// Moves a thumb to `value` (clamped into the scale) without a listener notification.
    ///
    /// Ordering is not enforced here; the caller owns the relation between programmatic values.
    pub fn set_value(&mut self, index: usize, value: f32) -> Result<(), ConfigError> {
        if index >= self.thumbs.len() {
            return Err(ConfigError::IndexOutOfRange {
                index,
                len: self.thumbs.len(),
            });
        }
        if !value.is_finite() {
            return Err(ConfigError::NonFiniteValue);
        }
        let value = self.thumbs.scale().clamp(value);
        rtrace!(index, value, "RangeSeekBar::set_value");
        self.thumbs.set_value(index, value);
        self.gesture.refresh_bounds(&self.thumbs);
        Ok(())
    }

    /// Spreads all thumbs evenly over the track. Does nothing before the first valid layout.
    pub fn distribute_evenly(&mut self) {
        self.thumbs.distribute_evenly();
        self.gesture.refresh_bounds(&self.thumbs);
    }
}
