use crate::{PointerAction, SeekEvent, SeekEventKind, ThumbSet, ThumbVisual};

/// Per-gesture state, reset on every pointer-down.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureState {
    pub active_index: usize,
    pub low_bound: f32,
    pub high_bound: f32,
    pub seeking: bool,
}

/// Turns a pointer stream into movements of a single active thumb.
///
/// Only one thumb is manipulated at a time: the one closest to the pointer-down coordinate.
/// Requested positions are clamped to the bounds captured at pointer-down and snapped to the
/// nearest step.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_seeking(&self) -> bool {
        self.state.seeking
    }

    /// The thumb being dragged, if a gesture is in progress.
    pub fn active_index(&self) -> Option<usize> {
        self.state.seeking.then_some(self.state.active_index)
    }

    /// Forgets the current gesture without notifying anyone. Used when the thumbs are rebuilt.
    pub(crate) fn reset(&mut self) {
        self.state = GestureState::default();
    }

    /// Recomputes the active thumb's bounds after its neighbors moved outside the gesture.
    pub(crate) fn refresh_bounds(&mut self, thumbs: &ThumbSet) {
        if !self.state.seeking {
            return;
        }
        let index = self.state.active_index;
        self.state.low_bound = thumbs.lower_bound(index);
        self.state.high_bound = thumbs.upper_bound(index);
    }

    /// Feeds one pointer event along the track axis.
    ///
    /// Returns `false` when the event is not handled: no thumbs, no track yet, or a non-finite
    /// coordinate. Listener events are passed to `emit` in the order they occur.
    pub(crate) fn handle(
        &mut self,
        thumbs: &mut ThumbSet,
        action: PointerAction,
        coordinate: f32,
        emit: &mut dyn FnMut(SeekEvent),
    ) -> bool {
        if thumbs.is_empty() || thumbs.mapper().is_none() {
            rtrace!(?action, "pointer event ignored: no thumbs or no track");
            return false;
        }
        if !coordinate.is_finite() {
            rwarn!(?action, coordinate, "pointer event ignored: non-finite coordinate");
            return false;
        }

        match action {
            PointerAction::Down => {
                // A host that lost an Up still gets a closed gesture before the next one.
                self.finish(thumbs, emit);
                let Some(index) = thumbs.closest_index_to(coordinate) else {
                    return false;
                };
                self.state = GestureState {
                    active_index: index,
                    low_bound: thumbs.lower_bound(index),
                    high_bound: thumbs.upper_bound(index),
                    seeking: true,
                };
                rdebug!(
                    index,
                    coordinate,
                    low = self.state.low_bound,
                    high = self.state.high_bound,
                    "seek start: closest thumb"
                );
                thumbs.set_visual(index, ThumbVisual::Pressed);
                self.seek_to(thumbs, coordinate);
                let index = self.state.active_index;
                let value = thumbs.value_at(index);
                emit(SeekEvent::new(SeekEventKind::SeekStart, index, value));
                emit(SeekEvent::new(SeekEventKind::Seek, index, value));
            }
            PointerAction::Move => {
                if !self.state.seeking {
                    return true;
                }
                self.seek_to(thumbs, coordinate);
                let index = self.state.active_index;
                emit(SeekEvent::new(
                    SeekEventKind::Seek,
                    index,
                    thumbs.value_at(index),
                ));
            }
            PointerAction::Up | PointerAction::Cancel => {
                if !self.state.seeking {
                    return true;
                }
                self.seek_to(thumbs, coordinate);
                self.finish(thumbs, emit);
            }
        }
        true
    }

    /// Ends the current gesture in place: clears the pressed state and emits `SeekStop`.
    pub(crate) fn finish(&mut self, thumbs: &mut ThumbSet, emit: &mut dyn FnMut(SeekEvent)) {
        if !self.state.seeking {
            return;
        }
        let index = self.state.active_index;
        self.state.seeking = false;
        if index >= thumbs.len() {
            return;
        }
        thumbs.set_visual(index, ThumbVisual::Normal);
        let value = thumbs.value_at(index);
        rdebug!(index, value, "seek stop");
        emit(SeekEvent::new(SeekEventKind::SeekStop, index, value));
    }

    fn seek_to(&mut self, thumbs: &mut ThumbSet, coordinate: f32) {
        let GestureState {
            active_index: index,
            low_bound: low,
            high_bound: high,
            ..
        } = self.state;

        if coordinate < low {
            if low == high && index + 1 >= thumbs.len() {
                self.unstick(thumbs, coordinate);
            } else {
                thumbs.set_position(index, low);
            }
        } else if coordinate > high {
            thumbs.set_position(index, high);
        } else {
            let Some(mapper) = thumbs.mapper() else {
                return;
            };
            // Neighbors placed off the step grid must still bound the snapped position.
            let snapped = mapper.snap_to_step(coordinate).max(low).min(high);
            thumbs.set_position(index, snapped);
        }
        rtrace!(index = self.state.active_index, coordinate, "seek");
    }

    /// Hands the drag to the first thumb of the coincident run the active thumb is pinned in.
    ///
    /// The new active thumb takes the raw coordinate, limited to its own bounds. The widget this
    /// is modeled on wrote it unclamped; the clamp keeps ordered thumbs from crossing.
    fn unstick(&mut self, thumbs: &mut ThumbSet, coordinate: f32) {
        let stuck = self.state.active_index;
        let index = thumbs.unstick_from(stuck);
        rdebug!(from = stuck, to = index, coordinate, "unstick");
        if index != stuck {
            thumbs.set_visual(stuck, ThumbVisual::Normal);
            thumbs.set_visual(index, ThumbVisual::Pressed);
        }
        let low = thumbs.lower_bound(index);
        let high = thumbs.upper_bound(index);
        self.state.active_index = index;
        self.state.low_bound = low;
        self.state.high_bound = high;
        thumbs.set_position(index, coordinate.max(low).min(high));
    }
}
