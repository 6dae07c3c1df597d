use crate::{SeekEvent, SeekEventKind, ThumbSet};

/// Whether the first valid layout has happened yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FirstLayout {
    #[default]
    Pending,
    Done,
}

/// Spreads fresh thumbs over the track once, when the track first becomes known.
#[derive(Clone, Debug, Default)]
pub struct EvenDistributor {
    first_layout: FirstLayout,
}

impl EvenDistributor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_layout(&self) -> FirstLayout {
        self.first_layout
    }

    pub fn is_done(&self) -> bool {
        self.first_layout == FirstLayout::Done
    }

    /// Arms the distributor again; the next valid layout spreads the thumbs.
    pub(crate) fn rearm(&mut self) {
        self.first_layout = FirstLayout::Pending;
    }

    /// Runs the one-shot distribution if it is still pending and the set has a track.
    ///
    /// Returns the `Created` event for the first thumb. An empty set completes the one-shot
    /// without an event.
    pub(crate) fn on_layout(&mut self, thumbs: &mut ThumbSet) -> Option<SeekEvent> {
        if self.is_done() || thumbs.track().is_none() {
            return None;
        }
        thumbs.distribute_evenly();
        self.first_layout = FirstLayout::Done;
        rdebug!(count = thumbs.len(), "thumbs distributed on first layout");
        let value = thumbs.value_of(0).ok()?;
        Some(SeekEvent::new(SeekEventKind::Created, 0, value))
    }
}
