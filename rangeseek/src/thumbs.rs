use alloc::vec::Vec;

use crate::{ConfigError, Scale, ScaleMapper, ThumbVisual, Track};

/// One draggable marker: a track position and the scale value it stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thumb {
    position: f32,
    value: f32,
    visual: ThumbVisual,
}

impl Thumb {
    fn new(value: f32, position: f32) -> Self {
        Self {
            position,
            value,
            visual: ThumbVisual::Normal,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn visual(&self) -> ThumbVisual {
        self.visual
    }
}

/// The ordered thumbs of a seek bar.
///
/// Index is identity: insertion order is display order and constraint order. Positions and
/// values are kept in sync through the current [`ScaleMapper`]; until a track is known only
/// values are meaningful and every position is `0`.
#[derive(Clone, Debug)]
pub struct ThumbSet {
    thumbs: Vec<Thumb>,
    scale: Scale,
    mapper: Option<ScaleMapper>,
    ordered: bool,
    needs_redraw: bool,
}

impl ThumbSet {
    pub(crate) fn new(count: usize, scale: Scale, ordered: bool) -> Self {
        let mut set = Self {
            thumbs: Vec::new(),
            scale,
            mapper: None,
            ordered,
            needs_redraw: false,
        };
        set.init_thumbs(count);
        set
    }

    /// Replaces every thumb with `count` fresh thumbs at the scale minimum.
    pub(crate) fn init_thumbs(&mut self, count: usize) {
        let value = self.scale.min();
        let position = self.mapper.map_or(0.0, |m| m.track().pixel_min);
        self.thumbs.clear();
        self.thumbs.resize(count, Thumb::new(value, position));
        self.needs_redraw = true;
    }

    pub fn len(&self) -> usize {
        self.thumbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thumbs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Thumb> {
        self.thumbs.get(index)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Thumb> + '_ {
        self.thumbs.iter()
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn mapper(&self) -> Option<ScaleMapper> {
        self.mapper
    }

    pub fn track(&self) -> Option<Track> {
        self.mapper.map(|m| m.track())
    }

    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    pub(crate) fn set_ordered(&mut self, ordered: bool) {
        self.ordered = ordered;
    }

    fn thumb(&self, index: usize) -> Result<&Thumb, ConfigError> {
        self.thumbs.get(index).ok_or(ConfigError::IndexOutOfRange {
            index,
            len: self.thumbs.len(),
        })
    }

    pub fn position_of(&self, index: usize) -> Result<f32, ConfigError> {
        self.thumb(index).map(Thumb::position)
    }

    pub fn value_of(&self, index: usize) -> Result<f32, ConfigError> {
        self.thumb(index).map(Thumb::value)
    }

    pub(crate) fn value_at(&self, index: usize) -> f32 {
        self.thumbs[index].value
    }

    pub fn visual_of(&self, index: usize) -> Result<ThumbVisual, ConfigError> {
        self.thumb(index).map(Thumb::visual)
    }

    pub fn positions(&self) -> Vec<f32> {
        self.thumbs.iter().map(Thumb::position).collect()
    }

    pub fn values(&self) -> Vec<f32> {
        self.thumbs.iter().map(Thumb::value).collect()
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns and clears the redraw flag raised by every mutation.
    pub fn take_needs_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    /// Installs a mapper for a new track and re-derives every position from its value.
    pub(crate) fn set_mapper(&mut self, mapper: ScaleMapper) {
        self.scale = mapper.scale();
        self.mapper = Some(mapper);
        for thumb in &mut self.thumbs {
            thumb.value = self.scale.clamp(thumb.value);
            thumb.position = mapper.track().clamp(mapper.scale_to_pixel(thumb.value));
        }
        self.needs_redraw = true;
    }

    /// Swaps the scale. Values are clamped into it and positions re-derived when a track is known.
    pub(crate) fn set_scale(&mut self, scale: Scale) {
        match self.mapper {
            Some(m) => self.set_mapper(ScaleMapper::new(m.track(), scale)),
            None => {
                self.scale = scale;
                for thumb in &mut self.thumbs {
                    thumb.value = scale.clamp(thumb.value);
                }
                self.needs_redraw = true;
            }
        }
    }

    /// Stores a pixel position and recomputes the value. Ignored until a track is known.
    pub(crate) fn set_position(&mut self, index: usize, pixel: f32) {
        let Some(mapper) = self.mapper else {
            return;
        };
        let thumb = &mut self.thumbs[index];
        thumb.position = pixel;
        thumb.value = mapper.pixel_to_scale(pixel);
        self.needs_redraw = true;
    }

    /// Stores a value and recomputes the position when a track is known.
    pub(crate) fn set_value(&mut self, index: usize, value: f32) {
        let mapper = self.mapper;
        let thumb = &mut self.thumbs[index];
        thumb.value = value;
        if let Some(mapper) = mapper {
            thumb.position = mapper.track().clamp(mapper.scale_to_pixel(value));
        }
        self.needs_redraw = true;
    }

    pub(crate) fn set_visual(&mut self, index: usize, visual: ThumbVisual) {
        let thumb = &mut self.thumbs[index];
        if thumb.visual != visual {
            thumb.visual = visual;
            self.needs_redraw = true;
        }
    }

    /// The lowest pixel thumb `index` may move to.
    ///
    /// With ordering enabled this is the closest position among lower-indexed thumbs that does
    /// not exceed the thumb's own position, so coincident neighbors never block each other.
    pub fn lower_bound(&self, index: usize) -> f32 {
        let track = self.track().unwrap_or_default();
        let mut limit = track.pixel_min;
        if !self.ordered {
            return limit;
        }
        let Some(own) = self.thumbs.get(index).map(Thumb::position) else {
            return limit;
        };
        for other in &self.thumbs[..index] {
            if other.position <= own && other.position > limit {
                limit = other.position;
            }
        }
        limit
    }

    /// The highest pixel thumb `index` may move to. Mirror image of [`Self::lower_bound`].
    pub fn upper_bound(&self, index: usize) -> f32 {
        let track = self.track().unwrap_or_default();
        let mut limit = track.pixel_max;
        if !self.ordered {
            return limit;
        }
        let Some(own) = self.thumbs.get(index).map(Thumb::position) else {
            return limit;
        };
        for other in &self.thumbs[index + 1..] {
            if other.position >= own && other.position < limit {
                limit = other.position;
            }
        }
        limit
    }

    /// Index of the thumb nearest to `coordinate`. On an exact tie the later thumb wins.
    pub fn closest_index_to(&self, coordinate: f32) -> Option<usize> {
        let mut closest = None;
        let mut shortest = f32::INFINITY;
        for (i, thumb) in self.thumbs.iter().enumerate() {
            let distance = (coordinate - thumb.position).max(thumb.position - coordinate);
            if distance <= shortest {
                shortest = distance;
                closest = Some(i);
            }
        }
        closest
    }

    /// Start of the run of thumbs ending at `index` that share its value.
    ///
    /// Walks `index - 1` down to `0` and returns one past the first thumb with a different value,
    /// or `0` when all of them match.
    pub fn unstick_from(&self, index: usize) -> usize {
        let Some(stuck) = self.thumbs.get(index).map(Thumb::value) else {
            return 0;
        };
        (0..index)
            .rev()
            .find(|&i| self.thumbs[i].value != stuck)
            .map_or(0, |i| i + 1)
    }

    /// Places thumb `k` at the step nearest `(k + 0.5) * pixel_max / n`.
    ///
    /// Ordering is not consulted. Does nothing until a track is known.
    pub(crate) fn distribute_evenly(&mut self) {
        let Some(mapper) = self.mapper else {
            return;
        };
        let count = self.thumbs.len();
        if count == 0 {
            return;
        }
        let segment = mapper.track().pixel_max / count as f32;
        for k in 0..count {
            let center = (k as f32 + 0.5) * segment;
            self.set_position(k, mapper.snap_to_step(center));
        }
    }
}
