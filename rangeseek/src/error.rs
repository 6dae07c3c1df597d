use thiserror::Error;

/// Errors reported when configuring a seek bar or addressing a thumb that does not exist.
///
/// Pointer input never produces an error: out-of-range coordinates are clamped.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("scale bounds and step must be finite")]
    NonFiniteScale,
    #[error("scale step must be positive (got {step})")]
    InvalidStep { step: f32 },
    #[error("scale max must be greater than min (min={min}, max={max})")]
    EmptyScale { min: f32, max: f32 },
    #[error("scale step {step} is larger than the scale range {range}")]
    StepExceedsRange { step: f32, range: f32 },
    #[error("thumb value must be finite")]
    NonFiniteValue,
    #[error("thumb index {index} out of range (len={len})")]
    IndexOutOfRange { index: usize, len: usize },
}
