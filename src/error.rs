use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuantizeError {
    #[error("Palette size must be at least 2 (got {0})")]
    PaletteTooSmall(usize),

    #[error("Learning rate exponent must be in [0.5, 1.0] (got {0})")]
    InvalidLearningExponent(f64),

    #[error("Sample rate must be in (0, 1] (got {0})")]
    InvalidSampleRate(f64),

    #[error("Run count must be at least 1 (got {0})")]
    InvalidRunCount(u32),

    #[error("Multiple runs require MacQueen clustering with pseudo-random order")]
    RunsRequirePseudoRandom,

    #[error("Maximum iteration count must be at least 1 (got {0})")]
    InvalidMaxIterations(u32),

    #[error("Bounded sampling range must be positive")]
    ZeroRange,

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Image has {0} pixels, more than a 32-bit index can address")]
    TooManyPixels(u64),

    #[error("Pixel index {index} out of range for {len} pixels")]
    PixelOutOfRange { index: usize, len: usize },

    #[error("Pixel buffer holds {actual} values, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Image dimensions differ: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    #[error("Cannot aggregate an empty sample")]
    EmptySample,

    #[error("Quasi-random sequence exhausted after {0} points")]
    SequenceExhausted(u64),

    #[error("Invalid image format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported maximum sample value {0} (only 8-bit channels are supported)")]
    UnsupportedDepth(u32),

    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
