use serde::{Deserialize, Serialize};

/// Largest value a channel can take in an 8-bit image
pub const MAX_CHANNEL: f64 = 255.0;

/// A color sample with real-valued red, green and blue channels.
///
/// Channels are nominally in `[0, 255]` but kept as `f64` so running means
/// can hold fractional values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Build a sample from 8-bit channel values
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(
            f64::from(bytes[0]),
            f64::from(bytes[1]),
            f64::from(bytes[2]),
        )
    }

    /// Round each channel to the nearest integer, clamped into `[0, 255]`
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            round_channel(self.red),
            round_channel(self.green),
            round_channel(self.blue),
        ]
    }
}

fn round_channel(value: f64) -> u8 {
    // NaN clamps to 0 through the saturating cast
    value.round().clamp(0.0, MAX_CHANNEL) as u8
}
