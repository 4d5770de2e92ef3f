use tracing::warn;

use crate::consts::FULL_TURN_DEGREES;

/// Borrowed view of a single raw camera frame.
///
/// The luma plane belongs to the camera subsystem and is only valid for
/// the duration of one `MotionEngine::process` call; the engine copies
/// what it retains.
#[derive(Clone, Copy, Debug)]
pub struct RawFrame<'a> {
    pub width: usize,
    pub height: usize,
    /// Row-major single-channel luma samples, one row every `row_stride` bytes.
    pub plane: &'a [u8],
    /// Bytes per row, >= width.
    pub row_stride: usize,
    /// Bytes per sample within a row. Only 1 is supported.
    pub pixel_stride: usize,
    /// Sensor-to-display orientation reported by the camera.
    pub rotation: Rotation,
}

/// Clockwise sensor-to-display rotation, a multiple of 90 degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Normalize camera rotation metadata into one of the four supported
    /// angles. Values that are not a multiple of 90 should not occur with
    /// valid metadata; they map to `Deg0` and are surfaced in the log.
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.rem_euclid(FULL_TURN_DEGREES) {
            0 => Self::Deg0,
            90 => Self::Deg90,
            180 => Self::Deg180,
            270 => Self::Deg270,
            other => {
                warn!(degrees = other, "unrecognized rotation, treating as 0 degrees");
                Self::Deg0
            }
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg0,
            Self::Deg90 => Self::Deg270,
            Self::Deg180 => Self::Deg180,
            Self::Deg270 => Self::Deg90,
        }
    }
}

/// Integer pixel shift between two consecutive crops.
///
/// Produced in sensor space by the matcher, then mapped to display space
/// with the frame's rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}
