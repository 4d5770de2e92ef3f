/// Default side length (in pixels) of the centered luma crop compared
/// between consecutive frames.
pub const DEFAULT_CROP_SIZE: usize = 50;

/// Default block-matching search radius in pixels. Candidate displacements
/// span `[-radius, radius]` on both axes.
pub const DEFAULT_SEARCH_RADIUS: usize = 5;

/// Alpha channel value for fully opaque visualization pixels.
pub const OPAQUE_ALPHA: u8 = u8::MAX;

/// Number of degrees in a full turn, used to normalize rotation metadata.
pub const FULL_TURN_DEGREES: i32 = 360;
