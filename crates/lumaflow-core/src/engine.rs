use image::RgbaImage;
use tracing::trace;

use crate::buffer::DoubleBuffer;
use crate::config::EngineConfig;
use crate::crop::CropGeometry;
use crate::error::Result;
use crate::frame::{Displacement, RawFrame};
use crate::matching::match_blocks;
use crate::orientation::rotate_displacement;
use crate::render::render_grayscale;

/// Output of one processed frame.
#[derive(Clone, Debug)]
pub struct MotionEstimate {
    /// Display-space pixel shift since the previous frame.
    pub displacement: Displacement,
    /// Grayscale view of the matched crop, rotated to display orientation.
    pub visualization: RgbaImage,
}

/// Per-frame motion estimation, the way an optical mouse tracks surface
/// motion: match the centered crop of each frame against the previous
/// frame's crop and report the best-aligning integer shift.
///
/// One frame is processed at a time; the raw frame buffer only needs to
/// stay valid for the duration of the call. Errors are local to a single
/// frame and never disturb the retained previous crop, so the stream
/// simply continues with the next frame.
pub struct MotionEngine {
    config: EngineConfig,
    buffers: DoubleBuffer,
}

impl MotionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            buffers: DoubleBuffer::new(),
        }
    }

    /// Estimate motion for one frame.
    ///
    /// The first frame after construction or after a crop-size change has
    /// nothing to match against and reports zero displacement. All
    /// validation happens before any buffer is touched, so a rejected
    /// frame leaves the engine exactly as it was.
    pub fn process(&mut self, frame: &RawFrame<'_>) -> Result<MotionEstimate> {
        let geometry = CropGeometry::compute(frame, self.config.crop_size)?;

        let target = self.buffers.begin_frame(geometry.side);
        geometry.extract_into(frame, target);

        let sensor = match self.buffers.previous() {
            Some(previous) => {
                match_blocks(self.buffers.current(), previous, self.config.search_radius)?
            }
            None => Displacement::default(),
        };

        let displacement = rotate_displacement(sensor, frame.rotation);
        let visualization = render_grayscale(self.buffers.current(), frame.rotation);
        self.buffers.commit();

        trace!(
            sensor_dx = sensor.dx,
            sensor_dy = sensor.dy,
            display_dx = displacement.dx,
            display_dy = displacement.dy,
            side = geometry.side,
            "frame processed"
        );

        Ok(MotionEstimate {
            displacement,
            visualization,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
