use ndarray::Array2;

use crate::error::{FlowError, Result};
use crate::frame::RawFrame;

/// Placement of the centered square crop within a raw frame.
///
/// Validation happens entirely in [`CropGeometry::compute`]; once a
/// geometry exists, extraction cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropGeometry {
    /// Side length, `min(crop_size, width, height)`.
    pub side: usize,
    /// Left edge of the crop in frame coordinates.
    pub left: usize,
    /// Top edge of the crop in frame coordinates.
    pub top: usize,
}

impl CropGeometry {
    /// Validate a raw frame and compute the centered crop placement.
    ///
    /// Rejects interleaved planes (pixel stride != 1), non-positive
    /// dimensions, malformed strides, and planes shorter than the crop
    /// region requires. A rejected frame produces no geometry and no
    /// state change anywhere.
    pub fn compute(frame: &RawFrame<'_>, crop_size: usize) -> Result<CropGeometry> {
        if frame.pixel_stride != 1 {
            return Err(FlowError::UnsupportedPixelStride(frame.pixel_stride));
        }
        if frame.width == 0 || frame.height == 0 || crop_size == 0 {
            return Err(FlowError::DegenerateGeometry {
                width: frame.width,
                height: frame.height,
            });
        }
        if frame.row_stride < frame.width {
            return Err(FlowError::InvalidRowStride {
                row_stride: frame.row_stride,
                width: frame.width,
            });
        }

        let side = crop_size.min(frame.width).min(frame.height);
        let left = (frame.width - side) / 2;
        let top = (frame.height - side) / 2;

        // Last byte the extraction will read.
        let required = (top + side - 1) * frame.row_stride + left + side;
        if frame.plane.len() < required {
            return Err(FlowError::TruncatedPlane {
                required,
                actual: frame.plane.len(),
            });
        }

        Ok(CropGeometry { side, left, top })
    }

    /// Copy the crop region row by row into a tightly packed buffer.
    ///
    /// `out` must be `side x side`; the engine guarantees this by sizing
    /// its buffers from the same geometry.
    pub fn extract_into(&self, frame: &RawFrame<'_>, out: &mut Array2<u8>) {
        for y in 0..self.side {
            let row_start = (self.top + y) * frame.row_stride + self.left;
            let src = &frame.plane[row_start..row_start + self.side];
            out.row_mut(y)
                .iter_mut()
                .zip(src)
                .for_each(|(dst, &sample)| *dst = sample);
        }
    }
}
