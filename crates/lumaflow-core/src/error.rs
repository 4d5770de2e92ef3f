use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Unsupported pixel stride: {0} (expected 1 byte per luma sample)")]
    UnsupportedPixelStride(usize),

    #[error("Degenerate frame geometry: {width}x{height}")]
    DegenerateGeometry { width: usize, height: usize },

    #[error("Row stride {row_stride} is smaller than frame width {width}")]
    InvalidRowStride { row_stride: usize, width: usize },

    #[error("Luma plane truncated: {actual} bytes, need at least {required}")]
    TruncatedPlane { required: usize, actual: usize },

    #[error("Crop size mismatch: current {current}x{current}, previous {previous}x{previous}")]
    CropSizeMismatch { current: usize, previous: usize },
}

pub type Result<T> = std::result::Result<T, FlowError>;
