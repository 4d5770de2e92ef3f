use ndarray::Array2;
use tracing::debug;

/// Double-buffered frame retention.
///
/// Owns two equally sized crop buffers whose "current" and "previous"
/// roles alternate by flipping an index, never by copying. The buffers
/// never leave this struct; callers get references at most.
///
/// Per-frame protocol: [`begin_frame`] hands out the writable buffer,
/// [`previous`] exposes the retained crop for matching, and [`commit`]
/// relabels the just-written buffer as next round's previous. A frame
/// that fails before `commit` leaves the retained crop untouched.
///
/// [`begin_frame`]: DoubleBuffer::begin_frame
/// [`previous`]: DoubleBuffer::previous
/// [`commit`]: DoubleBuffer::commit
#[derive(Debug)]
pub struct DoubleBuffer {
    buffers: [Array2<u8>; 2],
    /// Index of the buffer receiving the in-flight frame.
    current: usize,
    side: usize,
    has_previous: bool,
}

impl DoubleBuffer {
    pub fn new() -> Self {
        Self {
            buffers: [Array2::zeros((0, 0)), Array2::zeros((0, 0))],
            current: 0,
            side: 0,
            has_previous: false,
        }
    }

    /// Prepare for a new frame of the given crop side and return the
    /// buffer the extractor should fill.
    ///
    /// A side change reallocates both buffers and discards the retained
    /// previous crop: the comparison geometry changed, so any motion
    /// history is stale.
    pub fn begin_frame(&mut self, side: usize) -> &mut Array2<u8> {
        if side != self.side {
            debug!(old_side = self.side, new_side = side, "crop side changed, resetting frame history");
            self.buffers = [Array2::zeros((side, side)), Array2::zeros((side, side))];
            self.side = side;
            self.has_previous = false;
        }
        &mut self.buffers[self.current]
    }

    /// The crop written during this frame's `begin_frame`.
    pub fn current(&self) -> &Array2<u8> {
        &self.buffers[self.current]
    }

    /// The crop retained from the last committed frame, if any.
    pub fn previous(&self) -> Option<&Array2<u8>> {
        self.has_previous.then(|| &self.buffers[1 - self.current])
    }

    /// Relabel the in-flight buffer as the previous crop for the next
    /// frame. No bytes move.
    pub fn commit(&mut self) {
        self.current = 1 - self.current;
        self.has_previous = true;
    }

    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    pub fn side(&self) -> usize {
        self.side
    }
}

impl Default for DoubleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
