//! Single-consumer frame worker.
//!
//! The engine itself is synchronous and has no queue; this module is the
//! explicit queue form of that contract for callers whose camera delivers
//! frames on another thread. One worker thread owns the engine, frames
//! cross the channel by value, and a backlog is resolved by keeping only
//! the newest frame.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::{MotionEngine, MotionEstimate};
use crate::error::FlowError;
use crate::frame::{RawFrame, Rotation};

/// Owned counterpart of [`RawFrame`], suitable for sending to the worker.
#[derive(Clone, Debug)]
pub struct OwnedFrame {
    pub width: usize,
    pub height: usize,
    pub plane: Vec<u8>,
    pub row_stride: usize,
    pub pixel_stride: usize,
    pub rotation: Rotation,
}

impl OwnedFrame {
    pub fn as_raw(&self) -> RawFrame<'_> {
        RawFrame {
            width: self.width,
            height: self.height,
            plane: &self.plane,
            row_stride: self.row_stride,
            pixel_stride: self.pixel_stride,
            rotation: self.rotation,
        }
    }
}

/// Receives per-frame results from the worker thread.
///
/// Dropped frames are reported rather than hidden; the default is to
/// ignore them, since motion estimation is best-effort.
pub trait MotionSink: Send {
    fn on_estimate(&mut self, estimate: MotionEstimate);

    fn on_dropped(&mut self, _error: &FlowError) {}
}

/// A dedicated thread running a [`MotionEngine`] over a frame channel.
pub struct MotionWorker {
    sender: Sender<OwnedFrame>,
    handle: JoinHandle<()>,
}

impl MotionWorker {
    pub fn spawn<S: MotionSink + 'static>(config: EngineConfig, mut sink: S) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::spawn(move || {
            let mut engine = MotionEngine::new(config);
            while let Some(frame) = latest_frame(&receiver) {
                match engine.process(&frame.as_raw()) {
                    Ok(estimate) => sink.on_estimate(estimate),
                    Err(error) => {
                        debug!(%error, "frame dropped");
                        sink.on_dropped(&error);
                    }
                }
            }
        });
        Self { sender, handle }
    }

    /// Queue a frame for processing. Returns false once the worker has
    /// stopped.
    pub fn submit(&self, frame: OwnedFrame) -> bool {
        self.sender.send(frame).is_ok()
    }

    /// Close the channel and wait for the worker to finish the frames it
    /// still considers current.
    pub fn join(self) {
        drop(self.sender);
        let _ = self.handle.join();
    }
}

/// Block for the next frame, then drain the queue so only the newest one
/// is processed. Older frames describe motion that already happened; with
/// a single previous-frame of state there is nothing useful to do with
/// them.
fn latest_frame(receiver: &Receiver<OwnedFrame>) -> Option<OwnedFrame> {
    let mut frame = receiver.recv().ok()?;
    let mut skipped = 0usize;
    loop {
        match receiver.try_recv() {
            Ok(newer) => {
                frame = newer;
                skipped += 1;
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
    if skipped > 0 {
        debug!(skipped, "skipping stale frames, keeping only the latest");
    }
    Some(frame)
}
