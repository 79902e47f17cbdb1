//! Frame-timing diagnostics.
//!
//! Observers are told when the pipeline starts and finishes a frame. They never see or change
//! scene content, so the rendered output is identical with or without one attached.

use crate::foundation::core::{FrameIndex, FrameRange};

/// Frames between two timing log lines.
pub const LOG_EVERY_FRAMES: u64 = 30;

/// Receives frame lifecycle notifications from the render pipeline.
pub trait FrameObserver: Send {
    /// Called before work on `frame` starts.
    fn frame_started(&mut self, _frame: FrameIndex) {}

    /// Called once `frame` is available, in frame order.
    fn frame_finished(&mut self, frame: FrameIndex);

    /// Called when a whole chunk was rendered at once, after one `frame_started` for its first
    /// frame.
    fn chunk_finished(&mut self, chunk: FrameRange) {
        for f in chunk.frames() {
            self.frame_finished(f);
        }
    }
}

/// Observer that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl FrameObserver for NoopObserver {
    fn frame_finished(&mut self, _frame: FrameIndex) {}
}

/// Running frame-time statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameMetrics {
    /// Duration of the last recorded frame.
    pub frame_time_ms: f64,
    /// Mean over every recorded frame.
    pub average_frame_time_ms: f64,
    /// Frames recorded so far.
    pub frame_count: u64,
}

impl FrameMetrics {
    /// Fold one frame duration into the running average.
    pub fn record(&mut self, frame_time_ms: f64) {
        self.frame_count += 1;
        self.frame_time_ms = frame_time_ms;
        let n = self.frame_count as f64;
        self.average_frame_time_ms = (self.average_frame_time_ms * (n - 1.0) + frame_time_ms) / n;
    }

    /// Throughput implied by the average frame time, 0 before anything was recorded.
    pub fn fps(&self) -> f64 {
        if self.average_frame_time_ms > 0.0 {
            1000.0 / self.average_frame_time_ms
        } else {
            0.0
        }
    }
}

/// Wall-clock frame timer that logs through `tracing`.
///
/// A frame's time runs from the previous mark (the last `frame_started` or `frame_finished`) to
/// its `frame_finished`. A chunk rendered in parallel is one sample shared evenly by its frames.
/// Every frame whose index is a multiple of [`LOG_EVERY_FRAMES`] emits one `info` event.
#[cfg(feature = "diagnostics")]
#[derive(Debug)]
pub struct PerfMonitor {
    mark: Option<std::time::Instant>,
    metrics: FrameMetrics,
}

#[cfg(feature = "diagnostics")]
impl PerfMonitor {
    /// Fresh monitor with no frames recorded.
    pub fn new() -> Self {
        Self {
            mark: None,
            metrics: FrameMetrics::default(),
        }
    }

    /// Snapshot of the statistics so far.
    pub fn metrics(&self) -> FrameMetrics {
        self.metrics
    }

    fn elapsed_ms(&mut self) -> f64 {
        let now = std::time::Instant::now();
        let elapsed = self
            .mark
            .map(|m| now.duration_since(m).as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        self.mark = Some(now);
        elapsed
    }

    fn record(&mut self, frame: FrameIndex, frame_time_ms: f64) {
        self.metrics.record(frame_time_ms);
        if frame.0 % LOG_EVERY_FRAMES == 0 {
            tracing::info!(
                frame = frame.0,
                frame_time_ms = format_args!("{:.2}", self.metrics.frame_time_ms),
                avg_frame_time_ms = format_args!("{:.2}", self.metrics.average_frame_time_ms),
                fps = format_args!("{:.1}", self.metrics.fps()),
                "frame performance"
            );
        }
    }
}

#[cfg(feature = "diagnostics")]
impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "diagnostics")]
impl FrameObserver for PerfMonitor {
    fn frame_started(&mut self, _frame: FrameIndex) {
        self.mark = Some(std::time::Instant::now());
    }

    fn frame_finished(&mut self, frame: FrameIndex) {
        let elapsed = self.elapsed_ms();
        self.record(frame, elapsed);
    }

    fn chunk_finished(&mut self, chunk: FrameRange) {
        let per_frame = self.elapsed_ms() / chunk.len_frames().max(1) as f64;
        for f in chunk.frames() {
            self.record(f, per_frame);
        }
    }
}

/// The monitor in `diagnostics` builds, a no-op otherwise.
pub fn default_observer() -> Box<dyn FrameObserver> {
    #[cfg(feature = "diagnostics")]
    {
        Box::new(PerfMonitor::new())
    }
    #[cfg(not(feature = "diagnostics"))]
    {
        Box::new(NoopObserver)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagnostics/monitor.rs"]
mod tests;
