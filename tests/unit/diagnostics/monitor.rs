use super::*;
use crate::foundation::core::FrameRange;

#[test]
fn running_average_tracks_every_frame() {
    let mut m = FrameMetrics::default();
    assert_eq!(m.fps(), 0.0);
    m.record(10.0);
    m.record(20.0);
    m.record(30.0);
    assert_eq!(m.frame_count, 3);
    assert_eq!(m.frame_time_ms, 30.0);
    assert!((m.average_frame_time_ms - 20.0).abs() < 1e-12);
    assert!((m.fps() - 50.0).abs() < 1e-9);
}

#[test]
fn noop_observer_accepts_notifications() {
    let mut o = NoopObserver;
    o.frame_started(FrameIndex(0));
    o.frame_finished(FrameIndex(0));
    let mut boxed = default_observer();
    boxed.frame_started(FrameIndex(1));
    boxed.frame_finished(FrameIndex(1));
}

#[cfg(feature = "diagnostics")]
#[test]
fn perf_monitor_counts_frames_and_logs() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut m = PerfMonitor::new();
    for f in 0..61 {
        m.frame_started(FrameIndex(f));
        m.frame_finished(FrameIndex(f));
    }
    let s = m.metrics();
    assert_eq!(s.frame_count, 61);
    assert!(s.average_frame_time_ms >= 0.0);
}

#[cfg(feature = "diagnostics")]
#[test]
fn perf_monitor_spreads_a_chunk_over_its_frames() {
    let mut m = PerfMonitor::new();
    m.frame_started(FrameIndex(30));
    std::thread::sleep(std::time::Duration::from_millis(30));
    m.chunk_finished(FrameRange::new(FrameIndex(30), FrameIndex(33)).unwrap());
    let s = m.metrics();
    assert_eq!(s.frame_count, 3);
    assert!(s.frame_time_ms >= 9.0, "{s:?}");
    assert!((s.frame_time_ms - s.average_frame_time_ms).abs() < 1e-9);
}

#[test]
fn default_chunk_hook_finishes_every_frame() {
    #[derive(Default)]
    struct Count(Vec<u64>);
    impl FrameObserver for Count {
        fn frame_finished(&mut self, frame: FrameIndex) {
            self.0.push(frame.0);
        }
    }
    let mut c = Count::default();
    c.chunk_finished(FrameRange::new(FrameIndex(4), FrameIndex(7)).unwrap());
    assert_eq!(c.0, [4, 5, 6]);
}
