//! The simulation clock.
//!
//! A periodic trigger on a worker thread that derives rolling statistics
//! from measured elapsed time. The nominal rate is a lower bound on the
//! firing interval, never a substitute for measurement: fps always comes
//! from the observed inter-tick delta.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::sampler::{ChaChaSampler, ProcessingTimeSource};
use super::stats::FrameStats;

/// Nominal tick rate in events per second.
pub const TICK_RATE_HZ: u32 = 15;

/// Instantaneous fps from a measured tick delta.
///
/// Guards against zero elapsed time, which a coarse clock can report.
fn fps_from_elapsed(elapsed: Duration) -> f64 {
    let ms = elapsed.as_secs_f64() * 1000.0;
    if ms > 0.0 {
        1000.0 / ms
    } else {
        0.0
    }
}

/// Single-writer state behind the clock's mutex.
struct ClockState {
    stats: FrameStats,
    last_tick: Instant,
    sampler: Box<dyn ProcessingTimeSource>,
}

impl ClockState {
    fn tick(&mut self) -> FrameStats {
        let now = Instant::now();
        self.stats.fps = fps_from_elapsed(now.duration_since(self.last_tick));
        self.stats.frame_count += 1;
        self.stats.processing_time_ms = self.sampler.sample_ms();
        self.last_tick = now;
        self.stats.clone()
    }
}

fn lock(state: &Mutex<ClockState>) -> MutexGuard<'_, ClockState> {
    // A panicking worker cannot leave the stats half-written; a poisoned
    // lock is still safe to read.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Drives the frame-statistics simulation at a fixed nominal rate.
///
/// Created idle. [`start`](Self::start) spawns the periodic trigger;
/// every tick pushes a [`FrameStats`] snapshot to the receiver handed
/// out at construction. [`stop`](Self::stop) joins the trigger, so no
/// tick is delivered after it returns.
pub struct SimulationClock {
    state: Arc<Mutex<ClockState>>,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    events: Sender<FrameStats>,
}

impl SimulationClock {
    /// Creates an idle clock and the channel its snapshots arrive on.
    pub fn new(
        resolution: impl Into<String>,
        sampler: Box<dyn ProcessingTimeSource>,
    ) -> (Self, Receiver<FrameStats>) {
        let (tx, rx) = mpsc::channel();
        let clock = Self {
            state: Arc::new(Mutex::new(ClockState {
                stats: FrameStats::new(resolution),
                last_tick: Instant::now(),
                sampler,
            })),
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
            events: tx,
        };
        (clock, rx)
    }

    /// Creates a clock with the default OS-seeded processing-time sampler.
    pub fn with_default_sampler(resolution: impl Into<String>) -> (Self, Receiver<FrameStats>) {
        Self::new(resolution, Box::new(ChaChaSampler::from_os_entropy()))
    }

    /// Starts the periodic trigger. No-op if already running.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        {
            let mut state = lock(&self.state);
            state.stats.simulating = true;
            state.last_tick = Instant::now();
        }

        let state = Arc::clone(&self.state);
        let running = Arc::clone(&self.running);
        let events = self.events.clone();
        let period = Duration::from_secs_f64(1.0 / TICK_RATE_HZ as f64);

        self.worker = Some(thread::spawn(move || loop {
            thread::sleep(period);
            // The flag check inside the handler is what makes cancellation
            // immediate: a trigger that fires after stop() was requested
            // must not produce a tick.
            if !running.load(Ordering::SeqCst) {
                break;
            }
            let snapshot = {
                let mut state = lock(&state);
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                state.tick()
            };
            tracing::trace!(
                frame = snapshot.frame_count,
                fps = snapshot.fps,
                "simulation tick"
            );
            if events.send(snapshot).is_err() {
                // Consumer went away; nothing left to drive.
                break;
            }
        }));

        tracing::info!(rate_hz = TICK_RATE_HZ, "simulation started");
    }

    /// Stops the periodic trigger. No-op if already idle.
    ///
    /// Blocks until the trigger has exited: once this returns, no further
    /// tick is delivered.
    pub fn stop(&mut self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }

        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        lock(&self.state).stats.simulating = false;

        tracing::info!("simulation stopped");
    }

    /// Zeroes frame count, fps and processing time, then pushes a
    /// snapshot. Works whether or not the clock is running and does not
    /// stop it.
    pub fn reset(&self) {
        let snapshot = {
            let mut state = lock(&self.state);
            state.stats.reset();
            state.stats.clone()
        };
        let _ = self.events.send(snapshot);
        tracing::debug!("simulation stats reset");
    }

    /// Returns whether the clock is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> FrameStats {
        lock(&self.state).stats.clone()
    }
}

impl Drop for SimulationClock {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::sampler::FixedSampler;
    use super::*;

    fn test_clock() -> (SimulationClock, Receiver<FrameStats>) {
        SimulationClock::new("640x480", Box::new(FixedSampler(10.0)))
    }

    #[test]
    fn test_starts_idle() {
        let (clock, _rx) = test_clock();
        assert!(!clock.is_running());
        let stats = clock.stats();
        assert_eq!(stats.frame_count, 0);
        assert!(!stats.simulating);
    }

    #[test]
    fn test_tick_fires_after_start() {
        let (mut clock, rx) = test_clock();
        clock.start();

        // 15 Hz nominal; 200ms allows generous scheduler slack.
        let stats = rx
            .recv_timeout(Duration::from_millis(200))
            .expect("no tick within 200ms");

        assert_eq!(stats.frame_count, 1);
        assert_eq!(stats.processing_time_ms, 10.0);
        assert!(stats.simulating);
        assert!(stats.fps.is_finite());
        assert!(stats.fps >= 0.0);

        clock.stop();
    }

    #[test]
    fn test_frame_count_increments_per_tick() {
        let (mut clock, rx) = test_clock();
        clock.start();

        let mut previous = 0;
        for _ in 0..3 {
            let stats = rx
                .recv_timeout(Duration::from_millis(500))
                .expect("tick expected");
            assert_eq!(stats.frame_count, previous + 1);
            previous = stats.frame_count;
        }

        clock.stop();
    }

    #[test]
    fn test_no_tick_after_stop() {
        let (mut clock, rx) = test_clock();
        clock.start();
        rx.recv_timeout(Duration::from_millis(500))
            .expect("tick expected");
        clock.stop();
        assert!(!clock.is_running());
        assert!(!clock.stats().simulating);

        // Ticks delivered before stop() returned may still be queued.
        while rx.try_recv().is_ok() {}

        assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
    }

    #[test]
    fn test_start_twice_is_noop() {
        let (mut clock, rx) = test_clock();
        clock.start();
        clock.start();
        assert!(clock.is_running());

        // Still a single trigger: counts stay consecutive.
        let first = rx
            .recv_timeout(Duration::from_millis(500))
            .expect("tick expected");
        let second = rx
            .recv_timeout(Duration::from_millis(500))
            .expect("tick expected");
        assert_eq!(second.frame_count, first.frame_count + 1);

        clock.stop();
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let (mut clock, _rx) = test_clock();
        clock.stop();
        assert!(!clock.is_running());
    }

    #[test]
    fn test_reset_zeroes_and_emits_snapshot() {
        let (mut clock, rx) = test_clock();
        clock.start();
        rx.recv_timeout(Duration::from_millis(500))
            .expect("tick expected");
        clock.stop();
        while rx.try_recv().is_ok() {}

        clock.reset();

        let stats = rx.recv_timeout(Duration::from_millis(100)).expect("reset snapshot");
        assert_eq!(stats.frame_count, 0);
        assert_eq!(stats.fps, 0.0);
        assert_eq!(stats.processing_time_ms, 0.0);
        assert_eq!(clock.stats().frame_count, 0);
    }

    #[test]
    fn test_reset_does_not_stop_clock() {
        let (mut clock, rx) = test_clock();
        clock.start();
        rx.recv_timeout(Duration::from_millis(500))
            .expect("tick expected");

        clock.reset();
        assert!(clock.is_running());

        // Counting resumes from zero.
        let after = rx
            .iter()
            .find(|s| s.frame_count > 0)
            .expect("tick after reset");
        assert!(after.frame_count >= 1);

        clock.stop();
    }

    #[test]
    fn test_fps_guard() {
        assert_eq!(fps_from_elapsed(Duration::ZERO), 0.0);
        let fps = fps_from_elapsed(Duration::from_millis(100));
        assert!((fps - 10.0).abs() < 1e-9);
    }
}
