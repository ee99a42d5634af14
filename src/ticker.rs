//! Simulated playback clock.
//!
//! A `Ticker` is a background thread that sends one `Tick` per period until
//! it is stopped or dropped. `PlaybackClock` owns at most one live ticker and
//! starts, stops or restarts it to match the player: running only while
//! playing, and restarted whenever the current track changes. Every ticker
//! gets a fresh generation and ticks from older generations are discarded,
//! so a stopped ticker can never move the player.

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace, warn};

/// One elapsed period, tagged with the generation of the ticker that sent it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// A repeating timer thread. Stopping is idempotent and joins the thread.
pub struct Ticker {
    generation: u64,
    stop_tx: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a ticker that sends a `Tick` to `tx` every `period`.
    pub fn start(generation: u64, period: Duration, tx: Sender<Tick>) -> io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let join = thread::Builder::new()
            .name(format!("ticker-{generation}"))
            .spawn(move || run_ticker(generation, period, &stop_rx, &tx))?;

        debug!(generation, period_ms = period.as_millis() as u64, "ticker started");
        Ok(Self {
            generation,
            stop_tx: Some(stop_tx),
            join: Some(join),
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Signal the thread to exit and wait for it.
    pub fn stop(&mut self) {
        // Dropping the sender wakes `recv_timeout` with `Disconnected`.
        let Some(stop_tx) = self.stop_tx.take() else {
            return;
        };
        drop(stop_tx);
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                warn!(generation = self.generation, "ticker thread panicked");
            }
        }
        debug!(generation = self.generation, "ticker stopped");
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_ticker(generation: u64, period: Duration, stop_rx: &Receiver<()>, tx: &Sender<Tick>) {
    loop {
        match stop_rx.recv_timeout(period) {
            Err(RecvTimeoutError::Timeout) => {
                trace!(generation, "tick");
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Keeps a single ticker in step with the player's playback flag and track.
pub struct PlaybackClock {
    period: Duration,
    tx: Sender<Tick>,
    rx: Receiver<Tick>,
    ticker: Option<Ticker>,
    track: Option<usize>,
    next_generation: u64,
}

impl PlaybackClock {
    pub fn new(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel::<Tick>();
        Self {
            period,
            tx,
            rx,
            ticker: None,
            track: None,
            next_generation: 1,
        }
    }

    /// Start, stop or restart the ticker so it matches `playing` and `track`.
    pub fn sync(&mut self, playing: bool, track: usize) -> io::Result<()> {
        if !playing {
            self.stop();
            return Ok(());
        }

        let current = self.ticker.as_ref().is_some_and(Ticker::is_running);
        if current && self.track == Some(track) {
            return Ok(());
        }

        self.stop();
        let generation = self.next_generation;
        self.next_generation += 1;
        self.ticker = Some(Ticker::start(generation, self.period, self.tx.clone())?);
        self.track = Some(track);
        Ok(())
    }

    /// Take the next pending tick from the live ticker, discarding stale ones.
    pub fn take_tick(&mut self) -> bool {
        let Some(live) = self.live_generation() else {
            // Nothing is running, so everything queued is stale.
            while self.rx.try_recv().is_ok() {}
            return false;
        };

        while let Ok(tick) = self.rx.try_recv() {
            if tick.generation == live {
                return true;
            }
            trace!(generation = tick.generation, "discarding stale tick");
        }
        false
    }

    /// Stop the live ticker, if any.
    pub fn stop(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
        self.track = None;
    }

    pub fn is_running(&self) -> bool {
        self.live_generation().is_some()
    }

    /// Generation of the running ticker.
    pub fn live_generation(&self) -> Option<u64> {
        self.ticker
            .as_ref()
            .filter(|t| t.is_running())
            .map(Ticker::generation)
    }
}
