//! Background countdown timer
//!
//! A worker thread sleeps in one-second ticks and sends a single message on
//! expiry. The input loop polls `is_expired` between reads.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

pub struct Countdown {
    rx: Receiver<()>,
    expired: bool,
    started: Instant,
}

impl Countdown {
    /// Spawn the timer thread and start counting
    pub fn start(duration: Duration) -> Self {
        let (tx, rx) = mpsc::sync_channel(1);

        thread::spawn(move || {
            let mut remaining = duration;
            while !remaining.is_zero() {
                let tick = remaining.min(TICK);
                thread::sleep(tick);
                remaining -= tick;
            }
            // Receiver may be gone if the round was abandoned
            let _ = tx.send(());
        });

        Countdown {
            rx,
            expired: false,
            started: Instant::now(),
        }
    }

    /// Non-blocking check; stays true once the signal has arrived
    pub fn is_expired(&mut self) -> bool {
        if !self.expired {
            match self.rx.try_recv() {
                Ok(()) | Err(TryRecvError::Disconnected) => self.expired = true,
                Err(TryRecvError::Empty) => {}
            }
        }
        self.expired
    }

    /// Block until the timer fires
    pub fn wait(&mut self) {
        if !self.expired {
            let _ = self.rx.recv();
            self.expired = true;
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
