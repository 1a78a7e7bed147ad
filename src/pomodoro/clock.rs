//! Wall-clock time source.

use chrono::{DateTime, Local};

/// Source of the current local time and of blocking waits.
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> DateTime<Local>;

    /// Block the calling thread for `duration`.
    fn sleep(&self, duration: std::time::Duration);
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }

    fn sleep(&self, duration: std::time::Duration) {
        (**self).sleep(duration);
    }
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep(&self, duration: std::time::Duration) {
        std::thread::sleep(duration);
    }
}

/// Virtual clock that jumps forward on every sleep.
#[cfg(test)]
#[derive(Debug)]
pub struct FakeClock {
    now: std::cell::Cell<DateTime<Local>>,
    sleeps: std::cell::Cell<u64>,
}

#[cfg(test)]
impl FakeClock {
    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            now: std::cell::Cell::new(now),
            sleeps: std::cell::Cell::new(0),
        }
    }

    pub fn sleeps(&self) -> u64 {
        self.sleeps.get()
    }
}

#[cfg(test)]
impl Clock for FakeClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }

    fn sleep(&self, duration: std::time::Duration) {
        let step = chrono::Duration::from_std(duration).unwrap_or_else(|_| chrono::Duration::zero());
        self.now.set(self.now.get() + step);
        self.sleeps.set(self.sleeps.get() + 1);
    }
}
