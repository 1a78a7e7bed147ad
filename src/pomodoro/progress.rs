//! Console progress display for running intervals.

use std::io::Write;

use colored::Colorize;

use super::timer::{render_progress_bar, Countdown};

const BAR_WIDTH: usize = 30;

/// Cosmetic display of a running countdown.
///
/// Implementations must not influence timing.
pub trait ProgressIndicator {
    /// Called once before the first tick.
    fn begin(&mut self, label: &str, countdown: &Countdown);

    /// Called once per elapsed second.
    fn tick(&mut self, countdown: &Countdown);

    /// Called once after the last tick.
    fn finish(&mut self, countdown: &Countdown);
}

impl<T: ProgressIndicator + ?Sized> ProgressIndicator for &mut T {
    fn begin(&mut self, label: &str, countdown: &Countdown) {
        (**self).begin(label, countdown);
    }

    fn tick(&mut self, countdown: &Countdown) {
        (**self).tick(countdown);
    }

    fn finish(&mut self, countdown: &Countdown) {
        (**self).finish(countdown);
    }
}

/// Progress bar redrawn in place on a terminal line.
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    /// Draw on an arbitrary writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, countdown: &Countdown) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (countdown.progress() * 100.0) as u8;
        // Display errors are not worth interrupting a timer for.
        let _ = write!(
            self.out,
            "\r  {} {} {:>3}%",
            render_progress_bar(countdown.progress(), BAR_WIDTH),
            countdown.format_remaining(),
            percent
        );
        let _ = self.out.flush();
    }
}

impl<W: Write> ProgressIndicator for ConsoleProgress<W> {
    fn begin(&mut self, label: &str, countdown: &Countdown) {
        let _ = writeln!(self.out, "\n{}", label.bold());
        self.draw(countdown);
    }

    fn tick(&mut self, countdown: &Countdown) {
        self.draw(countdown);
    }

    fn finish(&mut self, _countdown: &Countdown) {
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}
