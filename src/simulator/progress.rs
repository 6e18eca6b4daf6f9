use std::io::{self, Write};
use std::time::Instant;

const BAR_WIDTH: usize = 30;

/// Single-line progress display for an epoch loop.
///
/// Redraws in place with a carriage return until the final epoch, then
/// finishes the line.
pub struct ProgressBar {
    start: Instant,
    max: usize,
}

impl ProgressBar {
    pub fn new(max: usize) -> Self {
        assert!(max > 0, "progress bar needs at least one step");
        ProgressBar {
            start: Instant::now(),
            max,
        }
    }

    /// Redraw the line for the given epoch.
    pub fn update(&mut self, count: usize, loss: f64, validity: f64) {
        let line = format!(
            "Time: {}  Epoch: {}/{} [{}]  Loss: {:.3}  Validity: {:.1}%",
            self.elapsed(),
            count,
            self.max,
            self.bar(count),
            loss,
            validity * 100.0
        );

        if count < self.max {
            print!("{}\r", line);
        } else {
            println!("{}", line);
        }
        let _ = io::stdout().flush();
    }

    fn bar(&self, count: usize) -> String {
        let position = (BAR_WIDTH as f64 * count as f64 / self.max as f64).round() as usize;
        let mut bar = "-".repeat(position.min(BAR_WIDTH - 1));
        bar.push('>');
        while bar.len() < BAR_WIDTH {
            bar.push(' ');
        }
        bar
    }

    fn elapsed(&self) -> String {
        let seconds = self.start.elapsed().as_secs();
        format!(
            "{}:{:02}:{:02}",
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60
        )
    }
}
