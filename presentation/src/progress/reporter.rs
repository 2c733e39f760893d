//! Progress reporting for streamed replies

use crate::scramble::Scramble;
use indicatif::{ProgressBar, ProgressStyle};
use statehouse_application::StreamProgress;
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

const CONNECT_TEXT: &str = "Connecting to the statehouse";
const SPINNER_TICK: Duration = Duration::from_millis(80);
const SCRAMBLE_TICK: Duration = Duration::from_millis(60);

/// Prints streamed reply text to stdout as it arrives.
///
/// Until the first delta lands, a spinner shows the connect text
/// decoding into place via [`Scramble`]. The first delta clears the
/// spinner and from then on chunks are written straight through.
pub struct StreamPrinter {
    spinner: Mutex<Option<ProgressBar>>,
    show_spinner: bool,
}

impl StreamPrinter {
    pub fn new(show_spinner: bool) -> Self {
        Self {
            spinner: Mutex::new(None),
            show_spinner,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    fn clear_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl StreamProgress for StreamPrinter {
    fn on_stream_start(&self) {
        if !self.show_spinner {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        let mut scramble = Scramble::new(CONNECT_TEXT);
        pb.set_message(scramble.frame());
        pb.enable_steady_tick(SPINNER_TICK);

        // The reveal runs on its own thread; finish_and_clear stops it
        let ticker = pb.clone();
        std::thread::spawn(move || {
            while !ticker.is_finished() && !scramble.is_done() {
                std::thread::sleep(SCRAMBLE_TICK);
                scramble.tick();
                ticker.set_message(scramble.frame());
            }
        });

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_delta(&self, chunk: &str, _accumulated: &str) {
        self.clear_spinner();
        print!("{}", chunk);
        let _ = std::io::stdout().flush();
    }

    fn on_stream_end(&self) {
        // Covers streams that ended before any delta arrived
        self.clear_spinner();
        println!();
    }
}
