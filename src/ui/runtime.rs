use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::App;
use super::outcome::GlyphOutcome;
use crate::catalog::CatalogSet;
use crate::clipboard::CopyAction;
use crate::logging;

const EXIT_GRACE: Duration = Duration::from_millis(250);

/// Construct an [`App`] over `catalogs` and run it to completion.
pub fn run(catalogs: CatalogSet) -> Result<GlyphOutcome> {
	let mut app = App::new(Arc::new(catalogs), CopyAction::system(true));
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<GlyphOutcome> {
		let mut terminal = ratatui::init();
		execute!(stdout(), EnableMouseCapture)?;
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<GlyphOutcome> = 'event_loop: loop {
			logging::pump();
			self.copy.pump(Instant::now());

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key) {
							maybe_outcome = Some(outcome);
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(Duration::from_millis(16));
		};

		let result = result.map(|outcome| self.settle_copies(outcome));

		let _ = execute!(stdout(), DisableMouseCapture);
		ratatui::restore();
		self.copy.shutdown();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	/// Give copies still in flight a moment to land in the outcome.
	fn settle_copies(&mut self, mut outcome: GlyphOutcome) -> GlyphOutcome {
		let deadline = Instant::now() + EXIT_GRACE;
		while self.copy.in_flight() && Instant::now() < deadline {
			self.copy.pump(Instant::now());
			thread::sleep(Duration::from_millis(5));
		}
		outcome.copied = self.copy.copied().to_vec();
		outcome
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::clipboard::{Clipboard, CopyError};

	struct SlowClipboard;

	impl Clipboard for SlowClipboard {
		fn write_text(&mut self, _text: &str) -> Result<(), CopyError> {
			thread::sleep(Duration::from_millis(20));
			Ok(())
		}
	}

	#[test]
	fn exit_waits_for_in_flight_copies() {
		let copy = CopyAction::new(Some(Box::new(SlowClipboard)), None);
		let mut app = App::new(Arc::new(CatalogSet::builtin()), copy);
		app.set_query("omega");
		app.copy_cursor();
		let outcome = app.outcome();
		assert!(outcome.copied.is_empty());

		let outcome = app.settle_copies(outcome);
		assert_eq!(outcome.copied, ["ω"]);
		assert_eq!(outcome.query, "omega");
	}
}
