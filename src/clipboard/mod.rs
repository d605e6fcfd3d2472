//! Copying glyphs to the clipboard, with transient feedback.
//!
//! The primary path hands the glyph to a [`Clipboard`] backend running on a
//! worker thread, so a slow clipboard tool never stalls the UI. Reports come
//! back through [`CopyAction::pump`]. When the primary path fails, or is not
//! available at all, the [`FallbackCopy`] runs synchronously instead.

mod feedback;
mod native;
pub mod osc52;
mod worker;

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Instant;

use log::{error, info, warn};
use thiserror::Error;

pub use feedback::{FLASH_DURATION, Feedback, TOAST_DURATION};
pub use native::NativeClipboard;
pub use osc52::Osc52;
pub use worker::CopyReport;

use crate::ui::CardKey;
use worker::{CopyRequest, WorkerCommand};

/// Reasons a copy attempt can fail. None of them are shown to the user.
#[derive(Debug, Error)]
pub enum CopyError {
	#[error("no clipboard tool available")]
	Unavailable,

	#[error("clipboard command `{program}` failed: {reason}")]
	Command {
		program: &'static str,
		reason: String,
	},

	#[error("failed to write clipboard sequence: {0}")]
	Io(#[from] io::Error),

	#[error("clipboard worker is not running")]
	Disconnected,
}

/// Asynchronous-capable clipboard used by the primary copy path.
pub trait Clipboard: Send {
	fn write_text(&mut self, text: &str) -> Result<(), CopyError>;
}

/// Synchronous copy used when the primary path fails.
pub trait FallbackCopy {
	fn copy(&mut self, text: &str) -> Result<(), CopyError>;
}

struct WorkerHandle {
	commands: Sender<WorkerCommand>,
	reports: Receiver<CopyReport>,
}

/// Executes copy requests and tracks their feedback.
pub struct CopyAction {
	worker: Option<WorkerHandle>,
	fallback: Option<Box<dyn FallbackCopy>>,
	feedback: Feedback,
	pending: usize,
	copied: Vec<String>,
}

impl CopyAction {
	/// Build an action from explicit backends; either may be absent.
	pub fn new(
		primary: Option<Box<dyn Clipboard>>,
		fallback: Option<Box<dyn FallbackCopy>>,
	) -> Self {
		let worker = primary.map(|clipboard| {
			let (commands, reports) = worker::spawn(clipboard);
			WorkerHandle { commands, reports }
		});
		Self {
			worker,
			fallback,
			feedback: Feedback::default(),
			pending: 0,
			copied: Vec::new(),
		}
	}

	/// Native clipboard tools, optionally backed by OSC 52 on stdout.
	#[must_use]
	pub fn system(osc52_fallback: bool) -> Self {
		let fallback: Option<Box<dyn FallbackCopy>> = if osc52_fallback {
			Some(Box::new(Osc52::stdout()))
		} else {
			None
		};
		Self::new(Some(Box::new(NativeClipboard::new())), fallback)
	}

	/// Request that `glyph` be copied. Returns immediately.
	///
	/// `source` is the card to flash once the primary path succeeds.
	pub fn copy(&mut self, glyph: &str, source: Option<CardKey>, now: Instant) {
		let Some(worker) = &self.worker else {
			self.run_fallback(glyph, &CopyError::Unavailable, now);
			return;
		};

		let request = CopyRequest {
			glyph: glyph.to_string(),
			source,
		};
		if worker.commands.send(WorkerCommand::Copy(request)).is_err() {
			self.worker = None;
			self.run_fallback(glyph, &CopyError::Disconnected, now);
			return;
		}
		self.pending += 1;
	}

	/// Apply every report the worker has delivered. Returns how many.
	pub fn pump(&mut self, now: Instant) -> usize {
		let mut reports = Vec::new();
		let mut disconnected = false;
		if let Some(worker) = &self.worker {
			loop {
				match worker.reports.try_recv() {
					Ok(report) => reports.push(report),
					Err(TryRecvError::Empty) => break,
					Err(TryRecvError::Disconnected) => {
						disconnected = true;
						break;
					}
				}
			}
		}
		if disconnected {
			warn!("clipboard worker disconnected");
			self.worker = None;
			self.pending = 0;
		}

		let handled = reports.len();
		for report in reports {
			self.pending = self.pending.saturating_sub(1);
			self.apply(report, now);
		}
		self.feedback.expire(now);
		handled
	}

	fn apply(&mut self, report: CopyReport, now: Instant) {
		match report.result {
			Ok(()) => {
				info!("copied {} to the clipboard", report.glyph);
				self.succeeded(&report.glyph, now);
				if let Some(source) = report.source {
					self.feedback.flash(source, now);
				}
			}
			Err(err) => self.run_fallback(&report.glyph, &err, now),
		}
	}

	fn run_fallback(&mut self, glyph: &str, cause: &CopyError, now: Instant) {
		warn!("failed to copy {glyph}: {cause}; trying fallback");
		let Some(fallback) = self.fallback.as_mut() else {
			error!("fallback copy unavailable; {glyph} was not copied");
			return;
		};
		match fallback.copy(glyph) {
			Ok(()) => {
				info!("copied {glyph} through the fallback path");
				self.succeeded(glyph, now);
			}
			Err(err) => error!("fallback copy failed: {err}"),
		}
	}

	fn succeeded(&mut self, glyph: &str, now: Instant) {
		self.feedback
			.show_toast(format!("Copied {glyph} to clipboard"), now);
		self.copied.push(glyph.to_string());
	}

	#[must_use]
	pub fn feedback(&self) -> &Feedback {
		&self.feedback
	}

	/// Glyphs copied successfully so far, oldest first.
	#[must_use]
	pub fn copied(&self) -> &[String] {
		&self.copied
	}

	/// Whether a primary-path request is still awaiting its report.
	#[must_use]
	pub fn in_flight(&self) -> bool {
		self.pending > 0
	}

	/// Stop the worker thread. Safe to call more than once.
	pub fn shutdown(&mut self) {
		if let Some(worker) = self.worker.take() {
			let _ = worker.commands.send(WorkerCommand::Shutdown);
		}
	}
}

impl Drop for CopyAction {
	fn drop(&mut self) {
		self.shutdown();
	}
}
