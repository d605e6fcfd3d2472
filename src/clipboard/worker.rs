use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::debug;

use super::{Clipboard, CopyError};
use crate::ui::CardKey;

pub(super) enum WorkerCommand {
	Copy(CopyRequest),
	Shutdown,
}

pub(super) struct CopyRequest {
	pub(super) glyph: String,
	pub(super) source: Option<CardKey>,
}

/// Completion of one primary-path copy request.
#[derive(Debug)]
pub struct CopyReport {
	pub glyph: String,
	pub source: Option<CardKey>,
	pub result: Result<(), CopyError>,
}

/// Run `clipboard` on its own thread, answering each request with a report.
pub(super) fn spawn(mut clipboard: Box<dyn Clipboard>) -> (Sender<WorkerCommand>, Receiver<CopyReport>) {
	let (command_tx, command_rx) = mpsc::channel::<WorkerCommand>();
	let (report_tx, report_rx) = mpsc::channel();

	thread::spawn(move || {
		while let Ok(command) = command_rx.recv() {
			match command {
				WorkerCommand::Copy(request) => {
					let result = clipboard.write_text(&request.glyph);
					let report = CopyReport {
						glyph: request.glyph,
						source: request.source,
						result,
					};
					if report_tx.send(report).is_err() {
						break;
					}
				}
				WorkerCommand::Shutdown => break,
			}
		}
		debug!("clipboard worker stopped");
	});

	(command_tx, report_rx)
}
