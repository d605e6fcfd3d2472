use std::env;
use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{CopyError, FallbackCopy};

/// Build the OSC 52 "set clipboard" sequence, wrapped for tmux passthrough
/// when `tmux` is set.
#[must_use]
pub fn sequence(text: &str, tmux: bool) -> String {
	let encoded = STANDARD.encode(text);
	if tmux {
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	}
}

/// Fallback copy that asks the terminal itself to set the clipboard.
///
/// The write is synchronous; whether the terminal honours it cannot be
/// observed, so only write failures are reported.
#[derive(Debug)]
pub struct Osc52<W> {
	writer: W,
	tmux: bool,
}

impl Osc52<io::Stdout> {
	/// Write to stdout, detecting tmux from the environment.
	#[must_use]
	pub fn stdout() -> Self {
		Self::new(io::stdout(), env::var_os("TMUX").is_some())
	}
}

impl<W: Write> Osc52<W> {
	pub fn new(writer: W, tmux: bool) -> Self {
		Self { writer, tmux }
	}
}

impl<W: Write> FallbackCopy for Osc52<W> {
	fn copy(&mut self, text: &str) -> Result<(), CopyError> {
		self.writer.write_all(sequence(text, self.tmux).as_bytes())?;
		self.writer.flush()?;
		Ok(())
	}
}
