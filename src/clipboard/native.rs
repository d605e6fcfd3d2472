use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use super::{Clipboard, CopyError};

struct Tool {
	program: &'static str,
	args: &'static [&'static str],
	wayland_only: bool,
}

const TOOLS: &[Tool] = &[
	Tool {
		program: "wl-copy",
		args: &[],
		wayland_only: true,
	},
	Tool {
		program: "xclip",
		args: &["-selection", "clipboard"],
		wayland_only: false,
	},
	Tool {
		program: "xsel",
		args: &["--clipboard", "--input"],
		wayland_only: false,
	},
	Tool {
		program: "pbcopy",
		args: &[],
		wayland_only: false,
	},
	Tool {
		program: "clip.exe",
		args: &[],
		wayland_only: false,
	},
];

/// System clipboard reached through the platform's clipboard tools.
#[derive(Debug, Default)]
pub struct NativeClipboard;

impl NativeClipboard {
	#[must_use]
	pub fn new() -> Self {
		Self
	}
}

impl Clipboard for NativeClipboard {
	fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
		let wayland = env::var_os("WAYLAND_DISPLAY").is_some();
		let mut last_error = None;
		for tool in TOOLS.iter().filter(|tool| wayland || !tool.wayland_only) {
			match pipe_to(tool, text) {
				Ok(()) => return Ok(()),
				Err(CopyError::Unavailable) => {}
				Err(err) => last_error = Some(err),
			}
		}
		Err(last_error.unwrap_or(CopyError::Unavailable))
	}
}

fn pipe_to(tool: &Tool, text: &str) -> Result<(), CopyError> {
	let command_error = |reason: String| CopyError::Command {
		program: tool.program,
		reason,
	};

	let mut child = match Command::new(tool.program)
		.args(tool.args)
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
	{
		Ok(child) => child,
		Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(CopyError::Unavailable),
		Err(err) => return Err(command_error(err.to_string())),
	};

	if let Some(mut stdin) = child.stdin.take() {
		stdin
			.write_all(text.as_bytes())
			.map_err(|err| command_error(err.to_string()))?;
	}

	let status = child.wait().map_err(|err| command_error(err.to_string()))?;
	if status.success() {
		Ok(())
	} else {
		Err(command_error(format!("exited with {status}")))
	}
}
