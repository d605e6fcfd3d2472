//! Logging sink for the interactive session.
//!
//! Records go through the `log` facade into `tui-logger`'s buffer, which the
//! log pane drains and displays. Nothing is written to the terminal directly,
//! since that would tear the UI.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the logger at `level`. Later calls are ignored.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		if tui_logger::init_logger(level).is_ok() {
			tui_logger::set_default_level(level);
			log::debug!("logging initialised at {level}");
		}
	});
}

/// Move buffered records into the widget's view.
pub fn pump() {
	tui_logger::move_events();
}
