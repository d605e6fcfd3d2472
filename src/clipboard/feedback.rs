use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::ui::CardKey;

/// How long the "copied" toast stays up.
pub const TOAST_DURATION: Duration = Duration::from_millis(2000);
/// How long a card shows its "copied" flash.
pub const FLASH_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Toast {
	message: String,
	expires_at: Instant,
}

/// Transient copy feedback, reverted by deadline rather than by input.
///
/// Re-triggering replaces the existing deadline; nothing is queued.
#[derive(Debug, Default)]
pub struct Feedback {
	toast: Option<Toast>,
	flashes: HashMap<CardKey, Instant>,
}

impl Feedback {
	pub fn show_toast(&mut self, message: impl Into<String>, now: Instant) {
		self.toast = Some(Toast {
			message: message.into(),
			expires_at: now + TOAST_DURATION,
		});
	}

	pub fn flash(&mut self, key: CardKey, now: Instant) {
		self.flashes.insert(key, now + FLASH_DURATION);
	}

	/// The toast message, while it is still visible at `now`.
	#[must_use]
	pub fn toast(&self, now: Instant) -> Option<&str> {
		self.toast
			.as_ref()
			.filter(|toast| now < toast.expires_at)
			.map(|toast| toast.message.as_str())
	}

	#[must_use]
	pub fn is_flashing(&self, key: CardKey, now: Instant) -> bool {
		self.flashes
			.get(&key)
			.is_some_and(|expires_at| now < *expires_at)
	}

	/// Drop everything that has expired by `now`.
	pub fn expire(&mut self, now: Instant) {
		if self
			.toast
			.as_ref()
			.is_some_and(|toast| now >= toast.expires_at)
		{
			self.toast = None;
		}
		self.flashes.retain(|_, expires_at| now < *expires_at);
	}

	#[must_use]
	pub fn is_idle(&self) -> bool {
		self.toast.is_none() && self.flashes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::CatalogSet;

	fn key(entry: usize) -> CardKey {
		CardKey {
			catalog: CatalogSet::builtin().first(),
			entry,
		}
	}

	#[test]
	fn toast_expires_after_two_seconds() {
		let start = Instant::now();
		let mut feedback = Feedback::default();
		feedback.show_toast("Copied", start);
		assert_eq!(feedback.toast(start), Some("Copied"));
		assert_eq!(feedback.toast(start + Duration::from_millis(1999)), Some("Copied"));
		assert_eq!(feedback.toast(start + TOAST_DURATION), None);
	}

	#[test]
	fn flash_expires_after_three_hundred_millis() {
		let start = Instant::now();
		let mut feedback = Feedback::default();
		feedback.flash(key(1), start);
		assert!(feedback.is_flashing(key(1), start));
		assert!(!feedback.is_flashing(key(2), start));
		assert!(!feedback.is_flashing(key(1), start + FLASH_DURATION));
	}

	#[test]
	fn retrigger_extends_instead_of_stacking() {
		let start = Instant::now();
		let mut feedback = Feedback::default();
		feedback.flash(key(1), start);
		feedback.show_toast("first", start);

		let later = start + Duration::from_millis(250);
		feedback.flash(key(1), later);
		feedback.show_toast("second", later);

		let check = start + Duration::from_millis(400);
		assert!(feedback.is_flashing(key(1), check));
		assert_eq!(feedback.toast(check), Some("second"));

		feedback.expire(later + TOAST_DURATION);
		assert!(feedback.is_idle());
	}

	#[test]
	fn overlapping_flashes_on_different_cards_are_independent() {
		let start = Instant::now();
		let mut feedback = Feedback::default();
		feedback.flash(key(1), start);
		feedback.flash(key(2), start + Duration::from_millis(200));

		let check = start + Duration::from_millis(350);
		feedback.expire(check);
		assert!(!feedback.is_flashing(key(1), check));
		assert!(feedback.is_flashing(key(2), check));
	}
}
