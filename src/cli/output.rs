use anyhow::Result;
use glyphpick::GlyphOutcome;

/// Print the last copied glyph, or nothing when the session copied nothing.
pub(crate) fn print_plain(outcome: &GlyphOutcome) {
	if let Some(glyph) = outcome.last_copied() {
		println!("{glyph}");
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &GlyphOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &GlyphOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_lists_every_copy() {
		let outcome = GlyphOutcome {
			query: "arrow".into(),
			catalog: "symbols".into(),
			copied: vec!["←".into(), "→".into()],
		};

		let json = format_outcome_json(&outcome).unwrap();
		let value: Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value["query"], "arrow");
		assert_eq!(value["catalog"], "symbols");
		assert_eq!(value["copied"][1], "→");
	}

	#[test]
	fn json_format_keeps_empty_copies() {
		let json = format_outcome_json(&GlyphOutcome::default()).unwrap();
		let value: Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value["copied"], Value::Array(Vec::new()));
	}
}
