use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", render_summary(config));
}

fn render_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!(
		"  Prompt: {}",
		config.ui.prompt().unwrap_or("(none)")
	));
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!(
		"  Start catalog: {}",
		config.start_catalog.as_deref().unwrap_or("(first)")
	));
	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	));
	lines.push(format!("  Card width: {}", config.ui.card_width));
	lines.push(format!(
		"  Log pane open: {}",
		bool_to_word(config.ui.show_log_pane)
	));
	lines.push(format!(
		"  Built-in catalogs: {}",
		bool_to_word(config.include_builtin)
	));
	if config.catalog_files.is_empty() {
		lines.push("  Catalog files: (none)".to_string());
	} else {
		let files: Vec<String> = config
			.catalog_files
			.iter()
			.map(|path| path.display().to_string())
			.collect();
		lines.push(format!("  Catalog files: {}", files.join(", ")));
	}
	lines.push(format!(
		"  Discover catalogs: {}",
		bool_to_word(config.discover_catalogs)
	));
	lines.push(format!(
		"  Offline cache: {}",
		bool_to_word(config.offline_cache)
	));
	lines.push(format!(
		"  OSC 52 fallback: {}",
		bool_to_word(config.osc52_fallback)
	));
	lines.push(format!("  Log level: {}", config.log_level));

	let mut out = lines.join("\n");
	out.push('\n');
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			initial_query: "arrow".into(),
			theme: Some("light".into()),
			catalog_files: vec![PathBuf::from("runes.toml")],
			osc52_fallback: false,
			..ResolvedConfig::default()
		};

		let summary = render_summary(&config);
		insta::assert_snapshot!(summary, @r"
		Effective configuration:
		  Prompt: Search
		  Initial query: arrow
		  Start catalog: (first)
		  UI theme: light
		  Card width: 24
		  Log pane open: no
		  Built-in catalogs: yes
		  Catalog files: runes.toml
		  Discover catalogs: yes
		  Offline cache: yes
		  OSC 52 fallback: no
		  Log level: info
		");
	}
}
