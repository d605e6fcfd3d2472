use super::{Catalog, Entry, ItemNoun};

pub const SYMBOLS_ID: &str = "symbols";
pub const EMOJI_ID: &str = "emoji";

/// Built-in catalog of mathematical, typographic and technical symbols.
#[must_use]
pub fn symbols() -> Catalog {
	Catalog::new(
		SYMBOLS_ID,
		"Symbols",
		ItemNoun::new("symbol", "symbols"),
		entries(SYMBOLS),
	)
	.with_placeholder("Search for symbols (e.g., arrow left, gamma, infinity)...")
}

/// Built-in catalog of common emoji.
#[must_use]
pub fn emoji() -> Catalog {
	Catalog::new(
		EMOJI_ID,
		"Emoji",
		ItemNoun::new("emoji", "emojis"),
		entries(EMOJI),
	)
	.with_placeholder("Search for emojis (e.g., smile, heart, fire, thumbs up)...")
}

fn entries(table: &[(&str, &[&str])]) -> Vec<Entry> {
	table
		.iter()
		.map(|(glyph, names)| Entry::new(*glyph, names.iter().copied()))
		.collect()
}

const SYMBOLS: &[(&str, &[&str])] = &[
	("←", &["left arrow", "leftwards arrow", "back"]),
	("→", &["right arrow", "rightwards arrow", "forward", "implies"]),
	("↑", &["up arrow", "upwards arrow"]),
	("↓", &["down arrow", "downwards arrow"]),
	("↔", &["left right arrow", "bidirectional arrow"]),
	("↕", &["up down arrow"]),
	("⇐", &["leftwards double arrow", "implied by"]),
	("⇒", &["rightwards double arrow", "double arrow right"]),
	("⇔", &["left right double arrow", "if and only if", "iff"]),
	("↩", &["leftwards arrow with hook", "return"]),
	("↵", &["downwards arrow with corner leftwards", "enter", "carriage return"]),
	("α", &["alpha", "greek small letter alpha"]),
	("β", &["beta", "greek small letter beta"]),
	("γ", &["gamma", "greek small letter gamma"]),
	("Γ", &["capital gamma", "greek capital letter gamma"]),
	("δ", &["delta", "greek small letter delta"]),
	("Δ", &["capital delta", "greek capital letter delta", "increment"]),
	("ε", &["epsilon", "greek small letter epsilon"]),
	("θ", &["theta", "greek small letter theta"]),
	("λ", &["lambda", "greek small letter lambda"]),
	("μ", &["mu", "micro", "greek small letter mu"]),
	("π", &["pi", "greek small letter pi"]),
	("Π", &["capital pi", "product"]),
	("σ", &["sigma", "greek small letter sigma"]),
	("Σ", &["capital sigma", "summation", "sum"]),
	("φ", &["phi", "greek small letter phi"]),
	("ω", &["omega", "greek small letter omega"]),
	("Ω", &["capital omega", "ohm"]),
	("∞", &["infinity", "infinite"]),
	("≈", &["approximately equal", "almost equal to"]),
	("≠", &["not equal", "not equal to"]),
	("≤", &["less than or equal", "less-than or equal to"]),
	("≥", &["greater than or equal", "greater-than or equal to"]),
	("±", &["plus minus", "plus-minus sign"]),
	("×", &["multiplication", "times", "multiply"]),
	("÷", &["division", "divide", "obelus"]),
	("√", &["square root", "radical"]),
	("∑", &["n-ary summation", "sigma sum"]),
	("∫", &["integral"]),
	("∂", &["partial differential", "partial derivative"]),
	("∇", &["nabla", "del", "gradient"]),
	("∈", &["element of", "member of", "in"]),
	("∉", &["not an element of", "not in"]),
	("∅", &["empty set", "null set"]),
	("∩", &["intersection", "cap"]),
	("∪", &["union", "cup"]),
	("⊂", &["subset of"]),
	("⊆", &["subset of or equal to"]),
	("∀", &["for all", "universal quantifier"]),
	("∃", &["there exists", "existential quantifier"]),
	("¬", &["not sign", "negation"]),
	("∧", &["logical and", "wedge"]),
	("∨", &["logical or", "vee"]),
	("°", &["degree", "degrees"]),
	("‰", &["per mille", "per thousand"]),
	("©", &["copyright"]),
	("®", &["registered", "registered trademark"]),
	("™", &["trademark", "trade mark"]),
	("§", &["section", "section sign"]),
	("¶", &["pilcrow", "paragraph"]),
	("†", &["dagger", "obelisk"]),
	("‡", &["double dagger"]),
	("•", &["bullet", "dot"]),
	("…", &["ellipsis", "horizontal ellipsis", "dots"]),
	("–", &["en dash", "dash"]),
	("—", &["em dash", "long dash"]),
	("«", &["left guillemet", "left double angle quotation mark"]),
	("»", &["right guillemet", "right double angle quotation mark"]),
	("€", &["euro", "euro sign", "currency"]),
	("£", &["pound", "pound sterling", "currency"]),
	("¥", &["yen", "yuan", "currency"]),
	("¢", &["cent", "currency"]),
	("₿", &["bitcoin", "currency"]),
	("✓", &["check mark", "tick", "checkmark"]),
	("✗", &["ballot x", "cross mark"]),
	("★", &["black star", "filled star"]),
	("☆", &["white star", "outline star"]),
	("♠", &["spade", "spades suit"]),
	("♥", &["heart suit", "hearts"]),
	("♦", &["diamond suit", "diamonds"]),
	("♣", &["club suit", "clubs"]),
	("⌘", &["command key", "place of interest"]),
	("⌥", &["option key", "alt"]),
	("⇧", &["shift key", "upwards white arrow"]),
	("⌫", &["backspace", "erase to the left", "delete"]),
	("␣", &["open box", "space symbol"]),
];

const EMOJI: &[(&str, &[&str])] = &[
	("😀", &["grinning face", "smile", "happy"]),
	("😂", &["face with tears of joy", "laugh", "lol"]),
	("🙂", &["slightly smiling face", "smile"]),
	("😉", &["winking face", "wink"]),
	("😍", &["smiling face with heart-eyes", "love", "crush"]),
	("🤔", &["thinking face", "hmm", "think"]),
	("😎", &["smiling face with sunglasses", "cool"]),
	("😢", &["crying face", "sad", "tear"]),
	("😡", &["pouting face", "angry", "rage"]),
	("😱", &["face screaming in fear", "scream", "shock"]),
	("😴", &["sleeping face", "sleep", "tired"]),
	("🥳", &["partying face", "party", "celebrate"]),
	("🙃", &["upside-down face", "silly"]),
	("🤯", &["exploding head", "mind blown"]),
	("👍", &["thumbs up", "like", "approve", "yes"]),
	("👎", &["thumbs down", "dislike", "no"]),
	("👏", &["clapping hands", "applause", "clap"]),
	("🙏", &["folded hands", "please", "thanks", "pray"]),
	("👋", &["waving hand", "wave", "hello", "bye"]),
	("💪", &["flexed biceps", "strong", "muscle"]),
	("🤝", &["handshake", "deal", "agreement"]),
	("👀", &["eyes", "look", "watching"]),
	("❤️", &["red heart", "love", "heart"]),
	("💔", &["broken heart", "heartbreak"]),
	("💯", &["hundred points", "perfect", "100"]),
	("🔥", &["fire", "flame", "hot", "lit"]),
	("✨", &["sparkles", "shiny", "magic"]),
	("⭐", &["star", "favorite"]),
	("🌈", &["rainbow"]),
	("☀️", &["sun", "sunny", "weather"]),
	("🌙", &["crescent moon", "night", "moon"]),
	("⚡", &["high voltage", "lightning", "zap"]),
	("❄️", &["snowflake", "cold", "winter"]),
	("🎉", &["party popper", "tada", "celebration"]),
	("🎁", &["wrapped gift", "present", "birthday"]),
	("🎂", &["birthday cake", "cake"]),
	("☕", &["hot beverage", "coffee", "tea"]),
	("🍕", &["pizza", "food"]),
	("🍺", &["beer mug", "beer", "drink"]),
	("🐶", &["dog face", "dog", "puppy"]),
	("🐱", &["cat face", "cat", "kitten"]),
	("🦀", &["crab", "rust", "ferris"]),
	("🐍", &["snake", "python"]),
	("🚀", &["rocket", "launch", "ship it"]),
	("💡", &["light bulb", "idea"]),
	("📌", &["pushpin", "pin"]),
	("📎", &["paperclip", "attachment"]),
	("🔒", &["locked", "lock", "secure"]),
	("🔑", &["key", "password"]),
	("🐛", &["bug", "insect"]),
	("🛠️", &["hammer and wrench", "tools", "fix"]),
	("⚠️", &["warning", "caution"]),
	("❌", &["cross mark", "wrong", "no"]),
	("✅", &["check mark button", "done", "yes"]),
	("❓", &["red question mark", "question"]),
	("⏳", &["hourglass not done", "waiting", "time"]),
	("📅", &["calendar", "date"]),
	("📝", &["memo", "note", "write"]),
	("💻", &["laptop", "computer"]),
	("📦", &["package", "box", "ship"]),
];
