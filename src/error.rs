use std::path::PathBuf;

/// A line of INI text that is neither a section header, a parameter,
/// a comment nor blank.
///
/// `line` holds the offending text with the comment stripped and the
/// surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot parse line {line_number}: {line}.")]
pub struct ParseError {
	/// 1-based physical line number.
	pub line_number: usize,

	/// Comment-stripped, trimmed text of the line.
	pub line: String,
}

/// Library-level structured errors for ini-strata.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum IniError {
	#[error("Failed to read file: {path}")]
	ReadFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	WriteFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse file: {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: ParseError,
	},

	#[error(transparent)]
	Syntax(#[from] ParseError),

	#[error("Stream I/O failed")]
	Io(#[from] std::io::Error),

	#[error("Failed to parse TOML document: {path}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to render configuration as TOML")]
	TomlRender(#[from] toml::ser::Error),

	#[error("Invalid regex pattern: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Cannot write {part} {text:?} as INI text: it {reason}")]
	Unrepresentable {
		part: &'static str,
		text: String,
		reason: &'static str,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using IniError.
pub type Result<T> = std::result::Result<T, IniError>;
