use std::io::Read;
use std::path::Path;

use chjson::codec::{DecodeOptions, Result};

/// Read a file, or stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
	if path.as_os_str() == "-" {
		let mut bytes = Vec::new();
		std::io::stdin().lock().read_to_end(&mut bytes)?;
		return Ok(bytes);
	}
	Ok(std::fs::read(path)?)
}

/// Apply CLI overrides on top of default decode limits.
pub(crate) fn decode_options(max_fields: Option<usize>, max_string_len: Option<usize>) -> DecodeOptions {
	let defaults = DecodeOptions::default();
	DecodeOptions {
		max_fields: max_fields.unwrap_or(defaults.max_fields),
		max_string_len: max_string_len.unwrap_or(defaults.max_string_len),
		require_end: false,
	}
}

/// Render a tag code as `0x..`.
pub(crate) fn code_hex(code: u8) -> String {
	format!("0x{code:02x}")
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
