use tracing::{debug, trace};

use crate::codec::tag::lookup_for_decode;
use crate::codec::{CodecError, Cursor, Result, StructuredValue};

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Maximum declared field count.
	pub max_fields: usize,
	/// Maximum length of a field name or string payload.
	pub max_string_len: usize,
	/// Error when bytes remain after the value.
	pub require_end: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_fields: 1 << 20,
			max_string_len: 64 << 20,
			require_end: false,
		}
	}
}

impl DecodeOptions {
	/// Preset for a buffer that holds exactly one value.
	pub fn standalone() -> Self {
		Self {
			require_end: true,
			..Self::default()
		}
	}
}

/// Decode one value using default options.
pub fn decode(bytes: &[u8]) -> Result<StructuredValue> {
	decode_with(bytes, &DecodeOptions::default())
}

/// Decode one value from the start of `bytes`.
pub fn decode_with(bytes: &[u8], opt: &DecodeOptions) -> Result<StructuredValue> {
	let mut cursor = Cursor::new(bytes);
	let value = decode_from(&mut cursor, opt)?;
	if opt.require_end && cursor.remaining() > 0 {
		return Err(CodecError::TrailingBytes { rem: cursor.remaining() });
	}
	Ok(value)
}

/// Decode one value at the cursor and leave the cursor after it.
///
/// On error the cursor position is unspecified.
pub fn decode_from(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<StructuredValue> {
	let start = cursor.pos();
	let count = cursor.read_varuint()?;
	let count = usize::try_from(count)
		.ok()
		.filter(|count| *count <= opt.max_fields)
		.ok_or(CodecError::FieldCountTooLarge { count, max: opt.max_fields })?;

	// Each field needs at least a name length, a tag, and one payload byte.
	let mut value = StructuredValue::with_capacity(count.min(cursor.remaining() / 3));
	for _ in 0..count {
		let name = cursor.read_str(opt.max_string_len)?;
		let code = cursor.read_varuint()?;
		let entry = lookup_for_decode(name, code)?;
		let field = (entry.read)(cursor, opt.max_string_len)?;
		trace!(field = name, kind = entry.kind, "decoded field");
		if value.insert(name, field).is_some() {
			debug!(field = name, "duplicate field overwritten");
		}
	}

	debug!(offset = start, declared = count, fields = value.len(), "decoded json value");
	Ok(value)
}
