//! Wire type codes for JSON column fields.
//!
//! Codes follow the server's binary type encoding. The decoder accepts all six
//! codes; the encoder only ever selects [`TypeCode::UInt8`] (booleans),
//! [`TypeCode::Int64`], [`TypeCode::Float64`], and [`TypeCode::String`]. Peers
//! with narrower native integers may still send [`TypeCode::Int16`] and
//! [`TypeCode::Int32`].

use crate::codec::{CodecError, Cursor, FieldValue, Result};

/// Known field type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeCode {
	/// Unsigned byte, 1 byte payload.
	UInt8 = 0x07,
	/// Signed 16-bit integer, 2 byte payload.
	Int16 = 0x08,
	/// Signed 32-bit integer, 4 byte payload.
	Int32 = 0x09,
	/// Signed 64-bit integer, 8 byte payload.
	Int64 = 0x0a,
	/// IEEE-754 double, 8 byte payload.
	Float64 = 0x0e,
	/// Length-prefixed UTF-8 string.
	String = 0x15,
}

impl TypeCode {
	/// Raw tag value.
	pub fn code(self) -> u8 {
		self as u8
	}

	/// Return true for codes the encoder may select.
	pub fn emitted_by_encoder(self) -> bool {
		!matches!(self, Self::Int16 | Self::Int32)
	}

	/// Map a raw tag to a known code.
	pub fn from_code(code: u64) -> Option<Self> {
		match code {
			0x07 => Some(Self::UInt8),
			0x08 => Some(Self::Int16),
			0x09 => Some(Self::Int32),
			0x0a => Some(Self::Int64),
			0x0e => Some(Self::Float64),
			0x15 => Some(Self::String),
			_ => None,
		}
	}
}

/// Payload width of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
	/// Exactly this many bytes.
	Fixed(usize),
	/// Varuint length followed by that many bytes.
	LengthPrefixed,
}

/// Payload reader. The second argument is the string length limit.
pub type ReadFn = fn(&mut Cursor<'_>, usize) -> Result<FieldValue>;

/// One row of the tag table.
#[derive(Debug, Clone, Copy)]
pub struct TagEntry {
	/// Wire code.
	pub code: TypeCode,
	/// Server-side type name of the payload.
	pub kind: &'static str,
	/// Payload width.
	pub width: Width,
	/// Payload reader.
	pub read: ReadFn,
}

/// Process-wide tag table, ordered by code.
pub static TAG_TABLE: [TagEntry; 6] = [
	TagEntry {
		code: TypeCode::UInt8,
		kind: "UInt8",
		width: Width::Fixed(1),
		read: read_uint8,
	},
	TagEntry {
		code: TypeCode::Int16,
		kind: "Int16",
		width: Width::Fixed(2),
		read: read_int16,
	},
	TagEntry {
		code: TypeCode::Int32,
		kind: "Int32",
		width: Width::Fixed(4),
		read: read_int32,
	},
	TagEntry {
		code: TypeCode::Int64,
		kind: "Int64",
		width: Width::Fixed(8),
		read: read_int64,
	},
	TagEntry {
		code: TypeCode::Float64,
		kind: "Float64",
		width: Width::Fixed(8),
		read: read_float64,
	},
	TagEntry {
		code: TypeCode::String,
		kind: "String",
		width: Width::LengthPrefixed,
		read: read_string,
	},
];

/// Table entry for a known code.
pub fn entry(code: TypeCode) -> &'static TagEntry {
	match code {
		TypeCode::UInt8 => &TAG_TABLE[0],
		TypeCode::Int16 => &TAG_TABLE[1],
		TypeCode::Int32 => &TAG_TABLE[2],
		TypeCode::Int64 => &TAG_TABLE[3],
		TypeCode::Float64 => &TAG_TABLE[4],
		TypeCode::String => &TAG_TABLE[5],
	}
}

/// Resolve a raw tag read from the wire, failing on unknown codes.
pub fn lookup_for_decode(field: &str, code: u64) -> Result<&'static TagEntry> {
	TypeCode::from_code(code).map(entry).ok_or_else(|| CodecError::UnknownTypeCode {
		field: field.to_owned(),
		code,
	})
}

/// Classify a JSON member and pick its wire value.
///
/// Numbers that fit `i64` become [`FieldValue::Int64`]; every other number
/// becomes [`FieldValue::Float64`]. Booleans reuse the byte tag with payload
/// 0 or 1. Objects, arrays, and null are rejected.
pub fn choose_tag_for_encode(field: &str, value: &serde_json::Value) -> Result<FieldValue> {
	use serde_json::Value;

	match value {
		Value::Number(number) => match number.as_i64() {
			Some(int) => Ok(FieldValue::Int64(int)),
			None => number
				.as_f64()
				.map(FieldValue::Float64)
				.ok_or_else(|| unsupported(field, "number")),
		},
		Value::String(text) => Ok(FieldValue::String(text.clone())),
		Value::Bool(flag) => Ok(FieldValue::UInt8(u8::from(*flag))),
		Value::Null | Value::Array(_) | Value::Object(_) => Err(unsupported(field, kind_name(value))),
	}
}

fn read_uint8(cursor: &mut Cursor<'_>, _: usize) -> Result<FieldValue> {
	Ok(FieldValue::UInt8(cursor.read_u8()?))
}

fn read_int16(cursor: &mut Cursor<'_>, _: usize) -> Result<FieldValue> {
	Ok(FieldValue::Int16(cursor.read_i16_le()?))
}

fn read_int32(cursor: &mut Cursor<'_>, _: usize) -> Result<FieldValue> {
	Ok(FieldValue::Int32(cursor.read_i32_le()?))
}

fn read_int64(cursor: &mut Cursor<'_>, _: usize) -> Result<FieldValue> {
	Ok(FieldValue::Int64(cursor.read_i64_le()?))
}

fn read_float64(cursor: &mut Cursor<'_>, _: usize) -> Result<FieldValue> {
	Ok(FieldValue::Float64(cursor.read_f64_le()?))
}

fn read_string(cursor: &mut Cursor<'_>, max_len: usize) -> Result<FieldValue> {
	Ok(FieldValue::String(cursor.read_str(max_len)?.to_owned()))
}

/// Logical kind label of a JSON value.
pub(crate) fn kind_name(value: &serde_json::Value) -> &'static str {
	use serde_json::Value;

	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

fn unsupported(field: &str, kind: &'static str) -> CodecError {
	CodecError::UnsupportedValueKind {
		field: field.to_owned(),
		kind,
	}
}
