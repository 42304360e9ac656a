use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while reading, writing, and resolving JSON column values.
#[derive(Debug, Error)]
pub enum CodecError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Textual JSON input could not be parsed or rendered.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Variable-length integer ran past 64 bits of magnitude.
	#[error("varuint overflow at offset {at}")]
	VarintOverflow {
		/// Offset of the first byte of the varuint.
		at: usize,
	},
	/// Length-prefixed string payload was not UTF-8.
	#[error("invalid utf-8 string at offset {at}")]
	InvalidUtf8 {
		/// Offset of the first payload byte.
		at: usize,
	},
	/// Length prefix exceeded the configured string limit.
	#[error("string too large at offset {at}: len={len}, max={max}")]
	StringTooLarge {
		/// Offset of the length prefix.
		at: usize,
		/// Declared payload length.
		len: u64,
		/// Maximum permitted length.
		max: usize,
	},
	/// Declared field count exceeded the configured limit.
	#[error("field count too large: count={count}, max={max}")]
	FieldCountTooLarge {
		/// Declared field count.
		count: u64,
		/// Maximum permitted field count.
		max: usize,
	},
	/// Bytes were left over after a standalone value.
	#[error("trailing bytes after value: {rem}")]
	TrailingBytes {
		/// Unconsumed byte count.
		rem: usize,
	},
	/// Field tag is not one of the recognized wire type codes.
	#[error("unknown type code 0x{code:02x} for field {field}")]
	UnknownTypeCode {
		/// Field whose payload carried the tag.
		field: String,
		/// Raw tag value read from the wire.
		code: u64,
	},
	/// Field value has no flat wire representation.
	#[error("unsupported JSON value kind {kind} for field {field}")]
	UnsupportedValueKind {
		/// Field holding the value.
		field: String,
		/// Logical kind of the rejected value.
		kind: &'static str,
	},
	/// Top-level value handed to the encoder was not an object.
	#[error("expected JSON object, got {kind}")]
	NotAnObject {
		/// Logical kind of the top-level value.
		kind: &'static str,
	},
	/// Decoded float cannot be represented in JSON text.
	#[error("non-finite float in field {field}")]
	NonFiniteFloat {
		/// Field holding the float.
		field: String,
	},
	/// Type accepts no parameters but some were supplied.
	#[error("{type_name} type does not accept parameters")]
	InvalidParameters {
		/// Name of the parameterless type.
		type_name: &'static str,
	},
	/// No codec is registered for the type name.
	#[error("unknown column type: {name}")]
	UnknownType {
		/// Requested type name.
		name: String,
	},
	/// Type name text is syntactically invalid.
	#[error("invalid type name: {input}")]
	InvalidTypeName {
		/// Original type name text.
		input: String,
	},
}
