use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::codec::tag::{choose_tag_for_encode, kind_name};
use crate::codec::{ByteWriter, CodecError, Result};

/// Encode an in-memory JSON object.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
	let mut writer = ByteWriter::new();
	encode_into(&mut writer, value)?;
	Ok(writer.into_bytes())
}

/// Parse canonical JSON text and encode the resulting object.
pub fn encode_text(text: &str) -> Result<Vec<u8>> {
	let value: Value = serde_json::from_str(text)?;
	encode(&value)
}

/// Append an encoded JSON object to `writer`.
///
/// Nothing is appended if any field is rejected.
pub fn encode_into(writer: &mut ByteWriter, value: &Value) -> Result<()> {
	let object = value.as_object().ok_or(CodecError::NotAnObject { kind: kind_name(value) })?;
	let scratch = encode_object(object)?;
	writer.write_bytes(scratch.as_slice());
	Ok(())
}

fn encode_object(object: &Map<String, Value>) -> Result<ByteWriter> {
	let mut scratch = ByteWriter::with_capacity(16 * object.len() + 1);
	scratch.write_varuint(object.len() as u64);
	for (name, member) in object {
		let field = choose_tag_for_encode(name, member)?;
		scratch.write_str(name);
		scratch.write_varuint(u64::from(field.type_code().code()));
		field.write_payload(&mut scratch);
		trace!(field = name.as_str(), code = field.type_code().code(), "encoded field");
	}

	debug!(fields = object.len(), bytes = scratch.len(), "encoded json value");
	Ok(scratch)
}
