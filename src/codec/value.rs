use std::collections::HashMap;

use serde_json::{Map, Number};

use crate::codec::tag::TypeCode;
use crate::codec::{ByteWriter, CodecError, Result};

/// Scalar carried by one JSON column field on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
	/// Unsigned byte. Booleans are encoded as this with payload 0 or 1.
	UInt8(u8),
	/// Signed 16-bit integer.
	Int16(i16),
	/// Signed 32-bit integer.
	Int32(i32),
	/// Signed 64-bit integer.
	Int64(i64),
	/// 64-bit float.
	Float64(f64),
	/// UTF-8 string.
	String(String),
}

impl FieldValue {
	/// Wire tag for this value.
	pub fn type_code(&self) -> TypeCode {
		match self {
			Self::UInt8(_) => TypeCode::UInt8,
			Self::Int16(_) => TypeCode::Int16,
			Self::Int32(_) => TypeCode::Int32,
			Self::Int64(_) => TypeCode::Int64,
			Self::Float64(_) => TypeCode::Float64,
			Self::String(_) => TypeCode::String,
		}
	}

	/// Append the payload bytes, without the tag.
	pub fn write_payload(&self, writer: &mut ByteWriter) {
		match self {
			Self::UInt8(v) => writer.write_u8(*v),
			Self::Int16(v) => writer.write_i16_le(*v),
			Self::Int32(v) => writer.write_i32_le(*v),
			Self::Int64(v) => writer.write_i64_le(*v),
			Self::Float64(v) => writer.write_f64_le(*v),
			Self::String(v) => writer.write_str(v),
		}
	}

	/// Convert to a JSON scalar. `field` names the value in errors.
	pub fn to_json(&self, field: &str) -> Result<serde_json::Value> {
		Ok(match self {
			Self::UInt8(v) => (*v).into(),
			Self::Int16(v) => (*v).into(),
			Self::Int32(v) => (*v).into(),
			Self::Int64(v) => (*v).into(),
			Self::Float64(v) => {
				let number = Number::from_f64(*v).ok_or_else(|| CodecError::NonFiniteFloat { field: field.to_owned() })?;
				serde_json::Value::Number(number)
			}
			Self::String(v) => v.as_str().into(),
		})
	}
}

/// Named decoded field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
	/// Field identifier.
	pub name: Box<str>,
	/// Decoded field payload.
	pub value: FieldValue,
}

/// Ordered, flat name to value collection for one JSON column value.
///
/// Inserting an existing name overwrites its value in place, so field order
/// follows the first occurrence of each name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredValue {
	fields: Vec<Field>,
	index: HashMap<Box<str>, usize>,
}

impl StructuredValue {
	/// Create an empty value.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty value with room for `capacity` fields.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			fields: Vec::with_capacity(capacity),
			index: HashMap::with_capacity(capacity),
		}
	}

	/// Insert or overwrite a field. Returns the previous value for `name`.
	pub fn insert(&mut self, name: impl Into<Box<str>>, value: FieldValue) -> Option<FieldValue> {
		let name = name.into();
		if let Some(&slot) = self.index.get(&name) {
			return Some(std::mem::replace(&mut self.fields[slot].value, value));
		}
		self.index.insert(name.clone(), self.fields.len());
		self.fields.push(Field { name, value });
		None
	}

	/// Look up a field by name.
	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.index.get(name).map(|&slot| &self.fields[slot].value)
	}

	/// Fields in order.
	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// Number of distinct fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Return true when there are no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Convert into an ordered JSON object.
	pub fn to_json(&self) -> Result<serde_json::Value> {
		let mut map = Map::with_capacity(self.fields.len());
		for field in &self.fields {
			map.insert(field.name.to_string(), field.value.to_json(&field.name)?);
		}
		Ok(serde_json::Value::Object(map))
	}

	/// Render the canonical compact object literal, e.g. `{"a":1,"b":"x"}`.
	pub fn to_json_text(&self) -> Result<String> {
		Ok(serde_json::to_string(&self.to_json()?)?)
	}
}
