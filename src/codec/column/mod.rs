//! Column type interface and the `Json` implementation.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::codec::{ByteWriter, CodecError, Cursor, DecodeOptions, Result, TypeNode, decode_from, encode_into};

/// Host-side representation a column type reads into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
	/// Text.
	String,
	/// In-memory JSON document.
	Json,
}

/// Column value as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
	/// Text value. For JSON columns this is the canonical object literal.
	String(String),
	/// In-memory JSON document.
	Json(serde_json::Value),
}

impl HostValue {
	/// Representation of this value.
	pub fn kind(&self) -> HostKind {
		match self {
			Self::String(_) => HostKind::String,
			Self::Json(_) => HostKind::Json,
		}
	}
}

/// Settings threaded through type resolution.
#[derive(Debug, Clone, Default)]
pub struct TypeSettings {
	/// Decoding limits for codecs that read variable-size values.
	pub decode: DecodeOptions,
}

/// Resolves a nested type node to its codec.
pub type TypeResolver<'a> = dyn Fn(&TypeNode) -> Result<Arc<dyn ColumnType>> + 'a;

/// Pluggable codec for one database column type.
pub trait ColumnType: fmt::Display + fmt::Debug + Send + Sync {
	/// Registered type name.
	fn name(&self) -> &'static str;

	/// Representation produced by [`ColumnType::read`].
	fn host_kind(&self) -> HostKind;

	/// Specialize this codec for a parsed type name.
	fn parse(self: Arc<Self>, node: &TypeNode, resolve: &TypeResolver<'_>, settings: &TypeSettings) -> Result<Arc<dyn ColumnType>>;

	/// Read one value at the cursor.
	fn read(&self, cursor: &mut Cursor<'_>) -> Result<HostValue>;

	/// Append one value to `writer`.
	fn write(&self, writer: &mut ByteWriter, value: &HostValue) -> Result<()>;
}

/// Codec for the dynamically-typed JSON column.
#[derive(Debug, Clone, Default)]
pub struct JsonType {
	options: DecodeOptions,
}

impl JsonType {
	/// Registered type name.
	pub const NAME: &'static str = "Json";

	/// Create a codec using `options` for reads.
	pub fn new(options: DecodeOptions) -> Self {
		Self { options }
	}

	/// Decoding limits applied by [`ColumnType::read`].
	pub fn options(&self) -> &DecodeOptions {
		&self.options
	}
}

impl fmt::Display for JsonType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(Self::NAME)
	}
}

impl ColumnType for JsonType {
	fn name(&self) -> &'static str {
		Self::NAME
	}

	fn host_kind(&self) -> HostKind {
		HostKind::String
	}

	fn parse(self: Arc<Self>, node: &TypeNode, _resolve: &TypeResolver<'_>, _settings: &TypeSettings) -> Result<Arc<dyn ColumnType>> {
		if !node.children.is_empty() {
			return Err(CodecError::InvalidParameters { type_name: Self::NAME });
		}
		Ok(self)
	}

	fn read(&self, cursor: &mut Cursor<'_>) -> Result<HostValue> {
		let value = decode_from(cursor, &self.options)?;
		Ok(HostValue::String(value.to_json_text()?))
	}

	fn write(&self, writer: &mut ByteWriter, value: &HostValue) -> Result<()> {
		match value {
			HostValue::String(text) => encode_into(writer, &serde_json::from_str(text)?),
			HostValue::Json(json) => encode_into(writer, json),
		}
	}
}

/// Parse a type name and resolve it to a codec.
pub fn resolve_type(input: &str, settings: &TypeSettings) -> Result<Arc<dyn ColumnType>> {
	let node = TypeNode::parse(input)?;
	resolve_node(&node, settings)
}

/// Resolve an already parsed type node to a codec.
pub fn resolve_node(node: &TypeNode, settings: &TypeSettings) -> Result<Arc<dyn ColumnType>> {
	let resolve = |child: &TypeNode| resolve_node(child, settings);
	let codec: Arc<dyn ColumnType> = match node.name.as_str() {
		"Json" | "JSON" => Arc::new(JsonType::new(settings.decode.clone())).parse(node, &resolve, settings)?,
		other => return Err(CodecError::UnknownType { name: other.to_owned() }),
	};
	debug!(input = %node, codec = codec.name(), "resolved column type");
	Ok(codec)
}

#[cfg(test)]
mod tests;
