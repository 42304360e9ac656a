mod bytes;
mod column;
mod decode;
mod encode;
mod error;
pub mod tag;
mod type_node;
mod value;

/// Bounded reader and growable writer for wire primitives.
pub use bytes::{ByteWriter, Cursor, MAX_VARUINT_LEN};
/// Column type interface, the `Json` codec, and type resolution.
pub use column::{ColumnType, HostKind, HostValue, JsonType, TypeResolver, TypeSettings, resolve_node, resolve_type};
/// Decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_from, decode_with};
/// Encoding entry points.
pub use encode::{encode, encode_into, encode_text};
/// Error and result aliases.
pub use error::{CodecError, Result};
/// Wire type codes.
pub use tag::TypeCode;
/// Parsed type names.
pub use type_node::TypeNode;
/// Decoded value types.
pub use value::{Field, FieldValue, StructuredValue};
