use std::sync::Arc;

use serde_json::json;

use crate::codec::{
	ByteWriter, CodecError, ColumnType, Cursor, DecodeOptions, HostKind, HostValue, JsonType, TypeNode, TypeSettings, resolve_node, resolve_type,
};

#[test]
fn resolves_json_type_name() {
	let codec = resolve_type("Json", &TypeSettings::default()).expect("json resolves");
	assert_eq!(codec.name(), "Json");
	assert_eq!(codec.host_kind(), HostKind::String);
	assert_eq!(codec.to_string(), "Json");

	let upper = resolve_type("JSON", &TypeSettings::default()).expect("server spelling resolves");
	assert_eq!(upper.name(), "Json");
}

#[test]
fn json_rejects_parameters() {
	let err = resolve_type("Json(max_dynamic_paths=10)", &TypeSettings::default()).expect_err("parameters should fail");
	assert!(matches!(err, CodecError::InvalidParameters { type_name: "Json" }));
	assert_eq!(err.to_string(), "Json type does not accept parameters");
}

#[test]
fn parse_returns_same_instance() {
	let codec = Arc::new(JsonType::default());
	let resolve = |node: &TypeNode| resolve_node(node, &TypeSettings::default());
	let parsed = Arc::clone(&codec)
		.parse(&TypeNode::leaf("Json"), &resolve, &TypeSettings::default())
		.expect("leaf parses");

	let original: Arc<dyn ColumnType> = codec;
	assert!(Arc::ptr_eq(&original, &parsed));
}

#[test]
fn unknown_type_name_is_reported() {
	let err = resolve_type("Nullable(Json)", &TypeSettings::default()).expect_err("unregistered type should fail");
	assert!(matches!(err, CodecError::UnknownType { ref name } if name == "Nullable"));
}

#[test]
fn settings_flow_into_resolved_codec() {
	let settings = TypeSettings {
		decode: DecodeOptions {
			max_fields: 1,
			..DecodeOptions::default()
		},
	};
	let codec = resolve_type("Json", &settings).expect("json resolves");

	let mut writer = ByteWriter::new();
	codec.write(&mut writer, &HostValue::Json(json!({"a": 1, "b": 2}))).expect("write ignores read limits");
	let bytes = writer.into_bytes();

	let err = codec.read(&mut Cursor::new(&bytes)).expect_err("read limit applies");
	assert!(matches!(err, CodecError::FieldCountTooLarge { count: 2, max: 1 }));
}

#[test]
fn text_and_document_inputs_encode_identically() {
	let codec = JsonType::default();
	let mut from_text = ByteWriter::new();
	let mut from_json = ByteWriter::new();
	let text = HostValue::String(r#"{"id":7,"name":"x","ok":false}"#.to_owned());
	let doc = HostValue::Json(json!({"id": 7, "name": "x", "ok": false}));
	assert_eq!(text.kind(), HostKind::String);
	assert_eq!(doc.kind(), HostKind::Json);

	codec.write(&mut from_text, &text).expect("text writes");
	codec.write(&mut from_json, &doc).expect("document writes");
	assert_eq!(from_text.as_slice(), from_json.as_slice());
}

#[test]
fn reads_consecutive_rows_as_canonical_text() {
	let codec = JsonType::default();
	let mut writer = ByteWriter::new();
	codec.write(&mut writer, &HostValue::String(r#"{"b":true,"a":1.5}"#.to_owned())).expect("row 1");
	codec.write(&mut writer, &HostValue::String("{}".to_owned())).expect("row 2");
	let bytes = writer.into_bytes();

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(codec.read(&mut cursor).expect("row 1"), HostValue::String(r#"{"b":1,"a":1.5}"#.to_owned()));
	assert_eq!(codec.read(&mut cursor).expect("row 2"), HostValue::String("{}".to_owned()));
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn float_text_round_trip_preserves_bits() {
	let codec = JsonType::default();
	let mut bits = vec![
		0x305f_050c_368d_cc74_u64,
		0x0000_0000_0000_0001,
		0x000f_ffff_ffff_ffff,
		0x0010_0000_0000_0000,
		0x3fb9_9999_9999_999a,
		0x7fef_ffff_ffff_ffff,
		0x8000_0000_0000_0000,
		0xc00f_ffff_ffff_ffff,
	];
	let mut state = 0x9e37_79b9_7f4a_7c15_u64;
	while bits.len() < 20_000 {
		state ^= state << 13;
		state ^= state >> 7;
		state ^= state << 17;
		if f64::from_bits(state).is_finite() {
			bits.push(state);
		}
	}

	for pattern in bits {
		let mut original = ByteWriter::new();
		original.write_varuint(1);
		original.write_str("x");
		original.write_varuint(0x0e);
		original.write_f64_le(f64::from_bits(pattern));
		let original = original.into_bytes();

		let text = codec.read(&mut Cursor::new(&original)).expect("float reads");
		let mut rewritten = ByteWriter::new();
		codec.write(&mut rewritten, &text).expect("float text writes");
		assert_eq!(rewritten.as_slice(), original.as_slice(), "bits 0x{pattern:016x} via {text:?}");
	}
}
