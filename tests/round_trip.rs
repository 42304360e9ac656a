#![allow(missing_docs)]

use chjson::codec::{ByteWriter, CodecError, DecodeOptions, FieldValue, decode, decode_with, encode, encode_text};
use serde_json::json;

#[test]
fn flat_object_round_trips_with_boolean_as_byte() {
	let input = json!({
		"name": "widget",
		"count": -42,
		"max": i64::MAX,
		"ratio": 0.125,
		"huge": 1.0e300,
		"on": true,
		"off": false,
		"empty": ""
	});

	let bytes = encode(&input).expect("flat object encodes");
	let value = decode_with(&bytes, &DecodeOptions::standalone()).expect("bytes decode");

	let names: Vec<&str> = value.fields().iter().map(|field| &*field.name).collect();
	assert_eq!(names, ["name", "count", "max", "ratio", "huge", "on", "off", "empty"]);
	assert_eq!(value.get("name"), Some(&FieldValue::String("widget".to_owned())));
	assert_eq!(value.get("count"), Some(&FieldValue::Int64(-42)));
	assert_eq!(value.get("max"), Some(&FieldValue::Int64(i64::MAX)));
	assert_eq!(value.get("ratio"), Some(&FieldValue::Float64(0.125)));
	assert_eq!(value.get("huge"), Some(&FieldValue::Float64(1.0e300)));
	assert_eq!(value.get("on"), Some(&FieldValue::UInt8(1)));
	assert_eq!(value.get("off"), Some(&FieldValue::UInt8(0)));
	assert_eq!(value.get("empty"), Some(&FieldValue::String(String::new())));
}

#[test]
fn empty_object_round_trips() {
	let bytes = encode_text("{}").expect("empty encodes");
	assert_eq!(bytes, [0x00]);
	assert_eq!(decode(&bytes).expect("empty decodes").to_json_text().expect("renders"), "{}");
}

#[test]
fn canonical_text_round_trips_except_booleans() {
	let text = r#"{"id":9,"label":"café","score":-1.5,"flag":true}"#;
	let bytes = encode_text(text).expect("text encodes");
	let rendered = decode(&bytes).expect("bytes decode").to_json_text().expect("renders");
	assert_eq!(rendered, r#"{"id":9,"label":"café","score":-1.5,"flag":1}"#);

	let again = encode_text(&rendered).expect("rendered text encodes");
	assert_ne!(again, bytes, "boolean came back as an integer and re-encodes as Int64");
	assert_eq!(again.len(), bytes.len() + 7);
}

#[test]
fn narrow_integer_tags_from_other_producers_decode() {
	let mut writer = ByteWriter::new();
	writer.write_varuint(2);
	writer.write_str("small");
	writer.write_varuint(0x08);
	writer.write_i16_le(i16::MIN);
	writer.write_str("medium");
	writer.write_varuint(0x09);
	writer.write_i32_le(i32::MAX);

	let value = decode(writer.as_slice()).expect("narrow tags decode");
	assert_eq!(value.get("small"), Some(&FieldValue::Int16(i16::MIN)));
	assert_eq!(value.get("medium"), Some(&FieldValue::Int32(i32::MAX)));
	assert_eq!(value.to_json_text().expect("renders"), r#"{"small":-32768,"medium":2147483647}"#);
}

#[test]
fn unknown_tag_0xff_uses_two_byte_varuint() {
	let mut writer = ByteWriter::new();
	writer.write_varuint(1);
	writer.write_str("x");
	writer.write_varuint(0xff);
	assert_eq!(&writer.as_slice()[3..], &[0xff, 0x01]);

	let err = decode(writer.as_slice()).expect_err("0xff should fail");
	assert!(matches!(err, CodecError::UnknownTypeCode { ref field, code: 0xff } if field == "x"));
}

#[test]
fn nested_values_fail_without_output() {
	for member in [json!({"deep": 1}), json!([1, 2]), json!(null)] {
		let mut object = serde_json::Map::new();
		object.insert("ok".to_owned(), json!(1));
		object.insert("nested".to_owned(), member);

		let err = encode(&serde_json::Value::Object(object)).expect_err("nested member should fail");
		assert!(matches!(err, CodecError::UnsupportedValueKind { ref field, .. } if field == "nested"));
	}
}

#[test]
fn repeated_name_overwrites_in_first_position() {
	let mut writer = ByteWriter::new();
	writer.write_varuint(3);
	writer.write_str("k");
	writer.write_varuint(0x0a);
	writer.write_i64_le(1);
	writer.write_str("other");
	writer.write_varuint(0x07);
	writer.write_u8(5);
	writer.write_str("k");
	writer.write_varuint(0x0e);
	writer.write_f64_le(9.5);

	let value = decode(writer.as_slice()).expect("duplicates decode");
	assert_eq!(value.len(), 2);
	assert_eq!(value.to_json_text().expect("renders"), r#"{"k":9.5,"other":5}"#);
}
