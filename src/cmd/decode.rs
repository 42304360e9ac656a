use std::path::PathBuf;

use chjson::codec::{ColumnType, Cursor, HostValue, Result, TypeSettings, resolve_type};

use crate::cmd::util::{decode_options, emit_json, read_input};

#[derive(clap::Args)]
pub struct Args {
	/// Binary column file, or `-` for stdin.
	pub path: PathBuf,
	/// Column type name.
	#[arg(long = "type", default_value = "Json")]
	pub type_name: String,
	#[arg(long)]
	pub max_fields: Option<usize>,
	#[arg(long)]
	pub max_string_len: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Decode every value in the file and print one JSON object per line.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		type_name,
		max_fields,
		max_string_len,
		json,
	} = args;

	let settings = TypeSettings {
		decode: decode_options(max_fields, max_string_len),
	};
	let codec = resolve_type(&type_name, &settings)?;
	let bytes = read_input(&path)?;

	let mut rows = Vec::new();
	let mut cursor = Cursor::new(&bytes);
	while cursor.remaining() > 0 {
		match codec.read(&mut cursor)? {
			HostValue::String(text) => rows.push(text),
			HostValue::Json(value) => rows.push(serde_json::to_string(&value)?),
		}
	}

	if json {
		let parsed = rows
			.iter()
			.map(|row| serde_json::from_str(row))
			.collect::<std::result::Result<Vec<serde_json::Value>, _>>()?;
		return emit_json(&DecodeJson {
			path: path.display().to_string(),
			column_type: codec.to_string(),
			bytes: bytes.len(),
			row_count: rows.len(),
			rows: parsed,
		});
	}

	for row in rows {
		println!("{row}");
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	column_type: String,
	bytes: usize,
	row_count: usize,
	rows: Vec<serde_json::Value>,
}

