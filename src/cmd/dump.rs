use std::path::PathBuf;

use chjson::codec::{Cursor, Result, decode_from, tag};

use crate::cmd::util::{code_hex, decode_options, emit_json, read_input};

#[derive(clap::Args)]
pub struct Args {
	/// Binary column file, or `-` for stdin.
	pub path: PathBuf,
	#[arg(long)]
	pub max_fields: Option<usize>,
	#[arg(long)]
	pub max_string_len: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Print each value's fields with their wire tags.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		max_fields,
		max_string_len,
		json,
	} = args;

	let opt = decode_options(max_fields, max_string_len);
	let bytes = read_input(&path)?;

	let mut rows = Vec::new();
	let mut cursor = Cursor::new(&bytes);
	while cursor.remaining() > 0 {
		let offset = cursor.pos();
		let value = decode_from(&mut cursor, &opt)?;
		let mut fields = Vec::with_capacity(value.len());
		for field in value.fields() {
			let code = field.value.type_code();
			fields.push(FieldJson {
				name: field.name.to_string(),
				code: code_hex(code.code()),
				kind: tag::entry(code).kind,
				value: field.value.to_json(&field.name)?,
			});
		}
		rows.push(RowJson { offset, fields });
	}

	if json {
		return emit_json(&DumpJson {
			path: path.display().to_string(),
			rows,
		});
	}

	println!("path: {}", path.display());
	for (idx, row) in rows.iter().enumerate() {
		println!("row {idx} @ {}:", row.offset);
		for field in &row.fields {
			println!("  {} [{} {}] = {}", field.name, field.code, field.kind, field.value);
		}
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct DumpJson {
	path: String,
	rows: Vec<RowJson>,
}

#[derive(serde::Serialize)]
struct RowJson {
	offset: usize,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	code: String,
	kind: &'static str,
	value: serde_json::Value,
}
