use std::path::PathBuf;

use chjson::codec::{ByteWriter, CodecError, ColumnType, HostValue, Result, TypeSettings, resolve_type};

use crate::cmd::util::{emit_json, read_input};

#[derive(clap::Args)]
pub struct Args {
	/// JSON lines input, or `-` for stdin.
	pub input: PathBuf,
	/// Output file for the binary column.
	#[arg(long)]
	pub out: PathBuf,
	/// Column type name.
	#[arg(long = "type", default_value = "Json")]
	pub type_name: String,
	#[arg(long)]
	pub json: bool,
}

/// Encode each non-empty input line as one value.
pub fn run(args: Args) -> Result<()> {
	let Args { input, out, type_name, json } = args;

	let codec = resolve_type(&type_name, &TypeSettings::default())?;
	let raw = read_input(&input)?;
	let text = String::from_utf8(raw).map_err(|err| CodecError::InvalidUtf8 {
		at: err.utf8_error().valid_up_to(),
	})?;

	let mut writer = ByteWriter::new();
	let mut row_count = 0_usize;
	for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
		codec.write(&mut writer, &HostValue::String(line.to_owned()))?;
		row_count += 1;
	}
	std::fs::write(&out, writer.as_slice())?;

	if json {
		return emit_json(&EncodeJson {
			out: out.display().to_string(),
			column_type: codec.to_string(),
			row_count,
			bytes: writer.len(),
		});
	}

	println!("out: {}", out.display());
	println!("rows: {row_count}");
	println!("bytes: {}", writer.len());
	Ok(())
}

#[derive(serde::Serialize)]
struct EncodeJson {
	out: String,
	column_type: String,
	row_count: usize,
	bytes: usize,
}
