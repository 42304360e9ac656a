use chjson::codec::Result;
use chjson::codec::tag::{TAG_TABLE, Width};

use crate::cmd::util::{code_hex, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// Print the wire tag table.
pub fn run(args: Args) -> Result<()> {
	let rows: Vec<TagJson> = TAG_TABLE
		.iter()
		.map(|row| TagJson {
			code: code_hex(row.code.code()),
			kind: row.kind,
			width: match row.width {
				Width::Fixed(n) => n.to_string(),
				Width::LengthPrefixed => "varuint+n".to_owned(),
			},
			encoded: row.code.emitted_by_encoder(),
		})
		.collect();

	if args.json {
		return emit_json(&rows);
	}

	for row in &rows {
		let direction = if row.encoded { "decode+encode" } else { "decode" };
		println!("{} {:<8} width={:<10} {direction}", row.code, row.kind, row.width);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct TagJson {
	code: String,
	kind: &'static str,
	width: String,
	encoded: bool,
}
