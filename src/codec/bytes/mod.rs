use crate::codec::{CodecError, Result};

/// Maximum encoded size of a 64-bit varuint.
pub const MAX_VARUINT_LEN: usize = 10;

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(CodecError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one unsigned byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a little-endian `i16`.
	pub fn read_i16_le(&mut self) -> Result<i16> {
		Ok(i16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i64`.
	pub fn read_i64_le(&mut self) -> Result<i64> {
		Ok(i64::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian IEEE-754 `f64`.
	pub fn read_f64_le(&mut self) -> Result<f64> {
		Ok(f64::from_le_bytes(self.read_array()?))
	}

	/// Read an unsigned LEB128 integer.
	pub fn read_varuint(&mut self) -> Result<u64> {
		let at = self.pos;
		let mut value = 0_u64;
		for shift in (0..64).step_by(7) {
			let byte = self.read_u8()?;
			let bits = u64::from(byte & 0x7f);
			// Tenth byte may only carry the top bit of a u64.
			if shift == 63 && bits > 1 {
				return Err(CodecError::VarintOverflow { at });
			}
			value |= bits << shift;
			if byte & 0x80 == 0 {
				return Ok(value);
			}
		}
		Err(CodecError::VarintOverflow { at })
	}

	/// Read a varuint length prefix followed by that many UTF-8 bytes.
	pub fn read_str(&mut self, max_len: usize) -> Result<&'a str> {
		let at = self.pos;
		let len = self.read_varuint()?;
		let len = usize::try_from(len)
			.ok()
			.filter(|len| *len <= max_len)
			.ok_or(CodecError::StringTooLarge { at, len, max: max_len })?;

		let start = self.pos;
		let raw = self.read_exact(len)?;
		std::str::from_utf8(raw).map_err(|_| CodecError::InvalidUtf8 { at: start })
	}
}

/// Growable little-endian output buffer mirroring [`Cursor`].
#[derive(Debug, Clone, Default)]
pub struct ByteWriter {
	bytes: Vec<u8>,
}

impl ByteWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a writer with preallocated capacity.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bytes: Vec::with_capacity(capacity),
		}
	}

	/// Return bytes written so far.
	pub fn as_slice(&self) -> &[u8] {
		&self.bytes
	}

	/// Return number of bytes written.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return true when nothing was written.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Consume the writer and return the buffer.
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	/// Append raw bytes.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.bytes.extend_from_slice(bytes);
	}

	/// Append one unsigned byte.
	pub fn write_u8(&mut self, value: u8) {
		self.bytes.push(value);
	}

	/// Append a little-endian `i16`.
	pub fn write_i16_le(&mut self, value: i16) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append a little-endian `i32`.
	pub fn write_i32_le(&mut self, value: i32) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append a little-endian `i64`.
	pub fn write_i64_le(&mut self, value: i64) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append a little-endian IEEE-754 `f64`.
	pub fn write_f64_le(&mut self, value: f64) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append an unsigned LEB128 integer.
	pub fn write_varuint(&mut self, mut value: u64) {
		while value >= 0x80 {
			self.bytes.push((value as u8 & 0x7f) | 0x80);
			value >>= 7;
		}
		self.bytes.push(value as u8);
	}

	/// Append a varuint length prefix followed by the UTF-8 bytes of `value`.
	pub fn write_str(&mut self, value: &str) {
		self.write_varuint(value.len() as u64);
		self.write_bytes(value.as_bytes());
	}
}
