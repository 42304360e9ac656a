use crate::codec::{CodecError, Result};

/// Parsed type name such as `Json` or `Nullable(Json)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNode {
	/// Type name or raw parameter text.
	pub name: String,
	/// Parenthesized parameters in order.
	pub children: Vec<TypeNode>,
}

impl TypeNode {
	/// Build a parameterless node.
	pub fn leaf(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			children: Vec::new(),
		}
	}

	/// Parse `Name` or `Name(arg, ...)` where each argument is itself a node.
	///
	/// Arguments may be quoted with single quotes to carry `(`, `)` or `,`.
	pub fn parse(input: &str) -> Result<Self> {
		let mut parser = Parser { input, pos: 0 };
		let node = parser.node()?;
		parser.skip_ws();
		if parser.pos != input.len() {
			return Err(parser.invalid());
		}
		Ok(node)
	}
}

impl std::fmt::Display for TypeNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.name)?;
		if self.children.is_empty() {
			return Ok(());
		}
		f.write_str("(")?;
		for (idx, child) in self.children.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{child}")?;
		}
		f.write_str(")")
	}
}

struct Parser<'a> {
	input: &'a str,
	pos: usize,
}

impl Parser<'_> {
	fn invalid(&self) -> CodecError {
		CodecError::InvalidTypeName {
			input: self.input.to_owned(),
		}
	}

	fn peek(&self) -> Option<u8> {
		self.input.as_bytes().get(self.pos).copied()
	}

	fn skip_ws(&mut self) {
		while self.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
			self.pos += 1;
		}
	}

	fn node(&mut self) -> Result<TypeNode> {
		self.skip_ws();
		let name = self.token()?;
		let mut node = TypeNode::leaf(name);

		self.skip_ws();
		if self.peek() != Some(b'(') {
			return Ok(node);
		}
		self.pos += 1;

		loop {
			node.children.push(self.node()?);
			self.skip_ws();
			match self.peek() {
				Some(b',') => self.pos += 1,
				Some(b')') => {
					self.pos += 1;
					return Ok(node);
				}
				_ => return Err(self.invalid()),
			}
		}
	}

	fn token(&mut self) -> Result<String> {
		let bytes = self.input.as_bytes();
		let start = self.pos;

		if self.peek() == Some(b'\'') {
			self.pos += 1;
			while let Some(byte) = self.peek() {
				self.pos += 1;
				match byte {
					b'\\' => self.pos += 1,
					b'\'' => return Ok(self.input[start..self.pos].to_owned()),
					_ => {}
				}
			}
			return Err(self.invalid());
		}

		while self.pos < bytes.len() && !matches!(bytes[self.pos], b'(' | b')' | b',') {
			self.pos += 1;
		}

		let token = self.input[start..self.pos].trim_end();
		if token.is_empty() {
			return Err(self.invalid());
		}
		Ok(token.to_owned())
	}
}
