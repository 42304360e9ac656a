//! Binary codec for the dynamically-typed JSON column of a columnar database.
//!
//! A value is a flat object whose fields travel as `(name, tag, payload)`
//! triples after a varuint field count.

/// Wire primitives, tag table, encoder, decoder, and column type integration.
pub mod codec;
