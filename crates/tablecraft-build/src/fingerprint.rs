//! Schema fingerprint over the ordered DDL text of a database.
//!
//! Each table contributes its `CREATE TABLE` statement followed by its
//! `CREATE INDEX` statements, in declaration order, as raw UTF-8 bytes. No
//! separators or normalization are applied, so any textual change (including
//! whitespace) and any reordering of tables changes the digest.

use sha2::{Digest, Sha256};
use std::fmt::{self, Write as _};
use tablecraft_schema::node::Database;

///
/// SchemaFingerprint
///
/// SHA-256 digest of a database's DDL. Hex output is upper-case.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SchemaFingerprint([u8; 32]);

impl SchemaFingerprint {
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn as_hex(&self) -> String {
        hex_upper(&self.0)
    }
}

impl fmt::Display for SchemaFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex())
    }
}

/// Digest every DDL statement of `database` in fingerprint order.
#[must_use]
pub fn schema_fingerprint(database: &Database) -> SchemaFingerprint {
    fingerprint_statements(database.ddl_statements())
}

/// Digest an ordered sequence of DDL statements.
pub fn fingerprint_statements<'a>(
    statements: impl IntoIterator<Item = &'a str>,
) -> SchemaFingerprint {
    let hasher = statements
        .into_iter()
        .fold(Sha256::new(), |hasher, stmt| hasher.chain_update(stmt.as_bytes()));

    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);

    SchemaFingerprint(out)
}

/// Upper-case hexadecimal encoding.
#[must_use]
pub fn hex_upper(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02X}");
    }

    out
}
