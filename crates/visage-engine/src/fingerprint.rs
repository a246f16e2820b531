//! Fingerprint derivation: the sole entropy source for image synthesis.

use blake3::Hasher;

use crate::error::ComposeError;
use crate::identity::IdentityRecord;

/// Digest length in characters. Every generator indexes modulo this.
pub const FINGERPRINT_LEN: usize = 32;

/// Fixed-length digest of an identity record.
///
/// Stored as raw bytes (always ASCII hex when produced by
/// [`fingerprint`]); downstream code only ever reads single byte values
/// and reduces them modulo small integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    bytes: [u8; FINGERPRINT_LEN],
}

impl Fingerprint {
    /// Builds a fingerprint from a digest string, applying the padding
    /// rule: if the digest is shorter than [`FINGERPRINT_LEN`], copies of
    /// the full name are appended until it is long enough, then the
    /// result is truncated. Padding is byte-wise over the name's UTF-8
    /// encoding, so it never introduces nondeterminism.
    ///
    /// Panics if the digest is short and the name is empty; a short
    /// digest needs at least one name byte to pad with.
    pub fn from_digest(digest: &str, full_name: &str) -> Self {
        assert!(
            digest.len() >= FINGERPRINT_LEN || !full_name.is_empty(),
            "short digest with an empty name cannot be padded"
        );
        let mut buf: Vec<u8> = digest.as_bytes().to_vec();
        // Blake3 hex is 64 chars, so this loop is only reachable through
        // the constructor contract, not through `fingerprint()`.
        while buf.len() < FINGERPRINT_LEN {
            buf.extend_from_slice(full_name.as_bytes());
        }
        let mut bytes = [0u8; FINGERPRINT_LEN];
        bytes.copy_from_slice(&buf[..FINGERPRINT_LEN]);
        Self { bytes }
    }

    /// Byte at `index`, wrapping past the end.
    #[inline]
    pub fn byte(&self, index: usize) -> u8 {
        self.bytes[index % FINGERPRINT_LEN]
    }

    /// Rolling cursor starting at index 0.
    #[inline]
    pub fn cursor(&self) -> FingerprintCursor<'_> {
        FingerprintCursor { fp: self, pos: 0 }
    }

    /// Digest as a string (lossy only for hand-built non-ASCII padding).
    pub fn to_hex(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Rolling cursor into a fingerprint.
///
/// Every generator shares this idiom: read a byte, advance, wrap at the
/// end. Decisions are `byte % N`; no other randomness exists.
#[derive(Debug, Clone)]
pub struct FingerprintCursor<'a> {
    fp: &'a Fingerprint,
    pos: usize,
}

impl FingerprintCursor<'_> {
    /// Returns the byte under the cursor and advances (wrapping).
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        let b = self.fp.byte(self.pos);
        self.pos = (self.pos + 1) % FINGERPRINT_LEN;
        b
    }
}

/// Derives the fingerprint for an identity record.
///
/// Hash input is the fixed-order concatenation of name, email, phone,
/// birthday, and the stringified variation counter. The blake3 digest is
/// rendered as lowercase hex and truncated to [`FINGERPRINT_LEN`].
pub fn fingerprint(record: &IdentityRecord) -> Result<Fingerprint, ComposeError> {
    record.validate()?;

    let mut hasher = Hasher::new();
    hasher.update(record.full_name.as_bytes());
    hasher.update(record.email.as_bytes());
    hasher.update(record.phone.as_bytes());
    hasher.update(record.birthday.as_bytes());
    hasher.update(record.variation.to_string().as_bytes());
    let digest = hex::encode(hasher.finalize().as_bytes());

    log::debug!("fingerprint for {:?}: {}", record.full_name, &digest[..FINGERPRINT_LEN]);
    Ok(Fingerprint::from_digest(&digest, &record.full_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> IdentityRecord {
        IdentityRecord::new(name)
    }

    // ── determinism & sensitivity ─────────────────────────────────────────

    #[test]
    fn same_record_same_fingerprint() {
        let rec = record("Ada Lovelace");
        assert_eq!(fingerprint(&rec).unwrap(), fingerprint(&rec).unwrap());
    }

    #[test]
    fn every_field_changes_the_fingerprint() {
        let base = IdentityRecord {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555".into(),
            birthday: "1815-12-10".into(),
            variation: 0,
        };
        let fp = fingerprint(&base).unwrap();

        let mut m = base.clone();
        m.full_name = "Ada Lovelac".into();
        assert_ne!(fingerprint(&m).unwrap(), fp);

        let mut m = base.clone();
        m.email = "ada@example.org".into();
        assert_ne!(fingerprint(&m).unwrap(), fp);

        let mut m = base.clone();
        m.phone = "556".into();
        assert_ne!(fingerprint(&m).unwrap(), fp);

        let mut m = base.clone();
        m.birthday = "1815-12-11".into();
        assert_ne!(fingerprint(&m).unwrap(), fp);

        let mut m = base.clone();
        m.variation = 9;
        assert_ne!(fingerprint(&m).unwrap(), fp);
    }

    #[test]
    fn variation_round_trip_restores_fingerprint() {
        let mut rec = record("Grace Hopper");
        let fp = fingerprint(&rec).unwrap();
        rec.modify_variation(1);
        assert_ne!(fingerprint(&rec).unwrap(), fp);
        rec.modify_variation(-1);
        assert_eq!(fingerprint(&rec).unwrap(), fp);
    }

    // ── shape ─────────────────────────────────────────────────────────────

    #[test]
    fn fingerprint_is_32_lowercase_hex_chars() {
        let fp = fingerprint(&record("Ada Lovelace")).unwrap();
        let hex = fp.to_hex();
        assert_eq!(hex.len(), FINGERPRINT_LEN);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            fingerprint(&record("  ")),
            Err(ComposeError::InvalidInput(_))
        ));
    }

    // ── padding rule ──────────────────────────────────────────────────────

    #[test]
    fn short_digest_padded_with_name() {
        let fp = Fingerprint::from_digest("abcd", "Bob");
        let hex = fp.to_hex();
        assert_eq!(hex.len(), FINGERPRINT_LEN);
        assert!(hex.starts_with("abcdBobBobBob"));
    }

    #[test]
    #[should_panic(expected = "cannot be padded")]
    fn short_digest_with_empty_name_panics() {
        let _ = Fingerprint::from_digest("abcd", "");
    }

    #[test]
    fn padding_is_deterministic() {
        assert_eq!(
            Fingerprint::from_digest("ff", "Núria"),
            Fingerprint::from_digest("ff", "Núria")
        );
    }

    // ── cursor ────────────────────────────────────────────────────────────

    #[test]
    fn cursor_wraps() {
        let fp = fingerprint(&record("X Y")).unwrap();
        let mut cur = fp.cursor();
        let first = cur.next_byte();
        for _ in 1..FINGERPRINT_LEN {
            cur.next_byte();
        }
        assert_eq!(cur.next_byte(), first);
    }

    #[test]
    fn byte_indexing_wraps() {
        let fp = fingerprint(&record("X Y")).unwrap();
        assert_eq!(fp.byte(0), fp.byte(FINGERPRINT_LEN));
        assert_eq!(fp.byte(5), fp.byte(5 + 2 * FINGERPRINT_LEN));
    }
}
