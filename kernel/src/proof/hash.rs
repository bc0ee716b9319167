//! Domain-separated SHA-256 content hashes.

use sha2::{Digest, Sha256};

/// Declares `HashDomain`, its byte prefixes and `ALL` from one list.
macro_rules! hash_domains {
    ($( $(#[$meta:meta])* $variant:ident => $bytes:expr ),+ $(,)?) => {
        /// Domain separator prepended to every hashed payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $( $(#[$meta])* $variant, )+
        }

        impl HashDomain {
            /// Null-terminated prefix bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// Every domain, in declaration order.
            pub const ALL: &[HashDomain] = &[ $( Self::$variant, )+ ];
        }
    };
}

hash_domains! {
    /// Full search report (policy echo, diagnostics, ranking).
    SearchReport => b"LODESTONE::SEARCH_REPORT::V1\0",
    /// Ranked result list only.
    ResultRanking => b"LODESTONE::RESULT_RANKING::V1\0",
    /// Search policy snapshot.
    SearchPolicy => b"LODESTONE::SEARCH_POLICY::V1\0",
}

/// A content hash in `"algorithm:hex_digest"` form.
///
/// Invariant: exactly one `:` with non-empty text on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse `"algorithm:hex"`. `None` on malformed input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon + 1 == s.len() || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// `sha256(domain_prefix || data)`, rendered as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    ContentHash {
        full: format!("sha256:{hex_digest}"),
        colon: "sha256".len(),
    }
}
