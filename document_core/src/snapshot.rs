//! Buffer snapshot for deterministic parity testing

use alloc::string::String;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Complete buffer state snapshot for parity testing
///
/// Two operation sequences that should be equivalent can be compared by
/// snapshotting the buffer after each and asserting equality (or comparing
/// hashes when the text is large).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct BufferSnapshot {
    pub cursor: usize,
    pub row: usize,
    pub col: usize,
    pub savepos: usize,
    pub text: String,
}

impl BufferSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(self.cursor.to_le_bytes());
        hasher.update(self.row.to_le_bytes());
        hasher.update(self.col.to_le_bytes());
        hasher.update(self.savepos.to_le_bytes());
        hasher.update(self.text.as_bytes());

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
