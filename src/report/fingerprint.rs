use sha1::{Digest, Sha1};

use crate::select::select_model::SelectOption;

/// SHA-1 hex digest of an option list.
///
/// Two lists share a fingerprint only if every value and label matches in
/// order.
pub fn options_fingerprint(options: &[SelectOption]) -> String {
    let mut hasher = Sha1::new();
    for option in options {
        // length prefixes keep ("ab", "c") distinct from ("a", "bc")
        hasher.update((option.value.len() as u64).to_le_bytes());
        hasher.update(option.value.as_bytes());
        hasher.update((option.label.len() as u64).to_le_bytes());
        hasher.update(option.label.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}
