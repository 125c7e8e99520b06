use std::hash::{Hash, Hasher};

use twox_hash::XxHash64;

/// Cheap fingerprint used to skip re-analysis when an edit leaves the text unchanged.
pub(crate) fn compute_content_hash(content: &str) -> u64 {
    let mut hasher = XxHash64::default();
    content.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::compute_content_hash;

    #[test]
    fn hash_tracks_content() {
        assert_eq!(compute_content_hash("a { color: red; }"), compute_content_hash("a { color: red; }"));
        assert_ne!(compute_content_hash("a { color: red; }"), compute_content_hash("a { color: blue; }"));
    }
}
