//! Path helpers for output naming and input list handling

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Derive the default output path for an input: same directory, stem plus
/// suffix, original extension.
pub fn derive_output(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }

    input.with_file_name(name)
}

/// De-duplicate the input list while preserving first-seen order.
pub fn dedupe_inputs(inputs: &[String]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for raw in inputs {
        let path = PathBuf::from(raw);
        if seen.insert(path.clone()) {
            out.push(path);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_output_appends_suffix_before_extension() {
        let out = derive_output(Path::new("/videos/input.mp4"), "_cut");
        assert_eq!(out, PathBuf::from("/videos/input_cut.mp4"));
    }

    #[test]
    fn derive_output_without_extension() {
        let out = derive_output(Path::new("clip"), "_cut");
        assert_eq!(out, PathBuf::from("clip_cut"));
    }

    #[test]
    fn dedupe_preserves_first_seen_order() {
        let inputs = vec![
            "b.mp4".to_string(),
            "a.mp4".to_string(),
            "b.mp4".to_string(),
        ];
        let deduped = dedupe_inputs(&inputs);
        assert_eq!(
            deduped,
            vec![PathBuf::from("b.mp4"), PathBuf::from("a.mp4")]
        );
    }
}
