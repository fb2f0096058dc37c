// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// A run id is a " | "-joined list of segments, one per part of
// the configuration (corpus, encoder, decoder, ...). Each part
// knows how to describe itself; the id builder only walks the
// list and joins what it gets back.
//
// Parts that can be switched off (the reconstructor) return None
// and simply drop out of the id.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

// ─── IdSegment ────────────────────────────────────────────────────────────────
/// A configuration part that contributes a segment to a run id.
pub trait IdSegment {
    /// The human-readable segment, or None when this part is
    /// disabled and must not appear in the id.
    fn id_segment(&self) -> Option<String>;
}

/// Join the segments of all enabled parts with `" | "`.
pub fn join_segments(parts: &[&dyn IdSegment]) -> String {
    parts
        .iter()
        .filter_map(|part| part.id_segment())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// A fixed literal segment, such as the model name.
impl IdSegment for String {
    fn id_segment(&self) -> Option<String> {
        Some(self.clone())
    }
}
