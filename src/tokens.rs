//! Approximate token counting.
//!
//! Real token counts come from whatever tokenizer the producing pipeline
//! runs. When none is available, a rough 4-chars-per-token heuristic gives a
//! usable size estimate for budgeting and display.

/// Approximate characters-per-token ratio.
///
/// This is a rough heuristic (4 chars ≈ 1 token). Counts from a proper
/// tokenizer should always be preferred when available.
pub const CHARS_PER_TOKEN: usize = 4;

/// Estimate the token count of `text` at [`CHARS_PER_TOKEN`] chars per token.
///
/// Counts Unicode scalar values, not bytes, and rounds up, so any non-empty
/// text estimates to at least one token. Empty text estimates to zero.
pub fn approx_token_count(text: &str) -> u64 {
    let chars = text.chars().count();
    ((chars + CHARS_PER_TOKEN - 1) / CHARS_PER_TOKEN) as u64
}
