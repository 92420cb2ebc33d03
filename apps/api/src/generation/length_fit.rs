//! Length Fitter: compresses a draft toward a target word count.
//!
//! # Rules
//! - A draft at or under the target is returned byte-for-byte unchanged.
//! - Paragraphs of `ATOMIC_PARAGRAPH_WORDS` words or fewer (greeting, signature) are kept whole.
//!   The final paragraph is also kept whole up to `SIGN_OFF_MAX_WORDS`, so a long display name
//!   never loses words from the signature.
//! - The atomic words are reserved from the budget first; the remainder is shared across the
//!   other paragraphs in proportion to their length, with a floor of `MIN_PARAGRAPH_WORDS`.
//! - A compressed paragraph keeps a prefix slice, a contiguous slice from its middle, and a
//!   suffix slice. When the middle allowance is zero the prefix and suffix are joined by
//!   `ELLIPSIS`.
//! - Paragraph order and count never change; the output never grows past the draft.

/// Paragraphs with this many words or fewer are never truncated.
pub const ATOMIC_PARAGRAPH_WORDS: usize = 5;
/// A final paragraph up to this length is treated as the sign-off and kept whole.
pub const SIGN_OFF_MAX_WORDS: usize = 12;
/// Smallest per-paragraph target for a non-atomic paragraph.
pub const MIN_PARAGRAPH_WORDS: usize = 5;
pub const ELLIPSIS: &str = "...";

/// Share of a paragraph's target kept from its start and end, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitRatios {
    pub prefix_pct: usize,
    pub suffix_pct: usize,
}

impl Default for FitRatios {
    fn default() -> Self {
        Self {
            prefix_pct: 30,
            suffix_pct: 30,
        }
    }
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Fits `draft` to roughly `target_words` with the default 30%/30% ratios.
pub fn fit(draft: &str, target_words: usize) -> String {
    fit_with_ratios(draft, target_words, FitRatios::default())
}

pub fn fit_with_ratios(draft: &str, target_words: usize, ratios: FitRatios) -> String {
    let total = word_count(draft);
    if total <= target_words {
        return draft.to_string();
    }

    let paragraphs = split_paragraphs(draft);
    let counts: Vec<usize> = paragraphs.iter().map(|p| word_count(p)).collect();

    let last = paragraphs.len().saturating_sub(1);
    let atomic: Vec<bool> = counts
        .iter()
        .enumerate()
        .map(|(i, &n)| n <= ATOMIC_PARAGRAPH_WORDS || (i == last && n <= SIGN_OFF_MAX_WORDS))
        .collect();

    let atomic_words: usize = counts
        .iter()
        .zip(&atomic)
        .filter(|&(_, &is_atomic)| is_atomic)
        .map(|(&n, _)| n)
        .sum();
    let flexible_words = total - atomic_words;
    let budget = target_words.saturating_sub(atomic_words);

    paragraphs
        .iter()
        .zip(counts.iter().zip(&atomic))
        .map(|(paragraph, (&n, &is_atomic))| {
            if is_atomic {
                return paragraph.to_string();
            }
            // flexible_words > 0 here: this paragraph is non-atomic.
            let paragraph_target = (n * budget / flexible_words).max(MIN_PARAGRAPH_WORDS);
            if paragraph_target >= n {
                return paragraph.to_string();
            }
            compress_paragraph(paragraph, paragraph_target, ratios)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Splits on blank lines. Single newlines inside a paragraph are preserved.
fn split_paragraphs(draft: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in draft.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}

/// Keeps `target` words of `paragraph`: prefix, centered middle, suffix.
fn compress_paragraph(paragraph: &str, target: usize, ratios: FitRatios) -> String {
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    let n = words.len();

    let prefix = (target * ratios.prefix_pct / 100).min(n);
    let suffix = (target * ratios.suffix_pct / 100).min(n - prefix);
    let middle = target.saturating_sub(prefix + suffix);

    if middle == 0 {
        let mut kept: Vec<&str> = words[..prefix].to_vec();
        kept.push(ELLIPSIS);
        kept.extend_from_slice(&words[n - suffix..]);
        return kept.join(" ");
    }

    // Center the middle slice in the gap between prefix and suffix.
    let gap = n - prefix - suffix;
    let middle = middle.min(gap);
    let start = prefix + (gap - middle) / 2;

    words[..prefix]
        .iter()
        .chain(&words[start..start + middle])
        .chain(&words[n - suffix..])
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
