//! Filename-to-product matching heuristic
//!
//! Products imported from the inventory spreadsheet carry no foreign key to
//! their image files, so the image and link commands pair them up by scoring
//! filename similarity against a product's category, brand, and name.
//!
//! Matching is a pure function over its two inputs: no index is built and
//! nothing is cached, so a fixed product and candidate list always produce
//! the same result, and concurrent invocations need no coordination.

mod score;

pub use score::{score, CategoryClass};

/// An image file eligible for matching, with its comparison form derived
/// once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    /// Original filename, e.g. `Ace-Ball-Tour.jpg`.
    pub filename: String,
    /// Filename stem, lowercased, with `-` and `_` normalized to spaces.
    pub derived_name: String,
}

impl ImageCandidate {
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let stem = match filename.rsplit_once('.') {
            Some((stem, _ext)) => stem,
            None => filename.as_str(),
        };
        let derived_name = stem.to_lowercase().replace(['-', '_'], " ").trim().to_string();
        Self {
            filename,
            derived_name,
        }
    }
}

/// The product attributes the heuristic compares against, lowercased and
/// trimmed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub brand: String,
    pub category: String,
}

impl ProductFields {
    pub fn new(name: &str, brand: &str, category: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            brand: brand.trim().to_lowercase(),
            category: category.trim().to_lowercase(),
        }
    }
}

/// Best-scoring candidate for a product, with its score. A score of 0 never
/// produces a `MatchResult`; "no match" is `None` at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub candidate: &'a ImageCandidate,
    pub score: u32,
}

/// Pick the best-scoring candidate, or `None` when every candidate scores 0.
///
/// Candidates are visited in slice order, and a later candidate replaces the
/// running best only with a strictly greater score, so ties go to the
/// earliest candidate. Callers that need reproducible output must pass
/// candidates in a fixed order (the asset scanner sorts by filename).
pub fn best_match<'a>(
    product: &ProductFields,
    candidates: &'a [ImageCandidate],
) -> Option<MatchResult<'a>> {
    let mut best: Option<MatchResult<'a>> = None;
    for candidate in candidates {
        let score = score(product, candidate);
        if score > best.map_or(0, |b| b.score) {
            best = Some(MatchResult { candidate, score });
        }
    }
    best
}
