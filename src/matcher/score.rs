//! Category-driven candidate scoring.

use std::collections::HashSet;

use super::{ImageCandidate, ProductFields};

/// Closed set of category families, each with its own scoring rule.
///
/// Keyword precedence is ball, then grip, then bag: a category string
/// containing more than one keyword classifies as the first in that order,
/// so the ball rules can never be shadowed by a stray "grip" or "bag"
/// substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryClass {
    Ball,
    Grip,
    Bag,
    Generic,
}

impl CategoryClass {
    pub fn classify(category: &str) -> Self {
        if category.contains("ball") {
            CategoryClass::Ball
        } else if category.contains("overgrip") || category.contains("grip") {
            CategoryClass::Grip
        } else if category.contains("bag") {
            CategoryClass::Bag
        } else {
            CategoryClass::Generic
        }
    }
}

/// Score one candidate against one product.
///
/// Reachable values are exactly 0, 20, 30, 50, 70, 90, and 100. Ball, grip,
/// and bag categories match on their keyword alone (50) or keyword plus
/// brand (100); everything else falls through to name-based scoring.
pub fn score(product: &ProductFields, candidate: &ImageCandidate) -> u32 {
    let derived = candidate.derived_name.as_str();
    match CategoryClass::classify(&product.category) {
        CategoryClass::Ball => keyword_score(derived, &product.brand, &["ball"]),
        CategoryClass::Grip => keyword_score(derived, &product.brand, &["grip", "overgrip"]),
        CategoryClass::Bag => keyword_score(derived, &product.brand, &["bag"]),
        CategoryClass::Generic => name_score(derived, product),
    }
}

fn keyword_score(derived: &str, brand: &str, keywords: &[&str]) -> u32 {
    let keyword_hit = keywords.iter().any(|k| derived.contains(k));
    if keyword_hit && brand_in(derived, brand) {
        100
    } else if keyword_hit {
        50
    } else {
        0
    }
}

/// Rackets and other uncategorized products match on the product name:
/// containment either way, then shared words, then the brand alone.
fn name_score(derived: &str, product: &ProductFields) -> u32 {
    let name = product.name.as_str();
    if !name.is_empty() && !derived.is_empty() && (derived.contains(name) || name.contains(derived))
    {
        return 90;
    }

    let name_normalized = name.replace('-', " ");
    let name_words: HashSet<&str> = name_normalized.split_whitespace().collect();
    let image_words: HashSet<&str> = derived.split_whitespace().collect();
    let shared = name_words.intersection(&image_words).count();

    if shared >= 2 {
        70
    } else if shared == 1 {
        30
    } else if brand_in(derived, &product.brand) {
        20
    } else {
        0
    }
}

// An empty brand is a substring of everything; counting it as a hit would
// silently promote 50-point matches to 100.
fn brand_in(derived: &str, brand: &str) -> bool {
    !brand.is_empty() && derived.contains(brand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_keyword_precedence() {
        assert_eq!(CategoryClass::classify("padel balls"), CategoryClass::Ball);
        assert_eq!(CategoryClass::classify("overgrip"), CategoryClass::Grip);
        assert_eq!(CategoryClass::classify("grip"), CategoryClass::Grip);
        assert_eq!(CategoryClass::classify("bag"), CategoryClass::Bag);
        assert_eq!(CategoryClass::classify("racket"), CategoryClass::Generic);
        // Overlapping keywords resolve in source order.
        assert_eq!(CategoryClass::classify("ball bag"), CategoryClass::Ball);
        assert_eq!(CategoryClass::classify("grip bag"), CategoryClass::Grip);
        assert_eq!(CategoryClass::classify("ball grip bag"), CategoryClass::Ball);
    }

    #[test]
    fn ball_category_ignores_grip_and_bag_keywords() {
        let product = ProductFields::new("tour ball", "ace", "balls");
        let candidate = ImageCandidate::new("ace-grip-bag.jpg");
        assert_eq!(score(&product, &candidate), 0);
    }

    #[test]
    fn overgrip_keyword_counts_for_grip_category() {
        let product = ProductFields::new("overgrip classic", "vibe", "grip");
        let candidate = ImageCandidate::new("vibe-overgrip.jpg");
        assert_eq!(score(&product, &candidate), 100);
    }

    #[test]
    fn empty_brand_never_upgrades_a_keyword_match() {
        let product = ProductFields::new("tour ball", "", "balls");
        let candidate = ImageCandidate::new("tour-ball.jpg");
        assert_eq!(score(&product, &candidate), 50);
    }

    #[test]
    fn generic_containment_scores_90() {
        let product = ProductFields::new("pro racket x1", "brandz", "racket");
        let candidate = ImageCandidate::new("brandz-pro-racket-x1.jpg");
        assert_eq!(score(&product, &candidate), 90);
    }

    #[test]
    fn generic_two_shared_words_score_70() {
        let product = ProductFields::new("pro racket x1", "brandz", "racket");
        let candidate = ImageCandidate::new("racket-x1-studio.jpg");
        assert_eq!(score(&product, &candidate), 70);
    }

    #[test]
    fn generic_one_shared_word_scores_30() {
        let product = ProductFields::new("pro racket x1", "brandz", "racket");
        let candidate = ImageCandidate::new("x1-poster.jpg");
        assert_eq!(score(&product, &candidate), 30);
    }

    #[test]
    fn generic_brand_only_scores_20() {
        let product = ProductFields::new("pro racket x1", "brandz", "racket");
        let candidate = ImageCandidate::new("brandz-catalog.jpg");
        assert_eq!(score(&product, &candidate), 20);
    }

    #[test]
    fn generic_hyphenated_product_name_shares_words() {
        let product = ProductFields::new("pro-racket x1", "brandz", "racket");
        let candidate = ImageCandidate::new("racket-x1-studio.jpg");
        assert_eq!(score(&product, &candidate), 70);
    }

    #[test]
    fn unrelated_candidate_scores_0() {
        let product = ProductFields::new("pro racket x1", "brandz", "racket");
        let candidate = ImageCandidate::new("unrelated.jpg");
        assert_eq!(score(&product, &candidate), 0);
    }

    #[test]
    fn empty_product_fields_score_0() {
        let product = ProductFields::new("", "", "");
        let candidate = ImageCandidate::new("anything.jpg");
        assert_eq!(score(&product, &candidate), 0);
    }
}
