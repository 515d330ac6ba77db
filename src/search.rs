use crate::models::review::Review;

/// Reviews whose shop name contains `term`, ignoring case, in store order.
/// An empty term matches everything.
pub fn filter_reviews<'a>(reviews: &'a [Review], term: &str) -> Vec<&'a Review> {
    if term.is_empty() {
        return reviews.iter().collect();
    }
    let needle = term.to_lowercase();
    reviews
        .iter()
        .filter(|r| r.shop_name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::{Rating, ReviewId};

    fn shops(names: &[&str]) -> Vec<Review> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Review {
                id: ReviewId(i as i64 + 1),
                shop_name: name.to_string(),
                review_text: "ok".into(),
                rating: Rating::default(),
                date: "1/1/2025, 12:00:00 AM".into(),
            })
            .collect()
    }

    fn names<'a>(found: &[&'a Review]) -> Vec<&'a str> {
        found.iter().map(|r| r.shop_name.as_str()).collect()
    }

    #[test]
    fn test_case_insensitive_match_keeps_order() {
        let reviews = shops(&["Alpha Mart", "beta shop", "ALPHA Foods"]);
        assert_eq!(names(&filter_reviews(&reviews, "alpha")), vec!["Alpha Mart", "ALPHA Foods"]);
        assert_eq!(names(&filter_reviews(&reviews, "SHOP")), vec!["beta shop"]);
    }

    #[test]
    fn test_empty_term_returns_everything() {
        let reviews = shops(&["b", "a", "c"]);
        assert_eq!(names(&filter_reviews(&reviews, "")), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_term_is_not_trimmed() {
        let reviews = shops(&["Alpha Mart", "Beta"]);
        assert_eq!(names(&filter_reviews(&reviews, " ")), vec!["Alpha Mart"]);
        assert!(filter_reviews(&reviews, "zzz").is_empty());
    }

    #[test]
    fn test_unicode_lowercase() {
        let reviews = shops(&["ÉCOLE Café", "Bakery"]);
        assert_eq!(names(&filter_reviews(&reviews, "école")), vec!["ÉCOLE Café"]);
    }
}
