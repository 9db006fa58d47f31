//! Geo-targeted offer selection.
//!
//! The pool for a visitor is the country's own list plus every cross-border
//! link naming that country; an empty pool substitutes the Global list. One
//! uniform-random pick per page load feeds every ad slot on the page.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::Rng;

use crate::geo::GLOBAL_REGION;

/// Offer lists per visitor country, plus the catch-all under `Global`.
static OFFERS_BY_COUNTRY: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            "US",
            vec![
                "https://amzn.to/44dBQJe",
                "https://amzn.to/44dBQJe",
                "https://amzn.to/44dBQJe",
            ],
        ),
        ("GB", vec!["https://amzn.to/44dBQJe", "https://amzn.to/44dBQJe"]),
        ("CA", vec!["https://amzn.to/44dBQJe"]),
        ("BR", vec!["https://1wksrw.com/?open=register&p=h8zt"]),
        (
            GLOBAL_REGION,
            vec![
                "https://1wksrw.com/betting?open=register&p=xctu",
                "https://1wksrw.com/?open=register&p=h8zt",
            ],
        ),
    ])
});

/// Links that are also valid outside their primary-listed country.
static CROSS_BORDER_RULES: Lazy<Vec<(&'static str, &'static [&'static str])>> = Lazy::new(|| {
    vec![
        (
            "https://1wksrw.com/betting?open=register&p=xctu",
            &["BR", "RU", "IN"][..],
        ),
        (
            "https://1wksrw.com/?open=register&p=h8zt",
            &["BD", "PH", "AR"][..],
        ),
        (
            "https://record.betsson.com/_Ipto0Q-i5zR7HLc7-ZUbAGNd7ZgqdRLk/1/",
            &["AR", "BR", "CO", "GR"][..],
        ),
    ]
});

/// Local offers ∪ cross-border matches, or the Global list when that union is
/// empty. Duplicate entries are kept; the pick stays uniform over entries.
pub fn eligible_pool(country: &str) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = OFFERS_BY_COUNTRY
        .get(country)
        .cloned()
        .unwrap_or_default();

    for (link, countries) in CROSS_BORDER_RULES.iter() {
        if countries.contains(&country) {
            pool.push(link);
        }
    }

    if pool.is_empty() {
        pool = OFFERS_BY_COUNTRY[GLOBAL_REGION].clone();
    }
    pool
}

pub fn pick_offer(country: &str, rng: &mut impl Rng) -> &'static str {
    let pool = eligible_pool(country);
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_offers_union_cross_border_links() {
        let pool = eligible_pool("BR");
        assert!(pool.contains(&"https://1wksrw.com/?open=register&p=h8zt"));
        assert!(pool.contains(&"https://1wksrw.com/betting?open=register&p=xctu"));
        assert!(pool.contains(&"https://record.betsson.com/_Ipto0Q-i5zR7HLc7-ZUbAGNd7ZgqdRLk/1/"));
        // Nothing US-only leaks in.
        assert!(!pool.contains(&"https://amzn.to/44dBQJe"));
    }

    #[test]
    fn unknown_countries_fall_back_to_global() {
        assert_eq!(eligible_pool("ZZ"), OFFERS_BY_COUNTRY[GLOBAL_REGION]);
        assert_eq!(eligible_pool(GLOBAL_REGION), OFFERS_BY_COUNTRY[GLOBAL_REGION]);
    }

    #[test]
    fn picks_never_leave_the_eligible_set() {
        let mut rng = rand::thread_rng();
        let allowed = eligible_pool("BR");
        for _ in 0..200 {
            assert!(allowed.contains(&pick_offer("BR", &mut rng)));
        }
    }
}
