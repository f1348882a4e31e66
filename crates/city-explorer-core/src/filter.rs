// crates/city-explorer-core/src/filter.rs
use crate::model::City;

/// Lower-cases a string for case-insensitive comparison.
///
/// Unlike a transliterating fold this keeps diacritics, so `"Łódź"` does
/// not match `"lodz"`; only letter case is ignored.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get [`NameMatch::name_contains`] for free.
///
/// # Examples
/// ```rust
/// use city_explorer_core::filter::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Negombo").name_contains("NE"));
/// assert!(Place("Kandy").name_contains(""));
/// assert!(!Place("Galle").name_contains("col"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive substring match. The empty query matches every name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_case(self.name_str()).contains(&fold_case(q))
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Returns the cities whose name contains `query`, ignoring case, in list order.
///
/// Pure and uncached; the list is UI-sized, so a linear scan on every render
/// is fine.
pub fn filter_cities<'a>(cities: &'a [City], query: &str) -> Vec<&'a City> {
    let q = fold_case(query);
    cities
        .iter()
        .filter(|c| fold_case(c.name_str()).contains(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_cities;

    #[test]
    fn empty_query_returns_everything_in_order() {
        let cities = default_cities();
        let out = filter_cities(&cities, "");
        assert_eq!(out.len(), cities.len());
        assert!(out.iter().zip(&cities).all(|(a, b)| *a == b));
    }

    #[test]
    fn match_ignores_case() {
        let cities = default_cities();
        let out = filter_cities(&cities, "KAN");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Kandy");
    }

    #[test]
    fn substring_may_be_inside_the_name() {
        let cities = default_cities();
        let names: Vec<_> = filter_cities(&cities, "a")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Kandy", "Galle", "Jaffna"]);
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let cities = default_cities();
        assert!(filter_cities(&cities, " kandy").is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let cities = default_cities();
        assert!(filter_cities(&cities, "xyz").is_empty());
    }
}
