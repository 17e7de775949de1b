use crate::cafe::Cafe;

/// One stable pass over an already-fetched list: case-insensitive substring
/// match of `search` against name or address (only when `search` is
/// non-empty), and parsed rating at or above `min_rating` (only when the
/// threshold is positive). Both must hold for a cafe to survive.
pub fn apply(mut cafes: Vec<Cafe>, search: &str, min_rating: f64) -> Vec<Cafe> {
    let search = search.to_lowercase();
    cafes.retain(|cafe| {
        (search.is_empty()
            || cafe.name.to_lowercase().contains(&search)
            || cafe.address.to_lowercase().contains(&search))
            && (min_rating <= 0.0 || cafe.rating.parse::<f64>().is_ok_and(|x| x >= min_rating))
    });
    cafes
}

#[cfg(test)]
mod tests {
    use crate::cafe::Coordinate;

    use super::*;

    fn cafe(name: &str, address: &str, rating: &str) -> Cafe {
        Cafe {
            id: 1,
            name: name.to_string(),
            rating: rating.to_string(),
            reviews: 100,
            address: address.to_string(),
            image: String::new(),
            is_open: true,
            description: String::new(),
            coordinates: Coordinate {
                lat: 40.7,
                lng: -73.9,
            },
        }
    }

    #[test]
    fn empty_search_and_zero_rating_change_nothing() {
        let cafes = vec![
            cafe("Java Hut", "12 Main St", "3.5"),
            cafe("Bean There", "Address not available", "4.9"),
        ];
        assert_eq!(apply(cafes.clone(), "", 0.0), cafes);
    }

    #[test]
    fn search_matches_name_or_address_case_insensitively() {
        let cafes = vec![
            cafe("Coffee Corner", "12 Main St", "4.0"),
            cafe("Java Hut", "3 Coffee Rd", "4.0"),
            cafe("Bean There", "5 Elm St", "4.0"),
        ];
        let kept = apply(cafes, "COFFEE", 0.0);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "Coffee Corner");
        assert_eq!(kept[1].name, "Java Hut");
    }

    #[test]
    fn rating_threshold_drops_lower_rated_cafes() {
        let cafes = vec![
            cafe("Java Hut", "12 Main St", "3.4"),
            cafe("Bean There", "5 Elm St", "4.5"),
        ];
        let kept = apply(cafes, "", 4.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Bean There");
    }

    #[test]
    fn predicates_apply_together() {
        let cafes = vec![
            cafe("Coffee Corner", "12 Main St", "3.2"),
            cafe("Coffee House", "5 Elm St", "4.8"),
            cafe("Bean There", "5 Elm St", "4.9"),
        ];
        let kept = apply(cafes, "coffee", 4.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Coffee House");
    }

    #[test]
    fn order_is_preserved() {
        let cafes = vec![
            cafe("B Cafe", "1 St", "4.0"),
            cafe("A Cafe", "2 St", "4.0"),
            cafe("C Cafe", "3 St", "4.0"),
        ];
        let kept = apply(cafes, "cafe", 0.0);
        let names: Vec<_> = kept.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, ["B Cafe", "A Cafe", "C Cafe"]);
    }
}
