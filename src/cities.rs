//! Static reference set of Indian cities
//!
//! Used by the location resolver and by the city picker search.

use crate::models::ReferencePoint;

/// Maximum number of matches returned by [`search`]
pub const MAX_SEARCH_RESULTS: usize = 10;

/// (name, state, latitude, longitude)
const INDIAN_CITIES: &[(&str, &str, f64, f64)] = &[
    ("Delhi", "Delhi", 28.6139, 77.2090),
    ("Mumbai", "Maharashtra", 19.0760, 72.8777),
    ("Bangalore", "Karnataka", 12.9716, 77.5946),
    ("Chennai", "Tamil Nadu", 13.0827, 80.2707),
    ("Hyderabad", "Telangana", 17.3850, 78.4867),
    ("Pune", "Maharashtra", 18.5204, 73.8567),
    ("Kolkata", "West Bengal", 22.5726, 88.3639),
    ("Ahmedabad", "Gujarat", 23.0225, 72.5714),
    ("Jaipur", "Rajasthan", 26.9124, 75.7873),
    ("Lucknow", "Uttar Pradesh", 26.8467, 80.9462),
    ("Kanpur", "Uttar Pradesh", 26.4499, 80.3319),
    ("Nagpur", "Maharashtra", 21.1458, 79.0882),
    ("Indore", "Madhya Pradesh", 22.7196, 75.8577),
    ("Bhopal", "Madhya Pradesh", 23.2599, 77.4126),
    ("Visakhapatnam", "Andhra Pradesh", 17.6868, 83.2185),
    ("Patna", "Bihar", 25.5941, 85.1376),
    ("Vadodara", "Gujarat", 22.3072, 73.1812),
    ("Ghaziabad", "Uttar Pradesh", 28.6692, 77.4538),
    ("Ludhiana", "Punjab", 30.9010, 75.8573),
    ("Agra", "Uttar Pradesh", 27.1767, 78.0081),
    ("Nashik", "Maharashtra", 19.9975, 73.7898),
    ("Faridabad", "Haryana", 28.4089, 77.3178),
    ("Meerut", "Uttar Pradesh", 28.9845, 77.7064),
    ("Rajkot", "Gujarat", 22.3039, 70.8022),
    ("Kalyan-Dombivali", "Maharashtra", 19.2403, 73.1305),
    ("Vasai-Virar", "Maharashtra", 19.4914, 72.8054),
    ("Varanasi", "Uttar Pradesh", 25.3176, 82.9739),
    ("Srinagar", "Jammu & Kashmir", 34.0837, 74.7973),
    ("Aurangabad", "Maharashtra", 19.8762, 75.3433),
    ("Dhanbad", "Jharkhand", 23.7957, 86.4304),
    ("Amritsar", "Punjab", 31.6340, 74.8723),
    ("Navi Mumbai", "Maharashtra", 19.0330, 73.0297),
    ("Allahabad", "Uttar Pradesh", 25.4358, 81.8463),
    ("Ranchi", "Jharkhand", 23.3441, 85.3096),
    ("Howrah", "West Bengal", 22.5958, 88.2636),
    ("Coimbatore", "Tamil Nadu", 11.0168, 76.9558),
    ("Jabalpur", "Madhya Pradesh", 23.1815, 79.9864),
    ("Gwalior", "Madhya Pradesh", 26.2183, 78.1828),
    ("Vijayawada", "Andhra Pradesh", 16.5062, 80.6480),
    ("Jodhpur", "Rajasthan", 26.2389, 73.0243),
    ("Madurai", "Tamil Nadu", 9.9252, 78.1198),
];

/// The full reference set in table order
#[must_use]
pub fn reference_set() -> Vec<ReferencePoint> {
    INDIAN_CITIES
        .iter()
        .map(|&(name, state, lat, lng)| ReferencePoint::new(name, state, lat, lng))
        .collect()
}

/// Case-insensitive substring search over city and state names
///
/// Returns at most [`MAX_SEARCH_RESULTS`] points in table order. An empty
/// term matches everything.
#[must_use]
pub fn search(term: &str) -> Vec<ReferencePoint> {
    let term = term.trim().to_lowercase();
    INDIAN_CITIES
        .iter()
        .filter(|(name, state, _, _)| {
            name.to_lowercase().contains(&term) || state.to_lowercase().contains(&term)
        })
        .take(MAX_SEARCH_RESULTS)
        .map(|&(name, state, lat, lng)| ReferencePoint::new(name, state, lat, lng))
        .collect()
}

/// Exact (case-insensitive) lookup by city name
#[must_use]
pub fn find_by_name(name: &str) -> Option<ReferencePoint> {
    let name = name.trim();
    INDIAN_CITIES
        .iter()
        .find(|(city, _, _, _)| city.eq_ignore_ascii_case(name))
        .map(|&(city, state, lat, lng)| ReferencePoint::new(city, state, lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_set_is_complete() {
        let cities = reference_set();
        assert_eq!(cities.len(), 41);
        assert_eq!(cities[0].name, "Delhi");
        assert_eq!(cities[40].name, "Madurai");
        assert!(cities.iter().all(|c| c.coordinate().validate().is_ok()));
    }

    #[test]
    fn test_search_by_state() {
        let results = search("maharashtra");
        assert_eq!(results.len(), 8);
        assert!(results.iter().all(|c| c.region == "Maharashtra"));
        assert_eq!(results[0].name, "Mumbai");
    }

    #[test]
    fn test_search_is_capped() {
        assert_eq!(search("").len(), MAX_SEARCH_RESULTS);
        assert_eq!(search("a").len(), MAX_SEARCH_RESULTS);
    }

    #[test]
    fn test_search_no_match() {
        assert!(search("atlantis").is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let city = find_by_name("navi mumbai").unwrap();
        assert_eq!(city.region, "Maharashtra");
        assert!(find_by_name("Mumbai Central").is_none());
    }
}
