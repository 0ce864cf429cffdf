//! Static destination catalog.

use voyage_core::domain::Destination;
use voyage_core::ports::DestinationCatalog;

/// The fixed set of destinations shown on the site.
pub struct StaticDestinationCatalog {
    destinations: Vec<Destination>,
}

impl StaticDestinationCatalog {
    pub fn new() -> Self {
        Self {
            destinations: sample_destinations(),
        }
    }
}

impl Default for StaticDestinationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DestinationCatalog for StaticDestinationCatalog {
    fn all(&self) -> &[Destination] {
        &self.destinations
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: "taj-mahal".to_string(),
            name: "Taj Mahal".to_string(),
            location: "Agra, India".to_string(),
            category: "Famous Landmarks".to_string(),
            category_id: "famousLandmarks".to_string(),
            region: "Asia".to_string(),
            description: "A breathtaking symbol of eternal love, this white marble mausoleum \
                          was built by Emperor Shah Jahan in memory of his beloved wife Mumtaz Mahal."
                .to_string(),
            highlights: strings(&["UNESCO World Heritage Site", "One of Seven Wonders"]),
            best_time: "October to March".to_string(),
            attractions: strings(&["Main mausoleum", "Beautiful Charbagh gardens"]),
            tips: "Visit early morning for best lighting and fewer crowds.".to_string(),
            image: "https://images.unsplash.com/photo-1564507592333-c60657eea523?w=800"
                .to_string(),
        },
        Destination {
            id: "santorini".to_string(),
            name: "Santorini".to_string(),
            location: "Greece".to_string(),
            category: "Beach Destinations".to_string(),
            category_id: "beachDestinations".to_string(),
            region: "Europe".to_string(),
            description: "Famous for its dramatic cliffs, pristine white-washed buildings, \
                          and spectacular sunsets over the deep blue Aegean Sea."
                .to_string(),
            highlights: strings(&["World-famous sunsets", "Distinctive architecture"]),
            best_time: "April to November".to_string(),
            attractions: strings(&["Oia village", "Red Beach"]),
            tips: "Book sunset dinner reservations early.".to_string(),
            image: "https://images.unsplash.com/photo-1613395877344-13d4a8e0d49e?w=800"
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_ids() {
        let catalog = StaticDestinationCatalog::new();
        let ids: Vec<&str> = catalog.all().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["taj-mahal", "santorini"]);
    }

    #[test]
    fn test_description_is_single_spaced() {
        let catalog = StaticDestinationCatalog::new();
        let taj = &catalog.all()[0];
        assert!(taj.description.contains("mausoleum was built"));
        assert!(!taj.description.contains("  "));
    }
}
