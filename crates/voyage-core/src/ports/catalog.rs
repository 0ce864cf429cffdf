use crate::domain::Destination;

/// Read-only source of travel destinations.
pub trait DestinationCatalog: Send + Sync {
    /// Every destination, in catalog order.
    fn all(&self) -> &[Destination];
}
