use crate::itinerary::ItinerarySet;

pub trait Importer {
    fn import(&self, raw: &str) -> ItinerarySet;
}
