use offerboard_core::model::Offer;

/// Sidebar line for one fetched offer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfferVm {
    pub title: String,
    pub pubid: String,
}

impl From<&Offer> for OfferVm {
    fn from(offer: &Offer) -> Self {
        Self {
            title: offer
                .title
                .clone()
                .unwrap_or_else(|| "No Title".to_string()),
            pubid: offer.pubid.clone(),
        }
    }
}

#[must_use]
pub fn map_offers(offers: &[Offer]) -> Vec<OfferVm> {
    offers.iter().map(OfferVm::from).collect()
}
