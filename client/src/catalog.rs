use std::collections::HashMap;

use log::{info, warn};

use arena_shared::{Card, CardId};

use crate::{error::CatalogError, transport::Transport};

/// The read-only card catalog, fetched once at startup
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    by_id: HashMap<CardId, usize>,
}

impl CardCatalog {
    /// Fetches the catalog, optionally asking the service to seed it first.
    ///
    /// A failed seed only gets logged, since the catalog may well be seeded
    /// already; a failed listing is an error.
    pub async fn load(transport: &dyn Transport, seed: bool) -> Result<Self, CatalogError> {
        if seed {
            if let Err(error) = transport.seed().await {
                warn!("seeding the card catalog failed: {}", error);
            }
        }

        let cards = transport
            .list_cards()
            .await
            .map_err(CatalogError::ListCards)?;
        info!("loaded {} cards", cards.len());

        Ok(Self::from_cards(cards))
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        let by_id = cards
            .iter()
            .enumerate()
            .map(|(index, card)| (card.card_id.clone(), index))
            .collect();
        Self { cards, by_id }
    }

    pub fn get(&self, card_id: &CardId) -> Option<&Card> {
        self.by_id.get(card_id).map(|index| &self.cards[*index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a CardCatalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
