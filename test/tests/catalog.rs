use arena_client::{transport::Route, CardCatalog, CatalogError};
use arena_shared::CardId;
use arena_test::{card, network_error, status_error, Call, ScriptedTransport};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn seeds_then_lists_cards() {
    init_logging();
    let transport = ScriptedTransport::new();
    transport.push_cards(Ok(vec![card("knight", 3), card("archer", 4)]));

    let catalog = CardCatalog::load(&transport, true).await.unwrap();

    assert_eq!(transport.calls(), vec![Call::Seed, Call::ListCards]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(&CardId::from("archer")), Some(&card("archer", 4)));
    let names: Vec<_> = catalog.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["knight", "archer"]);
}

#[tokio::test]
async fn failed_seed_does_not_prevent_listing() {
    init_logging();
    let transport = ScriptedTransport::new();
    transport.push_seed(Err(status_error(Route::Seed, 500)));
    transport.push_cards(Ok(vec![card("giant", 5)]));

    let catalog = CardCatalog::load(&transport, true).await.unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(transport.calls(), vec![Call::Seed, Call::ListCards]);
}

#[tokio::test]
async fn seeding_can_be_skipped() {
    init_logging();
    let transport = ScriptedTransport::new();

    let catalog = CardCatalog::load(&transport, false).await.unwrap();

    assert!(catalog.is_empty());
    assert_eq!(transport.calls(), vec![Call::ListCards]);
}

#[tokio::test]
async fn failed_listing_is_an_error() {
    init_logging();
    let transport = ScriptedTransport::new();
    transport.push_cards(Err(network_error(Route::ListCards)));

    let result = CardCatalog::load(&transport, false).await;

    assert_eq!(
        result.unwrap_err(),
        CatalogError::ListCards(network_error(Route::ListCards))
    );
}

#[tokio::test]
async fn unknown_card_is_not_found() {
    let catalog = CardCatalog::from_cards(vec![card("knight", 3)]);

    assert_eq!(catalog.get(&CardId::from("dragon")), None);
    assert_eq!((&catalog).into_iter().count(), 1);
}
