use aura_cache::{Cache, FileStore, KeyValueStore};
use aura_commerce::cart::CART_STORAGE_KEY;
use aura_commerce::locale::LANGUAGE_STORAGE_KEY;
use aura_commerce::prelude::*;

fn open_store(dir: &std::path::Path) -> CartStore<FileStore> {
    CartStore::open(Cache::new(FileStore::open(dir).unwrap()))
}

#[test]
fn cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::sample();

    let mut store = open_store(dir.path());
    store
        .add(catalog.require(&ProductId::new("1")).unwrap(), 1)
        .unwrap();
    store
        .add(catalog.require(&ProductId::new("6")).unwrap(), 2)
        .unwrap();
    store.add(catalog.require(&ProductId::new("1")).unwrap(), 1).unwrap();

    let reopened = open_store(dir.path());
    assert_eq!(reopened.cart().unique_item_count(), 2);
    assert_eq!(reopened.cart().quantity_of(&ProductId::new("1")), 2);
    assert_eq!(reopened.cart().item_count(), 4);
    assert_eq!(reopened.cart().total(), Money::eur(2 * 2800 + 2 * 1400));
}

#[test]
fn corrupt_file_loads_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let raw = FileStore::open(dir.path()).unwrap();
    raw.set(CART_STORAGE_KEY, b"not json at all").unwrap();

    let mut store = open_store(dir.path());
    assert!(store.cart().is_empty());

    // The next write replaces the corrupt entry.
    let catalog = Catalog::sample();
    store
        .add(catalog.require(&ProductId::new("3")).unwrap(), 1)
        .unwrap();
    assert_eq!(open_store(dir.path()).cart().item_count(), 1);
}

#[test]
fn stored_totals_are_recomputed() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::sample();
    let product = catalog.require(&ProductId::new("2")).unwrap();
    let doc = serde_json::json!({
        "items": [{ "product": product, "quantity": 3 }],
        "total": 1,
        "itemCount": 99,
    });
    Cache::new(FileStore::open(dir.path()).unwrap())
        .set(CART_STORAGE_KEY, &doc)
        .unwrap();

    let store = open_store(dir.path());
    assert_eq!(store.cart().item_count(), 3);
    assert_eq!(store.cart().total(), Money::eur(3 * 3200));
}

#[test]
fn language_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let mut languages = LanguageStore::open(Cache::new(FileStore::open(dir.path()).unwrap()));
    assert_eq!(languages.language(), Language::De);
    assert!(languages.set(Language::En));

    let raw = FileStore::open(dir.path()).unwrap();
    assert_eq!(raw.get(LANGUAGE_STORAGE_KEY).unwrap(), Some(b"en".to_vec()));
    let reopened = LanguageStore::open(Cache::new(raw));
    assert_eq!(reopened.language(), Language::En);
}

#[test]
fn checkout_places_order_from_stored_cart() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::sample();
    let mut store = open_store(dir.path());
    store
        .add(catalog.require(&ProductId::new("3")).unwrap(), 2)
        .unwrap();

    let form = CheckoutForm::new(Address::new("Lena", "Vogel", "Torstraße 12", "Berlin", "10119"))
        .with_payment_method(PaymentMethod::PayPal);
    let order = Order::place(store.cart(), &form, &ShippingPolicy::default()).unwrap();
    assert_eq!(order.grand_total, Money::eur(9000));
    assert_eq!(order.shipping_total, Money::eur(0));

    store.clear();
    assert!(open_store(dir.path()).cart().is_empty());
}
