use aura_cache::{Cache, MemoryStore};
use aura_commerce::prelude::*;
use proptest::prelude::*;
use proptest::test_runner::Config;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Op {
    Add(usize, i64),
    Remove(usize),
    SetQuantity(usize, i64),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0_usize..9, 1_i64..5).prop_map(|(p, q)| Op::Add(p, q)),
        2 => (0_usize..9).prop_map(Op::Remove),
        2 => (0_usize..9, -2_i64..6).prop_map(|(p, q)| Op::SetQuantity(p, q)),
        1 => Just(Op::Clear),
    ]
}

fn assert_totals(cart: &Cart) -> Result<(), TestCaseError> {
    let expected_total: i64 = cart
        .items()
        .iter()
        .map(|i| i.product.price.amount_cents * i.quantity)
        .sum();
    let expected_count: i64 = cart.items().iter().map(|i| i.quantity).sum();
    prop_assert_eq!(cart.total().amount_cents, expected_total);
    prop_assert_eq!(cart.item_count(), expected_count);
    prop_assert!(cart.items().iter().all(|i| i.quantity > 0));

    let mut ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    prop_assert_eq!(ids.len(), cart.items().len());
    Ok(())
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn totals_hold_after_every_operation(ops in prop::collection::vec(op(), 0..40)) {
        let catalog = Catalog::sample();
        let products = catalog.products();
        let shared = Arc::new(MemoryStore::new());
        let mut store = CartStore::open(Cache::new(Arc::clone(&shared)));

        for op in ops {
            match op {
                Op::Add(p, q) => store.add(&products[p], q).unwrap(),
                Op::Remove(p) => {
                    store.remove(&products[p].id);
                }
                Op::SetQuantity(p, q) => {
                    store.set_quantity(&products[p].id, q).unwrap();
                }
                Op::Clear => store.clear(),
            }
            assert_totals(store.cart())?;
        }

        let reopened = CartStore::open(Cache::new(shared));
        let lines = |cart: &Cart| -> Vec<(String, i64)> {
            cart.items()
                .iter()
                .map(|i| (i.product.id.to_string(), i.quantity))
                .collect()
        };
        prop_assert_eq!(lines(reopened.cart()), lines(store.cart()));
        prop_assert_eq!(reopened.cart().total(), store.cart().total());
    }

    #[test]
    fn empty_search_keeps_every_product(sort_index in 0_usize..5) {
        let catalog = Catalog::sample();
        let sort = SortKey::CYCLE[sort_index];
        let results = SearchQuery::new().with_sort(sort).run(catalog.products());
        prop_assert_eq!(results.len(), catalog.len());
    }
}
