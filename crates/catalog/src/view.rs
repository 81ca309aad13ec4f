//! Derived view recompute: the filter steps followed by a stable sort.

use std::cmp::Ordering;

use storefront_core::Product;

use crate::filter::{FilterSpec, SortKey};

/// Recompute the derived view from scratch.
///
/// Pure function of `(products, spec)`: filtering keeps source order, the
/// sort is stable, and no unordered structure participates, so repeated
/// invocation with identical inputs yields an identical sequence.
pub fn recompute(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    let query = spec.search_query.to_lowercase();

    let mut view: Vec<Product> = products
        .iter()
        .filter(|product| retained(product, spec, &query))
        .cloned()
        .collect();

    view.sort_by(|a, b| compare(a, b, spec.sort_key));
    view
}

fn retained(product: &Product, spec: &FilterSpec, query: &str) -> bool {
    if !spec.category.is_empty() && product.category != spec.category {
        return false;
    }
    if !spec.price_range.contains(product.price) {
        return false;
    }
    if !query.is_empty()
        && !product.title.to_lowercase().contains(query)
        && !product.description.to_lowercase().contains(query)
    {
        return false;
    }
    true
}

fn compare(a: &Product, b: &Product, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::NameAscending => compare_titles(&a.title, &b.title),
        SortKey::PriceAscending => a.price.cmp(&b.price),
        SortKey::PriceDescending => b.price.cmp(&a.price),
        SortKey::RatingDescending => b.rating.rate.cmp(&a.rating.rate),
    }
}

/// Case-insensitive lexical title ordering.
///
/// Titles that compare equal keep their filter-stage order through the
/// caller's stable sort; no further tie-break is applied.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal::Decimal;
    use storefront_core::{ProductId, Rating};

    use crate::filter::PriceRange;

    fn product(id: u64, title: &str, price_cents: i64, category: &str, rate_tenths: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Decimal::new(price_cents, 2),
            description: format!("{title} for daily use"),
            category: category.to_string(),
            image: String::new(),
            rating: Rating {
                rate: Decimal::new(rate_tenths, 1),
                count: 10,
            },
        }
    }

    fn ids(view: &[Product]) -> Vec<u64> {
        view.iter().map(|p| p.id.as_u64()).collect()
    }

    #[test]
    fn category_filter_keeps_exact_matches_only() {
        let products = vec![
            product(1, "alpha", 10_00, "a", 49),
            product(2, "beta", 20_00, "b", 30),
        ];
        let spec = FilterSpec {
            category: "a".to_string(),
            ..FilterSpec::default()
        };

        assert_eq!(ids(&recompute(&products, &spec)), vec![1]);
    }

    #[test]
    fn price_descending_orders_numerically() {
        let products = vec![
            product(1, "alpha", 10_00, "a", 49),
            product(2, "beta", 20_00, "b", 30),
        ];
        let spec = FilterSpec {
            sort_key: SortKey::PriceDescending,
            ..FilterSpec::default()
        };

        assert_eq!(ids(&recompute(&products, &spec)), vec![2, 1]);
    }

    #[test]
    fn rating_descending_orders_by_rate() {
        let products = vec![
            product(1, "alpha", 10_00, "a", 30),
            product(2, "beta", 20_00, "b", 49),
            product(3, "gamma", 5_00, "a", 41),
        ];
        let spec = FilterSpec {
            sort_key: SortKey::RatingDescending,
            ..FilterSpec::default()
        };

        assert_eq!(ids(&recompute(&products, &spec)), vec![2, 3, 1]);
    }

    #[test]
    fn name_ascending_ignores_case() {
        let products = vec![
            product(1, "zinc anode", 10_00, "a", 30),
            product(2, "Aluminum plate", 20_00, "a", 30),
            product(3, "copper wire", 5_00, "a", 30),
        ];
        let spec = FilterSpec::default();

        assert_eq!(ids(&recompute(&products, &spec)), vec![2, 3, 1]);
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let mut candle = product(1, "Scented Candle", 10_00, "home", 30);
        candle.description = "Wax candle with lavender smell".to_string();
        let mut lamp = product(2, "Desk Lamp", 20_00, "home", 30);
        lamp.description = "LED light with warm glow".to_string();

        let products = vec![candle, lamp];

        let by_title = FilterSpec {
            search_query: "CANDLE".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&recompute(&products, &by_title)), vec![1]);

        let by_description = FilterSpec {
            search_query: "warm glow".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&recompute(&products, &by_description)), vec![2]);

        let no_match = FilterSpec {
            search_query: "keyboard".to_string(),
            ..FilterSpec::default()
        };
        assert!(recompute(&products, &no_match).is_empty());
    }

    #[test]
    fn price_range_is_inclusive_at_both_bounds() {
        let products = vec![
            product(1, "alpha", 9_99, "a", 30),
            product(2, "beta", 10_00, "a", 30),
            product(3, "gamma", 20_00, "a", 30),
            product(4, "delta", 20_01, "a", 30),
        ];
        let spec = FilterSpec {
            price_range: PriceRange::new(Decimal::new(10_00, 2), Decimal::new(20_00, 2)),
            ..FilterSpec::default()
        };

        assert_eq!(ids(&recompute(&products, &spec)), vec![2, 3]);
    }

    #[test]
    fn filters_compose_before_sorting() {
        let products = vec![
            product(1, "silver ring", 90_00, "jewelery", 40),
            product(2, "gold ring", 450_00, "jewelery", 47),
            product(3, "silver chain", 70_00, "jewelery", 35),
            product(4, "silver ring stand", 15_00, "decor", 20),
        ];
        let spec = FilterSpec {
            category: "jewelery".to_string(),
            price_range: PriceRange::new(Decimal::ZERO, Decimal::new(100_00, 2)),
            sort_key: SortKey::PriceAscending,
            search_query: "silver".to_string(),
        };

        assert_eq!(ids(&recompute(&products, &spec)), vec![3, 1]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                0u64..64,
                "[a-d]{0,6}",
                0i64..200_00,
                prop::sample::select(vec!["electronics", "jewelery", "books"]),
                0i64..=50,
            )
                .prop_map(|(id, title, cents, category, rate_tenths)| Product {
                    id: ProductId::new(id),
                    title: title.clone(),
                    price: Decimal::new(cents, 2),
                    description: format!("about {title}"),
                    category: category.to_string(),
                    image: String::new(),
                    rating: Rating {
                        rate: Decimal::new(rate_tenths, 1),
                        count: 1,
                    },
                })
        }

        fn arb_spec() -> impl Strategy<Value = FilterSpec> {
            (
                prop_oneof![
                    Just(String::new()),
                    prop::sample::select(vec![
                        "electronics".to_string(),
                        "jewelery".to_string(),
                        "books".to_string(),
                    ]),
                ],
                0i64..200_00,
                0i64..200_00,
                prop::sample::select(vec![
                    SortKey::NameAscending,
                    SortKey::PriceAscending,
                    SortKey::PriceDescending,
                    SortKey::RatingDescending,
                ]),
                "[a-d]{0,2}",
            )
                .prop_map(|(category, lo, hi, sort_key, search_query)| FilterSpec {
                    category,
                    price_range: PriceRange::new(Decimal::new(lo, 2), Decimal::new(hi, 2)),
                    sort_key,
                    search_query,
                })
        }

        proptest! {
            /// Property: for fixed inputs the output sequence is always identical.
            #[test]
            fn recompute_is_deterministic(
                products in prop::collection::vec(arb_product(), 0..40),
                spec in arb_spec()
            ) {
                let first = recompute(&products, &spec);
                let second = recompute(&products, &spec);
                prop_assert_eq!(first, second);
            }

            /// Property: with every sort key constant, the sorted output is
            /// exactly the filter-stage sequence (stability).
            #[test]
            fn sort_is_stable_on_equal_keys(
                products in prop::collection::vec(arb_product(), 0..40),
                spec in arb_spec()
            ) {
                let products: Vec<Product> = products
                    .into_iter()
                    .map(|mut p| {
                        p.title = "Same Title".to_string();
                        p.price = Decimal::new(9_99, 2);
                        p.rating.rate = Decimal::new(40, 1);
                        p
                    })
                    .collect();

                let query = spec.search_query.to_lowercase();
                let expected: Vec<Product> = products
                    .iter()
                    .filter(|p| retained(p, &spec, &query))
                    .cloned()
                    .collect();

                prop_assert_eq!(recompute(&products, &spec), expected);
            }

            /// Property: min > max yields an empty view for any collection.
            #[test]
            fn inverted_range_yields_empty_view(
                products in prop::collection::vec(arb_product(), 1..40),
                lo in 0i64..100_00,
                delta in 1i64..100_00
            ) {
                let spec = FilterSpec {
                    price_range: PriceRange::new(
                        Decimal::new(lo + delta, 2),
                        Decimal::new(lo, 2),
                    ),
                    ..FilterSpec::default()
                };
                prop_assert!(recompute(&products, &spec).is_empty());
            }
        }
    }
}
