use cart::{Cart, CartStore, Money, Product, ProductId};
use criterion::{Criterion, criterion_group, criterion_main};

fn product(id: i64) -> Product {
    Product::new(
        id,
        format!("Product {id}"),
        "Benchmark product",
        "Plain",
        Money::from_cents(250 + id),
        1_000,
    )
}

fn bench_add_merge(c: &mut Criterion) {
    c.bench_function("cart/add_one_merge_20_lines", |b| {
        b.iter(|| {
            let mut cart = Cart::new();
            for _ in 0..5 {
                for id in 0..20 {
                    cart.add_one(product(id));
                }
            }
            cart.total_price()
        });
    });
}

fn bench_mixed_mutations(c: &mut Criterion) {
    c.bench_function("cart/add_decrement_remove", |b| {
        b.iter(|| {
            let mut cart = Cart::new();
            for id in 0..50 {
                cart.add_one(product(id));
                cart.add_one(product(id));
            }
            for id in 0..50 {
                cart.decrement_one(ProductId::new(id));
                if id % 2 == 0 {
                    cart.remove_all(ProductId::new(id));
                }
            }
            cart.snapshot()
        });
    });
}

fn bench_store_add(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = CartStore::new();
    let _rx = store.subscribe();

    c.bench_function("cart/store_add_one", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.add_one(product(1)).await;
            });
        });
    });
}

criterion_group!(
    benches,
    bench_add_merge,
    bench_mixed_mutations,
    bench_store_add
);
criterion_main!(benches);
