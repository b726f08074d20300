//! Integration tests for exporting the live view.

use cart::{CartStore, Money, Product};
use common::{CookieSession, StaticSession, StaffUser};
use export::{A4_HEIGHT_MM, InvoiceExporter, PageLayout, PosView};

fn catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Shake", "Protein shake", "Vanilla", Money::from_dollars(5), 10),
        Product::new(2, "Bar", "Protein bar", "Peanut", Money::from_dollars(3), 4),
    ]
}

#[tokio::test]
async fn test_export_reflects_cart_store() {
    let store = CartStore::new();
    let products = catalog();
    store.add_one(products[0].clone()).await;
    store.add_one(products[0].clone()).await;
    store.add_one(products[1].clone()).await;

    let session = StaticSession::new(Some(StaffUser::new(7, "Ada", "Lovelace")));
    let view = PosView::capture(&session, &products, store.snapshot().await);

    let texts: Vec<_> = view.render_lines().into_iter().map(|l| l.text).collect();
    assert_eq!(texts[0], "Staff: 7::Ada Lovelace");
    assert!(texts.contains(&"Quantity: 2".to_string()));
    assert_eq!(texts.last().unwrap(), "Total Price: 13$");

    let document = InvoiceExporter::new().export_current_view(&view).unwrap();
    assert!(document.bytes.starts_with(b"%PDF"));
    assert_eq!(document.page_count, 1);

    // Export never touches the cart.
    assert_eq!(store.snapshot().await.lines.len(), 2);
}

#[test]
fn test_cookie_session_feeds_header() {
    let cookie = "theme=dark; currentUser=%7B%22id%22%3A3%2C%22firstName%22%3A%22Grace%22%2C%22lastName%22%3A%22Hopper%22%7D";
    let session = CookieSession::from_cookie_header(cookie);
    let view = PosView::capture(&session, &[], Default::default());

    assert_eq!(view.render_lines()[0].text, "Staff: 3::Grace Hopper");
}

#[test]
fn test_page_count_tracks_rendered_height() {
    let many: Vec<Product> = (1..=40)
        .map(|id| Product::new(id, format!("Item {id}"), "", "", Money::from_cents(99), 1))
        .collect();
    let view = PosView::new(None, many, Default::default());
    let layout = PageLayout::a4();

    let height = layout.content_height(&view.render_lines());
    let expected = (height / A4_HEIGHT_MM).floor() as usize + 1;

    let document = InvoiceExporter::new().export_current_view(&view).unwrap();
    assert_eq!(document.page_count, expected);
    assert!(document.page_count >= 4);
}
