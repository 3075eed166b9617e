//! End-to-end invoice lifecycle through the application facade.
//!
//! Covers the full path: connect, seed an account, login, then create,
//! fetch, update, delete and render invoices, checking the wire rows the
//! store actually holds along the way.

use washbook::prelude::*;
use washbook::schema;

/// Connect a fresh service, seed a staff account, and sign in
async fn service() -> (Arc<InMemoryStore>, Washbook<InMemoryStore>, Session) {
    let store = Arc::new(InMemoryStore::new());
    let app = Washbook::connect(store.clone(), WashbookConfig::default())
        .await
        .unwrap();

    let staff = User::new(
        "alice",
        Credential::new("secret"),
        Role::Staff,
        "Alice Tran",
        "",
    );
    store
        .append_row(&app.config().store.users_table, staff.to_row())
        .await
        .unwrap();

    let session = app.login("alice", "secret").await.unwrap();
    (store, app, session)
}

fn invoice(receipt_no: &str, day: u32, weight: f64) -> Invoice {
    let mut invoice = Invoice::new(
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        receipt_no,
        "Potique",
    );
    invoice.total_weight_kg = weight;
    invoice
}

// ==========================================================================
// Create, fetch, update, delete
// ==========================================================================

#[tokio::test]
async fn test_created_invoice_round_trips() {
    let (_store, app, session) = service().await;

    let mut submitted = invoice("000128", 1, 12.5);
    submitted.items.set_qty("Drap lớn", 3).unwrap();
    app.submit_invoice(&session, &submitted).await.unwrap();

    let found = app.find_invoice(&session, "000128").await.unwrap();
    assert_eq!(found, submitted);
}

#[tokio::test]
async fn test_duplicate_create_is_rejected() {
    let (_store, app, session) = service().await;

    app.submit_invoice(&session, &invoice("000128", 1, 12.5))
        .await
        .unwrap();
    let err = app
        .submit_invoice(&session, &invoice("000128", 2, 1.0))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { field: "receipt_no", .. }));
    assert_eq!(app.list_invoices(&session, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_touches_exactly_one_invoice() {
    let (_store, app, session) = service().await;

    app.submit_invoice(&session, &invoice("000128", 1, 12.5))
        .await
        .unwrap();
    app.submit_invoice(&session, &invoice("000129", 2, 4.0))
        .await
        .unwrap();

    app.submit_invoice_update(&session, "000128", &invoice("000128", 1, 15.0))
        .await
        .unwrap();

    let all = app.list_invoices(&session, None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].total_weight_kg, 15.0);
    assert_eq!(all[1].total_weight_kg, 4.0);
}

#[tokio::test]
async fn test_update_may_change_the_receipt_number() {
    let (_store, app, session) = service().await;

    app.submit_invoice(&session, &invoice("000128", 1, 12.5))
        .await
        .unwrap();
    app.submit_invoice_update(&session, "000128", &invoice("000300", 1, 12.5))
        .await
        .unwrap();

    assert!(app.find_invoice(&session, "000300").await.is_ok());
    assert!(matches!(
        app.find_invoice(&session, "000128").await,
        Err(Error::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_deleted_invoice_is_gone() {
    let (_store, app, session) = service().await;

    app.submit_invoice(&session, &invoice("000128", 1, 12.5))
        .await
        .unwrap();
    app.delete_invoice(&session, "000128").await.unwrap();

    assert!(matches!(
        app.find_invoice(&session, "000128").await,
        Err(Error::NotFound { entity: "invoice", .. })
    ));
    assert!(app.list_invoices(&session, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_second_delete_of_the_same_receipt_is_not_found() {
    let (_store, app, session) = service().await;

    app.submit_invoice(&session, &invoice("000128", 1, 12.5))
        .await
        .unwrap();

    app.delete_invoice(&session, "000128").await.unwrap();
    assert!(matches!(
        app.delete_invoice(&session, "000128").await,
        Err(Error::NotFound { entity: "invoice", .. })
    ));
}

#[tokio::test]
async fn test_operations_on_missing_receipt_are_not_found() {
    let (_store, app, session) = service().await;

    assert!(matches!(
        app.find_invoice(&session, "000777").await,
        Err(Error::NotFound { .. })
    ));
    assert!(matches!(
        app.delete_invoice(&session, "000777").await,
        Err(Error::NotFound { .. })
    ));
    assert!(matches!(
        app.submit_invoice_update(&session, "000777", &invoice("000777", 1, 1.0))
            .await,
        Err(Error::NotFound { .. })
    ));
}

// ==========================================================================
// Wire rows
// ==========================================================================

#[tokio::test]
async fn test_full_lifecycle_at_the_wire_level() {
    let (store, app, session) = service().await;
    let table = app.config().store.invoices_table.clone();

    let mut submitted = invoice("000128", 1, 12.5);
    submitted.items.set_qty("Drap lớn", 3).unwrap();
    app.submit_invoice(&session, &submitted).await.unwrap();

    let rows = store.list_rows(&table).await.unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.len(), schema::INVOICE_ROW_WIDTH);
    assert_eq!(row[0], "2024-03-01");
    assert_eq!(row[1], "000128");
    assert_eq!(row[2], "Potique");
    assert_eq!(row[5], "12.5");
    // "Drap lớn" is the seventh quantity cell; the other twenty stay zero
    assert_eq!(row[6 + 6], "3");
    let zeros = row[6..].iter().filter(|c| c.as_str() == "0").count();
    assert_eq!(zeros, 20);

    app.submit_invoice_update(&session, "000128", &invoice("000128", 1, 15.0))
        .await
        .unwrap();
    let rows = store.list_rows(&table).await.unwrap();
    assert_eq!(rows[0][5], "15");

    app.delete_invoice(&session, "000128").await.unwrap();
    assert!(store.list_rows(&table).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_hand_edited_duplicate_resolves_to_earliest_row() {
    let (store, app, session) = service().await;
    let table = app.config().store.invoices_table.clone();

    app.submit_invoice(&session, &invoice("000128", 1, 12.5))
        .await
        .unwrap();
    // Duplicate receipt appended behind the service's back
    store
        .append_row(&table, invoice("000128", 2, 99.0).to_row())
        .await
        .unwrap();

    assert_eq!(
        app.find_invoice(&session, "000128")
            .await
            .unwrap()
            .total_weight_kg,
        12.5
    );

    app.submit_invoice_update(&session, "000128", &invoice("000128", 1, 15.0))
        .await
        .unwrap();

    let rows = store.list_rows(&table).await.unwrap();
    assert_eq!(rows[0][5], "15");
    assert_eq!(rows[1][5], "99");
}

#[tokio::test]
async fn test_malformed_row_is_skipped_in_listings() {
    let (store, app, session) = service().await;
    let table = app.config().store.invoices_table.clone();

    app.submit_invoice(&session, &invoice("000128", 1, 12.5))
        .await
        .unwrap();
    store
        .append_row(&table, vec!["junk".to_string(), "000999".to_string()])
        .await
        .unwrap();

    let all = app.list_invoices(&session, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].receipt_no, "000128");
}

// ==========================================================================
// Delivery slip projection
// ==========================================================================

#[tokio::test]
async fn test_slip_renders_only_delivered_items() {
    let (_store, app, session) = service().await;

    let mut submitted = invoice("000128", 1, 12.5);
    submitted.items.set_qty("Drap lớn", 3).unwrap();
    submitted.items.set_qty("Mền", 1).unwrap();
    app.submit_invoice(&session, &submitted).await.unwrap();

    let found = app.find_invoice(&session, "000128").await.unwrap();
    let slip = DeliverySlip::from_invoice(&found);

    assert_eq!(slip.lines.len(), 2);
    assert_eq!(slip.lines[0].index, 1);
    assert_eq!(slip.lines[0].item, "Drap lớn");
    assert_eq!(slip.lines[1].index, 2);
    assert_eq!(slip.lines[1].item, "Mền");

    let text = slip.to_string();
    assert!(text.contains("Số phiếu: 000128"));
    assert!(text.contains(" 1. Drap lớn x3"));
}
