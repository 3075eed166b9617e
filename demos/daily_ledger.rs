//! Staff counter flow: sign in, record deliveries, print a slip, close the day.
//!
//! Run with: cargo run --example daily_ledger

use washbook::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("🚀 Washbook Daily Ledger Demo\n");

    // Connect to a fresh in-memory ledger
    let store = Arc::new(InMemoryStore::new());
    let app = Washbook::connect(store.clone(), WashbookConfig::default()).await?;

    // The very first account goes in through the store; every later one
    // through an admin session
    let owner = User::new("chu", Credential::new("chu123"), Role::Admin, "Chủ tiệm", "");
    store
        .append_row(&app.config().store.users_table, owner.to_row())
        .await?;

    let admin = app.login("chu", "chu123").await?;
    let staff_account = User::new(
        "alice",
        Credential::new("secret"),
        Role::Staff,
        "Alice Tran",
        "",
    );
    app.create_user(&admin, &staff_account).await?;
    println!("✅ Staff account created: alice");

    let staff = app.login("alice", "secret").await?;

    // Morning deliveries
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");

    let mut first = Invoice::new(today, "000128", "Potique");
    first.address = "02 Trần Phú, Đà Nẵng".to_string();
    first.total_weight_kg = 12.5;
    first.items.set_qty("Drap lớn", 3)?;
    first.items.set_qty("Khăn tắm lớn trắng", 10)?;
    app.submit_invoice(&staff, &first).await?;
    println!("✅ Recorded invoice 000128 for Potique");

    let mut second = Invoice::new(today, "000129", "Hotel Sala");
    second.total_weight_kg = 30.0;
    second.items.set_qty("Áo gối", 24)?;
    second.items.set_qty("Drap thun", 12)?;
    app.submit_invoice(&staff, &second).await?;
    println!("✅ Recorded invoice 000129 for Hotel Sala");

    // The slip that rides along with the first delivery
    println!("\n🧾 Delivery slip:\n");
    println!("{}", DeliverySlip::from_invoice(&first));

    // The scale was off this morning; correct the first invoice
    first.total_weight_kg = 13.0;
    app.submit_invoice_update(&staff, "000128", &first).await?;
    println!("✏️  Corrected invoice 000128 weight to 13 kg");

    // Close out the day
    let summary = app.report(&staff, &DateRange::single_day(today)).await?;
    println!(
        "\n📊 {}: {} deliveries, {} kg total",
        today, summary.count, summary.total_weight_kg
    );

    app.logout(staff);
    app.logout(admin);
    Ok(())
}
