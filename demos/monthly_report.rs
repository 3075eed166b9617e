//! Owner flow: manage accounts, run the monthly report, export CSV,
//! and show what a customer sees.
//!
//! Run with: cargo run --example monthly_report

use washbook::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("🚀 Washbook Monthly Report Demo\n");

    let store = Arc::new(InMemoryStore::new());
    let app = Washbook::connect(store.clone(), WashbookConfig::default()).await?;

    // Bootstrap the owner account, then do everything through sessions
    let owner = User::new("chu", Credential::new("chu123"), Role::Admin, "Chủ tiệm", "");
    store
        .append_row(&app.config().store.users_table, owner.to_row())
        .await?;
    let admin = app.login("chu", "chu123").await?;

    app.create_user(
        &admin,
        &User::new("alice", Credential::new("secret"), Role::Staff, "Alice Tran", ""),
    )
    .await?;
    app.create_user(
        &admin,
        &User::new(
            "potique",
            Credential::new("guest"),
            Role::Customer,
            "Potique",
            "02 Trần Phú, Đà Nẵng",
        ),
    )
    .await?;

    println!("👥 Accounts:");
    for user in app.list_users(&admin).await? {
        println!("   - {} ({})", user.username, user.role);
    }

    // A month of deliveries, recorded at the counter
    let staff = app.login("alice", "secret").await?;
    for (day, receipt_no, customer, weight) in [
        (1, "000128", "Potique", 12.5),
        (8, "000135", "Hotel Sala", 30.0),
        (15, "000142", "Potique", 9.0),
        (29, "000151", "Hotel Sala", 27.5),
    ] {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date");
        let mut invoice = Invoice::new(date, receipt_no, customer);
        invoice.total_weight_kg = weight;
        invoice.items.set_qty("Drap lớn", 2)?;
        app.submit_invoice(&staff, &invoice).await?;
    }
    println!("\n✅ Recorded 4 deliveries in March");

    // The owner's month-end numbers
    let march = DateRange::month(2024, 3).expect("valid month");
    let summary = app.report(&admin, &march).await?;
    println!(
        "📊 March: {} deliveries, {} kg total",
        summary.count, summary.total_weight_kg
    );

    // Export the month as CSV for the accountant
    let csv = app.export_report(&admin, &march).await?;
    let path = std::env::temp_dir().join("washbook_2024_03.csv");
    std::fs::write(&path, &csv)?;
    println!("💾 Exported {} bytes to {}", csv.len(), path.display());

    // What the customer sees: their own history, nothing else
    let customer = app.login("potique", "guest").await?;
    let own = app.list_invoices(&customer, Some(&march)).await?;
    println!("\n🔒 Potique's own history: {} deliveries", own.len());
    for invoice in &own {
        println!(
            "   - {} {} ({} kg)",
            invoice.date, invoice.receipt_no, invoice.total_weight_kg
        );
    }

    app.logout(customer);
    app.logout(staff);
    app.logout(admin);
    Ok(())
}
