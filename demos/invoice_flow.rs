//! Example creating, fetching and voiding an invoice
//!
//! Reads credentials from `PROCESSOUT_PROJECT_ID` and `PROCESSOUT_PROJECT_SECRET`.

use processout::{Invoice, Options, ProcessOut};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let client = ProcessOut::from_env()?;
    println!("Using project {} on {}", client.project_id(), client.host());

    println!("\n🧾 Creating invoice...");
    let invoice = Invoice::new("Demo order", "4.99", "USD")
        .with_return_url("https://shop.example/success")
        .with_metadata("source", "demo");
    let invoice = client.invoices().create(&invoice, None).await?;
    println!("Created {} - pay at {}", invoice.id, invoice.url);

    println!("\n🔍 Fetching it back with the project expanded...");
    let options = Options::new().with_expand(["project"]);
    let fetched = client.invoices().find(&invoice.id, Some(&options)).await?;
    println!(
        "  {} {} {} (project: {})",
        fetched.name,
        fetched.amount,
        fetched.currency,
        fetched
            .project
            .as_ref()
            .map(|project| project.name.as_str())
            .unwrap_or("-")
    );

    println!("\n🚫 Voiding it...");
    let options = Options::new().with_generated_idempotency_key();
    match client.invoices().void(&fetched, Some(&options)).await {
        Ok(()) => println!("Invoice voided"),
        Err(error) if error.is_api_error() => println!("API refused: {}", error),
        Err(error) => return Err(error.into()),
    }

    Ok(())
}
