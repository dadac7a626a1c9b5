use std::sync::Arc;

use anyhow::Context;
use planner::services::Dashboard;
use planner::{
    Config, DashboardService, LayoutService, SeatLookup, SeatLookupService, setup_environment,
};
use planner_client::{ClientConfig, HttpGateway};

const USAGE: &str = "usage: planner [find <name> | reset]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, configuration, logging
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    setup_environment(&config)?;

    tracing::info!(environment = %config.environment, gateway = %config.gateway_url, "Planner starting");

    // 2. Entity store
    let client_config =
        ClientConfig::new(config.gateway_url.clone()).with_timeout(config.request_timeout_secs);
    let gateway = Arc::new(HttpGateway::new(&client_config).context("building HTTP gateway")?);

    // 3. Command
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => {
            let dashboard = DashboardService::new(gateway).load().await?;
            print_dashboard(&dashboard);
        }
        Some("find") if args.len() > 1 => {
            let query = args[1..].join(" ");
            let lookup = SeatLookupService::new(gateway).search(&query).await;
            print_lookup(&query, &lookup);
        }
        Some("reset") => {
            let service = LayoutService::new(gateway);
            let snapshot = service.load().await?;
            let report = service.reset_layout(&snapshot.tables).await;
            println!(
                "Moved {} table(s) onto the grid, {} failed",
                report.updated.len(),
                report.failed.len()
            );
            report.into_result()?;
        }
        Some(_) => anyhow::bail!(USAGE),
    }

    Ok(())
}

fn print_dashboard(dashboard: &Dashboard) {
    let counts = &dashboard.counts;
    println!(
        "Guests: {} total, {} confirmed, {} pending, {} declined",
        counts.total, counts.confirmed, counts.pending, counts.declined
    );
    println!(
        "Seating: {} assigned, {} unassigned ({} pointing at missing tables)",
        counts.assigned,
        counts.unassigned(),
        counts.dangling
    );
    println!();
    for table in &dashboard.tables {
        println!(
            "Table {:>3}  {:<16} {:>2}/{:<2} {:<8} {}",
            table.table_number,
            table.name.as_deref().unwrap_or("-"),
            table.occupied,
            table.capacity,
            table.label.as_str(),
            table.preview.as_deref().unwrap_or("")
        );
    }
}

fn print_lookup(query: &str, lookup: &SeatLookup) {
    let Some(seat) = lookup.assignment() else {
        println!("No guest found for \"{query}\"");
        return;
    };
    println!("{}", seat.guest.name);
    match &seat.table {
        Some(table) => {
            let name = table.table_name.as_deref().unwrap_or("");
            println!("Table {} {}", table.table_number, name);
        }
        None => println!("No table assigned yet"),
    }
    if !seat.table_guests.is_empty() {
        let names: Vec<&str> = seat.table_guests.iter().map(|g| g.name.as_str()).collect();
        println!("Sharing the table with: {}", names.join(", "));
    }
}
