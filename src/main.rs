use chrono::Local;
use rosterline::components::availability::DayAvailability;
use rosterline::components::roster::RosterStore;
use rosterline::components::WindowStatus;
use rosterline::startup;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting rosterline");

    // Load configuration and data
    let config = startup::load_config()?;
    let roster = startup::load_roster(&config)?;
    let restaurant = startup::load_restaurant(&config)?;

    if let Some(restaurant) = &restaurant {
        if let Err(report) = restaurant.validate() {
            warn!("Restaurant config has problems:\n{}", report);
        }
    }

    // Scheduling week
    let window = startup::schedule_window(&config, restaurant.as_ref());
    if let WindowStatus::Mismatch { expected_end } = window.status() {
        warn!(
            "Schedule window {} is not 7 days, expected it to end on {}",
            window, expected_end
        );
    }
    println!("Schedule week: {}", window.status_message());
    if let Some((start, end)) = window.date_range_containing(Local::now().date_naive()) {
        println!("Current cycle: {} to {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"));
    }

    // Availability table
    for employee in roster.list_employees().await? {
        println!();
        println!(
            "{} ({}, {})",
            employee.name,
            employee.role,
            employee.status.code()
        );
        for (day, hours) in employee.availability.iter() {
            let note = match DayAvailability::parse(hours) {
                Some(range @ DayAvailability::TimeRange { .. }) => {
                    format!("{}h", range.duration().num_minutes() as f64 / 60.0)
                }
                Some(DayAvailability::Unavailable) => String::new(),
                None => "needs review".to_string(),
            };
            println!("  {:<10} {:<20} {}", day, hours, note);
        }
        let pending = employee.pending_requests().count();
        if pending > 0 {
            println!("  {} pending time-off request(s)", pending);
        }
    }

    Ok(())
}
