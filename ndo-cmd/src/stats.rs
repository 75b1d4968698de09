//! Season, hemisphere and month tallies printed as plain tables.

use crate::load_events;
use ndo_analysis::aggregate::{
    hemisphere_counts, hemisphere_season_table, month_histogram, season_counts,
};
use ndo_core::season::Season;

pub fn run_seasons(data: &str) -> anyhow::Result<()> {
    let events = load_events(data)?;
    println!("Distribution of Independence/National Days by Season:");
    for row in season_counts(&events) {
        println!("{:<8} {:>5}", row.category, row.count);
    }

    println!();
    println!("Color Legend:");
    for season in Season::ALL {
        if let Some(color) = season.color() {
            println!("  {}: {}", season, color);
        }
    }
    Ok(())
}

pub fn run_hemispheres(data: &str) -> anyhow::Result<()> {
    let events = load_events(data)?;
    let counts = hemisphere_counts(&events);
    println!("Countries by Hemisphere:");
    for row in &counts.counts {
        println!("{:<9} {:>5}", row.category, row.count);
    }
    println!("({} countries without a hemisphere)", counts.excluded);

    let table = hemisphere_season_table(&events);
    println!();
    println!("Season Distribution by Hemisphere:");
    print!("{:<9}", "");
    for season in &table.seasons {
        print!(" {:>8}", season);
    }
    println!();
    for row in &table.rows {
        print!("{:<9}", row.hemisphere);
        for count in &row.counts {
            print!(" {:>8}", count);
        }
        println!();
    }

    println!();
    println!("Most Common Season by Hemisphere:");
    for (hemisphere, most_common) in table.most_common_by_hemisphere() {
        println!(
            "{}: {} ({} countries)",
            hemisphere, most_common.category, most_common.count
        );
    }
    Ok(())
}

pub fn run_months(data: &str) -> anyhow::Result<()> {
    let events = load_events(data)?;
    let histogram = month_histogram(&events);
    println!("Distribution of Independence/National Days by Month:");
    for (month, count) in histogram.labeled() {
        println!("{} {:>4} {}", month, count, "#".repeat(count));
    }
    println!("({} countries with an unparseable date)", histogram.excluded);
    Ok(())
}
