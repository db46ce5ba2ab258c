//! Basic usage example for countrypick-rs
//!
//! Walks through the grouped view, a search, and a selection delivered over a
//! channel.

use countrypick_core::prelude::*;
use std::rc::Rc;

fn main() -> Result<()> {
    println!("=== countrypick-rs Basic Usage Example ===\n");

    let table = CountryTable::builtin()?;
    let mut picker = CountryPicker::with_default_home(table);

    let stats = picker.stats();
    println!(
        "Loaded {} countries into {} sections\n",
        stats.countries, stats.sections
    );

    // Example 1: grouped view, first rows of the first three sections
    println!("--- Example 1: Grouped view ---");
    for section in 0..picker.section_count().min(3) {
        println!("[{}]", picker.section_title(section).unwrap_or_default());
        for row in 0..picker.row_count(section).min(3) {
            if let Some(cell) = picker.cell(section, row) {
                println!("  {} {}", cell.title, cell.phone);
            }
        }
    }
    if let Some(titles) = picker.section_index_titles() {
        println!("Index bar: {}", titles.concat());
    }
    println!();

    // Example 2: search
    println!("--- Example 2: Searching \"ral\" ---");
    picker.update_search("ral");
    for row in 0..picker.row_count(0) {
        if let Some(c) = picker.country_at(0, row) {
            println!("  {} ({})", c.name(), c.formatted_dial_code());
        }
    }
    println!();

    // Example 3: selection
    println!("--- Example 3: Selecting the first hit ---");
    let (tx, rx) = crossbeam_channel::unbounded();
    let delegate: Rc<dyn CountrySelectionDelegate> = Rc::new(tx);
    picker.set_delegate(&delegate);
    picker.select(0, 0);

    match rx.try_recv() {
        Ok(country) => println!("  Presenter received: {country}"),
        Err(_) => println!("  Nothing selected"),
    }
    println!("  Picker closed: {}", picker.is_closed());

    Ok(())
}
