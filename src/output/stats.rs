//! Run summary for a collected course table
//!
//! Counts rows and how often each column fell back to the placeholder,
//! which is the quickest signal that the catalog's page layout changed.

use crate::output::table::{CourseTable, HEADER};

/// Summary of one harvest run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestStatistics {
    /// Number of exported course rows
    pub total_courses: usize,

    /// Rows where every field was found
    pub complete_courses: usize,

    /// Number of fallback values per column, in header order
    pub fallbacks: [usize; 6],
}

impl HarvestStatistics {
    /// Counts fallbacks in every column of the table
    pub fn from_table(table: &CourseTable, fallback: &str) -> Self {
        let mut fallbacks = [0; 6];
        let mut complete_courses = 0;
        for record in table.records() {
            let mut complete = true;
            for (count, cell) in fallbacks.iter_mut().zip(record.cells()) {
                if cell == fallback {
                    *count += 1;
                    complete = false;
                }
            }
            if complete {
                complete_courses += 1;
            }
        }

        Self {
            total_courses: table.len(),
            complete_courses,
            fallbacks,
        }
    }

    /// Total fallback cells across the table
    pub fn total_fallbacks(&self) -> usize {
        self.fallbacks.iter().sum()
    }
}

/// Prints the summary to stdout
pub fn print_statistics(stats: &HarvestStatistics) {
    println!("=== Harvest Summary ===\n");
    println!("Courses exported: {}", stats.total_courses);
    println!("Complete rows: {}", stats.complete_courses);

    if stats.total_fallbacks() == 0 {
        println!("All fields found");
        return;
    }

    println!("\nMissing fields:");
    for (name, count) in HEADER.iter().zip(stats.fallbacks) {
        if count > 0 {
            println!("  {}: {}/{}", name, count, stats.total_courses);
        }
    }
}
