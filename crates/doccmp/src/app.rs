//! A single comparison run: load, compare, print and export

use crate::cli::Settings;
use doccmp_core::{export_report, load_text, render, Comparison, DocumentReadError};

/// Run the comparison described by `settings`.
///
/// Only document loading is fatal. Report rendering or export failures are
/// printed as warnings because the report has already reached stdout.
pub fn run(settings: &Settings) -> Result<(), DocumentReadError> {
    let text1 = load_text(&settings.file1)?;
    let text2 = load_text(&settings.file2)?;

    let comparison = Comparison::new(&text1, &text2, &settings.compare);

    let report = match render(&comparison, settings.format) {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!("report rendering failed: {}", e);
            eprintln!("Error while rendering the report: {e}");
            return Ok(());
        }
    };

    println!("\n--- Comparison report ---\n");
    println!("{report}");

    match export_report(&settings.report, &report) {
        Ok(()) => println!("\nReport saved to: {}", settings.report.display()),
        Err(e) => {
            tracing::warn!("report export failed: {}", e);
            eprintln!("Error while saving the report: {e}");
        }
    }

    Ok(())
}
