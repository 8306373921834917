use anyhow::Result;

pub fn run() -> Result<()> {
    let detectors = solguard_detectors::all_detectors();

    println!("{:<18} {:<10} Description", "Name", "Severity");
    println!("{}", "-".repeat(80));

    for d in &detectors {
        println!("{:<18} {:<10} {}", d.name(), d.severity(), d.description());
    }

    println!("\nTotal: {} detectors", detectors.len());
    Ok(())
}
