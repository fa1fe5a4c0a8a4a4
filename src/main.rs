use nearorigin::{build_mode_line, Analyzer};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let analyzer = Analyzer::default();
    let points = analyzer.generate();
    for point in &points {
        println!("New point {point} created");
    }

    let report = analyzer.analyze(&points)?;
    for line in report.lines() {
        println!("{line}");
    }

    println!("{}", build_mode_line());
    Ok(())
}
