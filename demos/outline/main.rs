//! Prints the outline of a few overlapping rectangles as SVG path data.
//!
//! ```text
//! cargo run --example outline
//! RUST_LOG=orthosil=trace cargo run --example outline
//! ```

use orthosil::export::{PathStyle, SvgPath};
use orthosil::geometry::Rectangle;
use orthosil::operations::Silhouette2D;

fn main() -> orthosil::Result<()> {
    // Default: WARN for everything, INFO for orthosil.
    // Override with RUST_LOG env var (e.g. RUST_LOG=orthosil=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("orthosil=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let rects = vec![
        Rectangle::new(0.0, 0.0, 10.0, 10.0)?,
        Rectangle::new(5.0, 0.0, 10.0, 10.0)?,
        Rectangle::new(15.0, 2.0, 4.0, 4.0)?,
        Rectangle::new(2.0, 2.0, 3.0, 3.0)?,
        Rectangle::new(0.0, 12.0, 3.0, 1.5)?.expanded(0.5)?,
    ];

    let outline = Silhouette2D::new(rects).execute();
    let path = SvgPath::new(PathStyle::new(PathStyle::DEFAULT_PRECISION)?).execute(&outline);

    println!("{} segments", outline.len());
    println!("{path}");
    Ok(())
}
