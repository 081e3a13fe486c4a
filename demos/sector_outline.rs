//! Builds a sector, projects it to pixels and runs the polyline pipeline
//! over its outline.
//!
//! Usage:
//! ```text
//! cargo run --example sector_outline
//! RUST_LOG=mapgeom=debug cargo run --example sector_outline
//! ```

use mapgeom::geodesy::{path_length, LatLng};
use mapgeom::geometry::{HitTest, Outline, Sector, SectorOptions};
use mapgeom::math::{Bounds, Point2};
use mapgeom::polyline::{clip_polyline, simplify};

fn main() -> mapgeom::Result<()> {
    // Default: WARN for everything, INFO for mapgeom.
    // Override with RUST_LOG env var (e.g. RUST_LOG=mapgeom=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("mapgeom=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut sector = Sector::new(SectorOptions {
        center: LatLng::new(51.5, -0.12),
        inner_radius: 150.0,
        outer_radius: 600.0,
        start_bearing: 300.0,
        end_bearing: 60.0,
        number_of_points: 64,
        rhumb: false,
    })?;
    sector.rotate(90.0)?;

    let vertices = sector.outline();
    println!(
        "sector: start {:.1} end {:.1} sweep {:.1}, {} vertices, perimeter {:.1} m",
        sector.start_bearing(),
        sector.end_bearing(),
        sector.sweep(),
        vertices.len(),
        path_length(&vertices),
    );

    let pixel = sector.to_pixel(Point2::new(400.0, 300.0), 0.25)?;
    let bounds = pixel.pixel_bounds();
    println!(
        "pixel bounds: ({:.1}, {:.1}) .. ({:.1}, {:.1})",
        bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
    );

    let probe = Point2::new(400.0 + 100.0, 300.0);
    println!("hit test at {probe:?}: {}", pixel.contains_point(&probe));

    let outline = pixel.outline();
    let simplified = simplify(&outline, 1.5);
    println!("simplified {} -> {} points", outline.len(), simplified.len());

    let viewport = Bounds::new(Point2::new(0.0, 0.0), Point2::new(450.0, 600.0));
    for (i, part) in clip_polyline(&simplified, &viewport, true).iter().enumerate() {
        println!("visible run {i}: {} points", part.len());
    }

    Ok(())
}
