use altaz::{CivilDateTime, DmsAngle, EquatorialCoordinate, GeographicLocation, HmsAngle, Observer};
use qtty::{Degrees, Hours};

/// Name, RA, Dec and visual magnitude, brightest first.
const CATALOG: [(&str, (i32, i32, f64), (i32, i32, f64), f64); 10] = [
    ("Sirius", (6, 45, 8.9), (-16, 42, 58.0), -1.46),
    ("Canopus", (6, 23, 57.1), (-52, 41, 44.4), -0.74),
    ("Arcturus", (14, 15, 39.7), (19, 10, 56.7), -0.05),
    ("Vega", (18, 36, 56.3), (38, 47, 1.3), 0.03),
    ("Capella", (5, 16, 41.4), (45, 59, 52.8), 0.08),
    ("Rigel", (5, 14, 32.3), (-8, 12, 5.9), 0.13),
    ("Procyon", (7, 39, 18.1), (5, 13, 30.0), 0.34),
    ("Betelgeuse", (5, 55, 10.3), (7, 24, 25.4), 0.42),
    ("Altair", (19, 50, 47.0), (8, 52, 6.0), 0.76),
    ("Aldebaran", (4, 35, 55.2), (16, 30, 33.5), 0.86),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let dayton = GeographicLocation::new(Degrees::new(39.78), Degrees::new(-84.2));
    let evening = CivilDateTime::new(2019, 12, 17, 20, 0, 0.0)?.with_zone_correction(Hours::new(-5.0))?;
    let observer = Observer::new(dayton, &evening);
    log::info!(
        "observer at {} {}, LST {}",
        DmsAngle::from(dayton.latitude),
        DmsAngle::from(dayton.longitude),
        HmsAngle::from(observer.local_sidereal_time()),
    );

    let rows = CATALOG.iter().filter(|(.., magnitude)| *magnitude <= 6.0).map(|&(name, ra, dec, _)| {
        let ra = HmsAngle::from_parts(ra.0, ra.1, ra.2);
        let dec = DmsAngle::from_parts(dec.0, dec.1, dec.2);
        (name, EquatorialCoordinate::from_sexagesimal(ra, dec))
    });

    println!("{:<12} {:>14} {:>14}", "Star", "Altitude", "Azimuth");
    for sighting in observer.observe(rows) {
        let marker = if sighting.horizon.is_above_horizon() { "" } else { " (below)" };
        println!(
            "{:<12} {:>14} {:>14}{marker}",
            sighting.id,
            sighting.horizon.altitude_dms().to_string(),
            sighting.horizon.azimuth_dms().to_string(),
        );
    }
    Ok(())
}
