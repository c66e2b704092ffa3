use spyglass::{
    Camera, CameraOptions, ChromeKind, ElementHandle, LatLng, Map, MapView, Point,
    SpyglassControl, SpyglassOptionsPatch, SpyglassShape,
};
use std::sync::Arc;

/// Drives a spyglass over a headless primary map without any UI
fn main() -> spyglass::Result<()> {
    env_logger::init();

    println!("🔭 Spyglass Headless Example");
    println!("============================");

    let primary = Arc::new(Map::new(
        LatLng::new(47.6062, -122.3321),
        11.0,
        Point::new(1024.0, 768.0),
    ));
    let spy = Arc::new(Map::new(LatLng::default(), 1.0, Point::square(350.0)));

    let mut control = SpyglassControl::new(
        primary.clone(),
        spy.clone(),
        Some(SpyglassOptionsPatch::new().border_color("#1e90ff").size(300.0)),
    )?;
    println!("✅ Spyglass created: {:?}", control.options());
    print_camera("spyglass after construction", &spy.camera()?);

    spy.mark_ready()?;
    println!(
        "   Logo hidden: {}",
        spy.chrome(ChromeKind::Logo)
            .is_some_and(|logo| logo.style().is_hidden())
    );

    println!("\n🎯 Moving the primary map:");
    let tours = [
        ("New York", LatLng::new(40.7128, -74.0060), 11.0),
        ("London", LatLng::new(51.5074, -0.1278), 10.0),
        ("Tokyo", LatLng::new(35.6762, 139.6503), 12.0),
    ];
    for (name, center, zoom) in tours {
        primary.set_view(center, zoom)?;
        print_camera(name, &spy.camera()?);
    }

    println!("\n🔁 Rotating and tilting the spyglass:");
    spy.set_camera(CameraOptions::jump(Camera {
        bearing: 45.0,
        pitch: 30.0,
        ..spy.camera()?
    }))?;
    print_camera("primary", &primary.camera()?);

    println!("\n🎨 Restyling:");
    control.set_options(
        SpyglassOptionsPatch::new()
            .shape(SpyglassShape::Square)
            .opacity(0.8),
    )?;
    let container = spy.container()?.style();
    println!(
        "   radius={:?} left={:?}",
        container.border_radius.map(|r| r.to_string()),
        container.left.map(|l| l.to_string())
    );

    control.dispose();
    println!("\n✅ Disposed; maps are now independent.");
    Ok(())
}

fn print_camera(label: &str, camera: &Camera) {
    println!(
        "   📍 {} - ({:.4}, {:.4}) zoom {:.1} bearing {:.1} pitch {:.1}",
        label, camera.center.lat, camera.center.lng, camera.zoom, camera.bearing, camera.pitch
    );
}
