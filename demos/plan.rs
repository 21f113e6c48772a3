use fresnel_planner::{
    Frequency, LatLng, LinkVisualizer, MercatorView, Planner, RenderOutcome, SvgOverlay, Tower,
};
use serde_json::json;
use std::env;

/// Converts a tower to a GeoJSON Point feature
fn tower_to_geojson_feature(tower: &Tower) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [tower.position.lng, tower.position.lat]
        },
        "properties": {
            "id": tower.id.to_string(),
            "frequency_ghz": tower.frequency.as_ghz()
        }
    })
}

/// Converts the links of a planner to GeoJSON LineString features
fn links_to_geojson_features(planner: &Planner) -> Vec<serde_json::Value> {
    planner
        .links()
        .filter_map(|link| {
            let (a, b) = planner.link_towers(link.id)?;
            Some(json!({
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [
                        [a.position.lng, a.position.lat],
                        [b.position.lng, b.position.lat]
                    ]
                },
                "properties": { "id": link.id.to_string() }
            }))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional frequency argument in GHz, as typed into an edit prompt
    let frequency: Frequency = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => Frequency::from_ghz(5.8)?,
    };

    let mut planner = Planner::new();
    let rooftop = planner.add_tower(LatLng::new(47.3769, 8.5417), frequency)?;
    let hill = planner.add_tower(LatLng::new(47.3497, 8.4914), frequency)?;
    let mast = planner.add_tower(LatLng::new(47.4125, 8.5450), frequency)?;

    planner.click_tower(rooftop)?;
    planner.click_tower(hill)?;
    let link = planner.create_link(rooftop, mast)?;

    let map = MercatorView::new(LatLng::new(47.38, 8.53), 13.0, 800.0, 600.0);
    let mut visualizer = LinkVisualizer::new(planner, map, SvgOverlay::new(800.0, 600.0));

    for outcome in [
        visualizer.select_link(link),
        visualizer.update_viewport(|map| map.set_zoom(14.0)),
    ] {
        match outcome {
            RenderOutcome::Rendered(render) => println!(
                "{}: {:.0} m, bearing {:.1}°, Fresnel radius {:.2} m, ellipse {:.1} × {:.1} px",
                render.link,
                render.geometry.distance,
                render.geometry.bearing,
                render.geometry.fresnel_radius,
                render.ellipse.semi_major,
                render.ellipse.semi_minor,
            ),
            RenderOutcome::Skipped(warning) => println!("Skipped: {warning:?}"),
            RenderOutcome::Idle => println!("Nothing selected"),
        }
    }

    println!("\n=== Overlay ===\n{}", visualizer.surface().to_svg());

    let planner = visualizer.planner();
    let mut features: Vec<_> = planner.towers().map(tower_to_geojson_feature).collect();
    features.extend(links_to_geojson_features(planner));

    let collection = json!({ "type": "FeatureCollection", "features": features });
    println!("\n=== GeoJSON ===\n{}", serde_json::to_string_pretty(&collection)?);

    Ok(())
}
