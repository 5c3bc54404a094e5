use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use geom::{Distance, Duration, LonLat};
use route_annotation::{
    colorize, evaluate_tolls, evaluate_traffic, AnnotationError, AnnotationOptions, Annotator,
    Color, Money, ReferenceData, Route, Severity, TrafficIncident,
};

fn route(pts: Vec<(f64, f64)>) -> Route {
    Route::new(
        pts.into_iter()
            .map(|(lat, lon)| LonLat::new(lon, lat))
            .collect(),
        Distance::meters(10_700.0),
        Duration::seconds(660.0),
    )
    .unwrap()
}

fn dallas_north_tollway_route() -> Route {
    route(vec![(32.9215, -96.8207), (33.0176, -96.8238)])
}

#[test]
fn tolls_on_the_dallas_north_tollway() {
    let data = ReferenceData::dallas();
    let mut markers = Vec::new();
    let report = evaluate_tolls(
        &dallas_north_tollway_route(),
        &data.toll_roads,
        &AnnotationOptions::default(),
        &mut markers,
    )
    .unwrap();
    assert!(report.has_tolls);
    assert_eq!(report.toll_roads, vec!["Dallas North Tollway".to_string()]);
    assert_eq!(report.total_cost, Money::dollars(1.52));
    assert_eq!(markers.len(), 1);
}

#[test]
fn traffic_on_the_dallas_north_tollway() {
    let data = ReferenceData::dallas();
    let mut markers = Vec::new();
    let report = evaluate_traffic(
        &dallas_north_tollway_route(),
        &data.incidents,
        &AnnotationOptions::default(),
        &mut markers,
    )
    .unwrap();
    assert!(report.has_traffic);
    assert_eq!(
        report.matched_incidents,
        vec![TrafficIncident {
            location: LonLat::new(-96.8207, 32.9215),
            severity: Severity::Severe,
            delay_minutes: 15,
        }]
    );
    assert_eq!(report.total_delay_minutes, 15);
    assert_eq!(markers.len(), 1);
}

#[test]
fn far_from_traffic_has_no_overlay() {
    let data = ReferenceData::dallas();
    // Downtown Fort Worth
    let r = route(vec![(32.7555, -97.3308), (32.7480, -97.3330), (32.7300, -97.3500)]);
    let colorized = colorize(&r, &data.incidents, &AnnotationOptions::default()).unwrap();
    assert_eq!(colorized.base.len(), 2);
    assert!(colorized.base.iter().all(|s| s.color == Color::CLEAR));
    assert!(colorized.overlays.is_empty());
}

#[test]
fn three_edges_near_moderate_traffic() {
    // About 2.2km between points, so only the two points flanking the incident are close
    let r = route(vec![
        (32.90, -96.80),
        (32.92, -96.80),
        (32.94, -96.80),
        (32.96, -96.80),
        (32.98, -96.80),
        (33.00, -96.80),
    ]);
    let incidents = vec![TrafficIncident {
        location: LonLat::new(-96.80, 32.95),
        severity: Severity::Moderate,
        delay_minutes: 8,
    }];
    let colorized = colorize(&r, &incidents, &AnnotationOptions::default()).unwrap();

    let edges: Vec<(LonLat, LonLat)> = r.edges().collect();
    let overlay_edges: Vec<(LonLat, LonLat)> =
        colorized.overlays.iter().map(|s| (s.from, s.to)).collect();
    assert_eq!(overlay_edges, edges[1..4].to_vec());
    assert!(colorized.overlays.iter().all(|s| s.color == Color::ORANGE));

    assert_eq!(colorized.base.len(), edges.len());
    assert!(colorized.base.iter().all(|s| s.color == Color::CLEAR));
}

#[test]
fn threshold_boundaries() {
    let incident = LonLat::new(-96.8207, 32.9215);
    let opts = AnnotationOptions::default();
    let radius = opts.traffic_detection_radius();
    let incidents = vec![TrafficIncident {
        location: incident,
        severity: Severity::Light,
        delay_minutes: 3,
    }];

    // Walk north until we're just inside and just outside the radius
    let mut inside = incident;
    let outside;
    let mut lat = incident.latitude;
    loop {
        let pt = LonLat::new(incident.longitude, lat);
        if pt.gps_dist_meters(incident) >= radius {
            outside = pt;
            break;
        }
        inside = pt;
        lat += 0.000_01;
    }
    // One step north is about 1.1m
    assert!(inside.gps_dist_meters(incident) > Distance::meters(radius.inner_meters() - 2.0));

    let near = Route::new(vec![inside, inside], Distance::ZERO, Duration::ZERO).unwrap();
    assert!(
        evaluate_traffic(&near, &incidents, &opts, &mut Vec::new())
            .unwrap()
            .has_traffic
    );
    let far = Route::new(vec![outside, outside], Distance::ZERO, Duration::ZERO).unwrap();
    assert!(
        !evaluate_traffic(&far, &incidents, &opts, &mut Vec::new())
            .unwrap()
            .has_traffic
    );
}

#[test]
fn bad_routes_are_errors_not_empty_reports() {
    assert!(matches!(
        Route::new(Vec::new(), Distance::ZERO, Duration::ZERO),
        Err(AnnotationError::InvalidRoute(_))
    ));
    assert!(matches!(
        Route::new(
            vec![LonLat::new(-96.8, 32.9), LonLat::new(-96.8, f64::INFINITY)],
            Distance::ZERO,
            Duration::ZERO
        ),
        Err(AnnotationError::InvalidGeometry(_))
    ));
}

#[test]
fn bad_reference_data_is_an_error_not_a_crash() {
    let r = dallas_north_tollway_route();
    let opts = AnnotationOptions::default();

    let mut data = ReferenceData::dallas();
    data.incidents[1].location = LonLat::new(f64::NAN, 33.0176);
    assert!(matches!(
        evaluate_traffic(&r, &data.incidents, &opts, &mut Vec::new()),
        Err(AnnotationError::InvalidGeometry(_))
    ));
    assert!(matches!(
        colorize(&r, &data.incidents, &opts),
        Err(AnnotationError::InvalidGeometry(_))
    ));

    let mut data = ReferenceData::dallas();
    data.toll_roads[2].segments[0].end = LonLat::new(-96.7, f64::NAN);
    assert!(matches!(
        evaluate_tolls(&r, &data.toll_roads, &opts, &mut Vec::new()),
        Err(AnnotationError::InvalidGeometry(_))
    ));
    assert!(Annotator::new(&data, opts).is_err());
}

#[test]
fn infinite_flag_is_an_error_not_a_crash() {
    use structopt::StructOpt;

    let opts = AnnotationOptions::from_iter(vec!["test", "--toll-match-threshold-meters", "inf"]);
    let data = ReferenceData::dallas();
    assert!(matches!(
        Annotator::new(&data, opts.clone()),
        Err(AnnotationError::InvalidOptions(_))
    ));
    assert!(matches!(
        evaluate_tolls(
            &dallas_north_tollway_route(),
            &data.toll_roads,
            &opts,
            &mut Vec::new()
        ),
        Err(AnnotationError::InvalidOptions(_))
    ));
}

fn random_route(rng: &mut XorShiftRng) -> Route {
    let num_pts = rng.gen_range(2..30);
    let mut pt = LonLat::new(rng.gen_range(-97.0..-96.6), rng.gen_range(32.85..33.15));
    let mut pts = vec![pt];
    for _ in 1..num_pts {
        pt = LonLat::new(
            pt.longitude + rng.gen_range(-0.01..0.01),
            pt.latitude + rng.gen_range(-0.01..0.01),
        );
        pts.push(pt);
    }
    Route::new(pts, Distance::meters(5_000.0), Duration::minutes(7)).unwrap()
}

#[test]
fn evaluation_is_idempotent() {
    let data = ReferenceData::dallas();
    let mut annotator = Annotator::new(&data, AnnotationOptions::default()).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(42);
    for _ in 0..200 {
        let r = random_route(&mut rng);
        let first = annotator.evaluate(&r).unwrap();
        let first_markers = annotator.session().markers.clone();
        let second = annotator.evaluate(&r).unwrap();
        assert_eq!(first, second);
        assert_eq!(first_markers, annotator.session().markers);
    }
}

#[test]
fn totals_match_independent_matches() {
    let data = ReferenceData::dallas();
    let opts = AnnotationOptions::default();
    let mut rng = XorShiftRng::seed_from_u64(1337);
    for _ in 0..200 {
        let r = random_route(&mut rng);

        let tolls = evaluate_tolls(&r, &data.toll_roads, &opts, &mut Vec::new()).unwrap();
        let mut expected_cost = Money::ZERO;
        for road in &data.toll_roads {
            for segment in &road.segments {
                if r.edge_starts().iter().any(|pt| {
                    pt.dist_to_segment_endpoints(segment.start, segment.end)
                        < opts.toll_match_threshold()
                }) {
                    expected_cost += segment.cost;
                }
            }
        }
        assert_eq!(tolls.total_cost, expected_cost);
        assert_eq!(tolls.has_tolls, !tolls.toll_roads.is_empty());
        let unique_names: HashSet<&String> = tolls.toll_roads.iter().collect();
        assert_eq!(unique_names.len(), tolls.toll_roads.len());

        let traffic = evaluate_traffic(&r, &data.incidents, &opts, &mut Vec::new()).unwrap();
        let unique_locations: HashSet<_> = traffic
            .matched_incidents
            .iter()
            .map(|i| i.location.to_hashable())
            .collect();
        assert_eq!(unique_locations.len(), traffic.matched_incidents.len());
        assert_eq!(
            traffic.total_delay_minutes,
            traffic
                .matched_incidents
                .iter()
                .map(|i| i.delay_minutes)
                .sum::<usize>()
        );
    }
}
