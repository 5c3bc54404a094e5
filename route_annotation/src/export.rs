use anyhow::Result;
use serde::Serialize;

use crate::{ColoredSegment, MarkerIcon, RenderSession};

/// Writes the session's layers as a GeoJSON FeatureCollection: one LineString per colored
/// segment (base layer first), then one Point per marker.
pub fn to_geojson(session: &RenderSession) -> Result<String> {
    let mut string_buffer: Vec<u8> = vec![];
    {
        let mut writer = geojson::FeatureWriter::from_writer(&mut string_buffer);

        #[derive(Serialize)]
        struct SegmentGeoJson {
            #[serde(serialize_with = "geojson::ser::serialize_geometry")]
            geometry: geo::LineString,
            layer: &'static str,
            color: String,
        }

        #[derive(Serialize)]
        struct MarkerGeoJson {
            #[serde(serialize_with = "geojson::ser::serialize_geometry")]
            geometry: geo::Point,
            kind: &'static str,
            label: String,
            icon_color: Option<String>,
        }

        let layers = [
            ("base", &session.colorized.base),
            ("overlay", &session.colorized.overlays),
        ];
        for (layer, segments) in layers {
            for segment in segments {
                writer.serialize(&SegmentGeoJson {
                    geometry: to_linestring(segment),
                    layer,
                    color: segment.color.to_hex(),
                })?;
            }
        }

        for marker in &session.markers {
            let pos = marker.position();
            let (kind, icon_color) = match marker.icon() {
                MarkerIcon::Toll => ("toll", None),
                MarkerIcon::Congestion(color) => ("incident", Some(color.to_hex())),
            };
            writer.serialize(&MarkerGeoJson {
                geometry: geo::Point::new(pos.x(), pos.y()),
                kind,
                label: marker.label(),
                icon_color,
            })?;
        }
    }
    let out = String::from_utf8(string_buffer)?;
    Ok(out)
}

fn to_linestring(segment: &ColoredSegment) -> geo::LineString {
    geo::LineString::from(vec![
        (segment.from.x(), segment.from.y()),
        (segment.to.x(), segment.to.y()),
    ])
}
