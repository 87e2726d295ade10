// ABOUTME: GPX 1.0/1.1 decoder producing one TrackSegment per track segment
// ABOUTME: Reads trkpt coordinates, elevation, time, and heart rate from any extensions/hr element
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use afterrun_core::errors::{AppError, AppResult};
use afterrun_core::models::TrackSegment;
use tracing::debug;

use super::geo::{build_segment, GeoSample};
use super::xml::{
    parse_measure, parse_number, parse_timestamp, path_ends_with, walk, Attributes, XmlNode,
};

const ROOT: &str = "gpx";

#[derive(Default)]
struct GpxReader {
    stopped_speed_kmh: f64,
    segments: Vec<TrackSegment>,
    samples: Option<Vec<GeoSample>>,
    point: Option<GeoSample>,
}

impl GpxReader {
    fn visit(&mut self, node: XmlNode<'_>) -> AppResult<()> {
        match node {
            XmlNode::Open { path, attributes } => {
                if path_ends_with(path, &["trk", "trkseg"]) {
                    self.samples = Some(Vec::new());
                } else if path_ends_with(path, &["trkseg", "trkpt"]) {
                    self.point = Some(read_coordinates(attributes)?);
                }
            }
            XmlNode::Text { path, text } => self.read_field(path, text)?,
            XmlNode::Close { path } => {
                if path_ends_with(path, &["trkseg", "trkpt"]) {
                    if let (Some(point), Some(samples)) = (self.point.take(), self.samples.as_mut()) {
                        samples.push(point);
                    }
                } else if path_ends_with(path, &["trk", "trkseg"]) {
                    let samples = self.samples.take().unwrap_or_default();
                    let segment = build_segment(&samples, self.stopped_speed_kmh);
                    debug!(
                        points = segment.points.len(),
                        moving_distance_m = segment.moving_distance_m,
                        moving_time_s = segment.moving_time_s,
                        "decoded GPX segment"
                    );
                    self.segments.push(segment);
                }
            }
        }
        Ok(())
    }

    fn read_field(&mut self, path: &[String], text: &str) -> AppResult<()> {
        let Some(point) = self.point.as_mut() else {
            return Ok(());
        };
        if path_ends_with(path, &["trkpt", "ele"]) {
            point.elevation = Some(parse_measure("ele", text)?);
        } else if path_ends_with(path, &["trkpt", "time"]) {
            point.timestamp = Some(parse_timestamp("time", text)?);
        } else if path_ends_with(path, &["hr"]) && path.iter().any(|element| element == "extensions") {
            point.heart_rate = Some(parse_number("hr", text)?);
        }
        Ok(())
    }
}

fn read_coordinates(attributes: &Attributes) -> AppResult<GeoSample> {
    let coordinate = |name: &str| -> AppResult<f64> {
        let value = attributes
            .get(name)
            .ok_or_else(|| AppError::parse(format!("<trkpt> without '{name}' attribute")))?;
        parse_measure(name, value)
    };
    Ok(GeoSample {
        latitude: coordinate("lat")?,
        longitude: coordinate("lon")?,
        ..GeoSample::default()
    })
}

/// Decode a GPX document into its track segments
///
/// Waypoints and routes are ignored; only `trk/trkseg/trkpt` contributes.
///
/// # Errors
///
/// Returns `ParseError` for malformed XML, a missing `<gpx>` root, a track
/// point without coordinates, or an unparsable field value
pub fn decode(bytes: &[u8], stopped_speed_kmh: f64) -> AppResult<Vec<TrackSegment>> {
    let mut reader = GpxReader {
        stopped_speed_kmh,
        ..GpxReader::default()
    };
    walk(bytes, ROOT, |node| reader.visit(node))?;
    Ok(reader.segments)
}
