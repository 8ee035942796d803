//! Pads spiral points past the edges of the lat/lon plane.
//!
//! Each reflection mode maps every input point to one copy beyond an edge or corner of the
//! `[-90, 90] x [-180, 180]` domain, and the two pole circles repeat the first and last point's
//! payload at every whole degree of longitude around the poles.

use std::fmt;

use crate::reading::SpiralPoint;

/// First and last longitude of a pole circle.
const POLE_CIRCLE_START: i32 = -181;
const POLE_CIRCLE_END: i32 = 182;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadMode {
    Top,
    Bottom,
    Left,
    Right,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    North,
    South,
}

impl PadMode {
    /// Output order.
    pub const ALL: [PadMode; 10] = [
        PadMode::Top,
        PadMode::Bottom,
        PadMode::Left,
        PadMode::Right,
        PadMode::NorthEast,
        PadMode::NorthWest,
        PadMode::SouthEast,
        PadMode::SouthWest,
        PadMode::North,
        PadMode::South,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PadMode::Top => "top",
            PadMode::Bottom => "bottom",
            PadMode::Left => "left",
            PadMode::Right => "right",
            PadMode::NorthEast => "ne",
            PadMode::NorthWest => "nw",
            PadMode::SouthEast => "se",
            PadMode::SouthWest => "sw",
            PadMode::North => "north",
            PadMode::South => "south",
        }
    }

    /// Reflected copy of `point`, or `None` for the pole circle modes.
    pub fn reflect(self, point: &SpiralPoint) -> Option<SpiralPoint> {
        let (lat, lon) = (point.latitude, point.longitude);
        let (new_lat, new_lon) = match self {
            PadMode::Top => (90.0 + (90.0 - lat), wrap(lon)),
            PadMode::Bottom => (-90.0 - (lat + 90.0), wrap(lon)),
            PadMode::Left => (lat, lon - 360.0),
            PadMode::Right => (lat, lon + 360.0),
            PadMode::NorthEast | PadMode::NorthWest => (180.0 - lat, corner(lon)),
            PadMode::SouthEast | PadMode::SouthWest => (-lat - 180.0, corner(lon)),
            PadMode::North | PadMode::South => return None,
        };

        Some(point.moved_to(new_lat, new_lon))
    }
}

impl fmt::Display for PadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half a turn back towards the antimeridian.
fn wrap(lon: f64) -> f64 {
    if lon >= 0.0 {
        lon - 180.0
    } else {
        lon + 180.0
    }
}

/// Half a turn away from the prime meridian.
fn corner(lon: f64) -> f64 {
    if lon >= 0.0 {
        lon + 180.0
    } else {
        lon - 180.0
    }
}

/// Copies of `source`'s payload at `latitude`, one per degree from -181 to 182.
pub fn pole_circle(latitude: f64, source: &SpiralPoint) -> Vec<SpiralPoint> {
    (POLE_CIRCLE_START..=POLE_CIRCLE_END)
        .map(|lon| source.moved_to(latitude, f64::from(lon)))
        .collect()
}

/// Points produced by one padding mode.
pub fn pad_points(points: &[SpiralPoint], mode: PadMode) -> Vec<SpiralPoint> {
    match mode {
        PadMode::North => points.first().map(|p| pole_circle(90.0, p)).unwrap_or_default(),
        PadMode::South => points.last().map(|p| pole_circle(-90.0, p)).unwrap_or_default(),
        _ => points.iter().filter_map(|p| mode.reflect(p)).collect(),
    }
}

#[derive(Debug, Clone)]
pub struct PaddedPoints {
    pub original: Vec<SpiralPoint>,
    /// One block per mode, in `PadMode::ALL` order.
    pub blocks: Vec<(PadMode, Vec<SpiralPoint>)>,
}

impl PaddedPoints {
    pub fn new(original: Vec<SpiralPoint>) -> Self {
        let blocks = PadMode::ALL
            .iter()
            .map(|&mode| (mode, pad_points(&original, mode)))
            .collect();

        PaddedPoints { original, blocks }
    }

    pub fn total(&self) -> usize {
        self.original.len() + self.blocks.iter().map(|(_, b)| b.len()).sum::<usize>()
    }

    /// Original points first, then each block in mode order.
    pub fn iter(&self) -> impl Iterator<Item = &SpiralPoint> {
        self.original
            .iter()
            .chain(self.blocks.iter().flat_map(|(_, b)| b.iter()))
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64, payload: [&str; 3]) -> SpiralPoint {
        SpiralPoint {
            latitude: lat,
            longitude: lon,
            payload: payload.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample() -> Vec<SpiralPoint> {
        vec![
            point(0.0, 0.0, ["1", "2", "3"]),
            point(10.0, 170.0, ["4", "5", "6"]),
            point(-10.0, -170.0, ["7", "8", "9"]),
        ]
    }

    #[test]
    fn should_count_all_records() {
        let padded = PaddedPoints::new(sample());

        assert_eq!(padded.total(), 3 + 24 + 728);
        assert_eq!(padded.iter().count(), 755);
    }

    #[test]
    fn should_keep_mode_order() {
        let padded = PaddedPoints::new(sample());
        let names: Vec<&str> = padded.blocks.iter().map(|(m, _)| m.name()).collect();

        assert_eq!(
            names,
            vec!["top", "bottom", "left", "right", "ne", "nw", "se", "sw", "north", "south"]
        );
    }

    #[test]
    fn should_emit_original_points_first() {
        let padded = PaddedPoints::new(sample());
        let head: Vec<&SpiralPoint> = padded.iter().take(3).collect();

        assert_eq!(head[0], &sample()[0]);
        assert_eq!(head[2], &sample()[2]);
        assert_eq!(padded.iter().nth(3).unwrap().latitude, 180.0);
    }

    #[test]
    fn should_reflect_over_top() {
        let top = PadMode::Top.reflect(&sample()[0]).unwrap();

        assert_eq!(top.latitude, 180.0);
        assert_eq!(top.longitude, -180.0);
        assert_eq!(top.payload, vec!["1", "2", "3"]);

        let top = PadMode::Top.reflect(&sample()[2]).unwrap();
        assert_eq!(top.latitude, 190.0);
        assert_eq!(top.longitude, 10.0);
    }

    #[test]
    fn should_reflect_over_bottom() {
        let bottom = PadMode::Bottom.reflect(&sample()[1]).unwrap();

        assert_eq!(bottom.latitude, -190.0);
        assert_eq!(bottom.longitude, -10.0);
    }

    #[test]
    fn should_reflect_corners() {
        let p = &sample()[1];
        let ne = PadMode::NorthEast.reflect(p).unwrap();
        let sw = PadMode::SouthWest.reflect(p).unwrap();

        assert_eq!((ne.latitude, ne.longitude), (170.0, 350.0));
        assert_eq!((sw.latitude, sw.longitude), (-190.0, 350.0));
        assert_eq!(PadMode::NorthWest.reflect(p).unwrap(), ne);
        assert_eq!(PadMode::SouthEast.reflect(p).unwrap(), sw);

        let west = PadMode::NorthEast.reflect(&sample()[2]).unwrap();
        assert_eq!(west.longitude, -350.0);
    }

    #[test]
    fn should_undo_left_with_right() {
        for p in sample() {
            let there = PadMode::Left.reflect(&p).unwrap();
            let back = PadMode::Right.reflect(&there).unwrap();
            assert_eq!(back, p);

            let there = PadMode::Right.reflect(&p).unwrap();
            let back = PadMode::Left.reflect(&there).unwrap();
            assert_eq!(back.longitude, p.longitude);
        }
    }

    #[test]
    fn should_undo_top_twice() {
        for p in sample() {
            let twice = PadMode::Top.reflect(&PadMode::Top.reflect(&p).unwrap()).unwrap();
            assert_eq!(twice.latitude, p.latitude);
        }
    }

    #[test]
    fn should_replicate_poles_from_first_and_last() {
        let points = sample();
        let north = pad_points(&points, PadMode::North);
        let south = pad_points(&points, PadMode::South);

        assert_eq!(north.len(), 364);
        assert_eq!(south.len(), 364);
        assert!(north.iter().all(|p| p.latitude == 90.0));
        assert!(south.iter().all(|p| p.latitude == -90.0));
        assert!(north.iter().all(|p| p.payload == points[0].payload));
        assert!(south.iter().all(|p| p.payload == points[2].payload));
        assert_eq!(north[0].longitude, -181.0);
        assert_eq!(north[181].longitude, 0.0);
        assert_eq!(north[363].longitude, 182.0);
    }

    #[test]
    fn should_not_reflect_with_pole_modes() {
        assert!(PadMode::North.reflect(&sample()[0]).is_none());
        assert!(pad_points(&[], PadMode::South).is_empty());
    }
}
