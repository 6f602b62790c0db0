//! Radial node layout.
//!
//! Satellite nodes sit on a circle around the hub's center. Angles are
//! declared in degrees with 0° at the top and positive values running
//! clockwise, so a −90° offset converts them to standard screen radians
//! (0 rad = east, y grows downward).
//!
//! Positions are returned in container-local coordinates and refer to the
//! node's top-left corner, which is what absolute positioning expects.

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};

/// Share of the container's half-width used as the orbit radius. Keeps nodes
/// clear of the container edge.
pub const DEFAULT_RADIUS_FACTOR: f64 = 0.75;

/// Rotation applied so that 0° points up instead of east.
pub const ANGLE_OFFSET_DEG: f64 = -90.0;

/// A satellite node: its declared angle and rendered size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialNode {
    pub angle_deg: f64,
    pub width: f64,
    pub height: f64,
}

impl RadialNode {
    pub const fn new(angle_deg: f64, width: f64, height: f64) -> Self {
        Self {
            angle_deg,
            width,
            height,
        }
    }

    /// Build a node from its raw angle attribute.
    pub fn from_attribute(angle: &str, width: f64, height: f64) -> Result<Self> {
        Ok(Self::new(parse_angle(angle)?, width, height))
    }
}

/// Top-left placement of a node inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

/// Parse an angle attribute in degrees.
pub fn parse_angle(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(angle) if angle.is_finite() => Ok(angle),
        _ => Err(Error::InvalidAngle(raw.to_string())),
    }
}

/// Orbit radius for a container of the given width.
#[inline]
pub fn radius_for(container_width: f64, factor: f64) -> f64 {
    factor * (container_width / 2.0)
}

/// Point on the orbit for a declared angle.
pub fn node_center(center: Point, radius: f64, angle_deg: f64) -> Point {
    let angle_rad = (angle_deg + ANGLE_OFFSET_DEG).to_radians();
    Point::new(
        center.x + radius * angle_rad.cos(),
        center.y + radius * angle_rad.sin(),
    )
}

/// Placement of a single node inside `container`.
pub fn place_node(container: &Rect, node: &RadialNode, factor: f64) -> Placement {
    let radius = radius_for(container.width, factor);
    let center = node_center(container.local_center(), radius, node.angle_deg);
    Placement {
        left: center.x - node.width / 2.0,
        top: center.y - node.height / 2.0,
    }
}

/// Place every node. Entries that could not be measured or parsed stay `None`.
pub fn layout(container: &Rect, nodes: &[Option<RadialNode>], factor: f64) -> Vec<Option<Placement>> {
    nodes
        .iter()
        .map(|node| node.as_ref().map(|n| place_node(container, n, factor)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn radius_is_three_quarters_of_half_width() {
        assert_eq!(radius_for(400.0, DEFAULT_RADIUS_FACTOR), 150.0);
        assert_eq!(radius_for(0.0, DEFAULT_RADIUS_FACTOR), 0.0);
    }

    #[test]
    fn zero_degrees_is_top() {
        let center = Point::new(200.0, 200.0);
        let p = node_center(center, 150.0, 0.0);
        assert!(approx(p.x, 200.0));
        assert!(approx(p.y, 50.0));
    }

    #[test]
    fn clockwise_quarter_turns() {
        let center = Point::new(0.0, 0.0);
        let right = node_center(center, 10.0, 90.0);
        let bottom = node_center(center, 10.0, 180.0);
        let left = node_center(center, 10.0, 270.0);

        assert!(approx(right.x, 10.0) && approx(right.y, 0.0));
        assert!(approx(bottom.x, 0.0) && approx(bottom.y, 10.0));
        assert!(approx(left.x, -10.0) && approx(left.y, 0.0));
    }

    #[test]
    fn placement_offsets_by_half_node_size() {
        let container = Rect::new(0.0, 0.0, 400.0, 400.0);
        let node = RadialNode::new(0.0, 60.0, 40.0);
        let placement = place_node(&container, &node, DEFAULT_RADIUS_FACTOR);

        // Center lands at (200, 50); top-left is half the node size up and left
        assert!(approx(placement.left, 170.0));
        assert!(approx(placement.top, 30.0));
    }

    #[test]
    fn placement_ignores_page_offset() {
        let at_origin = Rect::new(0.0, 0.0, 400.0, 300.0);
        let scrolled = Rect::new(120.0, 900.0, 400.0, 300.0);
        let node = RadialNode::new(45.0, 20.0, 20.0);

        assert_eq!(
            place_node(&at_origin, &node, DEFAULT_RADIUS_FACTOR),
            place_node(&scrolled, &node, DEFAULT_RADIUS_FACTOR)
        );
    }

    #[test]
    fn parse_angle_accepts_numbers() {
        assert_eq!(parse_angle("45").unwrap(), 45.0);
        assert_eq!(parse_angle(" 127.5 ").unwrap(), 127.5);
        assert_eq!(parse_angle("-30").unwrap(), -30.0);
    }

    #[test]
    fn parse_angle_rejects_garbage() {
        assert!(matches!(parse_angle(""), Err(Error::InvalidAngle(_))));
        assert!(matches!(parse_angle("north"), Err(Error::InvalidAngle(_))));
        assert!(matches!(parse_angle("NaN"), Err(Error::InvalidAngle(_))));
        assert!(matches!(parse_angle("inf"), Err(Error::InvalidAngle(_))));
    }

    #[test]
    fn node_from_attribute() {
        let node = RadialNode::from_attribute("90", 40.0, 20.0).unwrap();
        assert_eq!(node, RadialNode::new(90.0, 40.0, 20.0));
        assert!(matches!(
            RadialNode::from_attribute("east", 40.0, 20.0),
            Err(Error::InvalidAngle(_))
        ));
    }

    #[test]
    fn layout_skips_missing_nodes() {
        let container = Rect::new(0.0, 0.0, 400.0, 400.0);
        let nodes = [
            Some(RadialNode::new(0.0, 10.0, 10.0)),
            None,
            Some(RadialNode::new(180.0, 10.0, 10.0)),
        ];
        let placements = layout(&container, &nodes, DEFAULT_RADIUS_FACTOR);

        assert_eq!(placements.len(), 3);
        assert!(placements[0].is_some());
        assert!(placements[1].is_none());
        assert!(placements[2].is_some());
    }

    proptest! {
        #[test]
        fn nodes_stay_on_orbit(angle in 0.0f64..360.0, width in 1.0f64..2000.0) {
            let container = Rect::new(0.0, 0.0, width, width);
            let radius = radius_for(width, DEFAULT_RADIUS_FACTOR);
            let center = container.local_center();
            let p = node_center(center, radius, angle);

            prop_assert!((p.distance(&center) - radius).abs() < 1e-6 * width.max(1.0));
            prop_assert!(p.distance(&center) <= radius + 1e-6 * width.max(1.0));
        }

        #[test]
        fn full_turn_is_identity(angle in 0.0f64..360.0) {
            let center = Point::new(50.0, 50.0);
            let a = node_center(center, 30.0, angle);
            let b = node_center(center, 30.0, angle + 360.0);
            prop_assert!((a.x - b.x).abs() < 1e-9);
            prop_assert!((a.y - b.y).abs() < 1e-9);
        }
    }
}
