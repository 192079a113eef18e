// Circular layout.
//
// Places the i-th of n nodes at angle 2*pi*i/n on a circle around the
// viewport center. Deterministic given node order; recomputed in full on
// every build.

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }
}

/// Drawing area size in canvas units.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn center(&self) -> Point {
        Point { x: self.width / 2.0, y: self.height / 2.0 }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Circle radius the nodes are placed on.
    pub radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { radius: 200.0 }
    }
}

pub type Positions = HashMap<String, Point>;

/// Place `nodes` evenly on a circle. An empty node list gives an empty map.
pub fn circular_layout<S: AsRef<str>>(nodes: &[S], center: Point, radius: f64) -> Positions {
    let n = nodes.len() as f64;
    nodes
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let a = 2.0 * PI * i as f64 / n;
            let p = Point {
                x: center.x + radius * a.cos(),
                y: center.y + radius * a.sin(),
            };
            (label.as_ref().to_string(), p)
        })
        .collect()
}

/// Lay out a graph inside a viewport using the configured radius.
pub fn layout_graph(graph: &crate::graph::Graph, viewport: &Viewport, cfg: &LayoutConfig) -> Positions {
    circular_layout(graph.nodes(), viewport.center(), cfg.radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_points_lie_on_circle() {
        let center = Point { x: 400.0, y: 300.0 };
        let nodes = ["A", "B", "C", "D", "E"];
        let pos = circular_layout(&nodes, center, 200.0);

        assert_eq!(pos.len(), nodes.len());
        for label in nodes {
            let p = pos.get(label).unwrap();
            assert!((p.distance(&center) - 200.0).abs() < EPS);
        }
    }

    #[test]
    fn test_first_node_is_at_angle_zero() {
        let pos = circular_layout(&["A", "B", "C", "D"], Point { x: 0.0, y: 0.0 }, 10.0);
        let a = pos["A"];
        let b = pos["B"];
        assert!((a.x - 10.0).abs() < EPS && a.y.abs() < EPS);
        // second of four sits a quarter turn further (canvas y grows downwards)
        assert!(b.x.abs() < EPS && (b.y - 10.0).abs() < EPS);
    }

    #[test]
    fn test_positions_are_distinct() {
        let nodes: Vec<String> = (0..12).map(|i| format!("n{i}")).collect();
        let pos = circular_layout(&nodes, Point { x: 0.0, y: 0.0 }, 200.0);
        let points: Vec<Point> = nodes.iter().map(|n| pos[n]).collect();
        for (i, p) in points.iter().enumerate() {
            for q in &points[i + 1..] {
                assert!(p.distance(q) > 1.0);
            }
        }
    }

    #[test]
    fn test_empty_nodes_give_empty_layout() {
        let pos = circular_layout::<&str>(&[], Point { x: 0.0, y: 0.0 }, 200.0);
        assert!(pos.is_empty());
    }

    #[test]
    fn test_viewport_center() {
        let vp = Viewport { width: 1000.0, height: 500.0 };
        assert_eq!(vp.center(), Point { x: 500.0, y: 250.0 });
    }
}
