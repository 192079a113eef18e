//! Output types for frontend consumption.
//!
//! These structs are serialized to JSON for hosts that want to draw the
//! frame themselves instead of handing the crate a canvas.

use crate::layout::Point;
use serde::Serialize;

/// One drawing primitive, in the order it was issued.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Line { from: Point, to: Point, color: String },
    FillCircle { center: Point, radius: f64, color: String },
    Text { text: String, at: Point, color: String },
}

/// A rendered frame plus the traversal progress that produced it
#[derive(Debug, Clone, Serialize)]
pub struct FrameOutput {
    pub commands: Vec<DrawCommand>,
    pub visited: Vec<String>,
    pub running: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_command_json_shape() {
        let cmd = DrawCommand::FillCircle {
            center: Point { x: 1.0, y: 2.0 },
            radius: 18.0,
            color: "#ffcc00".to_string(),
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["op"], "fill_circle");
        assert_eq!(json["center"]["x"], 1.0);
        assert_eq!(json["radius"], 18.0);
    }
}
