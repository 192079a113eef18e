//! Graph rendering over an abstract drawing surface.
//!
//! The renderer only issues primitives (clear, line, filled circle, text);
//! the browser host maps them onto a canvas context and tests record them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::layout::{Point, Positions, Viewport};
use crate::output::DrawCommand;

/// The drawing capability the renderer calls into.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn line(&mut self, from: Point, to: Point, color: &str);
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);
    fn text(&mut self, text: &str, at: Point, color: &str);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub node_radius: f64,
    pub edge_color: String,
    pub node_color: String,
    pub highlight_color: String,
    pub label_color: String,
    /// Label position relative to the node center.
    pub label_offset: Point,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_radius: 18.0,
            edge_color: "#888".to_string(),
            node_color: "#9ad0d3".to_string(),
            highlight_color: "#ffcc00".to_string(),
            label_color: "#000".to_string(),
            label_offset: Point { x: -5.0, y: 5.0 },
        }
    }
}

/// Draw the whole graph: clear, edges, then nodes with their labels.
///
/// Each undirected edge is drawn once. Nodes or endpoints without a
/// position are skipped.
pub fn render<S: Surface + ?Sized>(
    graph: &Graph,
    positions: &Positions,
    highlighted: &HashSet<&str>,
    viewport: &Viewport,
    style: &RenderStyle,
    surface: &mut S,
) {
    surface.clear(viewport.width, viewport.height);

    for edge in graph.edges() {
        if let (Some(from), Some(to)) = (positions.get(&edge.from), positions.get(&edge.to)) {
            surface.line(*from, *to, &style.edge_color);
        }
    }

    for label in graph.nodes() {
        let Some(at) = positions.get(label) else {
            continue;
        };
        let color = if highlighted.contains(label.as_str()) {
            &style.highlight_color
        } else {
            &style.node_color
        };
        surface.fill_circle(*at, style.node_radius, color);
        surface.text(label, at.offset(style.label_offset.x, style.label_offset.y), &style.label_color);
    }
}

/// A surface that records every primitive as a [`DrawCommand`].
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued since the last clear.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for CommandRecorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn line(&mut self, from: Point, to: Point, color: &str) {
        self.commands.push(DrawCommand::Line { from, to, color: color.to_string() });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color: color.to_string() });
    }

    fn text(&mut self, text: &str, at: Point, color: &str) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, color: color.to_string() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_graph, LayoutConfig};

    fn draw(graph: &Graph, highlighted: &[&str]) -> Vec<DrawCommand> {
        let vp = Viewport::default();
        let pos = layout_graph(graph, &vp, &LayoutConfig::default());
        let hl: HashSet<&str> = highlighted.iter().copied().collect();
        let mut rec = CommandRecorder::new();
        render(graph, &pos, &hl, &vp, &RenderStyle::default(), &mut rec);
        rec.take()
    }

    fn fill_colors(cmds: &[DrawCommand]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { color, .. } => Some(color.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_clear_comes_first() {
        let graph = Graph::build(["A", "B"], ["A-B"]).unwrap();
        let cmds = draw(&graph, &[]);
        assert!(matches!(cmds[0], DrawCommand::Clear { width, height } if width == 800.0 && height == 600.0));
    }

    #[test]
    fn test_each_edge_drawn_once_before_nodes() {
        let graph = Graph::build(["A", "B", "C"], ["A-B", "B-C"]).unwrap();
        let cmds = draw(&graph, &[]);

        let lines: Vec<usize> = cmds
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, DrawCommand::Line { .. }))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(lines, vec![1, 2]);
        // then circle + label per node
        assert_eq!(cmds.len(), 1 + 2 + 3 * 2);
    }

    #[test]
    fn test_highlight_policy() {
        let graph = Graph::build(["A", "B", "C"], ["A-B"]).unwrap();
        let cmds = draw(&graph, &["B"]);
        assert_eq!(fill_colors(&cmds), vec!["#9ad0d3", "#ffcc00", "#9ad0d3"]);
    }

    #[test]
    fn test_label_is_offset_from_center() {
        let graph = Graph::build(["A"], Vec::<&str>::new()).unwrap();
        let cmds = draw(&graph, &[]);
        let (center, at) = match (&cmds[1], &cmds[2]) {
            (DrawCommand::FillCircle { center, .. }, DrawCommand::Text { at, text, .. }) => {
                assert_eq!(text, "A");
                (*center, *at)
            }
            other => panic!("unexpected commands {other:?}"),
        };
        assert_eq!(at, center.offset(-5.0, 5.0));
    }

    #[test]
    fn test_empty_graph_only_clears() {
        let cmds = draw(&Graph::default(), &[]);
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_last_frame() {
        let mut rec = CommandRecorder::new();
        rec.clear(1.0, 1.0);
        rec.text("x", Point { x: 0.0, y: 0.0 }, "#000");
        rec.clear(2.0, 2.0);
        rec.text("y", Point { x: 0.0, y: 0.0 }, "#000");
        assert_eq!(rec.last_frame().len(), 2);
        assert_eq!(rec.commands().len(), 4);
    }
}
