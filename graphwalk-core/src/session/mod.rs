// Session state and animation driver.
//
// A Session owns everything the page used to keep in globals: the graph,
// node positions, the visited sequence and the active run. The host hands
// it three capabilities:
// - Surface: where frames are drawn
// - LogSink: append-only user log
// - Scheduler: arms a recurring tick that calls back into `tick`
//
// Two states, Idle and Running. Any build, reset or new selection cancels
// the active run before doing anything else, so two animations never share
// the visited sequence.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::layout::{layout_graph, Positions, Viewport};
use crate::output::FrameOutput;
use crate::render::{render, CommandRecorder, Surface};
use crate::traversal::{Algorithm, Step, Traversal};

/// Append-only line log shown to the user.
pub trait LogSink {
    fn append(&mut self, line: &str);
    fn clear(&mut self);
}

impl LogSink for Vec<String> {
    fn append(&mut self, line: &str) {
        self.push(line.to_string());
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

/// Handle to a recurring host tick. `cancel` must be safe to call twice.
pub trait TaskHandle {
    fn cancel(&mut self);
}

/// Host timer primitive. Each armed tick calls [`Session::tick`] every
/// `interval_ms` until its handle is cancelled.
pub trait Scheduler {
    fn every(&mut self, interval_ms: u32) -> Box<dyn TaskHandle>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running,
}

struct Run {
    traversal: Traversal,
    handle: Box<dyn TaskHandle>,
}

pub struct Session<S, L, T> {
    config: SessionConfig,
    graph: Graph,
    positions: Positions,
    visited: Vec<String>,
    run: Option<Run>,
    surface: S,
    log: L,
    scheduler: T,
}

impl<S: Surface, L: LogSink, T: Scheduler> Session<S, L, T> {
    pub fn new(config: SessionConfig, surface: S, log: L, scheduler: T) -> Self {
        Self {
            config,
            graph: Graph::default(),
            positions: Positions::new(),
            visited: Vec::new(),
            run: None,
            surface,
            log,
            scheduler,
        }
    }

    /// Rebuild the graph from the two text fields.
    ///
    /// On error the previous graph and positions stay in place and the
    /// error is written to the log.
    pub fn build(&mut self, nodes_text: &str, edges_text: &str) -> Result<()> {
        self.cancel_run();
        self.log.clear();

        let graph = match Graph::parse(nodes_text, edges_text) {
            Ok(graph) => graph,
            Err(e) => {
                warn!(error = %e, "graph rejected");
                self.log.append(&format!("Error: {e}"));
                return Err(e.into());
            }
        };

        self.positions = layout_graph(&graph, &self.config.viewport, &self.config.layout);
        self.graph = graph;
        self.visited.clear();
        self.draw();
        self.log.append("Graph loaded");
        Ok(())
    }

    /// Stop any run, drop the highlight and redraw.
    pub fn reset(&mut self) {
        self.cancel_run();
        self.visited.clear();
        self.draw();
        self.log.append("Graph reset");
    }

    /// Reset, then start animating `algorithm` from `start`.
    pub fn select(&mut self, algorithm: Algorithm, start: &str) -> Result<()> {
        self.reset();
        if algorithm == Algorithm::Demo {
            self.log.append("Advanced algorithm: demo animation");
        }

        let traversal = match Traversal::new(algorithm, &self.graph, start) {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, "traversal rejected");
                self.log.append(&format!("Error: {e}"));
                return Err(Error::from(e));
            }
        };

        self.log.append(&format!("Running {algorithm}"));
        let handle = self.scheduler.every(self.config.tick_interval_ms);
        self.run = Some(Run { traversal, handle });
        debug!(%algorithm, "animation started");
        Ok(())
    }

    /// Advance the active run by one step. A tick with no active run is a
    /// no-op, which also covers ticks that land after a cancellation.
    pub fn tick(&mut self) -> AnimationState {
        let Some(run) = self.run.as_mut() else {
            return AnimationState::Idle;
        };

        match run.traversal.advance(&self.graph) {
            Step::Exhausted => {
                let algorithm = run.traversal.algorithm();
                self.cancel_run();
                self.log.append(&format!("{algorithm} finished"));
                debug!(%algorithm, visited = self.visited.len(), "animation finished");
                AnimationState::Idle
            }
            Step::Skip => AnimationState::Running,
            Step::Visit(node) => {
                self.log.append(&format!("Visit: {node}"));
                self.visited.push(node);
                self.draw();
                AnimationState::Running
            }
        }
    }

    /// Cancel the active run without touching the log or the frame.
    pub fn stop(&mut self) {
        self.cancel_run();
    }

    /// Change the drawing area, re-layout and redraw.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.config.viewport = viewport;
        self.positions = layout_graph(&self.graph, &self.config.viewport, &self.config.layout);
        self.draw();
    }

    fn cancel_run(&mut self) {
        if let Some(mut run) = self.run.take() {
            run.handle.cancel();
            debug!(algorithm = %run.traversal.algorithm(), "animation cancelled");
        }
    }

    fn draw(&mut self) {
        let highlighted: HashSet<&str> = self.visited.iter().map(String::as_str).collect();
        render(
            &self.graph,
            &self.positions,
            &highlighted,
            &self.config.viewport,
            &self.config.style,
            &mut self.surface,
        );
    }

    /// The current frame as draw commands, independent of the surface.
    pub fn frame(&self) -> FrameOutput {
        let highlighted: HashSet<&str> = self.visited.iter().map(String::as_str).collect();
        let mut recorder = CommandRecorder::new();
        render(
            &self.graph,
            &self.positions,
            &highlighted,
            &self.config.viewport,
            &self.config.style,
            &mut recorder,
        );
        FrameOutput {
            commands: recorder.take(),
            visited: self.visited.clone(),
            running: self.is_running(),
        }
    }

    pub fn state(&self) -> AnimationState {
        if self.run.is_some() {
            AnimationState::Running
        } else {
            AnimationState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingHandle(Rc<Cell<usize>>);

    impl TaskHandle for CountingHandle {
        fn cancel(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[derive(Default)]
    struct TestScheduler {
        armed: Vec<(u32, Rc<Cell<usize>>)>,
    }

    impl Scheduler for TestScheduler {
        fn every(&mut self, interval_ms: u32) -> Box<dyn TaskHandle> {
            let cancels = Rc::new(Cell::new(0));
            self.armed.push((interval_ms, cancels.clone()));
            Box::new(CountingHandle(cancels))
        }
    }

    type TestSession = Session<CommandRecorder, Vec<String>, TestScheduler>;

    fn session() -> TestSession {
        Session::new(SessionConfig::default(), CommandRecorder::new(), Vec::new(), TestScheduler::default())
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut s = session();
        assert_eq!(s.tick(), AnimationState::Idle);
        assert!(s.log().is_empty());
    }

    #[test]
    fn test_select_arms_scheduler_with_interval() {
        let mut s = session();
        s.build("A,B", "A-B").unwrap();
        s.select(Algorithm::Bfs, "A").unwrap();
        assert_eq!(s.state(), AnimationState::Running);
        assert_eq!(s.scheduler().armed.len(), 1);
        assert_eq!(s.scheduler().armed[0].0, 600);
    }

    #[test]
    fn test_finish_cancels_handle_once() {
        let mut s = session();
        s.build("A", "").unwrap();
        s.select(Algorithm::Dfs, "A").unwrap();
        assert_eq!(s.tick(), AnimationState::Running);
        assert_eq!(s.tick(), AnimationState::Idle);
        assert_eq!(s.tick(), AnimationState::Idle);
        assert_eq!(s.scheduler().armed[0].1.get(), 1);
        assert_eq!(s.log().last().map(String::as_str), Some("DFS finished"));
    }

    #[test]
    fn test_visit_redraws_with_highlight() {
        let mut s = session();
        s.build("A,B", "A-B").unwrap();
        s.select(Algorithm::Bfs, "A").unwrap();
        s.tick();
        let frame = s.frame();
        assert_eq!(frame.visited, ["A"]);
        assert!(frame.running);
        assert_eq!(s.surface().last_frame(), frame.commands.as_slice());
    }

    #[test]
    fn test_set_viewport_relayouts() {
        let mut s = session();
        s.build("A", "").unwrap();
        s.set_viewport(Viewport { width: 100.0, height: 100.0 });
        let a = s.positions()["A"];
        assert_eq!((a.x, a.y), (250.0, 50.0));
    }
}
