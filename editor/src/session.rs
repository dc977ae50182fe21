use std::sync::mpsc::{channel, Receiver, Sender};

use nalgebra_glm::DVec3;
use nurbs::{ControlPoint, NurbsCurve};

use crate::{error::Result, text};

/// Highest degree the editor offers
pub const MAX_DEGREE: usize = 10;

/// Notifications sent to every view after a successful edit
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    KnotVectorChanged(Vec<f64>),
    ResolutionChanged(usize),
    ControlPointMoved {
        index: usize,
        old: ControlPoint,
        new: ControlPoint,
    },
    /// The control polygon changed size or was rebuilt
    CurveChanged,
}

/// A discrete user edit, as delivered by the UI
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    MovePoint { index: usize, x: f64, y: f64 },
    SetPoint { index: usize, point: ControlPoint },
    SetWeight { index: usize, weight: f64 },
    SetDegree(usize),
    /// Knot vector typed as text, e.g. `0, 0, 0.5, 1, 1`
    ApplyKnots(String),
    /// Knot value typed as text
    InsertKnot(String),
    RemovePoint(usize),
    SetResolution(usize),
}

/// Owns the curve being edited and fans change events out to subscribers.
/// Commands are applied one at a time; a failed command changes nothing and
/// notifies nobody.
pub struct Session {
    curve: NurbsCurve,
    resolution: usize,
    subscribers: Vec<Sender<Event>>,
}

impl Session {
    pub fn new(curve: NurbsCurve, resolution: usize) -> Self {
        Self {
            curve,
            resolution,
            subscribers: vec![],
        }
    }

    pub fn curve(&self) -> &NurbsCurve {
        &self.curve
    }

    /// Number of polyline segments drawn per redraw
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Registers a new view.  Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> Receiver<Event> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self, event: Event) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn publish_knots(&mut self) {
        let knots = self.curve.knots().as_slice().to_vec();
        self.publish(Event::KnotVectorChanged(knots));
        self.publish(Event::CurveChanged);
    }

    pub fn apply(&mut self, command: Command) -> Result<()> {
        log::debug!("{:?}", command);
        match command {
            Command::MovePoint { index, x, y } => {
                let old = self.curve.move_control_point(index, x, y)?;
                self.point_moved(index, old);
            }
            Command::SetPoint { index, point } => {
                let old = self.curve.set_control_point(index, point)?;
                self.point_moved(index, old);
            }
            Command::SetWeight { index, weight } => {
                let old = self.curve.set_weight(index, weight)?;
                self.point_moved(index, old);
            }
            Command::SetDegree(degree) => {
                self.curve.set_degree(degree.clamp(1, MAX_DEGREE))?;
                self.publish_knots();
            }
            Command::ApplyKnots(input) => {
                self.curve.set_knots(text::parse_knots(&input)?)?;
                self.publish_knots();
            }
            Command::InsertKnot(input) => {
                self.curve.insert_knot(text::parse_number(&input)?)?;
                self.publish_knots();
            }
            Command::RemovePoint(index) => {
                self.curve.remove_control_point(index)?;
                self.publish_knots();
            }
            Command::SetResolution(resolution) => {
                self.resolution = resolution;
                self.publish(Event::ResolutionChanged(resolution));
            }
        }
        Ok(())
    }

    fn point_moved(&mut self, index: usize, old: ControlPoint) {
        let new = self.curve.control_points()[index];
        self.publish(Event::ControlPointMoved { index, old, new });
    }

    /// The polyline a renderer would draw at the current resolution
    pub fn polyline(&self) -> Vec<DVec3> {
        self.curve.samples(self.resolution).collect()
    }
}
