use shared::{
    domain::{Coordinate, Orientation, RobotId},
    protocol::{Command, RobotDescription},
};
use tracing::debug;

mod mock;
pub use mock::MockController;

/// Observer invoked synchronously with the robots captured by a report.
pub type ReportCallback = Box<dyn FnMut(Vec<RobotDescription>)>;

/// Command handles a display drives.
///
/// Commands that cannot be applied (off-grid placement or move, anything before the
/// first placement) are ignored; implementations never surface an error for them.
pub trait Controller {
    fn on_place(&mut self, position: Coordinate, orientation: Orientation);
    fn on_move(&mut self);
    fn on_left(&mut self);
    fn on_right(&mut self);
    fn on_report(&mut self);
    fn on_robot(&mut self, reference: i64);
    /// Replaces any previously registered callback.
    fn set_on_report_callback(&mut self, callback: ReportCallback);
}

/// Routes a parsed command to the matching controller handle.
pub fn dispatch_command<C: Controller + ?Sized>(controller: &mut C, command: Command) {
    debug!(handle = command.handle_name(), "dispatching command");
    match command {
        Command::Place {
            position,
            orientation,
        } => controller.on_place(position, orientation),
        Command::Move => controller.on_move(),
        Command::Left => controller.on_left(),
        Command::Right => controller.on_right(),
        Command::Report => controller.on_report(),
        Command::Robot(reference) => controller.on_robot(reference),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Coordinate,
    pub orientation: Orientation,
}

/// Single-robot controller for the square table.
#[derive(Default)]
pub struct TableController {
    placement: Option<Placement>,
    on_report: Option<ReportCallback>,
}

impl TableController {
    /// Id given to the one robot this controller places.
    pub const ROBOT_ID: RobotId = RobotId(1);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    fn describe(&self) -> Option<RobotDescription> {
        self.placement.map(|placement| RobotDescription {
            id: Self::ROBOT_ID,
            position: placement.position,
            orientation: placement.orientation,
        })
    }
}

impl Controller for TableController {
    fn on_place(&mut self, position: Coordinate, orientation: Orientation) {
        if !position.is_on_grid() {
            debug!(%position, %orientation, "ignoring off-grid placement");
            return;
        }
        self.placement = Some(Placement {
            position,
            orientation,
        });
    }

    fn on_move(&mut self) {
        let Some(placement) = self.placement.as_mut() else {
            debug!("ignoring move before placement");
            return;
        };
        match placement
            .position
            .offset(placement.orientation.delta())
            .filter(Coordinate::is_on_grid)
        {
            Some(next) => placement.position = next,
            None => debug!(
                position = %placement.position,
                orientation = %placement.orientation,
                "ignoring move off the grid"
            ),
        }
    }

    fn on_left(&mut self) {
        match self.placement.as_mut() {
            Some(placement) => placement.orientation = placement.orientation.left(),
            None => debug!("ignoring left before placement"),
        }
    }

    fn on_right(&mut self) {
        match self.placement.as_mut() {
            Some(placement) => placement.orientation = placement.orientation.right(),
            None => debug!("ignoring right before placement"),
        }
    }

    fn on_report(&mut self) {
        // Nothing placed means nothing to report; the callback stays silent.
        let Some(description) = self.describe() else {
            debug!("ignoring report before placement");
            return;
        };
        if let Some(callback) = self.on_report.as_mut() {
            callback(vec![description]);
        }
    }

    fn on_robot(&mut self, reference: i64) {
        if self.is_placed() && RobotId(reference) == Self::ROBOT_ID {
            debug!(robot = reference, "robot selected");
        } else {
            debug!(robot = reference, "ignoring selection of unknown robot");
        }
    }

    fn set_on_report_callback(&mut self, callback: ReportCallback) {
        self.on_report = Some(callback);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
