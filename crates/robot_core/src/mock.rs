//! Controller double for display tests: remembers which handle was called last and
//! does nothing else.

use shared::domain::{Coordinate, Orientation};

use crate::{Controller, ReportCallback};

#[derive(Debug, Default)]
pub struct MockController {
    last_handle_called: Option<&'static str>,
}

impl MockController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_handle_called(&self) -> Option<&'static str> {
        self.last_handle_called
    }
}

impl Controller for MockController {
    fn on_place(&mut self, _position: Coordinate, _orientation: Orientation) {
        self.last_handle_called = Some("on_place");
    }

    fn on_move(&mut self) {
        self.last_handle_called = Some("on_move");
    }

    fn on_left(&mut self) {
        self.last_handle_called = Some("on_left");
    }

    fn on_right(&mut self) {
        self.last_handle_called = Some("on_right");
    }

    fn on_report(&mut self) {
        self.last_handle_called = Some("on_report");
    }

    fn on_robot(&mut self, _reference: i64) {
        self.last_handle_called = Some("on_robot");
    }

    fn set_on_report_callback(&mut self, _callback: ReportCallback) {}
}
