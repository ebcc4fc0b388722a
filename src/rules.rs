use serde::Deserialize;

use crate::orientation::Orientation;

/// How the capture search picks among several chains reaching the same square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaptureChoice {
    /// Most captures wins; equal lengths resolve to the first chain discovered.
    #[default]
    Longest,
    /// First chain discovered, whatever its length.
    FirstFound,
}

/// Rule variant a game is played under. Fixed for the lifetime of a `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rules {
    pub orientation: Orientation,
    pub capture_choice: CaptureChoice,
    /// Reject chains that stop while another capture is available from the landing square.
    pub mandatory_continuation: bool,
    /// Accept a same-row step to an adjacent column as a plain move.
    pub sideways_step: bool,
}

impl Rules {
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_capture_choice(mut self, choice: CaptureChoice) -> Self {
        self.capture_choice = choice;
        self
    }

    pub fn with_mandatory_continuation(mut self, enabled: bool) -> Self {
        self.mandatory_continuation = enabled;
        self
    }

    pub fn with_sideways_step(mut self, enabled: bool) -> Self {
        self.sideways_step = enabled;
        self
    }
}
