//! Scripted pointer and player input for headless runs.

use anyhow::Context;
use glam::Vec3;
use interactables_input::InputState;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct ScriptedInputFile {
    steps: Vec<ScriptedStep>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ScriptedStep {
    duration: f32,
    /// Cursor position in window pixels; `None` means the cursor is outside the window.
    #[serde(default)]
    cursor: Option<[f32; 2]>,
    /// Primary button held during this step.
    #[serde(default)]
    button: bool,
    /// Hold the player body here during this step.
    #[serde(default)]
    player_position: Option<[f32; 3]>,
}

/// Plays a timeline of pointer and player states into an [`InputState`].
pub struct ScriptedInputPlayer {
    steps: Vec<ScriptedStep>,
    index: usize,
    time_in_step: f32,
    finished: bool,
}

/// What the script asks for on one tick besides pointer input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScriptFrame {
    /// Where the player body should be, if the current step places it.
    pub player_position: Option<Vec3>,
}

impl ScriptedInputPlayer {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read input script {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("invalid input script {}", path.display()))
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Self> {
        let file: ScriptedInputFile = serde_json::from_str(contents)?;
        if file.steps.is_empty() {
            anyhow::bail!("scripted input file contains no steps");
        }
        if let Some(bad) = file
            .steps
            .iter()
            .position(|step| !step.duration.is_finite() || step.duration <= 0.0)
        {
            anyhow::bail!("step {bad} has a non-positive duration");
        }
        Ok(Self {
            steps: file.steps,
            index: 0,
            time_in_step: 0.0,
            finished: false,
        })
    }

    /// Whether the timeline has run past its last step.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Total scripted time in seconds.
    pub fn total_duration(&self) -> f32 {
        self.steps.iter().map(|step| step.duration).sum()
    }

    /// Advance by `dt` and apply the current step to `input`.
    ///
    /// Starts a new input frame, so button edges are derived from the previous tick.
    pub fn advance(&mut self, dt: f32, input: &mut InputState) -> ScriptFrame {
        input.begin_frame();

        self.time_in_step += dt;
        while self.index < self.steps.len() && self.time_in_step >= self.steps[self.index].duration
        {
            self.time_in_step -= self.steps[self.index].duration;
            if self.index + 1 < self.steps.len() {
                self.index += 1;
            } else {
                self.time_in_step = 0.0;
                self.finished = true;
                break;
            }
        }

        let step = self.steps.get(self.index).cloned().unwrap_or_default();
        step.apply(input);
        ScriptFrame {
            player_position: step.player_position.map(Vec3::from_array),
        }
    }
}

impl ScriptedStep {
    fn apply(&self, input: &mut InputState) {
        match self.cursor {
            Some([x, y]) => input.move_cursor(x, y),
            None => input.clear_cursor(),
        }
        if self.button {
            input.press_primary();
        } else if input.snapshot().held {
            input.release_primary();
        }
    }
}
