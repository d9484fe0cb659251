use std::collections::{BTreeMap, BTreeSet};

use debugdraw_common::FrameIndex;

/// Default name of the action that shows and hides the overlay.
pub const TOGGLE_ACTION: &str = "debug_toggle";

/// Something the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Flip overlay visibility.
    ToggleOverlay,
    /// Unbound or ignored input.
    Noop,
}

/// Edge-triggered action query supplied by the host.
pub trait ActionInput {
    /// True only on the frame the named action went from released to pressed.
    fn is_action_just_pressed(&self, action: &str) -> bool;
}

/// Binds host action names to overlay actions.
#[derive(Debug, Clone)]
pub struct ActionMap {
    bindings: BTreeMap<String, Action>,
}

impl ActionMap {
    /// Map with no bindings at all.
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Map with a single toggle binding.
    pub fn with_toggle(name: impl Into<String>) -> Self {
        let mut map = Self::empty();
        map.bind(name, Action::ToggleOverlay);
        map
    }

    pub fn bind(&mut self, name: impl Into<String>, action: Action) {
        let name = name.into();
        tracing::debug!(%name, ?action, "binding input action");
        self.bindings.insert(name, action);
    }

    pub fn unbind(&mut self, name: &str) -> Option<Action> {
        self.bindings.remove(name)
    }

    /// Action bound to `name`, or `Noop`.
    pub fn resolve(&self, name: &str) -> Action {
        self.bindings.get(name).copied().unwrap_or(Action::Noop)
    }

    /// Every host action name bound to `action`.
    pub fn names_for(&self, action: Action) -> impl Iterator<Item = &str> {
        self.bindings
            .iter()
            .filter(move |(_, a)| **a == action)
            .map(|(n, _)| n.as_str())
    }

    /// True when any name bound to `action` was just pressed.
    pub fn just_triggered(&self, action: Action, input: &dyn ActionInput) -> bool {
        self.names_for(action)
            .any(|name| input.is_action_just_pressed(name))
    }
}

impl Default for ActionMap {
    fn default() -> Self {
        Self::with_toggle(TOGGLE_ACTION)
    }
}

/// Input that never reports a press.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl ActionInput for NoInput {
    fn is_action_just_pressed(&self, _action: &str) -> bool {
        false
    }
}

/// Replays presses on chosen frames.
///
/// Move it forward with [`set_frame`](Self::set_frame) before each poll.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    presses: BTreeMap<FrameIndex, BTreeSet<String>>,
    frame: FrameIndex,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to be just-pressed on `frame`.
    pub fn press_on(mut self, frame: FrameIndex, action: impl Into<String>) -> Self {
        self.presses.entry(frame).or_default().insert(action.into());
        self
    }

    pub fn set_frame(&mut self, frame: FrameIndex) {
        self.frame = frame;
    }

    pub fn frame(&self) -> FrameIndex {
        self.frame
    }
}

impl ActionInput for ScriptedInput {
    fn is_action_just_pressed(&self, action: &str) -> bool {
        self.presses
            .get(&self.frame)
            .is_some_and(|names| names.contains(action))
    }
}
