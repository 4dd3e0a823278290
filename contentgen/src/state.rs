//! Paint state currently in effect in the generated stream.
//!
//! The tracker follows the stream's `q`/`Q` nesting and answers which
//! operators an object needs so that the state it requires is in effect. A
//! value that was never set inside the stream is known to be the device
//! default, so defaults are never written.

use crate::{
    page_object::{GeneralState, GraphState, LineCap, LineJoin, ObjectState},
    resource::GraphicsKey,
};

/// State setting operator, in the order they are written.
#[derive(Debug, Clone, PartialEq)]
pub enum StateOp {
    FillColor([u8; 3]),
    StrokeColor([u8; 3]),
    LineWidth(f32),
    LineCap(LineCap),
    LineJoin(LineJoin),
    Dash(Vec<f32>, f32),
}

#[derive(Debug, Clone, PartialEq)]
enum Tracked<T> {
    /// Nothing was written, the device default is in effect.
    Default,
    Set(T),
}

impl<T: PartialEq> Tracked<T> {
    fn is_set_to(&self, value: &T) -> bool {
        matches!(self, Tracked::Set(current) if current == value)
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    fill: Tracked<[u8; 3]>,
    stroke: Tracked<[u8; 3]>,
    line_width: Tracked<f32>,
    line_cap: Tracked<LineCap>,
    line_join: Tracked<LineJoin>,
    dash: Tracked<(Vec<f32>, f32)>,
    graphics: Tracked<GraphicsKey>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            fill: Tracked::Default,
            stroke: Tracked::Default,
            line_width: Tracked::Default,
            line_cap: Tracked::Default,
            line_join: Tracked::Default,
            dash: Tracked::Default,
            graphics: Tracked::Default,
        }
    }
}

#[derive(Debug, Default)]
pub struct StateTracker {
    current: Snapshot,
    saved: Vec<Snapshot>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `q`: the new scope starts with the state of the enclosing one.
    pub fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    /// `Q`: back to the state of the enclosing scope.
    pub fn restore(&mut self) {
        match self.saved.pop() {
            Some(snapshot) => self.current = snapshot,
            None => log::warn!("Unbalanced restore, resetting graphics state"),
        }
    }

    /// Nesting level of `q` scopes.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Forget everything, as at the start of a new stream.
    pub fn reset(&mut self) {
        self.current = Snapshot::default();
        self.saved.clear();
    }

    /// Operators that bring colours and line state to what `state` requires,
    /// recording them as written. Colours an object doesn't set are inherited.
    pub fn transition(&mut self, state: &ObjectState) -> Vec<StateOp> {
        let mut ops = Vec::new();
        let current = &mut self.current;

        if let Some(color) = state.color.fill {
            let bytes = color.to_bytes();
            if !current.fill.is_set_to(&bytes) {
                current.fill = Tracked::Set(bytes);
                ops.push(StateOp::FillColor(bytes));
            }
        }
        if let Some(color) = state.color.stroke {
            let bytes = color.to_bytes();
            if !current.stroke.is_set_to(&bytes) {
                current.stroke = Tracked::Set(bytes);
                ops.push(StateOp::StrokeColor(bytes));
            }
        }

        let graph = &state.graph;
        if update(&mut current.line_width, graph.line_width, GraphState::DEFAULT_LINE_WIDTH) {
            ops.push(StateOp::LineWidth(graph.line_width));
        }
        if update(&mut current.line_cap, graph.line_cap, LineCap::default()) {
            ops.push(StateOp::LineCap(graph.line_cap));
        }
        if update(&mut current.line_join, graph.line_join, LineJoin::default()) {
            ops.push(StateOp::LineJoin(graph.line_join));
        }
        let dash = (graph.dash_array.clone(), graph.dash_phase);
        if update(&mut current.dash, dash, (Vec::new(), 0.0)) {
            ops.push(StateOp::Dash(graph.dash_array.clone(), graph.dash_phase));
        }
        ops
    }

    /// Extended graphics state to select so that `general` is in effect, if
    /// the one in effect differs.
    pub fn transition_general(&mut self, general: &GeneralState) -> Option<GraphicsKey> {
        let key = GraphicsKey::new(general);
        if update(&mut self.current.graphics, key, GraphicsKey::new(&GeneralState::default())) {
            Some(key)
        } else {
            None
        }
    }
}

/// Record `value` and report whether it has to be written. A default value
/// needs no operator unless something else was written before.
fn update<T: PartialEq>(tracked: &mut Tracked<T>, value: T, default: T) -> bool {
    let in_effect = match tracked {
        Tracked::Default => &default,
        Tracked::Set(current) => &*current,
    };
    if *in_effect == value {
        return false;
    }
    *tracked = Tracked::Set(value);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_object::{BlendMode, Color};

    fn colored(fill: Color, stroke: Color) -> ObjectState {
        let mut state = ObjectState::default();
        state.color.fill = Some(fill);
        state.color.stroke = Some(stroke);
        state
    }

    #[test]
    fn defaults_need_no_operators() {
        let mut tracker = StateTracker::new();
        tracker.save();
        assert!(tracker.transition(&ObjectState::default()).is_empty());
        assert_eq!(tracker.transition_general(&GeneralState::default()), None);
    }

    #[test]
    fn operators_in_write_order() {
        let mut tracker = StateTracker::new();
        let mut state = colored(Color::rgb(0.5, 0.7, 0.35), Color::rgb(1.0, 0.9, 0.0));
        state.graph.line_width = 10.5;
        state.graph.line_cap = LineCap::Round;
        state.graph.line_join = LineJoin::Bevel;
        state.graph.dash_array = vec![3.0, 2.0];
        state.graph.dash_phase = 1.0;

        tracker.save();
        assert_eq!(
            tracker.transition(&state),
            vec![
                StateOp::FillColor([128, 179, 89]),
                StateOp::StrokeColor([255, 230, 0]),
                StateOp::LineWidth(10.5),
                StateOp::LineCap(LineCap::Round),
                StateOp::LineJoin(LineJoin::Bevel),
                StateOp::Dash(vec![3.0, 2.0], 1.0),
            ]
        );
    }

    #[test]
    fn unchanged_state_is_not_repeated() {
        let mut tracker = StateTracker::new();
        let state = colored(Color::rgb(0.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0));
        tracker.save();
        assert_eq!(tracker.transition(&state).len(), 2);
        assert!(tracker.transition(&state).is_empty());

        let mut thinner = state.clone();
        thinner.graph.line_width = 0.5;
        assert_eq!(tracker.transition(&thinner), vec![StateOp::LineWidth(0.5)]);
        // going back to the default width has to be written
        assert_eq!(tracker.transition(&state), vec![StateOp::LineWidth(1.0)]);
    }

    #[test]
    fn restore_forgets_scope_state() {
        let mut tracker = StateTracker::new();
        let state = colored(Color::rgb(1.0, 0.0, 0.0), Color::rgb(1.0, 0.0, 0.0));
        tracker.save();
        assert_eq!(tracker.transition(&state).len(), 2);
        tracker.restore();
        tracker.save();
        assert_eq!(tracker.transition(&state).len(), 2);
        assert_eq!(tracker.depth(), 1);
    }

    #[test]
    fn nested_scope_inherits() {
        let mut tracker = StateTracker::new();
        let state = colored(Color::rgb(1.0, 0.0, 0.0), Color::rgb(1.0, 0.0, 0.0));
        tracker.save();
        tracker.transition(&state);
        tracker.save();
        assert!(tracker.transition(&state).is_empty());
        tracker.restore();
        tracker.restore();
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn general_state_key() {
        let mut tracker = StateTracker::new();
        let translucent = GeneralState {
            fill_alpha: 0.5,
            stroke_alpha: 0.8,
            blend_mode: BlendMode::Normal,
        };
        tracker.save();
        let key = tracker.transition_general(&translucent).expect("alpha needs a graphics state");
        assert_eq!(key.fill_alpha(), 0.5);
        assert_eq!(tracker.transition_general(&translucent), None);
        let back = tracker.transition_general(&GeneralState::default()).expect("opaque again");
        assert!(back.is_default());
    }

    #[test]
    fn reset_clears_scopes() {
        let mut tracker = StateTracker::new();
        tracker.save();
        tracker.save();
        assert_eq!(tracker.depth(), 2);
        tracker.reset();
        assert_eq!(tracker.depth(), 0);
        tracker.restore();
        assert_eq!(tracker.depth(), 0);
    }
}
