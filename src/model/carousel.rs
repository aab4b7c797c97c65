//! Carousel interaction controller
//!
//! Turns drag samples into state changes. Two phases: `Idle` and `Dragging`.
//! While dragging, the latest absolute translation becomes the displacement;
//! on release the translation is compared against a fixed commit threshold
//! and the active index moves at most one step, clamped to the item range.

use super::ui::UiState;
use std::fmt;

/// Minimum release distance, in layout units, that commits a page change
pub const COMMIT_THRESHOLD: f32 = 50.0;

/// One pointer sample: total horizontal travel since the gesture began
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub translation_x: f32,
}

impl DragSample {
    pub fn new(translation_x: f32) -> Self {
        Self { translation_x }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// A committed move of the active index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub from: usize,
    pub to: usize,
}

impl PageChange {
    pub fn is_forward(&self) -> bool {
        self.to > self.from
    }
}

/// Side effect fired once per committed page change (haptics, bell, flash)
pub trait PageFeedback {
    fn page_changed(&mut self, change: PageChange);
}

impl<F> PageFeedback for F
where
    F: FnMut(PageChange),
{
    fn page_changed(&mut self, change: PageChange) {
        self(change)
    }
}

/// Feedback that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl PageFeedback for NoFeedback {
    fn page_changed(&mut self, _change: PageChange) {}
}

/// The single writer of the shared carousel state
pub struct CarouselController {
    state: UiState,
    item_count: usize,
    phase: DragPhase,
    feedback: Box<dyn PageFeedback>,
}

impl fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselController")
            .field("state", &self.state)
            .field("item_count", &self.item_count)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl CarouselController {
    pub fn new(state: UiState, item_count: usize) -> Self {
        let controller = Self {
            state,
            item_count,
            phase: DragPhase::Idle,
            feedback: Box::new(NoFeedback),
        };
        controller.clamp_active_index();
        controller
    }

    /// Install the page change side effect
    pub fn with_feedback(mut self, feedback: impl PageFeedback + 'static) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Read handle onto the state this controller writes
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Change the number of cards, pulling the active index back into range
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.clamp_active_index();
    }

    /// A move event. The first one of a gesture starts the drag.
    pub fn on_drag_update(&mut self, sample: DragSample) {
        if self.phase == DragPhase::Idle {
            tracing::debug!("drag started at index {}", self.state.active_index());
            self.phase = DragPhase::Dragging;
        }
        self.state.set_drag_displacement(sample.translation_x);
    }

    /// Gesture end (or interruption) with the final translation.
    ///
    /// Also accepted while idle, which is how keyboard adapters deliver a
    /// complete swipe in one call.
    pub fn on_drag_end(&mut self, sample: DragSample) -> Option<PageChange> {
        self.phase = DragPhase::Idle;
        self.state.set_drag_displacement(0.0);

        let from = self.state.active_index();
        let to = if sample.translation_x < -COMMIT_THRESHOLD && from + 1 < self.item_count {
            from + 1
        } else if sample.translation_x > COMMIT_THRESHOLD && from > 0 {
            from - 1
        } else {
            tracing::debug!(
                "drag ended at {:.1} without page change (index {})",
                sample.translation_x,
                from
            );
            return None;
        };

        self.state.set_active_index(to);
        let change = PageChange { from, to };
        tracing::info!("page changed {} -> {}", from, to);
        self.feedback.page_changed(change);
        Some(change)
    }

    fn clamp_active_index(&self) {
        let max = self.item_count.saturating_sub(1);
        if self.state.active_index() > max {
            self.state.set_active_index(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller_at(item_count: usize, index: usize) -> CarouselController {
        let state = UiState::new();
        state.set_active_index(index);
        CarouselController::new(state, item_count)
    }

    #[test]
    fn test_threshold_decisions() {
        let cases = [
            (-60.0, 4),
            (60.0, 2),
            (-10.0, 3),
            (10.0, 3),
            (-50.0, 3),
            (50.0, 3),
            (-50.5, 4),
            (50.5, 2),
        ];

        for (translation, expected) in cases {
            let mut controller = controller_at(10, 3);
            controller.on_drag_end(DragSample::new(translation));
            assert_eq!(
                controller.state().active_index(),
                expected,
                "translation {}",
                translation
            );
        }
    }

    #[test]
    fn test_upper_clamp() {
        let mut controller = controller_at(10, 9);
        assert_eq!(controller.on_drag_end(DragSample::new(-500.0)), None);
        assert_eq!(controller.state().active_index(), 9);
    }

    #[test]
    fn test_lower_clamp() {
        let mut controller = controller_at(10, 0);
        assert_eq!(controller.on_drag_end(DragSample::new(500.0)), None);
        assert_eq!(controller.state().active_index(), 0);
    }

    #[test]
    fn test_drag_update_replaces_displacement() {
        let mut controller = controller_at(5, 1);
        assert_eq!(controller.phase(), DragPhase::Idle);

        controller.on_drag_update(DragSample::new(-20.0));
        assert_eq!(controller.phase(), DragPhase::Dragging);
        assert_eq!(controller.state().drag_displacement(), -20.0);

        controller.on_drag_update(DragSample::new(-35.0));
        assert_eq!(controller.state().drag_displacement(), -35.0);

        controller.on_drag_update(DragSample::new(12.0));
        assert_eq!(controller.phase(), DragPhase::Dragging);
        assert_eq!(controller.state().drag_displacement(), 12.0);
    }

    #[test]
    fn test_drag_end_resets_displacement() {
        for translation in [-200.0, -51.0, -50.0, 0.0, 50.0, 51.0, 200.0] {
            let mut controller = controller_at(3, 1);
            controller.on_drag_update(DragSample::new(translation));
            controller.on_drag_end(DragSample::new(translation));
            assert_eq!(controller.state().drag_displacement(), 0.0);
            assert_eq!(controller.phase(), DragPhase::Idle);
        }
    }

    #[test]
    fn test_index_stays_in_bounds_for_any_sequence() {
        let translations = [-80.0, -80.0, 70.0, -200.0, -51.0, 0.0, 99.0, -60.0];
        for item_count in 1..=6 {
            let mut controller = controller_at(item_count, 0);
            // Walk a long, mixed sequence built from the pattern above
            for step in 0..200 {
                let translation = translations[(step * 7 + item_count) % translations.len()];
                controller.on_drag_update(DragSample::new(translation / 2.0));
                controller.on_drag_end(DragSample::new(translation));
                assert!(controller.state().active_index() < item_count);
                assert_eq!(controller.state().drag_displacement(), 0.0);
            }
        }
    }

    #[test]
    fn test_feedback_fires_once_per_commit() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let changes_clone = Rc::clone(&changes);

        let mut controller = controller_at(3, 0)
            .with_feedback(move |change: PageChange| changes_clone.borrow_mut().push(change));

        controller.on_drag_end(DragSample::new(-70.0));
        controller.on_drag_end(DragSample::new(-70.0));
        // Clamped at the last card
        controller.on_drag_end(DragSample::new(-70.0));
        // Below threshold
        controller.on_drag_end(DragSample::new(40.0));
        controller.on_drag_end(DragSample::new(70.0));

        let changes = changes.borrow();
        assert_eq!(
            *changes,
            vec![
                PageChange { from: 0, to: 1 },
                PageChange { from: 1, to: 2 },
                PageChange { from: 2, to: 1 },
            ]
        );
        assert!(changes[0].is_forward());
        assert!(!changes[2].is_forward());
    }

    #[test]
    fn test_empty_carousel_never_moves() {
        let mut controller = controller_at(0, 0);
        assert_eq!(controller.on_drag_end(DragSample::new(-100.0)), None);
        assert_eq!(controller.on_drag_end(DragSample::new(100.0)), None);
        assert_eq!(controller.state().active_index(), 0);
    }

    #[test]
    fn test_set_item_count_clamps_index() {
        let mut controller = controller_at(10, 7);
        controller.set_item_count(4);
        assert_eq!(controller.state().active_index(), 3);

        controller.set_item_count(0);
        assert_eq!(controller.state().active_index(), 0);
    }

    #[test]
    fn test_new_clamps_out_of_range_state() {
        let controller = controller_at(2, 5);
        assert_eq!(controller.state().active_index(), 1);
    }
}
