//! Mouse hit testing for the picker view.
//!
//! The view registers a region for everything the pointer can touch while it
//! renders (backdrop, card, wheel columns, buttons). Mouse events then look up
//! the topmost region under the pointer that handles that kind of event.
//!
//! # Example
//!
//! ```ignore
//! // During render
//! registry.register(InteractiveRegion::wheel(AxisKind::Month, column.into()));
//!
//! // On a mouse press
//! let action = registry.handle_click(mouse.column, mouse.row);
//! ```

use crate::app::ClickRegion;
use crate::events::Action;
use crate::picker::AxisKind;

/// Priority of the picker card and its controls over the backdrop.
pub const PICKER_PRIORITY: i32 = 10;

/// One hit-test target.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Name used in logs
    pub id: &'static str,
    pub bounds: ClickRegion,
    /// Action for a left press, if the region takes presses
    pub on_press: Option<Action>,
    /// Wheel that scroll events over this region step
    pub scrolls: Option<AxisKind>,
    /// Overlapping regions resolve to the highest priority
    pub priority: i32,
}

impl InteractiveRegion {
    /// A region that only reacts to presses.
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_press: Some(action),
            scrolls: None,
            priority: 0,
        }
    }

    /// A wheel column: press starts a drag, scroll steps the wheel.
    ///
    /// The press action carries a placeholder `y`; the mouse handler fills in
    /// the pointer position.
    pub fn wheel(axis: AxisKind, bounds: ClickRegion) -> Self {
        Self {
            id: axis.label(),
            bounds,
            on_press: Some(Action::GestureStart { axis, y: 0.0 }),
            scrolls: Some(axis),
            priority: PICKER_PRIORITY,
        }
    }

    /// Swallow presses so they don't reach whatever is underneath.
    pub fn blocker(id: &'static str, bounds: ClickRegion, priority: i32) -> Self {
        Self::clickable(id, bounds, Action::None).with_priority(priority)
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }

    fn scroll_action(&self, delta: i32) -> Option<Action> {
        self.scrolls.map(|axis| Action::ScrollAxis { axis, delta })
    }
}

/// Regions registered by the last render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every region. Called at the top of each render.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Shorthand for a priority-0 press target.
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Action of the highest-priority region at (x, y) that `handler` accepts.
    ///
    /// Ties go to the region registered last, which is the one drawn on top.
    fn resolve(
        &self,
        x: u16,
        y: u16,
        handler: impl Fn(&InteractiveRegion) -> Option<Action>,
    ) -> Action {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| handler(r).map(|action| (r.priority, action)))
            .max_by_key(|(priority, _)| *priority)
            .map(|(_, action)| action)
            .unwrap_or(Action::None)
    }

    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.resolve(x, y, |r| r.on_press.clone())
    }

    /// Scroll wheel up over (x, y): one notch towards the start of a wheel.
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.resolve(x, y, |r| r.scroll_action(-1))
    }

    /// Scroll wheel down over (x, y): one notch towards the end of a wheel.
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.resolve(x, y, |r| r.scroll_action(1))
    }
}
