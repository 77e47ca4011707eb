/// Direction of a manual navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Prev,
}

/// What a click on the widget chrome maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Nav(NavDirection),
    GoTo(usize),
    TogglePlayPause,
}
