use druid::Data;

/// Window-level state shared with druid
#[derive(Clone, Data)]
pub struct AppState {
    /// Show the diagnostics overlay
    pub debug: bool,
}
