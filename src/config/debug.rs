//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds stay quiet. Every check site is additionally gated by
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (view toggles, filter changes, shortcuts).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit dataset load summaries (source path, currency counts).
    pub print_data_load: bool,
    /// Emit screenshot / PNG export progress.
    pub print_export: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_state_serde: false,
    print_data_load: true,
    print_export: true,
    print_shutdown: false,
};
