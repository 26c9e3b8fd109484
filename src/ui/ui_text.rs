//! Every user-facing string in one place.

pub struct UiText {
    // --- Top bar ---
    pub app_title_prefix: &'static str,
    pub app_title_suffix: &'static str,
    pub app_subtitle: &'static str,
    pub export_button: &'static str,
    pub export_busy: &'static str,
    pub live_indicator: &'static str,

    // --- Header ---
    pub weekly_heading: &'static str,
    pub daily_heading: &'static str,
    pub weekly_toggle: &'static str,
    pub daily_toggle: &'static str,

    // --- Weekly view ---
    pub market_overview_heading: &'static str,
    pub weekly_overview_blurb: &'static str,
    pub swing_long_heading: &'static str,
    pub swing_short_heading: &'static str,
    pub swing_long_empty: &'static str,
    pub swing_short_empty: &'static str,

    // --- Daily view ---
    pub risk_sentiment_label: &'static str,
    pub focus_label: &'static str,
    pub risk_environment_label: &'static str,
    pub next_update_label: &'static str,
    pub market_focus_heading: &'static str,
    pub high_conviction_heading: &'static str,
    pub high_conviction_subtitle: &'static str,
    pub high_conviction_empty: &'static str,
    pub intraday_heading: &'static str,
    pub intraday_subtitle: &'static str,
    pub intraday_empty: &'static str,
    pub red_folder_heading: &'static str,
    pub red_folder_empty: &'static str,

    // --- Cards ---
    pub top_headlines_label: &'static str,
    pub market_reaction_label: &'static str,
    pub key_events_label: &'static str,
    pub alignment_suffix: &'static str,
    pub no_cards: &'static str,

    // --- Footer ---
    pub footer_copyright: &'static str,
    pub footer_sources: &'static str,
    pub footer_status: &'static str,

    // --- Help / alerts ---
    pub help_title: &'static str,
    pub help_intro: &'static str,
    pub help_weekly: &'static str,
    pub help_daily: &'static str,
    pub help_filter: &'static str,
    pub help_export: &'static str,
    pub help_toggle: &'static str,
    pub alert_title: &'static str,
    pub alert_dismiss: &'static str,
    pub export_saved_prefix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title_prefix: "TUDOR",
    app_title_suffix: "_DASHBOARD",
    app_subtitle: "WEEKLY BIAS DASHBOARD",
    export_button: "📷 EXPORT DASHBOARD",
    export_busy: "⟳ EXPORTING…",
    live_indicator: "LIVE",

    weekly_heading: "WEEKLY BIAS",
    daily_heading: "DAILY RECAP",
    weekly_toggle: "WEEKLY VIEW",
    daily_toggle: "DAILY VIEW",

    market_overview_heading: "Market Overview",
    weekly_overview_blurb: "Global markets navigating complex landscape of geopolitical tension and shifting monetary policy expectations. Key focus remains on US economic data and central bank rhetoric.",
    swing_long_heading: "Swing Watchlist LONG",
    swing_short_heading: "Swing Watchlist SHORT",
    swing_long_empty: "No LONG setups available.",
    swing_short_empty: "No SHORT setups available.",

    risk_sentiment_label: "RISK SENTIMENT",
    focus_label: "FOCUS",
    risk_environment_label: "RISK ENVIRONMENT",
    next_update_label: "NEXT UPDATE",
    market_focus_heading: "MARKET FOCUS",
    high_conviction_heading: "High Conviction Setups",
    high_conviction_subtitle: "Based on Weekly & Daily Bias Alignment",
    high_conviction_empty: "No strong alignment setups found currently.",
    intraday_heading: "Intraday Trades",
    intraday_subtitle: "(Base Hits)",
    intraday_empty: "No clear divergence for intraday setups.",
    red_folder_heading: "Red Folder News",
    red_folder_empty: "No high impact events remaining today.",

    top_headlines_label: "TOP HEADLINES",
    market_reaction_label: "MARKET REACTION",
    key_events_label: "KEY EVENTS",
    alignment_suffix: "Match",
    no_cards: "No currencies match this filter.",

    footer_copyright: "© 2026 TUDOR_DASHBOARD. Internal Use Only.",
    footer_sources: "Data sourced from Prime Market Terminal & Bloomberg.",
    footer_status: "System Operational",

    help_title: "⌨ Keyboard Shortcuts",
    help_intro: "Press any key to execute the command:",
    help_weekly: "Switch to the weekly view",
    help_daily: "Switch to the daily view",
    help_filter: "Cycle the bias filter",
    help_export: "Export the dashboard as PNG",
    help_toggle: "Toggle this help panel",
    alert_title: "Export failed",
    alert_dismiss: "OK",
    export_saved_prefix: "Saved",
};
