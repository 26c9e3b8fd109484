//! Wall-clock and timezone settings

pub struct ClockConfig {
    /// Prefix shown in front of the top bar clock
    pub label: &'static str,
    /// Frankfurt offset from UTC outside daylight saving
    pub standard_offset_hours: i32,
    /// The `convert_time` tool always converts into this zone
    pub converter_target_offset_hours: i32,
    /// Zone assumed when `convert_time` is given a bare time
    pub converter_default_zone: &'static str,
    /// Published time of the next daily recap, Frankfurt time
    pub next_update: &'static str,
    /// Clock repaint cadence
    pub tick_secs: u64,
}

pub const CLOCK: ClockConfig = ClockConfig {
    label: "FRA",
    standard_offset_hours: 1,
    converter_target_offset_hours: 1,
    converter_default_zone: "GMT+1",
    next_update: "07:00",
    tick_secs: 1,
};
