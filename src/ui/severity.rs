/// Usage below this is `Low`
pub const LOW_THRESHOLD: f32 = 30.0;
/// Usage above this is `High`
pub const HIGH_THRESHOLD: f32 = 70.0;

/// Color-coding bucket for a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityBand {
    Low,
    Normal,
    High,
}

impl SeverityBand {
    pub fn of(percent: f32) -> Self {
        if percent < LOW_THRESHOLD {
            SeverityBand::Low
        } else if percent > HIGH_THRESHOLD {
            SeverityBand::High
        } else {
            SeverityBand::Normal
        }
    }
}
