//! Motion gate - the reduced-motion preference
//!
//! Resolved once at startup from the environment and the display settings.
//! When set, carousels jump instead of easing, the floating tools stay put,
//! reveal items are shown immediately and scrolling is instant.

use super::Settings;

/// Environment variable carrying the platform reduced-motion preference
pub const REDUCE_MOTION_ENV: &str = "CAUS_REDUCE_MOTION";

/// Process-wide reduced-motion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionGate {
    reduced: bool,
}

impl MotionGate {
    /// Gate with animations allowed
    pub const OPEN: Self = Self { reduced: false };
    /// Gate with non-essential animation suppressed
    pub const REDUCED: Self = Self { reduced: true };

    /// Resolve the gate from the environment, falling back to settings
    ///
    /// An explicit environment value wins over the settings file, so the
    /// desktop session can force either behaviour.
    pub fn detect(settings: &Settings) -> Self {
        let env_value = std::env::var(REDUCE_MOTION_ENV).ok();
        let gate = Self::resolve(env_value.as_deref(), settings);
        tracing::info!(
            "Motion gate resolved: reduced={} (env={:?}, reduce_motion={}, power_saving={})",
            gate.reduced,
            env_value,
            settings.display.reduce_motion,
            settings.display.power_saving_mode
        );
        gate
    }

    fn resolve(env_value: Option<&str>, settings: &Settings) -> Self {
        let reduced = env_value.and_then(parse_flag).unwrap_or(
            settings.display.reduce_motion || settings.display.power_saving_mode,
        );
        if reduced { Self::REDUCED } else { Self::OPEN }
    }

    /// True when non-essential animation must be suppressed
    pub fn is_set(&self) -> bool {
        self.reduced
    }

    pub fn allows_animation(&self) -> bool {
        !self.reduced
    }
}

/// Parse a boolean-ish environment value
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "reduce" => Some(true),
        "0" | "false" | "no" | "off" | "no-preference" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" Reduce "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("no-preference"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_env_overrides_settings() {
        let mut settings = Settings::default();
        settings.display.reduce_motion = true;
        assert!(!MotionGate::resolve(Some("0"), &settings).is_set());

        settings.display.reduce_motion = false;
        assert!(MotionGate::resolve(Some("true"), &settings).is_set());
    }

    #[test]
    fn test_settings_fallback() {
        let mut settings = Settings::default();
        assert!(MotionGate::resolve(None, &settings).allows_animation());

        settings.display.power_saving_mode = true;
        assert!(MotionGate::resolve(None, &settings).is_set());

        // Unparseable env values are ignored
        settings.display.power_saving_mode = false;
        assert!(!MotionGate::resolve(Some("sometimes"), &settings).is_set());
    }
}
