//! Zoom factor shared by the map glyphs and the panel text.

pub const DEFAULT_UI_SCALE: f32 = 1.0;
pub const MIN_UI_SCALE: f32 = 0.5;
pub const MAX_UI_SCALE: f32 = 3.0;
pub const UI_SCALE_STEP: f32 = 0.1;

/// Environment variable that overrides both the saved and the DPI-derived scale.
pub const UI_SCALE_ENV: &str = "ASCIIVENTURE_UI_SCALE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiScaleAction {
    ZoomIn,
    ZoomOut,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiScale(f32);

impl Default for UiScale {
    fn default() -> Self {
        Self(DEFAULT_UI_SCALE)
    }
}

impl UiScale {
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(MIN_UI_SCALE, MAX_UI_SCALE))
    }

    /// Override first, then the saved value, then the display DPI when it is above 1.
    pub fn resolve(dpi_scale: f32, saved: Option<f32>, override_value: Option<&str>) -> Self {
        if let Some(value) = override_value.and_then(|raw| raw.trim().parse::<f32>().ok()) {
            return Self::new(value);
        }
        if let Some(value) = saved {
            return Self::new(value);
        }
        if dpi_scale.is_finite() && dpi_scale > 1.0 {
            return Self::new(dpi_scale);
        }
        Self::default()
    }

    pub fn get(self) -> f32 {
        self.0
    }

    pub fn apply(self, action: UiScaleAction) -> Self {
        match action {
            UiScaleAction::ZoomIn => Self::new(self.0 + UI_SCALE_STEP),
            UiScaleAction::ZoomOut => Self::new(self.0 - UI_SCALE_STEP),
            UiScaleAction::Reset => Self::default(),
        }
    }

    pub fn px(self, value: f32) -> f32 {
        value * self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_saved_and_dpi() {
        assert_eq!(UiScale::resolve(2.0, Some(1.2), Some("1.5")).get(), 1.5);
    }

    #[test]
    fn unparsable_override_falls_through() {
        assert_eq!(UiScale::resolve(2.0, None, Some("big")).get(), 2.0);
        assert_eq!(UiScale::resolve(1.0, Some(1.7), Some("")).get(), 1.7);
    }

    #[test]
    fn low_or_invalid_dpi_uses_the_default() {
        assert_eq!(UiScale::resolve(0.0, None, None), UiScale::default());
        assert_eq!(UiScale::resolve(f32::NAN, None, None), UiScale::default());
    }

    #[test]
    fn zoom_steps_stay_within_bounds() {
        let mut scale = UiScale::new(MAX_UI_SCALE);
        scale = scale.apply(UiScaleAction::ZoomIn);
        assert_eq!(scale.get(), MAX_UI_SCALE);

        scale = UiScale::new(1.0).apply(UiScaleAction::ZoomOut);
        assert!((scale.get() - 0.9).abs() < 0.0001);
        assert_eq!(scale.apply(UiScaleAction::Reset).get(), DEFAULT_UI_SCALE);
        assert_eq!(UiScale::new(0.01).get(), MIN_UI_SCALE);
    }
}
