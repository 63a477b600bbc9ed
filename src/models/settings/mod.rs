// Settings module
// Layout geometry and window configuration

use serde::{Deserialize, Serialize};

/// Quarter-hour slots spanned by the usable height of a day column.
/// The first slot of an event is covered by the block minimum height,
/// leaving 23.5 hours of offset.
pub const SLOT_SPAN: f32 = 94.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixel height of a day column's display area
    pub column_height: f32,
    /// Vertical padding inside a day column
    pub column_padding: f32,
    /// Pixel width of a day column
    pub column_width: f32,
    /// Height of a block for a single quarter-hour event
    pub block_min_height: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            column_height: 1460.0,
            column_padding: 20.0,
            column_width: 150.0,
            block_min_height: 15.0,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl Settings {
    /// Pixel height of one quarter-hour slot for these dimensions
    pub fn height_step(&self) -> f32 {
        (self.column_height - self.column_padding - self.block_min_height) / SLOT_SPAN
    }

    pub fn validate(&self) -> Result<(), String> {
        let dimensions = [
            ("column_height", self.column_height),
            ("column_width", self.column_width),
            ("block_min_height", self.block_min_height),
            ("window_width", self.window_width),
            ("window_height", self.window_height),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number", name));
            }
        }

        if !self.column_padding.is_finite() || self.column_padding < 0.0 {
            return Err("column_padding cannot be negative".to_string());
        }

        // Back-to-back events would share an edge pixel otherwise
        if self.block_min_height > self.height_step() {
            return Err(format!(
                "block_min_height ({}) cannot exceed one quarter-hour step ({:.2})",
                self.block_min_height,
                self.height_step()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_height_step() {
        let settings = Settings {
            column_height: 500.0,
            column_padding: 20.0,
            block_min_height: 4.0,
            ..Settings::default()
        };
        assert_eq!(settings.height_step(), 476.0 / 94.0);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let settings = Settings {
            column_width: 0.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_tall_min_height() {
        let settings = Settings {
            column_height: 500.0,
            block_min_height: 60.0,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("block_min_height"));
    }
}
