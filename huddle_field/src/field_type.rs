// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::geometry::{DEFAULT_DISPLAY_HEIGHT, DisplaySize, FIELD_HEIGHT, FIELD_WIDTH};

/// Which part of the pitch is visible.
///
/// The string forms (`full`, `middle`, `up-zone`, `down-zone`) are the values
/// carried by mode-selection events.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FieldType {
    /// The entire pitch.
    #[default]
    Full,
    /// The central half of the pitch.
    Middle,
    /// The upper 45%, including the upper end zone.
    UpZone,
    /// The lower 45%, including the lower end zone.
    DownZone,
}

impl FieldType {
    /// Every crop, in selector order.
    pub const ALL: [Self; 4] = [Self::Full, Self::Middle, Self::UpZone, Self::DownZone];

    /// Visible part of the pitch in field-rectangle coordinates.
    ///
    /// Every view-port is contained in [`field_rect`](crate::field_rect).
    #[must_use]
    pub fn view_port(self) -> Rect {
        match self {
            Self::Full => Rect::new(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT),
            Self::Middle => Rect::new(0.0, 0.25 * FIELD_HEIGHT, FIELD_WIDTH, 0.75 * FIELD_HEIGHT),
            Self::UpZone => Rect::new(0.0, 0.0, FIELD_WIDTH, 0.45 * FIELD_HEIGHT),
            Self::DownZone => Rect::new(0.0, 0.55 * FIELD_HEIGHT, FIELD_WIDTH, FIELD_HEIGHT),
        }
    }

    /// Fraction of the pitch length shown by this crop.
    #[must_use]
    pub fn crop_fraction(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Middle => 0.5,
            Self::UpZone | Self::DownZone => 0.45,
        }
    }

    /// Canvas size and scale for the default 400 px display height.
    #[must_use]
    pub fn display_size(self) -> DisplaySize {
        self.display_size_for(DEFAULT_DISPLAY_HEIGHT)
    }

    /// Canvas size and scale when the crop is shown `display_height` pixels tall.
    #[must_use]
    pub fn display_size_for(self, display_height: f64) -> DisplaySize {
        let full = DisplaySize::fit_height(display_height);
        let fraction = self.crop_fraction();
        DisplaySize {
            width: full.width / fraction,
            height: full.height,
            scale: full.scale / fraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::FieldType;
    use crate::geometry::field_rect;

    #[test]
    fn names_round_trip() {
        for ft in FieldType::iter() {
            let name: &'static str = ft.into();
            assert_eq!(FieldType::from_str(name), Ok(ft));
        }
        assert_eq!(FieldType::from_str("up-zone"), Ok(FieldType::UpZone));
        assert!(FieldType::from_str("sideline").is_err());
    }

    #[test]
    fn view_ports_stay_inside_the_field() {
        let field = field_rect();
        for ft in FieldType::ALL {
            let vp = ft.view_port();
            assert_eq!(vp.union(field), field, "{ft} escapes the field");
            assert!(vp.area() > 0.0, "{ft} is empty");
        }
    }

    #[test]
    fn every_crop_is_shown_at_the_same_height() {
        for ft in FieldType::ALL {
            let size = ft.display_size();
            let vp = ft.view_port();
            assert!((size.height - 400.0).abs() < 1e-9, "{ft} height");
            assert!((vp.height() * size.scale - size.height).abs() < 1e-9, "{ft} vertical scale");
            assert!((vp.width() * size.scale - size.width).abs() < 1e-9, "{ft} horizontal scale");
        }
    }
}
