use veneer_theme::{Px, Theme};

use crate::style::{PropertyMap, SpacingKind, StyleLayer};

pub const TRACK_WIDTH: Px = Px(40.);
pub const TRACK_HEIGHT: Px = Px(24.);
pub const KNOB_SIZE: Px = Px(16.);
pub const ANIMATION_TIMING: &str = "200ms ease-in-out";

/// The resolved track and knob styles for one switch state.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SwitchStyle {
    pub track: StyleLayer,
    pub knob: StyleLayer,
}

impl SwitchStyle {
    pub fn track_properties(&self) -> &PropertyMap {
        self.track.properties()
    }

    pub fn knob_properties(&self) -> &PropertyMap {
        self.knob.properties()
    }
}

/// A two-state switch. Its visuals are purely a function of `on` plus the
/// fixed track/knob constants; toggling is a single synchronous
/// recomputation driven by whoever owns the interaction event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Switch {
    on: bool,
}

impl Switch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// The knob's horizontal offset inside the track. The inset on either
    /// end is the theme's smallest spacing token.
    pub fn knob_offset(theme: &Theme, on: bool) -> Px {
        let inset = SpacingKind::Bit.resolve(theme);

        if on {
            TRACK_WIDTH - KNOB_SIZE - inset
        } else {
            inset
        }
    }

    pub fn resolve(&self, theme: &Theme) -> SwitchStyle {
        let colors = &theme.colors;

        let track_label = if self.on { "switch--on" } else { "switch" };
        let track_color = if self.on { &colors.p500 } else { &colors.n300 };
        let track = StyleLayer::new(track_label)
            .prop("background-color", track_color)
            .prop("border-radius", TRACK_HEIGHT.to_string())
            .prop("position", "relative")
            .prop(
                "transition",
                format!("background-color {ANIMATION_TIMING}"),
            )
            .prop("width", TRACK_WIDTH.to_string())
            .prop("height", TRACK_HEIGHT.to_string());

        let knob_label = if self.on {
            "switch__knob--on"
        } else {
            "switch__knob"
        };
        let shadow_color = if self.on { &colors.p700 } else { &colors.n500 };
        let offset = Self::knob_offset(theme, self.on);
        let knob = StyleLayer::new(knob_label)
            .prop("background-color", &colors.n100)
            .prop("box-shadow", knob_shadow(shadow_color))
            .prop("position", "absolute")
            .prop("top", "50%")
            .prop("transform", format!("translate3d({offset}, -50%, 0)"))
            .prop(
                "transition",
                format!("box-shadow {ANIMATION_TIMING}, transform {ANIMATION_TIMING}"),
            )
            .prop("width", KNOB_SIZE.to_string())
            .prop("height", KNOB_SIZE.to_string())
            .prop("border-radius", KNOB_SIZE.to_string());

        SwitchStyle { track, knob }
    }
}

fn knob_shadow(color: &str) -> String {
    format!("0 2px 0 0 {color}, inset 0 2px #FFF, inset 0 1px 0 1px rgba(255, 255, 255, 6%)")
}
