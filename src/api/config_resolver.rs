use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{BreakpointConfig, CarouselConfig};

/// Record of one coerced configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDiagnostic {
    pub field: String,
    pub reason: String,
}

impl ConfigDiagnostic {
    fn new(field: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        warn!(field, reason = %reason, "coercing invalid carousel configuration");
        Self {
            field: field.to_owned(),
            reason,
        }
    }
}

/// Coerces malformed values to safe defaults instead of rejecting the config.
pub(super) fn sanitize_config(
    mut config: CarouselConfig,
    diagnostics: &mut Vec<ConfigDiagnostic>,
) -> CarouselConfig {
    if let Some(item_width) = config.item_width {
        if !item_width.is_finite() || item_width <= 0.0 {
            diagnostics.push(ConfigDiagnostic::new(
                "item_width",
                format!("{item_width} is not a positive finite width; using observed width"),
            ));
            config.item_width = None;
        }
    }
    if let Some(width) = config.width {
        if !width.is_finite() || width < 0.0 {
            diagnostics.push(ConfigDiagnostic::new(
                "width",
                format!("{width} is not a non-negative finite width; using measured width"),
            ));
            config.width = None;
        }
    }
    if !config.offset.is_finite() {
        diagnostics.push(ConfigDiagnostic::new("offset", "non-finite offset reset to 0"));
        config.offset = 0.0;
    }
    if let Some(transform_offset) = config.transform_offset {
        if !transform_offset.is_finite() {
            diagnostics.push(ConfigDiagnostic::new(
                "transform_offset",
                "non-finite transform offset ignored",
            ));
            config.transform_offset = None;
        }
    }
    if config.slides_per_page == 0 {
        diagnostics.push(ConfigDiagnostic::new(
            "slides_per_page",
            "slides_per_page must be >= 1; using 1",
        ));
        config.slides_per_page = 1;
    }
    config
}

/// Picks the breakpoint with the smallest key that is `>=` the observed width.
#[must_use]
pub(super) fn select_breakpoint(
    config: &CarouselConfig,
    observed_width_px: Option<f64>,
) -> Option<(u32, &BreakpointConfig)> {
    let observed = observed_width_px?;
    config
        .breakpoints
        .iter()
        .find(|(max_width, _)| observed <= f64::from(**max_width))
        .map(|(max_width, overrides)| (*max_width, overrides))
}

fn apply_breakpoint(mut config: CarouselConfig, overrides: &BreakpointConfig) -> CarouselConfig {
    if let Some(item_width) = overrides.item_width {
        config.item_width = Some(item_width);
    }
    if let Some(offset) = overrides.offset {
        config.offset = offset;
    }
    if let Some(slides_per_page) = overrides.slides_per_page {
        config.slides_per_page = slides_per_page;
    }
    if let Some(draggable) = overrides.draggable {
        config.draggable = draggable;
    }
    if let Some(animation_speed_ms) = overrides.animation_speed_ms {
        config.animation_speed_ms = animation_speed_ms;
    }
    if let Some(class_name) = &overrides.class_name {
        config.class_name = Some(class_name.clone());
    }
    if let Some(transform_offset) = overrides.transform_offset {
        config.transform_offset = Some(transform_offset);
    }
    config
}

/// Builds the configuration in effect for the given measured container width.
pub(super) fn resolve_effective_config(
    base: &CarouselConfig,
    measured_width_px: Option<f64>,
) -> (CarouselConfig, Vec<ConfigDiagnostic>) {
    let mut diagnostics = Vec::new();
    let sanitized = sanitize_config(base.clone(), &mut diagnostics);
    let observed = sanitized.width.or(measured_width_px);
    let overrides = select_breakpoint(&sanitized, observed).map(|(_, overrides)| overrides.clone());
    let effective = match overrides {
        Some(overrides) => {
            sanitize_config(apply_breakpoint(sanitized, &overrides), &mut diagnostics)
        }
        None => sanitized,
    };
    (effective, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_breakpoints() -> CarouselConfig {
        CarouselConfig::default()
            .with_breakpoint(
                640,
                BreakpointConfig {
                    slides_per_page: Some(1),
                    ..BreakpointConfig::default()
                },
            )
            .with_breakpoint(
                1024,
                BreakpointConfig {
                    slides_per_page: Some(2),
                    ..BreakpointConfig::default()
                },
            )
            .with_slides_per_page(3)
    }

    #[test]
    fn smallest_matching_breakpoint_wins() {
        let config = config_with_breakpoints();
        assert_eq!(select_breakpoint(&config, Some(500.0)).map(|(k, _)| k), Some(640));
        assert_eq!(select_breakpoint(&config, Some(640.0)).map(|(k, _)| k), Some(640));
        assert_eq!(select_breakpoint(&config, Some(800.0)).map(|(k, _)| k), Some(1024));
        assert_eq!(select_breakpoint(&config, Some(1500.0)), None);
        assert_eq!(select_breakpoint(&config, None), None);
    }

    #[test]
    fn invalid_breakpoint_values_are_sanitized_after_merge() {
        let config = CarouselConfig::default().with_breakpoint(
            400,
            BreakpointConfig {
                slides_per_page: Some(0),
                ..BreakpointConfig::default()
            },
        );
        let (effective, diagnostics) = resolve_effective_config(&config, Some(300.0));
        assert_eq!(effective.slides_per_page, 1);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field, "slides_per_page");
    }
}
