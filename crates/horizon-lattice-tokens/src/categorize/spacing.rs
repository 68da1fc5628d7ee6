//! Spacing-scale synthesis from a single `--spacing` base.

use crate::types::{FloatToken, TokenSet};

/// Multipliers generated from the spacing base.
pub const SPACING_SCALE: [f32; 33] = [
    0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 14.0, 16.0,
    20.0, 24.0, 28.0, 32.0, 36.0, 40.0, 44.0, 48.0, 52.0, 56.0, 60.0, 64.0, 72.0, 80.0, 96.0,
];

/// Replace a lone spacing base with the full multiplier scale.
///
/// Does nothing unless the spacing family holds exactly one entry.
pub(crate) fn synthesize(tokens: &mut TokenSet) {
    let [base] = tokens.spacing.as_slice() else {
        return;
    };
    let base = base.clone();

    tokens.spacing = SPACING_SCALE
        .iter()
        .map(|&step| {
            FloatToken::new(
                vec![step_name(step)],
                step * base.value,
                format!("calc({} * {step})", base.raw_value),
            )
        })
        .collect();
}

/// Step label with `.` replaced, since sinks reject dots in names.
pub fn step_name(step: f32) -> String {
    step.to_string().replace('.', "_")
}
