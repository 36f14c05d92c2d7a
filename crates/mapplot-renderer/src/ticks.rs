//! Axis tick placement.

/// Tick count aimed for on an axis.
const TARGET_TICKS: f64 = 7.0;

/// Mantissas of acceptable tick steps.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Largest step multiple placed as a tick. Beyond it neighbouring ticks are
/// no longer distinguishable in `f64`.
const MAX_TICK_INDEX: f64 = 1e12;

/// Magnitude from which labels switch to exponent notation.
const EXPONENT_FROM: f64 = 1e15;

/// A tick position with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// A "nice" step (1, 2, 2.5 or 5 times a power of ten) that splits `span`
/// into roughly [`TARGET_TICKS`] intervals.
pub fn nice_step(span: f64) -> f64 {
    let rough = span / TARGET_TICKS;
    let magnitude = 10f64.powi(rough.log10().floor() as i32);
    let normalized = rough / magnitude;
    let mantissa = NICE_STEPS
        .iter()
        .copied()
        .find(|&s| s >= normalized)
        .unwrap_or(10.0);
    mantissa * magnitude
}

/// Ticks covering `[lo, hi]`, placed on multiples of a nice step.
///
/// A range too wide for `f64` or too narrow for its offset gets one tick at
/// its middle.
pub fn ticks(lo: f64, hi: f64) -> Vec<Tick> {
    let middle = || {
        let value = lo / 2.0 + hi / 2.0;
        vec![Tick {
            value,
            label: format_value(value, 0),
        }]
    };

    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 {
        return middle();
    }

    let step = nice_step(span);
    let first = (lo / step).ceil();
    let last = (hi / step + 1e-9).floor();
    if first.abs() > MAX_TICK_INDEX || last.abs() > MAX_TICK_INDEX {
        return middle();
    }

    let decimals = decimals_for(step);
    (first as i64..=last as i64)
        .map(|i| {
            let mut value = i as f64 * step;
            if value.abs() < step * 1e-9 {
                value = 0.0;
            }
            Tick {
                value,
                label: format_value(value, decimals),
            }
        })
        .collect()
}

/// Fewest decimals that print `step` exactly.
fn decimals_for(step: f64) -> usize {
    (0..12)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0)
        })
        .unwrap_or(12)
}

fn format_value(value: f64, decimals: usize) -> String {
    if value.abs() >= EXPONENT_FROM {
        return format!("{:e}", value);
    }
    let text = format!("{:.*}", decimals, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}
