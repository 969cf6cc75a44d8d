//! Property-based tests for the kernel primitives using proptest.
//!
//! These tests verify invariant properties that must hold for all valid inputs,
//! using randomly generated test data to find edge cases.

mod common;

use std::sync::Arc;

use proptest::prelude::*;

use ta_kernel::kernels::rolling_extrema::{rolling_max_naive, rolling_min_naive};
use ta_kernel::kernels::rolling_sum::rolling_sum;
use ta_kernel::ma::{ema, hma, rma, sma, wma};
use ta_kernel::oscillators::{atr, cci, mfi, rsi, stochastic};
use ta_kernel::{ta, Bar, Bars};
use ta_kernel::utils::all_approx_eq;
use ta_kernel::window::{highest, linreg, lowest, stdev};

// ==================== Test Data Generators ====================

/// Generate a random price series (all positive values)
fn arb_price_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, min_len..=max_len)
}

/// Generate a series of small integers stored as floats
fn arb_integer_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-1000_i32..=1000).prop_map(f64::from), min_len..=max_len)
}

/// Generate a strictly increasing series
fn arb_rising_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01..5.0_f64, min_len..=max_len).prop_map(|steps| {
        steps
            .iter()
            .scan(100.0, |level, step| {
                *level += step;
                Some(*level)
            })
            .collect()
    })
}

/// Generate OHLCV bars with `high >= close >= low`
fn arb_bars(min_len: usize, max_len: usize) -> impl Strategy<Value = Bars> {
    prop::collection::vec(
        (1.0..1000.0_f64, 0.0..0.1_f64, 0.0..0.1_f64, 0.0..10_000.0_f64),
        min_len..=max_len,
    )
    .prop_map(|data| {
        let bars = data
            .into_iter()
            .zip(0_i64..)
            .map(|((base, high_pct, low_pct, volume), time)| {
                let high = base * (1.0 + high_pct);
                let low = base * (1.0 - low_pct);
                Bar::new(time, base, high, low, base).with_volume(volume)
            })
            .collect();
        Bars::new(bars).unwrap()
    })
}

fn column(bars: &Bars, f: fn(&Bar) -> f64) -> Vec<f64> {
    bars.as_slice().iter().map(f).collect()
}

// ==================== Alignment ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every series output has one value per bar and the bar timestamps
    #[test]
    fn prop_series_outputs_are_aligned(bars in arb_bars(1, 80), length in 1usize..=20) {
        let close = bars.close();
        let outputs = [
            ta::sma(&close, length).unwrap(),
            ta::ema(&close, length).unwrap(),
            ta::hma(&close, length).unwrap(),
            ta::highest(&close, length).unwrap(),
            ta::rsi(&close, length).unwrap(),
            ta::atr(&bars, length).unwrap(),
            ta::mfi(&bars, length).unwrap(),
            ta::cci(&bars.hlc3(), length).unwrap(),
        ];
        for out in &outputs {
            prop_assert_eq!(out.len(), bars.len());
            prop_assert!(Arc::ptr_eq(out.times(), bars.times()));
        }
    }
}

// ==================== Warm-up ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Fixed windows have exactly period-1 NaN values at the start
    #[test]
    fn prop_window_nan_prefix(data in arb_price_series(1, 100), period in 1usize..=20) {
        let expected = (period - 1).min(data.len());
        let checks = [
            ("sma", sma(&data, period).unwrap()),
            ("wma", wma(&data, period).unwrap()),
            ("highest", highest(&data, period).unwrap()),
            ("lowest", lowest(&data, period).unwrap()),
            ("stdev", stdev(&data, period).unwrap()),
            ("linreg", linreg(&data, period, 0).unwrap()),
        ];
        for (name, result) in checks {
            prop_assert_eq!(result.len(), data.len(), "{}", name);
            prop_assert!(
                common::verify_nan_prefix(&result, expected),
                "{} has wrong warm-up",
                name
            );
        }
    }

    /// EMA is defined from the first value
    #[test]
    fn prop_ema_no_warmup(data in arb_price_series(1, 100), period in 1usize..=50) {
        let result = ema(&data, period).unwrap();
        prop_assert_eq!(common::count_nans(&result), 0);
        prop_assert_eq!(result[0], data[0]);
    }
}

// ==================== Running Sums ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Integer-valued running sums match a full re-summation exactly
    #[test]
    fn prop_rolling_sum_exact_on_integers(data in arb_integer_series(1, 200), period in 1usize..=30) {
        let result = rolling_sum(&data, period).unwrap();
        for i in (period - 1)..data.len() {
            let naive: f64 = data[i + 1 - period..=i].iter().sum();
            prop_assert_eq!(result[i], naive, "index {}", i);
        }
    }

    /// Integer-valued SMA equals a full re-average exactly
    #[test]
    fn prop_sma_matches_resum(data in arb_integer_series(1, 200), period in 1usize..=30) {
        let result = sma(&data, period).unwrap();
        for i in (period - 1)..data.len() {
            let naive: f64 = data[i + 1 - period..=i].iter().sum::<f64>() / period as f64;
            prop_assert_eq!(result[i], naive, "index {}", i);
        }
    }
}

// ==================== Constant Input ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Averages of constant values converge to that constant
    #[test]
    fn prop_constant_fixed_point(constant in 1.0..1000.0_f64, len in 1usize..80, period in 1usize..=20) {
        let data = vec![constant; len];
        for (name, result) in [
            ("sma", sma(&data, period).unwrap()),
            ("ema", ema(&data, period).unwrap()),
            ("rma", rma(&data, period).unwrap()),
            ("wma", wma(&data, period).unwrap()),
            ("hma", hma(&data, period).unwrap()),
        ] {
            for &v in result.iter().filter(|v| !v.is_nan()) {
                prop_assert!(
                    common::approx_eq(v, constant, common::LOOSE_EPSILON),
                    "{} drifted to {}",
                    name,
                    v
                );
            }
        }
    }

    /// CCI of a constant integer series is zero once defined
    #[test]
    fn prop_cci_constant_is_zero(constant in 1_i32..1000, len in 1usize..60, period in 1usize..=20) {
        let data = vec![f64::from(constant); len];
        let result = cci(&data, period).unwrap();
        for &v in result.iter().filter(|v| !v.is_nan()) {
            prop_assert_eq!(v, 0.0);
        }
    }
}

// ==================== Oscillator Bounds ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// RSI is 100 over a strictly rising series
    #[test]
    fn prop_rsi_rising_is_100(data in arb_rising_series(2, 100), period in 1usize..=14) {
        let result = rsi(&data, period).unwrap();
        for &v in result.iter().filter(|v| !v.is_nan()) {
            prop_assert_eq!(v, 100.0);
        }
    }

    /// RSI is 0 over a strictly falling series, once a loss has been seen
    #[test]
    fn prop_rsi_falling_is_0(data in arb_rising_series(2, 100), period in 1usize..=14) {
        let falling: Vec<f64> = data.iter().rev().copied().collect();
        let result = rsi(&falling, period).unwrap();
        for &v in result.iter().skip(1).filter(|v| !v.is_nan()) {
            prop_assert_eq!(v, 0.0);
        }
    }

    /// RSI stays within [0, 100]
    #[test]
    fn prop_rsi_bounded(data in arb_price_series(2, 100), period in 1usize..=14) {
        let result = rsi(&data, period).unwrap();
        for &v in result.iter().filter(|v| !v.is_nan()) {
            prop_assert!((0.0..=100.0).contains(&v), "rsi {}", v);
        }
    }

    /// Stochastic %K and %D stay within [0, 100]
    #[test]
    fn prop_stochastic_bounded(
        bars in arb_bars(1, 100),
        k_period in 1usize..=14,
        k_smooth in 1usize..=3,
        d_smooth in 1usize..=3
    ) {
        let high = column(&bars, |b| b.high);
        let low = column(&bars, |b| b.low);
        let close = column(&bars, |b| b.close);
        let out = stochastic(&high, &low, &close, k_period, k_smooth, d_smooth).unwrap();
        for &v in out.k.iter().chain(out.d.iter()).filter(|v| !v.is_nan()) {
            prop_assert!((-1e-9..=100.0 + 1e-9).contains(&v), "stochastic {}", v);
        }
    }

    /// %K is 100 when the close is the window high and 0 when it is the window low
    #[test]
    fn prop_stoch_boundaries(
        picks in prop::collection::vec((1.0..1000.0_f64, 0.001..0.1_f64, any::<bool>()), 1..=100),
        period in 1usize..=14
    ) {
        let high: Vec<f64> = picks.iter().map(|&(base, pct, _)| base * (1.0 + pct)).collect();
        let low: Vec<f64> = picks.iter().map(|&(base, pct, _)| base * (1.0 - pct)).collect();
        let close: Vec<f64> = picks
            .iter()
            .zip(high.iter().zip(&low))
            .map(|(&(_, _, at_high), (&h, &l))| if at_high { h } else { l })
            .collect();

        let k = ta_kernel::oscillators::stoch(&close, &high, &low, period).unwrap();
        let hh = highest(&high, period).unwrap();
        let ll = lowest(&low, period).unwrap();
        for i in (period - 1)..close.len() {
            if close[i] == hh[i] {
                prop_assert!((k[i] - 100.0).abs() < 1e-9, "k {}", k[i]);
            } else if close[i] == ll[i] {
                prop_assert_eq!(k[i], 0.0);
            }
        }
    }

    /// MFI stays within [0, 100]
    #[test]
    fn prop_mfi_bounded(bars in arb_bars(1, 100), period in 1usize..=14) {
        let high = column(&bars, |b| b.high);
        let low = column(&bars, |b| b.low);
        let close = column(&bars, |b| b.close);
        let volume = column(&bars, |b| b.volume.unwrap_or(f64::NAN));
        let result = mfi(&high, &low, &close, &volume, period).unwrap();
        for &v in result.iter().filter(|v| !v.is_nan()) {
            prop_assert!((-1e-9..=100.0 + 1e-9).contains(&v), "mfi {}", v);
        }
    }

    /// ATR is never negative
    #[test]
    fn prop_atr_non_negative(bars in arb_bars(1, 100), period in 1usize..=14) {
        let high = column(&bars, |b| b.high);
        let low = column(&bars, |b| b.low);
        let close = column(&bars, |b| b.close);
        let result = atr(&high, &low, &close, period).unwrap();
        for &v in result.iter().filter(|v| !v.is_nan()) {
            prop_assert!(v >= 0.0);
        }
    }

    /// highest >= value >= lowest over each defined window
    #[test]
    fn prop_extrema_bracket_values(data in arb_price_series(1, 100), period in 1usize..=20) {
        let max = highest(&data, period).unwrap();
        let min = lowest(&data, period).unwrap();
        for i in (period - 1)..data.len() {
            prop_assert!(max[i] >= data[i]);
            prop_assert!(min[i] <= data[i]);
            prop_assert!(max[i] >= min[i]);
        }
    }

    /// The monotonic deque agrees with a naive per-window scan
    #[test]
    fn prop_extrema_match_naive(data in arb_price_series(1, 100), period in 1usize..=20) {
        let (fast_max, naive_max) = (highest(&data, period).unwrap(), rolling_max_naive(&data, period).unwrap());
        let (fast_min, naive_min) = (lowest(&data, period).unwrap(), rolling_min_naive(&data, period).unwrap());
        prop_assert!(all_approx_eq(&fast_max, &naive_max, common::EPSILON));
        prop_assert!(all_approx_eq(&fast_min, &naive_min, common::EPSILON));
    }
}

// ==================== Determinism ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Identical inputs produce bitwise-identical outputs
    #[test]
    fn prop_bitwise_deterministic(bars in arb_bars(1, 80), length in 1usize..=20) {
        let run = |bars: &Bars| -> Vec<Vec<u64>> {
            let close = bars.close();
            [
                ta::sma(&close, length).unwrap(),
                ta::ema(&close, length).unwrap(),
                ta::tema(&close, length).unwrap(),
                ta::vidya(&close, length, 9).unwrap(),
                ta::stdev(&close, length).unwrap(),
                ta::rsi(&close, length).unwrap(),
                ta::mfi(bars, length).unwrap(),
            ]
            .iter()
            .map(|s| s.values().iter().map(|v| v.to_bits()).collect())
            .collect()
        };
        prop_assert_eq!(run(&bars), run(&bars.clone()));
    }
}
