//! Piecewise-linear mapping between a slider's value domain and its
//! position on the track, in percent of the track width.
//!
//! The first `mid_percent` of the track covers `[min, mid_value]`, the rest
//! covers `(mid_value, max]`. When the breakpoint does not fall strictly
//! inside the domain the mapping is a single linear segment.

use crate::config::{MAX_TICKS, SLIDER_MID_PERCENT, SLIDER_MID_VALUE, TICK_INTERVAL};
use crate::utils::round1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseScale {
    pub min: f64,
    pub max: f64,
    pub mid_percent: f64,
    pub mid_value: f64,
}

impl PiecewiseScale {
    pub fn new(min: f64, max: f64, mid_percent: f64, mid_value: f64) -> Self {
        Self {
            min,
            max,
            mid_percent,
            mid_value,
        }
    }

    /// Scale with the application-wide breakpoint.
    pub fn for_domain(min: f64, max: f64) -> Self {
        Self::new(min, max, SLIDER_MID_PERCENT, SLIDER_MID_VALUE)
    }

    fn is_single_segment(&self) -> bool {
        self.mid_value > self.max || self.mid_value <= self.min
    }

    /// Position of `value` on the track, in percent.
    pub fn percent_of(&self, value: f64) -> f64 {
        if self.is_single_segment() {
            return 100.0 * (value - self.min) / (self.max - self.min);
        }

        if value <= self.mid_value {
            (value - self.min) / (self.mid_value - self.min) * self.mid_percent
        } else {
            self.mid_percent
                + (value - self.mid_value) / (self.max - self.mid_value)
                    * (100.0 - self.mid_percent)
        }
    }

    /// Inverse of [`percent_of`](Self::percent_of). `percent` is clamped to `[0, 100]`.
    pub fn value_at(&self, percent: f64) -> f64 {
        let percent = percent.clamp(0.0, 100.0);
        if self.is_single_segment() {
            return self.min + percent / 100.0 * (self.max - self.min);
        }

        if percent <= self.mid_percent {
            self.min + percent / self.mid_percent * (self.mid_value - self.min)
        } else {
            self.mid_value
                + (percent - self.mid_percent) / (100.0 - self.mid_percent)
                    * (self.max - self.mid_value)
        }
    }

    /// Tick values: the multiples of [`TICK_INTERVAL`] inside the domain, plus
    /// the maximum rounded to one decimal. Wide domains step by a power-of-ten
    /// multiple of the interval so that at most [`MAX_TICKS`] ticks are drawn.
    pub fn ticks(&self) -> Vec<f64> {
        let mut interval = TICK_INTERVAL;
        let (mut first, mut last) = self.multiples_of(interval);
        while last - first + 1.0 > (MAX_TICKS - 1) as f64 && interval.is_finite() {
            interval *= 10.0;
            (first, last) = self.multiples_of(interval);
        }

        let count = (last - first + 1.0).max(0.0) as usize;
        let mut ticks: Vec<f64> = (0..count)
            // `+ 0.0` turns a `-0.0` anchor into `0.0`
            .map(|i| (first + i as f64) * interval + 0.0)
            .collect();

        let rounded_max = round1(self.max);
        if ticks
            .last()
            .map_or(true, |last| (last - rounded_max).abs() > 1e-9)
        {
            ticks.push(rounded_max);
        }
        ticks
    }

    /// Indices of the first and last multiple of `interval` within `[min, max]`.
    fn multiples_of(&self, interval: f64) -> (f64, f64) {
        ((self.min / interval).ceil(), (self.max / interval).floor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn two_segment_scenario() {
        let scale = PiecewiseScale::new(0.0, 100.0, 60.0, 30.0);
        assert!(close(scale.percent_of(30.0), 60.0));
        assert!(close(scale.percent_of(65.0), 80.0));
        assert!(close(scale.percent_of(15.0), 30.0));
    }

    #[test]
    fn degrades_when_breakpoint_above_max() {
        let scale = PiecewiseScale::new(0.0, 20.0, 60.0, 30.0);
        assert!(close(scale.percent_of(5.0), 25.0));
        assert!(close(scale.percent_of(20.0), 100.0));
        assert!(close(scale.value_at(50.0), 10.0));
    }

    #[test]
    fn degrades_when_breakpoint_at_or_below_min() {
        let scale = PiecewiseScale::new(30.0, 50.0, 60.0, 30.0);
        assert!(close(scale.percent_of(30.0), 0.0));
        assert!(close(scale.percent_of(40.0), 50.0));
    }

    #[test]
    fn breakpoint_at_max_keeps_first_segment() {
        let scale = PiecewiseScale::new(0.0, 30.0, 60.0, 30.0);
        assert!(close(scale.percent_of(30.0), 60.0));
        assert!(close(scale.percent_of(15.0), 30.0));
    }

    #[test]
    fn ticks_every_ten_plus_rounded_max() {
        let scale = PiecewiseScale::for_domain(0.0, 34.56);
        assert_eq!(scale.ticks(), vec![0.0, 10.0, 20.0, 30.0, 34.6]);

        let exact = PiecewiseScale::for_domain(0.0, 40.0);
        assert_eq!(exact.ticks(), vec![0.0, 10.0, 20.0, 30.0, 40.0]);

        let small = PiecewiseScale::for_domain(0.0, 2.36);
        assert_eq!(small.ticks(), vec![0.0, 2.4]);
    }

    #[test]
    fn ticks_sit_on_multiples_of_ten() {
        let offset = PiecewiseScale::for_domain(5.0, 27.0);
        assert_eq!(offset.ticks(), vec![10.0, 20.0, 27.0]);

        let negative = PiecewiseScale::for_domain(-15.0, 12.0);
        assert_eq!(negative.ticks(), vec![-10.0, 0.0, 10.0, 12.0]);

        let straddling = PiecewiseScale::for_domain(-5.0, 12.0);
        assert_eq!(straddling.ticks(), vec![0.0, 10.0, 12.0]);
        assert!(straddling.ticks()[0].is_sign_positive());

        // no multiple of ten inside the domain
        let narrow = PiecewiseScale::for_domain(1.0, 2.36);
        assert_eq!(narrow.ticks(), vec![2.4]);
    }

    #[test]
    fn wide_domains_are_thinned_out() {
        let wide = PiecewiseScale::for_domain(0.0, 1e7);
        let ticks = wide.ticks();
        assert!(ticks.len() <= MAX_TICKS);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&1e7));
        assert_eq!(ticks[1], 1e6);

        let medium = PiecewiseScale::for_domain(0.0, 250.0);
        assert_eq!(medium.ticks(), vec![0.0, 100.0, 200.0, 250.0]);

        let at_cap = PiecewiseScale::for_domain(0.0, 195.0);
        assert_eq!(at_cap.ticks().len(), MAX_TICKS);
    }

    fn arb_scale() -> impl Strategy<Value = PiecewiseScale> {
        (-50.0..50.0_f64, 0.5..200.0_f64, 5.0..95.0_f64)
            .prop_map(|(min, span, mid_percent)| {
                PiecewiseScale::new(min, min + span, mid_percent, SLIDER_MID_VALUE)
            })
    }

    proptest! {
        #[test]
        fn boundaries_map_to_0_and_100(scale in arb_scale()) {
            prop_assert!((scale.percent_of(scale.min)).abs() < 1e-9);
            prop_assert!((scale.percent_of(scale.max) - 100.0).abs() < 1e-9);
        }

        #[test]
        fn mapping_is_monotonic(scale in arb_scale(), a in 0.0..1.0_f64, b in 0.0..1.0_f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let span = scale.max - scale.min;
            let p_lo = scale.percent_of(scale.min + lo * span);
            let p_hi = scale.percent_of(scale.min + hi * span);
            prop_assert!(p_lo <= p_hi + 1e-9);
        }

        #[test]
        fn value_at_inverts_percent_of(scale in arb_scale(), t in 0.0..1.0_f64) {
            let v = scale.min + t * (scale.max - scale.min);
            let back = scale.value_at(scale.percent_of(v));
            prop_assert!((back - v).abs() < 1e-6 * (1.0 + v.abs()));
        }

        #[test]
        fn first_segment_is_linear(v in 0.0..30.0_f64) {
            let scale = PiecewiseScale::new(0.0, 100.0, 60.0, 30.0);
            prop_assert!((scale.percent_of(v) - v / 30.0 * 60.0).abs() < 1e-9);
        }

        #[test]
        fn second_segment_is_linear(
            max in 30.5..500.0_f64,
            mid_percent in 5.0..95.0_f64,
            t in 0.0..=1.0_f64,
        ) {
            let scale = PiecewiseScale::new(0.0, max, mid_percent, 30.0);
            let v = 30.0 + t * (max - 30.0);
            prop_assume!(v > 30.0);
            let expected = mid_percent + (v - 30.0) / (max - 30.0) * (100.0 - mid_percent);
            prop_assert!((scale.percent_of(v) - expected).abs() < 1e-9);
        }

        #[test]
        fn single_segment_when_breakpoint_above_max(
            min in -50.0..20.0_f64,
            span in 0.5..9.5_f64,
            mid_percent in 5.0..95.0_f64,
            t in 0.0..=1.0_f64,
        ) {
            let max = min + span;
            let scale = PiecewiseScale::new(min, max, mid_percent, 30.0);
            let v = min + t * span;
            let expected = 100.0 * (v - min) / (max - min);
            prop_assert!((scale.percent_of(v) - expected).abs() < 1e-9);
            prop_assert!((scale.value_at(expected) - v).abs() < 1e-9);
        }
    }
}
