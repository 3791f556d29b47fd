//! Quantity wrappers: additive between quantities, scaled by raw factors.

use whole_value::prelude::*;

whole_value::quantity_type!(pub Meters: i32);
whole_value::quantity_type!(pub Seconds: f64, implicit => "{:.2}");

#[test]
fn test_additive() {
    assert_eq!(Meters::new(7) + Meters::new(5), Meters::new(12));
    assert_eq!(Meters::new(7) - Meters::new(5), Meters::new(2));
    assert_eq!(-Meters::new(7), Meters::new(-7));
    assert!(Meters::new(3) < Meters::new(4));
}

#[test]
fn test_step() {
    let mut m = Meters::new(0);
    m.increment().increment();
    assert_eq!(m.value(), 2);
    assert_eq!(m.post_decrement().value(), 2);
    assert_eq!(m.value(), 1);
}

#[test]
fn test_scaling_matches_raw() {
    for (v, k) in [(1.5, 2.0), (-4.0, 0.25), (10.0, -3.0)] {
        let s = Seconds::new(v);
        assert_eq!((s * k).value(), v * k);
        assert_eq!((k * s).value(), k * v);
        assert_eq!((s / k).value(), v / k);
        assert_eq!((s % k).value(), v % k);
    }
}

#[test]
fn test_scaling_assignment() {
    let mut s = Seconds::new(3.0);
    s *= 4.0;
    s /= 2.0;
    assert_eq!(s, 6.0);
    s %= 4.0;
    assert_eq!(s, 2.0);
}

#[test]
fn test_abs_keeps_type() {
    assert_eq!(abs(Meters::new(-12)), Meters::new(12));
    assert_eq!(abs(Seconds::new(-0.5)).to_string(), "0.50");
}

#[test]
fn test_into_explicit() {
    let explicit = Seconds::new(2.0).into_explicit();
    assert_eq!(explicit.value(), 2.0);
    assert!(!whole_value::Quantity::<f64, SecondsTag>::IMPLICIT);
}

#[test]
fn test_raw_on_the_left_matches_raw() {
    for (v, k) in [(1.5, 2.0f64), (-4.0, 0.25)] {
        assert_eq!((k * Seconds::new(v)).value(), k * v);
        assert_eq!((k + Seconds::new(v)).value(), k + v);
        assert_eq!((k - Seconds::new(v)).value(), k - v);
        assert!(k == Seconds::new(k));
    }
}
