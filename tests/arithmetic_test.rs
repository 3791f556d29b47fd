//! Arithmetic wrappers.

use whole_value::prelude::*;

whole_value::arithmetic_type!(pub Integer: i32);
whole_value::arithmetic_type!(pub Real: f64 => "{:.2}");
whole_value::arithmetic_type!(pub Loose: i64, implicit);

// =============================================================================
// Agreement with the payload
// =============================================================================

#[test]
fn test_operators_match_raw() {
    let samples = [-17, -5, -1, 1, 3, 7, 12, 100];
    for a in samples {
        for b in samples {
            let (x, y) = (Integer::new(a), Integer::new(b));
            assert_eq!((x + y).value(), a + b);
            assert_eq!((x - y).value(), a - b);
            assert_eq!((x * y).value(), a * b);
            assert_eq!((x / y).value(), a / b);
            assert_eq!((x % y).value(), a % b);
            assert_eq!(x == y, a == b);
            assert_eq!(x < y, a < b);
            assert_eq!(x <= y, a <= b);
            assert_eq!(x > y, a > b);
            assert_eq!(x >= y, a >= b);
            assert_eq!(x.cmp(&y), a.cmp(&b));
        }
    }
}

#[test]
fn test_compound_assignment() {
    let mut x = Integer::new(7);
    x += Integer::new(5);
    assert_eq!(x, Integer::new(12));
    x -= Integer::new(2);
    assert_eq!(x, Integer::new(10));
    x *= Integer::new(3);
    assert_eq!(x, Integer::new(30));
    x /= Integer::new(4);
    assert_eq!(x, Integer::new(7));
    x %= Integer::new(4);
    assert_eq!(x, Integer::new(3));
}

#[test]
fn test_unary_and_step() {
    let mut x = Integer::new(7);
    assert_eq!(-x, Integer::new(-7));
    assert_eq!(*x.increment(), Integer::new(8));
    assert_eq!(x.post_decrement(), Integer::new(8));
    assert_eq!(x, Integer::new(7));
}

#[test]
fn test_float_payload() {
    let r = Real::new(1.5) * Real::new(2.0) - Real::new(0.5);
    assert_eq!(r.value(), 2.5);
    assert!(Real::new(f64::NAN) != Real::new(f64::NAN));
    assert_eq!(r.to_string(), "2.50");
}

#[test]
fn test_implicit_mixing() {
    let x: Loose = 40.into();
    assert_eq!(x + 2, Loose::new(42));
    assert_eq!(2 + x, Loose::new(42));
    assert_eq!(x * 2 - 1, Loose::new(79));
    assert!(x > 39 && 41 > x);
}

#[test]
fn test_free_functions() {
    assert_eq!(abs(Integer::new(-9)), Integer::new(9));
    assert_eq!(to_integer(&Real::new(-3.7)), -3);
    assert_eq!(to_real(&Integer::new(4)), 4.0);
    assert_eq!(to_value(&Loose::new(5)), 5i64);
}
