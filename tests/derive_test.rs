//! `#[derive(Tag)]` and `#[derive(Render)]`.

use whole_value::{Arithmetic, Bits, Quantity, Render, SafeBool, Tag, Value};

#[derive(Tag)]
enum PlainTag {}

#[derive(Tag)]
#[tag(name = "Distance")]
struct DistanceTag;

#[derive(Tag, Render)]
#[render("{:.2}")]
enum PriceTag {}

#[derive(Tag, Render)]
#[render("{:#x}")]
enum AddressTag {}

#[derive(Tag, Render)]
enum CountTag {}

#[derive(Tag, Render)]
#[render("{:e}")]
enum ScientificTag {}

#[derive(Tag, Render)]
#[render("[{:>5}]")]
enum PaddedTag {}

#[derive(Tag, Render)]
#[render("{:08b}")]
enum FlagsTag {}

// =============================================================================
// Tag
// =============================================================================

#[test]
fn test_tag_names() {
    assert_eq!(PlainTag::NAME, "PlainTag");
    assert_eq!(DistanceTag::NAME, "Distance");
}

#[test]
fn test_tag_name_in_debug() {
    let d = Quantity::<f64, DistanceTag>::new(3.0);
    assert_eq!(format!("{:?}", d), "Distance(3.0)");
}

// =============================================================================
// Render
// =============================================================================

#[test]
fn test_fixed_point() {
    assert_eq!(Arithmetic::<f64, PriceTag>::new(1234.567).to_string(), "1234.57");
    assert_eq!(Quantity::<f32, PriceTag>::new(0.5).to_string(), "0.50");
}

#[test]
fn test_hex() {
    assert_eq!(Value::<u32, AddressTag>::new(4660).to_string(), "0x1234");
    assert_eq!(Bits::<u16, AddressTag>::new(0xff).to_string(), "0xff");
}

#[test]
fn test_default_directive() {
    assert_eq!(Value::<i32, CountTag>::new(-7).to_string(), "-7");
    assert_eq!(SafeBool::<CountTag>::new(true).to_string(), "true");
}

#[test]
fn test_other_traits() {
    assert_eq!(Value::<f64, ScientificTag>::new(1500.0).to_string(), "1.5e3");
    assert_eq!(Value::<i32, PaddedTag>::new(42).to_string(), "[   42]");
    assert_eq!(Bits::<u8, FlagsTag>::new(5).to_string(), "00000101");
}

#[test]
fn test_render_does_not_leak_formatter_state() {
    let price = Arithmetic::<f64, PriceTag>::new(2.0);
    assert_eq!(format!("{} {}", price, 1.0f64 / 3.0), format!("2.00 {}", 1.0f64 / 3.0));
}

#[test]
fn test_manual_render() {
    enum OnOffTag {}

    impl Render<bool> for OnOffTag {
        fn render(value: &bool, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str(if *value { "on" } else { "off" })
        }
    }

    assert_eq!(SafeBool::<OnOffTag>::new(false).to_string(), "off");
}
