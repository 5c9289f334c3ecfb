use std::cmp::Ordering;

use pretty_assertions::assert_eq;
use serial_test::serial;

use crayons::{
    COLORS, ColorContext, ColorFunction, ColorState, ColoredString, Error,
    ForeColor, clean, disable, enable, magenta, random, red, replace_colors,
    replace_colors_from_str, reset_replace_colors,
};

fn tty() -> ColorContext {
    ColorContext::new().with_state(ColorState::Enabled).with_terminal(true)
}

fn plain() -> ColorContext {
    ColorContext::new().with_state(ColorState::Disabled).with_terminal(true)
}

#[test]
#[serial]
fn red_renders_exact_sequence() {
    let hi = red("hi", false, false).unwrap();
    assert_eq!(hi.render_in(&tty()), "\x1b[31m\x1b[22mhi\x1b[22m\x1b[39m");
    assert_eq!(hi.render_in(&plain()), "hi");
}

#[test]
#[serial]
fn unknown_color_is_rejected() {
    let err = ColoredString::new("not_a_color", "x", false, false).unwrap_err();
    assert_eq!(err.invalid_name(), Some("not_a_color"));
    assert!(err.to_string().starts_with("invalid color name (not_a_color)"));
}

#[test]
#[serial]
fn product_with_items_when_disabled() {
    disable();
    let ab = red("AB", false, false).unwrap();
    let out = &ab * ["X", "Y"];
    assert_eq!(clean(&out.to_string()), "AXAYBXBY");
    assert_eq!(out.text(), "AXAYBXBY");
    let empty: &[&str] = &[];
    assert_eq!((&ab * empty).text(), "");
    enable();
}

#[test]
#[serial]
fn repetition_is_commutative() {
    disable();
    let ab = red("ab", false, false).unwrap();
    assert_eq!((&ab * 3_usize).text(), "ababab");
    assert_eq!(3_usize * &ab, &ab * 3_usize);
    enable();
}

#[test]
#[serial]
fn override_table_round_trip() {
    replace_colors([("magenta", "blue")]).unwrap();
    assert_eq!(magenta("z", false, false).unwrap().color(), ForeColor::Blue);
    reset_replace_colors();
    assert_eq!(magenta("z", false, false).unwrap().color(), ForeColor::Magenta);
}

#[test]
#[serial]
fn bad_override_keeps_previous_table() {
    replace_colors([("red", "green")]).unwrap();
    let err = replace_colors([("red", "INVALID_COLOR")]).unwrap_err();
    assert_eq!(err, Error::InvalidReplacement { name: "INVALID_COLOR".into() });
    assert_eq!(red("x", false, false).unwrap().color(), ForeColor::Green);

    replace_colors_from_str("red").unwrap();
    assert_eq!(red("x", false, false).unwrap().color(), ForeColor::Green);
    reset_replace_colors();
}

#[test]
#[serial]
fn random_stays_within_candidates() {
    for _ in 0..100 {
        let v = random("x", false, false, Some(&["red", "BLUE"][..])).unwrap();
        assert!(matches!(v.color(), ForeColor::Red | ForeColor::Blue));
    }
    let v = random("x", false, false, Some(&[][..])).unwrap();
    let name = v.color().key().to_lowercase();
    assert!(COLORS.contains(&name.as_str()));
}

#[test]
#[serial]
fn derived_values_keep_styling() {
    let v = ColoredString::new("lightgreen_ex", "  Mixed Case, text  ", true, true)
        .unwrap();
    let mut derived = vec![
        v.to_uppercase(),
        v.strip(None),
        v.center(30, '-'),
        v.replace("text", "words"),
        v.slice(2..7),
        v.zfill(25),
    ];
    derived.extend(v.split(Some(","), None));
    let (a, b, c) = v.partition(",");
    derived.extend([a, b, c]);
    for d in &derived {
        assert_eq!(d.color(), ForeColor::LightGreenEx);
        assert!(d.always_color());
        assert!(d.bold());
    }
}

#[test]
#[serial]
fn content_matches_plain_text_operations() {
    let src = "alpha beta\tgamma\nDelta";
    let v = red(src, false, false).unwrap();
    assert_eq!(v.title().text(), crayons::text::title(src));
    assert_eq!(v.expand_tabs(4).text(), crayons::text::expand_tabs(src, 4));
    assert_eq!(v.rsplit(None, Some(1)), vec!["alpha beta\tgamma", "Delta"]);
    assert_eq!(v.split_lines(true), vec!["alpha beta\tgamma\n", "Delta"]);
    assert_eq!(v.count("a"), src.matches('a').count());
    assert_eq!(v.len(), src.chars().count());
}

#[test]
#[serial]
fn ordering_identity_across_colors() {
    let words = ["", "apple", "Apple", "banana", "ü"];
    let values: Vec<ColoredString> = ColorFunction::ALL
        .iter()
        .take(3)
        .flat_map(|f| words.iter().map(move |w| f.call(w).unwrap()))
        .collect();
    for a in &values {
        for b in &values {
            assert_eq!(a <= b, a < b || *a == *b.text());
            assert_eq!(a >= b, a > b || *a == *b.text());
        }
    }
}

#[test]
#[serial]
fn comparisons_against_other_values() {
    let v = red("5", false, false).unwrap();
    assert!(v.eq_text(&5_i32));
    assert_eq!(v.compare(&6_i32), Ok(Ordering::Less));
    assert!(!v.eq_text(&None::<i32>));
    assert!(matches!(
        v.try_gt(&None::<i32>),
        Err(Error::NonTextComparand { .. })
    ));
}

#[test]
#[serial]
fn colored_comparands_compare_by_text_while_colorized() {
    enable();
    let a = red("apple", true, false).unwrap();
    let same = red("apple", true, false).unwrap();
    let bold_blue = ColoredString::new("blue", "apple", true, true).unwrap();
    let later = red("banana", true, false).unwrap();
    assert!(a.to_string().starts_with('\x1b'));
    assert!(a.eq_text(&same));
    assert!(a.eq_text(&bold_blue));
    assert_eq!(a.compare(&bold_blue), Ok(Ordering::Equal));
    assert_eq!(a.try_le(&same), Ok(true));
    assert_eq!(a.try_ge(&bold_blue), Ok(true));
    assert_eq!(a.try_lt(&later), Ok(true));
    assert_eq!(a.try_gt(&later), Ok(false));
    assert_eq!(a.try_le(&later), Ok(a <= later));
    assert_eq!(later.try_ge(&a), Ok(later >= a));
}

#[test]
#[serial]
fn always_color_ignores_global_disable() {
    disable();
    let loud = red("x", true, false).unwrap();
    let quiet = red("x", false, false).unwrap();
    assert!(loud.to_string().contains("\x1b[31m"));
    assert_eq!(quiet.to_string(), "x");
    enable();
}

#[test]
#[serial]
fn concatenation_gives_plain_strings() {
    disable();
    let v = red("a", false, false).unwrap();
    let s: String = &v + "b";
    assert_eq!(s, "ab");
    assert_eq!(v.prepend("z"), "za");
    assert_eq!(v.chars().collect::<String>(), "a");
    enable();
}

#[test]
#[serial]
fn unknown_operation_by_name_is_none() {
    let v = red("abc", false, false).unwrap();
    assert!(v.call("no_such_method", &[]).is_none());
    assert_eq!(v.call("upper", &[]).into_text().unwrap(), "ABC");
}

#[test]
fn clean_is_idempotent() {
    let samples = [
        "plain",
        "\x1b[31m\x1b[22mred\x1b[22m\x1b[39m",
        "\x1b[\x1b[31mA",
        "\u{9b}1;2mX\x1b[0m",
        "\x1b[38;5;200mwide\x1b[0m",
    ];
    for s in samples {
        let once = clean(s);
        assert_eq!(clean(&once), once);
        assert!(!once.contains('\x1b'), "{once:?}");
    }
}
