use winnow::ascii::digit1;
use winnow::combinator::{eof, opt, repeat};
use winnow::token::{one_of, take_while};
use winnow::{IResult, Parser};

pub mod version;

/// Maximum number of dot-separated numeric fields.
pub const MAX_COMPONENTS: usize = 4;

/// Largest value a parsed numeric field may hold.
pub const MAX_COMPONENT_VALUE: u32 = i32::MAX as u32;

/// Pieces of a version string, before they are assigned to fields.
#[derive(Debug, PartialEq)]
struct Parts<'a> {
    components: Vec<u32>,
    suffix: &'a str,
}

fn component(input: &str) -> IResult<&str, u32> {
    digit1
        .try_map(str::parse::<u32>)
        .verify(|num: &u32| *num <= MAX_COMPONENT_VALUE)
        .parse_next(input)
}

fn dotted_component(input: &str) -> IResult<&str, u32> {
    ('.', component).map(|(_, num)| num).parse_next(input)
}

fn components(input: &str) -> IResult<&str, Vec<u32>> {
    (component, repeat(0..=MAX_COMPONENTS - 1, dotted_component))
        .map(|(first, rest): (u32, Vec<u32>)| {
            let mut components = Vec::with_capacity(MAX_COMPONENTS);
            components.push(first);
            components.extend(rest);
            components
        })
        .parse_next(input)
}

fn is_suffix_lead(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}

fn is_suffix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

// A suffix never starts with a digit or a dot: those belong to the numeric run,
// and a dot left over after it means an empty or surplus segment.
fn suffix(input: &str) -> IResult<&str, &str> {
    (one_of(is_suffix_lead), take_while(0.., is_suffix_char))
        .recognize()
        .parse_next(input)
}

fn parts(input: &str) -> IResult<&str, Parts<'_>> {
    (components, opt(suffix))
        .map(|(components, suffix)| Parts {
            components,
            suffix: suffix.unwrap_or_default(),
        })
        .parse_next(input)
}

fn parse_parts(input: &str) -> Option<Parts<'_>> {
    match (parts, eof).map(|(parts, _)| parts).parse_next(input) {
        Ok((_, parts)) => Some(parts),
        _ => None,
    }
}

#[cfg(test)]
mod grammar_test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("42", 42)]
    #[case("007", 7)]
    #[case("2147483647", 2147483647)]
    fn parse_component(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(component(input), Ok(("", expected)));
    }

    #[test]
    fn component_limit() {
        let max = MAX_COMPONENT_VALUE.to_string();
        assert_eq!(component(&max), Ok(("", MAX_COMPONENT_VALUE)));

        let above = (u64::from(MAX_COMPONENT_VALUE) + 1).to_string();
        assert!(component(&above).is_err());

        // fits in u32, still above the limit
        assert!(component(&u32::MAX.to_string()).is_err());
    }

    #[rstest]
    #[case("2147483648")]
    #[case("99999999999")]
    #[case("-1")]
    #[case("")]
    #[case("a1")]
    fn reject_component(#[case] input: &str) {
        assert!(component(input).is_err());
    }

    #[test]
    fn components_stop_after_the_fourth() {
        assert_eq!(components("1.2.3.4.5"), Ok((".5", vec![1, 2, 3, 4])));
        assert_eq!(components("1.2a2"), Ok(("a2", vec![1, 2])));
        assert_eq!(components("3..4"), Ok(("..4", vec![3])));
        assert_eq!(components("7.-1"), Ok((".-1", vec![7])));
    }

    #[rstest]
    #[case("-rc2", "-rc2", "")]
    #[case("a2", "a2", "")]
    #[case("b5.final-1", "b5.final-1", "")]
    #[case("rc1 build", "rc1", " build")]
    #[case("x+y", "x", "+y")]
    fn parse_suffix(#[case] input: &str, #[case] expected: &str, #[case] rest: &str) {
        assert_eq!(suffix(input), Ok((rest, expected)));
    }

    #[rstest]
    #[case(".1")]
    #[case("1a")]
    #[case(" rc")]
    #[case("")]
    fn reject_suffix(#[case] input: &str) {
        assert!(suffix(input).is_err());
    }

    #[test]
    fn whole_input_is_required() {
        assert_eq!(
            parse_parts("1.2.42.1982-rc2"),
            Some(Parts {
                components: vec![1, 2, 42, 1982],
                suffix: "-rc2"
            })
        );
        assert_eq!(
            parse_parts("3"),
            Some(Parts {
                components: vec![3],
                suffix: ""
            })
        );

        assert_eq!(parse_parts("1.2.3.4.5"), None);
        assert_eq!(parse_parts("5.6 rc1"), None);
        assert_eq!(parse_parts("1.2."), None);
        assert_eq!(parse_parts(" 1.2"), None);
    }
}
