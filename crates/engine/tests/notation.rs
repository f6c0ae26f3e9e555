use std::collections::HashSet;

use lottery_engine::{
    BetType, Classification, GeneratedLine, GenerationFault, Generator, GeneratorKind, Rejection,
    Section, classify, generate_lines,
};

fn play_numbers(lines: &[GeneratedLine]) -> Vec<&str> {
    lines.iter().map(|line| line.play_number.as_str()).collect()
}

fn expand(input: &str) -> Vec<String> {
    generate_lines(&classify(input))
        .unwrap()
        .into_iter()
        .map(|line| line.play_number)
        .collect()
}

#[test]
fn every_two_digit_number_is_directo() {
    for value in 0..100 {
        let input = format!("{value:02}");
        let c = classify(&input);
        assert_eq!(c.bet_type, Some(BetType::Directo), "{input}");
        assert_eq!(c.section, Some(Section::Directo), "{input}");
        assert_eq!(c.generator_kind(), GeneratorKind::None, "{input}");
        assert_eq!(expand(&input), [input.clone()]);
    }
}

#[test]
fn three_digit_q_expands_to_distinct_permutations() {
    for value in 0..1000 {
        let digits = format!("{value:03}");
        let c = classify(&format!("{digits}q"));
        assert_eq!(c.bet_type, Some(BetType::Cash3Straight));
        assert_eq!(c.generator_kind(), GeneratorKind::Combinations);

        let lines = generate_lines(&c).unwrap();
        let distinct: HashSet<char> = digits.chars().collect();
        let expected = match distinct.len() {
            1 => 1,
            2 => 3,
            _ => 6,
        };
        assert_eq!(lines.len(), expected, "{digits}");
        for line in &lines {
            let mut sorted_line: Vec<char> = line.play_number.chars().collect();
            let mut sorted_digits: Vec<char> = digits.chars().collect();
            sorted_line.sort_unstable();
            sorted_digits.sort_unstable();
            assert_eq!(sorted_line, sorted_digits, "{digits}");
        }
    }
    assert_eq!(expand("112q"), ["112", "121", "211"]);
}

#[test]
fn numeric_sequence_example() {
    let c = classify("123+125");
    assert_eq!(c.bet_type, Some(BetType::Cash3Straight));
    assert_eq!(
        c.generator,
        Generator::NumericSequence {
            start: "123".to_string(),
            end: "125".to_string(),
        }
    );
    assert_eq!(
        play_numbers(&generate_lines(&c).unwrap()),
        ["123", "124", "125"]
    );
}

#[test]
fn pair_sequence_example() {
    let c = classify("12d34");
    assert_eq!(c.bet_type, Some(BetType::Directo));
    assert_eq!(c.generator_kind(), GeneratorKind::PairSequence);

    let lines = generate_lines(&c).unwrap();
    let expected: Vec<String> = (12..=34).map(|n| format!("{n:02}")).collect();
    assert_eq!(lines.len(), 23);
    assert_eq!(
        lines.into_iter().map(|l| l.play_number).collect::<Vec<_>>(),
        expected
    );
}

#[test]
fn bolita_range_example() {
    let c = classify("98+2");
    assert_eq!(c.bet_type, Some(BetType::Bolita));
    assert_eq!(c.generator, Generator::RangeOffset { count: 2 });
    assert_eq!(expand("98+2"), ["98", "99", "00"]);
}

#[test]
fn plus_100_example() {
    let c = classify("123-10");
    assert_eq!(c.bet_type, Some(BetType::Cash3Straight));
    assert_eq!(c.generator, Generator::Plus100);
    assert_eq!(expand("123-10"), ["123", "223"]);
}

#[test]
fn inverted_sequence_is_a_fault_not_a_list() {
    let c = classify("999+124");
    assert!(c.is_valid);
    assert_eq!(
        generate_lines(&c),
        Err(GenerationFault::InvertedRange {
            start: "999".to_string(),
            end: "124".to_string(),
        })
    );
}

#[test]
fn generation_is_deterministic() {
    for input in ["1234q", "123456.", "12d34", "98+2", "123-10", "100+199", "5-3"] {
        let c = classify(input);
        assert_eq!(generate_lines(&c), generate_lines(&c.clone()), "{input}");
    }
}

#[test]
fn lines_have_bet_type_length_and_no_duplicates() {
    let inputs = [
        "00", "123", "1234", "123456", "123+", "1234+", "12345+", "1234-", "12345-", "123F",
        "123F+", "123B", "123B+", "12F", "12B", "10-3", "99+1", "99+2", "9-1", "9-2", "9-3",
        "123q", "9090q", "12.", "1212.", "121212.", "00d99", "000+999", "999-10",
    ];
    for input in inputs {
        let c = classify(input);
        assert!(c.is_valid, "{input}");
        let width = c.bet_type.map(BetType::digits).unwrap();
        let lines = generate_lines(&c).unwrap();
        assert!(!lines.is_empty(), "{input}");

        let mut seen = HashSet::new();
        for line in &lines {
            assert_eq!(line.play_number.len(), width, "{input}");
            assert!(line.play_number.bytes().all(|b| b.is_ascii_digit()), "{input}");
            assert!(seen.insert(line.play_number.clone()), "{input} repeats {line}");
        }
    }
}

#[test]
fn invalid_classifications_never_generate() {
    for input in ["", "7", "12345", "hello", "12d3"] {
        let c = classify(input);
        assert!(!c.is_valid, "{input}");
        assert_eq!(c.generator_kind(), GeneratorKind::None, "{input}");
        assert!(matches!(
            generate_lines(&c),
            Err(GenerationFault::PreconditionViolation(_))
        ));
    }
}

#[test]
fn ambiguous_notation_keeps_the_first_reading() {
    assert_eq!(classify("12").bet_type, Some(BetType::Directo));
    assert_eq!(classify("1234").bet_type, Some(BetType::Pale));
    assert_eq!(classify("1234-").bet_type, Some(BetType::Play4Straight));
}

#[test]
fn rejections_carry_operator_labels() {
    assert_eq!(classify(" ").rejection, Some(Rejection::EmptyInput));
    assert_eq!(
        classify("4").display_label,
        "Singulación requiere rango (-1,-2,-3)"
    );
    assert_eq!(classify("4444444").display_label, "Formato no válido");
}

#[test]
fn classification_round_trips_through_json() {
    let c = classify("12d34");
    let json = serde_json::to_string(&c).unwrap();
    let back: Classification = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
    assert_eq!(expand("12d34").len(), 23);
}
