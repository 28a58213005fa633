//! End-to-end tests of the grammar-to-automata pipeline.

use libregular::prelude::*;

const SAMPLE_GRAMMAR: &str = "S -> aA | b\nA -> a | e";

fn sample_dfa() -> Dfa {
    let grammar = Grammar::parse(SAMPLE_GRAMMAR).unwrap();
    Nfa::from_grammar(&grammar).determinize()
}

#[test]
fn grammar_language_is_exactly_a_aa_b() {
    let dfa = sample_dfa();

    assert_eq!(dfa.accepts("a"), Ok(true));
    assert_eq!(dfa.accepts("aa"), Ok(true));
    assert_eq!(dfa.accepts("b"), Ok(true));

    assert_eq!(dfa.accepts("ab"), Ok(false));
    assert_eq!(dfa.accepts(""), Ok(false));
    assert_eq!(dfa.accepts("ba"), Ok(false));
    assert_eq!(dfa.accepts("aaa"), Ok(false));
}

#[test]
fn nfa_has_grammar_states_plus_one_sink() {
    let grammar = Grammar::parse(SAMPLE_GRAMMAR).unwrap();
    let nfa = Nfa::from_grammar(&grammar);

    // S, A and the accepting sink.
    assert_eq!(nfa.states().len(), 3);
    assert_eq!(nfa.accepting().len(), 1);

    // The empty alternative of A becomes an epsilon edge into the sink.
    let sink = nfa.accepting().iter().next().unwrap();
    let a_state = StateId::named("q1");
    assert!(nfa.targets(&a_state, &Label::Epsilon).unwrap().contains(sink));
}

#[test]
fn empty_production_grammar_accepts_only_the_empty_string() {
    let grammar = Grammar::parse("S -> e").unwrap();
    let dfa = Nfa::from_grammar(&grammar).determinize();

    assert_eq!(dfa.accepts(""), Ok(true));
    assert_eq!(
        dfa.accepts("a"),
        Err(AcceptError::SymbolNotInAlphabet { symbol: 'a' })
    );
}

#[test]
fn malformed_production_fails_before_any_automaton_exists() {
    let err = Grammar::parse("S -> abc").unwrap_err();
    assert!(matches!(err, GrammarError::MalformedProduction { .. }));
}

#[test]
fn reversal_then_determinization_accepts_mirrored_strings() {
    let grammar = Grammar::parse("S -> aB\nB -> bC\nC -> c").unwrap();
    let dfa = Nfa::from_grammar(&grammar).determinize();
    assert_eq!(dfa.accepts("abc"), Ok(true));

    let reversed = dfa.reverse().determinize();
    assert_eq!(reversed.accepts("cba"), Ok(true));
    assert_eq!(reversed.accepts("abc"), Ok(false));
}

#[test]
fn complement_disagrees_with_the_original_everywhere() {
    let dfa = sample_dfa();
    let complemented = dfa.complement();

    for input in ["", "a", "aa", "b", "ab", "ba", "bb", "aab", "bba"] {
        assert_ne!(
            dfa.accepts(input).unwrap(),
            complemented.accepts(input).unwrap(),
            "same verdict on {input:?}"
        );
    }
}

#[test]
fn independent_construction_passes_are_identical() {
    let grammar = Grammar::parse(SAMPLE_GRAMMAR).unwrap();
    let first = Nfa::from_grammar(&grammar);
    let second = Nfa::from_grammar(&grammar);
    assert_eq!(first, second);
    assert_eq!(first.determinize(), second.determinize());
}

#[test]
fn all_four_reports_round_trip_through_text() {
    let grammar = Grammar::parse(SAMPLE_GRAMMAR).unwrap();
    let nfa = Nfa::from_grammar(&grammar);
    let dfa = nfa.determinize();

    let reports = [
        Report::from_automaton(&nfa, ReportKind::OriginalNfa),
        Report::from_automaton(&dfa, ReportKind::Dfa),
        Report::from_automaton(&dfa.reverse(), ReportKind::ReversedNfa),
        Report::from_automaton(&dfa.complement(), ReportKind::ComplementDfa),
    ];

    for report in reports {
        let mut buffer = Vec::new();
        TextReportSerializer::serialize(&report, &mut buffer).unwrap();
        let back = TextReportSerializer::deserialize(buffer.as_slice()).unwrap();
        assert_eq!(back, report);
    }
}

#[test]
fn deserialized_dfa_behaves_like_the_original() {
    let dfa = sample_dfa();
    let report = Report::from_automaton(&dfa, ReportKind::Dfa);

    let mut buffer = Vec::new();
    JsonSerializer::serialize(&report, &mut buffer).unwrap();
    let restored = JsonSerializer::deserialize(buffer.as_slice())
        .unwrap()
        .to_dfa()
        .unwrap();

    for input in ["", "a", "aa", "b", "ab", "aab"] {
        assert_eq!(dfa.accepts(input), restored.accepts(input));
    }
}

#[test]
fn self_loop_grammar_is_handled_by_the_normal_paths() {
    // S -> aS | e: the language a*.
    let grammar = Grammar::parse("S -> aS | e").unwrap();
    let dfa = Nfa::from_grammar(&grammar).determinize();

    assert_eq!(dfa.accepts(""), Ok(true));
    assert_eq!(dfa.accepts("aaaa"), Ok(true));
    assert!(!dfa.states().contains(&StateId::Dead));
}

#[test]
fn shared_leading_terminal_keeps_both_branches() {
    // Both branches on 'a' must survive: the language is {ab, ac}.
    let grammar = Grammar::parse("S -> aB | aC\nB -> b\nC -> c").unwrap();
    let dfa = Nfa::from_grammar(&grammar).determinize();

    assert_eq!(dfa.accepts("ab"), Ok(true));
    assert_eq!(dfa.accepts("ac"), Ok(true));
    assert_eq!(dfa.accepts("a"), Ok(false));
}
