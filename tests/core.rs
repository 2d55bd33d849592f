//! End-to-end tests for the public API.
//!
//! Tests cover parsing, evaluation, and truth table generation.

use truth_table::ast::{BinOp, Expr};
use truth_table::eval::Assignment;
use truth_table::truth_table::{Classification, TruthTable};
use truth_table::{parse, Error, EvalError, Formula, ParseError};

fn table(input: &str) -> TruthTable {
    parse(input).unwrap().truth_table().unwrap()
}

fn tokens(t: &TruthTable, i: usize) -> Vec<&'static str> {
    t.row_tokens(i)
}

// ─── Truth Tables ──────────────────────────────────────────────────────────────

#[test]
fn atom_table() {
    let t = table("a");
    assert_eq!(t.header(), ["a"]);
    assert_eq!(t.num_rows(), 2);
    assert_eq!(tokens(&t, 0), ["F"]);
    assert_eq!(tokens(&t, 1), ["T"]);
}

#[test]
fn negation_table() {
    let t = table("!a");
    assert_eq!(t.header(), ["(!a)", "a"]);
    assert_eq!(tokens(&t, 0), ["T", "F"]);
    assert_eq!(tokens(&t, 1), ["F", "T"]);
}

#[test]
fn conjunction_table() {
    let t = table("a&b");
    assert_eq!(t.header(), ["(a&b)", "a", "b"]);
    // bit 0 is a, bit 1 is b
    assert_eq!(tokens(&t, 1), ["F", "T", "F"]);
    assert_eq!(tokens(&t, 3), ["T", "T", "T"]);
}

#[test]
fn dimensions_match_variables_and_nodes() {
    for input in ["a", "!a", "a&b|c", "(a->b)<->(!b->!a)", "p|q|r|s|t|u"] {
        let f = parse(input).unwrap();
        let t = f.truth_table().unwrap();
        assert_eq!(t.num_rows(), 1usize << f.num_vars(), "rows of {}", input);
        assert_eq!(t.num_columns(), f.preorder().len(), "columns of {}", input);
    }
}

#[test]
fn column_order_is_preorder() {
    let t = table("(a|b)&!c");
    assert_eq!(t.header(), ["((a|b)&(!c))", "(a|b)", "a", "b", "(!c)", "c"]);
}

#[test]
fn every_cell_matches_direct_evaluation() {
    let f = parse("(p->q)&!(r<->p)|q").unwrap();
    let t = f.truth_table().unwrap();
    let columns = f.preorder();
    for (i, row) in t.rows().iter().enumerate() {
        let assignment = t.assignment(i);
        for (j, &idx) in columns.iter().enumerate() {
            assert_eq!(row[j], f.eval(idx, &assignment).unwrap());
        }
    }
}

// ─── Semantics ─────────────────────────────────────────────────────────────────

#[test]
fn implication_is_ordered() {
    let f = parse("a->b").unwrap();
    let Expr::Binary(BinOp::Implies, lhs, rhs) = *f.node(f.root()) else {
        panic!("root is not an implication");
    };
    assert_eq!(f.node(lhs), &Expr::Atom(f.var('a').unwrap()));
    assert_eq!(f.node(rhs), &Expr::Atom(f.var('b').unwrap()));

    let mut assignment = Assignment::unset(2);
    assignment.set(f.var('a').unwrap(), true);
    assignment.set(f.var('b').unwrap(), false);
    assert_eq!(f.eval_root(&assignment), Ok(false));
    assignment.set(f.var('a').unwrap(), false);
    assignment.set(f.var('b').unwrap(), true);
    assert_eq!(f.eval_root(&assignment), Ok(true));
}

#[test]
fn canonical_rendering() {
    assert_eq!(parse("a&b|c").unwrap().to_string(), "((a&b)|c)");
    assert_eq!(parse("(((a)&(b))|(c))").unwrap().to_string(), "((a&b)|c)");
    assert_eq!(parse("a <-> b -> c").unwrap().to_string(), "(a<->(b->c))");
}

#[test]
fn reparsing_canonical_form_is_stable() {
    for input in ["a&b|c", "!a->b<->c", "a->b->c", "!(a|!b)&c"] {
        let first = parse(input).unwrap();
        let second: Formula = first.to_string().parse().unwrap();
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.truth_table().unwrap().rows(), second.truth_table().unwrap().rows());
    }
}

#[test]
fn evaluation_is_idempotent() {
    let f = parse("a&(b|!c)").unwrap();
    let assignment = Assignment::from_index(3, 5);
    let first = f.eval_root(&assignment).unwrap();
    assert!((0..100).all(|_| f.eval_root(&assignment).unwrap() == first));
}

#[test]
fn tautology_and_contradiction() {
    let t = table("a|!a");
    assert!(t.root_column().all(|v| v));
    assert_eq!(t.classify(), Classification::Tautology);

    let t = table("a&!a");
    assert!(t.root_column().all(|v| !v));
    assert_eq!(t.classify(), Classification::Contradiction);

    assert_eq!(table("(a->b)<->(!b->!a)").classify(), Classification::Tautology);
    assert_eq!(table("(a->b)<->(b->a)").classify(), Classification::Contingency);
}

// ─── Errors ────────────────────────────────────────────────────────────────────

#[test]
fn unset_atom_is_undetermined() {
    let f = parse("a|b").unwrap();
    let assignment = f.assignment();
    assert_eq!(f.eval_root(&assignment), Err(EvalError::UndeterminedValue { name: 'a' }));
}

#[test]
fn compound_is_not_assignable() {
    let f = parse("a|b").unwrap();
    let mut assignment = f.assignment();
    let err = f.assign(f.root(), true, &mut assignment).unwrap_err();
    assert_eq!(err, EvalError::InvalidMutation { node: f.root() });
}

#[test]
fn malformed_input_is_rejected() {
    let cases = [
        ("", ParseError::Empty),
        ("(a", ParseError::UnmatchedOpen { pos: 0 }),
        ("a)", ParseError::UnmatchedClose { pos: 1 }),
        ("a&", ParseError::MissingOperand { pos: 2 }),
        ("a b", ParseError::MissingOperator { pos: 2 }),
        ("a+b", ParseError::UnexpectedChar { ch: '+', pos: 1 }),
        ("a=>b", ParseError::UnexpectedChar { ch: '=', pos: 1 }),
    ];
    for (input, expected) in cases {
        assert_eq!(parse(input).unwrap_err(), expected, "input {:?}", input);
    }
}

#[test]
fn errors_convert_to_crate_error() {
    fn run(input: &str) -> truth_table::Result<TruthTable> {
        Ok(parse(input)?.truth_table()?)
    }
    assert!(run("a|b").is_ok());
    assert_eq!(run("a|").unwrap_err(), Error::Parse(ParseError::MissingOperand { pos: 2 }));
    assert_eq!(run("a|").unwrap_err().to_string(), "missing operand at position 2");
}
