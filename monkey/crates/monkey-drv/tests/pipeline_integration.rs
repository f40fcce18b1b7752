//! Pipeline integration tests: source text through lexer, parser and
//! evaluator via the driver entry points.

use monkey_drv::{eval_source, parse_source};
use monkey_obj::{Environment, Value};

fn eval_fresh(source: &str) -> Option<Value> {
    let env = Environment::new();
    eval_source(source, &env).unwrap_or_else(|errors| {
        panic!("parser errors for {:?}: {:?}", source, errors);
    })
}

fn inspect(source: &str) -> String {
    eval_fresh(source)
        .unwrap_or_else(|| panic!("no value produced for {:?}", source))
        .inspect()
}

#[test]
fn test_arithmetic_precedence() {
    assert_eq!(inspect("(5 + 10 * 2 + 15 / 3) * 2 + -10"), "50");
}

#[test]
fn test_if_else_truthiness() {
    assert_eq!(inspect("if (1 > 2) { 10 } else { 20 }"), "20");
    assert_eq!(inspect("if (false) { 10 }"), "null");
}

#[test]
fn test_return_through_nested_blocks() {
    assert_eq!(
        inspect("if (10 > 1) { if (10 > 1) { return 10; } return 1; }"),
        "10"
    );
}

#[test]
fn test_closures() {
    assert_eq!(
        inspect("let newAdder = fn(x){ fn(y){ x+y } }; let addTwo = newAdder(2); addTwo(2)"),
        "4"
    );
}

#[test]
fn test_type_mismatch_error() {
    assert_eq!(inspect("5 + true;"), "ERROR: type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn test_builtins() {
    assert_eq!(inspect("len([1,2,3])"), "3");
    assert_eq!(inspect("rest([1,2,3])"), "[2, 3]");
    assert_eq!(inspect("push([], 1)"), "[1]");
    assert_eq!(
        inspect("first(1)"),
        "ERROR: argument to `first` must be ARRAY, got INTEGER"
    );
}

#[test]
fn test_hash_pipeline() {
    let source = r#"let two = "two";
{"one":10-9, two:1+1, "thr"+"ee":6/2, 4:4, true:5, false:6}["three"]"#;
    assert_eq!(inspect(source), "3");

    assert_eq!(
        inspect(r#"{"name":"Monkey"}[fn(x){x}]"#),
        "ERROR: unusable as hash key: FUNCTION"
    );
}

#[test]
fn test_function_inspect_format() {
    assert_eq!(inspect("fn(x, y) { x + y; }"), "fn(x, y) {\n(x + y)\n}");
}

#[test]
fn test_higher_order_program() {
    let source = "
let map = fn(arr, f) {
  let iter = fn(arr, accumulated) {
    if (len(arr) == 0) {
      accumulated
    } else {
      iter(rest(arr), push(accumulated, f(first(arr))))
    }
  };
  iter(arr, []);
};
map([1, 2, 3, 4], fn(x) { x * 2 });";
    assert_eq!(inspect(source), "[2, 4, 6, 8]");
}

#[test]
fn test_reduce_program() {
    let source = "
let reduce = fn(arr, initial, f) {
  let iter = fn(arr, result) {
    if (len(arr) == 0) {
      result
    } else {
      iter(rest(arr), f(result, first(arr)))
    }
  };
  iter(arr, initial);
};
let sum = fn(arr) { reduce(arr, 0, fn(initial, el) { initial + el }) };
sum([1, 2, 3, 4, 5]);";
    assert_eq!(inspect(source), "15");
}

#[test]
fn test_parse_errors_block_evaluation() {
    let env = Environment::new();
    let result = eval_source("let x 5;", &env);
    let errors = result.unwrap_err();
    assert_eq!(errors, ["expected next token to be =, got INT instead"]);

    // Nothing was bound by the failed program.
    assert_eq!(env.borrow().get("x"), None);
}

#[test]
fn test_parse_source_shapes() {
    let program = parse_source("-a * b").expect("should parse");
    assert_eq!(program.to_string(), "((-a) * b)");
}
