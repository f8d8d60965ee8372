use std::{cell::Cell, rc::Rc};

use tuplet::{
    create_context, evaluate, parse, stringify,
    error::RuntimeError,
    interpreter::{
        evaluator::core::Context,
        value::{core::Value, namespace::Bindings},
    },
};

async fn eval_in(context: &mut Context, source: &str) -> Value {
    let program = parse(source).unwrap_or_else(|e| panic!("Parse failed: {e}\n{source}"));
    evaluate(&program, context).await
                               .unwrap_or_else(|e| panic!("Script failed: {e}\n{source}"))
}

async fn eval_value(source: &str) -> Value {
    let mut context = create_context([]);
    eval_in(&mut context, source).await
}

async fn eval_error(source: &str) -> RuntimeError {
    let program = parse(source).unwrap_or_else(|e| panic!("Parse failed: {e}\n{source}"));
    let mut context = create_context([]);
    match evaluate(&program, &mut context).await {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail: {source}"),
        Err(e) => e,
    }
}

fn scenario_context() -> Context {
    create_context([("a".to_string(), Value::Number(10.0)),
                    ("b".to_string(), Value::Number(20.0)),
                    ("T".to_string(), Value::Boolean(true)),
                    ("F".to_string(), Value::Boolean(false))])
}

fn numbers(values: &[f64]) -> Value {
    Value::from_elements(values.iter().map(|n| Value::Number(*n)).collect())
}

#[tokio::test]
async fn tuple_flattening_and_normalization() {
    assert_eq!(eval_value("1, (2, 3), (), 4").await, numbers(&[1.0, 2.0, 3.0, 4.0]));
    assert_eq!(eval_value("(1, (), 2)").await, numbers(&[1.0, 2.0]));
    assert_eq!(eval_value("()").await, Value::Nothing);
    assert_eq!(eval_value("((), ())").await, Value::Nothing);
    assert_eq!(eval_value("(5, ())").await, Value::Number(5.0));
    assert_eq!(eval_value("type (5, ())").await, Value::from("Number"));
    assert_eq!(eval_value("type (1, 2)").await, Value::from("Tuple"));
}

#[tokio::test]
async fn function_definition_and_application() {
    assert_eq!(eval_value("((x, y) -> x + y) (3, 4)").await, Value::Number(7.0));
    assert_eq!(eval_value("(x -> x * x) 6").await, Value::Number(36.0));
    assert_eq!(eval_value("(() -> 9) ()").await, Value::Number(9.0));
}

#[tokio::test]
async fn recursion_through_captured_scope() {
    assert_eq!(eval_value("f = n -> n <= 1 ? 1 ; n * f(n - 1); f 5").await,
               Value::Number(120.0));
}

#[tokio::test]
async fn namespace_literals_collect_local_bindings() {
    assert_eq!(eval_value("size {x = 1, y = 2, x + y}").await, Value::Number(2.0));
    assert_eq!(eval_value("{x = 1, y = 2} 'y'").await, Value::Number(2.0));
    assert_eq!(eval_value("{} 'anything'").await, Value::Nothing);
    assert_eq!(eval_value("size {}").await, Value::Number(0.0));
}

#[tokio::test]
async fn subcontexting_shadows_outer_names() {
    let mut context = scenario_context();
    assert_eq!(eval_in(&mut context, "ns = {p = 7}; ns.(p * p) + a").await,
               Value::Number(59.0));
    assert_eq!(eval_in(&mut context, "{a = 1}.a + a").await, Value::Number(11.0));
    assert_eq!(eval_in(&mut context, "({x = 1}, {x = 2}).x").await,
               numbers(&[1.0, 2.0]));
}

#[tokio::test]
async fn dot_requires_a_namespace() {
    let error = eval_error("5 . x").await;
    assert_eq!(error.message(), "namespace expected on the left of '.'");

    let error = eval_error("(1, {p = 2}).p").await;
    assert_eq!(error.message(), "namespace expected on the left of '.'");
}

#[tokio::test]
async fn repetition_concatenation_and_merge() {
    assert_eq!(eval_value("[1, 2, 3] * 2").await,
               Value::from(vec![Value::Number(1.0),
                                Value::Number(2.0),
                                Value::Number(3.0),
                                Value::Number(1.0),
                                Value::Number(2.0),
                                Value::Number(3.0)]));
    assert_eq!(eval_value("'ab' * 3").await, Value::from("ababab"));
    assert_eq!(eval_value("'ab' * -1").await, Value::from(""));
    assert_eq!(eval_value("'a' + 'b'").await, Value::from("ab"));
    assert_eq!(eval_value("[1] + [2]").await,
               Value::from(vec![Value::Number(1.0), Value::Number(2.0)]));

    let mut context = create_context([]);
    assert_eq!(eval_in(&mut context, "m = {a = 1, b = 2} + {b = 20, c = 30}; size m").await,
               Value::Number(3.0));
    assert_eq!(eval_in(&mut context, "m 'a'").await, Value::Number(1.0));
    assert_eq!(eval_in(&mut context, "m 'b'").await, Value::Number(20.0));
    assert_eq!(eval_in(&mut context, "m 'c'").await, Value::Number(30.0));
}

#[tokio::test]
async fn lifted_arithmetic_zips_with_nothing_padding() {
    assert_eq!(eval_value("(1, 2, 3) + (10, 20, 30)").await, numbers(&[11.0, 22.0, 33.0]));
    assert_eq!(eval_value("(1, 2, 3) + 10").await, numbers(&[11.0, 2.0, 3.0]));
    assert_eq!(eval_value("(1, 2) * (3, 4, 5)").await, numbers(&[3.0, 8.0]));
    assert_eq!(eval_value("() + 5").await, Value::Number(5.0));
    assert_eq!(eval_value("5 - ()").await, Value::Number(5.0));
    assert_eq!(eval_value("() - 5").await, Value::Nothing);
    assert_eq!(eval_value("() % 7").await, Value::Number(7.0));
}

#[tokio::test]
async fn tuple_comparison_is_lexicographic() {
    assert_eq!(eval_value("(1, 2, 3) < (1, 2, 4)").await, Value::Boolean(true));
    assert_eq!(eval_value("(1, 2) < (1, 2, 4)").await, Value::Boolean(true));
    assert_eq!(eval_value("() < 0").await, Value::Boolean(true));
    assert_eq!(eval_value("(1, 2, 4) <= (1, 2, 4)").await, Value::Boolean(true));
    assert_eq!(eval_value("(2, 1) > (1, 9, 9)").await, Value::Boolean(true));
}

#[tokio::test]
async fn comparison_is_antisymmetric() {
    for (left, right) in [("1", "2"), ("'a'", "'b'"), ("(1, 2)", "(1, 3)"), ("()", "0")] {
        let forward = eval_value(&format!("{left} < {right}")).await;
        let backward = eval_value(&format!("{right} > {left}")).await;
        assert_eq!(forward, backward, "{left} vs {right}");
    }
}

#[tokio::test]
async fn list_comparison_prefers_shorter_prefix() {
    assert_eq!(eval_value("[1, 2] < [1, 2, 0]").await, Value::Boolean(true));
    assert_eq!(eval_value("[1, 3] > [1, 2, 9]").await, Value::Boolean(true));
    assert_eq!(eval_value("[1, 2] == [1, 2]").await, Value::Boolean(true));
}

#[tokio::test]
async fn equality_across_kinds_is_false_not_an_error() {
    assert_eq!(eval_value("1 == '1'").await, Value::Boolean(false));
    assert_eq!(eval_value("TRUE == 1").await, Value::Boolean(false));
    assert_eq!(eval_value("() == 0").await, Value::Boolean(false));
    assert_eq!(eval_value("1 != '1'").await, Value::Boolean(true));
}

#[tokio::test]
async fn function_equality_is_identity() {
    assert_eq!(eval_value("(x -> x) == (x -> x)").await, Value::Boolean(false));
    assert_eq!(eval_value("f = x -> x; f == f").await, Value::Boolean(true));

    let error = eval_error("(x -> x) < (x -> x)").await;
    assert_eq!(error.message(),
               "Comparison operation not defined between Function and Function");
}

#[tokio::test]
async fn namespace_equality_ignores_insertion_order() {
    assert_eq!(eval_value("{a = 1, b = 2} == {b = 2, a = 1}").await, Value::Boolean(true));
    assert_eq!(eval_value("{a = 1} == {a = 2}").await, Value::Boolean(false));
    assert_eq!(eval_value("{a = 1} == {a = 1, b = 2}").await, Value::Boolean(false));
}

#[tokio::test]
async fn short_circuit_results() {
    let mut context = scenario_context();
    assert_eq!(eval_in(&mut context, "F | 'hi'").await, Value::from("hi"));
    assert_eq!(eval_in(&mut context, "10 & 0").await, Value::Number(0.0));
    assert_eq!(eval_in(&mut context, "() ; 'fallback'").await, Value::from("fallback"));
    assert_eq!(eval_in(&mut context, "0 | ()").await, Value::Nothing);
    assert_eq!(eval_in(&mut context, "F & b").await, Value::Boolean(false));
    assert_eq!(eval_in(&mut context, "T ? b").await, Value::Number(20.0));
    assert_eq!(eval_in(&mut context, "F ? b").await, Value::Nothing);
}

#[tokio::test]
async fn short_circuit_skips_the_right_operand() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let tick = Value::host(move |_arguments| {
        seen.set(seen.get() + 1);
        Box::pin(async { Ok(Value::Boolean(true)) })
    });

    let mut context = create_context([("tick".to_string(), tick)]);

    eval_in(&mut context, "1 | tick ()").await;
    eval_in(&mut context, "0 & tick ()").await;
    eval_in(&mut context, "0 ? tick ()").await;
    eval_in(&mut context, "'kept' ; tick ()").await;
    assert_eq!(calls.get(), 0);

    eval_in(&mut context, "0 | tick ()").await;
    eval_in(&mut context, "1 & tick ()").await;
    eval_in(&mut context, "1 ? tick ()").await;
    eval_in(&mut context, "() ; tick ()").await;
    assert_eq!(calls.get(), 4);
}

#[tokio::test]
async fn conditional_chains() {
    assert_eq!(eval_value("2 > 1 ? 'yes' ; 'no'").await, Value::from("yes"));
    assert_eq!(eval_value("1 > 2 ? 'yes' ; 'no'").await, Value::from("no"));
    assert_eq!(eval_value("n = 2; n == 1 ? 'one' ; n == 2 ? 'two' ; 'many'").await,
               Value::from("two"));
    assert_eq!(eval_value("n = 9; n == 1 ? 'one' ; n == 2 ? 'two' ; 'many'").await,
               Value::from("many"));
}

#[tokio::test]
async fn operator_errors_name_both_kinds() {
    let mut context = scenario_context();
    let program = parse("T + 1").unwrap();
    let error = evaluate(&program, &mut context).await.unwrap_err();
    assert_eq!(error.message(), "Sum operation not defined between Boolean and Number");

    assert_eq!(eval_error("'a' - 1").await.message(),
               "Difference operation not defined between String and Number");
    assert_eq!(eval_error("{} ^ 2").await.message(),
               "Power operation not defined between Namespace and Number");
    assert_eq!(eval_error("1 / ()").await.message(),
               "Quotient operation not defined between Number and Nothing");
    assert_eq!(eval_error("7 % ()").await.message(),
               "Remainder operation not defined between Number and Nothing");
    assert_eq!(eval_error("1 2").await.message(),
               "Application operation not defined for Number");
    assert_eq!(eval_error("{a = 1} 2").await.message(),
               "Application operation not defined between Namespace and Number");
}

#[tokio::test]
async fn labelling_distributes_values_over_names() {
    let mut context = create_context([]);

    eval_in(&mut context, "(x, y, z) = (1, 2)").await;
    assert_eq!(eval_in(&mut context, "x").await, Value::Number(1.0));
    assert_eq!(eval_in(&mut context, "y").await, Value::Number(2.0));
    assert_eq!(eval_in(&mut context, "z").await, Value::Nothing);

    eval_in(&mut context, "(p, q) = (1, 2, 3, 4)").await;
    assert_eq!(eval_in(&mut context, "p").await, Value::Number(1.0));
    assert_eq!(eval_in(&mut context, "q").await, numbers(&[2.0, 3.0, 4.0]));

    eval_in(&mut context, "lone = (7, 8)").await;
    assert_eq!(eval_in(&mut context, "lone").await, numbers(&[7.0, 8.0]));

    // Zero names against any number of values is a no-op.
    assert_eq!(eval_in(&mut context, "() = (1, 2)").await, Value::Nothing);
}

#[tokio::test]
async fn labelling_returns_values_assignment_returns_nothing() {
    assert_eq!(eval_value("(x, y) : (7, 8)").await, numbers(&[7.0, 8.0]));
    assert_eq!(eval_value("x : 5").await, Value::Number(5.0));
    assert_eq!(eval_value("x = 5").await, Value::Nothing);
}

#[tokio::test]
async fn invalid_binding_targets_fail() {
    assert_eq!(eval_error("1 = 2").await.message(), "name expected on the left of ':'");
    assert_eq!(eval_error("(x + y) = 2").await.message(),
               "name expected on the left of ':'");
    assert_eq!(eval_error("(1, 2) -> 3").await.message(),
               "name expected on the left of ':'");
}

#[tokio::test]
async fn lexical_capture_shares_frames() {
    let mut context = create_context([]);

    eval_in(&mut context, "a = 1").await;
    eval_in(&mut context, "f = x -> x + a").await;

    // A sibling scope rebinding `a` must not change `f`.
    eval_in(&mut context, "sibling = {a = 50, ()}").await;
    assert_eq!(eval_in(&mut context, "f 1").await, Value::Number(2.0));

    // Rebinding `a` in the captured frame must.
    eval_in(&mut context, "a = 2").await;
    assert_eq!(eval_in(&mut context, "f 1").await, Value::Number(3.0));
}

#[tokio::test]
async fn closures_capture_their_call_frame() {
    assert_eq!(eval_value("make = n -> (x -> x + n); add3 = make 3; add3 4").await,
               Value::Number(7.0));
}

#[tokio::test]
async fn indexing_strings_and_lists() {
    assert_eq!(eval_value("'hello' 1").await, Value::from("e"));
    assert_eq!(eval_value("'hello' (-1)").await, Value::from("o"));
    assert_eq!(eval_value("'hello' 1.9").await, Value::from("e"));
    assert_eq!(eval_value("'hello' 99").await, Value::from(""));
    assert_eq!(eval_value("'hello' 'x'").await, Value::from(""));

    assert_eq!(eval_value("[10, 20, 30] 0").await, Value::Number(10.0));
    assert_eq!(eval_value("[10, 20, 30] (-1)").await, Value::Number(30.0));
    assert_eq!(eval_value("[10, 20, 30] 1.9").await, Value::Number(20.0));
    assert_eq!(eval_value("[10, 20, 30] 5").await, Value::Nothing);
    assert_eq!(eval_value("[10, 20, 30] 'x'").await, Value::Nothing);
}

#[tokio::test]
async fn lists_are_deep_not_flattened() {
    assert_eq!(eval_value("size [[1, 2], [3]]").await, Value::Number(2.0));
    assert_eq!(eval_value("([[1, 2], [3]] 0) 1").await, Value::Number(2.0));
    assert_eq!(eval_value("size [(1, 2), 3]").await, Value::Number(3.0));
    assert_eq!(eval_value("size []").await, Value::Number(0.0));
}

#[tokio::test]
async fn application_lifts_over_tuples() {
    assert_eq!(eval_value("('ab', 'cd') 1").await,
               Value::from_elements(vec![Value::from("b"), Value::from("d")]));
    assert_eq!(eval_value("((x -> x + 1), (x -> x * 2)) 10").await,
               numbers(&[11.0, 20.0]));
}

#[tokio::test]
async fn builtin_bool_not_and_truthiness() {
    assert_eq!(eval_value("bool 0").await, Value::Boolean(false));
    assert_eq!(eval_value("bool 3").await, Value::Boolean(true));
    assert_eq!(eval_value("bool ''").await, Value::Boolean(false));
    assert_eq!(eval_value("bool 'x'").await, Value::Boolean(true));
    assert_eq!(eval_value("bool []").await, Value::Boolean(false));
    assert_eq!(eval_value("bool {}").await, Value::Boolean(false));
    assert_eq!(eval_value("bool (x -> x)").await, Value::Boolean(true));
    assert_eq!(eval_value("bool (0, 0)").await, Value::Boolean(false));
    assert_eq!(eval_value("bool (0, 1)").await, Value::Boolean(true));
    assert_eq!(eval_value("not ()").await, Value::Boolean(true));
    assert_eq!(eval_value("not 1").await, Value::Boolean(false));
}

#[tokio::test]
async fn builtin_str_forms() {
    assert_eq!(eval_value("str ()").await, Value::from(""));
    assert_eq!(eval_value("str TRUE").await, Value::from("TRUE"));
    assert_eq!(eval_value("str FALSE").await, Value::from("FALSE"));
    assert_eq!(eval_value("str 120").await, Value::from("120"));
    assert_eq!(eval_value("str 2.5").await, Value::from("2.5"));
    assert_eq!(eval_value("str 'id'").await, Value::from("id"));
    assert_eq!(eval_value("str (1, '-', 2)").await, Value::from("1-2"));
    assert_eq!(eval_value("str [1, 2]").await, Value::from("<list(2)>"));
    assert_eq!(eval_value("str (x -> x)").await, Value::from("<function>"));
    assert_eq!(eval_value("str {a = 1}").await, Value::from("<namespace(1)>"));
    assert_eq!(eval_value("str {__str__ = 'custom'}").await, Value::from("custom"));
}

#[tokio::test]
async fn builtin_size() {
    assert_eq!(eval_value("size 'abc'").await, Value::Number(3.0));
    assert_eq!(eval_value("size [1, 2]").await, Value::Number(2.0));
    assert_eq!(eval_value("size {a = 1}").await, Value::Number(1.0));
    assert_eq!(eval_error("size 5").await.message(), "Size not defined for Number");
    assert_eq!(eval_error("size ()").await.message(), "Size not defined for Nothing");
}

#[tokio::test]
async fn builtin_range() {
    assert_eq!(eval_value("range 4").await, numbers(&[0.0, 1.0, 2.0, 3.0]));
    assert_eq!(eval_value("range -3").await, numbers(&[0.0, -1.0, -2.0]));
    assert_eq!(eval_value("range 1").await, Value::Number(0.0));
    assert_eq!(eval_value("range 0").await, Value::Nothing);
    assert_eq!(eval_value("range 2.9").await, numbers(&[0.0, 1.0]));
    assert_eq!(eval_error("range 'x'").await.message(), "Range not defined for String");
}

#[tokio::test]
async fn builtin_enum_preserves_order() {
    let mut context = create_context([]);

    eval_in(&mut context, "records = [enum {b = 1, a = 2}]").await;
    assert_eq!(eval_in(&mut context, "(records 0) 'name'").await, Value::from("b"));
    assert_eq!(eval_in(&mut context, "(records 1) 'name'").await, Value::from("a"));
    assert_eq!(eval_in(&mut context, "(records 1) 'value'").await, Value::Number(2.0));

    eval_in(&mut context, "items = [enum [5, 6]]").await;
    assert_eq!(eval_in(&mut context, "(items 0) 'index'").await, Value::Number(0.0));
    assert_eq!(eval_in(&mut context, "(items 1) 'value'").await, Value::Number(6.0));

    eval_in(&mut context, "chars = [enum 'ab']").await;
    assert_eq!(eval_in(&mut context, "(chars 1) 'value'").await, Value::from("b"));

    assert_eq!(eval_error("enum (x -> x)").await.message(),
               "Enum not defined for Function");
}

#[tokio::test]
async fn builtin_type_names() {
    assert_eq!(eval_value("type ()").await, Value::from("Nothing"));
    assert_eq!(eval_value("type TRUE").await, Value::from("Boolean"));
    assert_eq!(eval_value("type 1").await, Value::from("Number"));
    assert_eq!(eval_value("type 'x'").await, Value::from("String"));
    assert_eq!(eval_value("type []").await, Value::from("List"));
    assert_eq!(eval_value("type {}").await, Value::from("Namespace"));
    assert_eq!(eval_value("type str").await, Value::from("Function"));
    assert_eq!(eval_value("type (1, 2)").await, Value::from("Tuple"));
    assert_eq!(eval_value("type missing").await, Value::from("Nothing"));
}

#[tokio::test]
async fn builtin_map_lifts_a_function() {
    assert_eq!(eval_value("map (x -> x * 2) (1, 2, 3)").await, numbers(&[2.0, 4.0, 6.0]));
    assert_eq!(eval_value("map (x -> x * 2) 5").await, Value::Number(10.0));
    assert_eq!(eval_value("map (x -> x * 2) ()").await, Value::Nothing);
    assert_eq!(eval_error("map 3").await.message(), "Map not defined for Number");
}

#[tokio::test]
async fn namespace_apply_hook_delegates() {
    assert_eq!(eval_value("ns = {__apply__ = x -> x + 1}; ns 41").await,
               Value::Number(42.0));
}

#[tokio::test]
async fn division_follows_ieee() {
    assert_eq!(eval_value("1 / 0 > 1e308").await, Value::Boolean(true));
    assert_eq!(eval_value("type (0 / 0)").await, Value::from("Nothing"));
    assert_eq!(eval_value("7 % 4").await, Value::Number(3.0));
    assert_eq!(eval_value("2 ^ 10").await, Value::Number(1024.0));
}

#[tokio::test]
async fn number_literal_forms() {
    assert_eq!(eval_value(".5 + 1").await, Value::Number(1.5));
    assert_eq!(eval_value("2e3").await, Value::Number(2000.0));
    assert_eq!(eval_value("1.5e-1").await, Value::Number(0.15));
    assert_eq!(eval_value("-5 + 3").await, Value::Number(-2.0));
    assert_eq!(eval_value("3 - -5").await, Value::Number(8.0));
}

#[tokio::test]
async fn string_kinds_and_comments() {
    assert_eq!(eval_value("\"a\" + 'b' + `c`").await, Value::from("abc"));
    assert_eq!(eval_value("1 + # ignored to the end of the line\n2").await,
               Value::Number(3.0));
    assert_eq!(eval_value("'# not a comment'").await, Value::from("# not a comment"));
}

#[tokio::test]
async fn unresolved_names_yield_nothing() {
    assert_eq!(eval_value("missing").await, Value::Nothing);
    assert_eq!(eval_value("missing ; 'default'").await, Value::from("default"));
}

#[tokio::test]
async fn illegal_identifiers_never_resolve() {
    let context = create_context([("2fast".to_string(), Value::Number(1.0)),
                                  ("has-dash".to_string(), Value::Number(2.0))]);
    assert_eq!(context.get("2fast"), Value::Nothing);
    assert_eq!(context.get("has-dash"), Value::Nothing);

    let mut smuggled = Bindings::new();
    smuggled.insert("2fast", Value::Number(1.0));
    let mut context = create_context([("ns".to_string(), Value::from(smuggled))]);
    assert_eq!(eval_in(&mut context, "ns '2fast'").await, Value::Nothing);
}

#[tokio::test]
async fn host_callables_may_suspend() {
    let incr = Value::host(|arguments| {
        Box::pin(async move {
            tokio::task::yield_now().await;
            match arguments.first() {
                Some(Value::Number(n)) => Ok(Value::Number(n + 1.0)),
                _ => Ok(Value::Nothing),
            }
        })
    });

    let mut context = create_context([("incr".to_string(), incr)]);
    assert_eq!(eval_in(&mut context, "incr 41").await, Value::Number(42.0));
    assert_eq!(eval_in(&mut context, "incr (incr 40)").await, Value::Number(42.0));
}

#[tokio::test]
async fn host_errors_propagate_untouched() {
    let fail = Value::host(|_arguments| {
        Box::pin(async {
            Err(RuntimeError::Host { message: "backend unavailable".to_string() })
        })
    });

    let mut context = create_context([("fail".to_string(), fail)]);
    let program = parse("1 + fail ()").unwrap();
    let error = evaluate(&program, &mut context).await.unwrap_err();
    assert_eq!(error, RuntimeError::Host { message: "backend unavailable".to_string() });
}

#[tokio::test]
async fn globals_shadow_builtins() {
    let mut context = create_context([("size".to_string(), Value::Number(99.0))]);
    assert_eq!(eval_in(&mut context, "size").await, Value::Number(99.0));
}

#[tokio::test]
async fn evaluation_reuses_programs_and_contexts() {
    let program = parse("counter = counter + 1; counter").unwrap();
    let mut context = create_context([]);

    // `counter` starts unresolved, and Nothing + 1 is 1.
    assert_eq!(evaluate(&program, &mut context).await.unwrap(), Value::Number(1.0));
    assert_eq!(evaluate(&program, &mut context).await.unwrap(), Value::Number(2.0));
    assert_eq!(evaluate(&program, &mut context).await.unwrap(), Value::Number(3.0));
}

#[tokio::test]
async fn stringify_matches_the_str_builtin() {
    assert_eq!(stringify(&Value::Nothing), "");
    assert_eq!(stringify(&numbers(&[1.0, 2.0])), "12");
    assert_eq!(stringify(&Value::Boolean(false)), "FALSE");
}

#[test]
fn parse_failures_are_fatal() {
    assert!(parse("1 +").is_err());
    assert!(parse("(1").is_err());
    assert!(parse("[1, 2").is_err());
    assert!(parse("{a = 1").is_err());
    assert!(parse("'unterminated").is_err());
    assert!(parse("@").is_err());
    assert!(parse("1 2 )").is_err());
    assert!(parse("").is_err());
}

#[test]
fn parse_errors_carry_lines() {
    let error = parse("1 +\n+ 2\n").unwrap_err();
    let rendered = format!("{error}");
    assert!(rendered.contains("line 2"), "{rendered}");
}
