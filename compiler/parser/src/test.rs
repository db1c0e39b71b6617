// Copyright (C) 2019-2022 The Sparkling Developers.
// This file is part of the Sparkling library.

// The Sparkling library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Sparkling library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Sparkling library. If not, see <https://www.gnu.org/licenses/>.

use crate::{ParserContext, SpannedToken};

use sparkling_ast::*;
use sparkling_errors::emitter::Handler;
use sparkling_errors::{ParserError, Result, SparklingError};

fn tokenize_source(source: &str) -> Vec<SpannedToken> {
    crate::tokenize(source).expect("tokenizing failed")
}

fn not_fully_consumed(tokens: &mut ParserContext) -> Result<(), String> {
    if !tokens.has_next() {
        return Ok(());
    }
    let mut out = "did not consume all input: ".to_string();
    while tokens.has_next() {
        tokens.bump();
        out.push_str(&tokens.prev_token.to_string());
        out.push('\n');
    }
    Err(out)
}

fn with_handler<T>(
    tokens: Vec<SpannedToken>,
    logic: impl FnOnce(&mut ParserContext<'_>) -> Result<T>,
) -> Result<T, String> {
    let (handler, buf) = Handler::new_with_buf();
    let mut tokens = ParserContext::new(&handler, tokens);
    let parsed = handler
        .extend_if_error(logic(&mut tokens))
        .map_err(|_| buf.extract_errs().to_string())?;
    not_fully_consumed(&mut tokens)?;
    Ok(parsed)
}

fn parse_expr(source: &str) -> Expression {
    with_handler(tokenize_source(source), |p| p.parse_expression())
        .unwrap_or_else(|e| panic!("failed to parse `{source}`: {e}"))
}

fn expr_str(source: &str) -> String {
    parse_expr(source).to_string()
}

fn parse_program_ok(source: &str) -> Program {
    let (handler, buf) = Handler::new_with_buf();
    let program = crate::parser::parse(&handler, source)
        .unwrap_or_else(|_| panic!("failed to parse `{source}`: {}", buf.extract_errs()));
    assert!(!handler.had_errors());
    program
}

fn parse_program_err(source: &str) -> (SparklingError, String) {
    let (handler, buf) = Handler::new_with_buf();
    let err = crate::parser::parse(&handler, source).expect_err("parse should have failed");

    // Exactly one diagnostic per failed parse, retained by the handler.
    assert_eq!(handler.err_count(), 1);
    let msg = buf.extract_errs().last().cloned().expect("no diagnostic emitted");
    assert_eq!(handler.last_message().as_deref(), Some(msg.as_str()));
    assert_eq!(handler.last_err(), Some(err.clone()));

    (err, msg)
}

// Recursively filter `span` keys from AST JSON, for comparisons across
// sources with different layout.
fn remove_key_from_json(value: &mut serde_json::Value, key: &str) {
    match value {
        serde_json::value::Value::Object(map) => {
            map.remove(key);
            for val in map.values_mut() {
                remove_key_from_json(val, key);
            }
        }
        serde_json::value::Value::Array(values) => {
            for val in values.iter_mut() {
                remove_key_from_json(val, key);
            }
        }
        _ => (),
    }
}

fn json_without_spans(program: &Program) -> serde_json::Value {
    let mut json = serde_json::to_value(program).expect("failed to convert to json value");
    remove_key_from_json(&mut json, "span");
    json
}

#[test]
fn test_empty_input() {
    let (handler, _buf) = Handler::new_with_buf();
    let program = crate::parser::parse(&handler, "").expect("empty input should parse");
    assert!(program.is_empty());
    assert!(!handler.had_errors());
}

#[test]
fn test_lone_semicolon() {
    let program = parse_program_ok(";");
    assert_eq!(program.statements.len(), 1);
    assert!(matches!(program.statements[0], Statement::Empty(_)));
}

#[test]
fn test_empty_block_collapses_to_empty_statement() {
    let program = parse_program_ok("{}");
    assert_eq!(program.statements.len(), 1);
    assert!(matches!(program.statements[0], Statement::Empty(_)));

    // A non-empty block stays a block.
    let program = parse_program_ok("{ x; }");
    assert!(matches!(program.statements[0], Statement::Block(_)));
}

#[test]
fn test_binary_precedence() {
    assert_eq!(expr_str("a + b * c"), "(a + (b * c))");
    assert_eq!(expr_str("a * b + c"), "((a * b) + c)");
    assert_eq!(expr_str("a - b - c"), "((a - b) - c)");
    assert_eq!(expr_str("a || b && c"), "(a || (b && c))");
    assert_eq!(expr_str("a | b ^ c & d"), "(a | (b ^ (c & d)))");
    assert_eq!(expr_str("a < b << c + d * e"), "(a < (b << (c + (d * e))))");
    assert_eq!(expr_str("a == b != c"), "((a == b) != c)");
    assert_eq!(expr_str("(a + b) * c"), "((a + b) * c)");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(expr_str("a = b = c"), "(a = (b = c))");
    assert_eq!(expr_str("a += b ..= c"), "(a += (b ..= c))");
    assert_eq!(expr_str("a <<= b >> c"), "(a <<= (b >> c))");
}

#[test]
fn test_concat_is_left_associative_and_loose() {
    assert_eq!(expr_str("a .. b .. c"), "((a .. b) .. c)");
    // Concat binds looser than the ternary below it in the ladder.
    assert_eq!(expr_str("a .. b ? c : d"), "(a .. (b ? c : d))");
}

#[test]
fn test_ternary_nests_into_false_branch() {
    assert_eq!(expr_str("a ? b : c ? d : e"), "(a ? b : (c ? d : e))");
    // The true branch resets to the full expression level.
    assert_eq!(expr_str("a ? b = c : d"), "(a ? (b = c) : d)");
}

#[test]
fn test_unary_operators() {
    assert_eq!(expr_str("- -x"), "(-(-x))");
    assert_eq!(expr_str("!x && ~y"), "((!x) && (~y))");
    assert_eq!(expr_str("sizeof x + 1"), "((sizeof x) + 1)");
    assert_eq!(expr_str("typeof #0"), "(typeof (#0))");
    assert_eq!(expr_str("++x"), "(++x)");
    assert_eq!(expr_str("x++ * 2"), "((x++) * 2)");
    assert_eq!(expr_str("++x--"), "(++(x--))");
}

#[test]
fn test_keyword_operator_aliases() {
    assert_eq!(expr_str("a and b or not c"), "((a && b) || (!c))");
}

#[test]
fn test_postfix_chain() {
    assert_eq!(expr_str("f(x)[i].m"), "f(x)[i].m");
    let expr = parse_expr("f(x)[i].m");

    // MemberOf(ArrSub(FuncCall(f, x), i), m), growing leftward.
    let member = match expr {
        Expression::Access(AccessExpression::Member(member)) => member,
        expr => panic!("expected a member access, got `{expr}`"),
    };
    assert_eq!(member.name.name, "m");
    let array = match *member.inner {
        Expression::Access(AccessExpression::Array(array)) => array,
        expr => panic!("expected a subscript, got `{expr}`"),
    };
    let call = match *array.array {
        Expression::Call(call) => call,
        expr => panic!("expected a call, got `{expr}`"),
    };
    assert_eq!(call.arguments.len(), 1);
    assert!(matches!(*call.function, Expression::Identifier(ref id) if id.name == "f"));
}

#[test]
fn test_member_access_arrow_collapses_to_dot() {
    let dot = parse_expr("a.b");
    let arrow = parse_expr("a->b");
    assert_eq!(dot.to_string(), "a.b");
    assert_eq!(arrow.to_string(), "a.b");
    assert!(matches!(arrow, Expression::Access(AccessExpression::Member(_))));
}

#[test]
fn test_literals() {
    assert!(matches!(
        parse_expr("42"),
        Expression::Literal(LiteralExpression { value: LiteralValue::Integer(42), .. })
    ));
    assert!(matches!(
        parse_expr("'AB'"),
        Expression::Literal(LiteralExpression { value: LiteralValue::Integer(0x4142), .. })
    ));
    assert!(matches!(
        parse_expr("true"),
        Expression::Literal(LiteralExpression { value: LiteralValue::Boolean(true), .. })
    ));
    assert!(matches!(
        parse_expr("null"),
        Expression::Literal(LiteralExpression { value: LiteralValue::Nil, .. })
    ));
    match parse_expr("nan") {
        Expression::Literal(LiteralExpression {
            value: LiteralValue::Float(v),
            ..
        }) => assert!(v.is_nan()),
        expr => panic!("expected a float literal, got `{expr}`"),
    }
    match parse_expr(r#""sp\x61rk""#) {
        Expression::Literal(LiteralExpression {
            value: LiteralValue::Str(s),
            ..
        }) => assert_eq!(s, "spark"),
        expr => panic!("expected a string literal, got `{expr}`"),
    }
}

#[test]
fn test_sequence_and_dictionary_literals() {
    let seq = parse_expr("@[1, 2, 3]");
    assert_eq!(seq.to_string(), "@[1, 2, 3]");
    assert!(matches!(seq, Expression::Sequence(ref s) if s.elements.len() == 3));

    // A trailing comma is tolerated.
    assert_eq!(parse_expr("@[1, 2,]").to_string(), "@[1, 2]");

    let dict = parse_expr(r#"@{ "k": 1, 2: x }"#);
    assert_eq!(dict.to_string(), "@{\"k\": 1, 2: x}");
    assert!(matches!(dict, Expression::Dictionary(ref d) if d.entries.len() == 2));

    assert_eq!(parse_expr("@[]").to_string(), "@[]");
    assert_eq!(parse_expr("@{}").to_string(), "@{}");
}

#[test]
fn test_scenario_var_declaration() {
    let program = parse_program_ok("var x = 1 + 2 * 3;");
    let definition = match &program.statements[..] {
        [Statement::Definition(definition)] => definition,
        _ => panic!("expected a single definition statement"),
    };
    assert_eq!(definition.declarations.len(), 1);
    let declaration = &definition.declarations[0];
    assert_eq!(declaration.identifier.name, "x");
    assert_eq!(
        declaration.initializer.as_ref().map(|e| e.to_string()).as_deref(),
        Some("(1 + (2 * 3))")
    );
}

#[test]
fn test_scenario_if_else_chain() {
    let source = "if x < 10 { return x; } else if x < 20 { return 0; } else { return -1; }";
    let program = parse_program_ok(source);
    let conditional = match &program.statements[..] {
        [Statement::Conditional(conditional)] => conditional,
        _ => panic!("expected a single conditional statement"),
    };
    assert_eq!(conditional.condition.to_string(), "(x < 10)");
    assert_eq!(conditional.then.statements.len(), 1);

    // The else-if chain nests to the right.
    let nested = match conditional.otherwise.as_deref() {
        Some(Statement::Conditional(nested)) => nested,
        other => panic!("expected a nested conditional, got {other:?}"),
    };
    assert_eq!(nested.condition.to_string(), "(x < 20)");
    assert!(matches!(nested.otherwise.as_deref(), Some(Statement::Block(_))));

    assert_eq!(
        program.to_string(),
        "if (x < 10) { return x; } else if (x < 20) { return 0; } else { return (-1); }"
    );
}

#[test]
fn test_scenario_for_loop() {
    let program = parse_program_ok("for i = 0; i < n; i++ { a = a + i; }");
    let for_stmt = match &program.statements[..] {
        [Statement::For(for_stmt)] => for_stmt,
        _ => panic!("expected a single for statement"),
    };
    assert_eq!(for_stmt.init.to_string(), "(i = 0)");
    assert_eq!(for_stmt.condition.to_string(), "(i < n)");
    assert_eq!(for_stmt.step.to_string(), "(i++)");
    assert_eq!(for_stmt.body.statements.len(), 1);
}

#[test]
fn test_scenario_foreach_loop() {
    let program = parse_program_ok("foreach k as v in arr { print(k, v); }");
    let foreach = match &program.statements[..] {
        [Statement::Foreach(foreach)] => foreach,
        _ => panic!("expected a single foreach statement"),
    };
    assert_eq!(foreach.key.name, "k");
    assert_eq!(foreach.value.name, "v");
    assert_eq!(foreach.iterable.to_string(), "arr");
    assert_eq!(program.to_string(), "foreach k as v in arr { print(k, v); }");
}

#[test]
fn test_scenario_function_declaration() {
    let source = "function fib(n) { return n < 2 ? 1 : fib(n-1) + fib(n-2); }";
    let program = parse_program_ok(source);
    let function = match &program.statements[..] {
        [Statement::Function(function)] => function,
        _ => panic!("expected a single function statement"),
    };
    assert_eq!(function.identifier.name, "fib");
    assert_eq!(function.parameters.len(), 1);
    assert_eq!(function.parameters[0].name, "n");
    assert_eq!(
        program.to_string(),
        "function fib(n) { return ((n < 2) ? 1 : (fib((n - 1)) + fib((n - 2)))); }"
    );
}

#[test]
fn test_scenario_unexpected_token() {
    let (err, msg) = parse_program_err("x = ;");
    assert!(matches!(
        err,
        SparklingError::ParserError(ParserError::UnexpectedToken { .. })
    ));
    assert_eq!(msg, "Sparkling: syntax error near line 1: unexpected token `;`");
}

#[test]
fn test_do_while() {
    let program = parse_program_ok("do { x++; } while x < 10;");
    let do_while = match &program.statements[..] {
        [Statement::DoWhile(do_while)] => do_while,
        _ => panic!("expected a single do-while statement"),
    };
    assert_eq!(do_while.condition.to_string(), "(x < 10)");
    assert_eq!(program.to_string(), "do { (x++); } while (x < 10);");
}

#[test]
fn test_while_break_continue() {
    let program = parse_program_ok("while true { break; continue; }");
    let while_stmt = match &program.statements[..] {
        [Statement::While(while_stmt)] => while_stmt,
        _ => panic!("expected a single while statement"),
    };
    assert!(matches!(while_stmt.body.statements[..], [
        Statement::Break(_),
        Statement::Continue(_)
    ]));
}

#[test]
fn test_var_declaration_list() {
    let program = parse_program_ok("var a, b = 2, c;");
    let definition = match &program.statements[..] {
        [Statement::Definition(definition)] => definition,
        _ => panic!("expected a single definition statement"),
    };
    let initializers: Vec<bool> = definition
        .declarations
        .iter()
        .map(|d| d.initializer.is_some())
        .collect();
    assert_eq!(initializers, vec![false, true, false]);
}

#[test]
fn test_return_without_value() {
    let program = parse_program_ok("function f() { return; }");
    let function = match &program.statements[..] {
        [Statement::Function(function)] => function,
        _ => panic!("expected a single function statement"),
    };
    assert!(function.parameters.is_empty());
    assert!(matches!(
        function.block.statements[..],
        [Statement::Return(ReturnStatement { expression: None, .. })]
    ));
}

#[test]
fn test_function_expression() {
    let program = parse_program_ok("var f = function(x) { return x; };");
    assert_eq!(program.to_string(), "var f = function(x) { return x; };");
}

#[test]
fn test_named_function_expression_is_rejected() {
    // At file scope the named form is a statement; nested it must be anonymous.
    let (err, _) = parse_program_err("{ function f() { return 0; } }");
    assert!(matches!(
        err,
        SparklingError::ParserError(ParserError::NamedFunctionExpression { .. })
    ));
}

#[test]
fn test_structural_errors() {
    let (_, msg) = parse_program_err("a");
    assert!(msg.contains("expected ';'"), "message was: {msg}");

    let (_, msg) = parse_program_err("if x return x;");
    assert!(msg.contains("expected '{'"), "message was: {msg}");

    let (err, msg) = parse_program_err("if x {} else y;");
    assert!(matches!(
        err,
        SparklingError::ParserError(ParserError::UnexpectedElseClause { .. })
    ));
    assert!(msg.contains("after `else`"), "message was: {msg}");

    let (_, msg) = parse_program_err("foreach k v in a {}");
    assert!(msg.contains("expected 'as'"), "message was: {msg}");

    let (err, _) = parse_program_err("else {}");
    assert!(matches!(
        err,
        SparklingError::ParserError(ParserError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_lexical_error_surfaces_through_parse() {
    let (err, msg) = parse_program_err("x = 1;\ny = \"open;\n");
    assert!(matches!(
        err,
        SparklingError::ParserError(ParserError::LexerStringNotClosed { .. })
    ));
    assert!(msg.starts_with("Sparkling: syntax error near line 2: "), "message was: {msg}");
}

#[test]
fn test_line_attribution() {
    let program = parse_program_ok("x;\ny;\n\nz;");
    let lines: Vec<u32> = program.statements.iter().map(|s| s.span().line()).collect();
    assert_eq!(lines, vec![1, 2, 4]);
    for line in lines {
        assert!(line >= 1);
    }
}

#[test]
fn test_determinism() {
    let source = "function f(a, b) { return a ? b : @[1, 2.5, \"s\"]; }\nvar g = f(1, 2) .. \"x\";";
    assert_eq!(parse_program_ok(source), parse_program_ok(source));
}

#[test]
fn test_pretty_print_round_trip() {
    let sources = [
        "var x = 1 + 2 * 3;",
        "if x < 10 { return x; } else if x < 20 { return 0; } else { return -1; }",
        "for i = 0; i < n; i++ { a = a + i; }",
        "foreach k as v in arr { print(k, v); }",
        "function fib(n) { return n < 2 ? 1 : fib(n-1) + fib(n-2); }",
        "do { x++; } while x < 10;",
        "var a, b = 2, c;",
        "f(x)[i].m = a->b .. \"tail\\n\";",
        "x = @{ \"k\": @[1, 'AB', 2.5], 0: nil };",
        "nan;",
        ";",
        "{}",
        "var f = function() { return #0; };",
        "a = b = not c and d;",
    ];
    for source in sources {
        let first = parse_program_ok(source);
        let second = parse_program_ok(&first.to_string());
        assert_eq!(
            json_without_spans(&first),
            json_without_spans(&second),
            "round trip changed the tree for `{source}`"
        );
    }
}

#[test]
fn test_ast_json_round_trip() {
    let (handler, _buf) = Handler::new_with_buf();
    let ast = crate::parse_ast(&handler, "function f(x) { return x + 1; }").expect("parse failed");
    let json = ast.to_json_string().expect("serialization failed");
    let back = Ast::from_json_string(&json).expect("deserialization failed");
    assert_eq!(ast.as_repr(), back.as_repr());
}
