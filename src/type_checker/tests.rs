use pretty_assertions::assert_eq;

use super::{
    casting::{assignment_errors, casting_error, AssignedValue},
    type_checker::{is_invalid_condition, type_check, SemanticReport},
};
use crate::{
    ast::{
        expressions::{BinaryOp, Expr},
        types::{BaseType, Type},
    },
    errors::errors::ErrorType,
    parser::parser::parse_source,
};

fn check(body: &str) -> SemanticReport {
    let parsed = parse_source(&format!("int main() {{ {} }}", body));
    assert_eq!(parsed.error_count(), 0, "syntax errors in `{}`", body);
    type_check(&parsed)
}

fn kinds(report: &SemanticReport) -> Vec<ErrorType> {
    report
        .errors()
        .iter()
        .filter_map(|error| error.get_error_type())
        .collect()
}

#[test]
fn test_clean_program() {
    let report = check("int a; float b; char c; boolean d; a = 1; b = 2.0; c = 'x'; d = true;");

    assert_eq!(report.error_count(), 0);
    assert!(report.diagnostics().is_empty());
}

#[test]
fn test_multiple_declaration_flags_later_occurrence() {
    let report = check("int a; float a;");

    assert_eq!(report.error_count(), 1);
    assert_eq!(
        report.diagnostics(),
        vec!["Declaration Error: MULTIPLE_DECLARATION, variable (a)"]
    );
}

#[test]
fn test_multiple_declaration_counts_pairs() {
    let report = check("int a, a; char a;");

    assert_eq!(kinds(&report), vec![ErrorType::MultipleDeclaration; 3]);
}

#[test]
fn test_no_declaration_per_reference() {
    let report = check("int a; a = b; a = b + b;");

    assert_eq!(kinds(&report), vec![ErrorType::NoDeclaration; 3]);
    assert_eq!(
        report.diagnostics()[0],
        "Declaration Error: NO_DECLARATION, variable (b)"
    );
}

#[test]
fn test_undeclared_target() {
    let report = check("x = 1.5;");

    assert_eq!(kinds(&report), vec![ErrorType::NoDeclaration]);
}

#[test]
fn test_float_literal_to_int() {
    let report = check("int a; a = 1.5;");

    assert_eq!(
        report.diagnostics(),
        vec!["Casting Error: FLOAT_INT_CASTING, variable (a)"]
    );
}

#[test]
fn test_literal_casting_matrix() {
    let report = check(
        "int i; float f; char c; boolean b; i = 'x'; f = 1; f = true; c = 2; b = 1.0; b = 'y';",
    );

    assert_eq!(
        kinds(&report),
        vec![
            ErrorType::CharIntCasting,
            ErrorType::IntFloatCasting,
            ErrorType::BooleanFloatCasting,
            ErrorType::IntCharCasting,
            ErrorType::FloatBooleanCasting,
            ErrorType::CharBooleanCasting,
        ]
    );
}

#[test]
fn test_variable_casting() {
    let report = check("int i; float f; boolean b; f = i; b = f; i = i;");

    assert_eq!(
        report.diagnostics(),
        vec![
            "Casting Error: INT_FLOAT_CASTING, variable (f)",
            "Casting Error: FLOAT_BOOLEAN_CASTING, variable (b)",
        ]
    );
}

#[test]
fn test_array_and_scalar_do_not_mix() {
    let report = check("int i; int[4] xs; i = xs; xs = i;");

    assert_eq!(
        report.diagnostics(),
        vec![
            "Invalid Assignment: ARRAY_TO_SINGLE, variable (i)",
            "Invalid Assignment: SINGLE_TO_ARRAY, variable (xs)",
        ]
    );
}

#[test]
fn test_scalar_of_other_type_to_array() {
    let report = check("float f; boolean[2] flags; flags = f;");

    assert_eq!(
        kinds(&report),
        vec![ErrorType::FloatBooleanCasting, ErrorType::SingleToArray]
    );
}

#[test]
fn test_array_assignment_checks_value() {
    let report = check("int[3] xs; xs[0] = 1; xs[1] = 2.5;");

    assert_eq!(kinds(&report), vec![ErrorType::FloatIntCasting]);
}

#[test]
fn test_array_element_assignment_from_scalar_variable() {
    let report = check("int v; float f; int[3] xs; xs[0] = v; xs[1] = f;");

    assert_eq!(
        report.diagnostics(),
        vec![
            "Invalid Assignment: SINGLE_TO_ARRAY, variable (xs)",
            "Casting Error: FLOAT_INT_CASTING, variable (xs)",
            "Invalid Assignment: SINGLE_TO_ARRAY, variable (xs)",
        ]
    );
}

#[test]
fn test_complex_values_are_not_cast_checked() {
    let report = check("int a; float f; a = f + 1; a = -f;");

    assert_eq!(report.error_count(), 0);
}

#[test]
fn test_comparison_conditions_are_flagged() {
    let report = check("int n; boolean b; if (n < 10) n = 0; while (b) b = false; if (b && b) n = 1;");

    assert_eq!(
        report.diagnostics(),
        vec!["Invalid Condition: INVALID_CONDITION"]
    );
}

#[test]
fn test_is_invalid_condition() {
    let compare = Expr::binary(Expr::identifier("a"), BinaryOp::NotEqual, Expr::Int(0));

    assert!(is_invalid_condition(&compare));
    assert!(!is_invalid_condition(&Expr::Not(Box::new(compare))));
    assert!(!is_invalid_condition(&Expr::Boolean(true)));
    assert!(!is_invalid_condition(&Expr::binary(
        Expr::Int(1),
        BinaryOp::Plus,
        Expr::Int(2)
    )));
    assert!(!is_invalid_condition(&Expr::Error));
}

#[test]
fn test_check_order() {
    let report = check("int a; int a; a = 1.5; b = 1; if (a == 1) a = 2;");

    assert_eq!(
        kinds(&report),
        vec![
            ErrorType::MultipleDeclaration,
            ErrorType::NoDeclaration,
            ErrorType::FloatIntCasting,
            ErrorType::InvalidCondition,
        ]
    );
}

#[test]
fn test_type_check_is_repeatable() {
    let parsed = parse_source("int main() { int a; float a; a = b; if (a > 1) a = 'c'; }");

    let first = type_check(&parsed);
    let second = type_check(&parsed);

    assert_eq!(first, second);
    assert_eq!(first.diagnostics(), second.diagnostics());
}

#[test]
fn test_casting_error_identity() {
    for base in [BaseType::Int, BaseType::Float, BaseType::Char, BaseType::Boolean] {
        assert_eq!(casting_error(base, base), None);
    }
    assert_eq!(
        casting_error(BaseType::Char, BaseType::Float),
        Some(ErrorType::CharFloatCasting)
    );
}

#[test]
fn test_assignment_errors_ignore_broken_targets() {
    assert!(assignment_errors(&Type::Error, &AssignedValue::Literal(BaseType::Int)).is_empty());
    assert!(assignment_errors(&Type::Int, &AssignedValue::Variable(&Type::Error)).is_empty());
}

#[test]
fn test_write_diagnostics() {
    let report = check("int a; a = true;");
    let mut out = Vec::new();

    report.write_diagnostics(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Casting Error: BOOLEAN_INT_CASTING, variable (a)\n"
    );
}
