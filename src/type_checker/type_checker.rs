use std::io;

use log::debug;

use crate::{
    ast::{
        ast::{Identifier, VarDecl},
        expressions::Expr,
        statements::Assignment,
        types::Type,
    },
    errors::errors::{Error, ErrorImpl, ErrorType},
    parser::parser::ParsedProgram,
};

use super::casting::{assignment_errors, AssignedValue};

/// Semantic pass over the lists collected by the parser.
///
/// The language has a single flat scope, so every lookup is a linear scan of the declarations
/// by name. Each check runs to completion and only appends to `errors`.
pub struct TypeChecker<'a> {
    declarations: &'a [VarDecl],
    errors: Vec<Error>,
}

impl<'a> TypeChecker<'a> {
    pub fn new(declarations: &'a [VarDecl]) -> Self {
        TypeChecker {
            declarations,
            errors: vec![],
        }
    }

    fn error(&mut self, kind: ErrorType, variable: &str) {
        let error = Error::without_position(ErrorImpl::Variable {
            kind,
            variable: variable.to_string(),
        });
        debug!("{}", error);
        self.errors.push(error);
    }

    /// Type of the first declaration named `name`.
    pub fn get_variable_type(&self, name: &str) -> Option<&'a Type> {
        self.declarations
            .iter()
            .find(|decl| decl.id.name == name)
            .map(|decl| &decl.ty)
    }

    /// Flags every declaration whose name was already declared earlier. Each earlier occurrence
    /// counts, so a name declared three times yields three errors.
    pub fn check_declarations(&mut self) {
        let declarations = self.declarations;

        for (i, decl) in declarations.iter().enumerate() {
            for later in &declarations[i + 1..] {
                if decl.id == later.id {
                    self.error(ErrorType::MultipleDeclaration, &later.id.name);
                }
            }
        }
    }

    /// One error per reference to an undeclared name.
    pub fn check_identifiers(&mut self, identifiers: &[Identifier]) {
        for identifier in identifiers {
            if self.get_variable_type(&identifier.name).is_none() {
                self.error(ErrorType::NoDeclaration, &identifier.name);
            }
        }
    }

    pub fn check_assignments(&mut self, assignments: &[Assignment]) {
        for assignment in assignments {
            let name = &assignment.id.name;
            let Some(target) = self.get_variable_type(name) else {
                continue;
            };

            let value = match &assignment.value {
                Expr::Identifier(source) => match self.get_variable_type(&source.name) {
                    Some(ty) => AssignedValue::Variable(ty),
                    None => continue,
                },
                expr => match expr.literal_type() {
                    Some(base) => AssignedValue::Literal(base),
                    None => continue,
                },
            };

            for kind in assignment_errors(target, &value) {
                self.error(kind, name);
            }
        }
    }

    pub fn check_conditions(&mut self, conditions: &[Expr]) {
        for condition in conditions {
            if is_invalid_condition(condition) {
                let error = Error::without_position(ErrorImpl::InvalidCondition);
                debug!("{}", error);
                self.errors.push(error);
            }
        }
    }

    pub fn finish(self) -> SemanticReport {
        SemanticReport {
            errors: self.errors,
        }
    }
}

/// A condition whose top-level operator is a comparison is rejected; every other form passes.
pub fn is_invalid_condition(condition: &Expr) -> bool {
    match condition {
        Expr::Binary(binary) => binary.operator.is_relational(),
        Expr::Int(_)
        | Expr::Float(_)
        | Expr::Char(_)
        | Expr::Boolean(_)
        | Expr::Identifier(_)
        | Expr::Not(_)
        | Expr::Negate(_)
        | Expr::ArrayLookup(_)
        | Expr::ArrayLength(_)
        | Expr::NewArray(_)
        | Expr::Error => false,
    }
}

/// Semantic errors of one program, in the order they were found.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SemanticReport {
    errors: Vec<Error>,
}

impl SemanticReport {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn diagnostics(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Writes one diagnostic per line.
    pub fn write_diagnostics<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for error in &self.errors {
            writeln!(out, "{}", error)?;
        }
        Ok(())
    }
}

/// Runs every check over `parsed`: declarations, then references, then assignments, then
/// conditions.
pub fn type_check(parsed: &ParsedProgram) -> SemanticReport {
    let mut checker = TypeChecker::new(&parsed.declarations);

    checker.check_declarations();
    checker.check_identifiers(&parsed.identifiers);
    checker.check_assignments(&parsed.assignments);
    checker.check_conditions(&parsed.conditions);

    let report = checker.finish();
    debug!("{} semantic errors", report.error_count());

    report
}
