//! Renders a [`Program`] back to source-like text for debugging.
//!
//! Binary expressions are fully parenthesized except at the top of a condition, so the output
//! shows how the parser grouped them. Parse-error placeholders print as `<error>`.

use super::{
    ast::{Program, VarDeclList},
    expressions::Expr,
    statements::Stmt,
};

const INDENT: &str = "    ";

pub fn print_program(program: &Program) -> String {
    let mut printer = Printer::default();
    printer.program(program);
    printer.out
}

pub fn print_expr(expr: &Expr) -> String {
    format_expr(expr, false)
}

#[derive(Default)]
struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn program(&mut self, program: &Program) {
        self.out.push_str("int main() {\n");
        self.indent += 1;

        for list in &program.declarations {
            self.declaration(list);
        }
        for stmt in &program.statements {
            self.stmt(stmt);
        }

        self.indent -= 1;
        self.out.push_str("}\n");
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    fn declaration(&mut self, list: &VarDeclList) {
        let Some(first) = list.decls.first() else {
            return;
        };
        let names: Vec<&str> = list.decls.iter().map(|decl| decl.id.name.as_str()).collect();

        self.write_indent();
        self.out
            .push_str(&format!("{} {};\n", first.ty, names.join(", ")));
    }

    fn stmt(&mut self, stmt: &Stmt) {
        self.write_indent();
        self.stmt_inline(stmt);
    }

    /// Writes `stmt` from the current column up to and including its final newline.
    fn stmt_inline(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(block) => {
                self.out.push_str("{\n");
                self.indent += 1;
                for stmt in block.iter() {
                    self.stmt(stmt);
                }
                self.indent -= 1;
                self.write_indent();
                self.out.push_str("}\n");
            }
            Stmt::If(if_stmt) => {
                self.out
                    .push_str(&format!("if ({})", format_expr(&if_stmt.condition, true)));
                self.body(&if_stmt.then_body);

                if let Some(else_body) = &if_stmt.else_body {
                    self.write_indent();
                    self.out.push_str("else");
                    self.body(else_body);
                }
            }
            Stmt::While(while_stmt) => {
                self.out
                    .push_str(&format!("while ({})", format_expr(&while_stmt.condition, true)));
                self.body(&while_stmt.body);
            }
            Stmt::Assign(assign) => {
                self.out
                    .push_str(&format!("{} = {};\n", assign.id, print_expr(&assign.value)));
            }
            Stmt::ArrayAssign(assign) => {
                self.out.push_str(&format!(
                    "{}[{}] = {};\n",
                    assign.id,
                    print_expr(&assign.index),
                    print_expr(&assign.value)
                ));
            }
            Stmt::Error => self.out.push_str("<error>;\n"),
        }
    }

    /// Body of an `if`, `else` or `while`: blocks stay on the same line, anything else goes on
    /// its own indented line.
    fn body(&mut self, stmt: &Stmt) {
        if let Stmt::Block(_) = stmt {
            self.out.push(' ');
            self.stmt_inline(stmt);
        } else {
            self.out.push('\n');
            self.indent += 1;
            self.stmt(stmt);
            self.indent -= 1;
        }
    }
}

fn format_expr(expr: &Expr, top: bool) -> String {
    match expr {
        Expr::Int(value) => value.to_string(),
        Expr::Float(value) => format!("{:?}", value),
        Expr::Char(value) => format!("'{}'", value),
        Expr::Boolean(value) => value.to_string(),
        Expr::Identifier(id) => id.to_string(),
        Expr::Not(operand) => format!("!{}", format_expr(operand, false)),
        Expr::Negate(operand) => format!("-{}", format_expr(operand, false)),
        Expr::Binary(binary) => {
            let inner = format!(
                "{} {} {}",
                format_expr(&binary.left, false),
                binary.operator.symbol(),
                format_expr(&binary.right, false)
            );
            if top {
                inner
            } else {
                format!("({})", inner)
            }
        }
        Expr::ArrayLookup(lookup) => format!(
            "{}[{}]",
            format_expr(&lookup.array, false),
            format_expr(&lookup.index, false)
        ),
        Expr::ArrayLength(array) => format!("{}.length", format_expr(array, false)),
        Expr::NewArray(size) => format!("new int[{}]", format_expr(size, false)),
        Expr::Error => "<error>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{print_expr, print_program};
    use crate::{
        ast::{
            ast::Program,
            expressions::{BinaryOp, Expr},
        },
        parser::parser::parse_source,
    };

    #[test]
    fn test_print_program() {
        let source = "int main() { int a, b; float[3] xs; boolean done; \
                      a = 1 + 2 * b; xs[0] = 2.5; \
                      while (!done) { if (a < b) a = a + 1; else done = true; } }";
        let parsed = parse_source(source);
        assert_eq!(parsed.error_count(), 0);

        let expected = "\
int main() {
    int a, b;
    float[] xs;
    boolean done;
    a = (1 + (2 * b));
    xs[0] = 2.5;
    while (!done) {
        if (a < b)
            a = (a + 1);
        else
            done = true;
    }
}
";
        assert_eq!(print_program(&parsed.program), expected);
    }

    #[test]
    fn test_print_placeholders() {
        let parsed = parse_source("int main() { int a; ; a = ); }");
        let printed = print_program(&parsed.program);

        assert!(printed.contains("    <error>;\n"));
        assert!(printed.contains("    a = <error>;\n"));
    }

    #[test]
    fn test_print_expressions() {
        assert_eq!(print_expr(&Expr::Char('q')), "'q'");
        assert_eq!(
            print_expr(&Expr::array_lookup(
                Expr::identifier("xs"),
                Expr::Negate(Box::new(Expr::Int(1)))
            )),
            "xs[-1]"
        );
        assert_eq!(
            print_expr(&Expr::ArrayLength(Box::new(Expr::identifier("xs")))),
            "xs.length"
        );
        assert_eq!(
            print_expr(&Expr::NewArray(Box::new(Expr::binary(
                Expr::Int(2),
                BinaryOp::Times,
                Expr::Int(4)
            )))),
            "new int[(2 * 4)]"
        );
    }

    #[test]
    fn test_print_empty_program() {
        assert_eq!(print_program(&Program::default()), "int main() {\n}\n");
    }
}
