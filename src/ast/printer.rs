use crate::ast::{
    Program,
    node::{FieldValue, NodeRef},
};

const AST_INDENT: &str = "  ";

#[derive(Default)]
struct PrintHelper {
    result: String,
}

impl PrintHelper {
    fn appendln(&mut self, indent: usize, s: &str) {
        self.result += &AST_INDENT.repeat(indent);
        self.result += s;
        self.result.push('\n');
    }

    fn print_node(&mut self, node: NodeRef<'_>, indent: usize) {
        self.appendln(indent, node.kind_name());
        for (name, value) in node.fields() {
            self.appendln(indent + 1, &format!("{name}:"));
            self.print_value(&value, indent + 2);
        }
    }

    fn print_value(&mut self, value: &FieldValue<'_>, indent: usize) {
        match value {
            FieldValue::None => self.appendln(indent, "None"),
            FieldValue::Const(name) => self.appendln(indent, name),
            FieldValue::Scalar(s) => self.appendln(indent, s),
            FieldValue::Seq(items) => {
                for item in items {
                    self.print_value(item, indent);
                }
            }
            FieldValue::Node(node) => self.print_node(*node, indent),
        }
    }
}

/// Renders an indented dump of the tree, one node, field name or leaf per line.
pub fn print_ast(program: &Program) -> String {
    let mut helper = PrintHelper::default();
    helper.print_node(NodeRef::Program(program), 0);
    helper.result
}
