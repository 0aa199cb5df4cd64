use minic::{
    ast::parse,
    ir::{Instruction, TacProgram, ir_value::Operand},
    irgen::IRGenerator,
    lexer::tokenize,
    tokens::TokenType,
};

fn lower(src: &str) -> TacProgram {
    let program = parse(tokenize(src).unwrap()).unwrap();
    IRGenerator::new().generate(&program)
}

fn lines(tac: &TacProgram) -> Vec<String> {
    tac.iter().map(ToString::to_string).collect()
}

#[test]
fn while_loop_shape() {
    let tac = lower("while (a < 5) { a = a + 1; }");
    assert_eq!(tac.len(), 7);

    let start = *tac[0].as_label().expect("start label first");
    let (cond_dest, _, _, _) = tac[1].as_binary().expect("comparison temp");
    let (cond, end) = tac[2].as_if_false().expect("conditional jump");
    assert_eq!(*cond, Operand::Temp(*cond_dest));

    let (sum_dest, _, _, _) = tac[3].as_binary().expect("temp for a + 1");
    let (dest, src) = tac[4].as_copy().expect("assignment to a");
    assert_eq!(dest.0, "a");
    assert_eq!(*src, Operand::Temp(*sum_dest));

    assert_eq!(*tac[5].as_goto().expect("back edge"), start);
    assert_eq!(*tac[6].as_label().expect("end label last"), *end);
    assert_ne!(start, *end);
}

#[test]
fn while_loop_text() {
    assert_eq!(lines(&lower("while (a < 5) { a = a + 1; }")), [
        "L1:",
        "t3 = a < 5",
        "ifFalse t3 goto L2",
        "t4 = a + 1",
        "a = t4",
        "goto L1",
        "L2:",
    ]);
}

#[test]
fn nested_loops_get_distinct_labels() {
    let tac = lower("while (a) { while (b) { b = b - 1; } a = a - 1; }");
    let labels: Vec<_> = tac.labels().collect();
    assert_eq!(labels.len(), 4);
    for (i, x) in labels.iter().enumerate() {
        assert!(!labels[i + 1..].contains(x), "label {x} emitted twice");
    }

    for instruction in tac.iter() {
        let target = match instruction {
            Instruction::Goto(label) => label,
            Instruction::IfFalse { target, .. } => target,
            _ => continue,
        };
        assert!(labels.contains(target), "jump to unknown label {target}");
    }
}

#[test]
fn temps_and_labels_share_one_counter() {
    let tac = lower("if (a > 1) x = -a;");
    assert_eq!(lines(&tac), [
        "t1 = a > 1",
        "ifFalse t1 goto L2",
        "t4 = -a",
        "x = t4",
        "goto L3",
        "L2:",
        "L3:",
    ]);
}

#[test]
fn read_and_print() {
    assert_eq!(lines(&lower("int n; read(n); print(n * 2, \"done\");")), [
        "read n",
        "t1 = n * 2",
        "print t1",
        "print \"done\"",
    ]);
}

#[test]
fn lowering_ignores_semantic_errors() {
    // Undeclared `y` and a float assigned to an int: lowering still succeeds.
    assert_eq!(lines(&lower("int x = 1.5; y = x;")), ["x = 1.5", "y = x"]);
}

#[test]
fn program_text_is_one_instruction_per_line() {
    let tac = lower("x = 1; print(x);");
    assert_eq!(tac.to_string(), "x = 1\nprint x\n");
}

#[test]
fn float_constants_lex_back_as_float_literals() {
    let tac = lower("float a = 0.00001; float b = 10000000000000000.0; float c = 3.0;");
    assert_eq!(lines(&tac), [
        "a = 0.00001",
        "b = 10000000000000000.0",
        "c = 3.0",
    ]);

    for instruction in tac.iter() {
        let (_, src) = instruction.as_copy().unwrap();
        let text = src.to_string();
        let tokens = tokenize(&text).unwrap();
        assert_eq!(tokens.len(), 2, "{text} is not one token");
        assert_eq!(tokens[0].token_type, TokenType::FloatLit);
        assert_eq!(tokens[0].lexeme, text);
    }
}
