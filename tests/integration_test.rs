// Integration tests for the operator tour

use optour::interpreter::engine::Interpreter;
use optour::memory::value::Value;
use optour::program::tour::{self, tour};

const GOLDEN: &str = include_str!("golden/tour.txt");

fn run_tour() -> Interpreter {
    let mut interpreter = Interpreter::new(tour());
    interpreter.run().expect("Execution failed");
    interpreter
}

fn output_of(interpreter: &Interpreter) -> String {
    let mut buf = Vec::new();
    interpreter
        .terminal()
        .write_to(&mut buf)
        .expect("Writing to a buffer cannot fail");
    String::from_utf8(buf).expect("Output is UTF-8")
}

#[test]
fn test_tour_matches_golden_output() {
    let interpreter = run_tour();
    assert!(interpreter.is_finished());

    let output = interpreter.terminal().get_output();
    let expected: Vec<&str> = GOLDEN.lines().collect();
    assert_eq!(output.len(), expected.len());
    for (i, (got, want)) in output.iter().zip(&expected).enumerate() {
        assert_eq!(got, want, "line {} differs", i + 1);
    }

    assert_eq!(output_of(&interpreter), GOLDEN);
}

#[test]
fn test_tour_is_deterministic() {
    let first = output_of(&run_tour());
    let second = output_of(&run_tour());
    assert_eq!(first, second);
}

#[test]
fn test_arithmetic_section() {
    let program = tour();
    let section = program.section(tour::ARITHMETIC).expect("section exists");

    let mut interpreter = Interpreter::new(program.clone());
    interpreter.run_section(section).expect("Execution failed");

    let output = interpreter.terminal().get_output();
    assert_eq!(
        output,
        vec![
            "Addition: 13",
            "Subtraction: 7",
            "Multiplication: 30",
            "Division: 3.3333333333333335",
            "Modulus: 1",
            "Exponentiation: 1000",
            "Floor Division: 3",
        ]
    );
}

#[test]
fn test_relational_section() {
    let program = tour();
    let section = program.section(tour::RELATIONAL).expect("section exists");

    let mut interpreter = Interpreter::new(program.clone());
    interpreter.run_section(section).expect("Execution failed");

    let output = interpreter.terminal().get_output();
    assert_eq!(&output[..6], &[
        "Equal to: False",
        "Not equal to: True",
        "Greater than: False",
        "Less than: True",
        "Greater than or equal to: False",
        "Less than or equal to: True",
    ]);
    assert!(output.contains(&"str1 < str2: True".to_string()));
    assert!(output.contains(&"name1 == name2: True".to_string()));
    assert!(output.contains(&"name1 <= name2: True".to_string()));
    assert!(output.contains(&"Is teenager: False".to_string()));
}

#[test]
fn test_assignment_section_accumulator() {
    let program = tour();
    let section = program.section(tour::ASSIGNMENT).expect("section exists");

    let mut interpreter = Interpreter::new(program.clone());
    interpreter.run_section(section).expect("Execution failed");

    let output = interpreter.terminal().get_output();
    assert_eq!(
        &output[..8],
        &[
            "Initial value: 10",
            "After += 5: 15",
            "After -= 3: 12",
            "After *= 2: 24",
            "After /= 4: 6.0",
            "After %= 4: 2.0",
            "After **= 3: 8.0",
            "After //= 3: 2.0",
        ]
    );
    assert_eq!(output[8], "Final counter value: 15");
    assert_eq!(output[9], "Hello, World!");

    assert_eq!(interpreter.variable("num"), Some(&Value::Float(2.0)));
    assert_eq!(interpreter.variable("counter"), Some(&Value::Int(15)));
    // Loop variable keeps its last value
    assert_eq!(interpreter.variable("i"), Some(&Value::Int(5)));
    assert_eq!(
        interpreter.variable("greeting"),
        Some(&Value::from("Hello, World!"))
    );
}

#[test]
fn test_bitwise_section() {
    let program = tour();
    let section = program.section(tour::BITWISE).expect("section exists");

    let mut interpreter = Interpreter::new(program.clone());
    interpreter.run_section(section).expect("Execution failed");

    let output = interpreter.terminal().get_output();
    assert_eq!(
        &output[6..],
        &["a & b: 4", "a | b: 13", "a ^ b: 9", "~a: -13", "a << 2: 48", "a >> 2: 3"]
    );
}

#[test]
fn test_names_are_rebound_across_sections() {
    let interpreter = run_tour();

    // `a` went int -> bool -> int -> int
    assert_eq!(interpreter.variable("a"), Some(&Value::Int(6)));
    assert_eq!(interpreter.variable("b"), Some(&Value::Int(3)));
    assert_eq!(interpreter.variable("x"), Some(&Value::Int(10)));
    assert_eq!(interpreter.variable("can_go_outside"), Some(&Value::Bool(false)));
}

#[test]
fn test_every_statement_executes() {
    let interpreter = run_tour();
    let program = interpreter.program();

    // The loop body runs five times; the static count includes it once
    assert_eq!(
        interpreter.statements_executed(),
        program.statement_count() + 4
    );
}
