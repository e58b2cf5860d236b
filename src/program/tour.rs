//! The operator tour
//!
//! A fixed walk through arithmetic, relational, assignment, logical and
//! bitwise operators over literal operands. Names are reused across sections
//! with values of different types, exactly as a script would rebind them.

use crate::program::ast::{BinOp, Program, UnOp};
use crate::program::builder::*;

pub const ARITHMETIC: &str = "arithmetic";
pub const RELATIONAL: &str = "relational";
pub const ASSIGNMENT: &str = "assignment";
pub const LOGICAL: &str = "logical";
pub const BITWISE: &str = "bitwise";
pub const BITWISE_DETAIL: &str = "bitwise in detail";

/// Build the complete tour
pub fn tour() -> Program {
    use BinOp::*;

    ProgramBuilder::new()
        .section(ARITHMETIC, |b| {
            b.assign("a", int(10));
            b.assign("b", int(3));
            b.labeled("Addition:", binary(Add, var("a"), var("b")));
            b.labeled("Subtraction:", binary(Sub, var("a"), var("b")));
            b.labeled("Multiplication:", binary(Mul, var("a"), var("b")));
            b.labeled("Division:", binary(Div, var("a"), var("b")));
            b.labeled("Modulus:", binary(Mod, var("a"), var("b")));
            b.labeled("Exponentiation:", binary(Pow, var("a"), var("b")));
            b.labeled("Floor Division:", binary(FloorDiv, var("a"), var("b")));
        })
        .section(RELATIONAL, |b| {
            b.assign("x", int(5));
            b.assign("y", int(8));
            b.labeled("Equal to:", binary(Eq, var("x"), var("y")));
            b.labeled("Not equal to:", binary(Ne, var("x"), var("y")));
            b.labeled("Greater than:", binary(Gt, var("x"), var("y")));
            b.labeled("Less than:", binary(Lt, var("x"), var("y")));
            b.labeled("Greater than or equal to:", binary(Ge, var("x"), var("y")));
            b.labeled("Less than or equal to:", binary(Le, var("x"), var("y")));

            b.assign("z", int(5));
            b.labeled(
                "x == z and x < y:",
                and(
                    binary(Eq, var("x"), var("z")),
                    binary(Lt, var("x"), var("y")),
                ),
            );
            b.labeled(
                "x == z or x > y:",
                or(
                    binary(Eq, var("x"), var("z")),
                    binary(Gt, var("x"), var("y")),
                ),
            );

            b.assign("char1", string("a"));
            b.assign("char2", string("b"));
            b.labeled("char1 < char2:", binary(Lt, var("char1"), var("char2")));
            b.labeled("char1 == char2:", binary(Eq, var("char1"), var("char2")));
            b.labeled("char1 != char2:", binary(Ne, var("char1"), var("char2")));

            b.assign("age", int(25));
            b.assign(
                "is_teenager",
                and(
                    binary(Ge, var("age"), int(13)),
                    binary(Le, var("age"), int(19)),
                ),
            );
            b.labeled("Is teenager:", var("is_teenager"));

            b.assign("str1", string("apple"));
            b.assign("str2", string("banana"));
            b.labeled("str1 < str2:", binary(Lt, var("str1"), var("str2")));
            b.labeled("str1 == str2:", binary(Eq, var("str1"), var("str2")));
            b.labeled("str1 != str2:", binary(Ne, var("str1"), var("str2")));

            b.assign("name1", string("Alice"));
            b.assign("name2", string("Alice"));
            b.labeled("name1 == name2:", binary(Eq, var("name1"), var("name2")));
            b.labeled("name1 != name2:", binary(Ne, var("name1"), var("name2")));
            b.labeled("name1 < name2:", binary(Lt, var("name1"), var("name2")));
            b.labeled("name1 <= name2:", binary(Le, var("name1"), var("name2")));
            b.labeled("name1 > name2:", binary(Gt, var("name1"), var("name2")));
            b.labeled("name1 >= name2:", binary(Ge, var("name1"), var("name2")));
        })
        .section(ASSIGNMENT, |b| {
            b.assign("num", int(10));
            b.labeled("Initial value:", var("num"));
            b.compound_assign("num", Add, int(5));
            b.labeled("After += 5:", var("num"));
            b.compound_assign("num", Sub, int(3));
            b.labeled("After -= 3:", var("num"));
            b.compound_assign("num", Mul, int(2));
            b.labeled("After *= 2:", var("num"));
            b.compound_assign("num", Div, int(4));
            b.labeled("After /= 4:", var("num"));
            b.compound_assign("num", Mod, int(4));
            b.labeled("After %= 4:", var("num"));
            b.compound_assign("num", Pow, int(3));
            b.labeled("After **= 3:", var("num"));
            b.compound_assign("num", FloorDiv, int(3));
            b.labeled("After //= 3:", var("num"));

            b.assign("counter", int(0));
            b.for_range("i", int(1), int(6), |body| {
                body.compound_assign("counter", Add, var("i"));
            });
            b.labeled("Final counter value:", var("counter"));

            b.assign("greeting", string("Hello"));
            b.compound_assign("greeting", Add, string(", World!"));
            b.print(vec![var("greeting")]);
        })
        .section(LOGICAL, |b| {
            b.assign("a", boolean(true));
            b.assign("b", boolean(false));
            b.labeled("a and b:", and(var("a"), var("b")));
            b.labeled("a or b:", or(var("a"), var("b")));
            b.labeled("not a:", not(var("a")));
            b.labeled("not b:", not(var("b")));

            b.assign("x", int(10));
            b.assign("y", int(5));
            b.assign("z", int(15));
            b.labeled(
                "x > y and x < z:",
                and(
                    binary(Gt, var("x"), var("y")),
                    binary(Lt, var("x"), var("z")),
                ),
            );
            b.labeled(
                "x < y or x < z:",
                or(
                    binary(Lt, var("x"), var("y")),
                    binary(Lt, var("x"), var("z")),
                ),
            );
            b.labeled("not (x > y):", not(binary(Gt, var("x"), var("y"))));

            b.assign("is_raining", boolean(true));
            b.assign("has_umbrella", boolean(false));
            b.assign(
                "can_go_outside",
                or(not(var("is_raining")), var("has_umbrella")),
            );
            b.labeled("Can go outside:", var("can_go_outside"));
        })
        .section(BITWISE, |b| {
            b.assign("p", int(0b0101));
            b.assign("q", int(0b0011));
            b.labeled("Bitwise AND:", binary(BitAnd, var("p"), var("q")));
            b.labeled("Bitwise OR:", binary(BitOr, var("p"), var("q")));
            b.labeled("Bitwise XOR:", binary(BitXor, var("p"), var("q")));
            b.labeled("Bitwise NOT p:", unary(UnOp::BitNot, var("p")));
            b.labeled("Left Shift p by 1:", binary(BitShl, var("p"), int(1)));
            b.labeled("Right Shift q by 1:", binary(BitShr, var("q"), int(1)));

            b.assign("a", int(0b1100));
            b.assign("b", int(0b0101));
            b.labeled("a & b:", binary(BitAnd, var("a"), var("b")));
            b.labeled("a | b:", binary(BitOr, var("a"), var("b")));
            b.labeled("a ^ b:", binary(BitXor, var("a"), var("b")));
            b.labeled("~a:", unary(UnOp::BitNot, var("a")));
            b.labeled("a << 2:", binary(BitShl, var("a"), int(2)));
            b.labeled("a >> 2:", binary(BitShr, var("a"), int(2)));
        })
        .section(BITWISE_DETAIL, |b| {
            b.assign("a", int(0b0110));
            b.assign("b", int(0b0011));

            b.assign("result_and", binary(BitAnd, var("a"), var("b")));
            b.print(vec![
                string("Bitwise AND of"),
                var("a"),
                string("and"),
                var("b"),
                string("is:"),
                var("result_and"),
            ]);

            b.assign("result_or", binary(BitOr, var("a"), var("b")));
            b.print(vec![
                string("Bitwise OR of"),
                var("a"),
                string("and"),
                var("b"),
                string("is:"),
                var("result_or"),
            ]);

            b.assign("result_xor", binary(BitXor, var("a"), var("b")));
            b.print(vec![
                string("Bitwise XOR of"),
                var("a"),
                string("and"),
                var("b"),
                string("is:"),
                var("result_xor"),
            ]);

            b.assign("result_not_a", unary(UnOp::BitNot, var("a")));
            b.print(vec![
                string("Bitwise NOT of"),
                var("a"),
                string("is:"),
                var("result_not_a"),
            ]);

            b.assign("result_left_shift", binary(BitShl, var("a"), int(1)));
            b.print(vec![
                string("Left Shift of"),
                var("a"),
                string("by 1 is:"),
                var("result_left_shift"),
            ]);

            b.assign("result_right_shift", binary(BitShr, var("a"), int(1)));
            b.print(vec![
                string("Right Shift of"),
                var("a"),
                string("by 1 is:"),
                var("result_right_shift"),
            ]);
        })
        .build()
}
