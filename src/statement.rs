use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    gate::{Gate, Signal},
    Error,
};

/// One line of the instructions booklet: a gate feeding a target wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    gate: Gate<String>,
    target: String,
}

impl TryFrom<&str> for Statement {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        type StatementCtorFn = fn(&str) -> Option<Result<Statement, Error>>;
        static CONSTRUCTORS: [StatementCtorFn; 3] = [
            Statement::try_new_assign,
            Statement::try_new_not,
            Statement::try_new_binary,
        ];

        let text = value.trim();
        CONSTRUCTORS
            .iter()
            .find_map(|f| f(text))
            .unwrap_or(Err(Error::InvalidStatementText(value.to_string())))
    }
}

impl Statement {
    pub fn new(gate: Gate<String>, target: &str) -> Self {
        Self {
            gate,
            target: target.to_string(),
        }
    }

    pub fn gate(&self) -> &Gate<String> {
        &self.gate
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn into_parts(self) -> (Gate<String>, String) {
        (self.gate, self.target)
    }

    fn try_new_assign(text: &str) -> Option<Result<Self, Error>> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(\d+|[a-z][a-z0-9]*)\s*->\s*([a-z][a-z0-9]*)$").unwrap()
        });

        PATTERN.captures(text).map(|caps| {
            let gate = match parse_signal(&caps[1])? {
                Signal::Constant(n) => Gate::Constant(n),
                wire => Gate::Passthrough(wire),
            };

            Ok(Self::new(gate, &caps[2]))
        })
    }

    fn try_new_not(text: &str) -> Option<Result<Self, Error>> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^NOT\s+(\d+|[a-z][a-z0-9]*)\s*->\s*([a-z][a-z0-9]*)$").unwrap()
        });

        PATTERN
            .captures(text)
            .map(|caps| Ok(Self::new(Gate::Not(parse_signal(&caps[1])?), &caps[2])))
    }

    fn try_new_binary(text: &str) -> Option<Result<Self, Error>> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(\d+|[a-z][a-z0-9]*)\s+([A-Z]+)\s+(\d+|[a-z][a-z0-9]*)\s*->\s*([a-z][a-z0-9]*)$",
            )
            .unwrap()
        });

        PATTERN.captures(text).map(|caps| {
            let left = parse_signal(&caps[1])?;
            let right = parse_signal(&caps[3])?;
            let gate = match &caps[2] {
                "AND" => Gate::And(left, right),
                "OR" => Gate::Or(left, right),
                "LSHIFT" => Gate::LShift(left, right),
                "RSHIFT" => Gate::RShift(left, right),
                op => return Err(Error::UnknownOperator(op.to_string(), text.to_string())),
            };

            Ok(Self::new(gate, &caps[4]))
        })
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.gate, self.target)
    }
}

fn parse_signal(token: &str) -> Result<Signal<String>, Error> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        token
            .parse::<u16>()
            .map(Signal::Constant)
            .map_err(|_| Error::InvalidSignalText(token.to_string()))
    } else {
        Ok(Signal::Wire(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(name: &str) -> Signal<String> {
        Signal::Wire(name.to_string())
    }

    #[test]
    fn parse_assignments() {
        assert_eq!(
            Statement::try_from("123 -> x").unwrap(),
            Statement::new(Gate::Constant(123), "x")
        );
        assert_eq!(
            Statement::try_from("lx -> a").unwrap(),
            Statement::new(Gate::Passthrough(wire("lx")), "a")
        );
    }

    #[test]
    fn parse_gates() {
        assert_eq!(
            Statement::try_from("NOT x -> h").unwrap(),
            Statement::new(Gate::Not(wire("x")), "h")
        );
        assert_eq!(
            Statement::try_from("1 AND cx -> cy").unwrap(),
            Statement::new(Gate::And(Signal::Constant(1), wire("cx")), "cy")
        );
        assert_eq!(
            Statement::try_from("x OR y -> e").unwrap(),
            Statement::new(Gate::Or(wire("x"), wire("y")), "e")
        );
        assert_eq!(
            Statement::try_from("x LSHIFT 2 -> f").unwrap(),
            Statement::new(Gate::LShift(wire("x"), Signal::Constant(2)), "f")
        );
        assert_eq!(
            Statement::try_from("y RSHIFT 2 -> g").unwrap(),
            Statement::new(Gate::RShift(wire("y"), Signal::Constant(2)), "g")
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let statement = Statement::try_from("  x AND y -> d\r").unwrap();

        assert_eq!(statement.target(), "d");
        assert_eq!(statement.gate(), &Gate::And(wire("x"), wire("y")));
    }

    #[test]
    fn display_gives_canonical_text() {
        for text in [
            "123 -> x",
            "lx -> a",
            "NOT x -> h",
            "x AND y -> d",
            "x OR y -> e",
            "x LSHIFT 2 -> f",
            "y RSHIFT 2 -> g",
        ] {
            assert_eq!(Statement::try_from(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn malformed_lines_are_rejected() {
        for text in ["Foo a -> b", "", "x AND y", "x AND y -> 3", "NOT -> b", "a -> b -> c"] {
            assert!(
                matches!(Statement::try_from(text), Err(Error::InvalidStatementText(_))),
                "{} should be rejected",
                text
            );
        }
    }

    #[test]
    fn unknown_operator_is_rejected() {
        assert!(matches!(
            Statement::try_from("x XOR y -> z"),
            Err(Error::UnknownOperator(op, _)) if op == "XOR"
        ));
    }

    #[test]
    fn literal_must_fit_16_bits() {
        assert_eq!(
            Statement::try_from("65535 -> x").unwrap(),
            Statement::new(Gate::Constant(65535), "x")
        );
        assert!(matches!(
            Statement::try_from("65536 -> x"),
            Err(Error::InvalidSignalText(s)) if s == "65536"
        ));
    }
}
