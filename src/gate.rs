use std::fmt::Display;

use crate::{circuit::WireId, Error};

/// Input of a gate, either a literal signal or a reference to a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal<W = WireId> {
    Constant(u16),
    Wire(W),
}

impl<W> Signal<W> {
    pub fn map_wire<V, F: FnOnce(W) -> V>(self, f: F) -> Signal<V> {
        match self {
            Signal::Constant(n) => Signal::Constant(n),
            Signal::Wire(w) => Signal::Wire(f(w)),
        }
    }
}

impl<W: Display> Display for Signal<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Constant(n) => write!(f, "{}", n),
            Signal::Wire(w) => write!(f, "{}", w),
        }
    }
}

/// The one gate feeding a wire. `Gate<String>` refers to wires by name (as
/// parsed), `Gate<WireId>` by handle (as bound in a circuit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate<W = WireId> {
    Constant(u16),
    Passthrough(Signal<W>),
    And(Signal<W>, Signal<W>),
    Or(Signal<W>, Signal<W>),
    Not(Signal<W>),
    LShift(Signal<W>, Signal<W>),
    RShift(Signal<W>, Signal<W>),
}

impl<W> Gate<W> {
    pub fn arity(&self) -> usize {
        self.signals().len()
    }

    pub fn signals(&self) -> Vec<&Signal<W>> {
        match self {
            Gate::Constant(_) => Vec::new(),
            Gate::Passthrough(s) | Gate::Not(s) => vec![s],
            Gate::And(l, r) | Gate::Or(l, r) | Gate::LShift(l, r) | Gate::RShift(l, r) => {
                vec![l, r]
            }
        }
    }

    pub fn map_wires<V, F: FnMut(W) -> V>(self, mut f: F) -> Gate<V> {
        match self {
            Gate::Constant(n) => Gate::Constant(n),
            Gate::Passthrough(s) => Gate::Passthrough(s.map_wire(&mut f)),
            Gate::Not(s) => Gate::Not(s.map_wire(&mut f)),
            Gate::And(l, r) => Gate::And(l.map_wire(&mut f), r.map_wire(&mut f)),
            Gate::Or(l, r) => Gate::Or(l.map_wire(&mut f), r.map_wire(&mut f)),
            Gate::LShift(l, r) => Gate::LShift(l.map_wire(&mut f), r.map_wire(&mut f)),
            Gate::RShift(l, r) => Gate::RShift(l.map_wire(&mut f), r.map_wire(&mut f)),
        }
    }

    /// Resolves every input through `signal_value`, left to right, and
    /// applies the operation.
    pub fn output<F>(&self, mut signal_value: F) -> Result<u16, Error>
    where
        F: FnMut(&Signal<W>) -> Result<u16, Error>,
    {
        let value = match self {
            Gate::Constant(n) => *n,
            Gate::Passthrough(s) => signal_value(s)?,
            Gate::And(l, r) => signal_value(l)? & signal_value(r)?,
            Gate::Or(l, r) => signal_value(l)? | signal_value(r)?,
            Gate::Not(s) => !signal_value(s)?,
            // Bits shifted past bit 15 are dropped, shifting by 16 or more clears everything.
            Gate::LShift(l, r) => {
                let value = signal_value(l)?;
                value.checked_shl(u32::from(signal_value(r)?)).unwrap_or(0)
            }
            Gate::RShift(l, r) => {
                let value = signal_value(l)?;
                value.checked_shr(u32::from(signal_value(r)?)).unwrap_or(0)
            }
        };

        Ok(value)
    }
}

impl<W: Display> Display for Gate<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gate::Constant(n) => write!(f, "{}", n),
            Gate::Passthrough(s) => write!(f, "{}", s),
            Gate::Not(s) => write!(f, "NOT {}", s),
            Gate::And(l, r) => write!(f, "{} AND {}", l, r),
            Gate::Or(l, r) => write!(f, "{} OR {}", l, r),
            Gate::LShift(l, r) => write!(f, "{} LSHIFT {}", l, r),
            Gate::RShift(l, r) => write!(f, "{} RSHIFT {}", l, r),
        }
    }
}
