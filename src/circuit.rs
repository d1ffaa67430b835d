use std::{
    collections::{BTreeMap, HashMap, HashSet},
    str::FromStr,
};

use log::{debug, trace};

use crate::{
    gate::{Gate, Signal},
    statement::Statement,
    Error,
};

/// Handle of a wire inside its circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireId(usize);

#[derive(Debug)]
pub struct Wire {
    name: String,
    gate: Option<Gate>,
    signal: Option<u16>,
}

impl Wire {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            gate: None,
            signal: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gate(&self) -> Option<&Gate> {
        self.gate.as_ref()
    }

    /// Cached signal of the current generation, if already evaluated.
    pub fn signal(&self) -> Option<u16> {
        self.signal
    }
}

#[derive(Debug, Default)]
pub struct Circuit {
    wires: Vec<Wire>,
    wire_ids: HashMap<String, WireId>,
    eval_count: usize,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    pub fn wire(&self, id: WireId) -> &Wire {
        &self.wires[id.0]
    }

    pub fn find_wire(&self, name: &str) -> Option<WireId> {
        self.wire_ids.get(name).copied()
    }

    /// Id of the wire called `name`, a fresh unbound wire is created when the
    /// name hasn't been seen before.
    pub fn wire_id(&mut self, name: &str) -> WireId {
        if let Some(id) = self.find_wire(name) {
            return id;
        }

        let id = WireId(self.wires.len());
        self.wires.push(Wire::new(name));
        self.wire_ids.insert(name.to_string(), id);
        id
    }

    pub fn resolve(&mut self, signal: Signal<String>) -> Signal {
        signal.map_wire(|name| self.wire_id(&name))
    }

    /// Binds `gate` to the wire, replacing any gate bound before. The cached
    /// signal is left alone until the next `invalidate`.
    pub fn bind(&mut self, id: WireId, gate: Gate) {
        let wire = &mut self.wires[id.0];
        if wire.gate.replace(gate).is_some() {
            debug!("Rebind wire {}.", wire.name);
        }
    }

    pub fn apply(&mut self, statement: Statement) -> WireId {
        debug!("Apply statement({}).", statement);
        let (gate, target) = statement.into_parts();
        let target_id = self.wire_id(&target);
        let gate = gate.map_wires(|name| self.wire_id(&name));
        self.bind(target_id, gate);

        target_id
    }

    pub fn apply_statement(&mut self, text: &str) -> Result<WireId, Error> {
        Statement::try_from(text).map(|statement| self.apply(statement))
    }

    /// Clears the cached signal of every wire, bindings are kept.
    pub fn invalidate(&mut self) {
        debug!("Invalidate {} wires.", self.wires.len());
        for wire in &mut self.wires {
            wire.signal = None;
        }
    }

    /// Binds wire `name` to the constant `signal` and invalidates the circuit.
    pub fn override_wire(&mut self, name: &str, signal: u16) -> Result<WireId, Error> {
        let id = self.apply_statement(&format!("{} -> {}", signal, name))?;
        self.invalidate();

        Ok(id)
    }

    pub fn signal_of(&mut self, name: &str) -> Result<u16, Error> {
        let id = self
            .find_wire(name)
            .ok_or(Error::UnboundWire(name.to_string()))?;
        self.signal(id)
    }

    pub fn signal(&mut self, id: WireId) -> Result<u16, Error> {
        self.signal_recur(id, &mut HashSet::new())
    }

    fn signal_recur(&mut self, id: WireId, visiting: &mut HashSet<WireId>) -> Result<u16, Error> {
        let wire = &self.wires[id.0];
        if let Some(signal) = wire.signal {
            return Ok(signal);
        }

        let gate = wire
            .gate
            .ok_or_else(|| Error::UnboundWire(wire.name.clone()))?;
        if !visiting.insert(id) {
            return Err(Error::CircularDependency(wire.name.clone()));
        }

        let signal = gate.output(|signal| match signal {
            Signal::Constant(n) => Ok(*n),
            Signal::Wire(input_id) => self.signal_recur(*input_id, visiting),
        })?;
        visiting.remove(&id);

        self.eval_count += 1;
        let wire = &mut self.wires[id.0];
        trace!("Evaluate wire {} to {}.", wire.name, signal);
        wire.signal = Some(signal);

        Ok(signal)
    }

    /// Signals of all bound wires, ordered by wire name.
    pub fn evaluate_all(&mut self) -> Result<BTreeMap<String, u16>, Error> {
        let bound_ids = (0..self.wires.len())
            .map(WireId)
            .filter(|id| self.wire(*id).gate.is_some())
            .collect::<Vec<_>>();
        bound_ids
            .into_iter()
            .map(|id| {
                self.signal(id)
                    .map(|signal| (self.wire(id).name.clone(), signal))
            })
            .collect()
    }

    /// Number of gates fired since the circuit was built.
    pub fn eval_count(&self) -> usize {
        self.eval_count
    }
}

impl FromStr for Circuit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut circuit = Circuit::new();
        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            circuit.apply_statement(line)?;
        }

        Ok(circuit)
    }
}
