use clifford_stab_sim::circuit::Circuit;
use clifford_stab_sim::rng::StabilizerRng;
use clifford_stab_sim::simulator::{Outcome, Simulator};

/// A scripted coin that returns a fixed sequence of outcomes, panicking if exhausted. Lets
/// measurement tests pin which branch of `apply_measurement`'s coin flip fires.
pub struct FixedCoin {
    outcomes: std::vec::IntoIter<bool>,
}

impl FixedCoin {
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self { outcomes: outcomes.into_iter() }
    }
}

impl StabilizerRng for FixedCoin {
    fn next_bool(&mut self) -> bool {
        self.outcomes.next().expect("FixedCoin ran out of scripted outcomes")
    }
}

pub fn run_seeded(circuit: &Circuit, seed: u64) -> Outcome {
    let simulator = Simulator::full();
    let mut rng = clifford_stab_sim::rng::seeded(seed);
    simulator.execute(circuit, &mut rng).expect("well-formed circuit should not fail")
}
