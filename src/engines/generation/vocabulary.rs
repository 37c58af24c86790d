use crate::types::Instruction;
use rand::Rng;

/// The fixed mutation catalog. Operands are part of the catalog: arithmetic
/// steps always come as +1, -1, *2, /2.
pub const MUTATION_OPS: [Instruction; 7] = [
    Instruction::Add(1.0),
    Instruction::Sub(1.0),
    Instruction::Mul(2.0),
    Instruction::Div(2.0),
    Instruction::Sin,
    Instruction::Cos,
    Instruction::Ln,
];

/// Draw one instruction uniformly from the mutation catalog
pub fn random_instruction<R: Rng>(rng: &mut R) -> Instruction {
    MUTATION_OPS[rng.gen_range(0..MUTATION_OPS.len())]
}

/// Random starter program: the identity seed followed by 2 to 5 independent
/// catalog draws
pub fn random_chain<R: Rng>(rng: &mut R) -> Vec<Instruction> {
    let extra = rng.gen_range(2..=5);
    let mut chain = Vec::with_capacity(extra + 1);
    chain.push(Instruction::Identity);
    for _ in 0..extra {
        chain.push(random_instruction(rng));
    }
    chain
}
