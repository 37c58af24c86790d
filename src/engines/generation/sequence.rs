// src/engines/generation/sequence.rs
use crate::engines::metrics::{SimilarityMetrics, SimilarityReport};
use crate::error::{Result, TrackfitError};
use crate::types::Instruction;
use std::fmt;

/// An evolvable program: an ordered, non-empty list of instructions whose
/// first element is always `Identity` (the clause `y = x`).
///
/// The infix expression is recomputed on every structural change so it always
/// matches what `evaluate` computes. The score is whatever the latest
/// `similarity` call produced; structural edits leave it stale on purpose, and
/// clones carry it along.
#[derive(Debug, Clone)]
pub struct InstructionSequence {
    instructions: Vec<Instruction>,
    expression: String,
    score: f64,
    report: Option<SimilarityReport>,
    last_samples: Vec<f64>,
}

impl InstructionSequence {
    /// Build from already-parsed instructions.
    ///
    /// The list must be non-empty, start with `Identity`, and contain no
    /// other `Identity`.
    pub fn from_instructions(instructions: Vec<Instruction>) -> Result<Self> {
        match instructions.first() {
            Some(Instruction::Identity) => {}
            _ => {
                return Err(TrackfitError::Validation(
                    "instruction sequences must start with the identity clause 'y = x'"
                        .to_string(),
                ))
            }
        }
        if instructions[1..].iter().any(|i| i.is_identity()) {
            return Err(TrackfitError::Validation(
                "the identity instruction is only legal at position 0".to_string(),
            ));
        }

        let mut sequence = InstructionSequence {
            instructions,
            expression: String::new(),
            score: 0.0,
            report: None,
            last_samples: Vec::new(),
        };
        sequence.update_expression();
        Ok(sequence)
    }

    /// Parse a comma-separated program, e.g. `"y = x, y = y + 5, y = y * 3"`.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut instructions = Vec::new();
        for clause in text.split(',') {
            instructions.push(parse_clause(clause)?);
        }
        Self::from_instructions(instructions)
    }

    /// Run every sample through the program and return the predictions.
    ///
    /// The sample batch is recorded on the sequence; nothing else changes.
    /// Arithmetic is raw IEEE, so NaN from one sample never disturbs the
    /// others.
    pub fn evaluate(&mut self, samples: &[f64]) -> Vec<f64> {
        self.last_samples = samples.to_vec();
        samples
            .iter()
            .map(|&x| {
                let mut y = x;
                for instruction in &self.instructions[1..] {
                    y = instruction.apply(y);
                }
                y
            })
            .collect()
    }

    /// Score predictions against the target series and remember the result.
    pub fn similarity(&mut self, calculated: &[f64], desired: &[f64]) -> Result<f64> {
        let report = SimilarityMetrics::evaluate(calculated, desired)?;
        self.score = report.score;
        self.report = Some(report);
        Ok(report.score)
    }

    /// Replace the instruction at `index` with a parsed clause.
    pub fn substitute(&mut self, index: usize, clause: &str) -> Result<()> {
        let instruction = parse_clause(clause)?;
        self.substitute_instruction(index, instruction)
    }

    /// Replace the instruction at `index`. Position 0 is immutable, so valid
    /// indices are 1..len.
    pub fn substitute_instruction(&mut self, index: usize, instruction: Instruction) -> Result<()> {
        if index == 0 || index >= self.instructions.len() {
            return Err(TrackfitError::Index {
                index,
                len: self.instructions.len(),
            });
        }
        if instruction.is_identity() {
            return Err(TrackfitError::Validation(
                "the identity instruction is only legal at position 0".to_string(),
            ));
        }
        self.instructions[index] = instruction;
        self.update_expression();
        Ok(())
    }

    /// Insert a parsed clause at `index`, shifting later instructions right.
    /// Valid indices are 1..=len (len appends).
    pub fn insert(&mut self, index: usize, clause: &str) -> Result<()> {
        let instruction = parse_clause(clause)?;
        if index == 0 || index > self.instructions.len() {
            return Err(TrackfitError::Index {
                index,
                len: self.instructions.len(),
            });
        }
        if instruction.is_identity() {
            return Err(TrackfitError::Validation(
                "the identity instruction is only legal at position 0".to_string(),
            ));
        }
        self.instructions.insert(index, instruction);
        self.update_expression();
        Ok(())
    }

    /// Remove the instruction at `index`. The identity seed cannot be
    /// removed, so a sequence may shrink to length 1 but never to 0.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        if index == 0 || index >= self.instructions.len() {
            return Err(TrackfitError::Index {
                index,
                len: self.instructions.len(),
            });
        }
        self.instructions.remove(index);
        self.update_expression();
        Ok(())
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Canonical clause text for each instruction, in order.
    pub fn instruction_texts(&self) -> Vec<String> {
        self.instructions.iter().map(|i| i.to_string()).collect()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn report(&self) -> Option<SimilarityReport> {
        self.report
    }

    /// The sample batch from the most recent `evaluate` call.
    pub fn samples(&self) -> &[f64] {
        &self.last_samples
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Left fold from "x", mirroring `evaluate` instruction-for-instruction.
    fn update_expression(&mut self) {
        let mut expression = String::from("x");
        for instruction in &self.instructions[1..] {
            expression = instruction.wrap_expression(&expression);
        }
        self.expression = expression;
    }
}

impl fmt::Display for InstructionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.instruction_texts().join(", "))
    }
}

/// Parse one clause into an instruction.
///
/// Recognized forms (whitespace-tolerant): `y = x`, `y = y <op> <num>` for
/// op in + - * / ^, and `y = ln(y)` / `y = sin(y)` / `y = cos(y)`. Anything
/// else falls back permissively: the text after the first '=' (the whole
/// clause when there is none) must parse in full as a float, giving an
/// explicit assignment.
fn parse_clause(text: &str) -> Result<Instruction> {
    if let Some(instruction) = parse_structured(text) {
        return Ok(instruction);
    }

    let tail = match text.find('=') {
        Some(pos) => &text[pos + 1..],
        None => text,
    };
    match tail.trim().parse::<f64>() {
        Ok(value) => Ok(Instruction::ExplicitAssign(value)),
        Err(_) => Err(TrackfitError::Validation(format!(
            "unrecognized instruction clause: '{}'",
            text.trim()
        ))),
    }
}

fn parse_structured(text: &str) -> Option<Instruction> {
    let mut scanner = Scanner::new(text);
    if !scanner.eat('y') || !scanner.eat('=') {
        return None;
    }
    scanner.skip_whitespace();

    match scanner.peek()? {
        'x' => {
            scanner.advance();
            scanner.at_end().then_some(Instruction::Identity)
        }
        'y' => {
            scanner.advance();
            scanner.skip_whitespace();
            let op = scanner.peek()?;
            scanner.advance();
            let operand: f64 = scanner.rest().trim().parse().ok()?;
            match op {
                '+' => Some(Instruction::Add(operand)),
                '-' => Some(Instruction::Sub(operand)),
                '*' => Some(Instruction::Mul(operand)),
                '/' => Some(Instruction::Div(operand)),
                '^' => Some(Instruction::Pow(operand)),
                _ => None,
            }
        }
        c if c.is_ascii_alphabetic() => {
            let name = scanner.take_identifier();
            let instruction = match name {
                "ln" => Instruction::Ln,
                "sin" => Instruction::Sin,
                "cos" => Instruction::Cos,
                _ => return None,
            };
            if scanner.eat('(') && scanner.eat('y') && scanner.eat(')') && scanner.at_end() {
                Some(instruction)
            } else {
                None
            }
        }
        _ => None,
    }
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Scanner { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Consume `expected` if it is the next non-whitespace char.
    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn take_identifier(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos == self.src.len()
    }
}
