use rand::Rng;
use std::fmt;

/// Arithmetic operator of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Evaluate `lhs op rhs`.
    ///
    /// Callers guarantee `lhs >= rhs` for subtraction and an exact quotient for
    /// division, which the generator upholds by construction.
    pub fn apply(self, lhs: u32, rhs: u32) -> u32 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Inclusive operand bound for a level.
///
/// Anything other than 1 or 2 (including 0 and levels past the last one)
/// gets the level 3 bound.
pub fn max_operand(level: u32) -> u32 {
    match level {
        1 => 5,
        2 => 8,
        _ => 10,
    }
}

/// A single prompt shown to the player. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    level: u32,
    operator: Operator,
    operand1: u32,
    operand2: u32,
    correct_answer: u32,
}

impl Question {
    pub fn new(level: u32, operator: Operator, operand1: u32, operand2: u32) -> Self {
        Self {
            level,
            operator,
            operand1,
            operand2,
            correct_answer: operator.apply(operand1, operand2),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> (u32, u32) {
        (self.operand1, self.operand2)
    }

    pub fn correct_answer(&self) -> u32 {
        self.correct_answer
    }

    /// Expression text as shown on screen, e.g. `7 - 3`
    pub fn text(&self) -> String {
        format!("{} {} {}", self.operand1, self.operator, self.operand2)
    }
}

/// Produces questions scaled to a level from an injectable random source
#[derive(Debug)]
pub struct QuestionGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, level: u32) -> Question {
        let max = max_operand(level);
        let operator = Operator::ALL[self.rng.gen_range(0..Operator::ALL.len())];

        let (operand1, operand2) = match operator {
            Operator::Subtract => {
                let lhs = self.rng.gen_range(1..=max);
                let rhs = self.rng.gen_range(1..=lhs);
                (lhs, rhs)
            }
            Operator::Divide => {
                let divisor = self.rng.gen_range(1..=max);
                let multiplier = self.rng.gen_range(1..=max / divisor);
                (divisor * multiplier, divisor)
            }
            Operator::Add | Operator::Multiply => {
                (self.rng.gen_range(1..=max), self.rng.gen_range(1..=max))
            }
        };

        Question::new(level, operator, operand1, operand2)
    }
}
