//! Step-by-step elimination of a system of three equations in `x`, `y`, `z`.
//!
//! Forward elimination with row swaps on a zero pivot, followed by back
//! substitution. Every row operation is recorded as a [`Step`] so a front end
//! can replay the work. A system without a unique solution is an
//! [`Outcome`], not an error.

use std::fmt;

use derive_more::IsVariant;
use derive_new::new;

use crate::{Field, Matrix};

/// `a·x + b·y + c·z = d`
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Equation<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T: fmt::Display> fmt::Display for Equation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x + {}y + {}z = {}", self.a, self.b, self.c, self.d)
    }
}

#[derive(Debug, Clone, PartialEq, IsVariant)]
pub enum Outcome<T> {
    Solved { x: T, y: T, z: T },
    /// No nonzero pivot could be found for `column`.
    NoUniqueSolution { column: usize },
}

/// Row indices are 0-based; the `Display` form numbers rows from 1.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    Assembled {
        augmented: Matrix<T>,
    },
    Swapped {
        first: usize,
        second: usize,
        augmented: Matrix<T>,
    },
    Eliminated {
        target: usize,
        source: usize,
        multiplier: T,
        augmented: Matrix<T>,
    },
    MissingPivot {
        column: usize,
    },
    Substituted {
        variable: char,
        value: T,
    },
}

impl<T> Step<T> {
    /// Augmented matrix after this step, if the step changed it.
    pub fn augmented(&self) -> Option<&Matrix<T>> {
        match self {
            Step::Assembled { augmented }
            | Step::Swapped { augmented, .. }
            | Step::Eliminated { augmented, .. } => Some(augmented),
            Step::MissingPivot { .. } | Step::Substituted { .. } => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Assembled { .. } => f.write_str("Augmented matrix [A | b]"),
            Step::Swapped { first, second, .. } => {
                write!(f, "Swap R{} and R{}", first + 1, second + 1)
            }
            Step::Eliminated {
                target,
                source,
                multiplier,
                ..
            } => write!(
                f,
                "R{t} <- R{t} - ({multiplier})·R{s}",
                t = target + 1,
                s = source + 1
            ),
            Step::MissingPivot { column } => write!(
                f,
                "No nonzero pivot in column {}: the system has no unique solution",
                column + 1
            ),
            Step::Substituted { variable, value } => write!(f, "{variable} = {value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuidedSolution<T> {
    pub steps: Vec<Step<T>>,
    pub outcome: Outcome<T>,
}

struct Narrator<T> {
    augmented: Matrix<T>,
    steps: Vec<Step<T>>,
}

impl<T: Field> Narrator<T> {
    fn new(equations: [Equation<T>; 3]) -> Self {
        let augmented = Matrix::from_fn(3, 4, |i, j| {
            let Equation { a, b, c, d } = &equations[i];
            match j {
                0 => a.clone(),
                1 => b.clone(),
                2 => c.clone(),
                _ => d.clone(),
            }
        });
        let mut narrator = Self {
            augmented,
            steps: Vec::with_capacity(8),
        };
        narrator.record(Step::Assembled {
            augmented: narrator.augmented.clone(),
        });
        narrator
    }

    fn at(&self, row: usize, col: usize) -> T {
        self.augmented[(row, col)].clone()
    }

    fn record(&mut self, step: Step<T>) {
        log::info!("{step}");
        if let Some(augmented) = step.augmented() {
            log::info!("\n{}", augmented.display_augmented(3));
        }
        self.steps.push(step);
    }

    /// Makes `augmented[row][row]` usable by swapping in the first later row
    /// with a nonzero entry in that column.
    fn ensure_pivot(&mut self, row: usize) -> bool {
        if !self.augmented[(row, row)].is_negligible() {
            return true;
        }
        match (row + 1..3).find(|i| !self.augmented[(*i, row)].is_negligible()) {
            Some(other) => {
                self.augmented.swap_rows_unchecked(row, other);
                self.record(Step::Swapped {
                    first: row,
                    second: other,
                    augmented: self.augmented.clone(),
                });
                true
            }
            None => {
                self.record(Step::MissingPivot { column: row });
                false
            }
        }
    }

    fn eliminate(&mut self, target: usize, source: usize) {
        let multiplier = self.at(target, source) / self.at(source, source);
        self.augmented
            .add_scaled_row(target, source, &-multiplier.clone());
        self.record(Step::Eliminated {
            target,
            source,
            multiplier,
            augmented: self.augmented.clone(),
        });
    }

    fn substitute(&mut self, variable: char, value: T) -> T {
        self.record(Step::Substituted {
            variable,
            value: value.clone(),
        });
        value
    }

    fn finish(self, outcome: Outcome<T>) -> GuidedSolution<T> {
        GuidedSolution {
            steps: self.steps,
            outcome,
        }
    }
}

pub fn solve_three<T: Field>(equations: [Equation<T>; 3]) -> GuidedSolution<T> {
    let mut narrator = Narrator::new(equations);

    for column in 0..2 {
        if !narrator.ensure_pivot(column) {
            return narrator.finish(Outcome::NoUniqueSolution { column });
        }
        for target in column + 1..3 {
            narrator.eliminate(target, column);
        }
    }
    if narrator.augmented[(2, 2)].is_negligible() {
        narrator.record(Step::MissingPivot { column: 2 });
        return narrator.finish(Outcome::NoUniqueSolution { column: 2 });
    }

    let z = narrator.at(2, 3) / narrator.at(2, 2);
    let z = narrator.substitute('z', z);
    let y = (narrator.at(1, 3) - narrator.at(1, 2) * z.clone()) / narrator.at(1, 1);
    let y = narrator.substitute('y', y);
    let x = (narrator.at(0, 3) - narrator.at(0, 1) * y.clone() - narrator.at(0, 2) * z.clone())
        / narrator.at(0, 0);
    let x = narrator.substitute('x', x);

    log::info!("Solution: x = {x}, y = {y}, z = {z}");
    narrator.finish(Outcome::Solved { x, y, z })
}
