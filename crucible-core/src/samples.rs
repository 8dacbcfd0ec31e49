//! Worked examples from the puzzle statement with their known answers

/// A sample input and the answers expected for some of its parts
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub input: &'static str,
    /// `(part, answer)` pairs
    pub expected: &'static [(u8, &'static str)],
}

pub const EXAMPLE: Sample = Sample {
    name: "example",
    input: "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
",
    expected: &[(1, "102"), (2, "94")],
};

/// Long hauls are forced to take the long way round the nines
pub const UNFORTUNATE_PATH: Sample = Sample {
    name: "unfortunate path",
    input: "\
111111111111
999999999991
999999999991
999999999991
999999999991
",
    expected: &[(2, "71")],
};

pub const SAMPLES: &[Sample] = &[EXAMPLE, UNFORTUNATE_PATH];
