use crate::common::write_text_solution;
use std::io::{BufWriter, Write};
use top_core::models::Solution;
use top_core::utils::GenericResult;

/// A trait to write TOP solution.
pub trait TopSolution<W: Write> {
    /// Writes TOP solution.
    fn write_top(&self, writer: &mut BufWriter<W>) -> GenericResult<()>;
}

impl<W: Write> TopSolution<W> for Solution {
    fn write_top(&self, writer: &mut BufWriter<W>) -> GenericResult<()> {
        write_text_solution(writer, self)
    }
}
