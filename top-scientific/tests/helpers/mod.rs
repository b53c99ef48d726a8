#[macro_use]
pub mod macros;

use std::io::BufWriter;
use top_core::models::Solution;

/// A small instance: a source, eight customers and a sink on a 4x4 square.
pub const SMALL_INSTANCE: &str = "n 10\n\
m 2\n\
tmax 9.0\n\
0.0\t0.0\t0\n\
1.0\t0.0\t10\n\
2.0\t1.0\t20\n\
1.0\t3.0\t15\n\
3.0\t3.0\t30\n\
4.0\t2.0\t25\n\
0.0\t4.0\t5\n\
2.0\t2.0\t40\n\
3.0\t0.0\t10\n\
4.0\t4.0\t0\n";

pub fn write_solution_to_string(solution: &Solution) -> String {
    let mut writer = BufWriter::new(Vec::new());
    crate::common::write_text_solution(&mut writer, solution).expect("cannot write solution");

    String::from_utf8(writer.into_inner().expect("cannot get buffer")).expect("invalid utf8")
}
