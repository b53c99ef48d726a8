#[cfg(test)]
#[path = "../../tests/unit/common/text_writer_test.rs"]
mod text_writer_test;

use std::io::{BufWriter, Write};
use top_core::models::Solution;
use top_core::utils::GenericResult;

/// Writes a solution as text: one line per route followed by a summary line.
pub fn write_text_solution<W: Write>(writer: &mut BufWriter<W>, solution: &Solution) -> GenericResult<()> {
    solution.routes().try_for_each(|route| {
        let customers = route.customers().iter().map(|customer| customer.to_string()).collect::<Vec<_>>().join(" ");

        writeln!(
            writer,
            "route {}: {customers} | length {:.2} | reward {}",
            route.id(),
            route.length(),
            route.reward()
        )
    })?;

    writeln!(
        writer,
        "total: routes {} | length {:.2} | reward {}",
        solution.len(),
        solution.length(),
        solution.reward()
    )?;

    writer.flush()?;

    Ok(())
}
