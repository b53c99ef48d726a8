#[cfg(test)]
#[path = "../../tests/unit/top/reader_test.rs"]
mod reader_test;

use crate::common::*;
use std::io::{BufReader, Read};
use top_core::models::{Customer, Problem, Reward, build_problem};
use top_core::utils::{Float, GenericResult};

/// A trait to read TOP benchmark problems.
pub trait TopProblem {
    /// Reads a problem and assigns it the given id.
    fn read_top(self, id: &str) -> GenericResult<Problem>;
}

impl<R: Read> TopProblem for BufReader<R> {
    fn read_top(self, id: &str) -> GenericResult<Problem> {
        read_top_format(self, id)
    }
}

impl TopProblem for String {
    fn read_top(self, id: &str) -> GenericResult<Problem> {
        read_top_format(BufReader::new(self.as_bytes()), id)
    }
}

fn read_top_format<R: Read>(reader: BufReader<R>, id: &str) -> GenericResult<Problem> {
    TopReader { buffer: String::new(), reader, line_number: 0 }.read_problem(id)
}

struct TopReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    line_number: usize,
}

impl<R: Read> TopReader<R> {
    fn read_problem(&mut self, id: &str) -> GenericResult<Problem> {
        self.next_line()?;
        self.next_line()?;
        let n_trucks = parse_token::<usize>(self.buffer.as_str(), 1, self.line_number)?;
        self.next_line()?;
        let tmax = parse_token::<Float>(self.buffer.as_str(), 1, self.line_number)?;

        let customers = self.read_customers()?;
        if customers.len() < 2 {
            return Err(format!("expecting at least two customer rows, got: {}", customers.len()).into());
        }

        build_problem(id, n_trucks, tmax, customers)
    }

    fn read_customers(&mut self) -> GenericResult<Vec<Customer>> {
        let mut customers = Vec::new();

        loop {
            self.line_number += 1;
            if read_line(&mut self.reader, &mut self.buffer)? == 0 {
                break;
            }

            let line = self.buffer.trim();
            if line.is_empty() {
                continue;
            }

            customers.push(Customer {
                id: customers.len(),
                x: parse_token::<Float>(line, 0, self.line_number)?,
                y: parse_token::<Float>(line, 1, self.line_number)?,
                reward: parse_token::<Reward>(line, 2, self.line_number)?,
            });
        }

        Ok(customers)
    }

    fn next_line(&mut self) -> GenericResult<()> {
        self.line_number += 1;
        read_required_line(&mut self.reader, &mut self.buffer, self.line_number)
    }
}
