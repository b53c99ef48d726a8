//! Contains functionality to read TOP benchmark instances and write their solutions.

mod reader;
pub use self::reader::TopProblem;

mod writer;
pub use self::writer::TopSolution;
