#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::utils::{Float, GenericResult, round_to_cents};

/// Specifies a reward type.
pub type Reward = i64;

/// Represents a customer (or a depot) with its location and reward.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    /// A unique id of the customer which is equal to its position in the problem.
    pub id: usize,
    /// X coordinate.
    pub x: Float,
    /// Y coordinate.
    pub y: Float,
    /// A reward collected when the customer is visited.
    pub reward: Reward,
}

/// A symmetric distance matrix stored as a flat row-major vector.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Float>,
}

impl DistanceMatrix {
    /// Creates a matrix of euclidean distances rounded to two decimals.
    pub fn from_customers(customers: &[Customer]) -> Self {
        let size = customers.len();
        let mut values = vec![0.; size * size];

        for (i, from) in customers.iter().enumerate() {
            for (j, to) in customers.iter().enumerate().skip(i + 1) {
                let distance = euclidean_distance(from, to);
                values[i * size + j] = distance;
                values[j * size + i] = distance;
            }
        }

        Self { size, values }
    }

    /// Returns the distance between two locations.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> Float {
        self.values[from * self.size + to]
    }
}

/// Defines a Team Orienteering Problem instance. It is immutable once built and can be shared
/// freely between independent search runs.
#[derive(Clone, Debug)]
pub struct Problem {
    /// An instance id.
    pub id: String,
    /// Amount of available vehicles.
    pub n_trucks: usize,
    /// Maximum route length.
    pub tmax: Float,
    customers: Vec<Customer>,
    distances: DistanceMatrix,
}

impl Problem {
    /// Returns id of the source depot.
    #[inline]
    pub fn source(&self) -> usize {
        0
    }

    /// Returns id of the sink depot.
    #[inline]
    pub fn sink(&self) -> usize {
        self.customers.len() - 1
    }

    /// Returns true if given id belongs to the source or to the sink depot.
    #[inline]
    pub fn is_depot(&self, id: usize) -> bool {
        id == self.source() || id == self.sink()
    }

    /// Returns all customers including depots.
    pub fn customers(&self) -> &[Customer] {
        self.customers.as_slice()
    }

    /// Returns a customer by its id.
    pub fn customer(&self, id: usize) -> Option<&Customer> {
        self.customers.get(id)
    }

    /// Returns ids of all customers excluding depots.
    pub fn customer_ids(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.customers.len()).filter(move |&id| !self.is_depot(id))
    }

    /// Returns a reward of given customer.
    #[inline]
    pub fn reward(&self, id: usize) -> Reward {
        self.customers[id].reward
    }

    /// Returns the distance between two customers.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> Float {
        self.distances.distance(from, to)
    }

    /// Returns the length of a source-customer-sink round trip.
    #[inline]
    pub fn round_trip(&self, id: usize) -> Float {
        self.distance(self.source(), id) + self.distance(id, self.sink())
    }

    /// Returns true if the customer can be served by a route on its own.
    pub fn is_reachable(&self, id: usize) -> bool {
        self.round_trip(id) <= self.tmax
    }

    /// Returns the total length of a sequence of customers.
    pub fn sequence_length(&self, sequence: &[usize]) -> Float {
        sequence.windows(2).map(|leg| self.distance(leg[0], leg[1])).sum()
    }
}

/// Builds a problem precomputing the full distance table. Customers are expected in id order:
/// the first one is the source depot, the last one is the sink depot.
pub fn build_problem(id: &str, n_trucks: usize, tmax: Float, customers: Vec<Customer>) -> GenericResult<Problem> {
    if customers.len() < 2 {
        return Err(format!("expecting at least two customers (source and sink), got: {}", customers.len()).into());
    }

    if let Some((position, customer)) = customers.iter().enumerate().find(|(position, c)| c.id != *position) {
        return Err(format!("expecting customer id {position}, got: {}", customer.id).into());
    }

    if !tmax.is_finite() || tmax < 0. {
        return Err(format!("tmax must be a finite non-negative number, got: {tmax}").into());
    }

    let distances = DistanceMatrix::from_customers(customers.as_slice());

    Ok(Problem { id: id.to_string(), n_trucks, tmax, customers, distances })
}

fn euclidean_distance(from: &Customer, to: &Customer) -> Float {
    round_to_cents(((from.x - to.x).powi(2) + (from.y - to.y).powi(2)).sqrt())
}
