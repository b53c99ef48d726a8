#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::{Problem, Reward};
use crate::utils::Float;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A route identifier. Ids are unique within a solution, but not necessary contiguous.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub usize);

impl Display for RouteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a vehicle route: an ordered sequence of customer ids which starts at the source
/// depot and ends at the sink depot.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    id: RouteId,
    customers: Vec<usize>,
    length: Float,
    reward: Reward,
}

impl Route {
    /// Creates a new route from its parts. No validation is performed.
    pub fn new(id: RouteId, customers: Vec<usize>, length: Float, reward: Reward) -> Self {
        Self { id, customers, length, reward }
    }

    /// Creates a route from the sequence of customers calculating its length and reward.
    pub fn from_sequence(problem: &Problem, id: RouteId, customers: Vec<usize>) -> Self {
        let length = problem.sequence_length(customers.as_slice());
        let reward = customers.iter().filter(|&&c| !problem.is_depot(c)).map(|&c| problem.reward(c)).sum();

        Self { id, customers, length, reward }
    }

    /// Creates a route which serves exactly one customer.
    pub fn round_trip(problem: &Problem, id: RouteId, customer: usize) -> Self {
        Self {
            id,
            customers: vec![problem.source(), customer, problem.sink()],
            length: problem.round_trip(customer),
            reward: problem.reward(customer),
        }
    }

    /// Returns route id.
    pub fn id(&self) -> RouteId {
        self.id
    }

    /// Returns full sequence of customer ids including depots.
    pub fn customers(&self) -> &[usize] {
        self.customers.as_slice()
    }

    /// Returns customers without source and sink depots.
    pub fn interior(&self) -> &[usize] {
        match self.customers.len() {
            0..=2 => &[],
            len => &self.customers[1..len - 1],
        }
    }

    /// Returns route length.
    pub fn length(&self) -> Float {
        self.length
    }

    /// Returns collected reward.
    pub fn reward(&self) -> Reward {
        self.reward
    }

    /// Returns true if route length does not exceed the problem's budget.
    pub fn is_feasible(&self, problem: &Problem) -> bool {
        self.length <= problem.tmax
    }

    /// Returns route legs as pairs of consecutive customer ids.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.customers.windows(2).map(|leg| (leg[0], leg[1]))
    }
}

/// Represents a solution: a set of routes and a reverse index from customer to route.
///
/// Routes are kept behind shared pointers: a new solution derived from an existing one
/// shares all routes which are left untouched, so previous solutions stay valid and cheap
/// to retain (e.g. in an elite pool).
#[derive(Clone, Debug, Default)]
pub struct Solution {
    routes: BTreeMap<RouteId, Arc<Route>>,
    index: FxHashMap<usize, RouteId>,
    next_route_id: usize,
}

impl Solution {
    /// Creates a new solution from given routes.
    pub fn new(routes: Vec<Route>) -> Self {
        routes.into_iter().fold(Self::default(), |mut solution, route| {
            solution.insert_route(route);
            solution
        })
    }

    /// Returns routes in the order of their ids.
    pub fn routes(&self) -> impl Iterator<Item = &Route> + '_ {
        self.routes.values().map(|route| route.as_ref())
    }

    /// Returns route ids in ascending order.
    pub fn route_ids(&self) -> Vec<RouteId> {
        self.routes.keys().copied().collect()
    }

    /// Returns a route by its id.
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(&id).map(|route| route.as_ref())
    }

    /// Returns id of the route which serves given customer.
    pub fn route_of(&self, customer: usize) -> Option<RouteId> {
        self.index.get(&customer).copied()
    }

    /// Returns true if the customer is served by some route.
    pub fn is_assigned(&self, customer: usize) -> bool {
        self.index.contains_key(&customer)
    }

    /// Returns customers which are not served by any route.
    pub fn unassigned<'a>(&'a self, problem: &'a Problem) -> impl Iterator<Item = usize> + 'a {
        problem.customer_ids().filter(move |customer| !self.is_assigned(*customer))
    }

    /// Returns the reverse index as pairs of customer and route ids.
    pub fn index(&self) -> impl Iterator<Item = (usize, RouteId)> + '_ {
        self.index.iter().map(|(&customer, &route_id)| (customer, route_id))
    }

    /// Returns amount of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if solution has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns total reward collected by all routes.
    pub fn reward(&self) -> Reward {
        self.routes().map(|route| route.reward()).sum()
    }

    /// Returns total length of all routes.
    pub fn length(&self) -> Float {
        self.routes().map(|route| route.length()).sum()
    }

    /// Returns a new solution where the route with the same id is replaced by the given one
    /// (or the route is added if there is no such id).
    pub fn with_route(&self, route: Route) -> Self {
        let mut solution = self.clone();
        solution.insert_route(route);
        solution
    }

    /// Returns a new solution without the route with given id.
    pub fn without_route(&self, id: RouteId) -> Self {
        let mut solution = self.clone();
        solution.remove_route(id);
        solution
    }

    /// Checks that each route starts at the source, ends at the sink, visits each customer at
    /// most once and that the reverse index mirrors route membership exactly.
    pub fn is_consistent(&self, problem: &Problem) -> bool {
        let mut seen = FxHashMap::default();

        let routes_are_valid = self.routes.iter().all(|(&id, route)| {
            let customers = route.customers();
            let has_depots = customers.len() >= 2
                && customers.first() == Some(&problem.source())
                && customers.last() == Some(&problem.sink());

            has_depots
                && route.id() == id
                && route.interior().iter().all(|&customer| {
                    customer < problem.customers().len()
                        && !problem.is_depot(customer)
                        && seen.insert(customer, id).is_none()
                })
        });

        routes_are_valid && seen == self.index
    }

    /// Allocates a new route id which does not collide with any id used within this solution.
    pub(crate) fn allocate_route_id(&mut self) -> RouteId {
        let id = RouteId(self.next_route_id);
        self.next_route_id += 1;

        id
    }

    /// Inserts or replaces the route keeping the reverse index in sync.
    pub(crate) fn insert_route(&mut self, route: Route) {
        let id = route.id();
        self.remove_route(id);

        route.interior().iter().for_each(|&customer| {
            self.index.insert(customer, id);
        });
        self.next_route_id = self.next_route_id.max(id.0 + 1);
        self.routes.insert(id, Arc::new(route));
    }

    /// Removes the route keeping the reverse index in sync.
    pub(crate) fn remove_route(&mut self, id: RouteId) -> Option<Arc<Route>> {
        let route = self.routes.remove(&id)?;

        route.interior().iter().for_each(|customer| {
            if self.index.get(customer) == Some(&id) {
                self.index.remove(customer);
            }
        });

        Some(route)
    }
}
