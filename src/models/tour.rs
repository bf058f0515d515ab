//! Edge-based tour.
//!
//! # Invariant
//!
//! A valid tour encodes exactly one Hamiltonian cycle: every city has
//! exactly two incident edge endpoints, and walking from edge 0 along
//! shared cities reaches all `n` edges before returning to the start.
//!
//! Validity is checked in O(n) by building a per-city incidence index and
//! walking it; traversal never mutates edges. [`Tour::orient`] rewrites
//! stored directions to match the walk, and is applied after each
//! successful check so that direction-sensitive operations (the 2-opt
//! candidate order) see edges laid out head to tail.

use rand::Rng;
use tracing::error;

use crate::error::{TspError, TspResult};
use crate::geometry::{segments_intersect, Point};
use crate::sampling;

use super::{Configuration, Edge, EdgeId, TspInstance};

/// One step of a traversal: an edge walked from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    /// Edge being walked.
    pub edge: EdgeId,
    /// City the walk enters the edge at.
    pub from: usize,
    /// City the walk leaves the edge at.
    pub to: usize,
}

/// A tour over every city of an instance, held as one edge per city.
///
/// # Examples
///
/// ```
/// use tsp_search::models::{City, Tour, TspInstance};
///
/// let instance = TspInstance::new(vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ]).unwrap();
///
/// let mut tour = Tour::new(&instance);
/// assert!(!tour.is_valid()); // every edge is still a zero-length stub
///
/// tour = Tour::from_order(&instance, &[0, 1, 2, 3]).unwrap();
/// assert!(tour.is_valid());
/// assert!((tour.total_distance() - 40.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Tour<'a> {
    instance: &'a TspInstance,
    edges: Vec<Edge>,
    best_distance: Option<f64>,
    saved: Option<Configuration>,
}

impl<'a> Tour<'a> {
    /// Creates a tour with one zero-length edge per city.
    pub fn new(instance: &'a TspInstance) -> Self {
        let edges = (0..instance.len()).map(Edge::new).collect();
        Self {
            instance,
            edges,
            best_distance: None,
            saved: None,
        }
    }

    /// Creates a tour visiting cities in the given order and closing back
    /// to the first one.
    pub fn from_order(instance: &'a TspInstance, order: &[usize]) -> TspResult<Self> {
        let n = order.len();
        let pairs = (0..n).map(|i| (order[i], order[(i + 1) % n])).collect();
        let mut tour = Self::new(instance);
        tour.apply_configuration(&Configuration::new(pairs))?;
        Ok(tour)
    }

    /// The instance this tour is built over.
    pub fn instance(&self) -> &'a TspInstance {
        self.instance
    }

    /// All edges, indexed by [`EdgeId`].
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    /// The edge with the given id.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// Number of edges (always equal to the number of cities).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the tour has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Length of one edge.
    pub fn edge_length(&self, id: EdgeId) -> f64 {
        let e = &self.edges[id];
        self.instance.distance(e.start(), e.end())
    }

    /// Sum of all edge lengths.
    pub fn total_distance(&self) -> f64 {
        self.edges
            .iter()
            .map(|e| self.instance.distance(e.start(), e.end()))
            .sum()
    }

    /// Points every edge back at its origin city, yielding a zero-length tour.
    pub fn reset(&mut self) {
        for e in &mut self.edges {
            e.reset();
        }
    }

    /// The segment an edge covers, from start to end.
    pub fn segment(&self, id: EdgeId) -> (Point, Point) {
        let e = &self.edges[id];
        (
            Point::from(self.instance.city(e.start())),
            Point::from(self.instance.city(e.end())),
        )
    }

    /// Finds the edge continuing the tour from `edge` at city `at`.
    ///
    /// Prefers another edge starting at `at`, then one ending there; the
    /// returned step is oriented to leave `at`. Returns `None` when the
    /// tour is broken at `at`.
    pub fn next_edge(&self, edge: EdgeId, at: usize) -> Option<TourStep> {
        let mut reversed = None;
        for (i, e) in self.edges.iter().enumerate() {
            if i == edge {
                continue;
            }
            if e.start() == at {
                return Some(TourStep {
                    edge: i,
                    from: e.start(),
                    to: e.end(),
                });
            }
            if reversed.is_none() && e.end() == at {
                reversed = Some(TourStep {
                    edge: i,
                    from: e.end(),
                    to: e.start(),
                });
            }
        }
        reversed
    }

    /// Walks the tour from edge 0 in its stored direction.
    ///
    /// Stops after `len()` steps, on returning to an edge already walked,
    /// or when no continuation exists.
    pub fn traverse(&self) -> Traversal<'_> {
        Traversal::new(&self.edges)
    }

    /// Returns `true` if the edges form exactly one Hamiltonian cycle.
    pub fn is_valid(&self) -> bool {
        forms_single_cycle(&self.edges)
    }

    /// Fails with [`TspError::InvariantViolation`] if the tour is broken.
    pub fn ensure_valid(&self, context: &'static str) -> TspResult<()> {
        if self.is_valid() {
            return Ok(());
        }
        let visited = self.traverse().count();
        error!(
            event = "invariant_violation",
            context,
            visited,
            edges = self.len(),
            "tour no longer forms a single cycle"
        );
        Err(TspError::InvariantViolation {
            context,
            visited,
            edges: self.len(),
        })
    }

    /// Stores every edge in the direction the traversal walks it.
    pub fn orient(&mut self) {
        let steps: Vec<TourStep> = self.traverse().collect();
        for step in steps {
            self.edges[step.edge].set_endpoints(step.from, step.to);
        }
    }

    /// Edges whose segment properly crosses this edge's segment.
    ///
    /// Edges sharing a city with `id` never count as crossing it.
    pub fn edge_conflicts(&self, id: EdgeId) -> impl Iterator<Item = EdgeId> + '_ {
        let edge = self.edges[id];
        let (p1, p2) = self.segment(id);
        self.edges
            .iter()
            .enumerate()
            .filter(move |&(other, e)| {
                if other == id || edge.shares_city(e) {
                    return false;
                }
                let (p3, p4) = self.segment(other);
                segments_intersect(p1, p2, p3, p4)
            })
            .map(|(other, _)| other)
    }

    /// Picks one edge crossing `id` uniformly at random.
    pub fn sample_conflict<R: Rng>(&self, id: EdgeId, rng: &mut R) -> Option<EdgeId> {
        let conflicts: Vec<EdgeId> = self.edge_conflicts(id).collect();
        sampling::pick(&conflicts, rng).copied()
    }

    /// Collects, for every edge, at most one sampled crossing partner.
    pub fn intersect_conflicts<R: Rng>(&self, rng: &mut R) -> Vec<(EdgeId, EdgeId)> {
        (0..self.len())
            .filter_map(|id| self.sample_conflict(id, rng).map(|other| (id, other)))
            .collect()
    }

    /// Snapshots the tour in traversal order.
    pub fn to_configuration(&self) -> Configuration {
        Configuration::new(self.traverse().map(|s| (s.from, s.to)).collect())
    }

    /// Resets the tour, then assigns edge `i` the `i`-th pair of `configuration`.
    ///
    /// The tour is left untouched if the configuration has the wrong
    /// length, names an unknown city, or does not describe a single cycle.
    pub fn apply_configuration(&mut self, configuration: &Configuration) -> TspResult<()> {
        let n = self.len();
        if configuration.len() != n {
            return Err(TspError::ConfigurationMismatch(format!(
                "{} pairs for {} edges",
                configuration.len(),
                n
            )));
        }
        if let Some(&(a, b)) = configuration
            .pairs()
            .iter()
            .find(|&&(a, b)| a >= n || b >= n)
        {
            return Err(TspError::ConfigurationMismatch(format!(
                "pair ({a}, {b}) names a city outside 0..{n}"
            )));
        }

        let mut edges = self.edges.clone();
        for (e, &(start, end)) in edges.iter_mut().zip(configuration.pairs()) {
            e.reset();
            e.set_endpoints(start, end);
        }
        if !forms_single_cycle(&edges) {
            return Err(TspError::ConfigurationMismatch(
                "pairs do not form a single cycle".into(),
            ));
        }
        self.edges = edges;
        Ok(())
    }

    /// Best distance recorded by the last strategy run.
    pub fn best_distance(&self) -> Option<f64> {
        self.best_distance
    }

    /// Last good configuration recorded by a strategy run.
    pub fn saved(&self) -> Option<&Configuration> {
        self.saved.as_ref()
    }

    /// Records the current layout as the last good configuration.
    pub fn save_result(&mut self, best_distance: f64) -> Configuration {
        let configuration = self.to_configuration();
        self.best_distance = Some(best_distance);
        self.saved = Some(configuration.clone());
        configuration
    }
}

/// Lazy walk over a tour's edges. See [`Tour::traverse`].
#[derive(Debug)]
pub struct Traversal<'t> {
    edges: &'t [Edge],
    incidence: Vec<Vec<EdgeId>>,
    visited: Vec<bool>,
    next: Option<TourStep>,
}

impl<'t> Traversal<'t> {
    fn new(edges: &'t [Edge]) -> Self {
        let next = edges.first().map(|e| TourStep {
            edge: 0,
            from: e.start(),
            to: e.end(),
        });
        Self {
            edges,
            incidence: incidence(edges),
            visited: vec![false; edges.len()],
            next,
        }
    }
}

impl Iterator for Traversal<'_> {
    type Item = TourStep;

    fn next(&mut self) -> Option<TourStep> {
        let step = self.next.take()?;
        self.visited[step.edge] = true;

        self.next = self
            .incidence
            .get(step.to)
            .and_then(|ids| ids.iter().copied().find(|&id| id != step.edge))
            .filter(|&id| !self.visited[id])
            .map(|id| {
                let e = &self.edges[id];
                if e.start() == step.to {
                    TourStep {
                        edge: id,
                        from: e.start(),
                        to: e.end(),
                    }
                } else {
                    TourStep {
                        edge: id,
                        from: e.end(),
                        to: e.start(),
                    }
                }
            });

        Some(step)
    }
}

/// City position -> ids of edges touching it, one entry per endpoint.
fn incidence(edges: &[Edge]) -> Vec<Vec<EdgeId>> {
    let mut index: Vec<Vec<EdgeId>> = vec![Vec::with_capacity(2); edges.len()];
    for (id, e) in edges.iter().enumerate() {
        for city in [e.start(), e.end()] {
            if let Some(slot) = index.get_mut(city) {
                slot.push(id);
            }
        }
    }
    index
}

fn forms_single_cycle(edges: &[Edge]) -> bool {
    if incidence(edges).iter().any(|ids| ids.len() != 2) {
        return false;
    }
    Traversal::new(edges).count() == edges.len()
}
