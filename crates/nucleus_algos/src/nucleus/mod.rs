mod incidence;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use bitvec::prelude::*;
use log::{debug, info};
use nanorand::{Rng, WyRand};
use num_format::{Locale, ToFormattedString};

use nucleus_core::{Graph, VertexId};

pub use incidence::IncidenceMaps;

use crate::enumerate_k_cliques;

/// Peeling policy for `nucleus_decomposition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NucleusVariant {
    /// Exact peeling: repeatedly remove the unprocessed r-clique with the
    /// smallest current s-degree, propagating the removal to its
    /// neighbours.
    Exact,
    /// Processes r-cliques once, in ascending order of their *initial*
    /// s-degree, without ever mutating a degree after it is computed.
    UpdateFree,
    /// Like `Exact`, but each peel only propagates through the first `L`
    /// s-cliques of the peeled r-clique's incidence row.
    Limited(usize),
    /// Estimates a single mean s-degree over `trials` uniformly sampled
    /// r-cliques (seeded, reproducible) and broadcasts it to every entry of
    /// the result. Does not peel.
    MonteCarlo { seed: u64, trials: usize },
}

/// Computes the nucleus level of every r-clique of `graph` under the
/// `(r, s)` decomposition, `1 <= r < s`.
///
/// Returns a vector of length `|CliqueSet_r(graph)|`; entry `i` is the
/// nucleus level of the i-th r-clique in lexicographic order.
///
/// `r >= s` is a contract violation (panics).
pub fn nucleus_decomposition<NI: VertexId>(
    graph: &Graph<NI>,
    r: usize,
    s: usize,
    variant: NucleusVariant,
) -> Vec<usize> {
    assert!(r < s, "nucleus decomposition requires r < s");

    let r_cliques = enumerate_k_cliques(graph, r);
    let s_cliques = enumerate_k_cliques(graph, s);

    info!(
        "Nucleus decomposition over {} r-cliques and {} s-cliques",
        r_cliques.len().to_formatted_string(&Locale::en),
        s_cliques.len().to_formatted_string(&Locale::en)
    );

    if r_cliques.is_empty() {
        return Vec::new();
    }

    let incidence = IncidenceMaps::build(&r_cliques, &s_cliques);

    match variant {
        NucleusVariant::Exact => peel(&incidence, None),
        NucleusVariant::UpdateFree => update_free(&incidence),
        NucleusVariant::Limited(limit) => peel(&incidence, Some(limit)),
        NucleusVariant::MonteCarlo { seed, trials } => monte_carlo(&incidence, seed, trials),
    }
}

/// Exact and Limited(L) share the peeling loop; `propagation_limit` caps how
/// many s-cliques of the peeled r-clique's incidence row are used to
/// propagate the decrement, `None` meaning unlimited (the exact variant).
fn peel(incidence: &IncidenceMaps, propagation_limit: Option<usize>) -> Vec<usize> {
    let n_r = incidence.n_r();
    let mut s_degree: Vec<usize> = (0..n_r).map(|i| incidence.r_neighbours(i).len()).collect();
    let mut processed = BitVec::<usize>::repeat(false, n_r);
    let mut levels = vec![0usize; n_r];

    let mut heap: BinaryHeap<Reverse<(usize, usize)>> = s_degree
        .iter()
        .enumerate()
        .map(|(i, &d)| Reverse((d, i)))
        .collect();

    let mut n_processed = 0usize;
    while let Some(Reverse((d, i))) = heap.pop() {
        if processed[i] || d != s_degree[i] {
            continue;
        }
        levels[i] = d;

        let row = incidence.r_neighbours(i);
        let row = match propagation_limit {
            Some(limit) => &row[..row.len().min(limit)],
            None => row,
        };

        for &j in row {
            let already_represented = incidence.s_neighbours(j).iter().any(|&ip| processed[ip]);
            if already_represented {
                continue;
            }
            for &ip in incidence.s_neighbours(j) {
                if ip != i && s_degree[ip] > s_degree[i] {
                    s_degree[ip] -= 1;
                    heap.push(Reverse((s_degree[ip], ip)));
                }
            }
        }

        processed.set(i, true);
        n_processed += 1;
        debug!(
            "Nucleus decomposition processed {} of {} r-cliques",
            n_processed, n_r
        );
    }

    levels
}

/// Orders r-cliques once by their initial s-degree and assigns each a level
/// equal to the number of its incident s-cliques that are not yet
/// "represented" by an r-clique processed later in that fixed order — the
/// index comparison never revisits a degree once computed.
fn update_free(incidence: &IncidenceMaps) -> Vec<usize> {
    let n_r = incidence.n_r();
    let initial_s_degree: Vec<usize> = (0..n_r).map(|i| incidence.r_neighbours(i).len()).collect();

    let mut order: Vec<usize> = (0..n_r).collect();
    order.sort_by_key(|&i| (initial_s_degree[i], i));

    let mut rank = vec![0usize; n_r];
    for (t, &i) in order.iter().enumerate() {
        rank[i] = t;
    }

    let mut levels = vec![0usize; n_r];
    for (t, &i) in order.iter().enumerate() {
        levels[i] = incidence
            .r_neighbours(i)
            .iter()
            .filter(|&&j| !incidence.s_neighbours(j).iter().any(|&ip| rank[ip] > t))
            .count();
    }
    levels
}

fn monte_carlo(incidence: &IncidenceMaps, seed: u64, trials: usize) -> Vec<usize> {
    let n_r = incidence.n_r();
    if trials == 0 {
        return vec![0; n_r];
    }

    let mut rng = WyRand::new_seed(seed);
    let mut total = 0u64;
    for _ in 0..trials {
        let sampled = rng.generate_range(0..n_r);
        total += incidence.r_neighbours(sampled).len() as u64;
    }
    let estimate = (total / trials as u64) as usize;

    info!(
        "Monte-Carlo nucleus estimate over {} trials: {}",
        trials, estimate
    );

    vec![estimate; n_r]
}
