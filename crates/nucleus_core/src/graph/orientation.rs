use crate::vertex::VertexId;

/// How to break the tie when orienting an undirected edge `(u, v)` with
/// `u < v` into a single directed arc.
///
/// Modelled as an enum rather than the source's raw `int (*)(int, int,
/// int*)` function pointer, per the design notes on dynamic dispatch. For
/// anything these two rules don't cover, `Graph::make_directed_with` takes
/// an arbitrary closure instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationRule {
    /// Target is the higher-degree endpoint; ties broken by higher id.
    ByDegreeThenId,
    /// Target is `max(u, v)`.
    ByMaxId,
}

impl OrientationRule {
    /// Returns the *target* endpoint of the arc; the other endpoint is the
    /// source.
    pub fn target<NI: VertexId>(self, u: NI, v: NI, degrees: &[NI]) -> NI {
        match self {
            OrientationRule::ByDegreeThenId => {
                match degrees[u.index()].cmp(&degrees[v.index()]) {
                    std::cmp::Ordering::Greater => u,
                    std::cmp::Ordering::Less => v,
                    std::cmp::Ordering::Equal => u.max(v),
                }
            }
            OrientationRule::ByMaxId => u.max(v),
        }
    }
}
