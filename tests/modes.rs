//! Result-mode scenarios: count/list parity, limits, streaming, hints,
//! queue policies, directedness overrides and custom predicates.

mod common;

use common::{complete_graph, graph_from_edges, init_test_logging, oracle_count, scrambled_graph};
use lazy_static::lazy_static;
use motif_search::{
    attr_map, count_motifs, find_motifs, find_motifs_iter, AttrGraph, AttrMap, AttrValue,
    DequeQueue, GraphView, InstrumentedQueue, MatchConfig, MatchError, MatchPredicates,
    MotifMatcher, QueuePolicy,
};
use rstest::rstest;

type Edges = &'static [(&'static str, &'static str)];

const CYCLE: Edges = &[("a", "b"), ("b", "c"), ("c", "a")];
const RECT: Edges = &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")];

lazy_static! {
    static ref HOST_CYCLE: AttrGraph<&'static str> =
        graph_from_edges(true, &[("A", "B"), ("B", "C"), ("C", "A")]);
}

#[test]
fn count_only_equals_list_length() {
    init_test_logging();
    let motif = graph_from_edges(true, RECT);
    let host = scrambled_graph(10, 30, true, 41);
    let listed = find_motifs(&motif, &host, &MatchConfig::default()).unwrap();
    let counted = count_motifs(&motif, &host, &MatchConfig::default()).unwrap();
    assert_eq!(counted, listed.len());
}

#[test]
fn limit_returns_a_prefix_of_the_unlimited_run() {
    init_test_logging();
    let motif = graph_from_edges(false, RECT);
    let host = complete_graph(4);

    let full = find_motifs(&motif, &host, &MatchConfig::default()).unwrap();
    assert_eq!(full.len(), 24);

    let limited = find_motifs(&motif, &host, &MatchConfig::default().with_limit(5)).unwrap();
    assert_eq!(limited.len(), 5);
    assert_eq!(limited[..], full[..5]);

    let counted = count_motifs(&motif, &host, &MatchConfig::default().with_limit(5)).unwrap();
    assert_eq!(counted, 5);
}

#[test]
fn limit_larger_than_result_set_is_harmless() {
    init_test_logging();
    let motif = graph_from_edges(true, CYCLE);
    let found = find_motifs(&motif, &*HOST_CYCLE, &MatchConfig::default().with_limit(100)).unwrap();
    assert_eq!(found.len(), 3);
}

#[test]
fn streaming_is_lazy_and_ignores_the_limit() {
    init_test_logging();
    let motif = graph_from_edges(false, &[("a", "b"), ("b", "c"), ("c", "a")]);
    let host = complete_graph(4);

    let mut stream =
        find_motifs_iter(&motif, &host, &MatchConfig::default().with_limit(2)).unwrap();
    let head: Vec<_> = stream.by_ref().take(5).collect();
    assert_eq!(head.len(), 5);
    assert_eq!(stream.emitted(), 5);

    // the consumer may keep draining past any configured limit
    assert_eq!(stream.count(), 24 - 5);
}

#[rstest]
#[case::depth_first(QueuePolicy::DepthFirst)]
#[case::breadth_first(QueuePolicy::BreadthFirst)]
fn queue_policy_changes_order_but_not_the_result_set(#[case] policy: QueuePolicy) {
    init_test_logging();
    let motif = graph_from_edges(true, CYCLE);
    let host = scrambled_graph(9, 24, true, 13);

    let mut found: Vec<_> = find_motifs(&motif, &host, &MatchConfig::default().with_queue_policy(policy))
        .unwrap()
        .into_iter()
        .map(|e| e.into_pairs())
        .collect();
    found.sort();

    let mut baseline: Vec<_> = find_motifs(&motif, &host, &MatchConfig::default())
        .unwrap()
        .into_iter()
        .map(|e| e.into_pairs())
        .collect();
    baseline.sort();

    assert_eq!(found, baseline);
}

#[test]
fn instrumented_queue_profiles_the_search() {
    init_test_logging();
    let motif = graph_from_edges(true, CYCLE);
    let matcher = MotifMatcher::build(&motif, &*HOST_CYCLE, MatchConfig::default()).unwrap();

    let queue = InstrumentedQueue::new(DequeQueue::new(QueuePolicy::DepthFirst));
    let mut stream = matcher.into_iter_with_queue(queue);
    assert_eq!(stream.by_ref().count(), 3);

    let history = stream.queue().size_history();
    assert!(!history.is_empty());
    assert_eq!(history.last(), Some(&0));
}

#[test]
fn hints_constrain_the_search() {
    init_test_logging();
    let motif = graph_from_edges(true, CYCLE);

    let one = MotifMatcher::build(&motif, &*HOST_CYCLE, MatchConfig::default())
        .unwrap()
        .with_hints([vec![("a", "A")]])
        .enumerate_all();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].clone().into_pairs(), vec![("a", "A"), ("b", "B"), ("c", "C")]);

    let two = MotifMatcher::build(&motif, &*HOST_CYCLE, MatchConfig::default())
        .unwrap()
        .with_hints([vec![("a", "A")], vec![("b", "A")]])
        .count_all();
    assert_eq!(two, 2);
}

#[test]
fn invalid_hints_are_dropped_silently() {
    init_test_logging();
    let motif = graph_from_edges(true, CYCLE);

    // not injective
    let broken = MotifMatcher::build(&motif, &*HOST_CYCLE, MatchConfig::default())
        .unwrap()
        .with_hints([vec![("a", "A"), ("b", "A")]])
        .count_all();
    assert_eq!(broken, 0);

    // maps a motif edge onto a host non-edge
    let inconsistent = MotifMatcher::build(&motif, &*HOST_CYCLE, MatchConfig::default())
        .unwrap()
        .with_hints([vec![("a", "A"), ("b", "C")]])
        .count_all();
    assert_eq!(inconsistent, 0);

    // unknown vertices on either side
    let unknown = MotifMatcher::build(&motif, &*HOST_CYCLE, MatchConfig::default())
        .unwrap()
        .with_hints([vec![("zz", "A")], vec![("a", "ZZ")]])
        .count_all();
    assert_eq!(unknown, 0);

    // one bad hint does not poison a good one
    let mixed = MotifMatcher::build(&motif, &*HOST_CYCLE, MatchConfig::default())
        .unwrap()
        .with_hints([vec![("a", "A"), ("b", "C")], vec![("a", "A"), ("b", "B")]])
        .count_all();
    assert_eq!(mixed, 1);
}

#[test]
fn empty_hint_list_behaves_like_no_hints() {
    init_test_logging();
    let motif = graph_from_edges(true, CYCLE);
    let with_empty = MotifMatcher::build(&motif, &*HOST_CYCLE, MatchConfig::default())
        .unwrap()
        .with_hints(Vec::<Vec<(&str, &str)>>::new())
        .count_all();
    assert_eq!(with_empty, 3);
}

#[test]
fn directedness_override_projects_directed_graphs() {
    init_test_logging();
    let motif = graph_from_edges(true, CYCLE);

    // as undirected graphs the cycle has the full six symmetries
    let projected =
        find_motifs(&motif, &*HOST_CYCLE, &MatchConfig::default().with_directed(false)).unwrap();
    assert_eq!(projected.len(), 6);
    assert_eq!(projected.len(), oracle_count(&motif, &*HOST_CYCLE, false, false));
}

#[test]
fn directed_override_on_undirected_graphs_fails_fast() {
    init_test_logging();
    let motif = graph_from_edges(false, CYCLE);
    let host = graph_from_edges(false, CYCLE);
    let err = find_motifs(&motif, &host, &MatchConfig::default().with_directed(true)).unwrap_err();
    assert_eq!(err, MatchError::DirectednessMismatch);
}

#[test]
fn interestingness_reorders_but_preserves_the_result_set() {
    init_test_logging();
    let motif = graph_from_edges(true, CYCLE);
    let host = scrambled_graph(9, 24, true, 29);

    let mut uniform: Vec<_> = find_motifs(&motif, &host, &MatchConfig::default())
        .unwrap()
        .into_iter()
        .map(|e| e.into_pairs())
        .collect();
    uniform.sort();

    let mut weights = ahash::AHashMap::new();
    weights.insert("c", 10.0);
    weights.insert("b", 5.0);
    let mut weighted: Vec<_> = MotifMatcher::build(&motif, &host, MatchConfig::default())
        .unwrap()
        .with_interestingness(&weights)
        .unwrap()
        .enumerate_all()
        .into_iter()
        .map(|e| e.into_pairs())
        .collect();
    weighted.sort();

    assert_eq!(uniform, weighted);
}

#[test]
fn unknown_interestingness_vertices_are_rejected() {
    init_test_logging();
    let motif = graph_from_edges(true, CYCLE);
    let mut weights = ahash::AHashMap::new();
    weights.insert("nope", 1.0);
    let err = match MotifMatcher::build(&motif, &*HOST_CYCLE, MatchConfig::default())
        .unwrap()
        .with_interestingness(&weights)
    {
        Err(err) => err,
        Ok(_) => panic!("expected an unknown-vertex error"),
    };
    assert!(matches!(err, MatchError::UnknownMotifVertex(_)));
}

/// Predicates that ignore vertex attributes entirely.
struct IgnoreVertexAttrs;

impl<MV, H: GraphView> MatchPredicates<MV, H> for IgnoreVertexAttrs {
    fn is_node_attr_match(&self, _motif_attrs: &AttrMap, _host_attrs: &AttrMap) -> bool {
        true
    }
}

#[test]
fn custom_predicates_replace_the_defaults() {
    init_test_logging();
    let mut motif = AttrGraph::directed();
    motif.add_vertex_with("a", attr_map([("color", AttrValue::from("red"))]));
    motif.add_edge("a", "b");

    let host = graph_from_edges(true, &[("X", "Y")]); // no colors anywhere

    let strict = find_motifs(&motif, &host, &MatchConfig::default()).unwrap();
    assert!(strict.is_empty());

    let relaxed = MotifMatcher::build(&motif, &host, MatchConfig::default())
        .unwrap()
        .with_predicates(IgnoreVertexAttrs)
        .enumerate_all();
    assert_eq!(relaxed.len(), 1);
}
