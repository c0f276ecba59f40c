//! Optimality, validity, completeness and soundness of `find_path`, checked
//! against an independent breadth-first search on random grids, and its
//! tie-breaking checked against a list-based open set.

use std::collections::VecDeque;

use proptest::prelude::*;
use tilepath_core::{Point, Range};
use tilepath_paths::{PathError, PathRange, Topology, find_path};

#[derive(Debug, Clone)]
struct Board {
    rng: Range,
    walkable: Vec<bool>,
}

impl Topology for Board {
    fn bounds(&self) -> Range {
        self.rng
    }

    fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    fn is_walkable(&self, p: Point) -> bool {
        self.rng.index_of(p).is_some_and(|i| self.walkable[i])
    }
}

/// Plain BFS step count between two walkable cells, `None` when disconnected.
fn reference_distance(board: &Board, from: Point, to: Point) -> Option<usize> {
    let mut dist = vec![usize::MAX; board.rng.len()];
    let mut queue = VecDeque::new();
    dist[board.rng.index_of(from)?] = 0;
    queue.push_back(from);
    while let Some(p) = queue.pop_front() {
        let d = dist[board.rng.index_of(p)?];
        if p == to {
            return Some(d);
        }
        for n in p.neighbors_4() {
            if !board.is_walkable(n) {
                continue;
            }
            let ni = board.rng.index_of(n)?;
            if dist[ni] == usize::MAX {
                dist[ni] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

/// A* over a plain list: pick the first cell with the lowest (f, h), where
/// cells stay at the position they were first added.
fn linear_scan_path(board: &Board, start: Point, goal: Point) -> Option<Vec<Point>> {
    let rng = board.rng;
    let ix = |p: Point| rng.index_of(p).expect("cell in range");
    let h = |p: Point| (p.x - goal.x).abs() + (p.y - goal.y).abs();
    let mut g = vec![i32::MAX; rng.len()];
    let mut parent = vec![None; rng.len()];
    let mut closed = vec![false; rng.len()];
    let mut open = vec![start];
    g[ix(start)] = 0;

    while !open.is_empty() {
        let pos = (0..open.len()).min_by_key(|&i| (g[ix(open[i])] + h(open[i]), h(open[i])))?;
        let current = open.remove(pos);
        if current == goal {
            let mut path = vec![goal];
            let mut c = goal;
            while let Some(p) = parent[ix(c)] {
                path.push(p);
                c = p;
            }
            path.reverse();
            return Some(path);
        }
        closed[ix(current)] = true;
        for n in current.neighbors_4() {
            if !board.is_walkable(n) || closed[ix(n)] {
                continue;
            }
            let tentative = g[ix(current)] + 1;
            let queued = open.contains(&n);
            if tentative < g[ix(n)] || !queued {
                g[ix(n)] = tentative;
                parent[ix(n)] = Some(current);
                if !queued {
                    open.push(n);
                }
            }
        }
    }
    None
}

fn arb_board() -> impl Strategy<Value = (Board, Point, Point)> {
    (1i32..10, 1i32..10).prop_flat_map(|(w, h)| {
        let len = (w * h) as usize;
        (
            prop::collection::vec(prop::bool::weighted(0.7), len),
            0..w,
            0..h,
            0..w,
            0..h,
        )
            .prop_map(move |(mut walkable, sx, sy, gx, gy)| {
                let rng = Range::sized(w, h);
                let start = Point::new(sx, sy);
                let goal = Point::new(gx, gy);
                for p in [start, goal] {
                    if let Some(i) = rng.index_of(p) {
                        walkable[i] = true;
                    }
                }
                (Board { rng, walkable }, start, goal)
            })
    })
}

proptest! {
    #[test]
    fn path_length_matches_bfs((board, start, goal) in arb_board()) {
        let found = find_path(&board, start, goal).unwrap();
        let expected = reference_distance(&board, start, goal);
        match (found, expected) {
            (Some(path), Some(d)) => prop_assert_eq!(path.len() - 1, d),
            (None, None) => {}
            (found, expected) => {
                prop_assert!(false, "engine {:?} vs reference {:?}", found, expected)
            }
        }
    }

    #[test]
    fn exact_path_matches_linear_scan((board, start, goal) in arb_board()) {
        let found = find_path(&board, start, goal).unwrap();
        prop_assert_eq!(found, linear_scan_path(&board, start, goal));
    }

    #[test]
    fn paths_are_valid((board, start, goal) in arb_board()) {
        if let Some(path) = find_path(&board, start, goal).unwrap() {
            prop_assert_eq!(path.first().copied(), Some(start));
            prop_assert_eq!(path.last().copied(), Some(goal));
            for p in &path {
                prop_assert!(board.is_walkable(*p));
            }
            for w in path.windows(2) {
                prop_assert!(w[0].is_adjacent_4(w[1]));
            }
        }
    }

    #[test]
    fn repeated_queries_agree((board, start, goal) in arb_board()) {
        let pr = PathRange::new(board.bounds());
        let a = pr.find_path(&board, start, goal).unwrap();
        let b = pr.find_path(&board, start, goal).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn bfs_map_agrees_with_reference((board, start, goal) in arb_board()) {
        let pr = PathRange::new(board.bounds());
        let pather = tilepath_paths::WalkPather::new(&board);
        let map = pr.bfs_map(&pather, &[start], i32::MAX);
        let expected = reference_distance(&board, start, goal).map(|d| d as i32);
        prop_assert_eq!(
            map.is_reachable(goal).then(|| map.at(goal)),
            expected
        );
    }
}

#[test]
fn searches_share_a_grid_across_threads() {
    let board = Board {
        rng: Range::sized(6, 6),
        walkable: vec![true; 36],
    };
    let pr = PathRange::new(board.bounds());
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let (board, pr) = (&board, &pr);
                s.spawn(move || pr.find_path(board, Point::new(0, i), Point::new(5, 5)))
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            let path = h.join().unwrap().unwrap().unwrap();
            assert_eq!(path.len(), 1 + 5 + (5 - i));
        }
    });
}

#[test]
fn unwalkable_goal_is_an_error_not_a_missing_path() {
    let mut board = Board {
        rng: Range::sized(3, 3),
        walkable: vec![true; 9],
    };
    board.walkable[8] = false;
    assert_eq!(
        find_path(&board, Point::new(0, 0), Point::new(2, 2)),
        Err(PathError::Unwalkable(Point::new(2, 2)))
    );
}
