//! Raw node assignment.
//!
//! Every pin and wire endpoint is first canonicalized through the snapper,
//! then deduplicated against the points already seen. Two points are the
//! same electrical point when they differ by less than one grid step on
//! each axis independently.
//!
//! Assignment happens in two phases. [`NodeAssigner::get_or_create`] is
//! called once for every known pin so that each electrical point owns an id;
//! afterwards only [`NodeAssigner::lookup`] is used, so later passes can
//! never mint duplicates depending on traversal order.

use std::collections::{HashMap, HashSet};

use crate::config::NetlistConfig;
use crate::error::Result;
use crate::geometry::{Layout, PinSnapper, Point};

use super::types::RawNodeId;

/// Scratch table mapping canonical points to raw node ids.
#[derive(Debug)]
pub struct NodeAssigner {
    snapper: PinSnapper,
    candidates: Vec<Point>,
    ground_keys: HashSet<Point>,
    grid_size: i32,
    /// Canonical points in discovery order
    nodes: Vec<(Point, RawNodeId)>,
    /// Grid cell -> indices into `nodes`
    cells: HashMap<(i64, i64), Vec<usize>>,
    next_node_num: usize,
}

impl NodeAssigner {
    /// Create an empty table for one generation run over `layout`.
    ///
    /// Fails on a non-positive tolerance or grid size, and on a component
    /// whose pins fall outside the coordinate range.
    pub fn new(layout: &Layout, config: &NetlistConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            snapper: PinSnapper::new(config.snap_tolerance),
            candidates: layout.snap_candidates()?,
            ground_keys: layout.ground_anchors().collect(),
            grid_size: config.grid_size,
            nodes: Vec::new(),
            cells: HashMap::new(),
            next_node_num: 1,
        })
    }

    /// Every pin and wire endpoint of the layout, in snapping order.
    pub fn candidates(&self) -> &[Point] {
        &self.candidates
    }

    /// Resolve a point to its id, allocating a new one if no existing
    /// point matches.
    pub fn get_or_create(&mut self, point: Point) -> RawNodeId {
        let key = self.canonical_key(point);
        if self.ground_keys.contains(&key) {
            return RawNodeId::GROUND;
        }
        if let Some(id) = self.find_existing(key) {
            return id;
        }

        let id = RawNodeId(self.next_node_num);
        self.next_node_num += 1;
        let cell = self.cell_of(key);
        let index = self.nodes.len();
        self.cells.entry(cell).or_default().push(index);
        self.nodes.push((key, id));
        id
    }

    /// Resolve a point to an existing id without allocating.
    pub fn lookup(&self, point: Point) -> Option<RawNodeId> {
        let key = self.canonical_key(point);
        if self.ground_keys.contains(&key) {
            return Some(RawNodeId::GROUND);
        }
        self.find_existing(key)
    }

    /// Assigned canonical points and their ids, in discovery order.
    pub fn nodes(&self) -> &[(Point, RawNodeId)] {
        &self.nodes
    }

    /// Number of non-ground raw nodes assigned so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn canonical_key(&self, point: Point) -> Point {
        self.snapper
            .snap(point, self.candidates.iter().copied())
            .unwrap_or(point)
    }

    fn cell_of(&self, point: Point) -> (i64, i64) {
        let grid = i64::from(self.grid_size);
        (i64::from(point.x).div_euclid(grid), i64::from(point.y).div_euclid(grid))
    }

    /// Earliest-assigned point within one grid step of `key` on both axes.
    ///
    /// Any such point lies in one of the nine cells around `key`'s cell, so
    /// only those are scanned. Picking the lowest index keeps the result
    /// identical to a linear scan in discovery order.
    fn find_existing(&self, key: Point) -> Option<RawNodeId> {
        let (cx, cy) = self.cell_of(key);
        let grid = i64::from(self.grid_size);
        let near = |a: i32, b: i32| (i64::from(a) - i64::from(b)).abs() < grid;

        let mut best: Option<usize> = None;
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(indices) = self.cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &idx in indices {
                    let (p, _) = self.nodes[idx];
                    if near(p.x, key.x) && near(p.y, key.y) {
                        best = Some(best.map_or(idx, |b| b.min(idx)));
                    }
                }
            }
        }

        best.map(|idx| self.nodes[idx].1)
    }
}
