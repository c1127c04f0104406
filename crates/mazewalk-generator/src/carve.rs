//! Randomized path carving on the interior lattice.
//!
//! The interior of a maze (everything inside the outer wall) is modelled as a
//! square of marks. Cells at even `(row, col)` offsets are *nodes*; the cell
//! between two orthogonally adjacent nodes is the wall or opening connecting
//! them. Carving always advances two cells at a time, from node to node.

use mazewalk_core::{Cell, CellGrid, Direction, Position};
use rand::Rng;

/// Which carving pass opened a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathClass {
    /// Paths grown from the start node until the end node is connected.
    Main,
    /// Paths grown from leftover wall nodes.
    Filler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Wall,
    Path(PathClass),
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    dir: Direction,
    merge: bool,
}

/// Counters describing one population run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CarveStats {
    pub(crate) main_passes: usize,
    pub(crate) filler_paths: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct Lattice {
    size: usize,
    marks: Vec<Mark>,
    start: Position,
    end: Position,
    solvable: bool,
    /// Nodes that are still walls, in no particular order.
    wall_nodes: Vec<Position>,
    /// Index of each node in `wall_nodes`, or `None` once it has been opened.
    wall_slots: Vec<Option<usize>>,
}

impl Lattice {
    /// Creates an all-wall lattice with the given interior side length.
    ///
    /// `size` must be odd and at least 3 so that the start and end nodes differ.
    pub(crate) fn new(size: usize) -> Self {
        debug_assert!(size >= 3 && size % 2 == 1);
        let side = size.div_ceil(2);
        let wall_nodes = (0..side)
            .flat_map(|row| (0..side).map(move |col| Position::new(row * 2, col * 2)))
            .collect::<Vec<_>>();
        let wall_slots = (0..wall_nodes.len()).map(Some).collect();
        Self {
            size,
            marks: vec![Mark::Wall; size * size],
            start: Position::new(0, 0),
            end: Position::new(size - 1, size - 1),
            solvable: false,
            wall_nodes,
            wall_slots,
        }
    }

    fn is_node(pos: Position) -> bool {
        pos.row() % 2 == 0 && pos.col() % 2 == 0
    }

    fn node_index(&self, node: Position) -> usize {
        (node.row() / 2) * self.size.div_ceil(2) + node.col() / 2
    }

    fn get(&self, pos: Position) -> Option<Mark> {
        (pos.row() < self.size && pos.col() < self.size)
            .then(|| self.marks[pos.row() * self.size + pos.col()])
    }

    fn set(&mut self, pos: Position, mark: Mark) {
        let previous = std::mem::replace(&mut self.marks[pos.row() * self.size + pos.col()], mark);
        if previous != Mark::Wall || mark == Mark::Wall || !Self::is_node(pos) {
            return;
        }
        let node = self.node_index(pos);
        if let Some(slot) = self.wall_slots[node].take() {
            self.wall_nodes.swap_remove(slot);
            if let Some(&moved) = self.wall_nodes.get(slot) {
                let moved = self.node_index(moved);
                self.wall_slots[moved] = Some(slot);
            }
        }
    }

    fn nodes_marked(&self, mark: Mark) -> Vec<Position> {
        (0..self.size)
            .step_by(2)
            .flat_map(|row| (0..self.size).step_by(2).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.get(pos) == Some(mark))
            .collect()
    }

    fn candidates(&self, pos: Position, class: PathClass) -> Vec<Candidate> {
        Direction::PRIORITY
            .into_iter()
            .filter_map(|dir| {
                let far = pos.moved_in(dir).moved_in(dir);
                match self.get(far)? {
                    Mark::Wall => Some(Candidate { dir, merge: false }),
                    Mark::Path(other) if other != class => Some(Candidate { dir, merge: true }),
                    Mark::Path(_) => None,
                }
            })
            .collect()
    }

    /// Grows a path of `class` from `origin` until it dead-ends or merges into
    /// a path of another class.
    pub(crate) fn carve_path<R>(&mut self, origin: Position, class: PathClass, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.set(origin, Mark::Path(class));
        let mut pos = origin;
        loop {
            let candidates = self.candidates(pos, class);
            if candidates.is_empty() {
                return;
            }
            let Candidate { dir, merge } = candidates[rng.random_range(0..candidates.len())];
            let link = pos.moved_in(dir);
            let far = link.moved_in(dir);
            self.set(link, Mark::Path(class));
            self.set(far, Mark::Path(class));
            if far == self.end {
                self.solvable = true;
            }
            if merge {
                return;
            }
            pos = far;
        }
    }

    /// Carves main paths until the end node is connected, then fills every
    /// remaining wall node with filler paths.
    pub(crate) fn populate<R>(&mut self, rng: &mut R) -> CarveStats
    where
        R: Rng + ?Sized,
    {
        let mut stats = CarveStats::default();
        self.set(self.start, Mark::Path(PathClass::Main));

        while !self.solvable {
            stats.main_passes += 1;
            for node in self.nodes_marked(Mark::Path(PathClass::Main)) {
                self.carve_path(node, PathClass::Main, rng);
                if self.solvable {
                    break;
                }
            }
        }

        while !self.wall_nodes.is_empty() {
            let node = self.wall_nodes[rng.random_range(0..self.wall_nodes.len())];
            self.carve_path(node, PathClass::Filler, rng);
            stats.filler_paths += 1;
        }

        stats
    }

    /// Converts the lattice into a full grid, adding the one-cell outer wall.
    pub(crate) fn into_grid(self) -> CellGrid {
        let Self {
            size,
            marks,
            start,
            end,
            ..
        } = self;
        let marks = &marks;
        let outer = size + 2;
        let rows = (0..outer).map(|row| {
            (0..outer).map(move |col| {
                if row == 0 || col == 0 || row == outer - 1 || col == outer - 1 {
                    return Cell::Wall;
                }
                let pos = Position::new(row - 1, col - 1);
                if pos == start {
                    Cell::Start
                } else if pos == end {
                    Cell::End
                } else {
                    match marks[pos.row() * size + pos.col()] {
                        Mark::Wall => Cell::Wall,
                        Mark::Path(_) => Cell::Path,
                    }
                }
            })
        });
        CellGrid::from_rows(rows).expect("carved lattice satisfies the grid invariants")
    }

    #[cfg(test)]
    fn is_solvable(&self) -> bool {
        self.solvable
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn rng(seed: u64) -> Pcg64 {
        Pcg64::seed_from_u64(seed)
    }

    #[test]
    fn test_new_lattice_is_all_wall() {
        let lattice = Lattice::new(5);
        assert_eq!(lattice.nodes_marked(Mark::Wall).len(), 9);
        assert_eq!(lattice.wall_nodes.len(), 9);
        assert!(lattice.nodes_marked(Mark::Path(PathClass::Main)).is_empty());
        assert!(!lattice.is_solvable());
    }

    #[test]
    fn test_wall_list_tracks_opened_nodes() {
        let mut lattice = Lattice::new(5);
        lattice.set(Position::new(0, 1), Mark::Path(PathClass::Main));
        assert_eq!(lattice.wall_nodes.len(), 9);
        lattice.set(Position::new(2, 2), Mark::Path(PathClass::Filler));
        lattice.set(Position::new(0, 0), Mark::Path(PathClass::Main));
        lattice.set(Position::new(0, 0), Mark::Path(PathClass::Filler));
        assert_eq!(lattice.wall_nodes.len(), 7);

        let mut listed = lattice.wall_nodes.clone();
        listed.sort();
        assert_eq!(listed, lattice.nodes_marked(Mark::Wall));
        for (slot, &node) in lattice.wall_nodes.iter().enumerate() {
            assert_eq!(lattice.wall_slots[lattice.node_index(node)], Some(slot));
        }
    }

    #[test]
    fn test_candidates_at_corner() {
        let lattice = Lattice::new(5);
        let candidates = lattice.candidates(Position::new(0, 0), PathClass::Main);
        let dirs: Vec<_> = candidates.iter().map(|c| c.dir).collect();
        assert_eq!(dirs, [Direction::Down, Direction::Right]);
        assert!(candidates.iter().all(|c| !c.merge));
    }

    #[test]
    fn test_candidates_merge_only_into_other_class() {
        let mut lattice = Lattice::new(5);
        lattice.set(Position::new(0, 0), Mark::Path(PathClass::Main));
        lattice.set(Position::new(2, 2), Mark::Path(PathClass::Filler));
        lattice.set(Position::new(0, 2), Mark::Path(PathClass::Filler));

        let from_main = lattice.candidates(Position::new(0, 0), PathClass::Main);
        let from_main: Vec<_> = from_main.iter().map(|c| (c.dir, c.merge)).collect();
        assert_eq!(from_main, [(Direction::Down, false), (Direction::Right, true)]);

        let from_filler = lattice.candidates(Position::new(0, 2), PathClass::Filler);
        let merges: Vec<_> = from_filler.iter().filter(|c| c.merge).map(|c| c.dir).collect();
        assert_eq!(merges, [Direction::Left]);
        assert!(
            from_filler
                .iter()
                .any(|c| c.dir == Direction::Right && !c.merge)
        );
    }

    #[test]
    fn test_carve_path_opens_links_between_nodes() {
        let mut lattice = Lattice::new(7);
        lattice.carve_path(Position::new(0, 0), PathClass::Main, &mut rng(1));
        for node in lattice.nodes_marked(Mark::Path(PathClass::Main)) {
            assert!(node.row() % 2 == 0 && node.col() % 2 == 0);
        }
        // Odd-odd cells are never opened.
        for row in (1..7).step_by(2) {
            for col in (1..7).step_by(2) {
                assert_eq!(lattice.get(Position::new(row, col)), Some(Mark::Wall));
            }
        }
    }

    #[test]
    fn test_carve_path_stops_after_merge() {
        let mut lattice = Lattice::new(5);
        lattice.set(Position::new(0, 0), Mark::Path(PathClass::Main));
        // The filler path at (0, 2) can only merge left or continue right/down.
        for node in [
            Position::new(2, 0),
            Position::new(2, 2),
            Position::new(2, 4),
            Position::new(0, 4),
        ] {
            lattice.set(node, Mark::Path(PathClass::Filler));
        }
        lattice.carve_path(Position::new(0, 2), PathClass::Filler, &mut rng(3));
        assert_eq!(
            lattice.get(Position::new(0, 1)),
            Some(Mark::Path(PathClass::Filler))
        );
        // The merge node takes on the class of the path that reached it.
        assert_eq!(
            lattice.get(Position::new(0, 0)),
            Some(Mark::Path(PathClass::Filler))
        );
    }

    #[test]
    fn test_populate_clears_all_wall_nodes() {
        let mut with_filler = 0;
        for seed in 0..32 {
            let mut lattice = Lattice::new(9);
            let stats = lattice.populate(&mut rng(seed));
            assert!(lattice.is_solvable());
            assert!(stats.main_passes >= 1);
            assert!(lattice.nodes_marked(Mark::Wall).is_empty());
            assert!(lattice.wall_nodes.is_empty());
            if stats.filler_paths > 0 {
                with_filler += 1;
            }
        }
        // Main paths alone often cover a lattice this small, but not always.
        assert!(with_filler > 0);
        assert!(with_filler < 32);
    }

    #[test]
    fn test_into_grid_places_markers_and_border() {
        let mut lattice = Lattice::new(5);
        lattice.populate(&mut rng(7));
        let grid = lattice.into_grid();
        assert_eq!((grid.height(), grid.width()), (7, 7));
        assert_eq!(grid.start(), Position::new(1, 1));
        assert_eq!(grid.end(), Position::new(5, 5));
    }
}
