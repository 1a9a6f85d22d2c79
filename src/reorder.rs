//! In-place reordering between natural and frequency order.
//!
//! A permutation is compiled once into its disjoint cycles, so applying it needs one temporary
//! element instead of a second buffer. The cycles are stored back to back in one flat list: each
//! cycle is terminated by a `0`, and the list ends with an empty cycle (a second `0`). Index `0`
//! is a fixed point of every permutation the planner builds, so it can never be part of a cycle.
use crate::planner::Direction;

/// A permutation of `0..size`, compiled into cycles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTable {
    size: usize,
    entries: Vec<usize>,
}

impl CycleTable {
    /// Compile `permutation` (which must map `0` to `0`) into its cycles, skipping fixed points.
    ///
    /// # Panics
    ///
    /// Panics if `permutation[0] != 0`, or if `permutation` is not a bijection on
    /// `0..permutation.len()`.
    pub fn generate(permutation: &[usize]) -> Self {
        let size = permutation.len();
        assert!(size == 0 || permutation[0] == 0);

        let mut visited = vec![false; size];
        for &target in permutation {
            assert!(
                target < size && !visited[target],
                "not a permutation of 0..{size}: {target} is out of range or repeated"
            );
            visited[target] = true;
        }
        visited.fill(false);

        let mut entries = Vec::with_capacity(size + size / 2);

        for x in 0..size {
            if visited[x] {
                continue;
            }
            visited[x] = true;

            let mut fx = permutation[x];
            if fx == x {
                continue;
            }

            entries.push(x);
            while fx != x {
                visited[fx] = true;
                entries.push(fx);
                fx = permutation[fx];
            }
            entries.push(0);
        }
        entries.push(0);

        Self { size, entries }
    }

    /// Size of the permutation this table was built from
    pub fn size(&self) -> usize {
        self.size
    }

    /// The raw sentinel-terminated cycle list
    pub fn as_slice(&self) -> &[usize] {
        &self.entries
    }

    /// Iterate over the cycles, each one in the order it is walked
    pub fn cycles(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.entries
            .split(|&idx| idx == 0)
            .take_while(|cycle| !cycle.is_empty())
    }

    /// Apply the permutation to `buf` in place.
    ///
    /// [`Direction::Forward`] moves `buf[perm[k]]` to `buf[k]`, which takes a transform output
    /// from natural to frequency order. [`Direction::Reverse`] undoes exactly that.
    ///
    /// # Panics
    ///
    /// Panics if `buf.len()` differs from the table size.
    pub fn apply<E: Copy>(&self, buf: &mut [E], direction: Direction) {
        assert_eq!(buf.len(), self.size);

        match direction {
            Direction::Forward => {
                for cycle in self.cycles() {
                    let first = cycle[0];
                    let saved = buf[first];
                    let mut current = first;
                    for &next in &cycle[1..] {
                        buf[current] = buf[next];
                        current = next;
                    }
                    buf[current] = saved;
                }
            }
            Direction::Reverse => {
                for cycle in self.cycles() {
                    let first = cycle[0];
                    let mut carried = buf[first];
                    for &next in &cycle[1..] {
                        carried = std::mem::replace(&mut buf[next], carried);
                    }
                    buf[first] = carried;
                }
            }
        }
    }
}
