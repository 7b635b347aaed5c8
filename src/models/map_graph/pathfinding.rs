use std::collections::{HashMap, HashSet, VecDeque};

use super::MapGraph;

/// Extension trait for shortest-path queries on `MapGraph`
pub trait Pathfinding {
    /// Find a shortest path between two node ids by edge count.
    ///
    /// Returns the node sequence inclusive of both endpoints, or `None` when
    /// the nodes are not connected. `start == end` yields the single-element
    /// path. Ties between equal-length paths are broken by discovery order,
    /// which follows the adjacency insertion order.
    fn shortest_path(&self, start: &str, end: &str) -> Option<Vec<String>>;
}

impl Pathfinding for MapGraph {
    fn shortest_path(&self, start: &str, end: &str) -> Option<Vec<String>> {
        if !self.contains(start) || !self.contains(end) {
            return None;
        }
        if start == end {
            return Some(vec![start.to_string()]);
        }

        let mut queue: VecDeque<&str> = VecDeque::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut previous: HashMap<&str, &str> = HashMap::new();

        queue.push_back(start);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                break;
            }
            let Some(neighbors) = self.neighbors(current) else {
                continue;
            };
            for next in neighbors {
                if visited.insert(next.as_str()) {
                    previous.insert(next.as_str(), current);
                    queue.push_back(next.as_str());
                }
            }
        }

        if !visited.contains(end) {
            return None;
        }

        // Walk the predecessor chain back to the start. A break in the chain
        // means the bookkeeping disagrees with the visited set; report that
        // as no path rather than returning a partial one.
        let mut path = vec![end.to_string()];
        let mut current = end;
        while current != start {
            let prev = *previous.get(current)?;
            path.push(prev.to_string());
            current = prev;
        }

        path.reverse();
        Some(path)
    }
}
