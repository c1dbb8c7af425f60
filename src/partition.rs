//! Shipment partitioner.
//!
//! Splits a batch into vehicle loads. Each round picks, among the subsets of
//! the largest feasible size, the one carrying the most weight; ties go to the
//! subset whose farthest parcel is nearest. The search is exhaustive, so it is
//! only meant for batches of tens of parcels.

use tracing::debug;

use crate::error::PlanError;
use crate::traits::Consignment;

/// Parcels carried together on one vehicle round trip.
#[derive(Debug, Clone)]
pub struct ShipmentGroup<'a, C> {
    parcels: Vec<&'a C>,
    total_weight: u64,
    max_distance: u32,
}

impl<'a, C: Consignment> ShipmentGroup<'a, C> {
    fn from_parcels(parcels: Vec<&'a C>) -> Self {
        let total_weight = parcels.iter().map(|p| u64::from(p.weight())).sum();
        let max_distance = parcels.iter().map(|p| p.distance()).max().unwrap_or(0);
        Self {
            parcels,
            total_weight,
            max_distance,
        }
    }

    /// Members in ascending weight order.
    pub fn parcels(&self) -> &[&'a C] {
        &self.parcels
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Farthest destination in the group; sets the round-trip duration.
    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }
}

/// Partition parcels into shipment groups, in the order they should ship.
///
/// Every parcel ends up in exactly one group and no group exceeds `capacity`.
/// A parcel heavier than `capacity` can never ship, so the whole batch is
/// rejected up front.
pub fn partition<C: Consignment>(parcels: &[C], capacity: u32) -> Result<Vec<ShipmentGroup<'_, C>>, PlanError> {
    if let Some(parcel) = parcels.iter().find(|p| p.weight() > capacity) {
        return Err(PlanError::ParcelTooHeavy {
            id: parcel.id().to_string(),
            weight: parcel.weight(),
            capacity,
        });
    }

    let mut remaining: Vec<&C> = parcels.iter().collect();
    remaining.sort_by_key(|p| p.weight());

    let mut groups = Vec::new();
    while !remaining.is_empty() {
        let size = max_subset_size(&remaining, capacity);
        let picks = best_subset(&remaining, size, capacity);

        let mut taken = vec![false; remaining.len()];
        for &idx in &picks {
            taken[idx] = true;
        }
        let members: Vec<&C> = picks.iter().map(|&idx| remaining[idx]).collect();

        let mut position = 0;
        remaining.retain(|_| {
            let keep = !taken[position];
            position += 1;
            keep
        });

        let group = ShipmentGroup::from_parcels(members);
        debug!(
            "group {}: {} parcels, weight {}, max distance {}, {} left",
            groups.len(),
            group.len(),
            group.total_weight(),
            group.max_distance(),
            remaining.len()
        );
        groups.push(group);
    }

    Ok(groups)
}

/// Largest number of parcels that fit together.
///
/// `sorted` must be in ascending weight order: the lightest `k` parcels are the
/// lightest possible combination of size `k`.
pub(crate) fn max_subset_size<C: Consignment>(sorted: &[&C], capacity: u32) -> usize {
    let mut sum = 0u64;
    sorted
        .iter()
        .take_while(|p| {
            sum += u64::from(p.weight());
            sum <= u64::from(capacity)
        })
        .count()
}

/// Indices (ascending) of the best feasible subset of exactly `size` parcels.
fn best_subset<C: Consignment>(sorted: &[&C], size: usize, capacity: u32) -> Vec<usize> {
    let mut search = SubsetSearch {
        items: sorted,
        size,
        capacity: u64::from(capacity),
        picks: Vec::with_capacity(size),
        weight: 0,
        max_distance: 0,
        best: None,
    };
    search.visit(0);

    search.best.map(|best| best.picks).unwrap_or_default()
}

#[derive(Debug)]
struct Candidate {
    picks: Vec<usize>,
    weight: u64,
    max_distance: u32,
}

/// Include/exclude depth-first search. Recursion depth is bounded by the
/// number of remaining parcels.
struct SubsetSearch<'s, 'a, C> {
    items: &'s [&'a C],
    size: usize,
    capacity: u64,
    picks: Vec<usize>,
    weight: u64,
    max_distance: u32,
    best: Option<Candidate>,
}

impl<C: Consignment> SubsetSearch<'_, '_, C> {
    fn visit(&mut self, index: usize) {
        if self.picks.len() == self.size {
            self.record();
            return;
        }

        // Not enough parcels left to fill the subset.
        if self.items.len() - index < self.size - self.picks.len() {
            return;
        }

        let item = self.items[index];
        let item_weight = u64::from(item.weight());

        // Items are sorted by weight, so if this one does not fit neither does
        // anything after it.
        if self.weight + item_weight > self.capacity {
            return;
        }

        let prev_distance = self.max_distance;
        self.picks.push(index);
        self.weight += item_weight;
        self.max_distance = self.max_distance.max(item.distance());

        self.visit(index + 1);

        self.picks.pop();
        self.weight -= item_weight;
        self.max_distance = prev_distance;

        self.visit(index + 1);
    }

    fn record(&mut self) {
        let better = match &self.best {
            None => true,
            Some(best) => {
                self.weight > best.weight || (self.weight == best.weight && self.max_distance < best.max_distance)
            }
        };

        if better {
            self.best = Some(Candidate {
                picks: self.picks.clone(),
                weight: self.weight,
                max_distance: self.max_distance,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parcel;

    fn parcels(specs: &[(&str, u32, u32)]) -> Vec<Parcel> {
        specs
            .iter()
            .enumerate()
            .map(|(index, &(id, weight, distance))| Parcel::new(id, weight, distance, index))
            .collect()
    }

    fn ids<C: Consignment>(group: &ShipmentGroup<'_, C>) -> Vec<String> {
        group.parcels().iter().map(|p| p.id().to_string()).collect()
    }

    #[test]
    fn test_max_subset_size() {
        let batch = parcels(&[("a", 50, 0), ("b", 75, 0), ("c", 110, 0), ("d", 155, 0), ("e", 175, 0)]);
        let sorted: Vec<&Parcel> = batch.iter().collect();

        assert_eq!(max_subset_size(&sorted, 200), 2);
        assert_eq!(max_subset_size(&sorted, 125), 2);
        assert_eq!(max_subset_size(&sorted, 124), 1);
        assert_eq!(max_subset_size(&sorted, 49), 0);
        assert_eq!(max_subset_size(&sorted, 1000), 5);
    }

    #[test]
    fn test_reference_batch_groups() {
        let batch = parcels(&[
            ("PKG1", 50, 30),
            ("PKG2", 75, 125),
            ("PKG3", 175, 100),
            ("PKG4", 110, 60),
            ("PKG5", 155, 95),
        ]);
        let groups = partition(&batch, 200).unwrap();

        let all: Vec<Vec<String>> = groups.iter().map(ids).collect();
        assert_eq!(
            all,
            vec![
                vec!["PKG2".to_string(), "PKG4".to_string()],
                vec!["PKG3".to_string()],
                vec!["PKG5".to_string()],
                vec!["PKG1".to_string()],
            ]
        );
        assert_eq!(groups[0].total_weight(), 185);
        assert_eq!(groups[0].max_distance(), 125);
    }

    #[test]
    fn test_heavier_combination_beats_lightest_prefix() {
        // Lightest pair is 10 + 20, but 20 + 75 also fits and carries more.
        let batch = parcels(&[("a", 10, 1), ("b", 20, 1), ("c", 75, 1), ("d", 95, 1)]);
        let groups = partition(&batch, 100).unwrap();
        assert_eq!(ids(&groups[0]), vec!["b", "c"]);
    }

    #[test]
    fn test_tie_breaks_on_shorter_max_distance() {
        // Both {a, d} and {b, c} weigh 100; {b, c} has the nearer farthest drop.
        let batch = parcels(&[("a", 40, 90), ("b", 45, 20), ("c", 55, 30), ("d", 60, 10)]);
        let groups = partition(&batch, 100).unwrap();
        assert_eq!(ids(&groups[0]), vec!["b", "c"]);
        assert_eq!(groups[0].max_distance(), 30);
    }

    #[test]
    fn test_covers_every_parcel_once() {
        let batch = parcels(&[
            ("p0", 12, 5),
            ("p1", 40, 8),
            ("p2", 33, 2),
            ("p3", 7, 9),
            ("p4", 50, 1),
            ("p5", 21, 4),
            ("p6", 50, 6),
            ("p7", 3, 3),
        ]);
        let groups = partition(&batch, 60).unwrap();

        let mut seen: Vec<usize> = groups
            .iter()
            .flat_map(|g| g.parcels().iter().map(|p| p.index()))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..batch.len()).collect::<Vec<_>>());

        for group in &groups {
            assert!(group.total_weight() <= 60);
            assert!(!group.is_empty());
        }
    }

    #[test]
    fn test_overweight_parcel_is_rejected() {
        let batch = parcels(&[("ok", 10, 1), ("big", 201, 1)]);
        let err = partition(&batch, 200).unwrap_err();
        assert_eq!(
            err,
            PlanError::ParcelTooHeavy {
                id: "big".to_string(),
                weight: 201,
                capacity: 200
            }
        );
    }

    #[test]
    fn test_empty_batch() {
        let batch: Vec<Parcel> = Vec::new();
        assert!(partition(&batch, 200).unwrap().is_empty());
    }

    #[test]
    fn test_zero_weight_parcels_ship_together() {
        let batch = parcels(&[("a", 0, 5), ("b", 0, 7), ("c", 10, 1)]);
        let groups = partition(&batch, 10).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }
}
