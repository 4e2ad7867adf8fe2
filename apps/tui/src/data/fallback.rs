//! Deterministic local substitutes computed from the bundled catalog when
//! the remote service is unavailable. These are placeholders, not real
//! implementations of the remote algorithms: a fixed-divisor Euclidean
//! similarity, a round-robin partition, and a circle layout.

use std::cmp::Ordering;

use crate::data::catalog::{catalog, find_by_id};
use crate::data::models::{
    Alien, AlienDetail, AlienStats, ClusterGroup, ProjectionPoint, SimilarityData,
    SimilarityResult,
};

/// Distance-to-score divisor of the similarity approximation.
const SIMILARITY_DIVISOR: f64 = 200.0;

/// How many neighbours the similarity substitute reports.
const SIMILAR_COUNT: usize = 3;

const PROJECTION_RADIUS: f64 = 0.8;
const PROJECTION_JITTER: f64 = 0.1;
const PROJECTION_CLUSTERS: usize = 3;

/// Synthesizes a detail record from the catalog entry. The catalog carries
/// no ability data, so the powers list is empty; the two extended stats
/// come from the optional secondary attributes.
pub fn detail_for(id: &str) -> Option<AlienDetail> {
    let alien = find_by_id(id)?;

    Some(AlienDetail {
        id: alien.id.clone(),
        name: alien.name.clone(),
        original_name: alien.species.clone().unwrap_or_default(),
        image_url: alien.image.clone(),
        stats: AlienStats {
            intelligence: alien.intelligence,
            strength: alien.strength,
            speed: alien.speed,
            durability: alien.durability,
            power: alien.energy.unwrap_or(0.0),
            combat: alien.agility.unwrap_or(0.0),
        },
        super_powers: Vec::new(),
    })
}

/// Ranks every other catalog entry against the source by Euclidean
/// distance over the four required stats, mapped into [0, 1] via
/// `max(0, 1 - d / 200)`. Top three are "similar", the single lowest is
/// the "opposite". Returns `None` when the id is not in the catalog.
pub fn similarity_for(id: &str) -> Option<SimilarityData> {
    let source = find_by_id(id)?;

    let mut results: Vec<SimilarityResult> = catalog()
        .iter()
        .filter(|alien| alien.id != id)
        .map(|alien| SimilarityResult {
            similarity: (1.0 - euclidean_distance(source, alien) / SIMILARITY_DIVISOR).max(0.0),
            alien: alien.clone(),
        })
        .collect();

    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });

    let opposite = results.last().cloned();
    results.truncate(SIMILAR_COUNT);

    Some(SimilarityData {
        similar: results,
        opposite,
    })
}

/// Round-robin partition in dataset order: the subject at index `i` goes
/// to cluster `i mod k`. Unrelated to the requested features or algorithm.
pub fn clusters_for(k: usize) -> Vec<ClusterGroup> {
    let k = k.max(1);

    let mut groups: Vec<ClusterGroup> = (0..k)
        .map(|cluster| ClusterGroup {
            cluster,
            aliens: Vec::new(),
        })
        .collect();

    for (index, alien) in catalog().iter().enumerate() {
        groups[index % k].aliens.push(alien.clone());
    }

    groups
}

/// Places the subjects evenly around a circle of radius 0.8 with a small
/// per-name jitter. The jitter is hashed from the name rather than drawn
/// from a RNG so fallback layouts are reproducible.
pub fn projection() -> Vec<ProjectionPoint> {
    let total = catalog().len();

    catalog()
        .iter()
        .enumerate()
        .map(|(index, alien)| {
            #[allow(clippy::cast_precision_loss)]
            let angle = (index as f64 / total as f64) * 2.0 * std::f64::consts::PI;
            let (jitter_x, jitter_y) = name_jitter(&alien.name);

            ProjectionPoint {
                id: alien.id.clone(),
                name: alien.name.clone(),
                x: angle.cos().mul_add(PROJECTION_RADIUS, jitter_x),
                y: angle.sin().mul_add(PROJECTION_RADIUS, jitter_y),
                cluster: Some(index % PROJECTION_CLUSTERS),
            }
        })
        .collect()
}

fn euclidean_distance(a: &Alien, b: &Alien) -> f64 {
    a.core_stats()
        .iter()
        .zip(b.core_stats().iter())
        .map(|(lhs, rhs)| (lhs - rhs) * (lhs - rhs))
        .sum::<f64>()
        .sqrt()
}

/// Two jitter components in [-0.1, 0.1), derived from the subject name.
fn name_jitter(name: &str) -> (f64, f64) {
    let hash = name
        .bytes()
        .fold(0_u64, |acc, b| acc.wrapping_mul(31) + u64::from(b));

    #[allow(clippy::cast_precision_loss)]
    let unit = |value: u64| (value % 100) as f64 / 100.0;

    (
        unit(hash).mul_add(2.0 * PROJECTION_JITTER, -PROJECTION_JITTER),
        unit(hash / 100).mul_add(2.0 * PROJECTION_JITTER, -PROJECTION_JITTER),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_synthesis_carries_catalog_stats_and_no_powers() {
        let detail = detail_for("1").unwrap();

        assert_eq!(detail.name, "Rath");
        assert_eq!(detail.original_name, "Appoplexian");
        assert_eq!(detail.stats.strength, 95.0);
        assert_eq!(detail.stats.power, 60.0);
        assert_eq!(detail.stats.combat, 75.0);
        assert!(detail.super_powers.is_empty());
    }

    #[test]
    fn detail_synthesis_rejects_unknown_id() {
        assert!(detail_for("99").is_none());
    }

    #[test]
    fn similarity_excludes_self_and_keeps_scores_in_unit_range() {
        let data = similarity_for("1").unwrap();

        assert_eq!(data.similar.len(), 3);
        for result in data.similar.iter().chain(data.opposite.iter()) {
            assert_ne!(result.alien.id, "1");
            assert!((0.0..=1.0).contains(&result.similarity));
        }
    }

    #[test]
    fn similarity_ranks_nearest_first_for_subject_one() {
        // By hand over (strength, speed, intelligence, durability):
        // d(1,8)=25, d(1,6)=30, d(1,5)=38.7, ..., d(1,7)=75.3 (farthest).
        let data = similarity_for("1").unwrap();

        let similar_ids: Vec<&str> = data
            .similar
            .iter()
            .map(|result| result.alien.id.as_str())
            .collect();
        assert_eq!(similar_ids, ["8", "6", "5"]);

        let opposite = data.opposite.unwrap();
        assert_eq!(opposite.alien.id, "7");

        assert!((data.similar[0].similarity - 0.875).abs() < 1e-9);
        assert!((data.similar[1].similarity - 0.85).abs() < 1e-9);
    }

    #[test]
    fn similarity_scores_clamp_at_zero() {
        let far = Alien {
            id: "x".to_string(),
            name: "x".to_string(),
            image: String::new(),
            species: None,
            strength: 0.0,
            speed: 0.0,
            intelligence: 0.0,
            durability: 0.0,
            energy: None,
            agility: None,
        };
        let near = Alien {
            strength: 100.0,
            speed: 100.0,
            intelligence: 100.0,
            durability: 100.0,
            ..far.clone()
        };

        let distance = euclidean_distance(&far, &near);
        assert!((1.0 - distance / SIMILARITY_DIVISOR).max(0.0) == 0.0);
    }

    #[test]
    fn clustering_is_round_robin_over_dataset_order() {
        let groups = clusters_for(3);

        assert_eq!(groups.len(), 3);
        let sizes: Vec<usize> = groups.iter().map(|group| group.aliens.len()).collect();
        assert_eq!(sizes, [3, 3, 2]);

        for (cluster, group) in groups.iter().enumerate() {
            assert_eq!(group.cluster, cluster);
            for alien in &group.aliens {
                let index = catalog()
                    .iter()
                    .position(|entry| entry.id == alien.id)
                    .unwrap();
                assert_eq!(index % 3, cluster);
            }
        }
    }

    #[test]
    fn clustering_assigns_every_subject_exactly_once() {
        for k in 1..=5 {
            let groups = clusters_for(k);
            let total: usize = groups.iter().map(|group| group.aliens.len()).sum();
            assert_eq!(total, catalog().len());
            assert_eq!(groups.len(), k);
        }
    }

    #[test]
    fn projection_lies_on_the_jittered_circle() {
        let points = projection();
        let total = points.len();
        assert_eq!(total, catalog().len());

        for (index, point) in points.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let angle = (index as f64 / total as f64) * 2.0 * std::f64::consts::PI;

            let dx = point.x - angle.cos() * PROJECTION_RADIUS;
            let dy = point.y - angle.sin() * PROJECTION_RADIUS;
            assert!(dx.abs() <= PROJECTION_JITTER + 1e-9, "{}: {dx}", point.name);
            assert!(dy.abs() <= PROJECTION_JITTER + 1e-9, "{}: {dy}", point.name);

            assert_eq!(point.cluster, Some(index % 3));
        }
    }

    #[test]
    fn projection_is_deterministic() {
        assert_eq!(projection(), projection());
    }
}
