use std::sync::OnceLock;

use crate::data::models::Alien;

static CATALOG: OnceLock<Vec<Alien>> = OnceLock::new();

/// The bundled subject catalog: loaded once at first access, read-only
/// for the lifetime of the process. This is the substitute dataset for
/// every query the remote service cannot answer.
pub fn catalog() -> &'static [Alien] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

/// Looks up a bundled subject by identifier.
pub fn find_by_id(id: &str) -> Option<&'static Alien> {
    catalog().iter().find(|alien| alien.id == id)
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    image: &str,
    species: &str,
    strength: f64,
    speed: f64,
    intelligence: f64,
    durability: f64,
    energy: f64,
    agility: f64,
) -> Alien {
    Alien {
        id: id.to_string(),
        name: name.to_string(),
        image: image.to_string(),
        species: Some(species.to_string()),
        strength,
        speed,
        intelligence,
        durability,
        energy: Some(energy),
        agility: Some(agility),
    }
}

fn build_catalog() -> Vec<Alien> {
    vec![
        entry(
            "1",
            "Rath",
            "assets/aliens/tiger.png",
            "Appoplexian",
            95.0,
            70.0,
            40.0,
            85.0,
            60.0,
            75.0,
        ),
        entry(
            "2",
            "Astrodactyl",
            "assets/aliens/eagle.png",
            "Pturbosaurian",
            55.0,
            95.0,
            65.0,
            50.0,
            85.0,
            90.0,
        ),
        entry(
            "3",
            "Squidstrictor",
            "assets/aliens/octopus.png",
            "Cephalod-ae",
            80.0,
            45.0,
            90.0,
            70.0,
            40.0,
            85.0,
        ),
        entry(
            "4",
            "Fasttrack",
            "assets/aliens/panther.png",
            "Citrakayah",
            65.0,
            98.0,
            60.0,
            55.0,
            70.0,
            95.0,
        ),
        entry(
            "5",
            "Blitzwolfer",
            "assets/aliens/wolf.png",
            "Loboan",
            75.0,
            80.0,
            70.0,
            75.0,
            65.0,
            85.0,
        ),
        entry(
            "6",
            "Terroranchula",
            "assets/aliens/scorpion.png",
            "Terroranchula",
            70.0,
            65.0,
            55.0,
            90.0,
            75.0,
            60.0,
        ),
        entry(
            "7",
            "Ssserpent",
            "assets/aliens/cobra.png",
            "Unknown",
            50.0,
            75.0,
            85.0,
            45.0,
            90.0,
            80.0,
        ),
        entry(
            "8",
            "Ripjaws",
            "assets/aliens/shark.png",
            "Piscciss Volann",
            85.0,
            90.0,
            50.0,
            80.0,
            55.0,
            88.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_holds_eight_subjects_with_sequential_ids() {
        let aliens = catalog();
        assert_eq!(aliens.len(), 8);

        let ids: Vec<&str> = aliens.iter().map(|alien| alien.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn identifiers_are_unique() {
        let ids: HashSet<&str> = catalog().iter().map(|alien| alien.id.as_str()).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn core_stats_stay_in_range() {
        for alien in catalog() {
            for stat in alien.core_stats() {
                assert!((0.0..=100.0).contains(&stat), "{}: {stat}", alien.name);
            }
        }
    }

    #[test]
    fn find_by_id_resolves_known_and_rejects_unknown() {
        assert_eq!(find_by_id("1").map(|alien| alien.name.as_str()), Some("Rath"));
        assert!(find_by_id("42").is_none());
    }
}
