use serde::{Deserialize, Serialize};

/// List-level subject record returned by the bulk listing. Partial by
/// contract: the extended stats and powers only exist at detail level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alien {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    pub strength: f64,
    pub speed: f64,
    pub intelligence: f64,
    pub durability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agility: Option<f64>,
}

impl Alien {
    /// The four required stats in canonical feature order.
    pub const fn core_stats(&self) -> [f64; 4] {
        [self.strength, self.speed, self.intelligence, self.durability]
    }
}

/// Extended six-dimension stat block carried only by detail records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlienStats {
    pub intelligence: f64,
    pub strength: f64,
    pub speed: f64,
    pub durability: f64,
    pub power: f64,
    pub combat: f64,
}

/// Detail-level subject record from `/aliens/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlienDetail {
    pub id: String,
    pub name: String,
    pub original_name: String,
    pub image_url: String,
    pub stats: AlienStats,
    pub super_powers: Vec<String>,
}

/// One ranked entry inside a similarity response. Stats are absent at
/// this level; the full record is fetched on demand.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityApiItem {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub image_url: String,
    pub score: f64,
}

impl SimilarityApiItem {
    /// Partial list-level record with zeroed stats.
    pub fn into_alien(self) -> Alien {
        Alien {
            id: self.id,
            name: self.display_name,
            image: self.image_url,
            species: if self.original_name.is_empty() {
                None
            } else {
                Some(self.original_name)
            },
            strength: 0.0,
            speed: 0.0,
            intelligence: 0.0,
            durability: 0.0,
            energy: None,
            agility: None,
        }
    }
}

/// Wire shape of `/similarity/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityApiResponse {
    #[allow(dead_code)]
    pub query: String,
    #[allow(dead_code)]
    pub metric: String,
    pub similar: Vec<SimilarityApiItem>,
    pub opposite: Option<SimilarityApiItem>,
}

/// Normalized (subject, score) pair handed to the UI, score in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult {
    pub alien: Alien,
    pub similarity: f64,
}

/// Ranked neighbours plus the single farthest subject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityData {
    pub similar: Vec<SimilarityResult>,
    pub opposite: Option<SimilarityResult>,
}

impl From<SimilarityApiResponse> for SimilarityData {
    fn from(response: SimilarityApiResponse) -> Self {
        Self {
            similar: response
                .similar
                .into_iter()
                .map(|item| SimilarityResult {
                    similarity: item.score,
                    alien: item.into_alien(),
                })
                .collect(),
            opposite: response.opposite.map(|item| SimilarityResult {
                similarity: item.score,
                alien: item.into_alien(),
            }),
        }
    }
}

/// One partition group from `/cluster`. Indices are consecutive from 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterGroup {
    pub cluster: usize,
    pub aliens: Vec<Alien>,
}

/// A subject's position in the derived 2D embedding space. Coordinates
/// are unbounded; rendering normalizes them into a viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<usize>,
}

/// Request body for `/cluster`.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterRequest {
    pub algorithm: String,
    pub k: usize,
    pub features: Vec<String>,
}

/// Request body for `/reduce`.
#[derive(Debug, Clone, Serialize)]
pub struct ReduceRequest {
    pub method: String,
    pub features: Vec<String>,
}
