#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Strength,
    Speed,
    Intelligence,
    Durability,
}

impl Feature {
    pub const ALL: [Self; 4] = [
        Self::Strength,
        Self::Speed,
        Self::Intelligence,
        Self::Durability,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Speed => "speed",
            Self::Intelligence => "intelligence",
            Self::Durability => "durability",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Strength),
            1 => Some(Self::Speed),
            2 => Some(Self::Intelligence),
            3 => Some(Self::Durability),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "strength" => Some(Self::Strength),
            "speed" => Some(Self::Speed),
            "intelligence" => Some(Self::Intelligence),
            "durability" => Some(Self::Durability),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Speed => "Speed",
            Self::Intelligence => "Intelligence",
            Self::Durability => "Durability",
        }
    }

    /// Short tag used by the stat bars.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Speed => "SPD",
            Self::Intelligence => "INT",
            Self::Durability => "DUR",
        }
    }
}

/// Distance metric requested from the similarity endpoint. The local
/// fallback accepts any of these but always computes Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cosine,
    Euclidean,
    Manhattan,
}

impl Metric {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cosine => "cosine",
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "cosine" => Some(Self::Cosine),
            "euclidean" => Some(Self::Euclidean),
            "manhattan" => Some(Self::Manhattan),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cosine => "Cosine",
            Self::Euclidean => "Euclidean",
            Self::Manhattan => "Manhattan",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Cosine => Self::Euclidean,
            Self::Euclidean => Self::Manhattan,
            Self::Manhattan => Self::Cosine,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterAlgorithm {
    KMeans,
    Hierarchical,
}

impl ClusterAlgorithm {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KMeans => "kmeans",
            Self::Hierarchical => "hierarchical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "kmeans" => Some(Self::KMeans),
            "hierarchical" => Some(Self::Hierarchical),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::KMeans => "K-Means",
            Self::Hierarchical => "Hierarchical",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::KMeans => Self::Hierarchical,
            Self::Hierarchical => Self::KMeans,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceMethod {
    Pca,
    Umap,
}

impl ReduceMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pca => "pca",
            Self::Umap => "umap",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pca" => Some(Self::Pca),
            "umap" => Some(Self::Umap),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pca => "PCA",
            Self::Umap => "UMAP",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Pca => Self::Umap,
            Self::Umap => Self::Pca,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_parse_round_trips() {
        for feature in Feature::ALL {
            assert_eq!(Feature::parse(feature.as_str()), Some(feature));
        }
        assert_eq!(Feature::parse("charisma"), None);
    }

    #[test]
    fn metric_cycle_covers_all_names() {
        let mut metric = Metric::Cosine;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(metric.as_str());
            metric = metric.next();
        }
        assert_eq!(metric, Metric::Cosine);
        assert_eq!(seen, ["cosine", "euclidean", "manhattan"]);
    }

    #[test]
    fn selector_toggles_flip_back() {
        assert_eq!(
            ClusterAlgorithm::KMeans.toggled().toggled(),
            ClusterAlgorithm::KMeans
        );
        assert_eq!(ReduceMethod::Pca.toggled(), ReduceMethod::Umap);
    }
}
