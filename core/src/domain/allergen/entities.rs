use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AllergenSeverity {
    High,
    Medium,
    Low,
}

/// Reference entry of the allergen dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllergenInfo {
    pub name: String,
    pub severity: AllergenSeverity,
    pub description: String,
    pub common_names: Vec<String>,
}

/// Static form of `AllergenInfo`, kept as `&'static` data.
#[derive(Debug)]
pub struct AllergenEntry {
    pub name: &'static str,
    pub severity: AllergenSeverity,
    pub description: &'static str,
    pub common_names: &'static [&'static str],
}

impl From<&AllergenEntry> for AllergenInfo {
    fn from(entry: &AllergenEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            severity: entry.severity,
            description: entry.description.to_string(),
            common_names: entry.common_names.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub static ALLERGENS: &[AllergenEntry] = &[
    AllergenEntry {
        name: "Tree Nuts",
        severity: AllergenSeverity::High,
        description: "Can cause severe allergic reactions including anaphylaxis",
        common_names: &[
            "almond", "walnut", "cashew", "pistachio", "pecan", "hazelnut", "brazil nut",
            "macadamia", "pine nut", "chestnut",
        ],
    },
    AllergenEntry {
        name: "Peanuts",
        severity: AllergenSeverity::High,
        description: "Legume that can cause severe allergic reactions",
        common_names: &["peanut", "groundnut", "arachis", "monkey nut", "goober pea"],
    },
    AllergenEntry {
        name: "Gluten",
        severity: AllergenSeverity::Medium,
        description: "Protein found in wheat, barley, and rye",
        common_names: &[
            "wheat", "barley", "rye", "triticale", "spelt", "kamut", "durum", "semolina",
            "bulgur", "couscous", "seitan",
        ],
    },
    AllergenEntry {
        name: "Soy",
        severity: AllergenSeverity::Medium,
        description: "Legume that can cause allergic reactions",
        common_names: &[
            "soy", "soya", "soybean", "edamame", "tofu", "tempeh", "miso", "soy sauce",
            "soy lecithin", "soy protein",
        ],
    },
    AllergenEntry {
        name: "Dairy",
        severity: AllergenSeverity::Medium,
        description: "Milk and milk products",
        common_names: &[
            "milk", "cheese", "yogurt", "butter", "cream", "whey", "casein", "lactose", "ghee",
            "curd", "paneer",
        ],
    },
    AllergenEntry {
        name: "Eggs",
        severity: AllergenSeverity::Medium,
        description: "Chicken eggs and egg products",
        common_names: &[
            "egg", "albumin", "ovalbumin", "lysozyme", "lecithin", "mayonnaise", "marshmallow",
        ],
    },
    AllergenEntry {
        name: "Shellfish",
        severity: AllergenSeverity::High,
        description: "Crustaceans and mollusks",
        common_names: &[
            "shrimp", "prawn", "crab", "lobster", "crayfish", "oyster", "clam", "mussel",
            "scallop", "squid", "octopus",
        ],
    },
    AllergenEntry {
        name: "Fish",
        severity: AllergenSeverity::High,
        description: "Various fish species",
        common_names: &[
            "tuna", "salmon", "cod", "mackerel", "sardine", "anchovy", "bass", "trout",
            "halibut", "snapper",
        ],
    },
    AllergenEntry {
        name: "Sesame",
        severity: AllergenSeverity::Medium,
        description: "Sesame seeds and oil",
        common_names: &["sesame", "sesamum", "tahini", "sesame oil", "gingelly", "til"],
    },
    AllergenEntry {
        name: "Sulfites",
        severity: AllergenSeverity::Low,
        description: "Preservatives that can cause reactions in sensitive individuals",
        common_names: &[
            "sulfite", "sulphite", "sulfur dioxide", "sodium sulfite", "potassium sulfite",
            "calcium sulfite",
        ],
    },
];
