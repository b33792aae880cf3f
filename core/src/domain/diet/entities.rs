use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct DietRule {
    pub name: &'static str,
    pub description: &'static str,
    pub restrictions: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietCompatibility {
    pub diet: String,
    pub is_compatible: bool,
    /// 0..=100
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub restrictions: Vec<String>,
}

pub static DIETS: &[DietRule] = &[
    DietRule {
        name: "Vegan",
        description: "No animal products or by-products",
        restrictions: &[
            "meat", "dairy", "eggs", "honey", "gelatin", "casein", "whey", "lactose",
        ],
        keywords: &["plant-based", "vegan", "no animal", "dairy-free", "egg-free"],
    },
    DietRule {
        name: "Vegetarian",
        description: "No meat but may include dairy and eggs",
        restrictions: &["meat", "fish", "poultry", "gelatin"],
        keywords: &["vegetarian", "no meat", "plant-based"],
    },
    DietRule {
        name: "Keto",
        description: "Low-carb, high-fat diet",
        restrictions: &["sugar", "starch", "grains", "high-carb vegetables"],
        keywords: &["keto", "low-carb", "high-fat", "ketogenic", "sugar-free"],
    },
    DietRule {
        name: "Paleo",
        description: "Based on foods presumed to be available to Paleolithic humans",
        restrictions: &[
            "grains", "legumes", "dairy", "processed foods", "refined sugar",
        ],
        keywords: &["paleo", "caveman", "primal", "grain-free", "legume-free"],
    },
    DietRule {
        name: "Halal",
        description: "Permissible according to Islamic law",
        restrictions: &["pork", "alcohol", "gelatin from non-halal sources"],
        keywords: &["halal", "permissible", "islamic", "no pork", "no alcohol"],
    },
    DietRule {
        name: "Kosher",
        description: "Foods that conform to Jewish dietary law",
        restrictions: &["pork", "shellfish", "mixing meat and dairy"],
        keywords: &["kosher", "jewish", "no pork", "no shellfish"],
    },
    DietRule {
        name: "Diabetic-Friendly",
        description: "Low glycemic index and sugar content",
        restrictions: &["high-sugar", "refined carbohydrates", "high glycemic foods"],
        keywords: &[
            "diabetic", "low-sugar", "low-glycemic", "sugar-free", "diabetes-friendly",
        ],
    },
    DietRule {
        name: "Gluten-Free",
        description: "No gluten-containing grains",
        restrictions: &["wheat", "barley", "rye", "gluten"],
        keywords: &["gluten-free", "no gluten", "celiac-friendly", "wheat-free"],
    },
    DietRule {
        name: "Dairy-Free",
        description: "No milk or milk products",
        restrictions: &["milk", "dairy", "lactose", "casein", "whey"],
        keywords: &["dairy-free", "lactose-free", "no dairy", "milk-free"],
    },
    DietRule {
        name: "Low-Sodium",
        description: "Reduced salt content",
        restrictions: &["high-sodium", "salt", "sodium chloride"],
        keywords: &["low-sodium", "low-salt", "reduced sodium", "salt-free"],
    },
];
