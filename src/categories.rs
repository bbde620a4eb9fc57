// Fixed crop taxonomy and validation of crop selections.
//
// A selection reaches the aggregator only as a `CropSelection`, which can
// only be built from a non-empty list with the `-` placeholder removed.

use crate::error::DashError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Placeholder shown by every crop picker before the user chooses.
pub const NO_SELECTION: &str = "-";

/// Number of individual crop pickers in the custom form.
pub const CUSTOM_PICKERS: usize = 6;

pub const CUSTOMIZE: &str = "customize";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropCategory {
    Cereals,
    Pulses,
    NutsSeeds,
    Spices,
    VegetablesFruits,
    CashCrops,
}

static BY_NAME: Lazy<HashMap<&'static str, CropCategory>> =
    Lazy::new(|| CropCategory::ALL.iter().map(|c| (c.name(), *c)).collect());

impl CropCategory {
    pub const ALL: [CropCategory; 6] = [
        CropCategory::Cereals,
        CropCategory::Pulses,
        CropCategory::NutsSeeds,
        CropCategory::Spices,
        CropCategory::VegetablesFruits,
        CropCategory::CashCrops,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CropCategory::Cereals => "cereals",
            CropCategory::Pulses => "pulses",
            CropCategory::NutsSeeds => "nuts_seeds",
            CropCategory::Spices => "spices",
            CropCategory::VegetablesFruits => "vegetables_fruits",
            CropCategory::CashCrops => "cash_crops",
        }
    }

    pub fn from_name(name: &str) -> Option<CropCategory> {
        BY_NAME.get(name).copied()
    }

    /// Crop names exactly as they appear in the production table.
    pub fn crops(self) -> &'static [&'static str] {
        match self {
            CropCategory::Cereals => &[
                "Maize",
                "Rice",
                "Wheat",
                "Other Cereals",
                "Barley",
                "Jowar",
                "Ragi",
                "Small millets",
                "Bajra",
            ],
            CropCategory::Pulses => &[
                "Arhar/Tur",
                "Cowpea(Lobia)",
                "Moong(Green Gram)",
                "Urad",
                "Gram",
                "Horse-gram",
                "Masoor",
                "Other Rabi pulses",
                "Peas & beans (Pulses)",
                "Other Summer Pulses",
                "Other Kharif pulses",
                "Khesari",
                "Moth",
            ],
            CropCategory::NutsSeeds => &[
                "Arecanut",
                "Cashewnut",
                "Oilseeds total",
                "other oilseeds",
                "Sunflower",
                "Castor seed",
                "Linseed",
                "Niger seed",
                "Safflower",
            ],
            CropCategory::Spices => &[
                "Black pepper",
                "Dry chillies",
                "Ginger",
                "Rapeseed & Mustard",
                "Sesamum",
                "Turmeric",
                "Coriander",
                "Garlic",
                "Cardamom",
            ],
            CropCategory::VegetablesFruits => &[
                "Banana",
                "Sweet potato",
                "Tapioca",
                "Guar seed",
                "Onion",
                "Potato",
                "Soyabean",
            ],
            CropCategory::CashCrops => &["Sugarcane", "Cotton(lint)", "Groundnut", "Jute", "Tobacco"],
        }
    }
}

/// What the bar-race form submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarRaceRequest {
    Category(CropCategory),
    Custom(Vec<String>),
}

/// A validated, non-empty, duplicate-free list of crop names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropSelection(Vec<String>);

impl CropSelection {
    pub fn crops(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, crop: &str) -> bool {
        self.0.iter().any(|c| c == crop)
    }
}

impl TryFrom<&BarRaceRequest> for CropSelection {
    type Error = DashError;

    fn try_from(request: &BarRaceRequest) -> Result<Self, Self::Error> {
        let picked: Vec<&str> = match request {
            BarRaceRequest::Category(category) => category.crops().to_vec(),
            BarRaceRequest::Custom(picks) => {
                if picks.len() > CUSTOM_PICKERS {
                    return Err(DashError::Validation(format!(
                        "At most {} crops can be compared.",
                        CUSTOM_PICKERS
                    )));
                }
                picks.iter().map(String::as_str).collect()
            }
        };

        let mut crops: Vec<String> = Vec::new();
        for crop in picked {
            if crop == NO_SELECTION || crop.is_empty() {
                continue;
            }
            if !crops.iter().any(|c| c == crop) {
                crops.push(crop.to_string());
            }
        }
        if crops.is_empty() {
            return Err(DashError::Validation("You must select at least one crop.".into()));
        }
        Ok(CropSelection(crops))
    }
}
