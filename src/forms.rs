// Parsing of menu answers. Kept free of I/O so the menu logic can be tested.
use crate::categories::{BarRaceRequest, CropCategory, CUSTOMIZE, NO_SELECTION};

/// Resolve an answer to one of `options`, by 1-based number or exact name.
/// An empty answer takes the default, the first option.
pub fn resolve_pick(input: &str, options: &[String]) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return options.first().cloned();
    }
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).cloned();
    }
    options.iter().find(|o| o.as_str() == input).cloned()
}

/// Options for a custom crop picker: the placeholder first, then the crops.
pub fn picker_options(crops: &[String]) -> Vec<String> {
    std::iter::once(NO_SELECTION.to_string())
        .chain(crops.iter().filter(|c| c.as_str() != NO_SELECTION).cloned())
        .collect()
}

/// The bar plot type selector: the six categories followed by `customize`.
pub fn plot_type_options() -> Vec<String> {
    CropCategory::ALL
        .iter()
        .map(|c| c.name().to_string())
        .chain(std::iter::once(CUSTOMIZE.to_string()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotType {
    Category(CropCategory),
    Customize,
}

pub fn resolve_plot_type(input: &str) -> Option<PlotType> {
    let name = resolve_pick(input, &plot_type_options())?;
    if name == CUSTOMIZE {
        return Some(PlotType::Customize);
    }
    CropCategory::from_name(&name).map(PlotType::Category)
}

impl PlotType {
    /// Build the request once the custom pickers (if any) have been answered.
    pub fn into_request(self, custom_picks: Vec<String>) -> BarRaceRequest {
        match self {
            PlotType::Category(c) => BarRaceRequest::Category(c),
            PlotType::Customize => BarRaceRequest::Custom(custom_picks),
        }
    }
}
