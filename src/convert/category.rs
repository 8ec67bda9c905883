//! Conversion categories and the industries that group them.

use std::fmt;
use std::str::FromStr;

use super::ConvertError;
use super::formulas::{self, PivotFormula};
use super::tables::{self, UnitTable};

/// How a category converts between its units.
#[derive(Debug, Clone, Copy)]
pub enum CategoryKind {
    /// `value * factor[from] / factor[to]`
    Linear(&'static UnitTable),
    /// Into the pivot with the source unit's formula, out with the target's.
    Formula(&'static PivotFormula),
}

/// Navigation groups of the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    General,
    FabricPaper,
    MetalEngineering,
    PlasticPackaging,
    ConstructionWood,
}

impl Industry {
    pub const ALL: [Industry; 5] = [
        Industry::General,
        Industry::FabricPaper,
        Industry::MetalEngineering,
        Industry::PlasticPackaging,
        Industry::ConstructionWood,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Industry::General => "General Converters",
            Industry::FabricPaper => "Fabric & Paper Industry",
            Industry::MetalEngineering => "Metal & Engineering Industry",
            Industry::PlasticPackaging => "Plastic & Packaging Industry",
            Industry::ConstructionWood => "Construction & Wood Industry",
        }
    }

    /// Categories of this industry in display order.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| c.industry() == self)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Time,
    Speed,
    Area,
    Volume,
    Pressure,
    Energy,
    Power,
    DataStorage,
    Currency,
    Angle,
    FuelEfficiency,
    Frequency,
    Gsm,
    FabricThickness,
    Elongation,
    FabricMoisture,
    Brightness,
    Hardness,
    TensileStrength,
    YieldStrength,
    CoatingThickness,
    FilmThickness,
    BurstingStrength,
    TearResistance,
    ImpactStrength,
    PeelStrength,
    CompressiveStrength,
    WoodMoisture,
    Density,
    FlexuralStrength,
}

struct Descriptor {
    id: &'static str,
    title: &'static str,
    industry: Industry,
    kind: CategoryKind,
}

const fn linear(
    id: &'static str,
    title: &'static str,
    industry: Industry,
    table: &'static UnitTable,
) -> Descriptor {
    Descriptor { id, title, industry, kind: CategoryKind::Linear(table) }
}

const fn formula(
    id: &'static str,
    title: &'static str,
    industry: Industry,
    formula: &'static PivotFormula,
) -> Descriptor {
    Descriptor { id, title, industry, kind: CategoryKind::Formula(formula) }
}

impl Category {
    /// Every category, grouped by industry in display order.
    pub const ALL: [Category; 33] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Time,
        Category::Speed,
        Category::Area,
        Category::Volume,
        Category::Pressure,
        Category::Energy,
        Category::Power,
        Category::DataStorage,
        Category::Currency,
        Category::Angle,
        Category::FuelEfficiency,
        Category::Frequency,
        Category::Gsm,
        Category::FabricThickness,
        Category::Elongation,
        Category::FabricMoisture,
        Category::Brightness,
        Category::Hardness,
        Category::TensileStrength,
        Category::YieldStrength,
        Category::CoatingThickness,
        Category::FilmThickness,
        Category::BurstingStrength,
        Category::TearResistance,
        Category::ImpactStrength,
        Category::PeelStrength,
        Category::CompressiveStrength,
        Category::WoodMoisture,
        Category::Density,
        Category::FlexuralStrength,
    ];

    fn descriptor(self) -> Descriptor {
        use Industry::*;
        match self {
            Category::Length => linear("length", "Length", General, &tables::LENGTH),
            Category::Weight => linear("weight", "Weight", General, &tables::WEIGHT),
            Category::Temperature => formula("temperature", "Temperature", General, &formulas::TEMPERATURE),
            Category::Time => linear("time", "Time", General, &tables::TIME),
            Category::Speed => linear("speed", "Speed", General, &tables::SPEED),
            Category::Area => linear("area", "Area", General, &tables::AREA),
            Category::Volume => linear("volume", "Volume", General, &tables::VOLUME),
            Category::Pressure => linear("pressure", "Pressure", General, &tables::PRESSURE),
            Category::Energy => linear("energy", "Energy", General, &tables::ENERGY),
            Category::Power => linear("power", "Power", General, &tables::POWER),
            Category::DataStorage => linear("data_storage", "Data Storage", General, &tables::DATA_STORAGE),
            Category::Currency => linear("currency", "Currency", General, &tables::CURRENCY),
            Category::Angle => linear("angle", "Angle", General, &tables::ANGLE),
            Category::FuelEfficiency => formula("fuel_efficiency", "Fuel Efficiency", General, &formulas::FUEL_EFFICIENCY),
            Category::Frequency => linear("frequency", "Frequency", General, &tables::FREQUENCY),
            Category::Gsm => linear("gsm", "GSM", FabricPaper, &tables::GSM),
            Category::FabricThickness => linear("fabric_thickness", "Thickness", FabricPaper, &tables::FABRIC_THICKNESS),
            Category::Elongation => linear("elongation", "Elongation", FabricPaper, &tables::ELONGATION),
            Category::FabricMoisture => formula("fabric_moisture", "Moisture Content", FabricPaper, &formulas::MOISTURE),
            Category::Brightness => formula("brightness", "Brightness & Opacity", FabricPaper, &formulas::BRIGHTNESS),
            Category::Hardness => formula("hardness", "Hardness", MetalEngineering, &formulas::HARDNESS),
            Category::TensileStrength => linear("tensile_strength", "Tensile Strength", MetalEngineering, &tables::TENSILE_STRENGTH),
            Category::YieldStrength => linear("yield_strength", "Yield Strength", MetalEngineering, &tables::YIELD_STRENGTH),
            Category::CoatingThickness => linear("coating_thickness", "Coating Thickness", MetalEngineering, &tables::COATING_THICKNESS),
            Category::FilmThickness => linear("film_thickness", "Micron (μm)", PlasticPackaging, &tables::FILM_THICKNESS),
            Category::BurstingStrength => linear("bursting_strength", "Bursting Strength", PlasticPackaging, &tables::BURSTING_STRENGTH),
            Category::TearResistance => linear("tear_resistance", "Tear Resistance", PlasticPackaging, &tables::TEAR_RESISTANCE),
            Category::ImpactStrength => linear("impact_strength", "Impact Strength", PlasticPackaging, &tables::IMPACT_STRENGTH),
            Category::PeelStrength => linear("peel_strength", "Peel Strength", PlasticPackaging, &tables::PEEL_STRENGTH),
            Category::CompressiveStrength => linear("compressive_strength", "Compressive Strength", ConstructionWood, &tables::COMPRESSIVE_STRENGTH),
            Category::WoodMoisture => formula("wood_moisture", "Wood Moisture Content", ConstructionWood, &formulas::MOISTURE),
            Category::Density => linear("density", "Density", ConstructionWood, &tables::DENSITY),
            Category::FlexuralStrength => linear("flexural_strength", "Flexural Strength", ConstructionWood, &tables::FLEXURAL_STRENGTH),
        }
    }

    /// Stable identifier, accepted by [`Category::from_str`].
    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    pub fn title(self) -> &'static str {
        self.descriptor().title
    }

    pub fn industry(self) -> Industry {
        self.descriptor().industry
    }

    pub fn kind(self) -> CategoryKind {
        self.descriptor().kind
    }

    pub fn is_linear(self) -> bool {
        matches!(self.kind(), CategoryKind::Linear(_))
    }

    /// Hardness and brightness scales only correlate loosely; their results are estimates.
    pub fn is_approximate(self) -> bool {
        matches!(self, Category::Hardness | Category::Brightness)
    }

    /// Base unit of a linear table, or the pivot unit of a formula.
    pub fn base_unit(self) -> &'static str {
        match self.kind() {
            CategoryKind::Linear(table) => table.base,
            CategoryKind::Formula(formula) => formula.pivot,
        }
    }

    /// Unit names in display order, exactly as they must be passed to `convert`.
    pub fn units(self) -> Vec<&'static str> {
        match self.kind() {
            CategoryKind::Linear(table) => table.names().collect(),
            CategoryKind::Formula(formula) => formula.names().collect(),
        }
    }

    pub fn has_unit(self, unit: &str) -> bool {
        match self.kind() {
            CategoryKind::Linear(table) => table.lookup(unit).is_some(),
            CategoryKind::Formula(formula) => formula.unit(unit).is_some(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}
