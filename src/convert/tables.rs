//! Scale tables for the linear categories.
//!
//! Each factor states how many base units one unit is worth. Factors and
//! unit strings are the ones the converter has always displayed, rounding
//! included.

/// Unit name to scale factor, relative to `base` (factor 1).
#[derive(Debug)]
pub struct UnitTable {
    pub base: &'static str,
    pub units: &'static [(&'static str, f64)],
}

impl UnitTable {
    /// Canonical name and factor of `unit`, if the table has it.
    pub fn lookup(&self, unit: &str) -> Option<(&'static str, f64)> {
        self.units.iter().copied().find(|(name, _)| *name == unit)
    }

    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.lookup(unit).map(|(_, factor)| factor)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|(name, _)| *name)
    }
}

// General

pub static LENGTH: UnitTable = UnitTable {
    base: "m",
    units: &[
        ("mm", 0.001),
        ("cm", 0.01),
        ("m", 1.0),
        ("km", 1000.0),
        ("in", 0.0254),
        ("ft", 0.3048),
        ("yd", 0.9144),
        ("mi", 1609.34),
    ],
};

pub static WEIGHT: UnitTable = UnitTable {
    base: "g",
    units: &[
        ("mg", 0.001),
        ("g", 1.0),
        ("kg", 1000.0),
        ("ton", 1_000_000.0),
        ("oz", 28.3495),
        ("lb", 453.592),
        ("st", 6350.29),
        ("ton (US)", 907_185.0),
    ],
};

/// Months are 30 days and years 365 days.
pub static TIME: UnitTable = UnitTable {
    base: "seconds",
    units: &[
        ("milliseconds", 0.001),
        ("seconds", 1.0),
        ("minutes", 60.0),
        ("hours", 3600.0),
        ("days", 86_400.0),
        ("weeks", 604_800.0),
        ("months", 2_592_000.0),
        ("years", 31_536_000.0),
    ],
};

pub static SPEED: UnitTable = UnitTable {
    base: "m/s",
    units: &[
        ("m/s", 1.0),
        ("km/h", 0.277778),
        ("mph", 0.44704),
        ("knot", 0.514444),
        ("ft/s", 0.3048),
    ],
};

pub static AREA: UnitTable = UnitTable {
    base: "sq m",
    units: &[
        ("sq mm", 0.000001),
        ("sq cm", 0.0001),
        ("sq m", 1.0),
        ("hectare", 10_000.0),
        ("sq km", 1_000_000.0),
        ("sq in", 0.00064516),
        ("sq ft", 0.092903),
        ("sq yd", 0.836127),
        ("acre", 4046.86),
        ("sq mi", 2_589_988.11),
    ],
};

pub static VOLUME: UnitTable = UnitTable {
    base: "l",
    units: &[
        ("ml", 0.001),
        ("l", 1.0),
        ("cu cm", 0.001),
        ("cu m", 1000.0),
        ("cu in", 0.0163871),
        ("cu ft", 28.3168),
        ("fl oz", 0.0295735),
        ("gal (US)", 3.78541),
        ("gal (UK)", 4.54609),
    ],
};

pub static PRESSURE: UnitTable = UnitTable {
    base: "Pa",
    units: &[
        ("Pa", 1.0),
        ("kPa", 1000.0),
        ("MPa", 1_000_000.0),
        ("bar", 100_000.0),
        ("psi", 6894.76),
        ("atm", 101_325.0),
        ("mmHg", 133.322),
        ("inHg", 3386.39),
    ],
};

pub static ENERGY: UnitTable = UnitTable {
    base: "J",
    units: &[
        ("J", 1.0),
        ("kJ", 1000.0),
        ("cal", 4.184),
        ("kcal", 4184.0),
        ("Wh", 3600.0),
        ("kWh", 3_600_000.0),
        ("BTU", 1055.06),
        ("ft-lb", 1.35582),
    ],
};

pub static POWER: UnitTable = UnitTable {
    base: "W",
    units: &[
        ("W", 1.0),
        ("kW", 1000.0),
        ("MW", 1_000_000.0),
        ("hp", 745.7),
        ("BTU/h", 0.293071),
        ("ft-lb/s", 1.35582),
    ],
};

const KIB: f64 = 1024.0;

/// Binary multiples: 1 KB is 1024 bytes.
pub static DATA_STORAGE: UnitTable = UnitTable {
    base: "bit",
    units: &[
        ("bit", 1.0),
        ("Byte", 8.0),
        ("KB", 8.0 * KIB),
        ("MB", 8.0 * KIB * KIB),
        ("GB", 8.0 * KIB * KIB * KIB),
        ("TB", 8.0 * KIB * KIB * KIB * KIB),
        ("PB", 8.0 * KIB * KIB * KIB * KIB * KIB),
    ],
};

/// Fixed demonstration rates in USD; never fetched.
pub static CURRENCY: UnitTable = UnitTable {
    base: "USD",
    units: &[
        ("USD", 1.0),
        ("EUR", 1.09),
        ("GBP", 1.27),
        ("JPY", 0.0067),
        ("CAD", 0.74),
        ("AUD", 0.66),
        ("CNY", 0.14),
        ("INR", 0.012),
    ],
};

pub static ANGLE: UnitTable = UnitTable {
    base: "radian",
    units: &[
        ("degree", 0.0174533),
        ("radian", 1.0),
        ("gradian", 0.0157080),
        ("minute of arc", 0.000290888),
        ("second of arc", 4.84814e-6),
    ],
};

pub static FREQUENCY: UnitTable = UnitTable {
    base: "Hz",
    units: &[
        ("Hz", 1.0),
        ("kHz", 1000.0),
        ("MHz", 1_000_000.0),
        ("GHz", 1_000_000_000.0),
        ("rpm", 1.0 / 60.0),
        ("rad/s", 1.0 / (2.0 * 3.14159)),
    ],
};

// Fabric & paper

/// Reams are 500 sheets: 25x38 inch for lb/ream, A0 for kg/ream.
pub static GSM: UnitTable = UnitTable {
    base: "GSM",
    units: &[
        ("GSM", 1.0),
        ("oz/yd²", 33.906),
        ("lb/ream", 1.48),
        ("kg/ream", 0.6719),
    ],
};

pub static FABRIC_THICKNESS: UnitTable = UnitTable {
    base: "mm",
    units: &[
        ("mm", 1.0),
        ("cm", 10.0),
        ("mil", 0.0254),
        ("inch", 25.4),
        ("point (pt)", 0.0352778),
    ],
};

pub static ELONGATION: UnitTable = UnitTable {
    base: "%",
    units: &[
        ("%", 1.0),
        ("mm/mm", 100.0),
        ("in/in", 100.0),
        ("cm/m", 1.0),
    ],
};

// Metal & engineering

const STRESS_KGF_MM2: &[(&str, f64)] = &[
    ("MPa", 1.0),
    ("N/mm²", 1.0),
    ("psi", 0.00689476),
    ("ksi", 6.89476),
    ("kgf/mm²", 9.80665),
];

const STRESS_KG_CM2: &[(&str, f64)] = &[
    ("MPa", 1.0),
    ("N/mm²", 1.0),
    ("psi", 0.00689476),
    ("ksi", 6.89476),
    ("kg/cm²", 0.0980665),
];

pub static TENSILE_STRENGTH: UnitTable = UnitTable {
    base: "MPa",
    units: STRESS_KGF_MM2,
};

pub static YIELD_STRENGTH: UnitTable = UnitTable {
    base: "MPa",
    units: STRESS_KGF_MM2,
};

/// Gauge varies by material; 8.128 μm is an approximation.
pub static COATING_THICKNESS: UnitTable = UnitTable {
    base: "μm",
    units: &[
        ("μm", 1.0),
        ("mil", 25.4),
        ("mm", 1000.0),
        ("inch", 25_400.0),
        ("gauge", 8.128),
    ],
};

// Plastic & packaging

pub static FILM_THICKNESS: UnitTable = UnitTable {
    base: "μm (micron)",
    units: &[
        ("μm (micron)", 1.0),
        ("mil", 25.4),
        ("gauge", 8.128),
        ("mm", 1000.0),
        ("inch", 25_400.0),
    ],
};

pub static BURSTING_STRENGTH: UnitTable = UnitTable {
    base: "kPa",
    units: &[
        ("kPa", 1.0),
        ("psi", 6.89476),
        ("kg/cm²", 98.0665),
        ("bar", 100.0),
    ],
};

pub static TEAR_RESISTANCE: UnitTable = UnitTable {
    base: "N",
    units: &[
        ("N", 1.0),
        ("gf", 0.00980665),
        ("mN", 0.001),
        ("lbf", 4.44822),
        ("kgf", 9.80665),
    ],
};

/// kJ/m² assumes a 1 mm specimen.
pub static IMPACT_STRENGTH: UnitTable = UnitTable {
    base: "J/m",
    units: &[
        ("J/m", 1.0),
        ("ft·lbf/in", 53.3784),
        ("kJ/m²", 1.0),
        ("J/cm", 100.0),
        ("in·lbf/in", 4.44822),
    ],
};

pub static PEEL_STRENGTH: UnitTable = UnitTable {
    base: "N/25mm",
    units: &[
        ("N/25mm", 1.0),
        ("gf/25mm", 0.00980665),
        ("N/in", 0.984252),
        ("lbf/in", 4.44822 * 0.984252),
        ("N/cm", 2.5),
    ],
};

// Construction & wood

pub static COMPRESSIVE_STRENGTH: UnitTable = UnitTable {
    base: "MPa",
    units: STRESS_KG_CM2,
};

pub static DENSITY: UnitTable = UnitTable {
    base: "kg/m³",
    units: &[
        ("kg/m³", 1.0),
        ("g/cm³", 1000.0),
        ("lb/ft³", 16.0185),
        ("lb/in³", 27_679.9),
        ("g/ml", 1000.0),
    ],
};

pub static FLEXURAL_STRENGTH: UnitTable = UnitTable {
    base: "MPa",
    units: STRESS_KG_CM2,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_canonical_name() {
        assert_eq!(LENGTH.lookup("km"), Some(("km", 1000.0)));
        assert_eq!(LENGTH.lookup("KM"), None);
        assert_eq!(WEIGHT.factor("ton (US)"), Some(907_185.0));
    }

    #[test]
    fn test_data_storage_is_binary() {
        assert_eq!(DATA_STORAGE.factor("KB"), Some(8192.0));
        assert_eq!(DATA_STORAGE.factor("PB"), Some(8.0 * 1024f64.powi(5)));
    }

    #[test]
    fn test_shared_stress_tables_differ_in_last_unit() {
        let tensile: Vec<_> = TENSILE_STRENGTH.names().collect();
        let flexural: Vec<_> = FLEXURAL_STRENGTH.names().collect();
        assert_eq!(tensile[4], "kgf/mm²");
        assert_eq!(flexural[4], "kg/cm²");
        assert_eq!(tensile[..4], flexural[..4]);
    }
}
