//! Pivot formulas for the non-linear categories.
//!
//! A category that cannot be expressed as a scale table names a pivot unit
//! and gives every unit a pair of functions into and out of the pivot.
//! Hardness and brightness are empirical approximations, valid only over
//! limited ranges; inputs below a scale's offset clamp to the pivot's zero.

/// One unit of a pivot formula.
#[derive(Debug)]
pub struct FormulaUnit {
    pub name: &'static str,
    pub to_pivot: fn(f64) -> f64,
    pub from_pivot: fn(f64) -> f64,
}

#[derive(Debug)]
pub struct PivotFormula {
    pub pivot: &'static str,
    pub units: &'static [FormulaUnit],
}

impl PivotFormula {
    pub fn unit(&self, name: &str) -> Option<&'static FormulaUnit> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|u| u.name)
    }
}

fn identity(v: f64) -> f64 {
    v
}

// Temperature, through Celsius

fn fahrenheit_to_celsius(v: f64) -> f64 {
    (v - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(v: f64) -> f64 {
    v - 273.15
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

pub static TEMPERATURE: PivotFormula = PivotFormula {
    pivot: "Celsius",
    units: &[
        FormulaUnit { name: "Celsius", to_pivot: identity, from_pivot: identity },
        FormulaUnit { name: "Fahrenheit", to_pivot: fahrenheit_to_celsius, from_pivot: celsius_to_fahrenheit },
        FormulaUnit { name: "Kelvin", to_pivot: kelvin_to_celsius, from_pivot: celsius_to_kelvin },
    ],
};

// Moisture content, through wet-basis percent

fn dry_to_wet(v: f64) -> f64 {
    v / (100.0 + v) * 100.0
}

fn wet_to_dry(w: f64) -> f64 {
    w / (100.0 - w) * 100.0
}

fn ratio_to_wet(v: f64) -> f64 {
    v / (1.0 + v) * 100.0
}

fn wet_to_ratio(w: f64) -> f64 {
    w / (100.0 - w)
}

/// Shared by fabric and wood moisture content.
pub static MOISTURE: PivotFormula = PivotFormula {
    pivot: "% (wet basis)",
    units: &[
        FormulaUnit { name: "% (wet basis)", to_pivot: identity, from_pivot: identity },
        FormulaUnit { name: "% (dry basis)", to_pivot: dry_to_wet, from_pivot: wet_to_dry },
        FormulaUnit { name: "moisture ratio", to_pivot: ratio_to_wet, from_pivot: wet_to_ratio },
    ],
};

// Fuel efficiency, through l/100km. Each conversion is its own inverse.

fn mpg_us(v: f64) -> f64 {
    235.215 / v
}

fn mpg_uk(v: f64) -> f64 {
    282.481 / v
}

fn km_per_litre(v: f64) -> f64 {
    100.0 / v
}

pub static FUEL_EFFICIENCY: PivotFormula = PivotFormula {
    pivot: "l/100km",
    units: &[
        FormulaUnit { name: "mpg (US)", to_pivot: mpg_us, from_pivot: mpg_us },
        FormulaUnit { name: "mpg (UK)", to_pivot: mpg_uk, from_pivot: mpg_uk },
        FormulaUnit { name: "km/l", to_pivot: km_per_litre, from_pivot: km_per_litre },
        FormulaUnit { name: "l/100km", to_pivot: identity, from_pivot: identity },
    ],
};

// Hardness, through HRC: hrc = (v - offset) * slope

fn below_offset_clamped(v: f64, offset: f64, slope: f64) -> f64 {
    if v < offset { 0.0 } else { (v - offset) * slope }
}

fn hrb_to_hrc(v: f64) -> f64 {
    below_offset_clamped(v, 30.0, 0.8)
}

fn hrc_to_hrb(hrc: f64) -> f64 {
    30.0 + hrc / 0.8
}

fn hv_to_hrc(v: f64) -> f64 {
    below_offset_clamped(v, 240.0, 0.1)
}

fn hrc_to_hv(hrc: f64) -> f64 {
    240.0 + hrc / 0.1
}

fn hb_to_hrc(v: f64) -> f64 {
    below_offset_clamped(v, 200.0, 0.1)
}

fn hrc_to_hb(hrc: f64) -> f64 {
    200.0 + hrc / 0.1
}

fn shore_d_to_hrc(v: f64) -> f64 {
    below_offset_clamped(v, 30.0, 0.75)
}

fn hrc_to_shore_d(hrc: f64) -> f64 {
    30.0 + hrc / 0.75
}

pub static HARDNESS: PivotFormula = PivotFormula {
    pivot: "HRC (Rockwell C)",
    units: &[
        FormulaUnit { name: "HRC (Rockwell C)", to_pivot: identity, from_pivot: identity },
        FormulaUnit { name: "HRB (Rockwell B)", to_pivot: hrb_to_hrc, from_pivot: hrc_to_hrb },
        FormulaUnit { name: "HV (Vickers)", to_pivot: hv_to_hrc, from_pivot: hrc_to_hv },
        FormulaUnit { name: "HB (Brinell)", to_pivot: hb_to_hrc, from_pivot: hrc_to_hb },
        FormulaUnit { name: "Shore D", to_pivot: shore_d_to_hrc, from_pivot: hrc_to_shore_d },
    ],
};

// Brightness and whiteness, through % ISO

fn ge_to_iso(v: f64) -> f64 {
    (v * 0.98).max(0.0)
}

fn iso_to_ge(iso: f64) -> f64 {
    iso / 0.98
}

fn tappi_to_iso(v: f64) -> f64 {
    (v * 0.97).max(0.0)
}

fn iso_to_tappi(iso: f64) -> f64 {
    iso / 0.97
}

fn cie_to_iso(v: f64) -> f64 {
    (v * 0.9).max(0.0)
}

fn iso_to_cie(iso: f64) -> f64 {
    iso / 0.9
}

pub static BRIGHTNESS: PivotFormula = PivotFormula {
    pivot: "% ISO",
    units: &[
        FormulaUnit { name: "% ISO", to_pivot: identity, from_pivot: identity },
        FormulaUnit { name: "% GE", to_pivot: ge_to_iso, from_pivot: iso_to_ge },
        FormulaUnit { name: "% TAPPI", to_pivot: tappi_to_iso, from_pivot: iso_to_tappi },
        FormulaUnit { name: "CIE Whiteness", to_pivot: cie_to_iso, from_pivot: iso_to_cie },
    ],
};
